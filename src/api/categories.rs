//! Category API endpoints.

use axum::extract::{rejection::PathRejection, Path, State};

use super::{success, ApiResult};
use crate::db::TriviaStore;
use crate::errors::AppError;
use crate::service::{self, CategoryListing, QuestionListing};
use crate::AppState;

/// GET /categories - Map of category id to label.
pub async fn list_categories<S: TriviaStore>(
    State(state): State<AppState<S>>,
) -> ApiResult<CategoryListing> {
    success(service::list_categories(state.store.as_ref()).await?)
}

/// GET /categories/{category_id}/questions - Every question in a category.
pub async fn list_category_questions<S: TriviaStore>(
    State(state): State<AppState<S>>,
    category_id: Result<Path<i64>, PathRejection>,
) -> ApiResult<QuestionListing> {
    let Path(category_id) =
        category_id.map_err(|e| AppError::NotFound(format!("Invalid category id: {}", e)))?;

    success(service::list_by_category(state.store.as_ref(), category_id).await?)
}
