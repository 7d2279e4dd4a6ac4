//! Question API endpoints.

use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
};

use super::{parse_body, success, ApiResult};
use crate::db::TriviaStore;
use crate::errors::AppError;
use crate::models::QuestionsRequest;
use crate::query::parse_page;
use crate::service::{self, Deleted, QuestionListing, Submission};
use crate::AppState;

/// Raw `?key=value` pairs, kept in order so repeated keys survive.
pub type QueryPairs = Vec<(String, String)>;

/// Read `?page=N` leniently: the first `page` value wins, and a missing,
/// non-integer or undecodable value means page 1.
pub fn page_param(query: Result<Query<QueryPairs>, QueryRejection>) -> i64 {
    let pairs = match query {
        Ok(Query(pairs)) => pairs,
        Err(e) => {
            tracing::debug!("Ignoring undecodable query string: {}", e);
            return parse_page(None);
        }
    };

    parse_page(
        pairs
            .iter()
            .find(|(key, _)| key == "page")
            .map(|(_, value)| value.as_str()),
    )
}

/// GET /questions?page=N - One page of questions plus all categories.
pub async fn list_questions<S: TriviaStore>(
    State(state): State<AppState<S>>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> ApiResult<QuestionListing> {
    success(service::list_questions(state.store.as_ref(), page_param(query)).await?)
}

/// DELETE /questions/{id} - Delete a question.
pub async fn delete_question<S: TriviaStore>(
    State(state): State<AppState<S>>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Deleted> {
    let Path(id) = id.map_err(|e| AppError::NotFound(format!("Invalid question id: {}", e)))?;

    success(service::delete_question(state.store.as_ref(), id).await?)
}

/// POST /questions?page=N - Search by `searchTerm`, or create a question.
pub async fn submit_question<S: TriviaStore>(
    State(state): State<AppState<S>>,
    query: Result<Query<QueryPairs>, QueryRejection>,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<Submission> {
    let body =
        body.map_err(|e| AppError::Unprocessable(format!("Unreadable question body: {}", e)))?;
    let request: QuestionsRequest = parse_body(&body)
        .map_err(|e| AppError::Unprocessable(format!("Malformed question body: {}", e)))?;

    success(service::submit_question(state.store.as_ref(), request, page_param(query)).await?)
}
