//! Quiz API endpoint.

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
};

use super::{parse_body, success, ApiResult};
use crate::db::TriviaStore;
use crate::errors::AppError;
use crate::models::QuizRequest;
use crate::service::{self, QuizTurn};
use crate::AppState;

/// POST /quizzes - Next random question the player has not seen.
pub async fn next_quiz_question<S: TriviaStore>(
    State(state): State<AppState<S>>,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<QuizTurn> {
    let body = body.map_err(|e| AppError::BadRequest(format!("Unreadable quiz body: {}", e)))?;
    let request: QuizRequest = parse_body(&body)?;

    success(service::next_quiz_question(state.store.as_ref(), request).await?)
}
