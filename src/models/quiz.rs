//! Request body of `POST /quizzes`.

use serde::Deserialize;

use super::LooseInt;
use crate::errors::AppError;

/// Category chosen by the player. The client sends `id: 0` for "all".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizCategory {
    #[serde(default)]
    pub id: Option<LooseInt>,
    #[serde(default, rename = "type")]
    pub category_type: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Option<Vec<i64>>,
    #[serde(default)]
    pub quiz_category: Option<QuizCategory>,
}

impl QuizRequest {
    /// Category to draw from, or `None` to draw from every question.
    pub fn category_filter(&self) -> Result<Option<i64>, AppError> {
        match self.quiz_category.as_ref().and_then(|c| c.id.as_ref()) {
            Some(id) if id.is_truthy() => id.to_i64().map(Some),
            _ => Ok(None),
        }
    }

    pub fn previous_questions(&self) -> &[i64] {
        self.previous_questions.as_deref().unwrap_or_default()
    }
}
