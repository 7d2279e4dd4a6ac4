//! Question model and the request body of `POST /questions`.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// A stored trivia question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

/// A validated question ready to be inserted. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

/// Integer field that the client may send either as a number or as a
/// decimal string (`"category": "3"`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum LooseInt {
    Number(i64),
    Text(String),
}

impl LooseInt {
    /// Zero and the empty string are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            LooseInt::Number(n) => *n != 0,
            LooseInt::Text(s) => !s.is_empty(),
        }
    }

    /// Resolve to an integer; a string that is not a decimal integer fails.
    pub fn to_i64(&self) -> Result<i64, AppError> {
        match self {
            LooseInt::Number(n) => Ok(*n),
            LooseInt::Text(s) => s
                .trim()
                .parse()
                .map_err(|_| AppError::Unprocessable(format!("'{}' is not an integer", s))),
        }
    }
}

/// Body of `POST /questions`: either a search (`searchTerm`) or a new question.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuestionsRequest {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub category: Option<LooseInt>,
    #[serde(default)]
    pub difficulty: Option<LooseInt>,
    #[serde(default, rename = "searchTerm")]
    pub search_term: Option<String>,
}

impl QuestionsRequest {
    /// The search term, if this request is a search.
    pub fn search_term(&self) -> Option<&str> {
        self.search_term.as_deref().filter(|term| !term.is_empty())
    }

    /// Validate the create-mode fields.
    ///
    /// A missing or falsy field is a bad request; a field that is present but
    /// cannot be read as an integer is unprocessable.
    pub fn into_new_question(self) -> Result<NewQuestion, AppError> {
        let question = self.question.filter(|q| !q.is_empty());
        let answer = self.answer.filter(|a| !a.is_empty());
        let category = self.category.filter(LooseInt::is_truthy);
        let difficulty = self.difficulty.filter(LooseInt::is_truthy);

        match (question, answer, category, difficulty) {
            (Some(question), Some(answer), Some(category), Some(difficulty)) => Ok(NewQuestion {
                question,
                answer,
                category: category.to_i64()?,
                difficulty: difficulty.to_i64()?,
            }),
            _ => Err(AppError::BadRequest(
                "question, answer, category and difficulty are required".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> QuestionsRequest {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_create_mode_accepts_string_category() {
        let new = parse(json!({
            "question": "What is H2O?",
            "answer": "Water",
            "category": "1",
            "difficulty": 2
        }))
        .into_new_question()
        .unwrap();

        assert_eq!(new.category, 1);
        assert_eq!(new.difficulty, 2);
    }

    #[test]
    fn test_zero_difficulty_is_rejected() {
        let err = parse(json!({
            "question": "q",
            "answer": "a",
            "category": 1,
            "difficulty": 0
        }))
        .into_new_question()
        .unwrap_err();

        assert_eq!(err.error_code(), 400);
    }

    #[test]
    fn test_empty_answer_is_rejected() {
        let err = parse(json!({
            "question": "q",
            "answer": "",
            "category": 1,
            "difficulty": 1
        }))
        .into_new_question()
        .unwrap_err();

        assert_eq!(err.error_code(), 400);
    }

    #[test]
    fn test_non_numeric_category_is_unprocessable() {
        let err = parse(json!({
            "question": "q",
            "answer": "a",
            "category": "science",
            "difficulty": 1
        }))
        .into_new_question()
        .unwrap_err();

        assert_eq!(err.error_code(), 422);
    }

    #[test]
    fn test_empty_search_term_means_create() {
        assert_eq!(parse(json!({"searchTerm": ""})).search_term(), None);
        assert_eq!(parse(json!({"searchTerm": null})).search_term(), None);
        assert_eq!(parse(json!({"searchTerm": "title"})).search_term(), Some("title"));
    }
}
