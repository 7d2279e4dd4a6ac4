//! In-memory store for exercising the operations without SQLite.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use super::TriviaStore;
use crate::errors::AppError;
use crate::models::{Category, NewQuestion, Question};

#[derive(Default)]
struct Tables {
    categories: Vec<Category>,
    questions: Vec<Question>,
    next_id: i64,
}

/// Vec-backed store. Flip [`MemoryStore::set_failing`] to make every call
/// return a database error.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
    failing: AtomicBool,
}

impl MemoryStore {
    pub fn with_categories(labels: &[&str]) -> Self {
        let store = Self::default();
        {
            let mut tables = store.tables.lock().unwrap();
            tables.categories = labels
                .iter()
                .enumerate()
                .map(|(i, label)| Category {
                    id: i as i64 + 1,
                    category_type: label.to_string(),
                })
                .collect();
        }
        store
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), AppError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::Database("store unavailable".to_string()));
        }
        Ok(())
    }
}

impl TriviaStore for MemoryStore {
    async fn all_categories(&self) -> Result<Vec<Category>, AppError> {
        self.check()?;
        Ok(self.tables.lock().unwrap().categories.clone())
    }

    async fn all_questions(&self) -> Result<Vec<Question>, AppError> {
        self.check()?;
        Ok(self.tables.lock().unwrap().questions.clone())
    }

    async fn questions_in_category(&self, category_id: i64) -> Result<Vec<Question>, AppError> {
        self.check()?;
        Ok(self
            .tables
            .lock()
            .unwrap()
            .questions
            .iter()
            .filter(|q| q.category == category_id)
            .cloned()
            .collect())
    }

    async fn find_question(&self, id: i64) -> Result<Option<Question>, AppError> {
        self.check()?;
        Ok(self
            .tables
            .lock()
            .unwrap()
            .questions
            .iter()
            .find(|q| q.id == id)
            .cloned())
    }

    async fn insert_question(&self, question: &NewQuestion) -> Result<Question, AppError> {
        self.check()?;
        let mut tables = self.tables.lock().unwrap();
        tables.next_id += 1;
        let created = Question {
            id: tables.next_id,
            question: question.question.clone(),
            answer: question.answer.clone(),
            category: question.category,
            difficulty: question.difficulty,
        };
        tables.questions.push(created.clone());
        Ok(created)
    }

    async fn remove_question(&self, id: i64) -> Result<(), AppError> {
        self.check()?;
        self.tables.lock().unwrap().questions.retain(|q| q.id != id);
        Ok(())
    }
}
