//! SQLite repository.

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use super::TriviaStore;
use crate::errors::AppError;
use crate::models::{Category, NewQuestion, Question};

/// Database repository for all data operations.
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a category. Categories have no HTTP write path; this is used
    /// for seeding.
    pub async fn insert_category(&self, category_type: &str) -> Result<Category, AppError> {
        let id = sqlx::query("INSERT INTO categories (type) VALUES (?)")
            .bind(category_type)
            .execute(&self.pool)
            .await?
            .last_insert_rowid();

        Ok(Category {
            id,
            category_type: category_type.to_string(),
        })
    }
}

impl TriviaStore for Repository {
    async fn all_categories(&self) -> Result<Vec<Category>, AppError> {
        let rows = sqlx::query("SELECT id, type FROM categories ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.iter().map(category_from_row).collect())
    }

    async fn all_questions(&self) -> Result<Vec<Question>, AppError> {
        let rows = sqlx::query(
            "SELECT id, question, answer, category, difficulty FROM questions ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(question_from_row).collect())
    }

    async fn questions_in_category(&self, category_id: i64) -> Result<Vec<Question>, AppError> {
        let rows = sqlx::query(
            "SELECT id, question, answer, category, difficulty FROM questions WHERE category = ? ORDER BY id",
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(question_from_row).collect())
    }

    async fn find_question(&self, id: i64) -> Result<Option<Question>, AppError> {
        let row = sqlx::query(
            "SELECT id, question, answer, category, difficulty FROM questions WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(question_from_row))
    }

    async fn insert_question(&self, question: &NewQuestion) -> Result<Question, AppError> {
        let id = sqlx::query(
            "INSERT INTO questions (question, answer, category, difficulty) VALUES (?, ?, ?, ?)",
        )
        .bind(&question.question)
        .bind(&question.answer)
        .bind(question.category)
        .bind(question.difficulty)
        .execute(&self.pool)
        .await?
        .last_insert_rowid();

        Ok(Question {
            id,
            question: question.question.clone(),
            answer: question.answer.clone(),
            category: question.category,
            difficulty: question.difficulty,
        })
    }

    async fn remove_question(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM questions WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            tracing::debug!("Question {} was already gone at removal", id);
        }

        Ok(())
    }
}

// ==================== HELPER FUNCTIONS ====================

fn category_from_row(row: &SqliteRow) -> Category {
    Category {
        id: row.get("id"),
        category_type: row.get("type"),
    }
}

fn question_from_row(row: &SqliteRow) -> Question {
    Question {
        id: row.get("id"),
        question: row.get("question"),
        answer: row.get("answer"),
        category: row.get("category"),
        difficulty: row.get("difficulty"),
    }
}
