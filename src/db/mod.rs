//! Database module for SQLite persistence.
//!
//! Handlers reach the store only through [`TriviaStore`]; [`Repository`] is
//! the SQLite implementation.

#[cfg(test)]
mod memory;
mod repository;

#[cfg(test)]
pub use memory::*;
pub use repository::*;

use std::future::Future;
use std::path::Path;
use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::errors::AppError;
use crate::models::{Category, NewQuestion, Question};

/// Categories inserted into an empty store at startup.
pub const DEFAULT_CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

/// Data-access primitives the operations are written against.
///
/// Every list is ordered by ascending id.
pub trait TriviaStore: Send + Sync + 'static {
    /// All categories.
    fn all_categories(&self) -> impl Future<Output = Result<Vec<Category>, AppError>> + Send;

    /// All questions.
    fn all_questions(&self) -> impl Future<Output = Result<Vec<Question>, AppError>> + Send;

    /// Questions whose `category` equals `category_id`.
    fn questions_in_category(
        &self,
        category_id: i64,
    ) -> impl Future<Output = Result<Vec<Question>, AppError>> + Send;

    /// A single question by id.
    fn find_question(
        &self,
        id: i64,
    ) -> impl Future<Output = Result<Option<Question>, AppError>> + Send;

    /// Insert a question; the store assigns the id.
    fn insert_question(
        &self,
        question: &NewQuestion,
    ) -> impl Future<Output = Result<Question, AppError>> + Send;

    /// Remove a question by id. Removing a missing row is not an error.
    fn remove_question(&self, id: i64) -> impl Future<Output = Result<(), AppError>> + Send;
}

/// Initialize the database connection pool and run migrations.
pub async fn init_database(db_path: &Path) -> Result<SqlitePool, sqlx::Error> {
    // Ensure the parent directory exists
    if let Some(parent) = db_path.parent() {
        tokio::fs::create_dir_all(parent).await.ok();
    }

    let db_url = format!("sqlite:{}?mode=rwc", db_path.display());

    let options = SqliteConnectOptions::from_str(&db_url)?
        .create_if_missing(true)
        .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
        .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    run_migrations(&pool).await?;

    Ok(pool)
}

/// Run database migrations.
async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS categories (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            type TEXT NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    // AUTOINCREMENT keeps deleted ids from being handed out again, so a new
    // question always sorts last.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS questions (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            question TEXT NOT NULL,
            answer TEXT NOT NULL,
            category INTEGER NOT NULL,
            difficulty INTEGER NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_questions_category ON questions(category);")
        .execute(pool)
        .await?;

    Ok(())
}

/// Insert [`DEFAULT_CATEGORIES`] when the categories table is empty.
///
/// Returns the number of categories inserted.
pub async fn seed_default_categories(repo: &Repository) -> Result<usize, AppError> {
    if !repo.all_categories().await?.is_empty() {
        return Ok(0);
    }

    for category_type in DEFAULT_CATEGORIES {
        repo.insert_category(category_type).await?;
    }

    Ok(DEFAULT_CATEGORIES.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_seed_only_fills_empty_store() {
        let temp_dir = TempDir::new().unwrap();
        let pool = init_database(&temp_dir.path().join("seed.sqlite"))
            .await
            .unwrap();
        let repo = Repository::new(pool);

        assert_eq!(seed_default_categories(&repo).await.unwrap(), 6);
        assert_eq!(seed_default_categories(&repo).await.unwrap(), 0);

        let categories = repo.all_categories().await.unwrap();
        assert_eq!(categories.len(), 6);
        assert_eq!(categories[0].id, 1);
        assert_eq!(categories[0].category_type, "Science");
        assert_eq!(categories[5].category_type, "Sports");
    }

    #[tokio::test]
    async fn test_migrations_are_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("twice.sqlite");

        let pool = init_database(&path).await.unwrap();
        pool.close().await;

        assert!(init_database(&path).await.is_ok());
    }
}
