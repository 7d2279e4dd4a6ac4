//! Trivia operations.
//!
//! Each operation fetches rows through a [`TriviaStore`], applies the query
//! transforms and returns a serializable payload or an [`AppError`] already
//! carrying the status it must surface with.

use serde::Serialize;

use crate::db::TriviaStore;
use crate::errors::AppError;
use crate::models::{category_map, CategoryMap, Question, QuestionsRequest, QuizRequest};
use crate::query;

/// Payload of `GET /categories`.
#[derive(Debug, Serialize)]
pub struct CategoryListing {
    pub categories: CategoryMap,
}

/// A list of questions with its count.
///
/// `categories` is only present on the general listing; `current_category`
/// is always null.
#[derive(Debug, Serialize)]
pub struct QuestionListing {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<CategoryMap>,
    pub current_category: Option<String>,
}

impl QuestionListing {
    fn new(questions: Vec<Question>, total_questions: usize) -> Self {
        Self {
            questions,
            total_questions,
            categories: None,
            current_category: None,
        }
    }
}

/// Payload of `DELETE /questions/{id}`.
#[derive(Debug, Serialize)]
pub struct Deleted {
    pub deleted: i64,
}

/// Payload of `POST /questions`: search results, or nothing beyond the
/// success flag for a creation.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Submission {
    Search(QuestionListing),
    Created {},
}

/// Payload of `POST /quizzes`. A null question means the quiz is exhausted.
#[derive(Debug, Serialize)]
pub struct QuizTurn {
    pub question: Option<Question>,
}

pub async fn list_categories<S: TriviaStore>(store: &S) -> Result<CategoryListing, AppError> {
    let categories = store.all_categories().await?;
    Ok(CategoryListing {
        categories: category_map(categories),
    })
}

/// One page of all questions, plus every category.
pub async fn list_questions<S: TriviaStore>(
    store: &S,
    page: i64,
) -> Result<QuestionListing, AppError> {
    let questions = store.all_questions().await?;
    let current = query::paginate(&questions, page);
    let categories = category_map(store.all_categories().await?);

    if current.is_empty() {
        return Err(AppError::NotFound(format!("No questions on page {}", page)));
    }

    Ok(QuestionListing {
        categories: Some(categories),
        ..QuestionListing::new(current, questions.len())
    })
}

/// Delete a question by id and echo the id back.
pub async fn delete_question<S: TriviaStore>(store: &S, id: i64) -> Result<Deleted, AppError> {
    let found = store
        .find_question(id)
        .await
        .map_err(AppError::into_unprocessable)?;

    if found.is_none() {
        return Err(AppError::NotFound(format!("Question {} not found", id)));
    }

    store
        .remove_question(id)
        .await
        .map_err(AppError::into_unprocessable)?;

    tracing::info!("Deleted question {}", id);
    Ok(Deleted { deleted: id })
}

/// Search by `searchTerm` when present, otherwise create a question.
pub async fn submit_question<S: TriviaStore>(
    store: &S,
    request: QuestionsRequest,
    page: i64,
) -> Result<Submission, AppError> {
    let result = match request.search_term() {
        Some(term) => search(store, term, page).await.map(Submission::Search),
        None => create(store, request).await.map(|()| Submission::Created {}),
    };
    result.map_err(AppError::into_unprocessable)
}

async fn search<S: TriviaStore>(
    store: &S,
    term: &str,
    page: i64,
) -> Result<QuestionListing, AppError> {
    let matches = query::search_questions(store.all_questions().await?, term);
    tracing::debug!("Search '{}' matched {} questions", term, matches.len());

    Ok(QuestionListing::new(
        query::paginate(&matches, page),
        matches.len(),
    ))
}

async fn create<S: TriviaStore>(store: &S, request: QuestionsRequest) -> Result<(), AppError> {
    let new_question = request.into_new_question()?;
    let created = store.insert_question(&new_question).await?;
    tracing::info!(
        "Created question {} in category {}",
        created.id,
        created.category
    );
    Ok(())
}

/// Every question in one category, unpaginated.
pub async fn list_by_category<S: TriviaStore>(
    store: &S,
    category_id: i64,
) -> Result<QuestionListing, AppError> {
    let questions = store.questions_in_category(category_id).await?;
    let total = questions.len();
    Ok(QuestionListing::new(questions, total))
}

/// Draw a random question not yet played.
pub async fn next_quiz_question<S: TriviaStore>(
    store: &S,
    request: QuizRequest,
) -> Result<QuizTurn, AppError> {
    draw(store, &request)
        .await
        .map_err(AppError::into_bad_request)
}

async fn draw<S: TriviaStore>(store: &S, request: &QuizRequest) -> Result<QuizTurn, AppError> {
    let questions = match request.category_filter()? {
        Some(category_id) => store.questions_in_category(category_id).await?,
        None => store.all_questions().await?,
    };

    if questions.is_empty() {
        let label = request
            .quiz_category
            .as_ref()
            .and_then(|c| c.category_type.as_deref())
            .unwrap_or("all");
        return Err(AppError::NotFound(format!(
            "No quiz questions for category '{}'",
            label
        )));
    }

    let candidates = query::exclude_seen(questions, request.previous_questions());
    Ok(QuizTurn {
        question: query::choose(&candidates),
    })
}
