//! # Trivia Routes
//!
//! Endpoints for categories, questions, search and quiz play.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, Query, State,
    },
    routing::{delete, get, post},
    Json, Router,
};
use tracing::info;

use crate::quiz::CategoryScope;

use super::errors::{ApiError, ApiResult};
use super::pagination::PageWindow;
use super::request::{CreateQuestionRequest, QuizRequest, SearchRequest};
use super::response::{
    category_map, CategoriesResponse, CategoryQuestionsResponse, CreatedResponse,
    DeletedResponse, QuestionPageResponse, QuizResponse, SearchResponse,
};
use super::state::TriviaState;

type SharedState = Arc<TriviaState>;

/// Create trivia routes
pub fn trivia_routes(state: SharedState) -> Router {
    Router::new()
        .route("/categories", get(list_categories_handler))
        .route("/categories/:id/questions", get(category_questions_handler))
        .route(
            "/questions",
            get(list_questions_handler).post(create_question_handler),
        )
        .route("/questions/search", post(search_questions_handler))
        .route("/questions/:id", delete(delete_question_handler))
        .route("/quizzes", post(play_quiz_handler))
        .with_state(state)
}

// ==================
// Helper Functions
// ==================

/// Non-integer ids cannot name anything, so they are not found
fn path_id(path: Result<Path<i64>, PathRejection>) -> ApiResult<i64> {
    path.map(|Path(id)| id)
        .map_err(|e| ApiError::NotFound(e.body_text()))
}

// ==================
// Category Handlers
// ==================

async fn list_categories_handler(
    State(state): State<SharedState>,
) -> ApiResult<Json<CategoriesResponse>> {
    let categories = state.store.list_categories().await?;
    Ok(Json(CategoriesResponse::new(category_map(categories))))
}

async fn category_questions_handler(
    State(state): State<SharedState>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<CategoryQuestionsResponse>> {
    let id = path_id(path)?;

    let category = state
        .store
        .get_category(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("category {}", id)))?;

    let questions = state.store.questions_in_category(category.id).await?;
    Ok(Json(CategoryQuestionsResponse::new(questions, category.kind)))
}

// ==================
// Question Handlers
// ==================

async fn list_questions_handler(
    State(state): State<SharedState>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Json<QuestionPageResponse>> {
    let window = PageWindow::from_query(&params)?;

    let total = state.store.count_questions().await?;
    if window.is_past_end(total) {
        return Err(ApiError::NotFound(format!(
            "page {} is past the last of {} questions",
            window.page, total
        )));
    }

    let questions = state
        .store
        .list_questions(window.offset, window.limit)
        .await?;
    let categories = category_map(state.store.list_categories().await?);

    Ok(Json(QuestionPageResponse::new(questions, total, categories)))
}

async fn create_question_handler(
    State(state): State<SharedState>,
    payload: Result<Json<CreateQuestionRequest>, JsonRejection>,
) -> ApiResult<Json<CreatedResponse>> {
    let Json(request) = payload.map_err(|e| ApiError::Unprocessable(e.body_text()))?;
    let question = request.validate()?;

    if state.store.get_category(question.category).await?.is_none() {
        return Err(ApiError::Unprocessable(format!(
            "category {} does not exist",
            question.category
        )));
    }

    let created = state.store.insert_question(question).await?;
    info!(id = created.id, category = created.category, "Question created");

    Ok(Json(CreatedResponse::new(created.id)))
}

async fn search_questions_handler(
    State(state): State<SharedState>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> ApiResult<Json<SearchResponse>> {
    let Json(request) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let term = request.term()?;

    let questions = state.store.search_questions(&term).await?;
    Ok(Json(SearchResponse::new(questions)))
}

async fn delete_question_handler(
    State(state): State<SharedState>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<DeletedResponse>> {
    let id = path_id(path)?;

    if !state.store.delete_question(id).await? {
        return Err(ApiError::NotFound(format!("question {}", id)));
    }

    info!(id, "Question deleted");
    Ok(Json(DeletedResponse::new(id)))
}

// ==================
// Quiz Handlers
// ==================

async fn play_quiz_handler(
    State(state): State<SharedState>,
    payload: Result<Json<QuizRequest>, JsonRejection>,
) -> ApiResult<Json<QuizResponse>> {
    let Json(request) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let round = request.into_round()?;

    if let CategoryScope::Only(id) = round.scope {
        if state.store.get_category(id).await?.is_none() {
            return Err(ApiError::NotFound(format!("category {}", id)));
        }
    }

    let question = state
        .quiz
        .next_question(state.store.as_ref(), &round)
        .await?;

    Ok(Json(QuizResponse::new(question)))
}
