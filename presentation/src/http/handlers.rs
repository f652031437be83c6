//! Endpoint handlers
//!
//! Each handler decodes its request, runs one use case and shapes the
//! response body. None of them hold state between requests.

use crate::http::AppState;
use crate::http::dto::{
    CategoriesResponse, CreateQuestionRequest, CreatedResponse, DeletedResponse,
    FilteredQuestionsResponse, PageQuery, QuestionsPageResponse, QuizRequest, QuizResponse,
    SearchRequest, category_map,
};
use crate::http::error::ApiError;
use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
};
use tracing::debug;
use trivia_application::{
    CreateQuestionUseCase, DeleteQuestionUseCase, ListCategoriesUseCase,
    ListCategoryQuestionsInput, ListCategoryQuestionsUseCase, ListQuestionsInput,
    ListQuestionsUseCase, NextQuizQuestionUseCase, SearchQuestionsUseCase,
};
use trivia_domain::{CategoryId, Page, QuestionId};

fn page_of(query: Result<Query<PageQuery>, QueryRejection>) -> Page {
    let query = query.map(|Query(q)| q).unwrap_or_default();
    Page::parse(query.page.as_deref())
}

fn body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    payload.map(|Json(body)| body).map_err(|rejection| {
        debug!("Rejected request body: {}", rejection);
        ApiError::BadRequest
    })
}

/// `GET /categories`
pub(crate) async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = ListCategoriesUseCase::new(state.repository())
        .execute()
        .await?;

    Ok(Json(CategoriesResponse {
        categories: category_map(&categories),
    }))
}

/// `GET /questions?page=N`
pub(crate) async fn list_questions(
    State(state): State<AppState>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<QuestionsPageResponse>, ApiError> {
    let output = ListQuestionsUseCase::new(state.repository())
        .execute(ListQuestionsInput::new(page_of(query)))
        .await?;

    Ok(Json(QuestionsPageResponse {
        success: true,
        questions: output.questions,
        total_questions: output.total_questions,
        categories: category_map(&output.categories),
        current_category: output.categories.into_iter().map(|c| c.kind).collect(),
    }))
}

/// `GET /categories/{id}/questions?page=N`
pub(crate) async fn list_category_questions(
    State(state): State<AppState>,
    category: Result<Path<i64>, PathRejection>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<FilteredQuestionsResponse>, ApiError> {
    let Path(category) = category.map_err(|_| ApiError::NotFound)?;
    let input = ListCategoryQuestionsInput::new(CategoryId::new(category), page_of(query));

    let output = ListCategoryQuestionsUseCase::new(state.repository())
        .execute(input)
        .await?;

    Ok(Json(FilteredQuestionsResponse {
        success: true,
        questions: output.questions,
        total_questions: output.total_questions,
        current_category: output.current_category.map(|c| c.kind),
    }))
}

/// `POST /questions`
pub(crate) async fn create_question(
    State(state): State<AppState>,
    payload: Result<Json<CreateQuestionRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let question = body(payload)?.into_new_question()?;

    let id = CreateQuestionUseCase::new(state.repository())
        .execute(question)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            success: true,
            created: id,
        }),
    ))
}

/// `POST /questions/search`
pub(crate) async fn search_questions(
    State(state): State<AppState>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<FilteredQuestionsResponse>, ApiError> {
    let term = body(payload)?.into_term()?;

    let output = SearchQuestionsUseCase::new(state.repository())
        .execute(term)
        .await?;

    Ok(Json(FilteredQuestionsResponse {
        success: true,
        questions: output.questions,
        total_questions: output.total_questions,
        current_category: None,
    }))
}

/// `DELETE /questions/{id}`
pub(crate) async fn delete_question(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<DeletedResponse>, ApiError> {
    let Path(id) = id.map_err(|_| ApiError::NotFound)?;

    let deleted = DeleteQuestionUseCase::new(state.repository())
        .execute(QuestionId::new(id))
        .await?;

    Ok(Json(DeletedResponse {
        success: true,
        deleted,
    }))
}

/// `POST /quizzes`
pub(crate) async fn next_quiz_question(
    State(state): State<AppState>,
    payload: Result<Json<QuizRequest>, JsonRejection>,
) -> Result<Json<QuizResponse>, ApiError> {
    let input = body(payload)?.into_input()?;

    let question = NextQuizQuestionUseCase::new(state.repository())
        .execute(input)
        .await?;

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}

/// Any path no route matches
pub(crate) async fn not_found() -> ApiError {
    ApiError::NotFound
}
