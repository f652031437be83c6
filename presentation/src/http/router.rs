//! Axum router configuration
//!
//! ```text
//! /
//! ├── /categories                 GET
//! ├── /categories/:id/questions   GET
//! ├── /questions                  GET, POST
//! ├── /questions/search           POST
//! ├── /questions/:id              DELETE
//! └── /quizzes                    POST
//! ```
//!
//! Every response passes through [`cross_origin`], which answers preflight
//! requests, stamps the CORS headers and gives bare 405s the JSON error body.

use crate::http::AppState;
use crate::http::error::ApiError;
use crate::http::handlers::{
    create_question, delete_question, list_categories, list_category_questions, list_questions,
    next_quiz_question, not_found, search_questions,
};
use axum::{
    Router,
    extract::Request,
    http::{HeaderMap, HeaderValue, Method, StatusCode, header},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};

const ALLOW_HEADERS: &str = "Content-Type,Authorization,true";
const ALLOW_METHODS: &str = "GET,PATCH,POST,DELETE,OPTIONS";

/// Build the complete router over the given state
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/:id/questions", get(list_category_questions))
        .route("/questions", get(list_questions).post(create_question))
        .route("/questions/search", post(search_questions))
        .route("/questions/:id", delete(delete_question))
        .route("/quizzes", post(next_quiz_question))
        .fallback(not_found)
        .layer(middleware::from_fn(cross_origin))
        .with_state(state)
}

fn stamp_cors(headers: &mut HeaderMap) {
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOW_HEADERS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOW_METHODS),
    );
}

/// Any-origin CORS for every path
pub(crate) async fn cross_origin(request: Request, next: Next) -> Response {
    if request.method() == Method::OPTIONS {
        let mut response = StatusCode::NO_CONTENT.into_response();
        stamp_cors(response.headers_mut());
        return response;
    }

    let mut response = next.run(request).await;

    if response.status() == StatusCode::METHOD_NOT_ALLOWED {
        let allow = response.headers().get(header::ALLOW).cloned();
        response = ApiError::MethodNotAllowed.into_response();
        if let Some(allow) = allow {
            response.headers_mut().insert(header::ALLOW, allow);
        }
    }

    stamp_cors(response.headers_mut());
    response
}
