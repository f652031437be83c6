//! Boundary error kinds and their fixed JSON responses
//!
//! Detailed causes are logged here and never returned to the client.

use crate::http::dto::ErrorResponse;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{debug, error, warn};
use trivia_application::ApplicationError;
use trivia_domain::DomainError;

/// Errors surfaced at the HTTP boundary
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    #[error("bad request")]
    BadRequest,

    #[error("resource not found")]
    NotFound,

    #[error("method not allowed")]
    MethodNotAllowed,

    #[error("unprocessable")]
    Unprocessable,

    #[error("internal server error")]
    Internal,
}

impl ApiError {
    pub fn status(self) -> StatusCode {
        match self {
            ApiError::BadRequest => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ApplicationError> for ApiError {
    fn from(error: ApplicationError) -> Self {
        match error {
            ApplicationError::BadRequest(detail) => {
                debug!("Bad request: {}", detail);
                ApiError::BadRequest
            }
            ApplicationError::NotFound(detail) => {
                debug!("Not found: {}", detail);
                ApiError::NotFound
            }
            ApplicationError::Unprocessable(detail) => {
                warn!("Unprocessable: {}", detail);
                ApiError::Unprocessable
            }
            ApplicationError::Internal(detail) => {
                error!("Internal error: {}", detail);
                ApiError::Internal
            }
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        ApplicationError::from(error).into()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            success: false,
            error: status.as_u16(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
