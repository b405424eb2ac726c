//! Request-time errors and their HTTP mapping.
//!
//! Every error body has the shape `{"error": "<message>"}`. Storage faults are
//! logged and answered with a generic message.

use crate::database::RepoError;
use crate::domain::ValidationError;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

pub const NOT_FOUND_MESSAGE: &str = "No Records Found";
pub const INVALID_ID_MESSAGE: &str = "Invalid ID";

#[derive(Debug, Error)]
pub enum ApiError {
    /// Bad input: malformed body, missing or ill-formatted field, bad path id (400)
    #[error("{0}")]
    Validation(String),

    /// Nothing matched (404)
    #[error("{}", NOT_FOUND_MESSAGE)]
    NotFound,

    /// The database failed (500, logged)
    #[error(transparent)]
    Storage(#[from] RepoError),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            Self::Storage(e) => {
                tracing::error!("Storage error: {}", e);
                "an internal error occurred".to_string()
            }
            other => other.to_string(),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}
