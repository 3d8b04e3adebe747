//! HTTP Errors
//!
//! Handler failures and their JSON bodies.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::domain::{ErrorDetails, RecipeError};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid request body")]
    MalformedPayload(String),

    #[error("Failed to generate recipe")]
    Upstream(#[from] RecipeError),
}

/// `{ "error": ..., "details": ... }`
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub details: ErrorDetails,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MalformedPayload(_) => StatusCode::BAD_REQUEST,
            AppError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn body(&self) -> ErrorBody {
        let details = match self {
            AppError::MalformedPayload(reason) => ErrorDetails::message(reason.clone()),
            AppError::Upstream(err) => err.details(),
        };
        ErrorBody {
            error: self.to_string(),
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}
