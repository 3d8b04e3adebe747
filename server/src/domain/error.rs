//! Domain Layer - Recipe Errors
//!
//! Everything that can go wrong between sending the prompt and reading
//! the first completion choice.

use serde::Serialize;
use thiserror::Error;

/// Upstream failure. All variants map to the same HTTP response.
#[derive(Debug, Error)]
pub enum RecipeError {
    #[error("Request to chat API failed: {0}")]
    Transport(String),

    #[error("Chat API returned status {status}")]
    Status { status: u16, body: String },

    #[error("Malformed chat API response: {0}")]
    MalformedResponse(String),

    #[error("Chat API returned no choices")]
    NoChoices,
}

/// Serializable detail attached to error responses
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorDetails {
    pub message: String,
    pub status: Option<u16>,
    pub body: Option<String>,
}

impl ErrorDetails {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
            body: None,
        }
    }
}

impl RecipeError {
    pub fn details(&self) -> ErrorDetails {
        match self {
            RecipeError::Status { status, body } => ErrorDetails {
                message: self.to_string(),
                status: Some(*status),
                body: Some(body.clone()),
            },
            _ => ErrorDetails::message(self.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_details() {
        let err = RecipeError::Status {
            status: 401,
            body: "{\"error\":\"invalid_api_key\"}".to_string(),
        };
        let details = err.details();
        assert_eq!(details.status, Some(401));
        assert_eq!(details.message, "Chat API returned status 401");
        assert_eq!(details.body.as_deref(), Some("{\"error\":\"invalid_api_key\"}"));
    }

    #[test]
    fn test_transport_details() {
        let details = RecipeError::Transport("connection refused".to_string()).details();
        assert_eq!(details, ErrorDetails::message("Request to chat API failed: connection refused"));
    }
}
