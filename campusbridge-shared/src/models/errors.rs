use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error body the backend returns alongside non-2xx statuses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Error)]
#[error("{error}")]
pub struct ErrorResponse {
    /// Human-readable error description.
    pub error: String,
}

impl ErrorResponse {
    /// Build an error body from any displayable value.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_response_displays_message() {
        let err = ErrorResponse::new("course not found");
        assert_eq!(err.to_string(), "course not found");
    }

    #[test]
    fn error_response_deserializes_backend_body() {
        let err: ErrorResponse = serde_json::from_str(r#"{"error":"invalid token"}"#).unwrap();
        assert_eq!(err.error, "invalid token");
    }
}
