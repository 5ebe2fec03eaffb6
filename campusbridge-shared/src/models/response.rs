use serde::{Deserialize, Serialize};

/// Uniform envelope every gateway call resolves to.
///
/// Network failures, timeouts, and non-2xx statuses are folded into
/// `success: false` with a message; callers never see a raw transport error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiResponse<T> {
    /// Whether the operation succeeded.
    pub success: bool,

    /// Payload, present on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    /// Human-readable detail, present on failure (and optionally on success).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Successful envelope carrying `data`.
    #[must_use]
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    /// Failed envelope carrying a message and no data.
    #[must_use]
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }

    /// Extract the payload, treating a success without data as a failure.
    ///
    /// # Errors
    ///
    /// Returns the envelope's message when `success` is false, or a generic
    /// message when the envelope claims success but carries no payload.
    pub fn into_result(self) -> Result<T, String> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            (true, None) => Err("response missing payload".to_string()),
            (false, _) => Err(self
                .message
                .unwrap_or_else(|| "request failed".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_envelope_carries_data() {
        let response = ApiResponse::ok(7_u32);
        assert!(response.success);
        assert_eq!(response.into_result().unwrap(), 7);
    }

    #[test]
    fn fail_envelope_carries_message() {
        let response: ApiResponse<u32> = ApiResponse::fail("backend unreachable");
        assert!(!response.success);
        assert_eq!(response.into_result().unwrap_err(), "backend unreachable");
    }

    #[test]
    fn success_without_payload_is_an_error() {
        let response: ApiResponse<u32> = ApiResponse {
            success: true,
            data: None,
            message: None,
        };
        assert!(response.into_result().is_err());
    }

    #[test]
    fn fail_serializes_without_data_field() {
        let response: ApiResponse<u32> = ApiResponse::fail("nope");
        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("data"));
        assert!(json.contains("nope"));
    }
}
