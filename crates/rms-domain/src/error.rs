//! API Errors
//!
//! Every failure a view can hit collapses into one of these. The `Display`
//! text is what the view shows in its error banner.

use thiserror::Error;

/// Common result type for backend calls
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// No session cookie to authenticate with
    #[error("Authentication token not found.")]
    MissingToken,
    /// The backend rejected the token (HTTP 401)
    #[error("Unauthorized access.")]
    Unauthorized,
    /// Any other non-2xx response
    #[error("{context} (HTTP {status})")]
    Status { status: u16, context: String },
    /// The request never produced a response
    #[error("Network error: {0}")]
    Transport(String),
    /// The response body did not match the expected shape
    #[error("Unexpected response from server: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classify a non-2xx status. `context` is the action-specific message,
    /// e.g. "Failed to fetch orders."
    pub fn from_status(status: u16, context: &str) -> Self {
        if status == 401 {
            ApiError::Unauthorized
        } else {
            ApiError::Status {
                status,
                context: context.to_string(),
            }
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_401_is_worded_separately() {
        let err = ApiError::from_status(401, "Failed to fetch user role.");
        assert!(err.is_unauthorized());
        assert_eq!(err.to_string(), "Unauthorized access.");
    }

    #[test]
    fn test_status_message_keeps_context() {
        let err = ApiError::from_status(500, "Failed to fetch orders.");
        assert_eq!(err.to_string(), "Failed to fetch orders. (HTTP 500)");
    }

    #[test]
    fn test_missing_token_message() {
        assert_eq!(ApiError::MissingToken.to_string(), "Authentication token not found.");
    }
}
