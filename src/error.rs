// transform error types

use axum::http::StatusCode;
use thiserror::Error;

/// the only way the policy transform can fail: the host handed us something
/// that does not follow the viewer-response event contract
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolicyError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl PolicyError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidInput(reason.into())
    }

    /// map to the http status the host emulator replies with
    pub fn status_code(&self) -> StatusCode {
        match self {
            PolicyError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        let err = PolicyError::invalid("event has no response");
        assert_eq!(err.to_string(), "invalid input: event has no response");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}
