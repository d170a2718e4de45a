//! Structured API error surface.
//!
//! Callers receive a coarse error kind they can branch on plus a message
//! safe to display. Raw internal diagnostics are logged, never returned.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// API-visible errors with coarse, branchable kinds.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ServerError {
    /// Request was well-formed JSON but carried invalid values.
    #[error("{0}")]
    InvalidInput(String),

    /// Internal computation failed; details stay in the server log.
    #[error("internal computation failed")]
    ComputationFailed,
}

impl ServerError {
    fn kind(&self) -> &'static str {
        match self {
            ServerError::InvalidInput(_) => "InvalidInput",
            ServerError::ComputationFailed => "ComputationFailed",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            ServerError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ServerError::ComputationFailed => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let body = json!({
            "success": false,
            "error": {
                "kind": self.kind(),
                "message": self.to_string(),
            }
        });
        (self.status(), Json(body)).into_response()
    }
}

impl From<advisor_core::UniverseError> for ServerError {
    fn from(err: advisor_core::UniverseError) -> Self {
        ServerError::InvalidInput(err.to_string())
    }
}

impl From<advisor_allocation::AllocationError> for ServerError {
    fn from(err: advisor_allocation::AllocationError) -> Self {
        ServerError::InvalidInput(err.to_string())
    }
}

impl From<advisor_simulation::ConfigError> for ServerError {
    fn from(err: advisor_simulation::ConfigError) -> Self {
        ServerError::InvalidInput(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds_and_statuses() {
        let invalid = ServerError::InvalidInput("bad".to_string());
        assert_eq!(invalid.kind(), "InvalidInput");
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);

        let failed = ServerError::ComputationFailed;
        assert_eq!(failed.kind(), "ComputationFailed");
        assert_eq!(failed.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_internal_failure_message_is_generic() {
        // Must never carry internal diagnostic text.
        assert_eq!(
            ServerError::ComputationFailed.to_string(),
            "internal computation failed"
        );
    }

    #[test]
    fn test_domain_errors_map_to_invalid_input() {
        let err: ServerError = advisor_core::UniverseError::UnknownAsset("FOO".into()).into();
        assert_eq!(err, ServerError::InvalidInput("Unknown asset class: FOO".into()));
    }
}
