//! Relay error handling with Sentry integration.
//!
//! Every failure the relay can produce maps to a status code and a
//! `{"error": "<message>"}` JSON body. The relay never inspects GraphQL-level
//! errors; those travel back to the caller inside a 200 response.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Relay-level error type.
#[derive(Debug, Error)]
pub enum RelayError {
    /// Method other than `POST` or `OPTIONS`.
    #[error("Only POST requests allowed")]
    MethodNotAllowed,

    /// Store name or access token is not configured.
    #[error("Missing configuration: {}", .0.join(", "))]
    MissingConfig(Vec<&'static str>),

    /// Request body is not `{"query": string}` JSON.
    #[error("Invalid request body: {0}")]
    InvalidBody(#[source] serde_json::Error),

    /// Upstream could not be reached or its body could not be read.
    #[error("Upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    /// Upstream answered with something other than JSON.
    #[error("Upstream returned invalid JSON: {0}")]
    InvalidUpstreamBody(#[source] serde_json::Error),
}

impl RelayError {
    /// HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::MissingConfig(_)
            | Self::InvalidBody(_)
            | Self::Upstream(_)
            | Self::InvalidUpstreamBody(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Capture server errors to Sentry
        if status.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Relay error"
            );
        } else {
            tracing::debug!(error = %self, "Relay request rejected");
        }

        let body = serde_json::json!({ "error": self.to_string() });
        (status, Json(body)).into_response()
    }
}

/// Result type alias for `RelayError`.
pub type Result<T> = std::result::Result<T, RelayError>;
