//! Error types for the gateway crate.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use spellserve_core::CoreError;

/// Body returned for a missing or empty `q` parameter.
pub const INVALID_QUERY_MESSAGE: &str = "Invalid query for spell correction !!";

/// Errors that can occur during gateway request handling.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GatewayError {
    /// An error propagated from the core layer.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        match self {
            GatewayError::Core(CoreError::MissingParameter { .. }) => {
                (StatusCode::BAD_REQUEST, INVALID_QUERY_MESSAGE).into_response()
            }
            other => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": other.to_string()})),
            )
                .into_response(),
        }
    }
}

/// Fatal conditions that stop the server before or while serving.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum StartupError {
    /// The dictionary engine could not be initialized.
    #[error("dictionary initialization failed: {0}")]
    Dictionary(#[source] CoreError),

    /// The listener could not bind to the configured address.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// The server loop terminated with an I/O error.
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}
