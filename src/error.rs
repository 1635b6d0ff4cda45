//! Error types for the trainer API client.
//!
//! These are internal boundary errors: every public CRUD operation catches
//! them, logs, and converts to an outcome value (`bool`, `Option`, empty
//! collection, [`crate::SaveOutcome`]) before returning. No variant is ever
//! propagated past the client surface.

use thiserror::Error;

/// Errors raised by the low-level HTTP helpers.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(String),

    #[error("API error ({status}): {body}")]
    Status { status: u16, body: String },

    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            ApiError::Decode(error.to_string())
        } else {
            ApiError::Transport(error.to_string())
        }
    }
}
