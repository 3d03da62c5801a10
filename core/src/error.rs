//! Error types for the country data client.
//!
//! # Design
//! The view layer never distinguishes failure classes: transport failures,
//! non-success statuses, and decode failures all surface as one fixed message
//! via [`ApiError::user_message`]. The variants exist only so the diagnostic
//! trace can record what actually went wrong.

use thiserror::Error;

/// Fixed message shown to the user for every fetch failure.
pub const DATA_SOURCE_UNAVAILABLE: &str = "The API seems to be down or \
experiencing issues. This is outside our control. Please try again later.";

/// Errors returned by the fetch layer.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, connect, read failure).
    #[error("transport failure: {0}")]
    Transport(String),

    /// The server responded with a non-success status.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The response body could not be decoded into the expected type.
    #[error("decode failure: {0}")]
    Decode(String),
}

impl ApiError {
    /// The single user-facing message all fetch failures collapse to.
    pub fn user_message(&self) -> &'static str {
        DATA_SOURCE_UNAVAILABLE
    }
}
