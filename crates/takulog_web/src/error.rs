//! Our custom error type.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use thiserror::Error;

pub type WebResult<T> = Result<T, WebError>;

#[derive(Debug, Clone, Error, Serialize, Deserialize)]
pub enum WebError {
    /// The API answered with a non-success status.
    #[error("HTTP {status} {body}")]
    Api { status: u16, body: String },
    /// The request never got an answer.
    #[error("{0}")]
    Http(String),
    /// The answer was not the JSON shape we expect.
    #[error("{0}")]
    Json(String),
    /// Rejected before any network call.
    #[error("{0}")]
    Invalid(String),
}

impl WebError {
    pub fn invalid(message: impl ToString) -> Self {
        WebError::Invalid(message.to_string())
    }

    pub fn http<E: std::error::Error>(e: E) -> Self {
        WebError::Http(e.to_string())
    }

    pub fn json<E: std::error::Error>(e: E) -> Self {
        WebError::Json(e.to_string())
    }
}
