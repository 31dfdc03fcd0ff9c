//! Error types for the prospect pipeline.
//!
//! None of these are fatal: store errors are reported to the caller,
//! form errors stop a submission, and generation errors are shown to the
//! user who may trigger the request again.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("No record with id {0}")]
    NotFound(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("{0} is required")]
    Required(&'static str),
}

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("No API key configured for the text generation service")]
    MissingApiKey,

    #[error("Generation request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Generation service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Generation service returned no text")]
    EmptyResponse,

    #[error("Failed to parse generation response: {0}")]
    Parse(String),
}
