//! Error types.

use thiserror::Error;

/// Errors raised by path-metric selection and decoding.
#[derive(Error, Debug)]
pub enum PathRankError {
    /// `select_best` was given no records; there is no best of nothing.
    ///
    /// This is a precondition violation on the caller's side, not a
    /// transient condition. Retrying with the same input cannot succeed.
    #[error("cannot select from an empty sequence of records")]
    EmptyInput,

    /// A path-service response did not follow the summary/path layout.
    #[error("malformed path response: {0}")]
    MalformedResponse(String),

    /// A concept/seed table could not be parsed.
    #[error("invalid concept table: {0}")]
    ConceptTable(String),

    /// The response body was not valid JSON for the expected shape.
    #[cfg(feature = "json")]
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type PathRankResult<T> = Result<T, PathRankError>;
