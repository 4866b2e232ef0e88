//! Error types for record operations.
//!
//! Missing keys are never errors. Every failure is reported before any
//! output is built, so callers never see a partially-constructed result.

use thiserror::Error;

/// Errors that can occur while operating on records.
#[derive(Debug, Error)]
pub enum RecordError {
    /// An argument did not have the expected shape.
    #[error("invalid {argument}: expected {expected}, found {found}")]
    InvalidInput {
        argument: &'static str,
        expected: &'static str,
        found: String,
    },

    /// A group-by field held a value that cannot act as a map key.
    #[error("record {index}: field '{field}' holds a {kind}, which cannot be a group key")]
    UngroupableValue {
        index: usize,
        field: String,
        kind: &'static str,
    },

    /// A value that had to be numeric was not.
    #[error("value at key '{key}' is not numeric")]
    NotNumeric { key: String },

    /// A merged document could not be rebuilt into its typed form.
    #[error("merged value does not fit the target type: {0}")]
    Shape(#[from] serde_json::Error),
}

impl RecordError {
    pub(crate) fn invalid(argument: &'static str, expected: &'static str, found: &str) -> Self {
        RecordError::InvalidInput {
            argument,
            expected,
            found: found.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RecordError>;
