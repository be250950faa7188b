use thiserror::Error;

use crate::expense::ExpenseError;
use crate::storage::RepositoryError;

/// Failure of a handler's core logic.
///
/// Handlers return this instead of panicking. The HTTP status is picked at the
/// boundary by [`ErrorStatusPolicy`](super::ErrorStatusPolicy); the `Display`
/// output becomes the `error` field of the response body.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HandlerError {
    #[error("{0}")]
    InvalidBody(String),
    #[error("Missing path parameter: {0}")]
    MissingPathParameter(&'static str),
    #[error(transparent)]
    Storage(#[from] RepositoryError),
    #[error("Failed to serialize response: {0}")]
    Serialization(String),
    /// The transport refused the request before the handler ran, e.g. an
    /// undecodable path segment or an oversized body. `status` is the code
    /// the transport suggested.
    #[error("{message}")]
    Rejected { status: u16, message: String },
    #[error("Request timed out after {after_ms} ms")]
    TimedOut { after_ms: u64 },
}

impl From<ExpenseError> for HandlerError {
    fn from(err: ExpenseError) -> Self {
        match err {
            ExpenseError::InvalidRequest(message) => HandlerError::InvalidBody(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_body_display_is_raw_message() {
        let err: HandlerError =
            ExpenseError::InvalidRequest("missing field `userId`".to_string()).into();
        assert_eq!(err.to_string(), "missing field `userId`");
    }

    #[test]
    fn test_missing_path_parameter_display() {
        let err = HandlerError::MissingPathParameter("expenseId");
        assert_eq!(err.to_string(), "Missing path parameter: expenseId");
    }

    #[test]
    fn test_rejected_and_timed_out_display() {
        let err = HandlerError::Rejected {
            status: 413,
            message: "Failed to buffer the request body: length limit exceeded".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to buffer the request body: length limit exceeded"
        );

        let err = HandlerError::TimedOut { after_ms: 10_000 };
        assert_eq!(err.to_string(), "Request timed out after 10000 ms");
    }

    #[test]
    fn test_storage_display_is_transparent() {
        let err: HandlerError = RepositoryError::QueryFailed("Table not found".to_string()).into();
        assert_eq!(err.to_string(), "Query failed: Table not found");
    }
}
