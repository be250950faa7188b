use std::{fmt, str::FromStr};

use crate::storage::repository_error_to_status_code;

use super::HandlerError;

/// How handler failures are mapped to HTTP status codes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorStatusPolicy {
    /// Every failure is a 500, whatever its cause.
    #[default]
    Undifferentiated,
    /// Bad input is a 400, a missing path parameter a 404, storage errors
    /// follow [`repository_error_to_status_code`]. Transport rejections keep
    /// their own status and timeouts are a 408.
    Typed,
}

impl ErrorStatusPolicy {
    /// Pick the status code for a handler failure.
    pub fn status_code(self, error: &HandlerError) -> u16 {
        match self {
            ErrorStatusPolicy::Undifferentiated => 500,
            ErrorStatusPolicy::Typed => match error {
                HandlerError::InvalidBody(_) => 400,
                HandlerError::MissingPathParameter(_) => 404,
                HandlerError::Storage(e) => repository_error_to_status_code(e),
                HandlerError::Serialization(_) => 500,
                HandlerError::Rejected { status, .. } => *status,
                HandlerError::TimedOut { .. } => 408,
            },
        }
    }
}

impl FromStr for ErrorStatusPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" | "undifferentiated" => Ok(ErrorStatusPolicy::Undifferentiated),
            "typed" => Ok(ErrorStatusPolicy::Typed),
            other => Err(format!("unknown error status policy: {other}")),
        }
    }
}

impl fmt::Display for ErrorStatusPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorStatusPolicy::Undifferentiated => write!(f, "legacy"),
            ErrorStatusPolicy::Typed => write!(f, "typed"),
        }
    }
}
