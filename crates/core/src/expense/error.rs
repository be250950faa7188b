use thiserror::Error;

/// Errors that can occur when reading expense input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExpenseError {
    /// The request body could not be parsed. Carries the parser's message verbatim.
    #[error("{0}")]
    InvalidRequest(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_request_display_is_verbatim() {
        let error = ExpenseError::InvalidRequest("EOF while parsing a value".to_string());
        assert_eq!(error.to_string(), "EOF while parsing a value");
    }
}
