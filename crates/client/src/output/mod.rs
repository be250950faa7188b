//! Output formatting functions.

pub mod pretty;

/// Format a value as compact JSON.
pub fn format_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use expenses_core::api::MessageBody;

    #[test]
    fn test_format_json_is_compact() {
        assert_eq!(
            format_json(&MessageBody::deleted()),
            r#"{"message":"Expense deleted successfully"}"#
        );
    }
}
