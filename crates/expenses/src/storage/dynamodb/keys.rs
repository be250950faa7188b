//! DynamoDB key and attribute names.
//!
//! Pure functions for building the composite primary key and the partition
//! query. All functions are sync and have no side effects.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;

// ============================================================================
// Key attributes
// ============================================================================

/// Partition key attribute (HASH).
pub const USER_ID: &str = "userId";
/// Sort key attribute (RANGE).
pub const EXPENSE_ID: &str = "expenseId";

// ============================================================================
// Data attributes
// ============================================================================

pub const CATEGORY: &str = "category";
pub const AMOUNT: &str = "amount";
pub const DESCRIPTION: &str = "description";
pub const DATE: &str = "date";
pub const TIMESTAMP: &str = "timestamp";

// ============================================================================
// Query expressions
// ============================================================================

/// Placeholder bound to the user ID in [`PARTITION_KEY_CONDITION`].
pub const USER_ID_PLACEHOLDER: &str = ":v_userId";

/// Selects a whole partition, with no sort-key bound.
pub const PARTITION_KEY_CONDITION: &str = "userId = :v_userId";

/// Build the composite primary key for a single expense.
pub fn primary_key(user_id: &str, expense_id: &str) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (USER_ID.to_string(), AttributeValue::S(user_id.to_string())),
        (
            EXPENSE_ID.to_string(),
            AttributeValue::S(expense_id.to_string()),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_key() {
        let key = primary_key("u1", "550e8400-e29b-41d4-a716-446655440003");

        assert_eq!(key.len(), 2);
        assert_eq!(key.get("userId").unwrap().as_s().unwrap(), "u1");
        assert_eq!(
            key.get("expenseId").unwrap().as_s().unwrap(),
            "550e8400-e29b-41d4-a716-446655440003"
        );
    }

    #[test]
    fn test_partition_condition_uses_placeholder() {
        assert!(PARTITION_KEY_CONDITION.starts_with(USER_ID));
        assert!(PARTITION_KEY_CONDITION.ends_with(USER_ID_PLACEHOLDER));
    }
}
