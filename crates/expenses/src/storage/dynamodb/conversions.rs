//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and the
//! expense type. These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use expenses_core::expense::Expense;
use expenses_core::storage::RepositoryError;

use super::keys;

/// Convert an Expense to a DynamoDB item.
///
/// Fails if `amount` is not finite, since DynamoDB numbers cannot hold NaN or infinity.
pub fn expense_to_item(
    expense: &Expense,
) -> Result<HashMap<String, AttributeValue>, RepositoryError> {
    if !expense.amount.is_finite() {
        return Err(RepositoryError::Serialization(format!(
            "amount is not a finite number: {}",
            expense.amount
        )));
    }

    let mut item = keys::primary_key(&expense.user_id, &expense.expense_id);

    item.insert(
        keys::CATEGORY.to_string(),
        AttributeValue::S(expense.category.clone()),
    );
    item.insert(
        keys::AMOUNT.to_string(),
        AttributeValue::N(expense.amount.to_string()),
    );
    item.insert(
        keys::DESCRIPTION.to_string(),
        AttributeValue::S(expense.description.clone()),
    );
    item.insert(
        keys::DATE.to_string(),
        AttributeValue::S(expense.date.clone()),
    );
    item.insert(
        keys::TIMESTAMP.to_string(),
        AttributeValue::N(expense.timestamp.to_string()),
    );

    Ok(item)
}

/// Convert a DynamoDB item to an Expense.
pub fn item_to_expense(item: &HashMap<String, AttributeValue>) -> Result<Expense, RepositoryError> {
    Ok(Expense {
        user_id: get_string(item, keys::USER_ID)?,
        expense_id: get_string(item, keys::EXPENSE_ID)?,
        category: get_string(item, keys::CATEGORY)?,
        amount: get_number(item, keys::AMOUNT)?,
        description: get_string(item, keys::DESCRIPTION)?,
        date: get_string(item, keys::DATE)?,
        timestamp: get_number(item, keys::TIMESTAMP)?,
    })
}

// ============================================================================
// Attribute helpers
// ============================================================================

/// Get a required string attribute.
fn get_string(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}

/// Get a required number attribute, parsed into `T`.
fn get_number<T>(item: &HashMap<String, AttributeValue>, key: &str) -> Result<T, RepositoryError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let raw = item
        .get(key)
        .and_then(|v| v.as_n().ok())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))?;

    raw.parse()
        .map_err(|e| RepositoryError::InvalidData(format!("Invalid number {}: {}", key, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_expense() -> Expense {
        Expense {
            user_id: "demo_user".to_string(),
            expense_id: "550e8400-e29b-41d4-a716-446655440003".to_string(),
            category: "Food".to_string(),
            amount: 12.5,
            description: "lunch".to_string(),
            date: "2024-01-01".to_string(),
            timestamp: 1_704_067_200_000,
        }
    }

    #[test]
    fn test_expense_round_trip() {
        let expense = sample_expense();
        let item = expense_to_item(&expense).unwrap();
        let parsed = item_to_expense(&item).unwrap();

        assert_eq!(expense, parsed);
    }

    #[test]
    fn test_expense_item_attribute_types() {
        let item = expense_to_item(&sample_expense()).unwrap();

        assert_eq!(item.len(), 7);
        assert_eq!(item.get("userId").unwrap().as_s().unwrap(), "demo_user");
        assert_eq!(
            item.get("expenseId").unwrap().as_s().unwrap(),
            "550e8400-e29b-41d4-a716-446655440003"
        );
        assert_eq!(item.get("amount").unwrap().as_n().unwrap(), "12.5");
        assert_eq!(
            item.get("timestamp").unwrap().as_n().unwrap(),
            "1704067200000"
        );
        assert_eq!(item.get("date").unwrap().as_s().unwrap(), "2024-01-01");
    }

    #[test]
    fn test_expense_to_item_rejects_non_finite_amount() {
        let mut expense = sample_expense();
        expense.amount = f64::INFINITY;

        assert!(matches!(
            expense_to_item(&expense),
            Err(RepositoryError::Serialization(_))
        ));
    }

    #[test]
    fn test_item_to_expense_missing_field() {
        let mut item = expense_to_item(&sample_expense()).unwrap();
        item.remove("category");

        let err = item_to_expense(&item).unwrap_err();
        assert_eq!(
            err,
            RepositoryError::InvalidData("Missing or invalid field: category".to_string())
        );
    }

    #[test]
    fn test_item_to_expense_amount_stored_as_string() {
        let mut item = expense_to_item(&sample_expense()).unwrap();
        item.insert("amount".to_string(), AttributeValue::S("12.5".to_string()));

        assert!(item_to_expense(&item).is_err());
    }

    #[test]
    fn test_item_to_expense_integer_amount() {
        let mut item = expense_to_item(&sample_expense()).unwrap();
        item.insert("amount".to_string(), AttributeValue::N("40".to_string()));

        assert_eq!(item_to_expense(&item).unwrap().amount, 40.0);
    }

    #[test]
    fn test_get_number_invalid() {
        let item = HashMap::from([(
            "timestamp".to_string(),
            AttributeValue::N("12.5".to_string()),
        )]);

        assert!(get_number::<i64>(&item, "timestamp").is_err());
    }

    #[test]
    fn test_get_string_missing_field() {
        let item = HashMap::new();
        assert!(get_string(&item, "missing").is_err());
    }
}
