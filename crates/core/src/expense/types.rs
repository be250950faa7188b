use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single expense owned by a user.
///
/// `(user_id, expense_id)` uniquely identifies a record. `expense_id` and
/// `timestamp` are assigned by the server at creation and never change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// Partition key. Supplied by the caller and not validated.
    pub user_id: String,
    /// Sort key. A hyphenated UUID v4.
    pub expense_id: String,
    pub category: String,
    pub amount: f64,
    pub description: String,
    pub date: String,
    /// Creation time in milliseconds since the Unix epoch.
    pub timestamp: i64,
}

impl Expense {
    /// Creates an expense with a freshly generated ID.
    pub fn new(
        user_id: impl Into<String>,
        category: impl Into<String>,
        amount: f64,
        description: impl Into<String>,
        date: impl Into<String>,
        timestamp: i64,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            expense_id: Uuid::new_v4().to_string(),
            category: category.into(),
            amount,
            description: description.into(),
            date: date.into(),
            timestamp,
        }
    }

    /// Sets a specific expense ID (useful for testing).
    pub fn with_expense_id(mut self, expense_id: impl Into<String>) -> Self {
        self.expense_id = expense_id.into();
        self
    }
}
