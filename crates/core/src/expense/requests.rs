//! API request types for expense operations.
//!
//! These types are shared between the server and the client. Following the
//! Functional Core pattern, they are pure data types with no I/O.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::ExpenseError;
use super::types::Expense;

/// Request payload for creating a new expense.
///
/// Deserialization fails closed: unknown fields, missing required fields and
/// wrongly typed values are all rejected. `expenseId` and `timestamp` are
/// tolerated on input because the server overwrites them anyway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateExpenseRequest {
    pub user_id: String,
    pub category: String,
    pub amount: f64,
    pub description: String,
    pub date: String,
    #[serde(default, skip_serializing)]
    expense_id: Option<serde_json::Value>,
    #[serde(default, skip_serializing)]
    timestamp: Option<serde_json::Value>,
}

impl CreateExpenseRequest {
    /// Create a new request.
    pub fn new(
        user_id: impl Into<String>,
        category: impl Into<String>,
        amount: f64,
        description: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            category: category.into(),
            amount,
            description: description.into(),
            date: date.into(),
            expense_id: None,
            timestamp: None,
        }
    }

    /// Parse a request from a raw JSON body.
    pub fn from_json(body: &[u8]) -> Result<Self, ExpenseError> {
        serde_json::from_slice(body).map_err(|e| ExpenseError::InvalidRequest(e.to_string()))
    }

    /// Convert into a stored expense with the server-assigned ID and timestamp.
    pub fn into_expense(self, expense_id: Uuid, timestamp: i64) -> Expense {
        Expense {
            user_id: self.user_id,
            expense_id: expense_id.to_string(),
            category: self.category,
            amount: self.amount,
            description: self.description,
            date: self.date,
            timestamp,
        }
    }
}
