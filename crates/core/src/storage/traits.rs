use async_trait::async_trait;

use crate::expense::Expense;

use super::Result;

/// Repository for expense operations.
///
/// Every method is a single storage call. Atomicity is per item, which is the
/// storage engine's native guarantee.
#[async_trait]
pub trait ExpenseRepository: Send + Sync {
    /// Writes the full record under `(user_id, expense_id)`, replacing any existing item.
    async fn put_expense(&self, expense: &Expense) -> Result<()>;

    /// Deletes the item at the exact composite key. Deleting an absent key succeeds.
    async fn delete_expense(&self, user_id: &str, expense_id: &str) -> Result<()>;

    /// Gets every expense in the user's partition, with no sort-key bound and no limit.
    async fn list_expenses_by_user(&self, user_id: &str) -> Result<Vec<Expense>>;
}
