//! Expense API operations.

use super::ExpensesClient;
use crate::error::Result;
use expenses_core::api::MessageBody;
use expenses_core::expense::{CreateExpenseRequest, Expense};

impl ExpensesClient {
    /// Create a new expense.
    pub async fn create_expense(&self, request: &CreateExpenseRequest) -> Result<Expense> {
        let response = self
            .client
            .post(self.url("/expenses"))
            .json(request)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// List every expense for a user.
    pub async fn list_expenses(&self, user_id: &str) -> Result<Vec<Expense>> {
        let response = self
            .client
            .get(self.url(&format!("/expenses/{}", urlencoding::encode(user_id))))
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Delete an expense by ID.
    pub async fn delete_expense(&self, user_id: &str, expense_id: &str) -> Result<MessageBody> {
        let response = self
            .client
            .delete(self.url(&format!(
                "/expenses/{}/{}",
                urlencoding::encode(user_id),
                urlencoding::encode(expense_id)
            )))
            .send()
            .await?;
        self.handle_response(response).await
    }
}
