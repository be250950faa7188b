//! List a user's expenses (GET /expenses/{userId}).

use axum::{
    extract::{rejection::PathRejection, Path, State},
    response::Response,
};

use expenses_core::api::{Endpoint, HandlerError};
use expenses_core::expense::Expense;
use expenses_core::storage::ExpenseRepository;

use super::response::{path_rejected, render, respond};
use crate::state::AppState;

/// Every expense in the user's partition, in storage order.
pub async fn list_expenses_impl(
    repo: &dyn ExpenseRepository,
    user_id: &str,
) -> Result<Vec<Expense>, HandlerError> {
    let expenses = repo.list_expenses_by_user(user_id).await?;

    tracing::debug!(user_id, count = expenses.len(), "Listed expenses");

    Ok(expenses)
}

/// List a user's expenses (GET /expenses/{userId}).
pub async fn list_expenses(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Response {
    let outcome = match path {
        Ok(Path(user_id)) => list_expenses_impl(state.expense_repo.as_ref(), &user_id).await,
        Err(rejection) => Err(path_rejected(rejection)),
    };
    render(respond(Endpoint::List, outcome, state.error_status))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryRepository;

    #[tokio::test]
    async fn test_list_unknown_user_is_empty() {
        let repo = InMemoryRepository::new();
        assert!(list_expenses_impl(&repo, "nobody").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_returns_only_users_expenses() {
        let repo = InMemoryRepository::with_expenses([
            Expense::new("u1", "Food", 1.0, "a", "2024-01-01", 1),
            Expense::new("u1", "Transport", 2.0, "b", "2024-01-02", 2),
            Expense::new("u2", "Food", 3.0, "c", "2024-01-03", 3),
        ]);

        let listed = list_expenses_impl(&repo, "u1").await.unwrap();

        assert_eq!(listed.len(), 2);
        assert!(listed.iter().all(|e| e.user_id == "u1"));
    }
}
