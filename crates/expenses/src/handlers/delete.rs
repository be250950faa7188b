//! Delete an expense (DELETE /expenses/{userId}/{expenseId}).

use axum::{
    extract::{rejection::PathRejection, Path, State},
    response::Response,
};

use expenses_core::api::{Endpoint, HandlerError, MessageBody};
use expenses_core::storage::ExpenseRepository;

use super::response::{path_rejected, render, respond};
use crate::state::AppState;

/// Delete the item at `(user_id, expense_id)`. Missing items are not an error.
pub async fn delete_expense_impl(
    repo: &dyn ExpenseRepository,
    user_id: &str,
    expense_id: &str,
) -> Result<MessageBody, HandlerError> {
    repo.delete_expense(user_id, expense_id).await?;

    tracing::info!(user_id, expense_id, "Deleted expense");

    Ok(MessageBody::deleted())
}

/// Delete an expense (DELETE /expenses/{userId}/{expenseId}).
pub async fn delete_expense(
    State(state): State<AppState>,
    path: Result<Path<(String, String)>, PathRejection>,
) -> Response {
    let outcome = match path {
        Ok(Path((user_id, expense_id))) => {
            delete_expense_impl(state.expense_repo.as_ref(), &user_id, &expense_id).await
        }
        Err(rejection) => Err(path_rejected(rejection)),
    };
    render(respond(Endpoint::Delete, outcome, state.error_status))
}
