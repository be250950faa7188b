//! Create an expense (POST /expenses).

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    response::Response,
};
use uuid::Uuid;

use expenses_core::api::{Endpoint, HandlerError};
use expenses_core::expense::{CreateExpenseRequest, Expense};
use expenses_core::storage::ExpenseRepository;

use super::response::{body_rejected, render, respond};
use crate::state::AppState;

/// Parse the body, assign a fresh ID and timestamp, and store the record.
///
/// Any `expenseId` or `timestamp` in the body is ignored.
pub async fn create_expense_impl(
    repo: &dyn ExpenseRepository,
    body: &[u8],
) -> Result<Expense, HandlerError> {
    let request = CreateExpenseRequest::from_json(body)?;
    let expense = request.into_expense(Uuid::new_v4(), chrono::Utc::now().timestamp_millis());

    repo.put_expense(&expense).await?;

    tracing::info!(
        user_id = %expense.user_id,
        expense_id = %expense.expense_id,
        "Created expense"
    );

    Ok(expense)
}

/// Create an expense (POST /expenses).
pub async fn create_expense(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let outcome = match body {
        Ok(body) => create_expense_impl(state.expense_repo.as_ref(), &body).await,
        Err(rejection) => Err(body_rejected(rejection)),
    };
    render(respond(Endpoint::Create, outcome, state.error_status))
}
