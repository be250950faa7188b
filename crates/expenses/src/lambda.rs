//! API Gateway adapters for the three Lambda binaries.
//!
//! Each adapter pulls its inputs out of the proxy event, runs the shared
//! handler logic and renders the result. Handler failures become error
//! responses; only a malformed response builder surfaces as `Err`.

use lambda_http::{Body, Error, Request, RequestExt, Response};

use expenses_core::api::{Endpoint, HandlerError};

use crate::handlers::{
    create_expense_impl, delete_expense_impl, list_expenses_impl, respond, to_http_response,
};
use crate::state::AppState;

/// Read a required path parameter. Empty values count as missing.
fn path_parameter(event: &Request, name: &'static str) -> Result<String, HandlerError> {
    event
        .path_parameters()
        .first(name)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .ok_or(HandlerError::MissingPathParameter(name))
}

/// POST /expenses
pub async fn create_expense(state: &AppState, event: Request) -> Result<Response<Body>, Error> {
    let outcome = create_expense_impl(state.expense_repo.as_ref(), event.body().as_ref()).await;
    Ok(to_http_response(respond(
        Endpoint::Create,
        outcome,
        state.error_status,
    ))?)
}

/// DELETE /expenses/{userId}/{expenseId}
pub async fn delete_expense(state: &AppState, event: Request) -> Result<Response<Body>, Error> {
    let outcome = match (
        path_parameter(&event, "userId"),
        path_parameter(&event, "expenseId"),
    ) {
        (Ok(user_id), Ok(expense_id)) => {
            delete_expense_impl(state.expense_repo.as_ref(), &user_id, &expense_id).await
        }
        (Err(e), _) | (_, Err(e)) => Err(e),
    };

    Ok(to_http_response(respond(
        Endpoint::Delete,
        outcome,
        state.error_status,
    ))?)
}

/// GET /expenses/{userId}
pub async fn list_expenses(state: &AppState, event: Request) -> Result<Response<Body>, Error> {
    let outcome = match path_parameter(&event, "userId") {
        Ok(user_id) => list_expenses_impl(state.expense_repo.as_ref(), &user_id).await,
        Err(e) => Err(e),
    };

    Ok(to_http_response(respond(
        Endpoint::List,
        outcome,
        state.error_status,
    ))?)
}
