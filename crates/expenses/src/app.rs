use std::time::Duration;

use axum::{
    middleware::from_fn_with_state,
    routing::{delete, get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::{
    handlers::{
        create_expense, delete_expense, enforce_timeout, list_expenses, preflight, RequestTimeout,
    },
    state::AppState,
};

/// Deadline for a single request on the dev server.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    create_app_with_timeout(state, REQUEST_TIMEOUT)
}

/// Same as [`create_app`] with a custom request deadline.
pub fn create_app_with_timeout(state: AppState, limit: Duration) -> Router {
    let timeout = RequestTimeout {
        limit,
        policy: state.error_status,
    };

    Router::new()
        .route("/expenses", post(create_expense).options(preflight))
        .route("/expenses/{user_id}", get(list_expenses).options(preflight))
        .route(
            "/expenses/{user_id}/{expense_id}",
            delete(delete_expense).options(preflight),
        )
        .layer(TraceLayer::new_for_http())
        .layer(from_fn_with_state(timeout, enforce_timeout))
        .with_state(state)
}
