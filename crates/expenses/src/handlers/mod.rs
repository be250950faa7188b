//! Expense handlers.
//!
//! Each operation has a transport-neutral `*_impl` function over
//! `&dyn ExpenseRepository` plus an axum handler for the dev server. The
//! Lambda adapters in [`crate::lambda`] call the same `*_impl` functions.

pub mod create;
pub mod delete;
pub mod list;
pub mod response;
pub mod timeout;

pub use create::{create_expense, create_expense_impl};
pub use delete::{delete_expense, delete_expense_impl};
pub use list::{list_expenses, list_expenses_impl};
pub use response::{
    body_rejected, path_rejected, preflight, render, respond, to_http_response,
};
pub use timeout::{enforce_timeout, RequestTimeout};
