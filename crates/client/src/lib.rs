//! expenses_client - CLI client for the expenses API.

pub mod cli;
pub mod client;
pub mod error;
pub mod output;

pub use client::ExpensesClient;
pub use error::{ClientError, Result};
