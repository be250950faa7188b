//! Expenses API: storage backends, handlers, the local axum server and the
//! Lambda adapters.

pub mod app;
pub mod config;
pub mod handlers;
pub mod lambda;
pub mod state;
pub mod storage;
pub mod telemetry;
