//! Functional core for the expenses API.
//!
//! Pure types and functions only: the expense model, request parsing, spending
//! summaries, the repository contract and HTTP response shaping. All I/O lives
//! in the `expenses` crate.

pub mod api;
pub mod expense;
pub mod storage;
