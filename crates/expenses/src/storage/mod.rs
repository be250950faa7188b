//! Storage backend implementations.
//!
//! Concrete implementations of `ExpenseRepository` from
//! `expenses_core::storage`. The in-memory backend is always available; the
//! DynamoDB backend is behind the `dynamodb` feature (on by default).
//!
//! # Examples
//!
//! Build without the AWS SDK (in-memory only):
//! ```bash
//! cargo build -p expenses --no-default-features
//! ```

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

pub mod inmemory;

#[cfg(feature = "dynamodb")]
pub use dynamodb::DynamoDbRepository;

pub use inmemory::InMemoryRepository;
