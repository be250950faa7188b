//! Application state with repository-based storage.
//!
//! Built once per process (cold start for Lambda, startup for the dev server)
//! and read-only afterwards.

use std::sync::Arc;

use expenses_core::api::ErrorStatusPolicy;
use expenses_core::storage::ExpenseRepository;

use crate::config::{Config, StorageBackend};
use crate::storage::InMemoryRepository;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Expense storage.
    pub expense_repo: Arc<dyn ExpenseRepository>,
    /// How failures map to HTTP status codes.
    pub error_status: ErrorStatusPolicy,
}

impl AppState {
    /// Creates a new AppState around an existing repository.
    pub fn new(expense_repo: Arc<dyn ExpenseRepository>, error_status: ErrorStatusPolicy) -> Self {
        Self {
            expense_repo,
            error_status,
        }
    }

    /// Creates an AppState backed by an empty in-memory repository.
    pub fn in_memory(error_status: ErrorStatusPolicy) -> Self {
        Self::new(Arc::new(InMemoryRepository::new()), error_status)
    }

    /// Creates an AppState for the configured storage backend.
    pub async fn from_config(config: &Config) -> anyhow::Result<Self> {
        let repo: Arc<dyn ExpenseRepository> = match config.storage {
            StorageBackend::Memory => Arc::new(InMemoryRepository::new()),
            #[cfg(feature = "dynamodb")]
            StorageBackend::DynamoDb => Arc::new(
                crate::storage::DynamoDbRepository::from_config(config).await,
            ),
            #[cfg(not(feature = "dynamodb"))]
            StorageBackend::DynamoDb => {
                anyhow::bail!(
                    "storage backend 'dynamodb' requires the `dynamodb` feature; \
                     set EXPENSES_STORAGE=memory or rebuild with --features dynamodb"
                )
            }
        };

        tracing::info!(
            storage = %config.storage,
            table = %config.table_name,
            error_status = %config.error_status,
            "Initialized application state"
        );

        Ok(Self::new(repo, config.error_status))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::in_memory(ErrorStatusPolicy::default())
    }
}
