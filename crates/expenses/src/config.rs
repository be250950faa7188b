use std::{env, fmt, str::FromStr};

use expenses_core::api::ErrorStatusPolicy;

/// Default DynamoDB table name.
pub const DEFAULT_TABLE_NAME: &str = "ExpensesTable";

/// Which `ExpenseRepository` implementation backs the handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageBackend {
    #[default]
    DynamoDb,
    Memory,
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dynamodb" | "dynamo" => Ok(Self::DynamoDb),
            "memory" | "inmemory" => Ok(Self::Memory),
            other => Err(format!("unknown storage backend: {other}")),
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DynamoDb => write!(f, "dynamodb"),
            Self::Memory => write!(f, "memory"),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable output for terminals.
    Pretty,
    /// One JSON object per line, for CloudWatch.
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown log format: {other}")),
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// DynamoDB table name (default: "ExpensesTable")
    pub table_name: String,
    /// Storage backend (default: dynamodb)
    pub storage: StorageBackend,
    /// How handler failures map to HTTP status codes (default: legacy)
    pub error_status: ErrorStatusPolicy,
    /// Log format (default: json inside Lambda, pretty elsewhere)
    pub log_format: LogFormat,
    /// Endpoint override for DynamoDB Local
    pub aws_endpoint_url: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `EXPENSES_TABLE_NAME` - DynamoDB table name (default: "ExpensesTable")
    /// - `EXPENSES_STORAGE` - `dynamodb` or `memory` (default: dynamodb)
    /// - `EXPENSES_ERROR_STATUS` - `legacy` or `typed` (default: legacy)
    /// - `EXPENSES_LOG_FORMAT` - `pretty` or `json`
    /// - `AWS_ENDPOINT_URL` - optional endpoint override
    ///
    /// Unrecognized values fall back to the default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let in_lambda = lookup("AWS_LAMBDA_FUNCTION_NAME").is_some();
        let default_log_format = if in_lambda {
            LogFormat::Json
        } else {
            LogFormat::Pretty
        };

        Self {
            table_name: lookup("EXPENSES_TABLE_NAME")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_TABLE_NAME.to_string()),
            storage: lookup("EXPENSES_STORAGE")
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
            error_status: lookup("EXPENSES_ERROR_STATUS")
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
            log_format: lookup("EXPENSES_LOG_FORMAT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(default_log_format),
            aws_endpoint_url: lookup("AWS_ENDPOINT_URL").filter(|v| !v.trim().is_empty()),
        }
    }

    /// In-memory configuration with default settings, for tests and demos.
    pub fn in_memory() -> Self {
        Self {
            storage: StorageBackend::Memory,
            ..Self::from_lookup(|_| None)
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
