//! DynamoDB repository implementation.
//!
//! Implements `ExpenseRepository` from `expenses_core::storage` using DynamoDB.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;

use expenses_core::expense::Expense;
use expenses_core::storage::{ExpenseRepository, Result};

use super::conversions::{expense_to_item, item_to_expense};
use super::error::{map_delete_item_error, map_put_item_error, map_query_error};
use super::keys;
use crate::config::Config;

/// DynamoDB-based repository implementation.
///
/// One table, partition key `userId`, sort key `expenseId`.
#[derive(Debug, Clone)]
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Creates a new repository from application configuration.
    ///
    /// Uses the AWS SDK default credential chain. When `aws_endpoint_url` is
    /// set, requests go to that endpoint instead (DynamoDB Local).
    pub async fn from_config(config: &Config) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
        if let Some(endpoint) = &config.aws_endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }
        let sdk_config = loader.load().await;

        Self::new(Client::new(&sdk_config), config.table_name.clone())
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[async_trait]
impl ExpenseRepository for DynamoDbRepository {
    async fn put_expense(&self, expense: &Expense) -> Result<()> {
        let item = expense_to_item(expense)?;

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(())
    }

    async fn delete_expense(&self, user_id: &str, expense_id: &str) -> Result<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .set_key(Some(keys::primary_key(user_id, expense_id)))
            .send()
            .await
            .map_err(map_delete_item_error)?;

        Ok(())
    }

    async fn list_expenses_by_user(&self, user_id: &str) -> Result<Vec<Expense>> {
        let mut expenses = Vec::new();
        let mut start_key: Option<HashMap<String, AttributeValue>> = None;

        loop {
            let result = self
                .client
                .query()
                .table_name(&self.table_name)
                .key_condition_expression(keys::PARTITION_KEY_CONDITION)
                .expression_attribute_values(
                    keys::USER_ID_PLACEHOLDER,
                    AttributeValue::S(user_id.to_string()),
                )
                .set_exclusive_start_key(start_key.take())
                .send()
                .await
                .map_err(map_query_error)?;

            for item in result.items() {
                expenses.push(item_to_expense(item)?);
            }

            match result.last_evaluated_key {
                Some(key) if !key.is_empty() => start_key = Some(key),
                _ => break,
            }
        }

        tracing::debug!(user_id, count = expenses.len(), "Queried expenses");

        Ok(expenses)
    }
}
