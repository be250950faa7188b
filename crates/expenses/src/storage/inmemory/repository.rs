//! In-memory repository implementation.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use expenses_core::expense::Expense;
use expenses_core::storage::{ExpenseRepository, Result};

type Partition = BTreeMap<String, Expense>;

/// In-memory storage backend for tests and local development.
///
/// Mirrors the table layout: one partition per user, sorted by expense ID.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    partitions: Arc<RwLock<HashMap<String, Partition>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with the given expenses.
    pub fn with_expenses(expenses: impl IntoIterator<Item = Expense>) -> Self {
        let mut partitions: HashMap<String, Partition> = HashMap::new();
        for expense in expenses {
            partitions
                .entry(expense.user_id.clone())
                .or_default()
                .insert(expense.expense_id.clone(), expense);
        }

        Self {
            partitions: Arc::new(RwLock::new(partitions)),
        }
    }
}

#[async_trait]
impl ExpenseRepository for InMemoryRepository {
    async fn put_expense(&self, expense: &Expense) -> Result<()> {
        let mut partitions = self.partitions.write().await;
        partitions
            .entry(expense.user_id.clone())
            .or_default()
            .insert(expense.expense_id.clone(), expense.clone());
        Ok(())
    }

    async fn delete_expense(&self, user_id: &str, expense_id: &str) -> Result<()> {
        let mut partitions = self.partitions.write().await;
        if let Some(partition) = partitions.get_mut(user_id) {
            partition.remove(expense_id);
            if partition.is_empty() {
                partitions.remove(user_id);
            }
        }
        Ok(())
    }

    async fn list_expenses_by_user(&self, user_id: &str) -> Result<Vec<Expense>> {
        let partitions = self.partitions.read().await;
        Ok(partitions
            .get(user_id)
            .map(|partition| partition.values().cloned().collect())
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(user_id: &str, expense_id: &str, amount: f64) -> Expense {
        Expense::new(user_id, "Food", amount, "lunch", "2024-01-01", 1_704_067_200_000)
            .with_expense_id(expense_id)
    }

    #[tokio::test]
    async fn test_put_and_list() {
        let repo = InMemoryRepository::new();
        let e = expense("u1", "a", 10.0);

        repo.put_expense(&e).await.unwrap();

        let listed = repo.list_expenses_by_user("u1").await.unwrap();
        assert_eq!(listed, vec![e]);
    }

    #[tokio::test]
    async fn test_list_unknown_user_is_empty() {
        let repo = InMemoryRepository::new();
        assert!(repo.list_expenses_by_user("nobody").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_is_scoped_to_user() {
        let repo = InMemoryRepository::with_expenses([
            expense("u1", "a", 1.0),
            expense("u2", "b", 2.0),
            expense("u1", "c", 3.0),
        ]);

        let listed = repo.list_expenses_by_user("u1").await.unwrap();
        assert_eq!(listed.len(), 2);
        assert!(listed.iter().all(|e| e.user_id == "u1"));
    }

    #[tokio::test]
    async fn test_list_sorted_by_expense_id() {
        let repo = InMemoryRepository::with_expenses([
            expense("u1", "c", 3.0),
            expense("u1", "a", 1.0),
            expense("u1", "b", 2.0),
        ]);

        let ids: Vec<String> = repo
            .list_expenses_by_user("u1")
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.expense_id)
            .collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_put_same_key_replaces() {
        let repo = InMemoryRepository::new();
        repo.put_expense(&expense("u1", "a", 1.0)).await.unwrap();
        repo.put_expense(&expense("u1", "a", 99.0)).await.unwrap();

        let listed = repo.list_expenses_by_user("u1").await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].amount, 99.0);
    }

    #[tokio::test]
    async fn test_delete_removes_only_target() {
        let repo = InMemoryRepository::with_expenses([
            expense("u1", "a", 1.0),
            expense("u1", "b", 2.0),
            expense("u2", "a", 3.0),
        ]);

        repo.delete_expense("u1", "a").await.unwrap();

        let u1 = repo.list_expenses_by_user("u1").await.unwrap();
        assert_eq!(u1.len(), 1);
        assert_eq!(u1[0].expense_id, "b");
        assert_eq!(repo.list_expenses_by_user("u2").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_missing_is_ok() {
        let repo = InMemoryRepository::new();
        repo.delete_expense("u1", "does-not-exist").await.unwrap();
        repo.delete_expense("u1", "does-not-exist").await.unwrap();
    }
}
