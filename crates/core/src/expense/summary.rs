//! Pure functions for summarizing a user's spending.
//!
//! Backs the spending dashboard: grand total, count,
//! average, top category and a per-category breakdown.

use std::collections::HashMap;

use serde::Serialize;

use super::types::Expense;

/// Filter value that matches every category.
pub const ALL_CATEGORIES: &str = "All";

/// Spending totals for one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
    pub count: usize,
    /// Share of the grand total, 0-100.
    pub percentage: f64,
}

/// Aggregate view over a set of expenses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpenseSummary {
    pub count: usize,
    pub total: f64,
    pub average: f64,
    /// Category with the greatest positive total, if any.
    pub top_category: Option<String>,
    /// Sorted by total descending, ties by category name.
    pub categories: Vec<CategoryTotal>,
}

/// Summarize a set of expenses.
pub fn summarize(expenses: &[Expense]) -> ExpenseSummary {
    let count = expenses.len();
    let total: f64 = expenses.iter().map(|e| e.amount).sum();
    let average = if count > 0 { total / count as f64 } else { 0.0 };

    let mut by_category: HashMap<&str, (f64, usize)> = HashMap::new();
    for expense in expenses {
        let slot = by_category.entry(expense.category.as_str()).or_default();
        slot.0 += expense.amount;
        slot.1 += 1;
    }

    let mut categories: Vec<CategoryTotal> = by_category
        .into_iter()
        .map(|(category, (category_total, category_count))| CategoryTotal {
            category: category.to_string(),
            total: category_total,
            count: category_count,
            percentage: if total != 0.0 {
                category_total / total * 100.0
            } else {
                0.0
            },
        })
        .collect();

    categories.sort_by(|a, b| {
        b.total
            .total_cmp(&a.total)
            .then_with(|| a.category.cmp(&b.category))
    });

    let top_category = categories
        .first()
        .filter(|c| c.total > 0.0)
        .map(|c| c.category.clone());

    ExpenseSummary {
        count,
        total,
        average,
        top_category,
        categories,
    }
}

/// Keep only expenses in the given category. [`ALL_CATEGORIES`] keeps everything.
pub fn filter_by_category<'a>(expenses: &'a [Expense], category: &str) -> Vec<&'a Expense> {
    expenses
        .iter()
        .filter(|e| category == ALL_CATEGORIES || e.category == category)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(category: &str, amount: f64) -> Expense {
        Expense::new("demo_user", category, amount, "test", "2024-01-01", 0)
    }

    #[test]
    fn test_summarize_empty() {
        let summary = summarize(&[]);

        assert_eq!(summary.count, 0);
        assert_eq!(summary.total, 0.0);
        assert_eq!(summary.average, 0.0);
        assert_eq!(summary.top_category, None);
        assert!(summary.categories.is_empty());
    }

    #[test]
    fn test_summarize_totals_and_average() {
        let expenses = vec![
            expense("Food", 10.0),
            expense("Food", 20.0),
            expense("Transportation", 30.0),
        ];

        let summary = summarize(&expenses);

        assert_eq!(summary.count, 3);
        assert_eq!(summary.total, 60.0);
        assert_eq!(summary.average, 20.0);
    }

    #[test]
    fn test_summarize_breakdown_sorted_by_total() {
        let expenses = vec![
            expense("Food", 10.0),
            expense("Shopping", 50.0),
            expense("Food", 15.0),
            expense("Health", 25.0),
        ];

        let summary = summarize(&expenses);
        let names: Vec<&str> = summary
            .categories
            .iter()
            .map(|c| c.category.as_str())
            .collect();

        // Food and Health tie at 25, broken by name
        assert_eq!(names, vec!["Shopping", "Food", "Health"]);
        assert_eq!(summary.categories[1].count, 2);
        assert_eq!(summary.categories[0].percentage, 50.0);
        assert_eq!(summary.top_category.as_deref(), Some("Shopping"));
    }

    #[test]
    fn test_summarize_no_top_category_without_positive_total() {
        let expenses = vec![expense("Refund", -5.0), expense("Other", 0.0)];

        let summary = summarize(&expenses);

        assert_eq!(summary.top_category, None);
        assert_eq!(summary.categories.len(), 2);
    }

    #[test]
    fn test_summarize_zero_total_has_zero_percentages() {
        let expenses = vec![expense("Food", 5.0), expense("Refund", -5.0)];

        let summary = summarize(&expenses);

        assert!(summary.categories.iter().all(|c| c.percentage == 0.0));
    }

    #[test]
    fn test_filter_by_category() {
        let expenses = vec![
            expense("Food", 1.0),
            expense("Health", 2.0),
            expense("Food", 3.0),
        ];

        let food = filter_by_category(&expenses, "Food");
        assert_eq!(food.len(), 2);
        assert!(food.iter().all(|e| e.category == "Food"));

        assert_eq!(filter_by_category(&expenses, ALL_CATEGORIES).len(), 3);
        assert!(filter_by_category(&expenses, "food").is_empty());
    }
}
