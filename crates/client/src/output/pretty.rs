//! Pretty output formatting.

use expenses_core::expense::{Expense, ExpenseSummary};

/// Format an expense for display.
pub fn format_expense(expense: &Expense) -> String {
    format!(
        "{} [{}] {:.2}\n  ID: {}\n  Date: {}",
        expense.description, expense.category, expense.amount, expense.expense_id, expense.date
    )
}

/// Format expenses for display.
pub fn format_expenses<'a>(expenses: impl ExactSizeIterator<Item = &'a Expense>) -> String {
    if expenses.len() == 0 {
        return "No expenses found.".to_string();
    }
    let mut output = format!("EXPENSES ({})\n", expenses.len());
    output.push_str(&"-".repeat(40));
    for expense in expenses {
        output.push_str(&format!("\n{}", format_expense(expense)));
        output.push('\n');
    }
    output
}

/// Format a spending summary for display.
pub fn format_summary(summary: &ExpenseSummary) -> String {
    if summary.count == 0 {
        return "No expenses found.".to_string();
    }
    let mut output = format!(
        "SUMMARY\n  Total: {:.2}\n  Expenses: {}\n  Average: {:.2}\n  Top category: {}\n",
        summary.total,
        summary.count,
        summary.average,
        summary.top_category.as_deref().unwrap_or("-"),
    );
    output.push_str(&"-".repeat(40));
    for category in &summary.categories {
        output.push_str(&format!(
            "\n{:<16} {:>10.2} {:>5.1}% ({})",
            category.category, category.total, category.percentage, category.count
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use expenses_core::expense::summarize;

    fn expense(category: &str, amount: f64) -> Expense {
        Expense::new("u1", category, amount, "x", "2024-01-01", 1).with_expense_id("e1")
    }

    #[test]
    fn test_format_expense() {
        let text = format_expense(&expense("Food", 12.5));
        assert_eq!(text, "x [Food] 12.50\n  ID: e1\n  Date: 2024-01-01");
    }

    #[test]
    fn test_format_expenses_empty() {
        let none: Vec<Expense> = Vec::new();
        assert_eq!(format_expenses(none.iter()), "No expenses found.");
    }

    #[test]
    fn test_format_expenses_header() {
        let list = vec![expense("Food", 1.0), expense("Rent", 2.0)];
        assert!(format_expenses(list.iter()).starts_with("EXPENSES (2)\n"));
    }

    #[test]
    fn test_format_summary() {
        let summary = summarize(&[expense("Food", 30.0), expense("Rent", 70.0)]);
        let text = format_summary(&summary);

        assert!(text.contains("Total: 100.00"));
        assert!(text.contains("Top category: Rent"));
        assert!(text.contains("70.0%"));
    }
}
