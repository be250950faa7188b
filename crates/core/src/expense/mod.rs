mod error;
mod requests;
mod summary;
mod types;

pub use error::ExpenseError;
pub use requests::CreateExpenseRequest;
pub use summary::{filter_by_category, summarize, CategoryTotal, ExpenseSummary, ALL_CATEGORIES};
pub use types::Expense;
