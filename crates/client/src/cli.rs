//! CLI command definitions.

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};

/// CLI client for the expenses API.
#[derive(Debug, Parser)]
#[command(name = "expenses-client")]
#[command(about = "CLI client for the expenses API", long_about = None)]
pub struct Cli {
    /// Server base URL.
    #[arg(long, env = "EXPENSES_API_URL", default_value = "http://localhost:3000")]
    pub base_url: String,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Terse output: `add` prints only the new ID, `delete` prints nothing.
    #[arg(long)]
    pub quiet: bool,

    /// User whose expenses to operate on.
    #[arg(long, env = "EXPENSES_USER", default_value = "demo_user")]
    pub user: String,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Record a new expense.
    Add {
        /// Spending category, e.g. Food or Transport.
        #[arg(long)]
        category: String,
        /// Amount spent.
        #[arg(long, allow_negative_numbers = true)]
        amount: f64,
        /// What the money was spent on.
        #[arg(long)]
        description: String,
        /// Date of the expense (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// List expenses.
    List {
        /// Only show this category ("All" shows everything).
        #[arg(long)]
        category: Option<String>,
    },
    /// Delete an expense by ID.
    Delete {
        /// Expense ID.
        expense_id: String,
    },
    /// Show totals per category.
    Summary,
}
