//! expenses-client CLI entry point.

use clap::Parser;
use expenses_client::cli::{Cli, Commands, OutputFormat};
use expenses_client::client::ExpensesClient;
use expenses_client::output::{format_json, pretty};
use expenses_client::ClientError;
use expenses_core::expense::{
    filter_by_category, summarize, CreateExpenseRequest, ALL_CATEGORIES,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = ExpensesClient::new(&cli.base_url);

    match cli.command {
        Commands::Add {
            category,
            amount,
            description,
            date,
        } => {
            if !amount.is_finite() {
                return Err(ClientError::InvalidInput(format!(
                    "amount must be a finite number: {amount}"
                ))
                .into());
            }
            let date = date.unwrap_or_else(|| chrono::Local::now().date_naive());
            let request = CreateExpenseRequest::new(
                &cli.user,
                category,
                amount,
                description,
                date.format("%Y-%m-%d").to_string(),
            );
            let expense = client.create_expense(&request).await?;
            match cli.format {
                OutputFormat::Json => println!("{}", format_json(&expense)),
                OutputFormat::Pretty if cli.quiet => println!("{}", expense.expense_id),
                OutputFormat::Pretty => {
                    println!("Created:\n{}", pretty::format_expense(&expense))
                }
            }
        }
        Commands::List { category } => {
            let expenses = client.list_expenses(&cli.user).await?;
            let category = category.as_deref().unwrap_or(ALL_CATEGORIES);
            let filtered = filter_by_category(&expenses, category);
            match cli.format {
                OutputFormat::Json => println!("{}", format_json(&filtered)),
                OutputFormat::Pretty => {
                    println!("{}", pretty::format_expenses(filtered.iter().copied()))
                }
            }
        }
        Commands::Delete { expense_id } => {
            let body = client.delete_expense(&cli.user, &expense_id).await?;
            match cli.format {
                OutputFormat::Json => println!("{}", format_json(&body)),
                OutputFormat::Pretty => {
                    if !cli.quiet {
                        println!("{} ({})", body.message, expense_id);
                    }
                }
            }
        }
        Commands::Summary => {
            let expenses = client.list_expenses(&cli.user).await?;
            let summary = summarize(&expenses);
            match cli.format {
                OutputFormat::Json => println!("{}", format_json(&summary)),
                OutputFormat::Pretty => println!("{}", pretty::format_summary(&summary)),
            }
        }
    }

    Ok(())
}
