//! Seed command implementation.

use super::error::{DynamodbError, Result};
use aws_sdk_dynamodb::Client;
use chrono::{Duration, NaiveDate};
use expenses::storage::DynamoDbRepository;
use expenses_core::expense::Expense;
use expenses_core::storage::ExpenseRepository;

/// Categories offered by the web dashboard, with sample descriptions and a base amount.
const CATALOG: &[(&str, &[&str], f64)] = &[
    ("Food", &["Groceries", "Lunch", "Coffee", "Dinner out"], 18.5),
    ("Transportation", &["Bus pass", "Taxi", "Fuel"], 24.0),
    ("Shopping", &["Shoes", "Books", "Headphones"], 45.0),
    ("Entertainment", &["Cinema", "Concert", "Streaming"], 15.0),
    ("Utilities", &["Electricity", "Internet", "Water"], 60.0),
    ("Health", &["Pharmacy", "Dentist"], 35.0),
    ("Other", &["Gift", "Donation"], 20.0),
];

/// Generate demo expenses for a user, spread over the 30 days ending `today`.
///
/// Deterministic for a given input, apart from the generated IDs.
pub fn generate_seed_expenses(
    user_id: &str,
    today: NaiveDate,
    count: u32,
    timestamp: i64,
) -> Vec<Expense> {
    (0..count)
        .map(|i| {
            let (category, descriptions, base) = CATALOG[i as usize % CATALOG.len()];
            let description = descriptions[(i as usize / CATALOG.len()) % descriptions.len()];
            let amount = base + f64::from(i % 5) * 2.25;
            let date = today - Duration::days(i64::from((i * 3) % 30));

            Expense::new(
                user_id,
                category,
                amount,
                description,
                date.format("%Y-%m-%d").to_string(),
                timestamp,
            )
        })
        .collect()
}

/// Insert expenses into DynamoDB through the API's repository.
pub async fn seed_expenses(client: &Client, table_name: &str, expenses: &[Expense]) -> Result<u32> {
    let repo = DynamoDbRepository::new(client.clone(), table_name);
    let mut inserted = 0;

    for expense in expenses {
        repo.put_expense(expense)
            .await
            .map_err(|e| DynamodbError::AwsSdk(e.to_string()))?;
        inserted += 1;
    }

    Ok(inserted)
}
