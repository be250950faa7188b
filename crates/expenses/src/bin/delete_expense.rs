//! Lambda entry point for `DELETE /expenses/{userId}/{expenseId}`.

use lambda_http::{run, service_fn, Error};

use expenses::{config::Config, lambda, state::AppState, telemetry::init_tracing};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Config::from_env();
    init_tracing(config.log_format);

    let state = AppState::from_config(&config).await?;

    run(service_fn(|event| lambda::delete_expense(&state, event))).await
}
