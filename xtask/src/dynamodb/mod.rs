//! DynamoDB infrastructure management commands.

mod client;
mod config;
mod deploy;
mod error;
mod planning;
mod seed;

pub use error::{DynamodbError, Result};

use crate::prelude::*;
use dialoguer::Confirm;

/// DynamoDB infrastructure management commands.
#[derive(Debug, clap::Parser)]
pub struct DynamodbCommand {
    #[command(subcommand)]
    pub action: DynamodbAction,
}

/// Available DynamoDB actions.
#[derive(Debug, clap::Subcommand)]
pub enum DynamodbAction {
    /// Deploy or destroy DynamoDB table infrastructure.
    Deploy(DeployCommand),

    /// Seed a user with demo expenses.
    Seed(SeedCommand),
}

/// Deploy or update DynamoDB infrastructure.
#[derive(Debug, clap::Parser)]
#[command(long_about = "Deploy or destroy DynamoDB table infrastructure.

By default, this command creates the expenses DynamoDB table with the
userId (HASH) / expenseId (RANGE) key schema, billed per request. An
existing table with a different key schema is reported and left alone.

The command shows a plan of changes before applying and asks for confirmation.

Environment variables:
  AWS_ENDPOINT_URL    - Use local DynamoDB (e.g., http://localhost:8000)
  AWS_REGION          - AWS region (defaults to us-east-1)
  AWS_PROFILE         - AWS profile to use for credentials")]
pub struct DeployCommand {
    /// Skip confirmation prompts.
    #[arg(long)]
    pub force: bool,

    /// Destroy the table instead of creating/updating.
    #[arg(long)]
    pub destroy: bool,

    /// Table name to use.
    #[arg(long, env = "EXPENSES_TABLE_NAME", default_value = config::DEFAULT_TABLE_NAME)]
    pub table_name: String,
}

/// Seed a user with demo expenses.
#[derive(Debug, clap::Parser)]
#[command(long_about = "Generate and insert demo expenses into DynamoDB.

Creates expenses across every dashboard category (Food, Transportation,
Shopping, Entertainment, Utilities, Health, Other), dated over the last
30 days.")]
pub struct SeedCommand {
    /// User to create expenses for.
    #[arg(long, default_value = "demo_user")]
    pub user_id: String,

    /// Number of expenses to generate.
    #[arg(long, default_value = "15")]
    pub count: u32,

    /// Table name to use.
    #[arg(long, env = "EXPENSES_TABLE_NAME", default_value = config::DEFAULT_TABLE_NAME)]
    pub table_name: String,

    /// Skip confirmation prompts.
    #[arg(long)]
    pub force: bool,
}

/// Main entry point for dynamodb command.
pub async fn run(command: DynamodbCommand, global: crate::Global) -> Result<()> {
    match command.action {
        DynamodbAction::Deploy(deploy_cmd) => run_deploy(deploy_cmd, &global).await,
        DynamodbAction::Seed(seed_cmd) => run_seed(seed_cmd, &global).await,
    }
}

/// Progress output that honours `--silent`.
struct Console {
    silent: bool,
}

impl Console {
    fn new(global: &crate::Global) -> Self {
        Self {
            silent: global.is_silent(),
        }
    }

    fn say(&self, text: impl std::fmt::Display) {
        if !self.silent {
            aprintln!("{}", text);
        }
    }

    fn field(&self, label: &str, value: impl std::fmt::Display) {
        self.say(format!("{} {}", p_b(label), value));
    }

    fn plan(&self, title: &str, lines: &[String]) {
        self.say(p_c(title));
        for line in lines {
            self.say(format!("  {}", style_plan_line(line)));
        }
        self.say("");
    }
}

/// Colour a plan line by its leading marker (`+` add, `-` delete, `!` conflict).
fn style_plan_line(line: &str) -> String {
    match line.chars().next() {
        Some('+') => p_g(line),
        Some('-') | Some('!') => p_r(line),
        Some('=') => p_y(line),
        _ => line.to_string(),
    }
}

/// Ask before touching the table, unless `--force` was given.
fn confirm(prompt: &str, default: bool, force: bool) -> Result<()> {
    if force {
        return Ok(());
    }

    let confirmed = Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(|e| DynamodbError::AwsSdk(e.to_string()))?;

    if confirmed {
        Ok(())
    } else {
        Err(DynamodbError::UserCancelled)
    }
}

async fn run_deploy(cmd: DeployCommand, global: &crate::Global) -> Result<()> {
    let console = Console::new(global);
    let aws_config = client::AwsConfig::default();
    console.field("Target:", aws_config.target_display());
    console.say("");

    let dynamo_client = client::create_client(&aws_config).await?;
    let current = client::get_table_state(&dynamo_client, &cmd.table_name).await?;

    if cmd.destroy {
        destroy_table(&console, &dynamo_client, current.as_ref(), &cmd).await
    } else {
        create_table(&console, &dynamo_client, current.as_ref(), &cmd).await
    }
}

async fn create_table(
    console: &Console,
    dynamo_client: &aws_sdk_dynamodb::Client,
    current: Option<&planning::TableState>,
    cmd: &DeployCommand,
) -> Result<()> {
    let table_config = config::expenses_table_config().with_table_name(&cmd.table_name);
    let plan = planning::calculate_deploy_plan(current, &table_config);
    console.plan("Deploy Plan:", &planning::format_deploy_plan(&plan));

    match &plan {
        planning::DeployPlan::KeySchemaMismatch { table_name, .. } => {
            return Err(DynamodbError::KeySchemaMismatch {
                table_name: table_name.clone(),
            });
        }
        planning::DeployPlan::NoChanges { .. } => {
            console.say(p_g("Expenses table is ready."));
            return Ok(());
        }
        planning::DeployPlan::CreateTable { .. } => {}
    }

    confirm(
        &format!("Create table '{}'?", cmd.table_name),
        true,
        cmd.force,
    )?;
    console.say(p_b("Creating table..."));
    deploy::execute_deploy_plan(dynamo_client, &plan).await?;
    console.say(p_g("Expenses table created."));

    Ok(())
}

async fn destroy_table(
    console: &Console,
    dynamo_client: &aws_sdk_dynamodb::Client,
    current: Option<&planning::TableState>,
    cmd: &DeployCommand,
) -> Result<()> {
    let plan = planning::calculate_destroy_plan(current, &cmd.table_name);
    console.plan("Destroy Plan:", &planning::format_destroy_plan(&plan));

    if matches!(plan, planning::DestroyPlan::AlreadyGone { .. }) {
        return Ok(());
    }

    confirm(
        &format!(
            "Delete table '{}' and every expense in it?",
            cmd.table_name
        ),
        false,
        cmd.force,
    )?;
    console.say(p_b("Deleting table..."));
    deploy::execute_destroy_plan(dynamo_client, &plan).await?;
    console.say(p_g("Expenses table deleted."));

    Ok(())
}

async fn run_seed(cmd: SeedCommand, global: &crate::Global) -> Result<()> {
    let console = Console::new(global);
    let aws_config = client::AwsConfig::default();
    console.field("Target:", aws_config.target_display());
    console.field("Table:", &cmd.table_name);
    console.field("User:", &cmd.user_id);
    console.field("Expense count:", cmd.count);
    console.say("");

    let dynamo_client = client::create_client(&aws_config).await?;
    if client::get_table_state(&dynamo_client, &cmd.table_name)
        .await?
        .is_none()
    {
        return Err(DynamodbError::TableNotFound {
            table_name: cmd.table_name,
        });
    }

    let expenses = seed::generate_seed_expenses(
        &cmd.user_id,
        chrono::Local::now().date_naive(),
        cmd.count,
        chrono::Utc::now().timestamp_millis(),
    );

    let preview: Vec<String> = expenses
        .iter()
        .take(5)
        .map(|e| format!("{} {:>8.2} {} ({})", e.date, e.amount, e.description, e.category))
        .chain((expenses.len() > 5).then(|| format!("... and {} more", expenses.len() - 5)))
        .collect();
    console.plan("Expenses to create:", &preview);

    confirm(
        &format!("Insert {} expenses for {}?", expenses.len(), cmd.user_id),
        true,
        cmd.force,
    )?;

    let inserted = seed::seed_expenses(&dynamo_client, &cmd.table_name, &expenses).await?;
    console.say(format!("{} {} expenses inserted.", p_g("Success:"), inserted));

    Ok(())
}
