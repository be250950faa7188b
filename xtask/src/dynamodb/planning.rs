//! Pure functions for calculating deployment plans (Functional Core).

use super::config::TableConfig;

/// Represents the current state of a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableState {
    pub status: TableStatus,
    /// HASH key attribute name.
    pub partition_key: Option<String>,
    /// RANGE key attribute name.
    pub sort_key: Option<String>,
}

/// Table status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableStatus {
    Active,
    Creating,
    Updating,
    Deleting,
}

/// Planned changes for deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployPlan {
    /// Table doesn't exist, needs to be created.
    CreateTable { config: TableConfig },
    /// Table exists with a different key schema. Keys cannot be altered in place.
    KeySchemaMismatch {
        table_name: String,
        expected: (String, String),
        found: (Option<String>, Option<String>),
    },
    /// Table is up to date, no changes needed.
    NoChanges { table_name: String },
}

/// Plan for destroying a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DestroyPlan {
    /// Table exists and will be deleted.
    DeleteTable { table_name: String },
    /// Table doesn't exist, nothing to do.
    AlreadyGone { table_name: String },
}

/// Pure function: Calculate what changes are needed to reach desired state.
pub fn calculate_deploy_plan(current: Option<&TableState>, desired: &TableConfig) -> DeployPlan {
    let Some(state) = current else {
        return DeployPlan::CreateTable {
            config: desired.clone(),
        };
    };

    let pk_matches = state.partition_key.as_deref() == Some(desired.partition_key.name.as_str());
    let sk_matches = state.sort_key.as_deref() == Some(desired.sort_key.name.as_str());

    if pk_matches && sk_matches {
        DeployPlan::NoChanges {
            table_name: desired.table_name.clone(),
        }
    } else {
        DeployPlan::KeySchemaMismatch {
            table_name: desired.table_name.clone(),
            expected: (
                desired.partition_key.name.clone(),
                desired.sort_key.name.clone(),
            ),
            found: (state.partition_key.clone(), state.sort_key.clone()),
        }
    }
}

/// Pure function: Calculate destroy plan.
pub fn calculate_destroy_plan(current: Option<&TableState>, table_name: &str) -> DestroyPlan {
    match current {
        Some(_) => DestroyPlan::DeleteTable {
            table_name: table_name.to_string(),
        },
        None => DestroyPlan::AlreadyGone {
            table_name: table_name.to_string(),
        },
    }
}

/// Pure function: Format a deploy plan for display.
pub fn format_deploy_plan(plan: &DeployPlan) -> Vec<String> {
    match plan {
        DeployPlan::CreateTable { config } => vec![
            format!("+ Create table: {}", config.table_name),
            format!("  Partition key: {} (S)", config.partition_key.name),
            format!("  Sort key: {} (S)", config.sort_key.name),
            "  Billing: PAY_PER_REQUEST".to_string(),
        ],
        DeployPlan::KeySchemaMismatch {
            table_name,
            expected,
            found,
        } => vec![
            format!("! Table '{}' has an incompatible key schema", table_name),
            format!("  Expected: {} / {}", expected.0, expected.1),
            format!(
                "  Found:    {} / {}",
                found.0.as_deref().unwrap_or("-"),
                found.1.as_deref().unwrap_or("-")
            ),
        ],
        DeployPlan::NoChanges { table_name } => {
            vec![format!("= Table '{}' is up to date", table_name)]
        }
    }
}

/// Pure function: Format a destroy plan for display.
pub fn format_destroy_plan(plan: &DestroyPlan) -> Vec<String> {
    match plan {
        DestroyPlan::DeleteTable { table_name } => {
            vec![format!(
                "- Delete table: {} (ALL DATA WILL BE LOST)",
                table_name
            )]
        }
        DestroyPlan::AlreadyGone { table_name } => {
            vec![format!("= Table '{}' does not exist", table_name)]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamodb::config::expenses_table_config;

    fn state(pk: Option<&str>, sk: Option<&str>) -> TableState {
        TableState {
            status: TableStatus::Active,
            partition_key: pk.map(str::to_string),
            sort_key: sk.map(str::to_string),
        }
    }

    #[test]
    fn test_missing_table_is_created() {
        let desired = expenses_table_config();
        let plan = calculate_deploy_plan(None, &desired);

        assert_eq!(plan, DeployPlan::CreateTable { config: desired });
    }

    #[test]
    fn test_matching_table_has_no_changes() {
        let current = state(Some("userId"), Some("expenseId"));
        let plan = calculate_deploy_plan(Some(&current), &expenses_table_config());

        assert!(matches!(plan, DeployPlan::NoChanges { .. }));
    }

    #[test]
    fn test_wrong_keys_are_reported() {
        let current = state(Some("PK"), Some("SK"));
        let plan = calculate_deploy_plan(Some(&current), &expenses_table_config());

        assert_eq!(
            plan,
            DeployPlan::KeySchemaMismatch {
                table_name: "ExpensesTable".to_string(),
                expected: ("userId".to_string(), "expenseId".to_string()),
                found: (Some("PK".to_string()), Some("SK".to_string())),
            }
        );
    }

    #[test]
    fn test_missing_sort_key_is_mismatch() {
        let current = state(Some("userId"), None);
        let plan = calculate_deploy_plan(Some(&current), &expenses_table_config());

        let lines = format_deploy_plan(&plan);
        assert_eq!(lines[2], "  Found:    userId / -");
    }

    #[test]
    fn test_format_create_plan() {
        let plan = calculate_deploy_plan(None, &expenses_table_config());
        let lines = format_deploy_plan(&plan);

        assert_eq!(lines[0], "+ Create table: ExpensesTable");
        assert_eq!(lines[1], "  Partition key: userId (S)");
        assert_eq!(lines[2], "  Sort key: expenseId (S)");
    }

    #[test]
    fn test_destroy_plan() {
        let current = state(Some("userId"), Some("expenseId"));

        assert_eq!(
            calculate_destroy_plan(Some(&current), "t"),
            DestroyPlan::DeleteTable {
                table_name: "t".to_string()
            }
        );
        assert_eq!(
            calculate_destroy_plan(None, "t"),
            DestroyPlan::AlreadyGone {
                table_name: "t".to_string()
            }
        );
    }
}
