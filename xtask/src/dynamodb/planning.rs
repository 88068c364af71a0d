//! Pure functions for calculating deployment plans (Functional Core).

use super::config::TableConfig;

/// Represents the current state of a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableState {
    pub status: TableStatus,
    /// Name of the hash key attribute, when DescribeTable reports one.
    pub partition_key: Option<String>,
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
    /// Table exists with the expected key, no changes needed.
    NoChanges { table_name: String },
    /// Table exists but is keyed differently. Key schemas cannot be changed
    /// in place, so the table has to be destroyed first.
    Incompatible {
        table_name: String,
        expected: String,
        actual: String,
    },
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

    match state.partition_key.as_deref() {
        Some(actual) if actual != desired.partition_key.name => DeployPlan::Incompatible {
            table_name: desired.table_name.clone(),
            expected: desired.partition_key.name.clone(),
            actual: actual.to_string(),
        },
        _ => DeployPlan::NoChanges {
            table_name: desired.table_name.clone(),
        },
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
            format!(
                "  Partition key: {} ({})",
                config.partition_key.name,
                config.partition_key.attribute_type.descriptor()
            ),
            "  Billing: PAY_PER_REQUEST".to_string(),
        ],
        DeployPlan::NoChanges { table_name } => {
            vec![format!("= Table '{}' is up to date", table_name)]
        }
        DeployPlan::Incompatible {
            table_name,
            expected,
            actual,
        } => vec![
            format!("! Table '{}' is keyed by '{}'", table_name, actual),
            format!("  Expected partition key: {}", expected),
            "  Run with --destroy first to recreate it".to_string(),
        ],
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
    use crate::dynamodb::config::users_table_config;

    fn state(partition_key: Option<&str>) -> TableState {
        TableState {
            status: TableStatus::Active,
            partition_key: partition_key.map(str::to_string),
        }
    }

    #[test]
    fn test_missing_table_is_created() {
        let config = users_table_config();

        let plan = calculate_deploy_plan(None, &config);

        assert_eq!(plan, DeployPlan::CreateTable { config });
    }

    #[test]
    fn test_matching_table_needs_no_changes() {
        let config = users_table_config();

        let plan = calculate_deploy_plan(Some(&state(Some("userId"))), &config);

        assert_eq!(
            plan,
            DeployPlan::NoChanges {
                table_name: "Users".to_string()
            }
        );
    }

    #[test]
    fn test_differently_keyed_table_is_incompatible() {
        let config = users_table_config().with_table_name("Legacy");

        let plan = calculate_deploy_plan(Some(&state(Some("PK"))), &config);

        assert_eq!(
            plan,
            DeployPlan::Incompatible {
                table_name: "Legacy".to_string(),
                expected: "userId".to_string(),
                actual: "PK".to_string(),
            }
        );
    }

    #[test]
    fn test_destroy_plan() {
        assert_eq!(
            calculate_destroy_plan(Some(&state(None)), "Users"),
            DestroyPlan::DeleteTable {
                table_name: "Users".to_string()
            }
        );
        assert_eq!(
            calculate_destroy_plan(None, "Users"),
            DestroyPlan::AlreadyGone {
                table_name: "Users".to_string()
            }
        );
    }

    #[test]
    fn test_format_create_plan() {
        let plan = DeployPlan::CreateTable {
            config: users_table_config(),
        };

        assert_eq!(
            format_deploy_plan(&plan),
            vec![
                "+ Create table: Users",
                "  Partition key: userId (S)",
                "  Billing: PAY_PER_REQUEST",
            ]
        );
    }
}
