//! CLI command definitions.

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use usertable_core::user::Phone;

/// Manage the Users table.
#[derive(Debug, Parser)]
#[command(name = "usertable")]
#[command(version, about = "Manage the Users table", long_about = None)]
pub struct Cli {
    /// Storage backend.
    #[arg(long, value_enum, default_value_t = Backend::default(), env = "USERS_BACKEND")]
    pub backend: Backend,

    /// Table name [env: USERS_TABLE_NAME, default: Users].
    #[arg(long)]
    pub table_name: Option<String>,

    /// DynamoDB endpoint, e.g. http://localhost:8000 [env: AWS_ENDPOINT_URL].
    #[arg(long)]
    pub endpoint_url: Option<String>,

    /// AWS region [env: AWS_REGION, default: us-east-1].
    #[arg(long)]
    pub region: Option<String>,

    /// Items evaluated per scan request [env: SCAN_PAGE_SIZE].
    #[arg(long)]
    pub page_size: Option<u32>,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Do not print confirmations of successful writes (pretty output only).
    #[arg(long)]
    pub quiet: bool,

    /// Log at debug level.
    #[arg(long, short)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Storage backend options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    /// AWS DynamoDB.
    #[cfg(feature = "dynamodb")]
    Dynamodb,
    /// In-process store pre-loaded with demo users.
    #[cfg(feature = "inmemory")]
    Memory,
}

impl Default for Backend {
    #[cfg(feature = "dynamodb")]
    fn default() -> Self {
        Backend::Dynamodb
    }

    #[cfg(not(feature = "dynamodb"))]
    fn default() -> Self {
        Backend::Memory
    }
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
    /// Create a user, replacing any user with the same ID.
    Add {
        /// User ID (default: a new UUID).
        #[arg(long)]
        user_id: Option<String>,
        #[arg(long)]
        organization_id: String,
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        /// Any number, e.g. 5551234 or -1.5.
        #[arg(long, allow_hyphen_values = true)]
        phone: Phone,
        /// Initial membership expiry flag (default: unset).
        #[arg(long)]
        membership_expired: Option<bool>,
    },
    /// Get a user by ID.
    Get {
        user_id: String,
    },
    /// List the users of an organization.
    ListOrg {
        organization_id: String,
    },
    /// Update some fields of a user.
    Update {
        user_id: String,
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
        #[arg(long, allow_hyphen_values = true)]
        phone: Option<Phone>,
    },
    /// Set the membership expiry flag of a user.
    SetExpired {
        user_id: String,
        #[arg(long, action = ArgAction::Set, default_value_t = true)]
        expired: bool,
    },
    /// Delete a user by ID.
    Delete {
        user_id: String,
    },
    /// Delete every user of an organization.
    DeleteOrg {
        organization_id: String,
    },
    /// List every user in the table.
    List,
    /// Count every user in the table.
    Count,
    /// List outstanding invitations.
    Pending,
    /// Turn an invitation into an active user.
    Activate {
        /// Invitation code, without the PENDING# prefix.
        code: String,
        /// ID of the activated user.
        user_id: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_update_with_partial_fields() {
        let cli = Cli::try_parse_from(["usertable", "update", "user42", "--phone", "5551234"])
            .unwrap();

        match cli.command {
            Commands::Update {
                user_id,
                first_name,
                last_name,
                phone,
            } => {
                assert_eq!(user_id, "user42");
                assert_eq!(first_name, None);
                assert_eq!(last_name, None);
                assert_eq!(phone, Some(Phone::from(5_551_234_u64)));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_negative_decimal_phone() {
        let cli = Cli::try_parse_from([
            "usertable", "add", "--organization-id", "org-1", "--first-name", "Ada",
            "--last-name", "Lovelace", "--phone", "-1.5",
        ])
        .unwrap();

        match cli.command {
            Commands::Add { phone, .. } => assert_eq!(phone.as_str(), "-1.5"),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_non_numeric_phone_is_rejected() {
        let result = Cli::try_parse_from(["usertable", "update", "user42", "--phone", "555-1234"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_quiet() {
        let cli = Cli::try_parse_from(["usertable", "--quiet", "delete", "user42"]).unwrap();
        assert!(cli.quiet);
    }

    #[test]
    fn test_set_expired_defaults_to_true() {
        let cli = Cli::try_parse_from(["usertable", "set-expired", "user42"]).unwrap();
        assert!(matches!(cli.command, Commands::SetExpired { expired: true, .. }));

        let cli = Cli::try_parse_from(["usertable", "set-expired", "user42", "--expired", "false"])
            .unwrap();
        assert!(matches!(cli.command, Commands::SetExpired { expired: false, .. }));
    }

    #[test]
    fn test_parse_activate() {
        let cli = Cli::try_parse_from([
            "usertable", "--format", "json", "activate", "abc123", "user42",
        ])
        .unwrap();

        assert!(matches!(cli.format, OutputFormat::Json));
        match cli.command {
            Commands::Activate { code, user_id } => {
                assert_eq!(code, "abc123");
                assert_eq!(user_id, "user42");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[cfg(feature = "inmemory")]
    #[test]
    fn test_memory_backend() {
        let cli = Cli::try_parse_from(["usertable", "--backend", "memory", "count"]).unwrap();
        assert_eq!(cli.backend, Backend::Memory);
    }
}
