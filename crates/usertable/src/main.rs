//! usertable CLI entry point.

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use usertable::cli::{Backend, Cli, Commands, OutputFormat};
use usertable::config::Config;
use usertable::output::{format_confirmation, format_output, pretty};
use usertable::users::UsersRepository;
use usertable_core::storage::UserStore;
use usertable_core::user::{User, UserChanges};
use uuid::Uuid;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays clean for command output
    let filter = if cli.verbose {
        tracing_subscriber::EnvFilter::new("usertable=debug,usertable_core=debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "usertable=info".into())
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env()
        .with_table_name(cli.table_name.clone())
        .with_endpoint_url(cli.endpoint_url.clone())
        .with_region(cli.region.clone())
        .with_scan_page_size(cli.page_size);

    let store = build_store(cli.backend, &config).await;
    let repo = UsersRepository::new(store).with_page_size(config.scan_page_size);

    run(&cli, &repo).await
}

/// Build the store selected on the command line.
#[cfg_attr(not(feature = "dynamodb"), allow(unused_variables))]
async fn build_store(backend: Backend, config: &Config) -> Arc<dyn UserStore> {
    match backend {
        #[cfg(feature = "dynamodb")]
        Backend::Dynamodb => {
            use usertable::storage::DynamoDbUserStore;

            tracing::debug!(
                table = %config.table_name,
                region = %config.region,
                endpoint = ?config.endpoint_url,
                "Using DynamoDB backend"
            );
            Arc::new(
                DynamoDbUserStore::connect(
                    config.endpoint_url.as_deref(),
                    &config.region,
                    config.table_name.as_str(),
                )
                .await,
            )
        }
        #[cfg(feature = "inmemory")]
        Backend::Memory => {
            use usertable::mock_data::demo_users;
            use usertable::storage::InMemoryUserStore;

            let users = demo_users();
            tracing::debug!(users = users.len(), "Using in-memory backend with demo data");
            Arc::new(InMemoryUserStore::with_users(users))
        }
    }
}

/// Run one command. Negative outcomes exit with a failure status.
async fn run(cli: &Cli, repo: &UsersRepository) -> Result<ExitCode> {
    let format = cli.format;

    match &cli.command {
        Commands::Add {
            user_id,
            organization_id,
            first_name,
            last_name,
            phone,
            membership_expired,
        } => {
            let user_id = user_id
                .clone()
                .unwrap_or_else(|| Uuid::new_v4().to_string());
            let user = User {
                user_id,
                organization_id: organization_id.clone(),
                first_name: first_name.clone(),
                last_name: last_name.clone(),
                phone: phone.clone(),
                membership_expired: *membership_expired,
            };

            repo.add_user(&user).await?;
            confirm(format, cli.quiet, &user, || {
                format!("Created:\n{}", pretty::format_user(&user))
            });
        }
        Commands::Get { user_id } => match repo.get_user(user_id).await? {
            Some(user) => emit(format, &user, pretty::format_user(&user)),
            None => {
                eprintln!("User {} not found.", user_id);
                return Ok(ExitCode::FAILURE);
            }
        },
        Commands::ListOrg { organization_id } => {
            let users = repo.get_users_by_organization(organization_id).await?;
            emit(format, &users, pretty::format_users(&users));
        }
        Commands::Update {
            user_id,
            first_name,
            last_name,
            phone,
        } => {
            let changes = UserChanges {
                first_name: first_name.clone(),
                last_name: last_name.clone(),
                phone: phone.clone(),
                membership_expired: None,
            };
            let outcome = repo.update_user(user_id, &changes).await?;
            report(format, cli.quiet, outcome.is_success(), &outcome, || {
                pretty::format_update(user_id, outcome)
            });
            if !outcome.is_success() {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::SetExpired { user_id, expired } => {
            let outcome = repo.set_membership_expired(user_id, *expired).await?;
            report(format, cli.quiet, outcome.is_success(), &outcome, || {
                pretty::format_update(user_id, outcome)
            });
            if !outcome.is_success() {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Delete { user_id } => {
            repo.delete_user(user_id).await?;
            let deleted = serde_json::json!({ "deleted": user_id });
            confirm(format, cli.quiet, &deleted, || {
                format!("Deleted user {}", user_id)
            });
        }
        Commands::DeleteOrg { organization_id } => {
            let outcome = repo.delete_organization(organization_id).await?;
            report(format, cli.quiet, outcome.is_success(), &outcome, || {
                pretty::format_bulk_delete(organization_id, outcome)
            });
            if !outcome.is_success() {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::List => {
            let users = repo.list_all_users().await?;
            emit(format, &users, pretty::format_users(&users));
        }
        Commands::Count => {
            let count = repo.count_users().await?;
            emit(format, &count, count.to_string());
        }
        Commands::Pending => {
            let users = repo.get_pending_users().await?;
            emit(format, &users, pretty::format_users(&users));
        }
        Commands::Activate { code, user_id } => {
            let outcome = repo.activate_invitation(code, user_id).await?;
            report(format, cli.quiet, outcome.is_success(), &outcome, || {
                pretty::format_activation(code, &outcome)
            });
            if !outcome.is_success() {
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Print a read result.
fn emit<T: Serialize>(format: OutputFormat, value: &T, text: String) {
    println!("{}", format_output(value, format, || text));
}

/// Print the confirmation of a successful write unless `quiet`.
fn confirm<T: Serialize>(
    format: OutputFormat,
    quiet: bool,
    value: &T,
    text: impl FnOnce() -> String,
) {
    if let Some(output) = format_confirmation(value, format, quiet, text) {
        println!("{}", output);
    }
}

/// Print a write outcome. Negative outcomes are always printed.
fn report<T: Serialize>(
    format: OutputFormat,
    quiet: bool,
    success: bool,
    value: &T,
    text: impl FnOnce() -> String,
) {
    confirm(format, quiet && success, value, text);
}
