//! User record CLI commands.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use dialoguer::Confirm;
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use directory_core::config::AppConfig;
use directory_core::error::{AppError, ErrorKind};
use directory_core::types::{PageRequest, UserId};
use directory_entity::user::User;

/// Arguments for user commands
#[derive(Debug, Args)]
pub struct UserArgs {
    /// User subcommand
    #[command(subcommand)]
    pub command: UserCommand,
}

/// User subcommands
#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// List users, newest first
    List {
        /// Page number (1-based)
        #[arg(short, long, default_value_t = 1)]
        page: u64,
        /// Page size (defaults to the configured page size)
        #[arg(short, long)]
        limit: Option<u64>,
        /// Case-insensitive match on name, email or mobile
        #[arg(short, long, default_value = "")]
        search: String,
    },
    /// Show a single user
    Show {
        /// User ID
        id: String,
    },
    /// Delete a user and their profile image
    Delete {
        /// User ID
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Export every user as CSV
    Export {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// User display row for table output
#[derive(Debug, Serialize, Tabled)]
struct UserRow {
    /// User ID
    id: String,
    /// Full name
    name: String,
    /// Email
    email: String,
    /// Mobile
    mobile: String,
    /// Gender
    gender: String,
    /// Status
    status: String,
    /// Location
    location: String,
    /// Created at
    created_at: String,
}

impl From<&User> for UserRow {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            name: format!("{} {}", user.first_name, user.last_name),
            email: user.email.clone(),
            mobile: user.mobile.clone(),
            gender: user.gender.to_string(),
            status: user.status.to_string(),
            location: user.location.clone(),
            created_at: user.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Execute user commands
pub async fn execute(
    args: &UserArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let service = super::build_user_service(config).await?;

    match &args.command {
        UserCommand::List {
            page,
            limit,
            search,
        } => {
            let request = PageRequest::new(*page, limit.unwrap_or(config.users.default_page_size));
            let result = service.list(request, search).await?;
            let rows: Vec<UserRow> = result.items.iter().map(UserRow::from).collect();
            output::print_list(&rows, format);

            if format == OutputFormat::Table {
                println!(
                    "Page {} of {} ({} users)",
                    result.page, result.total_pages, result.total_items
                );
            }
        }
        UserCommand::Show { id } => {
            let user = service.get(parse_id(id)?).await?;
            output::print_item(&UserRow::from(&user), format);
            if format == OutputFormat::Table && user.has_profile_image() {
                output::print_kv("Profile image", &user.profile_image);
            }
        }
        UserCommand::Delete { id, yes } => {
            let id = parse_id(id)?;
            if !yes && !confirm_delete(&id)? {
                output::print_warning("Aborted");
                return Ok(());
            }

            let outcome = service.delete(id).await?;
            for warning in &outcome.warnings {
                output::print_warning(warning);
            }
            output::print_success(&format!("User '{id}' deleted"));
        }
        UserCommand::Export { output: path } => {
            let csv = service.export_csv().await?;
            match path {
                Some(path) => {
                    tokio::fs::write(path, csv).await.map_err(|e| {
                        AppError::with_source(
                            ErrorKind::Internal,
                            format!("Failed to write {}", path.display()),
                            e,
                        )
                    })?;
                    output::print_success(&format!("Exported to {}", path.display()));
                }
                None => print!("{csv}"),
            }
        }
    }

    Ok(())
}

fn parse_id(raw: &str) -> Result<UserId, AppError> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::validation(format!("'{raw}' is not a valid user id")))
}

fn confirm_delete(id: &UserId) -> Result<bool, AppError> {
    Confirm::new()
        .with_prompt(format!("Delete user '{id}'?"))
        .default(false)
        .interact()
        .map_err(|e| AppError::with_source(ErrorKind::Internal, "Prompt failed", e))
}
