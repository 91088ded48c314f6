//! User management CLI commands.

use std::sync::Arc;

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use docflow_auth::{JwtEncoder, PasswordHasher};
use docflow_core::config::AppConfig;
use docflow_core::error::AppError;
use docflow_database::repositories::UserRepository;
use docflow_entity::User;
use docflow_service::user::{RegisterRequest, UserService};

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
    /// Create a user account
    Create {
        /// Username
        #[arg(short, long)]
        username: String,
        /// Email address
        #[arg(short, long)]
        email: String,
        /// Password (prompted for when omitted)
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Show a user by username
    Show {
        /// Username
        username: String,
    },
}

/// User display row for table output
#[derive(Debug, Serialize, Tabled)]
struct UserRow {
    /// User ID
    id: String,
    /// Username
    username: String,
    /// Email
    email: String,
    /// Created at
    created_at: String,
}

/// Execute user commands
pub async fn execute(
    args: &UserArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let store = super::open_store(config).await?;
    let users = Arc::new(UserRepository::new(store.clone()));

    let result = match &args.command {
        UserCommand::Create {
            username,
            email,
            password,
        } => create(config, users, username, email, password.clone(), format).await,
        UserCommand::Show { username } => show(&users, username, format).await,
    };

    store.close().await;
    result
}

async fn create(
    config: &AppConfig,
    users: Arc<UserRepository>,
    username: &str,
    email: &str,
    password: Option<String>,
    format: OutputFormat,
) -> Result<(), AppError> {
    let password = match password {
        Some(p) => p,
        None => dialoguer::Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords do not match")
            .interact()
            .map_err(|e| AppError::internal(format!("Input error: {e}")))?,
    };

    let service = UserService::new(
        users,
        Arc::new(PasswordHasher::new()),
        Arc::new(JwtEncoder::new(&config.auth)?),
    );
    let user = service
        .create_account(RegisterRequest {
            username: username.to_string(),
            email: email.to_string(),
            password,
        })
        .await?;

    output::print_success(&format!("User '{}' created", user.username));
    output::print_list(&[row(&user)], format);
    Ok(())
}

async fn show(
    users: &UserRepository,
    username: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let user = users
        .find_by_username(username)
        .await?
        .ok_or_else(|| AppError::not_found(format!("User '{username}' not found")))?;
    output::print_list(&[row(&user)], format);
    Ok(())
}

fn row(user: &User) -> UserRow {
    UserRow {
        id: user.id.to_string(),
        username: user.username.clone(),
        email: user.email.clone(),
        created_at: user.created_at.format("%Y-%m-%d %H:%M").to_string(),
    }
}
