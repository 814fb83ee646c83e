//! Out-of-band user provisioning
//!
//! The web surface has no self-registration; accounts are created, listed,
//! and reassigned here, against whichever store backend is configured.

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use gamevault_rs::auth::password::Hasher;
use gamevault_rs::auth::store::CredentialStore;
use gamevault_rs::config::Config;
use gamevault_rs::core::models::{NewUser, Role};
use gamevault_rs::storage::StorageLayer;
use gamevault_rs::utils::error::VaultError;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "create-user", about = "Provision GameVault user accounts")]
struct Cli {
    /// Path to the service configuration file
    #[arg(long, env = "GAMEVAULT_CONFIG", default_value = "config/gamevault.yaml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create a new account
    Add {
        username: String,
        /// Role for the new account
        #[arg(long, value_enum, default_value_t = Role::Viewer)]
        role: Role,
        /// Password; prompted on stdin when omitted
        #[arg(long)]
        password: Option<String>,
    },
    /// List all accounts
    List,
    /// Reassign an account's role
    SetRole {
        username: String,
        #[arg(value_enum)]
        role: Role,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let config = Config::load(&cli.config).context("failed to load configuration")?;

    let storage = StorageLayer::new(&config.database)
        .await
        .context("failed to connect to the record store")?;
    let store: Arc<dyn CredentialStore> = storage.database.clone();

    match cli.command {
        Command::Add {
            username,
            role,
            password,
        } => {
            let password = match password {
                Some(password) => password,
                None => prompt_password()?,
            };
            if password.is_empty() {
                bail!("password must not be empty");
            }

            let hasher = Hasher::new(&config.auth.argon2)?;
            let password_hash = hasher.hash(&password)?;

            match store
                .insert_user(NewUser {
                    username: username.clone(),
                    password_hash,
                    role,
                })
                .await
            {
                Ok(user) => {
                    println!("Created user '{}' with role '{}'", user.username, user.role)
                }
                Err(VaultError::DuplicateUsername) => {
                    bail!("user '{}' already exists", username)
                }
                Err(e) => return Err(e.into()),
            }
        }
        Command::List => {
            let users = store.list_users().await?;
            if users.is_empty() {
                println!("No users registered.");
            }
            for user in users {
                println!("{:<36}  {:<20}  {}", user.id, user.username, user.role);
            }
        }
        Command::SetRole { username, role } => {
            let Some(user) = store.find_by_username(&username).await? else {
                bail!("user '{}' not found", username);
            };
            store.update_role(user.id, role).await?;
            println!("User '{}' is now '{}'", username, role);
        }
    }

    Ok(())
}

fn prompt_password() -> anyhow::Result<String> {
    eprint!("Password: ");
    std::io::stderr().flush()?;

    let mut password = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut password)
        .context("failed to read password")?;

    Ok(password.trim_end_matches(['\r', '\n']).to_string())
}
