//! CLI administration tool for admin-portal.
//!
//! Manages administrator accounts directly in the database, without going
//! through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Create a new admin (prompts for the password)
//! cargo run --bin admin -- create --email admin@example.com
//!
//! # List all admins
//! cargo run --bin admin -- list
//!
//! # Delete an admin
//! cargo run --bin admin -- delete admin@example.com
//!
//! # Try a login without the HTTP server
//! cargo run --bin admin -- verify --email admin@example.com
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `DATABASE_URL` (or `DB_*` components) and optionally
//! `BCRYPT_COST` for newly hashed passwords.

use admin_portal::application::services::LoginService;
use admin_portal::config::{self, Config};
use admin_portal::domain::entities::NewAdmin;
use admin_portal::domain::repositories::{AdminRepository, PasswordVerifier};
use admin_portal::infrastructure::persistence::PgAdminRepository;
use admin_portal::infrastructure::security::BcryptVerifier;
use admin_portal::server::connect_pool;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input, Password};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing admin-portal.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Create a new admin account
    Create {
        /// Admin email (prompted if omitted)
        #[arg(short, long)]
        email: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List all admin accounts
    List,

    /// Delete an admin account
    Delete {
        /// Email of the admin to delete
        email: String,
    },

    /// Check a password against the stored hash
    Verify {
        /// Admin email (prompted if omitted)
        #[arg(short, long)]
        email: Option<String>,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

struct Services {
    repository: Arc<PgAdminRepository>,
    verifier: Arc<BcryptVerifier>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Invalid configuration")?;
    let pool = connect_pool(&config).await?;
    let services = build_services(&pool, &config);

    match cli.command {
        Commands::Create { email, yes } => create_admin(&services, email, yes).await?,
        Commands::List => list_admins(&services).await?,
        Commands::Delete { email } => delete_admin(&services, email).await?,
        Commands::Verify { email } => verify_admin(&services, email).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

fn build_services(pool: &PgPool, config: &Config) -> Services {
    Services {
        repository: Arc::new(PgAdminRepository::new(Arc::new(pool.clone()))),
        verifier: Arc::new(BcryptVerifier::new(config.bcrypt_cost)),
    }
}

fn prompt_email(email: Option<String>) -> Result<String> {
    match email {
        Some(e) => Ok(e),
        None => Ok(Input::new().with_prompt("Admin email").interact_text()?),
    }
}

/// Creates a new admin with interactive prompts.
///
/// # Flow
///
/// 1. Prompt for email (or use provided)
/// 2. Prompt for password twice
/// 3. Confirm creation (unless `--yes` flag)
/// 4. Hash the password with bcrypt
/// 5. Store in database
async fn create_admin(services: &Services, email: Option<String>, skip_confirm: bool) -> Result<()> {
    println!("{}", "👤 Create Admin".bright_blue().bold());
    println!();

    let email = prompt_email(email)?;

    let password = Password::new()
        .with_prompt("Password")
        .with_confirmation("Repeat password", "Passwords do not match")
        .interact()?;

    if password.is_empty() {
        anyhow::bail!("Password must not be empty");
    }

    println!();
    println!("  Email: {}", email.cyan());
    println!(
        "  Cost:  {}",
        services.verifier.cost().to_string().bright_black()
    );
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this admin?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let password_hash = services
        .verifier
        .hash(&password)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to hash password: {e}"))?;

    let admin = services
        .repository
        .create(NewAdmin {
            email,
            password_hash,
        })
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create admin: {e}"))?;

    println!();
    println!(
        "{} (id {})",
        "✅ Admin created successfully!".green().bold(),
        admin.admin_id.to_string().bright_white()
    );
    println!();

    Ok(())
}

/// Lists all admins.
///
/// # Output Format
///
/// ```text
/// 📋 Admins
///
///   ID  Email                                Created
///   ─────────────────────────────────────────────────────────────
///   1   admin@example.com                    2025-03-01 10:30
/// ```
async fn list_admins(services: &Services) -> Result<()> {
    println!("{}", "📋 Admins".bright_blue().bold());
    println!();

    let admins = services
        .repository
        .list()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list admins: {e}"))?;

    if admins.is_empty() {
        println!("{}", "  No admins found".yellow());
        println!();
        println!(
            "  Create one with: {} admin create",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<3} {:<36} {:<20}",
        "ID".bright_white().bold(),
        "Email".bright_white().bold(),
        "Created".bright_white().bold()
    );
    println!("  {}", "─".repeat(61).bright_black());

    for admin in &admins {
        println!(
            "  {:<3} {:<36} {}",
            admin.admin_id.to_string().bright_black(),
            admin.email.cyan(),
            admin
                .created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black()
        );
    }

    println!();
    println!(
        "  Total: {}",
        admins.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Deletes an admin after confirmation (default: No).
async fn delete_admin(services: &Services, email: String) -> Result<()> {
    println!("{}", "🗑  Delete Admin".bright_blue().bold());
    println!();

    let existing = services
        .repository
        .find_by_email(&email)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {e}"))?;

    let admin = existing.into_iter().next().context("Admin not found")?;

    println!("  Email: {}", admin.email.cyan());
    println!("  ID:    {}", admin.admin_id.to_string().bright_black());
    println!();

    let confirmed = Confirm::new()
        .with_prompt("Delete this admin?")
        .default(false)
        .interact()?;

    if !confirmed {
        println!("{}", "❌ Cancelled".red());
        return Ok(());
    }

    let deleted = services
        .repository
        .delete_by_email(&email)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete admin: {e}"))?;

    println!();
    if deleted {
        println!("{}", "✅ Admin deleted".green().bold());
    } else {
        println!("{}", "⚠️  Admin was already gone".yellow());
    }
    println!();

    Ok(())
}

/// Runs the same credential check the login endpoint performs.
async fn verify_admin(services: &Services, email: Option<String>) -> Result<()> {
    let email = prompt_email(email)?;
    let password = Password::new().with_prompt("Password").interact()?;

    let login = LoginService::new(services.repository.clone(), services.verifier.clone());

    match login.login(&email, &password).await {
        Ok(token) => {
            println!("{}", "✅ Credentials valid".green().bold());
            println!("  Token: {}", token.as_str().bright_yellow());
        }
        Err(e) if e.is_internal() => {
            return Err(anyhow::anyhow!("Verification failed: {e}"));
        }
        Err(_) => {
            println!("{}", "❌ Invalid email or password".red().bold());
        }
    }

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            let admins: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM admin")
                .fetch_one(pool)
                .await?;

            println!("{}", "✅ Database connection OK".green().bold());
            println!("  Admins: {}", admins.to_string().bright_white());
        }
    }

    Ok(())
}
