//! # Imovia CLI
//!
//! Command-line interface for the imovia API.
//!
//! ## Usage
//!
//! ```bash
//! imovia serve    # Start the API server (runs migrations automatically)
//! imovia migrate  # Run database migrations
//! imovia --help   # Show help
//! ```

use clap::{Args, CommandFactory as _, Parser, Subcommand};
use error::{AppError, Result};
use migration::MigratorTrait;
use server::AppState;

/// Imovia - Real estate management API
#[derive(Parser, Debug)]
#[command(name = "imovia")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level (debug, info, warn, error)
    #[arg(short = 'L', long, env = "RUST_LOG", default_value = "info")]
    log_level: String,

    /// Output format (json, pretty, compact)
    #[arg(short, long, env = "IMOVIA_LOG_FORMAT", default_value = "pretty")]
    log_format: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the API server
    Serve(ServeArgs),

    /// Run database migrations
    Migrate(MigrateArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),

    /// Verify configuration
    Validate,
}

#[derive(Args, Debug)]
struct ServeArgs {
    /// Server host to bind to
    #[arg(long, env = "IMOVIA_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Server port to bind to (falls back to PORT, then 3000)
    #[arg(short, long, env = "IMOVIA_PORT")]
    port: Option<u16>,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    /// API key clients must present in the X-API-KEY header
    #[arg(long, env = "API_KEY", hide_env_values = true)]
    api_key: Option<String>,
}

#[derive(Args, Debug)]
struct MigrateArgs {
    /// Rollback the last migration
    #[arg(long)]
    rollback: bool,

    /// Skip seed data after applying migrations
    #[arg(long)]
    skip_seeds: bool,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,
}

#[derive(Args, Debug)]
struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    shell: clap_complete::Shell,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Held for the process lifetime; dropping it stops the file writer
    let _logging_guard = logging::init(&cli.log_level, &cli.log_format, None)
        .map_err(|e| AppError::config(format!("Failed to initialize logging: {e}")))?;

    logging::info!(target: "app", command = ?cli.command, "Imovia CLI starting...");

    match cli.command {
        Commands::Serve(args) => serve(args).await?,
        Commands::Migrate(args) => migrate(&args).await?,
        Commands::Completions(args) => completions(&args),
        Commands::Validate => validate()?,
    }

    Ok(())
}

async fn serve(args: ServeArgs) -> Result<()> {
    let database_url = required(args.database_url, "DATABASE_URL")?;
    let api_key = required(args.api_key, "API_KEY")?;
    let port = resolve_port(args.port, std::env::var("PORT").ok());

    logging::info!(target: "serve",
        host = %args.host,
        port = %port,
        "Starting API server..."
    );

    let db = migration::connect_to_database(&database_url).await?;

    logging::info!(target: "serve", "Running database migrations...");
    migration::Migrator::up(&db, None).await?;

    logging::info!(target: "serve", "Running seed data...");
    migration::seeds::run_all_seeds(&db).await?;

    let state = AppState { db, api_key };
    let app = server::create_app_router(state);

    let addr = format!("{}:{}", args.host, port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::config(format!("Failed to bind {addr}: {e}")))?;

    logging::info!(target: "serve", addr = %addr, "API server listening");

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    Ok(())
}

async fn migrate(args: &MigrateArgs) -> Result<()> {
    let database_url = required(args.database_url.clone(), "DATABASE_URL")?;

    let db = migration::connect_to_database(&database_url).await?;

    if args.rollback {
        logging::info!(target: "migrate", "Rolling back the last migration...");
        migration::Migrator::down(&db, None).await?;
        logging::info!(target: "migrate", "Rollback completed successfully");
        return Ok(());
    }

    migration::Migrator::up(&db, None).await?;
    logging::info!(target: "migrate", "Migrations completed successfully");

    if !args.skip_seeds {
        migration::seeds::run_all_seeds(&db).await?;
        logging::info!(target: "migrate", "Seed data completed successfully");
    }

    Ok(())
}

fn completions(args: &CompletionsArgs) {
    clap_complete::generate(
        args.shell,
        &mut Cli::command(),
        "imovia",
        &mut std::io::stdout(),
    );
}

fn validate() -> Result<()> {
    logging::info!(target: "validate", "Validating configuration...");

    let missing = missing_required(&[
        ("DATABASE_URL", std::env::var("DATABASE_URL").ok()),
        ("API_KEY", std::env::var("API_KEY").ok()),
    ]);

    if !missing.is_empty() {
        return Err(AppError::config(format!(
            "Missing required environment variables: {}",
            missing.join(", ")
        )));
    }

    logging::info!(target: "validate", "Configuration is valid");
    Ok(())
}

/// Resolve a required config value, naming the variable in the error
fn required(value: Option<String>, name: &str) -> Result<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AppError::config(format!("{name} is not set"))),
    }
}

/// IMOVIA_PORT (via clap) wins over the generic PORT variable
fn resolve_port(arg: Option<u16>, port_env: Option<String>) -> u16 {
    arg.or_else(|| port_env.and_then(|p| p.parse().ok()))
        .unwrap_or(3000)
}

fn missing_required(vars: &[(&str, Option<String>)]) -> Vec<String> {
    vars.iter()
        .filter(|(_, value)| value.as_deref().map_or(true, str::is_empty))
        .map(|(name, _)| name.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_parse_serve() {
        let cli = Cli::parse_from([
            "imovia",
            "serve",
            "--host",
            "127.0.0.1",
            "--port",
            "8080",
            "--database-url",
            "postgres://localhost/imovia",
            "--api-key",
            "secret",
        ]);
        match cli.command {
            Commands::Serve(args) => {
                assert_eq!(args.host, "127.0.0.1");
                assert_eq!(args.port, Some(8080));
                assert_eq!(args.api_key.as_deref(), Some("secret"));
            },
            _ => panic!("Expected Serve command"),
        }
    }

    #[test]
    fn test_resolve_port_precedence() {
        assert_eq!(resolve_port(Some(8080), Some("9090".to_string())), 8080);
        assert_eq!(resolve_port(None, Some("9090".to_string())), 9090);
        assert_eq!(resolve_port(None, Some("not-a-port".to_string())), 3000);
        assert_eq!(resolve_port(None, None), 3000);
    }

    #[test]
    fn test_cli_parse_validate() {
        let cli = Cli::parse_from(["imovia", "validate"]);
        match cli.command {
            Commands::Validate => {},
            _ => panic!("Expected Validate command"),
        }
    }

    #[test]
    fn test_cli_default_values() {
        let cli = Cli::parse_from(["imovia", "validate"]);
        assert_eq!(cli.log_level, "info");
        assert_eq!(cli.log_format, "pretty");
    }

    #[test]
    fn test_migrate_rollback() {
        let cli = Cli::parse_from(["imovia", "migrate", "--rollback"]);
        match cli.command {
            Commands::Migrate(args) => {
                assert!(args.rollback);
                assert!(!args.skip_seeds);
            },
            _ => panic!("Expected Migrate command"),
        }
    }

    #[test]
    fn test_cli_command_factory() {
        let cmd = Cli::command();
        assert!(cmd.get_name() == "imovia");
    }

    #[test]
    fn test_required_rejects_missing_and_empty() {
        assert!(required(None, "API_KEY").is_err());
        assert!(required(Some(String::new()), "API_KEY").is_err());
        assert_eq!(required(Some("key".to_string()), "API_KEY").unwrap(), "key");
    }

    #[test]
    fn test_missing_required() {
        let missing = missing_required(&[
            ("DATABASE_URL", Some("postgres://localhost".to_string())),
            ("API_KEY", None),
        ]);
        assert_eq!(missing, vec!["API_KEY".to_string()]);
    }
}
