//! # Catalog Server
//!
//! Serves the catalog HTTP API backed by PostgreSQL.

use std::path::PathBuf;

use anyhow::Context;
use catalog_config::{Config, ConfigLoad, ConfigLoader};
use catalog_core::PostgresDatabase;
use catalog_server::{AppState, create_app};
use clap::{Args as ClapArgs, Parser, Subcommand};
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "catalog-server")]
#[command(about = "Catalog microservice: brands, specifications and items")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    serve: ServeArgs,
}

#[derive(ClapArgs, Debug, Clone)]
struct ServeArgs {
    /// Server port (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Server host (overrides config)
    #[arg(long)]
    host: Option<String>,

    /// Path to a catalog.toml configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(subcommand)]
    Db(DbCommand),
}

#[derive(Debug, Subcommand)]
enum DbCommand {
    /// Apply database migrations and exit
    Migrate,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_runtime_config(&cli.serve)?;

    match cli.command {
        Some(Command::Db(DbCommand::Migrate)) => run_db_migrate(&config).await,
        None => run_server(config).await,
    }
}

fn load_runtime_config(args: &ServeArgs) -> anyhow::Result<Config> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &args.config {
        loader = loader.with_config_path(path);
    }

    let ConfigLoad {
        mut config,
        warnings,
    } = loader.load().context("failed to load configuration")?;

    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(host) = &args.host {
        config.server.host = host.clone();
    }

    init_tracing();

    if config.metadata.env_file_loaded {
        info!("loaded .env file");
    }
    if let Some(path) = &config.metadata.config_path {
        info!(path = %path.display(), "loaded configuration file");
    }
    if warnings.is_empty() {
        debug!("configuration passed guard rails without warnings");
    }
    for warning in warnings.iter() {
        match &warning.hint {
            Some(hint) => warn!(hint = %hint, "{}", warning.message),
            None => warn!("{}", warning.message),
        }
    }

    Ok(config)
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    "info,catalog_core=info,tower_http=warn,sqlx=warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn connect(config: &Config) -> anyhow::Result<PostgresDatabase> {
    let url = config.database.url.as_deref().context(
        "no database configured; set DATABASE_URL or the DATABASE_* variables",
    )?;

    PostgresDatabase::connect(url, config.database.max_connections)
        .await
        .context("failed to connect to PostgreSQL")
}

async fn run_db_migrate(config: &Config) -> anyhow::Result<()> {
    let db = connect(config).await?;
    db.migrate().await.context("database migration failed")?;
    info!("Database migrations complete");
    Ok(())
}

async fn run_server(config: Config) -> anyhow::Result<()> {
    let db = connect(&config).await?;

    if config.database.run_migrations {
        db.migrate().await.context("database migration failed")?;
    } else {
        info!("Skipping migrations (DB_RUN_MIGRATIONS=false)");
    }

    let addr = config.bind_address();
    let state = AppState::new(db, config)?;
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(address = %addr, "Catalog server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Catalog server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_overrides_and_migrate() {
        let cli = Cli::parse_from([
            "catalog-server",
            "--port",
            "8081",
            "--host",
            "127.0.0.1",
            "db",
            "migrate",
        ]);

        assert_eq!(cli.serve.port, Some(8081));
        assert_eq!(cli.serve.host.as_deref(), Some("127.0.0.1"));
        assert!(matches!(cli.command, Some(Command::Db(DbCommand::Migrate))));
    }

    #[test]
    fn cli_defaults_to_serving() {
        let cli = Cli::parse_from(["catalog-server"]);
        assert!(cli.command.is_none());
        assert!(cli.serve.config.is_none());
    }
}
