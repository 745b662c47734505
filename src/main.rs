//! Roster CLI Entry Point
//!
//! Prints the banner, resolves the connection configuration, acquires the
//! single database connection, and hands control to the menu loop. A failed
//! connection aborts with a non-zero exit status before the loop starts.
//!
//! All tables and prompts go to stdout; logs go to stderr.

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use roster::{config, menu, PgStore, TermPrompter};

/// Roster - Interactive Employee Tracker CLI
#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Interactive employee tracker CLI backed by PostgreSQL")]
#[command(version)]
struct Cli {
    /// Database host
    #[arg(long, env = "ROSTER_DB_HOST")]
    host: Option<String>,

    /// Database port
    #[arg(long, env = "ROSTER_DB_PORT")]
    port: Option<u16>,

    /// Database user
    #[arg(long, env = "ROSTER_DB_USER")]
    user: Option<String>,

    /// Database password
    #[arg(long, env = "ROSTER_DB_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// Database name
    #[arg(long, env = "ROSTER_DB_NAME")]
    database: Option<String>,

    /// Config file path (default: ~/.config/roster/config.json)
    #[arg(long)]
    config: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    println!("{}", roster::output::BANNER);

    let config_path = match cli.config {
        Some(path) => path,
        None => config::config_path().context("Could not locate config file")?,
    };
    let stored = config::load_stored(&config_path).context("Could not load configuration")?;
    let overrides = config::Overrides {
        host: cli.host,
        port: cli.port,
        user: cli.user,
        password: cli.password,
        database: cli.database,
    };
    let connection = config::resolve(stored, overrides)?;

    let store = PgStore::connect(&connection)
        .await
        .context("Could not connect to the database")?;

    let prompter = TermPrompter::new();
    menu::run(&store, &prompter).await?;

    Ok(())
}
