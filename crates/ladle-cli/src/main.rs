//! Ladle CLI - Interactive console recipe manager

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod menu;
mod output;
mod prompt;

use ladle_storage::SqliteStore;

#[derive(Parser)]
#[command(name = "ladle")]
#[command(author, version, about = "Console recipe manager")]
pub struct Cli {
    /// Database file path
    #[arg(short, long, env = "LADLE_DB")]
    pub database: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress log output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Get the database file path
    pub fn database_path(&self) -> PathBuf {
        self.database.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("ladle")
                .join("ladle.db")
        })
    }
}

/// Application context with the persistence store
pub struct AppContext {
    pub store: Arc<SqliteStore>,
}

impl AppContext {
    pub fn new(cli: &Cli) -> anyhow::Result<Self> {
        let db_path = cli.database_path();
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        tracing::debug!("Using database at: {:?}", db_path);

        let store = SqliteStore::open(&db_path)?;

        Ok(Self {
            store: Arc::new(store),
        })
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .init();

    tracing::debug!("Starting ladle CLI");

    // A store that cannot be opened is fatal; everything past this point
    // recovers back to the menu.
    let ctx = AppContext::new(&cli)?;

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    menu::run(&mut input, ctx.store.as_ref()).await
}
