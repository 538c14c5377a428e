use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use connect_four::config::AppConfig;
use connect_four::session::{SessionController, StartPolicy};

/// Play Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Two-player Connect Four")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Override the default number of rows offered at the prompt
    #[arg(long)]
    rows: Option<usize>,

    /// Override the default number of columns offered at the prompt
    #[arg(long)]
    columns: Option<usize>,

    /// Who opens each game
    #[arg(long, value_enum)]
    start_policy: Option<StartPolicy>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Diagnostics go to stderr so the game transcript on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    // Load configuration
    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(rows) = cli.rows {
        config.board.rows = rows;
    }
    if let Some(columns) = cli.columns {
        config.board.columns = columns;
    }
    if let Some(policy) = cli.start_policy {
        config.session.start_policy = policy;
    }
    config.validate().context("validating command line overrides")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut controller = SessionController::new(stdin.lock(), stdout.lock(), config);
    controller.run().context("running session")?;
    Ok(())
}
