//! giftpass - gift redemption counter CLI.
//!
//! Thin clap surface over `giftpass-core`: resolve staff passes, run the
//! redemption pipeline, inspect the ledger, and reset it between runs.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use giftpass_core::config::StationConfig;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod commands;

/// giftpass - staff gift redemption lookup and ledger
#[derive(Parser, Debug)]
#[command(name = "giftpass")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to station configuration file
    #[arg(short, long, default_value = "giftpass.toml")]
    config: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve a staff pass to its team
    Lookup {
        /// Staff pass identifier
        staff_id: String,

        /// Emit machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Resolve a staff pass, verify eligibility, and record the redemption
    Redeem {
        /// Staff pass identifier
        staff_id: String,
    },

    /// List recorded redemptions
    Status {
        /// Restrict the listing to one team
        team: Option<String>,
    },

    /// Delete the redemption ledger (reset between runs)
    Reset,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let config = StationConfig::from_file(&cli.config)?;
    tracing::debug!(
        config = %cli.config.display(),
        ledger = %config.paths.ledger.display(),
        "station configuration loaded"
    );

    match cli.command {
        Commands::Lookup { staff_id, json } => commands::lookup::run(&config, &staff_id, json),
        Commands::Redeem { staff_id } => commands::redeem::run(&config, &staff_id),
        Commands::Status { team } => commands::status::run(&config, team.as_deref()),
        Commands::Reset => commands::reset::run(&config),
    }
}
