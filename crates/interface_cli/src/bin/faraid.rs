//! Fara'id - Estate Distribution Binary
//!
//! Reads an estate description as JSON and prints the distribution report.
//!
//! # Usage
//!
//! ```bash
//! # From a file
//! faraid estate.json
//!
//! # From stdin, with a payout schedule in Saudi riyal
//! cat estate.json | faraid - --payouts --currency SAR
//! ```
//!
//! # Environment Variables
//!
//! * `FARAID_LOG_LEVEL` - Log filter for stderr: trace, debug, info, warn, error (default: warn)
//! * `FARAID_CURRENCY` - Default payout currency, overridden by `--currency`
//! * `FARAID_PRETTY` - Pretty-print the report (default: true), overridden by `--compact`

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::Context;
use clap::Parser;
use core_kernel::Currency;
use interface_cli::{report::render_json, run, CliConfig, ErrorReport, RunOptions};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Islamic inheritance distribution calculator.
#[derive(Parser)]
#[command(name = "faraid", version, about = "Islamic inheritance distribution calculator")]
struct Cli {
    /// Path to the estate input JSON, or "-" for stdin
    #[arg(default_value = "-")]
    input: PathBuf,

    /// Include payouts rounded to the currency's minor units
    #[arg(long)]
    payouts: bool,

    /// Settlement currency for payouts (e.g. USD, SAR, KWD)
    #[arg(long)]
    currency: Option<Currency>,

    /// Print compact JSON
    #[arg(long)]
    compact: bool,
}

fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = CliConfig::from_env().context("invalid FARAID_* configuration")?;

    init_tracing(&config.log_level);

    let raw = read_input(&cli.input)?;
    let options = RunOptions {
        payouts: cli.payouts,
        currency: cli.currency.or(config.currency),
    };
    let pretty = config.pretty && !cli.compact;

    match run(&raw, &options) {
        Ok(report) => {
            println!("{}", report.render(pretty)?);
            Ok(())
        }
        Err(err) => {
            tracing::error!(error = %err, "Distribution failed");
            println!("{}", render_json(&ErrorReport::from(&err), pretty)?);
            process::exit(err.exit_code());
        }
    }
}

/// Reads the estate JSON from a file, or from stdin for "-"
fn read_input(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut raw = String::new();
        std::io::stdin()
            .read_to_string(&mut raw)
            .context("failed to read estate from stdin")?;
        Ok(raw)
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read estate from {}", path.display()))
    }
}

/// Initializes the tracing subscriber, logging to stderr so stdout stays JSON.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();
}
