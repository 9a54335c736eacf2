//! Command Line Interface
//!
//! Reads an estate description as JSON, runs the distribution engine and
//! renders the result as a JSON report.
//!
//! # Example
//!
//! ```rust
//! use interface_cli::{run, RunOptions};
//!
//! let raw = r#"{ "deceased": "female", "estate_value": "120000", "husband": 1, "daughters": 1 }"#;
//! let report = run(raw, &RunOptions::default()).unwrap();
//! assert_eq!(report.result.class_shares.len(), 2);
//! ```

pub mod config;
pub mod error;
pub mod report;

use core_kernel::Currency;
use domain_inheritance::{compute, EstateInput, PayoutSchedule};
use tracing::{debug, info};

pub use crate::config::CliConfig;
pub use crate::error::{CliError, ErrorReport};
pub use crate::report::Report;

/// Options for a single run
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Include a payout schedule rounded to the settlement currency
    pub payouts: bool,
    /// Overrides the currency named in the input
    pub currency: Option<Currency>,
}

/// Parses an estate input from JSON
pub fn parse_input(raw: &str) -> Result<EstateInput, CliError> {
    serde_json::from_str(raw).map_err(CliError::Input)
}

/// Parses, computes and, when asked, settles payouts
///
/// # Errors
///
/// Returns [`CliError::Input`] for malformed JSON and
/// [`CliError::Distribution`] when the engine rejects the estate.
pub fn run(raw: &str, options: &RunOptions) -> Result<Report, CliError> {
    let input = parse_input(raw)?;
    debug!(survivors = input.survivor_count(), "Estate input parsed");

    let result = compute(&input)?;
    info!(
        classes = result.class_shares.len(),
        warnings = result.warnings.len(),
        "Distribution computed"
    );

    let payouts = if options.payouts {
        let currency = options.currency.unwrap_or(input.currency);
        Some(PayoutSchedule::from_result(&result, currency)?)
    } else {
        None
    };

    Ok(Report { result, payouts })
}
