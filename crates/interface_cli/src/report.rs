//! JSON report rendering

use domain_inheritance::{DistributionResult, PayoutSchedule};
use serde::Serialize;

use crate::error::CliError;

/// Output of one run: the distribution, plus payouts when requested
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    #[serde(flatten)]
    pub result: DistributionResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payouts: Option<PayoutSchedule>,
}

impl Report {
    pub fn render(&self, pretty: bool) -> Result<String, CliError> {
        render_json(self, pretty)
    }
}

/// Serializes any value as pretty or compact JSON
pub fn render_json<T: Serialize>(value: &T, pretty: bool) -> Result<String, CliError> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    rendered.map_err(CliError::Render)
}
