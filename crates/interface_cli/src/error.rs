//! CLI error handling

use core_kernel::MoneyError;
use domain_inheritance::{DistributionError, InputField};
use serde::Serialize;
use thiserror::Error;

/// CLI error types
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid estate JSON: {0}")]
    Input(#[source] serde_json::Error),

    #[error(transparent)]
    Distribution(#[from] DistributionError),

    #[error("Payout settlement failed: {0}")]
    Payout(#[from] MoneyError),

    #[error("Failed to render report: {0}")]
    Render(#[source] serde_json::Error),
}

impl CliError {
    /// Process exit code: 2 for input the engine rejects, 1 otherwise
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Input(_) => 2,
            CliError::Distribution(DistributionError::Validation(_)) => 2,
            _ => 1,
        }
    }
}

/// Error body printed in place of a report
#[derive(Debug, Serialize)]
pub struct ErrorReport {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<InputField>,
}

impl From<&CliError> for ErrorReport {
    fn from(err: &CliError) -> Self {
        let (error_type, field) = match err {
            CliError::Input(_) => ("invalid_input", None),
            CliError::Distribution(DistributionError::Validation(v)) => {
                ("validation_error", Some(v.field))
            }
            CliError::Distribution(_) => ("arithmetic_error", None),
            CliError::Payout(_) => ("payout_error", None),
            CliError::Render(_) => ("internal_error", None),
        };

        Self {
            error: error_type.to_string(),
            message: err.to_string(),
            field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_inheritance::ValidationError;

    #[test]
    fn test_validation_error_report() {
        let err = CliError::from(DistributionError::from(ValidationError::new(
            InputField::Debts,
            "too large",
        )));
        let report = ErrorReport::from(&err);

        assert_eq!(err.exit_code(), 2);
        assert_eq!(report.error, "validation_error");
        assert_eq!(report.field, Some(InputField::Debts));
        assert_eq!(report.message, "Invalid debts: too large");
    }

    #[test]
    fn test_malformed_json_report() {
        let err = CliError::Input(serde_json::from_str::<u32>("{").unwrap_err());
        let json = serde_json::to_value(ErrorReport::from(&err)).unwrap();

        assert_eq!(err.exit_code(), 2);
        assert_eq!(json["error"], "invalid_input");
        assert!(json.get("field").is_none());
    }
}
