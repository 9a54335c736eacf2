//! Inheritance domain errors

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use core_kernel::{FractionError, MoneyError};

/// Input fields a validation failure can point at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputField {
    EstateValue,
    Debts,
    Bequest,
    Husband,
    Wives,
    Father,
    Mother,
    Sons,
    Daughters,
    FullBrothers,
    FullSisters,
    PaternalBrothers,
    PaternalSisters,
}

impl InputField {
    /// Stable field name, matching the serialized input
    pub fn as_str(&self) -> &'static str {
        match self {
            InputField::EstateValue => "estate_value",
            InputField::Debts => "debts",
            InputField::Bequest => "bequest",
            InputField::Husband => "husband",
            InputField::Wives => "wives",
            InputField::Father => "father",
            InputField::Mother => "mother",
            InputField::Sons => "sons",
            InputField::Daughters => "daughters",
            InputField::FullBrothers => "full_brothers",
            InputField::FullSisters => "full_sisters",
            InputField::PaternalBrothers => "paternal_brothers",
            InputField::PaternalSisters => "paternal_sisters",
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A structurally invalid estate description
///
/// Fatal and deterministic: the caller must fix the input.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("Invalid {field}: {reason}")]
pub struct ValidationError {
    pub field: InputField,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: InputField, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

/// Errors returned by [`crate::compute`]
#[derive(Debug, Error)]
pub enum DistributionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Share arithmetic failed: {0}")]
    Arithmetic(#[from] FractionError),

    #[error("Money error: {0}")]
    Money(#[from] MoneyError),
}

impl DistributionError {
    /// Returns the validation failure, if that is what this is
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            DistributionError::Validation(e) => Some(e),
            _ => None,
        }
    }
}
