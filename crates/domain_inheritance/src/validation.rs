//! Estate input validation
//!
//! Rejects structurally invalid estate descriptions before any share is
//! computed. Checks run in a fixed order and the first failure is returned,
//! so the same input always cites the same field.
//!
//! # Validation Rules
//!
//! ## Money fields
//! - Estate value, debts and bequest must not be negative
//! - Debts cannot exceed the estate value
//!
//! ## Survivors
//! - Husband, father and mother are each 0 or 1
//! - At most four wives
//! - Each group of children or siblings has at most `MAX_GROUP_MEMBERS`
//! - A surviving husband and surviving wives are mutually exclusive

use rust_decimal::Decimal;

use crate::error::{InputField, ValidationError};
use crate::input::EstateInput;

/// Maximum number of wives that can survive the deceased
pub const MAX_WIVES: u32 = 4;

/// Maximum members of any child or sibling group; one share is produced per member
pub const MAX_GROUP_MEMBERS: u32 = 10_000;

/// Validator for estate inputs
pub struct InputValidator;

impl InputValidator {
    /// Validates an estate input
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the first offending field.
    pub fn validate(input: &EstateInput) -> Result<(), ValidationError> {
        Self::validate_amounts(input)?;
        Self::validate_survivors(input)?;
        Ok(())
    }

    fn validate_amounts(input: &EstateInput) -> Result<(), ValidationError> {
        non_negative(InputField::EstateValue, input.estate_value)?;
        non_negative(InputField::Debts, input.debts)?;

        if input.debts > input.estate_value {
            return Err(ValidationError::new(
                InputField::Debts,
                format!(
                    "debts of {} exceed the estate value of {}",
                    input.debts, input.estate_value
                ),
            ));
        }

        non_negative(InputField::Bequest, input.bequest)
    }

    fn validate_survivors(input: &EstateInput) -> Result<(), ValidationError> {
        at_most_one(InputField::Husband, input.husband)?;
        at_most_one(InputField::Father, input.father)?;
        at_most_one(InputField::Mother, input.mother)?;

        if input.wives > MAX_WIVES {
            return Err(ValidationError::new(
                InputField::Wives,
                format!("at most {} wives can survive, got {}", MAX_WIVES, input.wives),
            ));
        }

        let groups = [
            (InputField::Sons, input.sons),
            (InputField::Daughters, input.daughters),
            (InputField::FullBrothers, input.full_brothers),
            (InputField::FullSisters, input.full_sisters),
            (InputField::PaternalBrothers, input.paternal_brothers),
            (InputField::PaternalSisters, input.paternal_sisters),
        ];
        for (field, count) in groups {
            if count > MAX_GROUP_MEMBERS {
                return Err(ValidationError::new(
                    field,
                    format!("at most {} members per group, got {}", MAX_GROUP_MEMBERS, count),
                ));
            }
        }

        if input.husband > 0 && input.wives > 0 {
            return Err(ValidationError::new(
                InputField::Wives,
                "a surviving husband and surviving wives cannot both be present",
            ));
        }

        Ok(())
    }
}

fn non_negative(field: InputField, value: Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(ValidationError::new(
            field,
            format!("must not be negative, got {}", value),
        ));
    }
    Ok(())
}

fn at_most_one(field: InputField, count: u32) -> Result<(), ValidationError> {
    if count > 1 {
        return Err(ValidationError::new(
            field,
            format!("must be 0 or 1, got {}", count),
        ));
    }
    Ok(())
}
