//! Distribution result and the engine entry point
//!
//! [`compute`] runs the pipeline once, top to bottom:
//!
//! ```text
//! validate -> net estate -> eligibility -> fixed shares -> residue -> awl/radd -> amounts
//! ```
//!
//! It is a pure function of its input. Identical inputs always produce
//! identical results, and nothing is shared between calls.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use core_kernel::{Fraction, FractionError};
use crate::eligibility::{Eligibility, ExcludedClass};
use crate::error::DistributionError;
use crate::fixed_share::FixedShares;
use crate::heir::HeirClass;
use crate::input::{DeceasedSex, EstateInput};
use crate::net_estate::NetEstate;
use crate::normalizer::{Normalization, Normalizer};
use crate::residual::{ResidualDistributor, ResidueOutcome};
use crate::validation::InputValidator;
use crate::warning::{Warning, WarningKind};

/// A heir class's entitlement after normalization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassShare {
    pub heir_class: HeirClass,
    /// Fraction of the distributable estate
    pub fraction: Fraction,
    pub amount: Decimal,
    pub member_count: u32,
}

/// One member's part of a class share
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndividualShare {
    pub heir_class: HeirClass,
    /// 1-based position within the class
    pub member_index: u32,
    pub fraction: Fraction,
    pub amount: Decimal,
}

/// Complete result of one distribution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionResult {
    /// Carried through for audit; does not affect any share
    pub deceased: DeceasedSex,
    pub net_estate: NetEstate,
    /// Classes with a nonzero entitlement, in heir class order
    pub class_shares: Vec<ClassShare>,
    pub individual_shares: Vec<IndividualShare>,
    /// Classes blocked by a closer relative
    pub exclusions: Vec<ExcludedClass>,
    pub normalization: Normalization,
    pub warnings: Vec<Warning>,
}

impl DistributionResult {
    pub fn class_share(&self, class: HeirClass) -> Option<&ClassShare> {
        self.class_shares.iter().find(|s| s.heir_class == class)
    }

    pub fn individual_shares_for(&self, class: HeirClass) -> impl Iterator<Item = &IndividualShare> {
        self.individual_shares.iter().filter(move |s| s.heir_class == class)
    }

    /// Exact sum of all class fractions
    pub fn total_fraction(&self) -> Result<Fraction, FractionError> {
        Fraction::checked_sum(self.class_shares.iter().map(|s| &s.fraction))
    }

    /// Fraction of the estate no heir received, zero when fully assigned
    pub fn unresolved_fraction(&self) -> Fraction {
        self.warnings
            .iter()
            .find_map(|w| match w {
                Warning::UnresolvedRemainder { fraction, .. } => Some(*fraction),
                _ => None,
            })
            .unwrap_or(Fraction::ZERO)
    }

    pub fn has_warning(&self, kind: WarningKind) -> bool {
        self.warnings.iter().any(|w| w.kind() == kind)
    }
}

/// Computes the distribution of an estate among its surviving heirs
///
/// # Errors
///
/// Returns [`DistributionError::Validation`] for structurally invalid input,
/// and [`DistributionError::Arithmetic`] only if share arithmetic overflows.
///
/// # Example
///
/// ```rust
/// use domain_inheritance::{compute, DeceasedSex, EstateInput, HeirClass};
/// use core_kernel::Fraction;
/// use rust_decimal_macros::dec;
///
/// let mut input = EstateInput::new(DeceasedSex::Female, dec!(120000));
/// input.husband = 1;
/// input.daughters = 1;
///
/// let result = compute(&input).unwrap();
/// let daughter = result.class_share(HeirClass::DaughterGroup).unwrap();
/// assert_eq!(daughter.fraction, Fraction::ratio(3, 4));
/// assert_eq!(daughter.amount, dec!(90000));
/// ```
#[instrument(
    skip(input),
    fields(estate_value = %input.estate_value, survivors = input.survivor_count())
)]
pub fn compute(input: &EstateInput) -> Result<DistributionResult, DistributionError> {
    InputValidator::validate(input).inspect_err(|e| {
        debug!(field = %e.field, reason = %e.reason, "Estate input rejected");
    })?;

    let mut warnings = Vec::new();

    let (net_estate, bequest_warning) = NetEstate::calculate(input);
    debug!(
        after_debts = %net_estate.after_debts,
        applied_bequest = %net_estate.applied_bequest,
        distributable = %net_estate.distributable,
        "Net estate calculated"
    );
    warnings.extend(bequest_warning);

    let eligibility = Eligibility::resolve(input);
    let exclusions = eligibility.exclusions();
    debug!(excluded = exclusions.len(), "Exclusions resolved");

    let shares = FixedShares::assign(input, &eligibility);
    let mut table = shares.to_table()?;
    debug!(fixed_total = %table.total()?, "Fixed shares assigned");

    let outcome = ResidualDistributor::distribute(input, &shares, &mut table)?;
    debug!(?outcome, "Residue allocated");

    match &outcome {
        ResidueOutcome::Unresolved { remainder } => {
            warnings.push(Warning::UnresolvedRemainder {
                fraction: *remainder,
                amount: remainder.apply_to(net_estate.distributable)?,
            });
        }
        ResidueOutcome::Exhausted { unpaid } if !unpaid.is_empty() => {
            warnings.push(Warning::ResidueExhausted {
                heir_classes: unpaid.clone(),
            });
        }
        _ => {}
    }

    let normalization = Normalizer::normalize(&mut table, &outcome)?;
    debug!(?normalization, "Shares normalized");

    let (class_shares, individual_shares) =
        Normalizer::expand(&table, input, net_estate.distributable)?;

    for warning in &warnings {
        warn!(kind = ?warning.kind(), "Distribution warning");
    }

    Ok(DistributionResult {
        deceased: input.deceased,
        net_estate,
        class_shares,
        individual_shares,
        exclusions,
        normalization,
        warnings,
    })
}
