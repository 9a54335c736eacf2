//! Awl and radd normalization
//!
//! Two disjoint corrections to the awarded fractions:
//!
//! - **Awl**: the awards sum to more than one; every award is divided by
//!   the total, preserving proportions.
//! - **Radd**: a remainder is left with no residuary heir; blood-relative
//!   awards are scaled by `(1 - spouses) / blood` so they absorb it in
//!   proportion to their fixed shares while spouses keep theirs.
//!
//! After normalization the exact fractions are turned into amounts, once
//! per class and once per member, and nowhere earlier.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{Fraction, FractionError};
use crate::allocation::ShareTable;
use crate::distribution::{ClassShare, IndividualShare};
use crate::input::EstateInput;
use crate::residual::ResidueOutcome;

/// Which correction, if any, was applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "path", rename_all = "snake_case")]
pub enum Normalization {
    /// Awards already closed at one, or the remainder is unresolved
    None,
    /// Every award was divided by `total`
    Awl { total: Fraction },
    /// Blood-relative awards were multiplied by `factor`
    Radd { factor: Fraction },
}

pub struct Normalizer;

impl Normalizer {
    /// Applies awl or radd to `table` in place
    pub fn normalize(
        table: &mut ShareTable,
        outcome: &ResidueOutcome,
    ) -> Result<Normalization, FractionError> {
        let total = table.total()?;

        if total > Fraction::ONE {
            table.scale_all(&total.recip()?)?;
            return Ok(Normalization::Awl { total });
        }

        if let ResidueOutcome::ReturnToBloodRelatives { .. } = outcome {
            let blood = table.blood_total()?;
            let available = Fraction::ONE.checked_sub(&table.spouse_total()?)?;
            let factor = available.checked_div(&blood)?;
            table.scale_blood(&factor)?;
            return Ok(Normalization::Radd { factor });
        }

        Ok(Normalization::None)
    }

    /// Converts normalized fractions into class and per-member amounts
    ///
    /// Classes with a zero award are omitted. Every member of a class
    /// receives the same fraction and amount.
    pub fn expand(
        table: &ShareTable,
        input: &EstateInput,
        distributable: Decimal,
    ) -> Result<(Vec<ClassShare>, Vec<IndividualShare>), FractionError> {
        let mut class_shares = Vec::new();
        let mut individual_shares = Vec::new();

        for (heir_class, fraction) in table.awarded() {
            let member_count = input.member_count(heir_class);
            class_shares.push(ClassShare {
                heir_class,
                fraction,
                amount: fraction.apply_to(distributable)?,
                member_count,
            });

            let member_fraction = fraction.checked_div_int(i128::from(member_count))?;
            let member_amount = member_fraction.apply_to(distributable)?;
            individual_shares.extend((1..=member_count).map(|member_index| IndividualShare {
                heir_class,
                member_index,
                fraction: member_fraction,
                amount: member_amount,
            }));
        }

        Ok((class_shares, individual_shares))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heir::HeirClass;

    #[test]
    fn test_awl_scales_to_one() {
        let mut table = ShareTable::new();
        table.award(HeirClass::Husband, Fraction::ratio(1, 4)).unwrap();
        table.award(HeirClass::DaughterGroup, Fraction::ratio(2, 3)).unwrap();
        table.award(HeirClass::Father, Fraction::ratio(1, 6)).unwrap();

        let outcome = ResidueOutcome::Exhausted { unpaid: vec![] };
        let normalization = Normalizer::normalize(&mut table, &outcome).unwrap();

        assert_eq!(normalization, Normalization::Awl { total: Fraction::new(13, 12).unwrap() });
        assert_eq!(table.get(HeirClass::Husband), Fraction::new(3, 13).unwrap());
        assert_eq!(table.get(HeirClass::DaughterGroup), Fraction::new(8, 13).unwrap());
        assert_eq!(table.get(HeirClass::Father), Fraction::new(2, 13).unwrap());
        assert_eq!(table.total().unwrap(), Fraction::ONE);
    }

    #[test]
    fn test_radd_keeps_spouse_fixed() {
        let mut table = ShareTable::new();
        table.award(HeirClass::Husband, Fraction::ratio(1, 4)).unwrap();
        table.award(HeirClass::DaughterGroup, Fraction::ratio(1, 2)).unwrap();

        let outcome = ResidueOutcome::ReturnToBloodRelatives { remainder: Fraction::ratio(1, 4) };
        let normalization = Normalizer::normalize(&mut table, &outcome).unwrap();

        assert_eq!(normalization, Normalization::Radd { factor: Fraction::ratio(3, 2) });
        assert_eq!(table.get(HeirClass::Husband), Fraction::ratio(1, 4));
        assert_eq!(table.get(HeirClass::DaughterGroup), Fraction::ratio(3, 4));
    }

    #[test]
    fn test_radd_proportional_between_blood_relatives() {
        let mut table = ShareTable::new();
        table.award(HeirClass::Mother, Fraction::ratio(1, 6)).unwrap();
        table.award(HeirClass::DaughterGroup, Fraction::ratio(1, 2)).unwrap();

        let outcome = ResidueOutcome::ReturnToBloodRelatives { remainder: Fraction::ratio(1, 3) };
        Normalizer::normalize(&mut table, &outcome).unwrap();

        assert_eq!(table.get(HeirClass::Mother), Fraction::ratio(1, 4));
        assert_eq!(table.get(HeirClass::DaughterGroup), Fraction::ratio(3, 4));
    }

    #[test]
    fn test_unresolved_is_left_alone() {
        let mut table = ShareTable::new();
        table.award(HeirClass::WifeGroup, Fraction::ratio(1, 4)).unwrap();

        let outcome = ResidueOutcome::Unresolved { remainder: Fraction::ratio(3, 4) };
        let normalization = Normalizer::normalize(&mut table, &outcome).unwrap();

        assert_eq!(normalization, Normalization::None);
        assert_eq!(table.get(HeirClass::WifeGroup), Fraction::ratio(1, 4));
    }
}
