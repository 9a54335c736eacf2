//! Residue distribution (ta'sib)
//!
//! Whatever the fixed shares leave over goes to the closest tier of
//! residuary heirs. Within a tier, males take two portions per head to a
//! female's one.
//!
//! # Priority
//!
//! 1. Sons, with daughters alongside them
//! 2. Father
//! 3. Full brothers with full sisters, or full sisters alone beside daughters
//! 4. Consanguine brothers with consanguine sisters, or consanguine sisters
//!    alone beside daughters
//!
//! When no tier survives, the remainder is either handed to the normalizer
//! for radd (blood relatives hold fixed shares) or reported as unresolved
//! (only spouses, or nobody, hold shares).

use serde::{Deserialize, Serialize};

use core_kernel::{Fraction, FractionError};
use crate::allocation::ShareTable;
use crate::fixed_share::FixedShares;
use crate::heir::HeirClass;
use crate::input::EstateInput;

/// Residuary tiers in priority order
const TIERS: [&[HeirClass]; 4] = [
    &[HeirClass::SonGroup, HeirClass::DaughterGroup],
    &[HeirClass::Father],
    &[HeirClass::FullBrotherGroup, HeirClass::FullSisterGroup],
    &[HeirClass::PaternalBrotherGroup, HeirClass::PaternalSisterGroup],
];

/// What happened to the remainder after fixed shares
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ResidueOutcome {
    /// The remainder went to a residuary tier
    Distributed {
        remainder: Fraction,
        heir_classes: Vec<HeirClass>,
    },
    /// Fixed shares used up the whole estate, or more; any residuary heirs
    /// listed receive nothing
    Exhausted { unpaid: Vec<HeirClass> },
    /// No residuary heir; blood relatives absorb the remainder by radd
    ReturnToBloodRelatives { remainder: Fraction },
    /// No residuary heir and no blood relative to return it to
    Unresolved { remainder: Fraction },
}

/// Allocates the remainder left by fixed shares
pub struct ResidualDistributor;

impl ResidualDistributor {
    /// Distributes the remainder into `table`
    ///
    /// `table` must hold exactly the fixed shares on entry. Only the
    /// `Distributed` outcome modifies it.
    pub fn distribute(
        input: &EstateInput,
        shares: &FixedShares,
        table: &mut ShareTable,
    ) -> Result<ResidueOutcome, FractionError> {
        let remainder = Fraction::ONE.checked_sub(&table.total()?)?;

        let residuaries: Vec<HeirClass> = shares.residuaries().map(|(class, _)| class).collect();

        if !remainder.is_positive() {
            // A father with a fixed sixth is not left unpaid
            let unpaid = residuaries
                .into_iter()
                .filter(|class| shares.basis(*class).and_then(|b| b.fixed_fraction()).is_none())
                .collect();
            return Ok(ResidueOutcome::Exhausted { unpaid });
        }

        let tier = TIERS.iter().find_map(|tier| {
            let members: Vec<HeirClass> = tier
                .iter()
                .copied()
                .filter(|class| residuaries.contains(class))
                .collect();
            (!members.is_empty()).then_some(members)
        });

        match tier {
            Some(members) => {
                Self::split_per_head(input, &members, &remainder, table)?;
                Ok(ResidueOutcome::Distributed {
                    remainder,
                    heir_classes: members,
                })
            }
            None if table.blood_total()?.is_positive() => {
                Ok(ResidueOutcome::ReturnToBloodRelatives { remainder })
            }
            None => Ok(ResidueOutcome::Unresolved { remainder }),
        }
    }

    /// Splits the remainder across a tier, two portions per male head
    fn split_per_head(
        input: &EstateInput,
        members: &[HeirClass],
        remainder: &Fraction,
        table: &mut ShareTable,
    ) -> Result<(), FractionError> {
        let portions = |class: HeirClass| -> i128 {
            let weight = if class.is_male() { 2 } else { 1 };
            weight * i128::from(input.member_count(class))
        };
        let total_portions: i128 = members.iter().map(|c| portions(*c)).sum();

        for class in members {
            let share = remainder
                .checked_mul_int(portions(*class))?
                .checked_div_int(total_portions)?;
            table.award(*class, share)?;
        }
        Ok(())
    }
}
