//! Fixed (Qur'anic) shares
//!
//! A rule table mapping each present heir class, given who else survives,
//! to its entitlement basis. Each rule is a pattern match over the
//! survivor context so the table reads the way it is classically stated.
//!
//! | Class | Condition | Basis |
//! |-------|-----------|-------|
//! | Husband | descendant / none | 1/4 / 1/2 |
//! | Wives (together) | descendant / none | 1/8 / 1/4 |
//! | Father | son / daughters only / no descendant | 1/6 / 1/6 + residue / residue |
//! | Mother | descendant or 2+ siblings / otherwise | 1/6 / 1/3 |
//! | Sons | always | residue |
//! | Daughters | with son / one / two or more | residue / 1/2 / 2/3 |
//! | Full sisters | with full brother or daughters / one / two or more | residue / 1/2 / 2/3 |
//! | Consanguine sisters | with consanguine brother / beside one full sister / with daughters / one / two or more | residue / 1/6 / residue / 1/2 / 2/3 |
//! | Brothers | always | residue |

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use core_kernel::{Fraction, FractionError};
use crate::allocation::ShareTable;
use crate::eligibility::Eligibility;
use crate::heir::HeirClass;
use crate::input::EstateInput;

const HALF: Fraction = Fraction::ratio(1, 2);
const THIRD: Fraction = Fraction::ratio(1, 3);
const QUARTER: Fraction = Fraction::ratio(1, 4);
const SIXTH: Fraction = Fraction::ratio(1, 6);
const EIGHTH: Fraction = Fraction::ratio(1, 8);
const TWO_THIRDS: Fraction = Fraction::ratio(2, 3);

/// How a present class is entitled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "basis", content = "fraction", rename_all = "snake_case")]
pub enum ShareBasis {
    /// A fixed fraction only
    Fixed(Fraction),
    /// A fixed fraction, plus any residue if no closer residuary survives
    FixedWithResidue(Fraction),
    /// Residue only
    Residuary,
}

impl ShareBasis {
    /// The fixed part of the entitlement, if any
    pub fn fixed_fraction(&self) -> Option<Fraction> {
        match self {
            ShareBasis::Fixed(f) | ShareBasis::FixedWithResidue(f) => Some(*f),
            ShareBasis::Residuary => None,
        }
    }

    pub fn takes_residue(&self) -> bool {
        matches!(self, ShareBasis::FixedWithResidue(_) | ShareBasis::Residuary)
    }
}

/// Entitlement basis of every present class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedShares {
    bases: BTreeMap<HeirClass, ShareBasis>,
}

impl FixedShares {
    /// Applies the rule table to every present class
    pub fn assign(input: &EstateInput, eligibility: &Eligibility) -> Self {
        let bases = eligibility
            .present()
            .map(|class| (class, basis_for(class, input, eligibility)))
            .collect();
        Self { bases }
    }

    pub fn basis(&self, class: HeirClass) -> Option<ShareBasis> {
        self.bases.get(&class).copied()
    }

    /// Present classes that can receive residue, with their basis
    pub fn residuaries(&self) -> impl Iterator<Item = (HeirClass, ShareBasis)> + '_ {
        self.bases
            .iter()
            .filter(|(_, basis)| basis.takes_residue())
            .map(|(class, basis)| (*class, *basis))
    }

    /// Seeds a share table with the fixed fractions
    pub fn to_table(&self) -> Result<ShareTable, FractionError> {
        let mut table = ShareTable::new();
        for (class, basis) in &self.bases {
            if let Some(fraction) = basis.fixed_fraction() {
                table.award(*class, fraction)?;
            }
        }
        Ok(table)
    }
}

fn basis_for(class: HeirClass, input: &EstateInput, eligibility: &Eligibility) -> ShareBasis {
    use ShareBasis::{Fixed, FixedWithResidue, Residuary};

    let descendant = input.has_descendant();

    match class {
        HeirClass::Husband => Fixed(if descendant { QUARTER } else { HALF }),
        HeirClass::WifeGroup => Fixed(if descendant { EIGHTH } else { QUARTER }),
        HeirClass::Father => match (input.has_son(), input.daughters > 0) {
            (true, _) => Fixed(SIXTH),
            (false, true) => FixedWithResidue(SIXTH),
            (false, false) => Residuary,
        },
        HeirClass::Mother => {
            if descendant || input.sibling_count() >= 2 {
                Fixed(SIXTH)
            } else {
                Fixed(THIRD)
            }
        }
        HeirClass::SonGroup => Residuary,
        HeirClass::DaughterGroup => match (input.has_son(), input.daughters) {
            (true, _) => Residuary,
            (false, 1) => Fixed(HALF),
            (false, _) => Fixed(TWO_THIRDS),
        },
        HeirClass::FullSisterGroup => {
            let with_brother = eligibility.is_present(HeirClass::FullBrotherGroup);
            match (with_brother, input.daughters > 0, input.full_sisters) {
                (true, _, _) | (false, true, _) => Residuary,
                (false, false, 1) => Fixed(HALF),
                (false, false, _) => Fixed(TWO_THIRDS),
            }
        }
        HeirClass::PaternalSisterGroup => {
            let with_brother = eligibility.is_present(HeirClass::PaternalBrotherGroup);
            // Still present beside full sisters only when a single full sister holds a half
            let beside_full_sister = eligibility.is_present(HeirClass::FullSisterGroup);
            match (with_brother, beside_full_sister, input.daughters > 0, input.paternal_sisters) {
                (true, _, _, _) => Residuary,
                (false, true, _, _) => Fixed(SIXTH),
                (false, false, true, _) => Residuary,
                (false, false, false, 1) => Fixed(HALF),
                (false, false, false, _) => Fixed(TWO_THIRDS),
            }
        }
        HeirClass::FullBrotherGroup | HeirClass::PaternalBrotherGroup => Residuary,
    }
}
