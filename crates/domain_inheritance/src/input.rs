//! Estate input model
//!
//! An [`EstateInput`] describes the deceased's estate and the counts of
//! surviving relatives. Counts are unsigned, so negativity is impossible by
//! construction; range limits (spouse and parent presence, at most four
//! wives) are enforced by [`crate::validation::InputValidator`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::Currency;
use crate::heir::HeirClass;

/// Sex of the deceased
///
/// Retained for audit only; shares are driven entirely by the survivor counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DeceasedSex {
    #[default]
    Male,
    Female,
}

/// Structured description of an estate and its surviving relatives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstateInput {
    /// Sex of the deceased
    #[serde(default)]
    pub deceased: DeceasedSex,
    /// Gross estate value
    pub estate_value: Decimal,
    /// Outstanding debts, settled before anything else
    #[serde(default)]
    pub debts: Decimal,
    /// Requested bequest, capped at one third of the estate after debts
    #[serde(default)]
    pub bequest: Decimal,
    /// Settlement currency; the share math itself is currency-agnostic
    #[serde(default)]
    pub currency: Currency,
    /// Surviving husband (0 or 1)
    #[serde(default)]
    pub husband: u32,
    /// Surviving wives (0 to 4)
    #[serde(default)]
    pub wives: u32,
    #[serde(default)]
    pub sons: u32,
    #[serde(default)]
    pub daughters: u32,
    /// Surviving father (0 or 1)
    #[serde(default)]
    pub father: u32,
    /// Surviving mother (0 or 1)
    #[serde(default)]
    pub mother: u32,
    #[serde(default)]
    pub full_brothers: u32,
    #[serde(default)]
    pub full_sisters: u32,
    /// Consanguine brothers (same father, different mother)
    #[serde(default)]
    pub paternal_brothers: u32,
    /// Consanguine sisters (same father, different mother)
    #[serde(default)]
    pub paternal_sisters: u32,
}

impl EstateInput {
    /// Creates an input with the given estate value and no debts, bequest or survivors
    pub fn new(deceased: DeceasedSex, estate_value: Decimal) -> Self {
        Self {
            deceased,
            estate_value,
            debts: Decimal::ZERO,
            bequest: Decimal::ZERO,
            currency: Currency::default(),
            husband: 0,
            wives: 0,
            sons: 0,
            daughters: 0,
            father: 0,
            mother: 0,
            full_brothers: 0,
            full_sisters: 0,
            paternal_brothers: 0,
            paternal_sisters: 0,
        }
    }

    /// Number of surviving members of an heir class
    pub fn member_count(&self, class: HeirClass) -> u32 {
        match class {
            HeirClass::Husband => self.husband,
            HeirClass::WifeGroup => self.wives,
            HeirClass::Father => self.father,
            HeirClass::Mother => self.mother,
            HeirClass::SonGroup => self.sons,
            HeirClass::DaughterGroup => self.daughters,
            HeirClass::FullBrotherGroup => self.full_brothers,
            HeirClass::FullSisterGroup => self.full_sisters,
            HeirClass::PaternalBrotherGroup => self.paternal_brothers,
            HeirClass::PaternalSisterGroup => self.paternal_sisters,
        }
    }

    /// Total number of surviving relatives across all classes
    pub fn survivor_count(&self) -> u64 {
        HeirClass::ALL
            .iter()
            .map(|c| u64::from(self.member_count(*c)))
            .sum()
    }

    pub fn has_son(&self) -> bool {
        self.sons > 0
    }

    /// Any surviving child of the deceased
    pub fn has_descendant(&self) -> bool {
        self.sons > 0 || self.daughters > 0
    }

    /// Surviving brothers and sisters of every kind, excluded or not
    pub fn sibling_count(&self) -> u64 {
        HeirClass::SIBLINGS
            .iter()
            .map(|c| u64::from(self.member_count(*c)))
            .sum()
    }
}

impl Default for EstateInput {
    fn default() -> Self {
        Self::new(DeceasedSex::default(), Decimal::ZERO)
    }
}
