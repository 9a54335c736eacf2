//! Heir classes
//!
//! The closed set of relatives the engine distributes to. Consumers key off
//! these tags directly; display names and localization belong to them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An heir class
///
/// Singular classes (husband, father, mother) have at most one member;
/// group classes share their entitlement evenly among members.
/// The declaration order is the order classes appear in results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeirClass {
    Husband,
    WifeGroup,
    Father,
    Mother,
    SonGroup,
    DaughterGroup,
    FullBrotherGroup,
    FullSisterGroup,
    PaternalBrotherGroup,
    PaternalSisterGroup,
}

impl HeirClass {
    pub const ALL: [HeirClass; 10] = [
        HeirClass::Husband,
        HeirClass::WifeGroup,
        HeirClass::Father,
        HeirClass::Mother,
        HeirClass::SonGroup,
        HeirClass::DaughterGroup,
        HeirClass::FullBrotherGroup,
        HeirClass::FullSisterGroup,
        HeirClass::PaternalBrotherGroup,
        HeirClass::PaternalSisterGroup,
    ];

    /// Collateral classes, all blocked by a father or a son
    pub const SIBLINGS: [HeirClass; 4] = [
        HeirClass::FullBrotherGroup,
        HeirClass::FullSisterGroup,
        HeirClass::PaternalBrotherGroup,
        HeirClass::PaternalSisterGroup,
    ];

    /// Stable tag, identical to the serialized form
    pub fn code(&self) -> &'static str {
        match self {
            HeirClass::Husband => "husband",
            HeirClass::WifeGroup => "wife_group",
            HeirClass::Father => "father",
            HeirClass::Mother => "mother",
            HeirClass::SonGroup => "son_group",
            HeirClass::DaughterGroup => "daughter_group",
            HeirClass::FullBrotherGroup => "full_brother_group",
            HeirClass::FullSisterGroup => "full_sister_group",
            HeirClass::PaternalBrotherGroup => "paternal_brother_group",
            HeirClass::PaternalSisterGroup => "paternal_sister_group",
        }
    }

    /// Spouses take fixed shares only and never share in radd
    pub fn is_spouse(&self) -> bool {
        matches!(self, HeirClass::Husband | HeirClass::WifeGroup)
    }

    pub fn is_blood_relative(&self) -> bool {
        !self.is_spouse()
    }

    /// Classes whose entitlement is split among several members
    pub fn is_group(&self) -> bool {
        !matches!(self, HeirClass::Husband | HeirClass::Father | HeirClass::Mother)
    }

    /// Males take two portions to a female's one when sharing residue per head
    pub fn is_male(&self) -> bool {
        matches!(
            self,
            HeirClass::Husband
                | HeirClass::Father
                | HeirClass::SonGroup
                | HeirClass::FullBrotherGroup
                | HeirClass::PaternalBrotherGroup
        )
    }
}

impl fmt::Display for HeirClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
