//! Eligibility and exclusion (hajb)
//!
//! Decides, for every heir class, whether it is present, excluded by a
//! closer relative, or absent. Rules are applied in a fixed order and are
//! one-way: the first rule to exclude a class records its reason, and an
//! excluded class contributes nothing downstream.
//!
//! # Exclusion Order
//!
//! 1. A father excludes all brothers and sisters
//! 2. A son excludes all brothers and sisters
//! 3. A full brother excludes consanguine brothers and sisters
//! 4. A full sister taking residue alongside daughters excludes consanguine
//!    brothers and sisters
//! 5. Two or more full sisters on a fixed two-thirds exclude consanguine
//!    sisters, unless a consanguine brother shares residue with them
//!
//! Daughters, parents and spouses are never excluded.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::heir::HeirClass;
use crate::input::EstateInput;

/// Why a class was excluded, as a stable code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExclusionReason {
    ExcludedByFather,
    ExcludedBySon,
    ExcludedByFullBrother,
    ExcludedByResiduaryFullSister,
    ExcludedByFullSisters,
}

/// Status of one heir class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum HeirStatus {
    Present,
    Excluded(ExclusionReason),
    Absent,
}

/// An excluded class, for the audit trail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExcludedClass {
    pub heir_class: HeirClass,
    pub reason: ExclusionReason,
}

/// Resolved status of every heir class for one estate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Eligibility {
    statuses: BTreeMap<HeirClass, HeirStatus>,
}

impl Eligibility {
    /// Resolves exclusions from the survivor counts
    pub fn resolve(input: &EstateInput) -> Self {
        let statuses = HeirClass::ALL
            .iter()
            .map(|&class| {
                let status = if input.member_count(class) > 0 {
                    HeirStatus::Present
                } else {
                    HeirStatus::Absent
                };
                (class, status)
            })
            .collect();
        let mut eligibility = Self { statuses };

        if input.father > 0 {
            eligibility.exclude_all(&HeirClass::SIBLINGS, ExclusionReason::ExcludedByFather);
        }

        if input.has_son() {
            eligibility.exclude_all(&HeirClass::SIBLINGS, ExclusionReason::ExcludedBySon);
        }

        const CONSANGUINE: [HeirClass; 2] =
            [HeirClass::PaternalBrotherGroup, HeirClass::PaternalSisterGroup];

        if eligibility.is_present(HeirClass::FullBrotherGroup) {
            eligibility.exclude_all(&CONSANGUINE, ExclusionReason::ExcludedByFullBrother);
        }

        if eligibility.is_present(HeirClass::FullSisterGroup) && input.daughters > 0 {
            eligibility.exclude_all(&CONSANGUINE, ExclusionReason::ExcludedByResiduaryFullSister);
        }

        if eligibility.is_present(HeirClass::FullSisterGroup)
            && input.full_sisters >= 2
            && !eligibility.is_present(HeirClass::PaternalBrotherGroup)
        {
            eligibility.exclude_all(
                &[HeirClass::PaternalSisterGroup],
                ExclusionReason::ExcludedByFullSisters,
            );
        }

        eligibility
    }

    fn exclude_all(&mut self, classes: &[HeirClass], reason: ExclusionReason) {
        for class in classes {
            if let Some(status) = self.statuses.get_mut(class) {
                if *status == HeirStatus::Present {
                    *status = HeirStatus::Excluded(reason);
                }
            }
        }
    }

    pub fn status(&self, class: HeirClass) -> HeirStatus {
        self.statuses
            .get(&class)
            .copied()
            .unwrap_or(HeirStatus::Absent)
    }

    pub fn is_present(&self, class: HeirClass) -> bool {
        self.status(class) == HeirStatus::Present
    }

    /// Classes carried into share assignment, in result order
    pub fn present(&self) -> impl Iterator<Item = HeirClass> + '_ {
        self.statuses
            .iter()
            .filter(|(_, status)| **status == HeirStatus::Present)
            .map(|(class, _)| *class)
    }

    /// Excluded classes with their reasons, in result order
    pub fn exclusions(&self) -> Vec<ExcludedClass> {
        self.statuses
            .iter()
            .filter_map(|(class, status)| match status {
                HeirStatus::Excluded(reason) => Some(ExcludedClass {
                    heir_class: *class,
                    reason: *reason,
                }),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::DeceasedSex;
    use rust_decimal_macros::dec;

    fn input() -> EstateInput {
        EstateInput::new(DeceasedSex::Male, dec!(1000))
    }

    #[test]
    fn test_father_excludes_all_siblings() {
        let mut input = input();
        input.father = 1;
        input.full_brothers = 2;
        input.paternal_sisters = 1;
        let eligibility = Eligibility::resolve(&input);

        assert!(eligibility.is_present(HeirClass::Father));
        assert_eq!(
            eligibility.status(HeirClass::FullBrotherGroup),
            HeirStatus::Excluded(ExclusionReason::ExcludedByFather)
        );
        assert_eq!(
            eligibility.status(HeirClass::PaternalSisterGroup),
            HeirStatus::Excluded(ExclusionReason::ExcludedByFather)
        );
        assert_eq!(eligibility.status(HeirClass::FullSisterGroup), HeirStatus::Absent);
    }

    #[test]
    fn test_first_reason_wins() {
        let mut input = input();
        input.father = 1;
        input.sons = 1;
        input.full_sisters = 1;
        let eligibility = Eligibility::resolve(&input);

        assert_eq!(
            eligibility.exclusions(),
            vec![ExcludedClass {
                heir_class: HeirClass::FullSisterGroup,
                reason: ExclusionReason::ExcludedByFather,
            }]
        );
    }

    #[test]
    fn test_son_does_not_exclude_daughters_or_parents() {
        let mut input = input();
        input.sons = 1;
        input.daughters = 2;
        input.mother = 1;
        input.wives = 1;
        input.full_brothers = 1;
        let eligibility = Eligibility::resolve(&input);

        let present: Vec<_> = eligibility.present().collect();
        assert_eq!(
            present,
            vec![HeirClass::WifeGroup, HeirClass::Mother, HeirClass::SonGroup, HeirClass::DaughterGroup]
        );
        assert_eq!(
            eligibility.status(HeirClass::FullBrotherGroup),
            HeirStatus::Excluded(ExclusionReason::ExcludedBySon)
        );
    }

    #[test]
    fn test_full_brother_excludes_consanguine_siblings() {
        let mut input = input();
        input.full_brothers = 1;
        input.paternal_brothers = 1;
        input.paternal_sisters = 1;
        let eligibility = Eligibility::resolve(&input);

        assert_eq!(eligibility.exclusions().len(), 2);
        assert!(eligibility
            .exclusions()
            .iter()
            .all(|e| e.reason == ExclusionReason::ExcludedByFullBrother));
    }

    #[test]
    fn test_full_sister_with_daughter_excludes_consanguine_brother() {
        let mut input = input();
        input.daughters = 1;
        input.full_sisters = 1;
        input.paternal_brothers = 1;
        let eligibility = Eligibility::resolve(&input);

        assert_eq!(
            eligibility.status(HeirClass::PaternalBrotherGroup),
            HeirStatus::Excluded(ExclusionReason::ExcludedByResiduaryFullSister)
        );
    }

    #[test]
    fn test_two_full_sisters_exclude_consanguine_sisters() {
        let mut input = input();
        input.full_sisters = 2;
        input.paternal_sisters = 3;
        let eligibility = Eligibility::resolve(&input);

        assert_eq!(
            eligibility.status(HeirClass::PaternalSisterGroup),
            HeirStatus::Excluded(ExclusionReason::ExcludedByFullSisters)
        );
    }

    #[test]
    fn test_consanguine_brother_saves_consanguine_sisters() {
        let mut input = input();
        input.full_sisters = 2;
        input.paternal_brothers = 1;
        input.paternal_sisters = 3;
        let eligibility = Eligibility::resolve(&input);

        assert!(eligibility.is_present(HeirClass::PaternalSisterGroup));
        assert!(eligibility.is_present(HeirClass::PaternalBrotherGroup));
    }

    #[test]
    fn test_one_full_sister_leaves_consanguine_sisters() {
        let mut input = input();
        input.full_sisters = 1;
        input.paternal_sisters = 2;
        let eligibility = Eligibility::resolve(&input);

        assert!(eligibility.is_present(HeirClass::PaternalSisterGroup));
        assert!(eligibility.exclusions().is_empty());
    }
}
