//! Share table
//!
//! The working set of awarded fractions, keyed by heir class. Fixed shares
//! populate it first, residue is added on top, and normalization rescales it.

use std::collections::BTreeMap;

use core_kernel::{Fraction, FractionError};
use crate::heir::HeirClass;

/// Fractions of the distributable estate awarded per heir class
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShareTable {
    shares: BTreeMap<HeirClass, Fraction>,
}

impl ShareTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the fraction awarded to a class, zero if none
    pub fn get(&self, class: HeirClass) -> Fraction {
        self.shares.get(&class).copied().unwrap_or(Fraction::ZERO)
    }

    /// Adds to a class's award
    pub fn award(&mut self, class: HeirClass, fraction: Fraction) -> Result<(), FractionError> {
        let current = self.get(class);
        self.shares.insert(class, current.checked_add(&fraction)?);
        Ok(())
    }

    /// Sum of all awarded fractions
    pub fn total(&self) -> Result<Fraction, FractionError> {
        Fraction::checked_sum(self.shares.values())
    }

    /// Sum of spouse awards
    pub fn spouse_total(&self) -> Result<Fraction, FractionError> {
        Fraction::checked_sum(self.matching(HeirClass::is_spouse))
    }

    /// Sum of blood-relative awards
    pub fn blood_total(&self) -> Result<Fraction, FractionError> {
        Fraction::checked_sum(self.matching(HeirClass::is_blood_relative))
    }

    fn matching(&self, predicate: fn(&HeirClass) -> bool) -> impl Iterator<Item = &Fraction> {
        self.shares
            .iter()
            .filter(move |(class, _)| predicate(class))
            .map(|(_, fraction)| fraction)
    }

    /// Multiplies every award by `factor`
    pub fn scale_all(&mut self, factor: &Fraction) -> Result<(), FractionError> {
        self.scale_where(factor, |_| true)
    }

    /// Multiplies blood-relative awards by `factor`, leaving spouses untouched
    pub fn scale_blood(&mut self, factor: &Fraction) -> Result<(), FractionError> {
        self.scale_where(factor, HeirClass::is_blood_relative)
    }

    fn scale_where(
        &mut self,
        factor: &Fraction,
        predicate: fn(&HeirClass) -> bool,
    ) -> Result<(), FractionError> {
        for (class, fraction) in self.shares.iter_mut() {
            if predicate(class) {
                *fraction = fraction.checked_mul(factor)?;
            }
        }
        Ok(())
    }

    /// Classes with a nonzero award, in result order
    pub fn awarded(&self) -> impl Iterator<Item = (HeirClass, Fraction)> + '_ {
        self.shares
            .iter()
            .filter(|(_, fraction)| fraction.is_positive())
            .map(|(class, fraction)| (*class, *fraction))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_award_accumulates() {
        let mut table = ShareTable::new();
        table.award(HeirClass::Father, Fraction::ratio(1, 6)).unwrap();
        table.award(HeirClass::Father, Fraction::ratio(1, 12)).unwrap();
        assert_eq!(table.get(HeirClass::Father), Fraction::ratio(1, 4));
    }

    #[test]
    fn test_spouse_and_blood_totals() {
        let mut table = ShareTable::new();
        table.award(HeirClass::Husband, Fraction::ratio(1, 4)).unwrap();
        table.award(HeirClass::DaughterGroup, Fraction::ratio(1, 2)).unwrap();
        table.award(HeirClass::Mother, Fraction::ratio(1, 6)).unwrap();

        assert_eq!(table.spouse_total().unwrap(), Fraction::ratio(1, 4));
        assert_eq!(table.blood_total().unwrap(), Fraction::ratio(2, 3));
        assert_eq!(table.total().unwrap(), Fraction::ratio(11, 12));
    }

    #[test]
    fn test_scale_blood_leaves_spouse() {
        let mut table = ShareTable::new();
        table.award(HeirClass::WifeGroup, Fraction::ratio(1, 8)).unwrap();
        table.award(HeirClass::Mother, Fraction::ratio(1, 6)).unwrap();
        table.scale_blood(&Fraction::from_integer(2)).unwrap();

        assert_eq!(table.get(HeirClass::WifeGroup), Fraction::ratio(1, 8));
        assert_eq!(table.get(HeirClass::Mother), Fraction::ratio(1, 3));
    }

    #[test]
    fn test_awarded_skips_zero() {
        let mut table = ShareTable::new();
        table.award(HeirClass::SonGroup, Fraction::ZERO).unwrap();
        table.award(HeirClass::Mother, Fraction::ratio(1, 6)).unwrap();
        let awarded: Vec<_> = table.awarded().collect();
        assert_eq!(awarded, vec![(HeirClass::Mother, Fraction::ratio(1, 6))]);
    }
}
