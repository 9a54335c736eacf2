//! Test Data Builders
//!
//! Provides a builder for estate inputs. Tests name only the survivors that
//! matter to them; everything else defaults to zero.

use core_kernel::Currency;
use domain_inheritance::{DeceasedSex, EstateInput};
use rust_decimal::Decimal;

use crate::fixtures::DecimalFixtures;

/// Builder for constructing estate inputs
pub struct EstateInputBuilder {
    input: EstateInput,
}

impl Default for EstateInputBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EstateInputBuilder {
    /// Creates a builder for a male deceased with the standard test estate
    pub fn new() -> Self {
        Self {
            input: EstateInput::new(DeceasedSex::Male, DecimalFixtures::standard_estate()),
        }
    }

    /// Starts from a female deceased
    pub fn female() -> Self {
        Self::new().with_deceased(DeceasedSex::Female)
    }

    /// Starts from a male deceased
    pub fn male() -> Self {
        Self::new().with_deceased(DeceasedSex::Male)
    }

    pub fn with_deceased(mut self, sex: DeceasedSex) -> Self {
        self.input.deceased = sex;
        self
    }

    pub fn with_estate_value(mut self, value: Decimal) -> Self {
        self.input.estate_value = value;
        self
    }

    pub fn with_debts(mut self, debts: Decimal) -> Self {
        self.input.debts = debts;
        self
    }

    pub fn with_bequest(mut self, bequest: Decimal) -> Self {
        self.input.bequest = bequest;
        self
    }

    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.input.currency = currency;
        self
    }

    /// Adds a surviving husband
    pub fn with_husband(mut self) -> Self {
        self.input.husband = 1;
        self
    }

    pub fn with_wives(mut self, count: u32) -> Self {
        self.input.wives = count;
        self
    }

    pub fn with_sons(mut self, count: u32) -> Self {
        self.input.sons = count;
        self
    }

    pub fn with_daughters(mut self, count: u32) -> Self {
        self.input.daughters = count;
        self
    }

    /// Adds a surviving father
    pub fn with_father(mut self) -> Self {
        self.input.father = 1;
        self
    }

    /// Adds a surviving mother
    pub fn with_mother(mut self) -> Self {
        self.input.mother = 1;
        self
    }

    pub fn with_full_brothers(mut self, count: u32) -> Self {
        self.input.full_brothers = count;
        self
    }

    pub fn with_full_sisters(mut self, count: u32) -> Self {
        self.input.full_sisters = count;
        self
    }

    pub fn with_paternal_brothers(mut self, count: u32) -> Self {
        self.input.paternal_brothers = count;
        self
    }

    pub fn with_paternal_sisters(mut self, count: u32) -> Self {
        self.input.paternal_sisters = count;
        self
    }

    /// Builds the input without validating it
    pub fn build(self) -> EstateInput {
        self.input
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_builder_defaults() {
        let input = EstateInputBuilder::new().build();
        assert_eq!(input.estate_value, dec!(120000));
        assert_eq!(input.survivor_count(), 0);
    }

    #[test]
    fn test_builder_sets_survivors() {
        let input = EstateInputBuilder::female()
            .with_husband()
            .with_daughters(2)
            .with_father()
            .build();

        assert_eq!(input.deceased, DeceasedSex::Female);
        assert_eq!(input.husband, 1);
        assert_eq!(input.daughters, 2);
        assert_eq!(input.father, 1);
        assert_eq!(input.survivor_count(), 4);
    }
}
