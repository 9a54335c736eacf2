//! Pre-built Test Fixtures
//!
//! Worked estates with known classical distributions. Amounts use the
//! standard 120,000 estate so every share of a twenty-fourth is whole.

use domain_inheritance::EstateInput;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::builders::EstateInputBuilder;

/// Fixture for decimal test data
pub struct DecimalFixtures;

impl DecimalFixtures {
    /// Standard estate, divisible by 24 and 13
    pub fn standard_estate() -> Decimal {
        dec!(120000)
    }

    /// Tolerance for sums of amounts derived from repeating decimals
    pub fn epsilon() -> Decimal {
        dec!(0.000000001)
    }
}

/// Fixture for worked estate scenarios
pub struct ScenarioFixtures;

impl ScenarioFixtures {
    /// Husband and one daughter: radd returns the remainder to the daughter
    pub fn husband_and_daughter() -> EstateInput {
        EstateInputBuilder::female()
            .with_husband()
            .with_daughters(1)
            .build()
    }

    /// Husband, two daughters and father: fixed shares reach 13/12, awl applies
    pub fn awl_husband_daughters_father() -> EstateInput {
        EstateInputBuilder::female()
            .with_husband()
            .with_daughters(2)
            .with_father()
            .build()
    }

    /// Debts greater than the estate
    pub fn debts_exceed_estate() -> EstateInput {
        EstateInputBuilder::male()
            .with_estate_value(dec!(50000))
            .with_debts(dec!(50000.01))
            .with_sons(1)
            .build()
    }

    /// Bequest of 40,000 against a 90,000 estate
    pub fn capped_bequest() -> EstateInput {
        EstateInputBuilder::male()
            .with_estate_value(dec!(90000))
            .with_bequest(dec!(40000))
            .with_sons(1)
            .build()
    }

    /// Wife, two sons, one daughter, both parents
    pub fn wife_children_parents() -> EstateInput {
        EstateInputBuilder::male()
            .with_wives(1)
            .with_sons(2)
            .with_daughters(1)
            .with_father()
            .with_mother()
            .build()
    }

    /// Husband, mother and two full sisters: 1/2 + 1/6 + 2/3 = 4/3, awl over eight
    pub fn husband_mother_full_sisters() -> EstateInput {
        EstateInputBuilder::female()
            .with_husband()
            .with_mother()
            .with_full_sisters(2)
            .build()
    }

    /// Two wives alone: the remainder reverts to the treasury
    pub fn wives_only() -> EstateInput {
        EstateInputBuilder::male().with_wives(2).build()
    }

    /// Daughter and full sister: the sister takes residue beside the daughter
    pub fn daughter_and_full_sister() -> EstateInput {
        EstateInputBuilder::male()
            .with_daughters(1)
            .with_full_sisters(1)
            .with_paternal_brothers(1)
            .build()
    }

    /// Mother and father only
    pub fn parents_only() -> EstateInput {
        EstateInputBuilder::male().with_father().with_mother().build()
    }
}
