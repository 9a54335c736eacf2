//! Net estate calculation
//!
//! Debts come off the gross estate first. The bequest is then applied up to
//! one third of what remains; anything requested beyond that ceiling is
//! reported as a [`Warning::BequestCapped`] rather than silently dropped.
//! Heirs share whatever is left.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::input::EstateInput;
use crate::warning::Warning;

/// Breakdown of the estate from gross value to the amount heirs share
///
/// `after_debts` is the estate value minus debts, the base of the one-third
/// bequest ceiling. `distributable` is the net estate after the bequest,
/// the amount every share fraction is applied to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetEstate {
    /// Gross estate value
    pub estate_value: Decimal,
    /// Debts settled first
    pub debts: Decimal,
    /// Estate after debts, the base for the bequest ceiling
    pub after_debts: Decimal,
    /// One third of the estate after debts
    pub bequest_cap: Decimal,
    /// Bequest actually applied, never above the cap
    pub applied_bequest: Decimal,
    /// Amount distributed among the heirs
    pub distributable: Decimal,
}

impl NetEstate {
    /// Derives the net estate from a validated input
    ///
    /// Returns the breakdown and, when the bequest was capped, the warning
    /// carrying the excess.
    pub fn calculate(input: &EstateInput) -> (NetEstate, Option<Warning>) {
        let after_debts = (input.estate_value - input.debts).max(Decimal::ZERO);
        let bequest_cap = after_debts / dec!(3);
        let applied_bequest = input.bequest.min(bequest_cap);

        let warning = (input.bequest > bequest_cap).then(|| Warning::BequestCapped {
            excess_amount: input.bequest - bequest_cap,
        });

        let net = NetEstate {
            estate_value: input.estate_value,
            debts: input.debts,
            after_debts,
            bequest_cap,
            applied_bequest,
            distributable: after_debts - applied_bequest,
        };

        (net, warning)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::DeceasedSex;

    fn input(estate: Decimal, debts: Decimal, bequest: Decimal) -> EstateInput {
        let mut input = EstateInput::new(DeceasedSex::Female, estate);
        input.debts = debts;
        input.bequest = bequest;
        input
    }

    #[test]
    fn test_bequest_capped_at_one_third() {
        let (net, warning) = NetEstate::calculate(&input(dec!(90000), dec!(0), dec!(40000)));

        assert_eq!(net.bequest_cap, dec!(30000));
        assert_eq!(net.applied_bequest, dec!(30000));
        assert_eq!(net.distributable, dec!(60000));
        assert_eq!(warning, Some(Warning::BequestCapped { excess_amount: dec!(10000) }));
    }

    #[test]
    fn test_bequest_within_cap() {
        let (net, warning) = NetEstate::calculate(&input(dec!(100000), dec!(10000), dec!(20000)));

        assert_eq!(net.after_debts, dec!(90000));
        assert_eq!(net.applied_bequest, dec!(20000));
        assert_eq!(net.distributable, dec!(70000));
        assert!(warning.is_none());
    }

    #[test]
    fn test_bequest_exactly_at_cap_is_not_capped() {
        let (net, warning) = NetEstate::calculate(&input(dec!(90000), dec!(0), dec!(30000)));
        assert_eq!(net.distributable, dec!(60000));
        assert!(warning.is_none());
    }

    #[test]
    fn test_debts_consume_estate() {
        let (net, warning) = NetEstate::calculate(&input(dec!(5000), dec!(5000), dec!(100)));
        assert_eq!(net.distributable, Decimal::ZERO);
        assert_eq!(warning, Some(Warning::BequestCapped { excess_amount: dec!(100) }));
    }
}
