//! Payout settlement
//!
//! The distribution result is exact; money is paid in minor units. A
//! [`PayoutSchedule`] rounds the result into a currency so that:
//!
//! - class payouts sum exactly to the distributable estate rounded to the
//!   currency (less any unresolved remainder, which is paid to no one)
//! - members of a class differ by at most one minor unit, any leftover unit
//!   going to the lowest member indexes

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use core_kernel::{Currency, Money, MoneyError};
use crate::distribution::DistributionResult;
use crate::heir::HeirClass;
use crate::warning::Warning;

/// Amount paid to one member of a class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payout {
    pub heir_class: HeirClass,
    pub member_index: u32,
    pub amount: Money,
}

/// Rounded payouts for a distribution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutSchedule {
    pub currency: Currency,
    /// Total paid to heirs
    pub total: Money,
    /// Amount reverting to the public treasury, if any
    pub unresolved: Money,
    pub payouts: Vec<Payout>,
}

impl PayoutSchedule {
    /// Settles a distribution result in `currency`
    ///
    /// # Errors
    ///
    /// Returns a [`MoneyError`] if an amount overflows the currency's minor units.
    pub fn from_result(result: &DistributionResult, currency: Currency) -> Result<Self, MoneyError> {
        let estate = Money::new(result.net_estate.distributable, currency).round_to_currency();

        // The unresolved remainder takes its slot in the ratio split so that
        // heirs and treasury together close at the rounded estate.
        let mut ratios: Vec<Decimal> = result.class_shares.iter().map(|s| s.amount).collect();
        let unresolved_amount = result.warnings.iter().find_map(|w| match w {
            Warning::UnresolvedRemainder { amount, .. } => Some(*amount),
            _ => None,
        });
        if let Some(amount) = unresolved_amount {
            ratios.push(amount);
        }

        let mut unresolved = Money::zero(currency);
        let mut payouts = Vec::new();

        if ratios.iter().any(|r| !r.is_zero()) {
            let mut allocations = estate.allocate_by_ratios(&ratios)?;
            if unresolved_amount.is_some() {
                if let Some(treasury) = allocations.pop() {
                    unresolved = treasury;
                }
            }

            for (share, class_total) in result.class_shares.iter().zip(allocations) {
                let members = class_total.allocate(share.member_count)?;
                payouts.extend(members.into_iter().enumerate().map(|(i, amount)| Payout {
                    heir_class: share.heir_class,
                    member_index: i as u32 + 1,
                    amount,
                }));
            }
        }

        let total = Money::checked_sum(payouts.iter().map(|p| &p.amount), currency)?;
        debug!(%total, %unresolved, payouts = payouts.len(), "Payout schedule settled");

        Ok(Self {
            currency,
            total,
            unresolved,
            payouts,
        })
    }

    pub fn payouts_for(&self, class: HeirClass) -> impl Iterator<Item = &Payout> {
        self.payouts.iter().filter(move |p| p.heir_class == class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distribution::compute;
    use crate::input::{DeceasedSex, EstateInput};
    use rust_decimal_macros::dec;

    #[test]
    fn test_awl_payouts_close_exactly() {
        let mut input = EstateInput::new(DeceasedSex::Female, dec!(120000));
        input.husband = 1;
        input.daughters = 2;
        input.father = 1;
        let result = compute(&input).unwrap();
        let schedule = PayoutSchedule::from_result(&result, Currency::USD).unwrap();

        assert_eq!(schedule.total.amount(), dec!(120000));
        let daughters: Vec<_> = schedule.payouts_for(HeirClass::DaughterGroup).collect();
        assert_eq!(daughters.len(), 2);
        let diff = (daughters[0].amount.amount() - daughters[1].amount.amount()).abs();
        assert!(diff <= dec!(0.01));
    }

    #[test]
    fn test_unresolved_is_not_paid() {
        let mut input = EstateInput::new(DeceasedSex::Male, dec!(1000));
        input.wives = 3;
        let result = compute(&input).unwrap();
        let schedule = PayoutSchedule::from_result(&result, Currency::SAR).unwrap();

        assert_eq!(schedule.total.amount(), dec!(250));
        assert_eq!(schedule.unresolved.amount(), dec!(750));
        assert_eq!(schedule.payouts.len(), 3);
        assert_eq!(schedule.payouts[0].amount.amount(), dec!(83.34));
    }

    #[test]
    fn test_no_heirs_pays_nothing() {
        let input = EstateInput::new(DeceasedSex::Female, dec!(500));
        let result = compute(&input).unwrap();
        let schedule = PayoutSchedule::from_result(&result, Currency::USD).unwrap();

        assert!(schedule.payouts.is_empty());
        assert_eq!(schedule.unresolved.amount(), dec!(500));
    }
}
