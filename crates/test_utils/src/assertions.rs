//! Custom Test Assertions
//!
//! Distribution invariants as assertion helpers, with messages that name
//! the heir class and the values that disagree.

use core_kernel::Fraction;
use domain_inheritance::{DistributionResult, HeirClass};
use rust_decimal::Decimal;

use crate::fixtures::DecimalFixtures;

/// Asserts that a decimal value is approximately equal to another
pub fn assert_decimal_approx_eq(actual: Decimal, expected: Decimal, tolerance: Decimal) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "Decimals differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual,
        expected,
        diff,
        tolerance
    );
}

/// Asserts a class's exact fraction and its amount
pub fn assert_class_share(
    result: &DistributionResult,
    class: HeirClass,
    fraction: Fraction,
    amount: Decimal,
) {
    let share = result
        .class_share(class)
        .unwrap_or_else(|| panic!("No share for {} in {:?}", class, result.class_shares));
    assert_eq!(share.fraction, fraction, "Fraction mismatch for {}", class);
    assert_decimal_approx_eq(share.amount, amount, DecimalFixtures::epsilon());
}

/// Asserts that a class received nothing
pub fn assert_no_share(result: &DistributionResult, class: HeirClass) {
    assert!(
        result.class_share(class).is_none(),
        "Expected no share for {}, got {:?}",
        class,
        result.class_share(class)
    );
}

/// Asserts fraction closure: assigned fractions plus any unresolved
/// remainder sum to exactly one
pub fn assert_fraction_closure(result: &DistributionResult) {
    let total = result
        .total_fraction()
        .and_then(|t| t.checked_add(&result.unresolved_fraction()))
        .unwrap_or_else(|e| panic!("Fraction arithmetic failed: {}", e));
    assert_eq!(total, Fraction::ONE, "Fractions do not close: {:?}", result.class_shares);
}

/// Asserts conservation: class amounts plus any unresolved amount sum to
/// the distributable estate
pub fn assert_conserves(result: &DistributionResult) {
    let assigned: Decimal = result.class_shares.iter().map(|s| s.amount).sum();
    let unresolved = result
        .unresolved_fraction()
        .apply_to(result.net_estate.distributable)
        .unwrap_or_else(|e| panic!("Fraction arithmetic failed: {}", e));
    assert_decimal_approx_eq(
        assigned + unresolved,
        result.net_estate.distributable,
        DecimalFixtures::epsilon(),
    );
}

/// Asserts that every class is split evenly among its members
pub fn assert_even_split(result: &DistributionResult) {
    for share in &result.class_shares {
        let members: Vec<_> = result.individual_shares_for(share.heir_class).collect();
        assert_eq!(
            members.len(),
            share.member_count as usize,
            "Member count mismatch for {}",
            share.heir_class
        );

        let indexes: Vec<u32> = members.iter().map(|m| m.member_index).collect();
        let expected: Vec<u32> = (1..=share.member_count).collect();
        assert_eq!(indexes, expected, "Member indexes for {}", share.heir_class);

        let sum = Fraction::checked_sum(members.iter().map(|m| &m.fraction))
            .unwrap_or_else(|e| panic!("Fraction arithmetic failed: {}", e));
        assert_eq!(sum, share.fraction, "Member fractions for {}", share.heir_class);
        assert!(
            members.windows(2).all(|w| w[0].amount == w[1].amount),
            "Uneven split for {}",
            share.heir_class
        );

        let amount: Decimal = members.iter().map(|m| m.amount).sum();
        assert_decimal_approx_eq(amount, share.amount, DecimalFixtures::epsilon());
    }
}

/// Asserts every structural invariant of a successful distribution
pub fn assert_distribution_invariants(result: &DistributionResult) {
    assert_fraction_closure(result);
    assert_conserves(result);
    assert_even_split(result);
}

/// Asserts that a result is Ok and returns the value
#[macro_export]
macro_rules! assert_ok {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
    ($result:expr, $msg:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("{}: {:?}", $msg, e),
        }
    };
}

/// Asserts that a result is Err and returns the error
#[macro_export]
macro_rules! assert_err {
    ($result:expr) => {
        match $result {
            Ok(value) => panic!("Expected Err, got Ok: {:?}", value),
            Err(e) => e,
        }
    };
    ($result:expr, $msg:expr) => {
        match $result {
            Ok(value) => panic!("{}: got Ok({:?})", $msg, value),
            Err(e) => e,
        }
    };
}
