//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating estate inputs that pass
//! validation, so properties exercise the distribution rules rather than
//! the validator.

use core_kernel::Currency;
use domain_inheritance::{DeceasedSex, EstateInput, HeirClass};
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for the deceased's sex
pub fn deceased_strategy() -> impl Strategy<Value = DeceasedSex> {
    prop_oneof![Just(DeceasedSex::Male), Just(DeceasedSex::Female)]
}

/// Strategy for estate values in cents, from 1.00 to 10,000,000.00
pub fn estate_value_strategy() -> impl Strategy<Value = Decimal> {
    (100i64..1_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for a settlement currency
pub fn currency_strategy() -> impl Strategy<Value = Currency> {
    proptest::sample::select(Currency::ALL.to_vec())
}

/// Strategy for any heir class
pub fn heir_class_strategy() -> impl Strategy<Value = HeirClass> {
    proptest::sample::select(HeirClass::ALL.to_vec())
}

/// Strategy for a spouse configuration: (husband, wives), never both
pub fn spouse_strategy() -> impl Strategy<Value = (u32, u32)> {
    prop_oneof![
        Just((0u32, 0u32)),
        Just((1u32, 0u32)),
        (1u32..=4u32).prop_map(|wives| (0u32, wives)),
    ]
}

/// Strategy for a group count, biased toward small families
pub fn group_count_strategy() -> impl Strategy<Value = u32> {
    prop_oneof![
        3 => Just(0u32),
        3 => 1u32..4u32,
        1 => 4u32..12u32,
    ]
}

/// Strategy for a valid estate input with no debts or bequest
pub fn survivors_strategy() -> impl Strategy<Value = EstateInput> {
    (
        deceased_strategy(),
        estate_value_strategy(),
        spouse_strategy(),
        (group_count_strategy(), group_count_strategy()),
        (0u32..=1u32, 0u32..=1u32),
        (group_count_strategy(), group_count_strategy()),
        (group_count_strategy(), group_count_strategy()),
    )
        .prop_map(
            |(
                deceased,
                estate_value,
                (husband, wives),
                (sons, daughters),
                (father, mother),
                (full_brothers, full_sisters),
                (paternal_brothers, paternal_sisters),
            )| {
                let mut input = EstateInput::new(deceased, estate_value);
                input.husband = husband;
                input.wives = wives;
                input.sons = sons;
                input.daughters = daughters;
                input.father = father;
                input.mother = mother;
                input.full_brothers = full_brothers;
                input.full_sisters = full_sisters;
                input.paternal_brothers = paternal_brothers;
                input.paternal_sisters = paternal_sisters;
                input
            },
        )
}

/// Strategy for a valid estate input including debts and a bequest
pub fn estate_input_strategy() -> impl Strategy<Value = EstateInput> {
    (survivors_strategy(), 0u32..=100u32, 0u32..=60u32).prop_map(
        |(mut input, debt_percent, bequest_percent)| {
            input.debts = (input.estate_value * Decimal::from(debt_percent) / Decimal::ONE_HUNDRED)
                .round_dp(2);
            input.bequest = (input.estate_value * Decimal::from(bequest_percent)
                / Decimal::ONE_HUNDRED)
                .round_dp(2);
            input
        },
    )
}
