//! Unit tests for the Money module
//!
//! Tests cover money creation, checked arithmetic, allocation used by
//! payout settlement, and currency handling.

use core_kernel::{Money, Currency, MoneyError};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

mod creation {
    use super::*;

    #[test]
    fn test_new_rounds_to_four_decimal_places() {
        let m = Money::new(dec!(27692.307692307692), Currency::USD);
        assert_eq!(m.amount(), dec!(27692.3077));
    }

    #[test]
    fn test_from_minor_converts_cents_correctly() {
        let m = Money::from_minor(3692308, Currency::SAR);
        assert_eq!(m.amount(), dec!(36923.08));
    }

    #[test]
    fn test_zero_creates_zero_amount() {
        let m = Money::zero(Currency::EGP);
        assert!(m.is_zero());
        assert!(!m.is_negative());
        assert_eq!(m.currency(), Currency::EGP);
    }

    #[test]
    fn test_round_to_currency_three_places() {
        let m = Money::new(dec!(10.12345), Currency::BHD);
        assert_eq!(m.round_to_currency().amount(), dec!(10.123));
    }
}

mod arithmetic {
    use super::*;

    #[test]
    fn test_checked_add_same_currency() {
        let a = Money::new(dec!(100.00), Currency::AED);
        let b = Money::new(dec!(50.25), Currency::AED);
        assert_eq!(a.checked_add(&b).unwrap().amount(), dec!(150.25));
    }

    #[test]
    fn test_checked_sub_can_go_negative() {
        let a = Money::new(dec!(50.00), Currency::USD);
        let b = Money::new(dec!(100.00), Currency::USD);
        let result = a.checked_sub(&b).unwrap();
        assert!(result.is_negative());
    }

    #[test]
    fn test_checked_add_currency_mismatch() {
        let a = Money::new(dec!(100.00), Currency::USD);
        let b = Money::new(dec!(100.00), Currency::MYR);
        assert_eq!(
            a.checked_add(&b),
            Err(MoneyError::CurrencyMismatch("USD".to_string(), "MYR".to_string()))
        );
    }

    #[test]
    fn test_checked_sum() {
        let parts = vec![
            Money::new(dec!(30000), Currency::USD),
            Money::new(dec!(90000), Currency::USD),
        ];
        let total = Money::checked_sum(&parts, Currency::USD).unwrap();
        assert_eq!(total.amount(), dec!(120000));
    }
}

mod allocation {
    use super::*;

    #[test]
    fn test_allocate_handles_remainder() {
        let m = Money::new(dec!(73846.15), Currency::USD);
        let parts = m.allocate(2).unwrap();

        assert_eq!(parts[0].amount(), dec!(36923.08));
        assert_eq!(parts[1].amount(), dec!(36923.07));
        let total: Decimal = parts.iter().map(|p| p.amount()).sum();
        assert_eq!(total, dec!(73846.15));
    }

    #[test]
    fn test_allocate_zero_parts_error() {
        let m = Money::new(dec!(100.00), Currency::USD);
        assert!(matches!(m.allocate(0), Err(MoneyError::InvalidAmount(_))));
    }

    #[test]
    fn test_allocate_by_ratios_last_gets_remainder() {
        let m = Money::new(dec!(120000.00), Currency::USD);
        let ratios = vec![dec!(3), dec!(8), dec!(2)];
        let parts = m.allocate_by_ratios(&ratios).unwrap();

        assert_eq!(parts[0].amount(), dec!(27692.31));
        assert_eq!(parts[1].amount(), dec!(73846.15));
        assert_eq!(parts[2].amount(), dec!(18461.54));
    }

    #[test]
    fn test_allocate_by_ratios_empty_error() {
        let m = Money::new(dec!(100.00), Currency::USD);
        assert!(matches!(m.allocate_by_ratios(&[]), Err(MoneyError::InvalidAmount(_))));
    }

    #[test]
    fn test_allocate_by_ratios_zero_total_error() {
        let m = Money::new(dec!(100.00), Currency::USD);
        let ratios = vec![dec!(0), dec!(0)];
        assert!(matches!(m.allocate_by_ratios(&ratios), Err(MoneyError::InvalidAmount(_))));
    }
}

mod currency {
    use super::*;

    #[test]
    fn test_all_currencies_have_symbols_and_parse_back() {
        for currency in Currency::ALL {
            assert!(!currency.symbol().is_empty());
            assert_eq!(currency.code().parse::<Currency>().unwrap(), currency);
        }
    }

    #[test]
    fn test_currency_decimal_places() {
        assert_eq!(Currency::USD.decimal_places(), 2);
        assert_eq!(Currency::SAR.decimal_places(), 2);
        assert_eq!(Currency::KWD.decimal_places(), 3);
    }

    #[test]
    fn test_currency_serde_uppercase() {
        let json = serde_json::to_string(&Currency::QAR).unwrap();
        assert_eq!(json, "\"QAR\"");
    }

    #[test]
    fn test_money_display() {
        let m = Money::new(dec!(1234.5), Currency::USD);
        assert_eq!(m.to_string(), "$ 1234.50");
    }
}
