//! Tests for the command line library surface

use rust_decimal_macros::dec;

use core_kernel::Currency;
use domain_inheritance::{HeirClass, InputField};
use interface_cli::{parse_input, run, CliError, ErrorReport, RunOptions};
use test_utils::fixtures::ScenarioFixtures;
use test_utils::{assert_err, assert_ok};

fn raw(input: &domain_inheritance::EstateInput) -> String {
    serde_json::to_string(input).unwrap()
}

// ============================================================================
// Run Tests
// ============================================================================

mod run_tests {
    use super::*;

    #[test]
    fn test_report_without_payouts() {
        let report = assert_ok!(run(
            &raw(&ScenarioFixtures::husband_and_daughter()),
            &RunOptions::default()
        ));

        assert!(report.payouts.is_none());
        let json: serde_json::Value = serde_json::from_str(&report.render(false).unwrap()).unwrap();
        assert_eq!(json["class_shares"][1]["heir_class"], "daughter_group");
        assert_eq!(json["normalization"]["path"], "radd");
        assert!(json.get("payouts").is_none());
    }

    #[test]
    fn test_report_with_payouts_in_override_currency() {
        let options = RunOptions {
            payouts: true,
            currency: Some(Currency::KWD),
        };
        let report = assert_ok!(run(&raw(&ScenarioFixtures::parents_only()), &options));

        let payouts = report.payouts.expect("payout schedule");
        assert_eq!(payouts.currency, Currency::KWD);
        assert_eq!(payouts.total.amount(), dec!(120000));
        let father: Vec<_> = payouts.payouts_for(HeirClass::Father).collect();
        assert_eq!(father[0].amount.amount(), dec!(80000));
    }

    #[test]
    fn test_payouts_default_to_input_currency() {
        let mut input = ScenarioFixtures::wives_only();
        input.currency = Currency::EGP;
        let options = RunOptions {
            payouts: true,
            currency: None,
        };
        let report = assert_ok!(run(&raw(&input), &options));

        let payouts = report.payouts.expect("payout schedule");
        assert_eq!(payouts.currency, Currency::EGP);
        assert_eq!(payouts.unresolved.amount(), dec!(90000));
    }

    #[test]
    fn test_pretty_and_compact_render_same_value() {
        let report = assert_ok!(run(
            &raw(&ScenarioFixtures::wife_children_parents()),
            &RunOptions::default()
        ));

        let pretty: serde_json::Value = serde_json::from_str(&report.render(true).unwrap()).unwrap();
        let compact = report.render(false).unwrap();
        assert!(!compact.contains('\n'));
        assert_eq!(pretty, serde_json::from_str::<serde_json::Value>(&compact).unwrap());
    }
}

// ============================================================================
// Error Tests
// ============================================================================

mod error_tests {
    use super::*;

    #[test]
    fn test_malformed_json() {
        let err = assert_err!(parse_input("{ \"estate_value\": "));
        assert!(matches!(err, CliError::Input(_)));
    }

    #[test]
    fn test_validation_failure_names_field() {
        let err = assert_err!(run(
            &raw(&ScenarioFixtures::debts_exceed_estate()),
            &RunOptions::default()
        ));
        let report = ErrorReport::from(&err);

        assert_eq!(err.exit_code(), 2);
        assert_eq!(report.field, Some(InputField::Debts));
    }

    #[test]
    fn test_negative_count_is_malformed_input() {
        let err = assert_err!(parse_input(r#"{ "estate_value": "100", "sons": -1 }"#));
        assert_eq!(err.exit_code(), 2);
    }
}
