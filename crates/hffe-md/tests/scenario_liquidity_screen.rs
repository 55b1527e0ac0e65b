//! Quote CSVs screened end to end.

use hffe_md::{
    parse_quotes_csv_str, LiquidityChecker, LiquidityCondition, LiquidityError, LiquidityFailure,
    LiquidityVerdict, QuoteSeries,
};

#[test]
fn scenario_liquid_put_series_is_accepted() {
    let q = parse_quotes_csv_str("1.20,1.35,P\n1.22,1.37,P\n1.25,1.40,P\n").unwrap();
    assert_eq!(q.len(), 3);

    let names = ["zero_bid", "zero_ask", "stale_prices", "is_put"];
    let checker = LiquidityChecker::from_names(&names, false).unwrap();
    assert_eq!(checker.evaluate(&q).unwrap(), LiquidityVerdict::Accepted);
    assert!(checker.condition_results(&q).all(|(_, passed)| passed));
}

#[test]
fn scenario_zero_ask_rejected_before_staleness() {
    let q = parse_quotes_csv_str("1.20,0,C\n1.20,0,C\n").unwrap();
    let verdict = LiquidityChecker::default().evaluate(&q).unwrap();
    assert_eq!(
        verdict,
        LiquidityVerdict::Rejected {
            failure: LiquidityFailure::Condition {
                condition: LiquidityCondition::ZeroAsk
            }
        }
    );
}

#[test]
fn scenario_single_quote_is_stale() {
    let q = parse_quotes_csv_str("1.20,1.35,P\n").unwrap();
    let verdict = LiquidityChecker::default().evaluate(&q).unwrap();
    assert_eq!(verdict.to_string(), "rejected: stale_prices (stale prices)");
}

#[test]
fn scenario_strict_mode_raises_on_mixed_types() {
    let q = parse_quotes_csv_str("1.20,1.35,P\n1.25,1.40,C\n").unwrap();

    let lenient = LiquidityChecker::default().evaluate(&q).unwrap();
    assert!(!lenient.is_accepted());

    let checker = LiquidityChecker::from_names(&["zero_bid"], true).unwrap();
    assert!(checker.is_strict());
    let err = checker.evaluate(&q).unwrap_err();
    assert!(matches!(err, LiquidityError::MixedOptionType { index: 1, .. }));
    assert!(err.to_string().contains("mixed option types"));
}

#[test]
fn scenario_unknown_condition_name_rejected() {
    let err = LiquidityChecker::from_names(&["zero_bid", "tight_spread"], false).unwrap_err();
    assert_eq!(err, LiquidityError::UnknownCondition("tight_spread".to_string()));
}
