//! Two days of five prices: the reference example for the whole pipeline.

use hffe_stats::*;

const PRICES: [f64; 10] = [1.0, 1.01, 1.02, 1.01, 1.00, 2.0, 2.02, 2.00, 2.01, 2.03];
const DATES: [i64; 10] = [
    20200101, 20200101, 20200101, 20200101, 20200101, 20200102, 20200102, 20200102, 20200102,
    20200102,
];
const TIMES: [i64; 10] = [901, 915, 930, 945, 1000, 901, 915, 930, 945, 1000];

#[test]
fn scenario_reference_example_has_no_jumps() {
    let stock = Stock::new(&PRICES, &DATES, Some(&TIMES[..])).unwrap();

    assert_eq!(stock.returns.dim(), (4, 2));

    let expected_rv0: f64 = PRICES[..5]
        .windows(2)
        .map(|w| (w[1] / w[0]).ln().powi(2))
        .sum();
    assert!((stock.rv[0] - expected_rv0).abs() < 1e-15);

    assert!(stock.bv.iter().all(|v| *v >= 0.0));
    assert!(stock.rd.iter().all(|v| *v == 0.0));
    assert_eq!(stock.rc, stock.returns);
    assert_eq!(stock.total.jumps, 0);
    assert_eq!(stock.total.diffusive, 8);
}

#[test]
fn scenario_summary_serializes_to_json() {
    let stock = Stock::new(&PRICES, &DATES, Some(&TIMES[..])).unwrap();
    let json = serde_json::to_value(stock.summary()).unwrap();
    assert_eq!(json["total"]["prices"], 5);
    assert_eq!(json["total"]["returns"], 4);
    assert_eq!(json["total"]["days"], 2);
    assert_eq!(json["rv"].as_array().unwrap().len(), 2);
    assert_eq!(json["first"], "2020-01-01T09:01:00");
    assert_eq!(json["last"], "2020-01-02T10:00:00");
}

#[test]
fn scenario_zero_or_negative_price_is_rejected() {
    let mut prices = PRICES;
    prices[7] = 0.0;
    let err = Stock::new(&prices, &DATES, Some(&TIMES[..])).unwrap_err();
    assert!(matches!(err, StatsError::NonPositivePrice { index: 7, .. }));

    prices[7] = -2.0;
    let err = Stock::new(&prices, &DATES, Some(&TIMES[..])).unwrap_err();
    assert!(matches!(err, StatsError::NonPositivePrice { index: 7, .. }));
}

#[test]
fn scenario_mismatched_lengths_are_rejected() {
    let err = Stock::new(&PRICES, &DATES[..8], Some(&TIMES[..])).unwrap_err();
    assert!(matches!(err, StatsError::LengthMismatch { .. }));
}

#[test]
fn scenario_malformed_date_is_rejected() {
    let mut dates = DATES;
    dates[3] = 20201301;
    let err = Stock::new(&PRICES, &dates, Some(&TIMES[..])).unwrap_err();
    assert_eq!(
        err,
        StatsError::InvalidDate {
            index: 3,
            code: 20201301
        }
    );
}

#[test]
fn scenario_date_only_series_groups_stamps_by_date() {
    // Without time codes every row sits at midnight of its date; all rows of
    // one date fall before the next midnight and form that day's column.
    let prices = [1.0, 1.01, 1.02, 1.01, 2.0, 2.02, 2.00, 2.01];
    let dates = [
        20200101, 20200101, 20200101, 20200101, 20200102, 20200102, 20200102, 20200102,
    ];
    let stock = Stock::new(&prices, &dates, None).unwrap();

    assert!(stock
        .datetimes
        .iter()
        .all(|dt| dt.time() == chrono::NaiveTime::MIN));
    assert_eq!(stock.shape().prices_per_day, 4);
    assert_eq!(stock.shape().days, 2);
    assert_eq!(stock.returns.dim(), (3, 2));
    assert_eq!(stock.tod.len(), 3);
    assert_eq!(&stock.rc + &stock.rd, stock.returns);
    assert_eq!(stock.total.jumps + stock.total.diffusive, 6);

    let expected_rv1: f64 = prices[4..]
        .windows(2)
        .map(|w| (w[1] / w[0]).ln().powi(2))
        .sum();
    assert!((stock.rv[1] - expected_rv1).abs() < 1e-15);
}
