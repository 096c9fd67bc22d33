use chrono::{NaiveDate, NaiveDateTime};
use timediff::{init_logger, DateTimeFormatter, StaticCatalog, TimeDiffError};

fn dt(y: i32, m: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, mi, s)
        .unwrap()
}

fn formatter() -> DateTimeFormatter<StaticCatalog> {
    init_logger(false);
    DateTimeFormatter::new(StaticCatalog::new())
}

#[test]
fn test_years_ahead_formats_as_in_years() {
    let formatter = formatter();

    let message = formatter
        .format_diff(dt(2021, 1, 1, 0, 0, 0), dt(2023, 3, 15, 0, 0, 0), None)
        .unwrap();

    assert_eq!(message, "in 2 years");
}

#[test]
fn test_hours_behind_formats_as_hours_ago() {
    let formatter = formatter();

    let message = formatter
        .format_diff(dt(2023, 3, 15, 12, 0, 0), dt(2023, 3, 15, 10, 0, 0), None)
        .unwrap();

    assert_eq!(message, "2 hours ago");
}

#[test]
fn test_identical_instants_format_as_now() {
    let formatter = formatter();

    let instant = dt(2023, 3, 15, 10, 0, 0);
    let message = formatter.format_diff(instant, instant, None).unwrap();

    assert_eq!(message, "now");
}

#[test]
fn test_singular_counts_use_the_singular_form() {
    let formatter = formatter();

    let message = formatter
        .format_diff(dt(2023, 3, 14, 0, 0, 0), dt(2023, 3, 15, 0, 0, 0), None)
        .unwrap();

    assert_eq!(message, "in 1 day");
}

#[test]
fn test_every_unit_is_reachable() {
    let formatter = formatter();
    let base = dt(2020, 1, 1, 0, 0, 0);

    let cases = [
        (dt(2023, 1, 1, 0, 0, 0), "in 3 years"),
        (dt(2020, 3, 1, 0, 0, 0), "in 2 months"),
        (dt(2020, 1, 5, 0, 0, 0), "in 4 days"),
        (dt(2020, 1, 1, 6, 0, 0), "in 6 hours"),
        (dt(2020, 1, 1, 0, 45, 0), "in 45 minutes"),
        (dt(2020, 1, 1, 0, 0, 20), "in 20 seconds"),
    ];

    for (to, expected) in cases {
        let message = formatter.format_diff(base, to, None).unwrap();
        assert_eq!(message, expected);
    }
}

#[test]
fn test_most_significant_unit_wins() {
    let formatter = formatter();

    // 1 month and 10 days apart, but only the month is reported.
    let message = formatter
        .format_diff(dt(2023, 1, 1, 0, 0, 0), dt(2023, 2, 11, 0, 0, 0), None)
        .unwrap();

    assert_eq!(message, "in 1 month");
}

#[test]
fn test_month_end_arithmetic_reaches_the_formatter() {
    let formatter = formatter();

    let message = formatter
        .format_diff(dt(2023, 1, 31, 0, 0, 0), dt(2023, 3, 1, 0, 0, 0), None)
        .unwrap();

    assert_eq!(message, "in 1 month");
}

#[test]
fn test_mixed_input_forms_format_end_to_end() {
    let formatter = formatter();

    let message = formatter
        .format_diff_from_inputs("2023-01-01", "2023-01-08", None)
        .unwrap();
    assert_eq!(message, "in 7 days");

    let message = formatter
        .format_diff_from_inputs(0i64, 7_200i64, None)
        .unwrap();
    assert_eq!(message, "in 2 hours");
}

#[test]
fn test_direct_message_requests() {
    let formatter = formatter();

    assert_eq!(
        formatter.get_diff_message(3, true, "minute", None).unwrap(),
        "3 minutes ago"
    );
    assert_eq!(
        formatter.get_diff_message(1, false, "Hour", None).unwrap(),
        "in 1 hour"
    );
    assert_eq!(formatter.get_empty_diff_message(None).unwrap(), "now");
}

#[test]
fn test_zero_count_is_rejected_before_lookup() {
    let formatter = formatter();

    let result = formatter.get_diff_message(0, false, "day", None);
    assert!(matches!(result, Err(TimeDiffError::ZeroCountError)));
}

#[test]
fn test_unknown_unit_is_rejected_before_lookup() {
    let formatter = formatter();

    let result = formatter.get_diff_message(2, false, "century", None);
    assert!(matches!(
        result,
        Err(TimeDiffError::UnsupportedUnitError { unit }) if unit == "century"
    ));
}

#[test]
fn test_unknown_locale_surfaces_the_lookup_error() {
    let formatter = formatter();

    let result = formatter.format_diff(dt(2023, 1, 1, 0, 0, 0), dt(2024, 1, 1, 0, 0, 0), Some("de"));
    assert!(matches!(result, Err(TimeDiffError::MessageLookupError(_))));
}

#[test]
fn test_sub_second_difference_formats_as_now() {
    let formatter = formatter();

    let from = dt(2023, 1, 1, 0, 0, 0);
    let to = NaiveDate::from_ymd_opt(2023, 1, 1)
        .unwrap()
        .and_hms_milli_opt(0, 0, 0, 750)
        .unwrap();

    let message = formatter.format_diff(from, to, None).unwrap();
    assert_eq!(message, "now");
}

#[test]
fn test_one_second_difference_is_not_empty() {
    let formatter = formatter();

    let message = formatter
        .format_diff(dt(2023, 1, 1, 0, 0, 0), dt(2023, 1, 1, 0, 0, 1), None)
        .unwrap();
    assert_eq!(message, "in 1 second");
}
