use super::*;

#[test]
fn day_of_reads_plain_dates_and_timestamps() {
    let expected = NaiveDate::from_ymd_opt(2024, 3, 5);
    assert_eq!(day_of("2024-03-05"), expected);
    assert_eq!(day_of("2024-03-05T23:10:00.000Z"), expected);
}

#[test]
fn day_of_rejects_garbage() {
    assert_eq!(day_of(""), None);
    assert_eq!(day_of("yesterday"), None);
    assert_eq!(day_of("2024-13-40"), None);
}

#[test]
fn format_day_uses_short_month_label() {
    assert_eq!(format_day("2024-03-05T10:00:00.000Z"), "Mar 5, 2024");
    assert_eq!(format_day("2023-12-25"), "Dec 25, 2023");
}

#[test]
fn format_day_passes_through_unparseable_text() {
    assert_eq!(format_day("unknown"), "unknown");
}

#[test]
fn iso_day_round_trips_through_day_of() {
    let day = NaiveDate::from_ymd_opt(2025, 1, 9).unwrap();
    assert_eq!(iso_day(day), "2025-01-09");
    assert_eq!(day_of(&iso_day(day)), Some(day));
}
