use chrono::NaiveDate;
use padrino_client::presentation::serialization::{age_on, format_display_date, parse_date};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_parse_date_formats() {
    assert_eq!(parse_date("2024-03-05"), Some(date(2024, 3, 5)));
    assert_eq!(parse_date("2024-03-05T10:20:30.000Z"), Some(date(2024, 3, 5)));
    assert_eq!(parse_date("2024-03-05T10:20:30"), Some(date(2024, 3, 5)));
    assert_eq!(parse_date("2024-03-05 10:20:30"), Some(date(2024, 3, 5)));
    assert_eq!(parse_date("ayer"), None);
}

#[test]
fn test_format_display_date_keeps_unparseable() {
    assert_eq!(format_display_date("2024-03-05"), "05/03/2024");
    assert_eq!(format_display_date("próximamente"), "próximamente");
}

#[test]
fn test_age_on_birthday_boundary() {
    let birth = date(2015, 10, 17);
    assert_eq!(age_on(birth, date(2026, 10, 16)), Some(10));
    assert_eq!(age_on(birth, date(2026, 10, 17)), Some(11));
    assert_eq!(age_on(birth, date(2010, 1, 1)), None);
}
