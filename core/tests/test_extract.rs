use chrono::NaiveDate;
use octrends_core::extract::{parse_daily_csv, ExtractError};

const SHEET_CSV: &str = "\
Date,Test Pos Rate 7d Avg,Tests Admin 7d Avg,Pos Tests 7d Avg,Wastewater 7d (kv / L),Hospital Avg 7d,New Deaths
2022-09-30,5.2,\"1,234.5\",64.2,8.1,120.0,2
2022-09-29,5.0,,63.0,,119.5,1
not-a-date,9.9,1.0,1.0,1.0,1.0,1
,9.9,1.0,1.0,1.0,1.0,1
2022-09-28,,1100.0,60.0,7.9,118.0,0
";

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn parses_rows_in_sheet_order() {
    let rows = parse_daily_csv(SHEET_CSV).unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].date, date(2022, 9, 30));
    assert_eq!(rows[1].date, date(2022, 9, 29));
    assert_eq!(rows[2].date, date(2022, 9, 28));
}

#[test]
fn strips_thousands_separators() {
    let rows = parse_daily_csv(SHEET_CSV).unwrap();
    assert_eq!(rows[0].admin_tests, Some(1234.5));
}

#[test]
fn blank_cells_become_none() {
    let rows = parse_daily_csv(SHEET_CSV).unwrap();
    assert_eq!(rows[1].admin_tests, None);
    assert_eq!(rows[1].wastewater, None);
    assert_eq!(rows[2].positive_rate, None);
    // an explicit zero is parsed, not blanked
    assert_eq!(rows[2].deaths, Some(0.0));
}

#[test]
fn bad_and_blank_dates_are_skipped_not_fatal() {
    let rows = parse_daily_csv(SHEET_CSV).unwrap();
    assert!(rows.iter().all(|r| r.positive_rate != Some(9.9)));
}

#[test]
fn non_numeric_cells_become_none() {
    let csv = "\
Date,Test Pos Rate 7d Avg,New Deaths
2022-09-30,pending,2
";
    let rows = parse_daily_csv(csv).unwrap();
    assert_eq!(rows[0].positive_rate, None);
    assert_eq!(rows[0].deaths, Some(2.0));
    // columns absent from the sheet stay None
    assert_eq!(rows[0].wastewater, None);
}

#[test]
fn missing_date_column_is_an_error() {
    let csv = "Foo,Bar\n1,2\n";
    let err = parse_daily_csv(csv).unwrap_err();
    assert!(matches!(err, ExtractError::MissingColumn("Date")));
}
