use chrono::NaiveDate;
use csv::StringRecord;
use log::{info, warn};
use thiserror::Error;

use crate::models::DailyRecord;

const DATE_F: &str = "%Y-%m-%d";

// Column headers as published on the spreadsheet Data sheet.
pub const COL_DATE: &str = "Date";
pub const COL_POSITIVE_RATE: &str = "Test Pos Rate 7d Avg";
pub const COL_ADMIN_TESTS: &str = "Tests Admin 7d Avg";
pub const COL_POSITIVE_TESTS: &str = "Pos Tests 7d Avg";
pub const COL_WASTEWATER: &str = "Wastewater 7d (kv / L)";
pub const COL_HOSPITAL_CASES: &str = "Hospital Avg 7d";
pub const COL_DEATHS: &str = "New Deaths";

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("csv parse error: {0}")]
    Csv(#[from] csv::Error),
    #[error("missing required column: {0}")]
    MissingColumn(&'static str),
}

/// Parse the Data sheet CSV into daily records, preserving the sheet's
/// most-recent-first order. Blank or non-numeric metric cells become
/// `None`; rows with a blank or unparseable date are skipped with a
/// warning rather than failing the whole extract.
pub fn parse_daily_csv(csv_text: &str) -> Result<Vec<DailyRecord>, ExtractError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(csv_text.as_bytes());

    let headers = reader.headers()?.clone();
    let col = |name: &str| headers.iter().position(|h| h == name);

    let date_col = col(COL_DATE).ok_or(ExtractError::MissingColumn(COL_DATE))?;
    let rate_col = col(COL_POSITIVE_RATE);
    let admin_col = col(COL_ADMIN_TESTS);
    let pos_col = col(COL_POSITIVE_TESTS);
    let waste_col = col(COL_WASTEWATER);
    let hosp_col = col(COL_HOSPITAL_CASES);
    let death_col = col(COL_DEATHS);

    let mut rows = Vec::new();

    for (idx, record) in reader.records().enumerate() {
        let record = record?;
        let raw_date = record.get(date_col).unwrap_or("");

        if raw_date.is_empty() {
            continue;
        }

        let date = match NaiveDate::parse_from_str(raw_date, DATE_F) {
            Ok(parsed) => parsed,
            Err(err) => {
                warn!("skipping row {}: bad date {raw_date:?} ({err})", idx + 2);
                continue;
            }
        };

        rows.push(DailyRecord {
            date,
            positive_rate: parse_cell(&record, rate_col),
            admin_tests: parse_cell(&record, admin_col),
            positive_tests: parse_cell(&record, pos_col),
            wastewater: parse_cell(&record, waste_col),
            hospital_cases: parse_cell(&record, hosp_col),
            deaths: parse_cell(&record, death_col),
        });
    }

    info!("parsed {} daily rows from csv", rows.len());
    Ok(rows)
}

// Sheet exports can carry thousands separators; strip them before parsing.
fn parse_cell(record: &StringRecord, idx: Option<usize>) -> Option<f64> {
    let raw = record.get(idx?)?.trim();
    if raw.is_empty() {
        return None;
    }
    raw.replace(',', "").parse::<f64>().ok()
}
