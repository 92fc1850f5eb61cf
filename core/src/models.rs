use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One parsed row of the spreadsheet Data sheet. The sheet publishes rows
/// most-recent-first with 7-day averages already applied to most columns;
/// blank cells come through as `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub positive_rate: Option<f64>,
    pub admin_tests: Option<f64>,
    pub positive_tests: Option<f64>,
    pub wastewater: Option<f64>,
    pub hospital_cases: Option<f64>,
    pub deaths: Option<f64>,
}

/// Positivity rate cell: the anchor-day value plus its week-over-week delta.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RateCell {
    pub value: Option<f64>,
    pub delta: Option<f64>,
}

/// 7-day-average metric cell with week-over-week delta.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvgCell {
    pub average_7d: Option<f64>,
    pub delta: Option<f64>,
}

/// Deaths are cumulative: a summed weekly total rather than an average.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DeathCell {
    pub total: Option<f64>,
    pub delta: Option<f64>,
}

/// One week of the trends table, anchored at `end_date` (the anchor row's
/// date); `start_date` is six days earlier. Deltas compare against the
/// bucket one week further back and stay `None` when that history is
/// missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyBucket {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub test_positive_rate: RateCell,
    pub admin_tests: AvgCell,
    pub positive_tests: AvgCell,
    pub wastewater: AvgCell,
    pub hospital_cases: AvgCell,
    pub deaths: DeathCell,
}
