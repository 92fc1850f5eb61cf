use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One named observation from metrics.json: current value, its percentile
/// within the historical distribution, and the 7/14-day lookbacks with
/// percent changes. Fields stay `None` where history is missing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendMetric {
    pub updated_on: Option<NaiveDate>,
    pub latest: Option<f64>,
    pub percentile: Option<f64>,
    pub d7_value: Option<f64>,
    pub d7_delta_pct: Option<f64>,
    pub d14_value: Option<f64>,
    pub d14_delta_pct: Option<f64>,
}

/// The metrics.json document: one TrendMetric per dashboard row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsDataset {
    pub test_positive_rate: TrendMetric,
    pub daily_new_cases: TrendMetric,
    pub wastewater: TrendMetric,
    pub hospital_cases: TrendMetric,
    pub icu_cases: TrendMetric,
    pub deaths: TrendMetric,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatedValue {
    pub date: NaiveDate,
    pub value: f64,
}

/// A contiguous stretch of consistent trend in the positivity-rate series,
/// as published in phases.json / waves.json. Waves omit the trend label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phase {
    pub started_on: NaiveDate,
    pub ended_on: NaiveDate,
    #[serde(default)]
    pub trend: Option<String>,
    pub days: i64,
    pub peaked_on: NaiveDate,
    pub max_positive_rate: DatedValue,
    pub min_positive_rate: DatedValue,
    #[serde(default)]
    pub total_cases: Option<f64>,
    #[serde(default)]
    pub total_deaths: Option<f64>,
}

/// Waves are phases merged into full rise-and-fall arcs; same shape.
pub type Wave = Phase;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetMeta {
    pub created_at: String,
    pub last_updated_on: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhasesDataset {
    pub data: Vec<Phase>,
    pub meta: DatasetMeta,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WavesDataset {
    pub data: Vec<Wave>,
    pub meta: DatasetMeta,
}

/// One day of the charting time series (time-series.json uses kebab-case).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesRow {
    pub date: NaiveDate,
    #[serde(rename = "positive-rate")]
    pub positive_rate: Option<f64>,
    pub cases: Option<f64>,
    #[serde(rename = "hospital-cases")]
    pub hospital_cases: Option<f64>,
    pub wastewater: Option<f64>,
}

/// The time-series.json document: daily rows plus per-metric maxima used
/// to scale the charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesDataset {
    pub dates: Vec<SeriesRow>,
    #[serde(rename = "max-values")]
    pub max_values: HashMap<String, f64>,
}

impl TimeSeriesDataset {
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.dates.iter().map(|row| row.date).collect()
    }

    pub fn positive_rate_series(&self) -> Vec<Option<f64>> {
        self.dates.iter().map(|row| row.positive_rate).collect()
    }

    pub fn case_series(&self) -> Vec<Option<f64>> {
        self.dates.iter().map(|row| row.cases).collect()
    }

    pub fn hospital_case_series(&self) -> Vec<Option<f64>> {
        self.dates.iter().map(|row| row.hospital_cases).collect()
    }

    pub fn wastewater_series(&self) -> Vec<Option<f64>> {
        self.dates.iter().map(|row| row.wastewater).collect()
    }

    pub fn max_value(&self, metric: &str) -> Option<f64> {
        self.max_values.get(metric).copied()
    }
}
