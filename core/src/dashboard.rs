use crate::classify::{classify_level, classify_trend, ordinal_suffix};
use crate::models::{AvgCell, WeeklyBucket};
use crate::trends::present;
use crate::types::{MetricsDataset, TrendMetric};

const DATE_OUT_F: &str = "%Y-%m-%d";

/// Caption shown when a fetch fails; the page stays interactive.
pub const ERROR_CAPTION: &str = "Sorry. There was an error fetching the data.";

pub fn loading_caption(url: &str) -> String {
    format!("Loading data from {url}")
}

/// Number for a table cell. `None` and NaN render as "n/a"; an explicit
/// zero is a real number here, unlike deltas.
pub fn fmt_num(value: Option<f64>, precision: usize) -> String {
    match value {
        Some(v) if !v.is_nan() => format!("{v:.precision$}"),
        _ => "n/a".to_string(),
    }
}

pub fn fmt_pct(value: Option<f64>) -> String {
    match value {
        Some(v) if !v.is_nan() => format!("{v:.1}%"),
        _ => "n/a".to_string(),
    }
}

/// Signed percent for deltas. The zero-as-missing policy applies, so a
/// zero delta reads as "n/a" rather than "+0.0%".
pub fn fmt_signed_pct(value: Option<f64>) -> String {
    match value {
        Some(v) if present(value) => {
            let sign = if v > 0.0 { "+" } else { "" };
            format!("{sign}{v:.1}%")
        }
        _ => "n/a".to_string(),
    }
}

/// Parenthesized delta, the form the table's delta spans use.
pub fn pct_wrap(value: Option<f64>) -> String {
    format!("({})", fmt_signed_pct(value))
}

/// Styling class for a single delta cell: a sign-only read, distinct from
/// the thresholded `classify_trend`.
pub fn delta_trend_class(delta: Option<f64>) -> &'static str {
    match delta {
        Some(v) if v.is_nan() => "nan",
        Some(v) if v > 0.0 => "rising",
        Some(v) if v < 0.0 => "falling",
        Some(_) => "flat",
        None => "nan",
    }
}

/// Row label for week `idx` (0 = most recent).
pub fn week_label(idx: usize) -> String {
    if idx == 0 {
        "Last Week*".to_string()
    } else {
        format!("{} Weeks Ago", idx + 1)
    }
}

/// One rendered table cell: display value, wrapped delta, styling class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellView {
    pub value: String,
    pub delta: String,
    pub trend_class: &'static str,
}

/// One row of the week-to-week trends table, display-ready.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekRow {
    pub label: String,
    pub start_date: String,
    pub end_date: String,
    pub test_positive_rate: CellView,
    pub admin_tests: CellView,
    pub positive_tests: CellView,
    pub wastewater: CellView,
    pub hospital_cases: CellView,
    pub deaths: CellView,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendsView {
    pub rows: Vec<WeekRow>,
}

fn avg_cell_view(cell: &AvgCell) -> CellView {
    CellView {
        value: fmt_num(cell.average_7d, 1),
        delta: pct_wrap(cell.delta),
        trend_class: delta_trend_class(cell.delta),
    }
}

/// Build the immutable trends view from weekly buckets. Callers hold the
/// returned value; nothing here is shared or mutated afterwards.
pub fn build_trends_view(buckets: &[WeeklyBucket]) -> TrendsView {
    let rows = buckets
        .iter()
        .enumerate()
        .map(|(idx, bucket)| WeekRow {
            label: week_label(idx),
            start_date: bucket.start_date.format(DATE_OUT_F).to_string(),
            end_date: bucket.end_date.format(DATE_OUT_F).to_string(),
            test_positive_rate: CellView {
                value: fmt_pct(bucket.test_positive_rate.value),
                delta: pct_wrap(bucket.test_positive_rate.delta),
                trend_class: delta_trend_class(bucket.test_positive_rate.delta),
            },
            admin_tests: avg_cell_view(&bucket.admin_tests),
            positive_tests: avg_cell_view(&bucket.positive_tests),
            wastewater: avg_cell_view(&bucket.wastewater),
            hospital_cases: avg_cell_view(&bucket.hospital_cases),
            deaths: CellView {
                value: fmt_num(bucket.deaths.total, 0),
                delta: pct_wrap(bucket.deaths.delta),
                trend_class: delta_trend_class(bucket.deaths.delta),
            },
        })
        .collect();

    TrendsView { rows }
}

/// One row of the metrics table, display-ready.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricRow {
    pub updated_on: String,
    pub latest: String,
    pub level: String,
    pub level_class: String,
    /// e.g. "63rd percentile"
    pub level_note: String,
    pub trend: &'static str,
    pub delta_7d_value: String,
    pub delta_7d_note: String,
    pub delta_14d_value: String,
    pub delta_14d_note: String,
}

/// The metrics table view, one row per dashboard metric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsView {
    pub cases: MetricRow,
    pub positive_rate: MetricRow,
    pub wastewater: MetricRow,
    pub hospital_cases: MetricRow,
    pub icu_cases: MetricRow,
    pub deaths: MetricRow,
}

fn from_note(value: Option<f64>, postfix: &str) -> String {
    match value {
        Some(v) if !v.is_nan() => format!("from {v:.1}{postfix}"),
        _ => "n/a".to_string(),
    }
}

pub fn build_metric_row(metric: &TrendMetric, postfix: &str) -> MetricRow {
    let (level, level_class, level_note) = match metric.percentile {
        Some(pct) => {
            let level = classify_level(pct);
            let rounded = pct.round() as i64;
            (
                level.as_str().to_string(),
                level.css_class().to_string(),
                format!("{rounded}{} percentile", ordinal_suffix(rounded)),
            )
        }
        None => ("n/a".to_string(), "nan".to_string(), "n/a".to_string()),
    };

    MetricRow {
        updated_on: metric
            .updated_on
            .map(|d| d.format(DATE_OUT_F).to_string())
            .unwrap_or_else(|| "n/a".to_string()),
        latest: match metric.latest {
            Some(v) if !v.is_nan() => format!("{v:.1}{postfix}"),
            _ => "n/a".to_string(),
        },
        level,
        level_class,
        level_note,
        trend: classify_trend(metric.d7_delta_pct, metric.d14_delta_pct).as_str(),
        delta_7d_value: fmt_signed_pct(metric.d7_delta_pct),
        delta_7d_note: from_note(metric.d7_value, postfix),
        delta_14d_value: fmt_signed_pct(metric.d14_delta_pct),
        delta_14d_note: from_note(metric.d14_value, postfix),
    }
}

pub fn build_metrics_view(dataset: &MetricsDataset) -> MetricsView {
    MetricsView {
        cases: build_metric_row(&dataset.daily_new_cases, "/day"),
        positive_rate: build_metric_row(&dataset.test_positive_rate, "%"),
        wastewater: build_metric_row(&dataset.wastewater, "/day"),
        hospital_cases: build_metric_row(&dataset.hospital_cases, "/day"),
        icu_cases: build_metric_row(&dataset.icu_cases, "/day"),
        deaths: build_metric_row(&dataset.deaths, "/day"),
    }
}
