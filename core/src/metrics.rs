use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};

use crate::trends::{percent_change, present};
use crate::types::TrendMetric;

/// Date-keyed daily values, the shape the extracts hand over.
pub type DailySeries = BTreeMap<NaiveDate, f64>;

/// 7-day average ending at `from_date`. All seven days must be present; a
/// gap marks the average unavailable rather than averaging fewer days.
pub fn week_avg_from_date(series: &DailySeries, from_date: NaiveDate) -> Option<f64> {
    let mut sum = 0.0;

    for n in 0..7 {
        let dated = from_date - Duration::days(n);
        sum += series.get(&dated)?;
    }

    Some(sum / 7.0)
}

/// Daily test positivity: 7d-avg positive tests over 7d-avg administered
/// tests, as a percentage. Days where either average is unavailable are
/// left out of the result.
pub fn positive_rate_series(
    admin_tests: &DailySeries,
    positive_tests: &DailySeries,
    start_from: NaiveDate,
    days: usize,
) -> DailySeries {
    let mut rates = DailySeries::new();

    for n in 0..days as i64 {
        let dated = start_from - Duration::days(n);
        let avg_admin = week_avg_from_date(admin_tests, dated);
        let avg_pos = week_avg_from_date(positive_tests, dated);

        if let (Some(admin), Some(pos)) = (avg_admin, avg_pos) {
            if admin > 0.0 {
                rates.insert(dated, pos / admin * 100.0);
            }
        }
    }

    rates
}

/// Rank of `value` within its historical distribution, 0-100: the share of
/// history at or below it. Higher means more severe.
pub fn percentile_rank(history: &[f64], value: f64) -> Option<f64> {
    if history.is_empty() {
        return None;
    }
    let at_or_below = history.iter().filter(|v| **v <= value).count();
    Some(at_or_below as f64 / history.len() as f64 * 100.0)
}

/// Most recent date carrying a usable value (zero-as-missing applies).
pub fn latest_update(series: &DailySeries) -> Option<NaiveDate> {
    series
        .iter()
        .rev()
        .find(|(_, v)| present(Some(**v)))
        .map(|(dated, _)| *dated)
}

/// Assemble the trend metric for one daily series: the latest value, its
/// percentile within the full series, and the 7/14-day lookbacks with
/// percent changes. `None` when the series has no usable value at all;
/// short history leaves the lookback fields unset.
pub fn build_trend_metric(series: &DailySeries) -> Option<TrendMetric> {
    let updated_on = latest_update(series)?;
    let latest = series.get(&updated_on).copied();
    let history: Vec<f64> = series.values().copied().collect();

    let d7_value = series.get(&(updated_on - Duration::days(7))).copied();
    let d14_value = series.get(&(updated_on - Duration::days(14))).copied();

    Some(TrendMetric {
        updated_on: Some(updated_on),
        latest,
        percentile: latest.and_then(|v| percentile_rank(&history, v)),
        d7_value,
        d7_delta_pct: percent_change(d7_value, latest),
        d14_value,
        d14_delta_pct: percent_change(d14_value, latest),
    })
}
