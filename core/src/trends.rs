use chrono::Duration;

use crate::models::{AvgCell, DailyRecord, DeathCell, RateCell, WeeklyBucket};

/// Max valid rows retained before bucketing: five weeks of dailies.
pub const MAX_TREND_ROWS: usize = 35;

/// Offset between a bucket anchor and its prior-week comparison row.
pub const WEEK_OFFSET: usize = 7;

/// The dashboard's missing-data policy: a metric cell counts as present
/// only when it holds a non-zero, non-NaN number. Zero is deliberately
/// read as "no data" for compatibility with the source sheet, where a
/// true zero baseline is indistinguishable from an unfilled cell.
pub fn present(value: Option<f64>) -> bool {
    matches!(value, Some(v) if v != 0.0 && !v.is_nan())
}

/// Week-over-week percent change. `None` when either side is missing
/// under the zero-as-missing policy, so a zero baseline never divides.
pub fn percent_change(old: Option<f64>, new: Option<f64>) -> Option<f64> {
    if !present(old) || !present(new) {
        return None;
    }
    let (o, n) = (old?, new?);
    Some((n - o) / o * 100.0)
}

/// Validity filter and row cap, split out so bucketing can assume a clean
/// most-recent-first sequence. A row must carry the primary trend metric
/// (positivity rate); rows without a parseable date never get this far.
pub fn filter_trend_rows(rows: &[DailyRecord]) -> Vec<DailyRecord> {
    let mut filtered = Vec::with_capacity(MAX_TREND_ROWS);

    for row in rows {
        if !present(row.positive_rate) {
            continue;
        }
        filtered.push(row.clone());
        if filtered.len() >= MAX_TREND_ROWS {
            break;
        }
    }

    filtered
}

/// Weekly death total over the 7 daily rows starting at `start`. Unlike
/// the delta policy, an explicit 0 counts toward the sum; an absent cell
/// or short span marks the whole week unavailable rather than summing a
/// partial week.
fn week_death_total(rows: &[DailyRecord], start: usize) -> Option<f64> {
    let span = rows.get(start..start + WEEK_OFFSET)?;
    let mut total = 0.0;

    for row in span {
        let deaths = row.deaths?;
        if deaths.is_nan() {
            return None;
        }
        total += deaths;
    }

    Some(total)
}

/// Build `bucket_count` (4 or 5) weekly buckets, most-recent-first, from a
/// filtered most-recent-first daily sequence. Anchors sit at offsets 0, 7,
/// 14, 21, 28; each delta compares the anchor row against the row one week
/// further back. When that history runs out, deltas stay `None` while the
/// current values still populate.
pub fn build_weekly_buckets(rows: &[DailyRecord], bucket_count: usize) -> Vec<WeeklyBucket> {
    let mut buckets = Vec::with_capacity(bucket_count);

    for i in 0..bucket_count {
        let anchor_idx = i * WEEK_OFFSET;
        let anchor = match rows.get(anchor_idx) {
            Some(row) => row,
            None => break,
        };
        let prev = rows.get(anchor_idx + WEEK_OFFSET);
        let total = week_death_total(rows, anchor_idx);
        let prev_total = week_death_total(rows, anchor_idx + WEEK_OFFSET);

        buckets.push(WeeklyBucket {
            start_date: anchor.date - Duration::days(6),
            end_date: anchor.date,
            test_positive_rate: RateCell {
                value: anchor.positive_rate,
                delta: percent_change(prev.and_then(|r| r.positive_rate), anchor.positive_rate),
            },
            admin_tests: AvgCell {
                average_7d: anchor.admin_tests,
                delta: percent_change(prev.and_then(|r| r.admin_tests), anchor.admin_tests),
            },
            positive_tests: AvgCell {
                average_7d: anchor.positive_tests,
                delta: percent_change(prev.and_then(|r| r.positive_tests), anchor.positive_tests),
            },
            wastewater: AvgCell {
                average_7d: anchor.wastewater,
                delta: percent_change(prev.and_then(|r| r.wastewater), anchor.wastewater),
            },
            hospital_cases: AvgCell {
                average_7d: anchor.hospital_cases,
                delta: percent_change(prev.and_then(|r| r.hospital_cases), anchor.hospital_cases),
            },
            deaths: DeathCell {
                total,
                delta: percent_change(prev_total, total),
            },
        });
    }

    buckets
}
