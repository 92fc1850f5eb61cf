pub mod classify;
pub mod dashboard;
pub mod extract;
pub mod fetch;
pub mod metrics;
pub mod models;
pub mod trends;
pub mod types;

pub use classify::{classify_level, classify_trend, ordinal_suffix, Level, TrendDirection};
pub use dashboard::{build_metrics_view, build_trends_view, MetricsView, TrendsView};
pub use extract::{parse_daily_csv, ExtractError};
pub use fetch::{DashboardClient, FetchError};
pub use metrics::{build_trend_metric, percentile_rank, week_avg_from_date, DailySeries};
pub use models::{DailyRecord, WeeklyBucket};
pub use trends::{build_weekly_buckets, filter_trend_rows, percent_change};
