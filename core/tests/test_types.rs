use chrono::NaiveDate;
use octrends_core::fetch::{decode_dataset, FetchError};
use octrends_core::types::{MetricsDataset, PhasesDataset, TimeSeriesDataset, WavesDataset};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

const METRICS_JSON: &str = r#"{
    "testPositiveRate": {
        "updatedOn": "2022-09-28",
        "latest": 4.5,
        "percentile": 63.0,
        "d7Value": 4.1,
        "d7DeltaPct": 9.75,
        "d14Value": 3.9,
        "d14DeltaPct": 15.38
    },
    "dailyNewCases": { "latest": 250.0, "percentile": 41.0 },
    "wastewater": {},
    "hospitalCases": { "latest": 120.0 },
    "icuCases": {},
    "deaths": { "latest": 1.9, "percentile": 22.0 }
}"#;

#[test]
fn metrics_dataset_decodes_camel_case() {
    let dataset: MetricsDataset = decode_dataset("metrics.json", METRICS_JSON).unwrap();

    let rate = &dataset.test_positive_rate;
    assert_eq!(rate.updated_on, Some(date(2022, 9, 28)));
    assert_eq!(rate.latest, Some(4.5));
    assert_eq!(rate.percentile, Some(63.0));
    assert_eq!(rate.d7_delta_pct, Some(9.75));

    // sparse entries leave fields unset rather than failing
    assert_eq!(dataset.wastewater.latest, None);
    assert_eq!(dataset.daily_new_cases.percentile, Some(41.0));
}

#[test]
fn wrong_typed_field_reports_its_path() {
    let body = METRICS_JSON.replace("\"latest\": 4.5", "\"latest\": \"pending\"");
    let err = decode_dataset::<MetricsDataset>("metrics.json", &body).unwrap_err();

    match err {
        FetchError::Decode { path, .. } => {
            assert!(path.contains("testPositiveRate"), "path was {path}");
        }
        other => panic!("expected decode error, got {other:?}"),
    }
}

const PHASES_JSON: &str = r#"{
    "data": [
        {
            "startedOn": "2021-11-12",
            "endedOn": "2022-01-08",
            "trend": "rising",
            "days": 57,
            "peakedOn": "2022-01-08",
            "maxPositiveRate": { "date": "2022-01-08", "value": 22.71 },
            "minPositiveRate": { "date": "2021-11-12", "value": 2.31 },
            "totalCases": 200540.0,
            "totalDeaths": 244.0
        }
    ],
    "meta": {
        "createdAt": "2022-09-28T17:03:12-07:00",
        "lastUpdatedOn": "2022-09-27"
    }
}"#;

#[test]
fn phases_dataset_decodes_with_summary_stats() {
    let dataset: PhasesDataset = decode_dataset("phases.json", PHASES_JSON).unwrap();

    assert_eq!(dataset.data.len(), 1);
    let phase = &dataset.data[0];
    assert_eq!(phase.trend.as_deref(), Some("rising"));
    assert_eq!(phase.days, 57);
    assert_eq!(phase.max_positive_rate.value, 22.71);
    assert_eq!(phase.max_positive_rate.date, date(2022, 1, 8));
    assert_eq!(phase.total_deaths, Some(244.0));
    assert_eq!(dataset.meta.last_updated_on, date(2022, 9, 27));
}

#[test]
fn waves_omit_the_trend_label() {
    let body = PHASES_JSON.replace("\"trend\": \"rising\",", "");
    let dataset: WavesDataset = decode_dataset("waves.json", &body).unwrap();
    assert_eq!(dataset.data[0].trend, None);
}

const TIME_SERIES_JSON: &str = r#"{
    "dates": [
        { "date": "2022-09-26", "positive-rate": 4.6, "cases": 260.0, "hospital-cases": 122.0, "wastewater": 8.4 },
        { "date": "2022-09-27", "positive-rate": 4.5, "cases": null, "hospital-cases": 120.0, "wastewater": null }
    ],
    "max-values": { "positive-rate": 22.71, "cases": 4712.0 }
}"#;

#[test]
fn time_series_exposes_parallel_chart_series() {
    let dataset: TimeSeriesDataset = decode_dataset("time-series.json", TIME_SERIES_JSON).unwrap();

    assert_eq!(dataset.dates(), vec![date(2022, 9, 26), date(2022, 9, 27)]);
    assert_eq!(dataset.positive_rate_series(), vec![Some(4.6), Some(4.5)]);
    assert_eq!(dataset.case_series(), vec![Some(260.0), None]);
    assert_eq!(dataset.wastewater_series(), vec![Some(8.4), None]);
    assert_eq!(dataset.max_value("positive-rate"), Some(22.71));
    assert_eq!(dataset.max_value("icu-cases"), None);
}
