use std::time::Duration;

use log::{error, info};
use serde::de::DeserializeOwned;
use thiserror::Error;
use ureq::Agent;

use crate::extract::{parse_daily_csv, ExtractError};
use crate::models::DailyRecord;
use crate::types::{MetricsDataset, PhasesDataset, TimeSeriesDataset, WavesDataset};

/// Google sheet backing the week-to-week trends table.
pub const SHEET_ID: &str = "1M7BfyPuwHQiavFtH59sgI9lJ7HjBpjXdBB-5BWv15K4";

// Pre-computed JSON extracts published alongside the dashboard.
pub const METRICS_PATH: &str = "data/json/oc/metrics.json";
pub const PHASES_PATH: &str = "data/json/oc/phases.json";
pub const WAVES_PATH: &str = "data/json/oc/waves.json";
pub const TIME_SERIES_PATH: &str = "data/json/oc/time-series.json";

pub fn sheet_csv_url(sheet_id: &str) -> String {
    format!("https://docs.google.com/spreadsheets/d/{sheet_id}/gviz/tq?tqx=out:csv&sheet=Data")
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("transport error fetching {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: Box<ureq::Error>,
    },
    #[error("error reading response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: std::io::Error,
    },
    #[error("error decoding {url} at {path}: {source}")]
    Decode {
        url: String,
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Extract(#[from] ExtractError),
}

/// Blocking client for the dashboard's two data sources: the spreadsheet
/// CSV and the published JSON extracts. One fetch per page load; a failure
/// is logged and surfaced, never retried.
pub struct DashboardClient {
    agent: Agent,
    base_url: String,
}

impl DashboardClient {
    pub fn new(base_url: &str) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(10))
            .build();
        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Raw CSV body from an absolute URL.
    pub fn fetch_csv(&self, url: &str) -> Result<String, FetchError> {
        info!("Fetching data from {url}");
        let body = self.get_body(url)?;
        Ok(body)
    }

    /// Fetch and parse the trends sheet in one go.
    pub fn fetch_daily_records(&self) -> Result<Vec<DailyRecord>, FetchError> {
        let url = sheet_csv_url(SHEET_ID);
        let body = self.fetch_csv(&url)?;
        Ok(parse_daily_csv(&body)?)
    }

    pub fn fetch_metrics(&self) -> Result<MetricsDataset, FetchError> {
        self.fetch_json(METRICS_PATH)
    }

    pub fn fetch_phases(&self) -> Result<PhasesDataset, FetchError> {
        self.fetch_json(PHASES_PATH)
    }

    pub fn fetch_waves(&self) -> Result<WavesDataset, FetchError> {
        self.fetch_json(WAVES_PATH)
    }

    pub fn fetch_time_series(&self) -> Result<TimeSeriesDataset, FetchError> {
        self.fetch_json(TIME_SERIES_PATH)
    }

    fn fetch_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let url = format!("{}/{path}", self.base_url);
        info!("Fetching data from {url}");
        let body = self.get_body(&url)?;
        decode_dataset(&url, &body)
    }

    fn get_body(&self, url: &str) -> Result<String, FetchError> {
        let resp = self.agent.get(url).call().map_err(|err| {
            error!("fetch failed for {url}: {err}");
            FetchError::Transport {
                url: url.to_string(),
                source: Box::new(err),
            }
        })?;
        resp.into_string().map_err(|err| FetchError::Body {
            url: url.to_string(),
            source: err,
        })
    }
}

/// Decode a dataset document, reporting the exact failing JSON path when
/// the schema does not line up.
pub fn decode_dataset<T: DeserializeOwned>(url: &str, body: &str) -> Result<T, FetchError> {
    let mut de = serde_json::Deserializer::from_str(body);
    serde_path_to_error::deserialize(&mut de).map_err(|err| {
        let path = err.path().to_string();
        let source = err.into_inner();
        error!("error decoding {url} at {path}: {source}");
        FetchError::Decode {
            url: url.to_string(),
            path,
            source,
        }
    })
}
