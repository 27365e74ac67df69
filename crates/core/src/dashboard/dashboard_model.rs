use chrono::NaiveDate;
use serde::Serialize;

use findash_market_data::{OhlcvSeries, Timeframe};

use crate::history::FetchWarning;
use crate::metrics::{NormalizedComparison, QuoteSnapshot};

/// Market overview payload: normalized comparison across asset classes.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketOverview {
    pub timeframe: Timeframe,
    pub comparison: NormalizedComparison,
    /// Per-asset fetch warnings. Assets listed here are absent from the
    /// comparison.
    pub warnings: Vec<FetchWarning>,
}

/// One asset panel: the full series for charting plus its latest snapshot.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetPanel {
    pub symbol: String,
    pub name: String,
    pub timeframe: Timeframe,
    /// No snapshot means the "no data" placeholder state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<QuoteSnapshot>,
    pub series: OhlcvSeries,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<FetchWarning>,
}

impl AssetPanel {
    /// Whether the panel has anything to chart.
    pub fn has_data(&self) -> bool {
        !self.series.is_empty()
    }
}

/// Result of the provider connectivity probe.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectivityReport {
    pub symbol: String,
    pub connected: bool,
    pub data_points: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<FetchWarning>,
}
