use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Latest-bar summary for a single asset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSnapshot {
    pub latest_close: Decimal,
    /// Latest close minus previous close; zero when only one bar exists.
    pub change: Decimal,
    /// Change relative to the previous close, in percent; zero when the
    /// previous close is zero.
    pub percent_change: Decimal,
    pub volume: u64,
}

/// One point of a series rescaled to start at 100.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NormalizedPoint {
    pub date: NaiveDate,
    pub value: Decimal,
}

/// A named close series rescaled so its first value equals 100.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NormalizedSeries {
    pub name: String,
    pub points: Vec<NormalizedPoint>,
}

/// Whole-period performance of one asset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AssetPerformance {
    pub name: String,
    pub percent_change: Decimal,
}

impl AssetPerformance {
    /// Render with an explicit sign and one decimal, e.g. `+21.0%`.
    pub fn formatted(&self) -> String {
        if self.percent_change.is_sign_negative() {
            format!("{:.1}%", self.percent_change)
        } else {
            format!("+{:.1}%", self.percent_change)
        }
    }
}

/// Cross-asset comparison: normalized chart series plus a summary table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NormalizedComparison {
    pub series: Vec<NormalizedSeries>,
    pub summary: Vec<AssetPerformance>,
}
