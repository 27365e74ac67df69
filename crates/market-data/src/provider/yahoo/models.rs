//! Yahoo Finance v8 chart API response models.
//!
//! The chart endpoint returns OHLCV history as parallel arrays nested under
//! `chart.result[0].indicators.quote[0]`, with an optional adjusted-close
//! block beside them. [`flatten_chart_result`] maps that hierarchical shape
//! onto flat [`OhlcvBar`] rows, rejecting any shape it cannot confidently
//! normalize.

use chrono::DateTime;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::errors::MarketDataError;
use crate::models::OhlcvBar;

/// Main response wrapper for the chart API
#[derive(Debug, Deserialize)]
pub struct ChartResponse {
    pub chart: Chart,
}

/// Chart container with either results or an error
#[derive(Debug, Deserialize)]
pub struct Chart {
    #[serde(default)]
    pub result: Option<Vec<ChartResult>>,
    #[serde(default)]
    pub error: Option<ChartError>,
}

/// Error payload from the chart API
#[derive(Debug, Deserialize)]
pub struct ChartError {
    pub code: Option<String>,
    pub description: Option<String>,
}

/// Individual result from the chart API
#[derive(Debug, Deserialize)]
pub struct ChartResult {
    /// Unix timestamps, one per row. Absent when the period holds no rows.
    #[serde(default)]
    pub timestamp: Option<Vec<i64>>,
    pub indicators: ChartIndicators,
}

/// Indicator blocks holding the per-column arrays
#[derive(Debug, Deserialize)]
pub struct ChartIndicators {
    #[serde(default)]
    pub quote: Vec<ChartQuoteBlock>,
    #[serde(default)]
    pub adjclose: Option<Vec<ChartAdjCloseBlock>>,
}

/// OHLCV columns as parallel arrays. Individual cells are null for
/// sessions without data.
#[derive(Debug, Deserialize)]
pub struct ChartQuoteBlock {
    #[serde(default)]
    pub open: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub high: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub low: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub close: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub volume: Option<Vec<Option<u64>>>,
}

/// Adjusted-close column, present for dividend/split-adjusted responses
#[derive(Debug, Deserialize)]
pub struct ChartAdjCloseBlock {
    #[serde(default)]
    pub adjclose: Option<Vec<Option<f64>>>,
}

/// Extract a column, requiring it to line up with the timestamp array.
fn column<'a, T>(
    values: &'a Option<Vec<Option<T>>>,
    name: &str,
    expected_len: usize,
) -> Result<&'a [Option<T>], MarketDataError> {
    let values = values
        .as_ref()
        .ok_or_else(|| MarketDataError::MalformedResponse {
            message: format!("missing {} column", name),
        })?;

    if values.len() != expected_len {
        return Err(MarketDataError::MalformedResponse {
            message: format!(
                "{} column has {} values for {} timestamps",
                name,
                values.len(),
                expected_len
            ),
        });
    }

    Ok(values)
}

/// Flatten one chart result into dated bars.
///
/// Rows with a null cell in any column are skipped (sessions the provider
/// reports without data). A missing quote block or a column whose length
/// disagrees with the timestamp array is rejected as malformed rather than
/// guessed at. An absent timestamp array is a valid empty result.
pub fn flatten_chart_result(result: &ChartResult) -> Result<Vec<OhlcvBar>, MarketDataError> {
    let timestamps = match &result.timestamp {
        Some(timestamps) if !timestamps.is_empty() => timestamps,
        _ => return Ok(Vec::new()),
    };

    let quote = result
        .indicators
        .quote
        .first()
        .ok_or_else(|| MarketDataError::MalformedResponse {
            message: "missing quote block".to_string(),
        })?;

    let opens = column(&quote.open, "open", timestamps.len())?;
    let highs = column(&quote.high, "high", timestamps.len())?;
    let lows = column(&quote.low, "low", timestamps.len())?;
    let closes = column(&quote.close, "close", timestamps.len())?;
    let volumes = column(&quote.volume, "volume", timestamps.len())?;

    let adjcloses = match result
        .indicators
        .adjclose
        .as_ref()
        .and_then(|blocks| blocks.first())
    {
        Some(block) => Some(column(&block.adjclose, "adjclose", timestamps.len())?),
        None => None,
    };

    let mut bars = Vec::with_capacity(timestamps.len());
    for i in 0..timestamps.len() {
        // Adjusted close wins when the provider supplies one, falling back
        // to the raw close for cells where the adjusted value is null.
        let close_value = adjcloses.and_then(|adjcloses| adjcloses[i]).or(closes[i]);

        let (Some(open), Some(high), Some(low), Some(close), Some(volume)) =
            (opens[i], highs[i], lows[i], close_value, volumes[i])
        else {
            continue;
        };

        let Some(date) = DateTime::from_timestamp(timestamps[i], 0).map(|dt| dt.date_naive())
        else {
            continue;
        };

        let (Some(open), Some(high), Some(low), Some(close)) = (
            Decimal::from_f64_retain(open),
            Decimal::from_f64_retain(high),
            Decimal::from_f64_retain(low),
            Decimal::from_f64_retain(close),
        ) else {
            continue;
        };

        bars.push(OhlcvBar {
            date,
            open,
            high,
            low,
            close,
            volume,
        });
    }

    Ok(bars)
}
