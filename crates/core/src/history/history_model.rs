use serde::Serialize;

use findash_market_data::OhlcvSeries;

/// Non-fatal diagnostic from a failed or empty fetch.
///
/// The fetch failure taxonomy (provider unavailable, unknown ticker,
/// malformed response) collapses into the message text; callers display it
/// and move on.
#[derive(Clone, Debug, Serialize)]
pub struct FetchWarning {
    pub symbol: String,
    pub message: String,
}

/// Outcome of a history fetch.
///
/// Never an error: a failed fetch carries an empty series and a warning,
/// and downstream consumers treat the empty series as a "no data" state.
#[derive(Clone, Debug, Serialize)]
pub struct HistoryFetch {
    pub symbol: String,
    pub series: OhlcvSeries,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<FetchWarning>,
    /// True when the series was served from the cache.
    pub from_cache: bool,
}

impl HistoryFetch {
    pub(crate) fn cached(symbol: &str, series: OhlcvSeries) -> Self {
        Self {
            symbol: symbol.to_string(),
            series,
            warning: None,
            from_cache: true,
        }
    }

    pub(crate) fn fetched(symbol: &str, series: OhlcvSeries) -> Self {
        Self {
            symbol: symbol.to_string(),
            series,
            warning: None,
            from_cache: false,
        }
    }

    pub(crate) fn empty(symbol: &str, message: String) -> Self {
        Self {
            symbol: symbol.to_string(),
            series: OhlcvSeries::new(),
            warning: Some(FetchWarning {
                symbol: symbol.to_string(),
                message,
            }),
            from_cache: false,
        }
    }

    /// Whether the fetch produced any bars.
    pub fn has_data(&self) -> bool {
        !self.series.is_empty()
    }
}
