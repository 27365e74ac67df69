//! Market data provider trait definitions.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{OhlcvBar, Timeframe};

/// Trait for historical market data sources.
///
/// Implement this trait to add support for a new data provider. The
/// history service treats the provider as unreliable: it may return empty
/// results, malformed shapes, or fail outright, and every such outcome
/// degrades to an empty series downstream rather than a hard failure.
#[async_trait]
pub trait HistoricalDataProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// Should be a constant string like "YAHOO". Used for logging and
    /// diagnostic messages.
    fn id(&self) -> &'static str;

    /// Fetch daily bars for `symbol` over the trailing period selected by
    /// `timeframe`.
    ///
    /// # Returns
    ///
    /// The bars for the period, or a `MarketDataError` on failure. Bars
    /// should be ordered by date ascending; the series constructor enforces
    /// ordering regardless.
    async fn get_history(
        &self,
        symbol: &str,
        timeframe: Timeframe,
    ) -> Result<Vec<OhlcvBar>, MarketDataError>;
}
