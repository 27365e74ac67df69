//! Yahoo Finance market data provider.
//!
//! This provider fetches daily OHLCV history for:
//! - Equity indices (e.g. ^GSPC, ^IXIC)
//! - ETFs (e.g. GLD, USO, TLT)
//! - Foreign exchange rates (e.g. EURUSD=X)
//!
//! The `yahoo_finance_api` connector is the primary path; a raw request to
//! the v8 chart API is kept as a backup for transient connector failures.

mod models;

use async_trait::async_trait;
use chrono::DateTime;
use reqwest::header;
use rust_decimal::Decimal;
use tracing::{debug, warn};
use urlencoding::encode;
use yahoo_finance_api as yahoo;

use crate::errors::{FailureKind, MarketDataError};
use crate::models::{OhlcvBar, Timeframe};
use crate::provider::HistoricalDataProvider;

use models::{flatten_chart_result, ChartResponse};

const PROVIDER_ID: &str = "YAHOO";

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Yahoo Finance market data provider.
///
/// Provides daily history for equities, ETFs, indices, and foreign
/// exchange rates through the Yahoo Finance API.
pub struct YahooProvider {
    connector: yahoo::YahooConnector,
    client: reqwest::Client,
}

impl YahooProvider {
    /// Create a new Yahoo Finance provider.
    pub fn new() -> Result<Self, MarketDataError> {
        let connector =
            yahoo::YahooConnector::new().map_err(|e| MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("Failed to initialize Yahoo connector: {}", e),
            })?;

        Ok(Self {
            connector,
            client: reqwest::Client::new(),
        })
    }

    // ========================================================================
    // Bar Conversion
    // ========================================================================

    /// Convert a connector quote to a bar.
    fn bar_from_yahoo_quote(yahoo_quote: yahoo::Quote) -> Result<OhlcvBar, MarketDataError> {
        let date = DateTime::from_timestamp(yahoo_quote.timestamp as i64, 0)
            .ok_or_else(|| MarketDataError::MalformedResponse {
                message: format!("Invalid timestamp: {}", yahoo_quote.timestamp),
            })?
            .date_naive();

        let open = Decimal::from_f64_retain(yahoo_quote.open);
        let high = Decimal::from_f64_retain(yahoo_quote.high);
        let low = Decimal::from_f64_retain(yahoo_quote.low);
        let close = Decimal::from_f64_retain(yahoo_quote.close);

        let (Some(open), Some(high), Some(low), Some(close)) = (open, high, low, close) else {
            return Err(MarketDataError::MalformedResponse {
                message: format!("Unrepresentable price in bar at {}", date),
            });
        };

        Ok(OhlcvBar {
            date,
            open,
            high,
            low,
            close,
            volume: yahoo_quote.volume,
        })
    }

    // ========================================================================
    // History Fetching
    // ========================================================================

    /// Fetch history using the primary method (library API).
    async fn fetch_history_primary(
        &self,
        symbol: &str,
        timeframe: Timeframe,
    ) -> Result<Vec<OhlcvBar>, MarketDataError> {
        let response = self
            .connector
            .get_quote_range(symbol, "1d", timeframe.period_code())
            .await
            .map_err(|e| match e {
                yahoo::YahooError::NoQuotes | yahoo::YahooError::NoResult => {
                    MarketDataError::SymbolNotFound(symbol.to_string())
                }
                yahoo::YahooError::FetchFailed(message) => MarketDataError::ProviderUnavailable {
                    provider: PROVIDER_ID.to_string(),
                    message,
                },
                other => MarketDataError::ProviderError {
                    provider: PROVIDER_ID.to_string(),
                    message: other.to_string(),
                },
            })?;

        let yahoo_quotes = response.quotes().map_err(|e| match e {
            yahoo::YahooError::NoQuotes | yahoo::YahooError::NoResult => {
                MarketDataError::NoDataForPeriod
            }
            other => MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: other.to_string(),
            },
        })?;

        let bars: Vec<OhlcvBar> = yahoo_quotes
            .into_iter()
            .filter_map(|q| match Self::bar_from_yahoo_quote(q) {
                Ok(bar) => Some(bar),
                Err(e) => {
                    warn!("Skipping bar for {} due to conversion error: {:?}", symbol, e);
                    None
                }
            })
            .collect();

        if bars.is_empty() {
            return Err(MarketDataError::NoDataForPeriod);
        }

        Ok(bars)
    }

    /// Fetch history using the backup method (raw chart API).
    async fn fetch_history_backup(
        &self,
        symbol: &str,
        timeframe: Timeframe,
    ) -> Result<Vec<OhlcvBar>, MarketDataError> {
        let url = format!(
            "https://query1.finance.yahoo.com/v8/finance/chart/{}?range={}&interval=1d",
            encode(symbol),
            timeframe.period_code()
        );

        let response = self
            .client
            .get(&url)
            .header(header::USER_AGENT, USER_AGENT)
            .send()
            .await
            .map_err(|e| MarketDataError::ProviderUnavailable {
                provider: PROVIDER_ID.to_string(),
                message: format!("Chart request failed: {}", e),
            })?;

        let data: ChartResponse =
            response
                .json()
                .await
                .map_err(|e| MarketDataError::MalformedResponse {
                    message: format!("Failed to parse chart response: {}", e),
                })?;

        if let Some(error) = data.chart.error {
            return Err(MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: error
                    .description
                    .or(error.code)
                    .unwrap_or_else(|| "unknown chart error".to_string()),
            });
        }

        let result = data
            .chart
            .result
            .and_then(|mut results| {
                if results.is_empty() {
                    None
                } else {
                    Some(results.remove(0))
                }
            })
            .ok_or_else(|| MarketDataError::SymbolNotFound(symbol.to_string()))?;

        let bars = flatten_chart_result(&result)?;
        if bars.is_empty() {
            return Err(MarketDataError::NoDataForPeriod);
        }

        Ok(bars)
    }
}

#[async_trait]
impl HistoricalDataProvider for YahooProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn get_history(
        &self,
        symbol: &str,
        timeframe: Timeframe,
    ) -> Result<Vec<OhlcvBar>, MarketDataError> {
        debug!(
            "Fetching {} history for {} from Yahoo",
            timeframe.period_code(),
            symbol
        );

        // Try primary method first
        match self.fetch_history_primary(symbol, timeframe).await {
            Ok(bars) => Ok(bars),
            Err(e) if e.failure_kind() == FailureKind::Transient => {
                debug!(
                    "Primary history fetch failed for {}: {}, trying chart API",
                    symbol, e
                );
                self.fetch_history_backup(symbol, timeframe).await
            }
            Err(e) => Err(e),
        }
    }
}
