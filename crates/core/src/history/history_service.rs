//! History service coordinating the cache and the provider.

use std::sync::Arc;

use dashmap::DashMap;
use futures::future::join_all;
use log::{debug, warn};
use tokio::sync::Mutex;

use findash_market_data::{
    FailureKind, HistoricalDataProvider, MarketDataError, OhlcvSeries, Timeframe,
};

use crate::cache::{HistoryCache, HistoryCacheKey};

use super::history_model::HistoryFetch;

/// Cached, fail-soft access to historical market data.
///
/// Each (symbol, timeframe) pair reaches the provider at most once per TTL
/// window regardless of how many panels request it; concurrent misses for
/// the same pair coalesce into a single upstream call. No failure
/// propagates to the caller: a failed fetch yields an empty series plus a
/// warning.
pub struct HistoryService {
    provider: Arc<dyn HistoricalDataProvider>,
    cache: Arc<HistoryCache>,
    in_flight: DashMap<HistoryCacheKey, Arc<Mutex<()>>>,
}

impl HistoryService {
    /// Create a service with a fresh default cache.
    pub fn new(provider: Arc<dyn HistoricalDataProvider>) -> Self {
        Self::with_cache(provider, Arc::new(HistoryCache::new()))
    }

    /// Create a service with an injected cache.
    pub fn with_cache(provider: Arc<dyn HistoricalDataProvider>, cache: Arc<HistoryCache>) -> Self {
        Self {
            provider,
            cache,
            in_flight: DashMap::new(),
        }
    }

    /// Fetch history for one symbol over the selected timeframe.
    pub async fn get_history(&self, symbol: &str, timeframe: Timeframe) -> HistoryFetch {
        let key = HistoryCacheKey::new(symbol, timeframe);

        if let Some(series) = self.cache.get(&key).await {
            debug!("History cache hit for {} {}", symbol, timeframe);
            return HistoryFetch::cached(symbol, series);
        }

        // Coalesce concurrent misses for the same key into one upstream call.
        let gate = self
            .in_flight
            .entry(key.clone())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        let guard = gate.lock().await;

        // The winner of the race has populated the cache by the time a
        // coalesced waiter acquires the gate.
        if let Some(series) = self.cache.get(&key).await {
            debug!("History cache hit for {} {} after coalescing", symbol, timeframe);
            drop(guard);
            self.in_flight.remove(&key);
            return HistoryFetch::cached(symbol, series);
        }

        let fetch = match self.fetch_from_provider(symbol, timeframe).await {
            Ok(series) if !series.is_empty() => {
                self.cache.insert(key.clone(), series.clone()).await;
                HistoryFetch::fetched(symbol, series)
            }
            Ok(_) => {
                let message = format!("No data found for ticker: {}", symbol);
                warn!("{}", message);
                HistoryFetch::empty(symbol, message)
            }
            Err(e) => {
                let message = format!("Error fetching data for {}: {}", symbol, e);
                warn!("{}", message);
                HistoryFetch::empty(symbol, message)
            }
        };

        drop(guard);
        self.in_flight.remove(&key);

        fetch
    }

    /// Fetch several symbols concurrently, preserving input order.
    ///
    /// Per-symbol failures degrade to empty entries; one bad ticker never
    /// affects the rest of the batch.
    pub async fn get_history_batch(
        &self,
        symbols: &[&str],
        timeframe: Timeframe,
    ) -> Vec<HistoryFetch> {
        join_all(
            symbols
                .iter()
                .map(|symbol| self.get_history(symbol, timeframe)),
        )
        .await
    }

    /// Clear every cached series. The next fetch for any key goes upstream.
    pub fn refresh(&self) {
        debug!(
            "Clearing history cache ({} entries)",
            self.cache.entry_count()
        );
        self.cache.clear_all();
    }

    /// One provider call, with a single retry for transient failures.
    async fn fetch_from_provider(
        &self,
        symbol: &str,
        timeframe: Timeframe,
    ) -> Result<OhlcvSeries, MarketDataError> {
        let bars = match self.provider.get_history(symbol, timeframe).await {
            Err(e) if e.failure_kind() == FailureKind::Transient => {
                debug!(
                    "Transient failure for {} from {}: {}; retrying once",
                    symbol,
                    self.provider.id(),
                    e
                );
                self.provider.get_history(symbol, timeframe).await?
            }
            other => other?,
        };

        Ok(OhlcvSeries::from_bars(bars))
    }
}
