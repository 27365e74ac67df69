//! In-memory history cache with TTL using moka

use std::time::Duration;

use moka::future::Cache;

use findash_market_data::{OhlcvSeries, Timeframe};

use crate::constants::{HISTORY_CACHE_MAX_CAPACITY, HISTORY_CACHE_TTL_SECS};

/// Cache key: one entry per (symbol, timeframe) pair.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct HistoryCacheKey {
    pub symbol: String,
    pub timeframe: Timeframe,
}

impl HistoryCacheKey {
    pub fn new(symbol: impl Into<String>, timeframe: Timeframe) -> Self {
        Self {
            symbol: symbol.into(),
            timeframe,
        }
    }
}

/// In-memory history cache with a fixed TTL.
///
/// Entries expire a fixed interval after insertion and behave as absent on
/// lookup once expired. An insert replaces any prior entry wholesale with a
/// fresh expiry; entries are never mutated in place.
pub struct HistoryCache {
    series: Cache<HistoryCacheKey, OhlcvSeries>,
}

impl HistoryCache {
    /// Create a cache with the default TTL and capacity.
    pub fn new() -> Self {
        Self::with_ttl(Duration::from_secs(HISTORY_CACHE_TTL_SECS))
    }

    /// Create a cache with a custom TTL.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            series: Cache::builder()
                .time_to_live(ttl)
                .max_capacity(HISTORY_CACHE_MAX_CAPACITY)
                .build(),
        }
    }

    /// Get a cached series.
    pub async fn get(&self, key: &HistoryCacheKey) -> Option<OhlcvSeries> {
        self.series.get(key).await
    }

    /// Store a series, replacing any prior entry.
    pub async fn insert(&self, key: HistoryCacheKey, series: OhlcvSeries) {
        self.series.insert(key, series).await;
    }

    /// Drop every entry. Used by the manual refresh.
    pub fn clear_all(&self) {
        self.series.invalidate_all();
    }

    /// Approximate number of live entries.
    pub fn entry_count(&self) -> u64 {
        self.series.entry_count()
    }
}

impl Default for HistoryCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use findash_market_data::OhlcvBar;
    use rust_decimal_macros::dec;

    fn series(close: rust_decimal::Decimal) -> OhlcvSeries {
        OhlcvSeries::from_bars(vec![OhlcvBar {
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            open: close,
            high: close,
            low: close,
            close,
            volume: 1_000,
        }])
    }

    #[tokio::test]
    async fn test_cache_insert_get() {
        let cache = HistoryCache::new();
        let key = HistoryCacheKey::new("^GSPC", Timeframe::ThreeMonths);

        cache.insert(key.clone(), series(dec!(5000))).await;

        let retrieved = cache.get(&key).await;
        assert!(retrieved.is_some());
        assert_eq!(retrieved.unwrap().last().unwrap().close, dec!(5000));
    }

    #[tokio::test]
    async fn test_cache_miss() {
        let cache = HistoryCache::new();
        let key = HistoryCacheKey::new("NONEXISTENT", Timeframe::OneYear);

        assert!(cache.get(&key).await.is_none());
    }

    #[tokio::test]
    async fn test_separate_entries_per_timeframe() {
        let cache = HistoryCache::new();

        cache
            .insert(
                HistoryCacheKey::new("^GSPC", Timeframe::OneMonth),
                series(dec!(5000)),
            )
            .await;

        // Same symbol, different timeframe: distinct entry.
        let other = HistoryCacheKey::new("^GSPC", Timeframe::TwoYears);
        assert!(cache.get(&other).await.is_none());
    }

    #[tokio::test]
    async fn test_insert_replaces_entry() {
        let cache = HistoryCache::new();
        let key = HistoryCacheKey::new("GLD", Timeframe::ThreeMonths);

        cache.insert(key.clone(), series(dec!(180))).await;
        cache.insert(key.clone(), series(dec!(185))).await;

        let retrieved = cache.get(&key).await.unwrap();
        assert_eq!(retrieved.last().unwrap().close, dec!(185));
    }

    #[tokio::test]
    async fn test_clear_all() {
        let cache = HistoryCache::new();
        let key = HistoryCacheKey::new("^GSPC", Timeframe::ThreeMonths);

        cache.insert(key.clone(), series(dec!(5000))).await;
        cache.clear_all();

        assert!(cache.get(&key).await.is_none());
    }

    #[tokio::test]
    async fn test_entries_expire_after_ttl() {
        let cache = HistoryCache::with_ttl(Duration::from_millis(50));
        let key = HistoryCacheKey::new("^GSPC", Timeframe::ThreeMonths);

        cache.insert(key.clone(), series(dec!(5000))).await;
        tokio::time::sleep(Duration::from_millis(200)).await;

        assert!(cache.get(&key).await.is_none());
    }
}
