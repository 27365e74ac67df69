//! Findash Core
//!
//! Application services behind the findash market dashboard. The
//! presentation layer is an external consumer: everything here returns
//! plain data structures with no rendering concerns.
//!
//! - [`history`]: cached, fail-soft access to historical market data
//! - [`cache`]: the TTL cache behind the history service
//! - [`metrics`]: latest-bar snapshots and normalized comparisons
//! - [`assets`]: the fixed ticker catalog the dashboard panels iterate
//! - [`dashboard`]: chart-ready panel assembly for the host application

pub mod assets;
pub mod cache;
pub mod constants;
pub mod dashboard;
pub mod history;
pub mod metrics;

pub use cache::{HistoryCache, HistoryCacheKey};
pub use dashboard::{AssetPanel, ConnectivityReport, DashboardService, MarketOverview};
pub use history::{FetchWarning, HistoryFetch, HistoryService};
pub use metrics::{
    latest_snapshot, normalized_comparison, AssetPerformance, NormalizedComparison,
    NormalizedPoint, NormalizedSeries, QuoteSnapshot,
};
