//! Derived metrics over OHLCV series.
//!
//! Pure, stateless computations: nothing here fetches or caches. Empty
//! series are legitimate inputs and produce empty/absent outputs.

mod metrics_model;
mod normalize;
mod snapshot;

pub use metrics_model::{
    AssetPerformance, NormalizedComparison, NormalizedPoint, NormalizedSeries, QuoteSnapshot,
};
pub use normalize::normalized_comparison;
pub use snapshot::latest_snapshot;
