//! Market data providers.
//!
//! This module defines the provider seam ([`HistoricalDataProvider`]) and
//! the Yahoo Finance implementation behind it.

mod traits;
pub mod yahoo;

pub use traits::HistoricalDataProvider;
pub use yahoo::YahooProvider;
