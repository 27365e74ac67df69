//! Data model types for the market data crate.

mod bar;
mod timeframe;

pub use bar::{OhlcvBar, OhlcvSeries};
pub use timeframe::Timeframe;
