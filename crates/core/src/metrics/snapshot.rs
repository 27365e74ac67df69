//! Latest-bar snapshot computation.

use rust_decimal::Decimal;

use findash_market_data::OhlcvSeries;

use super::metrics_model::QuoteSnapshot;

/// Summarize the latest bar of a series against the previous one.
///
/// Returns `None` on an empty series. With a single bar the previous close
/// is the latest close itself, so change and percent change are zero. A
/// zero previous close also yields a zero percent change.
pub fn latest_snapshot(series: &OhlcvSeries) -> Option<QuoteSnapshot> {
    let latest = series.last()?;

    let bars = series.bars();
    let previous_close = if bars.len() > 1 {
        bars[bars.len() - 2].close
    } else {
        latest.close
    };

    let change = latest.close - previous_close;
    let percent_change = if previous_close.is_zero() {
        Decimal::ZERO
    } else {
        change / previous_close * Decimal::ONE_HUNDRED
    };

    Some(QuoteSnapshot {
        latest_close: latest.close,
        change,
        percent_change,
        volume: latest.volume,
    })
}
