use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One daily price bar.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OhlcvBar {
    /// Calendar date of the bar
    pub date: NaiveDate,

    /// Opening price
    pub open: Decimal,

    /// High price
    pub high: Decimal,

    /// Low price
    pub low: Decimal,

    /// Closing price
    pub close: Decimal,

    /// Traded volume
    pub volume: u64,
}

/// A time-ordered series of daily bars.
///
/// Bars are strictly ascending by date with no duplicate dates; the
/// constructor enforces this regardless of provider ordering. An empty
/// series is a legitimate "no data" state, not an error, and downstream
/// consumers are expected to degrade gracefully on it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OhlcvSeries(Vec<OhlcvBar>);

impl OhlcvSeries {
    /// Create an empty series.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Build a series from bars in any order.
    ///
    /// Bars are sorted by date and deduplicated; when two bars share a
    /// date, the later one wins.
    pub fn from_bars(mut bars: Vec<OhlcvBar>) -> Self {
        bars.sort_by_key(|bar| bar.date);

        let mut deduped: Vec<OhlcvBar> = Vec::with_capacity(bars.len());
        for bar in bars {
            match deduped.last_mut() {
                Some(previous) if previous.date == bar.date => *previous = bar,
                _ => deduped.push(bar),
            }
        }

        Self(deduped)
    }

    /// The bars, ascending by date.
    pub fn bars(&self) -> &[OhlcvBar] {
        &self.0
    }

    /// The earliest bar, if any.
    pub fn first(&self) -> Option<&OhlcvBar> {
        self.0.first()
    }

    /// The most recent bar, if any.
    pub fn last(&self) -> Option<&OhlcvBar> {
        self.0.last()
    }

    /// Number of bars.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the series holds no bars.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First and last bar dates, if the series is non-empty.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.first(), self.last()) {
            (Some(first), Some(last)) => Some((first.date, last.date)),
            _ => None,
        }
    }
}
