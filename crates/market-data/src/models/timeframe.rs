use std::fmt;

use serde::{Deserialize, Serialize};

/// Chart timeframe selectable in the dashboard.
///
/// The set is closed: five trailing periods, each with a 1:1 mapping to the
/// provider's period code. The dashboard defaults to three months.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Timeframe {
    /// Trailing month.
    #[serde(rename = "1M")]
    OneMonth,

    /// Trailing three months.
    #[default]
    #[serde(rename = "3M")]
    ThreeMonths,

    /// Trailing six months.
    #[serde(rename = "6M")]
    SixMonths,

    /// Trailing year.
    #[serde(rename = "1Y")]
    OneYear,

    /// Trailing two years.
    #[serde(rename = "2Y")]
    TwoYears,
}

impl Timeframe {
    /// All selectable timeframes, in display order.
    pub const ALL: [Timeframe; 5] = [
        Timeframe::OneMonth,
        Timeframe::ThreeMonths,
        Timeframe::SixMonths,
        Timeframe::OneYear,
        Timeframe::TwoYears,
    ];

    /// The period code the data provider understands.
    pub fn period_code(&self) -> &'static str {
        match self {
            Timeframe::OneMonth => "1mo",
            Timeframe::ThreeMonths => "3mo",
            Timeframe::SixMonths => "6mo",
            Timeframe::OneYear => "1y",
            Timeframe::TwoYears => "2y",
        }
    }

    /// The label shown in the timeframe selector.
    pub fn label(&self) -> &'static str {
        match self {
            Timeframe::OneMonth => "1M",
            Timeframe::ThreeMonths => "3M",
            Timeframe::SixMonths => "6M",
            Timeframe::OneYear => "1Y",
            Timeframe::TwoYears => "2Y",
        }
    }

    /// Parse a selector label.
    ///
    /// Any label outside the fixed five falls back to the three-month
    /// timeframe. This is the documented fallback, not an error.
    pub fn parse(label: &str) -> Timeframe {
        match label {
            "1M" => Timeframe::OneMonth,
            "3M" => Timeframe::ThreeMonths,
            "6M" => Timeframe::SixMonths,
            "1Y" => Timeframe::OneYear,
            "2Y" => Timeframe::TwoYears,
            _ => Timeframe::ThreeMonths,
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
