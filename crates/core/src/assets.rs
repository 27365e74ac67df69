//! Fixed asset catalog the dashboard panels iterate.
//!
//! Each entry is `(ticker, display name)`. The sets are closed: the
//! dashboard has no symbol search or user-defined watchlists.

/// Broad asset classes compared in the market overview
pub const OVERVIEW_ASSETS: &[(&str, &str)] = &[
    ("^GSPC", "S&P 500"),
    ("DX-Y.NYB", "US Dollar Index"),
    ("GLD", "Gold ETF"),
    ("USO", "Oil ETF"),
    ("TLT", "20+ Year Treasury"),
];

/// Major US stock indices
pub const US_INDICES: &[(&str, &str)] = &[
    ("^GSPC", "S&P 500"),
    ("^IXIC", "NASDAQ Composite"),
    ("^DJI", "Dow Jones Industrial"),
    ("^RUT", "Russell 2000"),
];

/// Major USD currency pairs
pub const CURRENCY_PAIRS: &[(&str, &str)] = &[
    ("EURUSD=X", "EUR/USD"),
    ("GBPUSD=X", "GBP/USD"),
    ("USDJPY=X", "USD/JPY"),
    ("USDCHF=X", "USD/CHF"),
    ("USDCAD=X", "USD/CAD"),
    ("AUDUSD=X", "AUD/USD"),
];
