//! Error types and failure classification for the market data crate.
//!
//! This module provides:
//! - [`MarketDataError`]: The main error enum for all market data operations
//! - [`FailureKind`]: Classification for determining retry behavior

mod failure;

pub use failure::FailureKind;

use thiserror::Error;

/// Errors that can occur while fetching market data.
///
/// Each variant is classified into a [`FailureKind`] via the
/// [`failure_kind`](Self::failure_kind) method, which determines whether the
/// history service attempts one more call before degrading to an empty
/// series.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The requested symbol was not found by the provider.
    /// This is a terminal error - retrying won't help.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// The symbol exists but has no bars for the requested period.
    #[error("No data for period")]
    NoDataForPeriod,

    /// The provider could not be reached (network failure or timeout).
    #[error("Provider unavailable: {provider} - {message}")]
    ProviderUnavailable {
        /// The provider that was unreachable
        provider: String,
        /// Description of the connection failure
        message: String,
    },

    /// The provider returned a shape the flattening step cannot normalize.
    #[error("Malformed response: {message}")]
    MalformedResponse {
        /// Description of the shape violation
        message: String,
    },

    /// A provider-specific error occurred.
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// A network error surfaced by the HTTP client.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl MarketDataError {
    /// Returns the failure classification for this error.
    ///
    /// - [`FailureKind::Terminal`]: Don't retry, the request is fundamentally
    ///   unanswerable (unknown symbol, empty period, unusable shape)
    /// - [`FailureKind::Transient`]: The provider hiccuped; one more attempt
    ///   is worthwhile
    pub fn failure_kind(&self) -> FailureKind {
        match self {
            // Terminal errors - never retry
            Self::SymbolNotFound(_) | Self::NoDataForPeriod | Self::MalformedResponse { .. } => {
                FailureKind::Terminal
            }

            // Transient errors - a second attempt may succeed
            Self::ProviderUnavailable { .. } | Self::ProviderError { .. } | Self::Network(_) => {
                FailureKind::Transient
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_not_found_is_terminal() {
        let error = MarketDataError::SymbolNotFound("INVALIDXYZ".to_string());
        assert_eq!(error.failure_kind(), FailureKind::Terminal);
    }

    #[test]
    fn test_no_data_for_period_is_terminal() {
        let error = MarketDataError::NoDataForPeriod;
        assert_eq!(error.failure_kind(), FailureKind::Terminal);
    }

    #[test]
    fn test_malformed_response_is_terminal() {
        let error = MarketDataError::MalformedResponse {
            message: "column length mismatch".to_string(),
        };
        assert_eq!(error.failure_kind(), FailureKind::Terminal);
    }

    #[test]
    fn test_provider_unavailable_is_transient() {
        let error = MarketDataError::ProviderUnavailable {
            provider: "YAHOO".to_string(),
            message: "connection timed out".to_string(),
        };
        assert_eq!(error.failure_kind(), FailureKind::Transient);
    }

    #[test]
    fn test_provider_error_is_transient() {
        let error = MarketDataError::ProviderError {
            provider: "YAHOO".to_string(),
            message: "Internal server error".to_string(),
        };
        assert_eq!(error.failure_kind(), FailureKind::Transient);
    }

    #[test]
    fn test_error_display() {
        let error = MarketDataError::SymbolNotFound("INVALIDXYZ".to_string());
        assert_eq!(format!("{}", error), "Symbol not found: INVALIDXYZ");

        let error = MarketDataError::ProviderUnavailable {
            provider: "YAHOO".to_string(),
            message: "connection timed out".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "Provider unavailable: YAHOO - connection timed out"
        );

        let error = MarketDataError::MalformedResponse {
            message: "missing quote block".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "Malformed response: missing quote block"
        );
    }
}
