//! Normalized cross-asset performance comparison.

use rust_decimal::Decimal;

use findash_market_data::OhlcvSeries;

use super::metrics_model::{
    AssetPerformance, NormalizedComparison, NormalizedPoint, NormalizedSeries,
};

/// Rescale each asset's closes so the first bar equals 100 and compute its
/// whole-period performance.
///
/// Assets with no bars are silently excluded from both the series list and
/// the summary; partial data never fails the batch. A zero first close
/// yields zero values rather than a division fault.
pub fn normalized_comparison(assets: &[(&str, &OhlcvSeries)]) -> NormalizedComparison {
    let mut comparison = NormalizedComparison::default();

    for (name, series) in assets {
        let Some(first) = series.first() else {
            continue;
        };
        let first_close = first.close;

        let points = series
            .bars()
            .iter()
            .map(|bar| NormalizedPoint {
                date: bar.date,
                value: rebase(bar.close, first_close),
            })
            .collect();

        comparison.series.push(NormalizedSeries {
            name: (*name).to_string(),
            points,
        });

        let last = series.last().unwrap_or(first);
        let percent_change = if first_close.is_zero() {
            Decimal::ZERO
        } else {
            (last.close - first_close) / first_close * Decimal::ONE_HUNDRED
        };

        comparison.summary.push(AssetPerformance {
            name: (*name).to_string(),
            percent_change,
        });
    }

    comparison
}

/// One close rescaled against the series's first close, starting at 100.
fn rebase(close: Decimal, first_close: Decimal) -> Decimal {
    if first_close.is_zero() {
        Decimal::ZERO
    } else {
        close / first_close * Decimal::ONE_HUNDRED
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use findash_market_data::OhlcvBar;
    use rust_decimal_macros::dec;

    fn series(closes: &[Decimal]) -> OhlcvSeries {
        OhlcvSeries::from_bars(
            closes
                .iter()
                .enumerate()
                .map(|(i, close)| OhlcvBar {
                    date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()
                        + chrono::Days::new(i as u64),
                    open: *close,
                    high: *close,
                    low: *close,
                    close: *close,
                    volume: 1_000,
                })
                .collect(),
        )
    }

    #[test]
    fn test_first_value_is_exactly_one_hundred() {
        let gold = series(&[dec!(180.55), dec!(182.10), dec!(179.95)]);
        let comparison = normalized_comparison(&[("Gold ETF", &gold)]);

        assert_eq!(comparison.series[0].points[0].value, dec!(100));
    }

    #[test]
    fn test_two_asset_batch() {
        let a = series(&[dec!(100), dec!(110), dec!(121)]);
        let b = series(&[dec!(50), dec!(45)]);

        let comparison = normalized_comparison(&[("A", &a), ("B", &b)]);

        let a_values: Vec<Decimal> = comparison.series[0]
            .points
            .iter()
            .map(|p| p.value)
            .collect();
        assert_eq!(a_values, vec![dec!(100), dec!(110), dec!(121)]);

        let b_values: Vec<Decimal> = comparison.series[1]
            .points
            .iter()
            .map(|p| p.value)
            .collect();
        assert_eq!(b_values, vec![dec!(100), dec!(90)]);

        assert_eq!(comparison.summary[0].percent_change, dec!(21));
        assert_eq!(comparison.summary[0].formatted(), "+21.0%");
        assert_eq!(comparison.summary[1].percent_change, dec!(-10));
        assert_eq!(comparison.summary[1].formatted(), "-10.0%");
    }

    #[test]
    fn test_empty_assets_are_excluded_not_fatal() {
        let a = series(&[dec!(100), dec!(110)]);
        let empty = OhlcvSeries::new();

        let comparison = normalized_comparison(&[("A", &a), ("Missing", &empty)]);

        assert_eq!(comparison.series.len(), 1);
        assert_eq!(comparison.summary.len(), 1);
        assert_eq!(comparison.series[0].name, "A");
    }

    #[test]
    fn test_single_bar_asset_is_flat() {
        let single = series(&[dec!(42)]);
        let comparison = normalized_comparison(&[("Single", &single)]);

        assert_eq!(comparison.series[0].points[0].value, dec!(100));
        assert_eq!(comparison.summary[0].percent_change, Decimal::ZERO);
        assert_eq!(comparison.summary[0].formatted(), "+0.0%");
    }

    #[test]
    fn test_zero_first_close_is_guarded() {
        let degenerate = series(&[dec!(0), dec!(10)]);
        let comparison = normalized_comparison(&[("Degenerate", &degenerate)]);

        assert_eq!(comparison.series[0].points[1].value, Decimal::ZERO);
        assert_eq!(comparison.summary[0].percent_change, Decimal::ZERO);
    }

    #[test]
    fn test_empty_batch_yields_empty_comparison() {
        let comparison = normalized_comparison(&[]);
        assert!(comparison.series.is_empty());
        assert!(comparison.summary.is_empty());
    }
}
