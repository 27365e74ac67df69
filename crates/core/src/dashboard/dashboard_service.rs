//! Dashboard service assembling chart-ready data for the panels.

use std::sync::Arc;

use futures::future::join_all;
use log::debug;

use findash_market_data::Timeframe;

use crate::assets::{CURRENCY_PAIRS, OVERVIEW_ASSETS, US_INDICES};
use crate::constants::CONNECTIVITY_PROBE_SYMBOL;
use crate::history::HistoryService;
use crate::metrics::{latest_snapshot, normalized_comparison};

use super::dashboard_model::{AssetPanel, ConnectivityReport, MarketOverview};

/// Assembles the data behind each dashboard panel.
///
/// Rendering stays with the host application; every method returns plain
/// data structures. Missing data per asset degrades the affected panel,
/// never the whole view.
pub struct DashboardService {
    history: Arc<HistoryService>,
}

impl DashboardService {
    pub fn new(history: Arc<HistoryService>) -> Self {
        Self { history }
    }

    /// Broad asset class comparison, normalized to 100 at period start.
    pub async fn market_overview(&self, timeframe: Timeframe) -> MarketOverview {
        let symbols: Vec<&str> = OVERVIEW_ASSETS.iter().map(|&(symbol, _)| symbol).collect();
        let fetches = self.history.get_history_batch(&symbols, timeframe).await;

        let mut named = Vec::new();
        let mut warnings = Vec::new();
        for (&(_, name), fetch) in OVERVIEW_ASSETS.iter().zip(&fetches) {
            if let Some(warning) = &fetch.warning {
                warnings.push(warning.clone());
            }
            if !fetch.series.is_empty() {
                named.push((name, &fetch.series));
            }
        }

        MarketOverview {
            timeframe,
            comparison: normalized_comparison(&named),
            warnings,
        }
    }

    /// One asset panel: series plus latest snapshot.
    pub async fn asset_panel(&self, symbol: &str, name: &str, timeframe: Timeframe) -> AssetPanel {
        let fetch = self.history.get_history(symbol, timeframe).await;

        AssetPanel {
            symbol: symbol.to_string(),
            name: name.to_string(),
            timeframe,
            snapshot: latest_snapshot(&fetch.series),
            series: fetch.series,
            warning: fetch.warning,
        }
    }

    /// Panels for the major US indices, in catalog order.
    pub async fn us_index_panels(&self, timeframe: Timeframe) -> Vec<AssetPanel> {
        self.panels_for(US_INDICES, timeframe).await
    }

    /// Panels for the major USD currency pairs, in catalog order.
    pub async fn currency_panels(&self, timeframe: Timeframe) -> Vec<AssetPanel> {
        self.panels_for(CURRENCY_PAIRS, timeframe).await
    }

    async fn panels_for(&self, catalog: &[(&str, &str)], timeframe: Timeframe) -> Vec<AssetPanel> {
        join_all(
            catalog
                .iter()
                .map(|&(symbol, name)| self.asset_panel(symbol, name, timeframe)),
        )
        .await
    }

    /// Probe the provider with the S&P 500 symbol.
    pub async fn connectivity_check(&self, timeframe: Timeframe) -> ConnectivityReport {
        let fetch = self
            .history
            .get_history(CONNECTIVITY_PROBE_SYMBOL, timeframe)
            .await;

        let range = fetch.series.date_range();
        ConnectivityReport {
            symbol: fetch.symbol.clone(),
            connected: !fetch.series.is_empty(),
            data_points: fetch.series.len(),
            start_date: range.map(|(start, _)| start),
            end_date: range.map(|(_, end)| end),
            warning: fetch.warning,
        }
    }

    /// Manual refresh: drop every cached series before anything refetches.
    pub fn refresh(&self) {
        debug!("Manual refresh requested");
        self.history.refresh();
    }
}
