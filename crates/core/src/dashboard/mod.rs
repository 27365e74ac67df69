//! Dashboard data assembly.

mod dashboard_model;
mod dashboard_service;

pub use dashboard_model::{AssetPanel, ConnectivityReport, MarketOverview};
pub use dashboard_service::DashboardService;
