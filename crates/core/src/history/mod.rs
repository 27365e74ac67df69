//! Fail-soft historical data fetching.

mod history_model;
mod history_service;

pub use history_model::{FetchWarning, HistoryFetch};
pub use history_service::HistoryService;
