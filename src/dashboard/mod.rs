//! Dashboard module
//!
//! Computes the financial overview returned by the dashboard endpoint:
//! totals, recent transactions, time-windowed record lists and per-label
//! breakdowns.

mod aggregation;
mod dashboard_endpoint;

pub use aggregation::{DashboardData, DashboardSummary};
pub use dashboard_endpoint::get_dashboard_endpoint;
