pub mod dashboard;

pub use dashboard::{DashboardService, LocalDashboardConfig, LocalDashboardService};
