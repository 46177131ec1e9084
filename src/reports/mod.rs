//! Reports module for StressGauge
//!
//! The dashboard combines the stress score, goal feasibility, the allocation
//! breakdown and the subsidy summary for one snapshot.

pub mod dashboard;

pub use dashboard::DashboardReport;
