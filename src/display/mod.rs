//! Display formatting for terminal output
//!
//! Currency and percentage formatting, bars, and `tabled` tables for goals,
//! buckets and the other profile lists.

pub mod format;
pub mod tables;

pub use format::{
    double_separator, format_bar, format_currency, format_percentage, separator, truncate,
};
pub use tables::{
    format_bucket_table, format_goal_table, format_optimization_table, format_snapshot_table,
    format_strategy_table, format_subsidy_table,
};
