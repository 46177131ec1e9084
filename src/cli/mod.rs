//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod export;
pub mod goal;
pub mod optimize;
pub mod report;
pub mod snapshot;
pub mod strategy;
pub mod subsidy;

pub use export::{handle_export_command, ExportFormat};
pub use goal::{handle_goal_command, GoalCommands};
pub use optimize::{handle_optimize_command, OptimizeCommands};
pub use report::{
    handle_allocate_command, handle_audit_command, handle_dashboard_command, handle_score_command,
};
pub use snapshot::{handle_snapshot_command, SnapshotCommands};
pub use strategy::{handle_strategy_command, StrategyCommands};
pub use subsidy::{handle_subsidy_command, SubsidyCommands};
