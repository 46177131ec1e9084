//! Core data models for StressGauge
//!
//! This module contains the data structures the scoring and allocation engine
//! reads: the monthly snapshot, savings goals, strategies, lifestyle
//! optimizations and claimed subsidies.

pub mod goal;
pub mod ids;
pub mod optimization;
pub mod profile;
pub mod snapshot;
pub mod strategy;
pub mod subsidy;

pub use goal::{Goal, GoalCategory, GoalValidationError};
pub use ids::GoalId;
pub use optimization::{normalize_category, LifestyleOptimization};
pub use profile::HouseholdProfile;
pub use snapshot::FinancialSnapshot;
pub use strategy::{strategy_total, Strategy};
pub use subsidy::{ClaimedSubsidy, SubsidySummary};
