//! StressGauge - household financial stress scoring and goal allocation
//!
//! This library scores a household's monthly finances on a 0-100 stress
//! scale, judges whether its savings goals are realistic, and breaks monthly
//! income down into allocation buckets.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `engine`: The pure scoring, feasibility and allocation functions
//! - `models`: Snapshot, goals, strategies, optimizations and subsidies
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `storage`: JSON file storage layer
//! - `audit`: Audit logging of every profile change
//! - `services`: Validation and mutation of the stored profile
//! - `reports`: The combined dashboard
//! - `display`: Terminal formatting and tables
//! - `export`: JSON, YAML and CSV export
//! - `cli`: Command handlers for the `stressgauge` binary
//!
//! # Example
//!
//! ```rust
//! use stressgauge::engine::{score, RiskBand};
//! use stressgauge::models::FinancialSnapshot;
//!
//! let snapshot = FinancialSnapshot {
//!     income: 4000.0,
//!     rent: 1200.0,
//!     utilities: 200.0,
//!     transport_cost: 300.0,
//!     food: 500.0,
//!     debt: 100.0,
//!     subscriptions: 50.0,
//!     emergency_savings: 0.0,
//!     savings: 600.0,
//! };
//!
//! let assessment = score(&snapshot);
//! assert_eq!(assessment.score, 34);
//! assert_eq!(assessment.band, RiskBand::Moderate);
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{GaugeError, GaugeResult};
