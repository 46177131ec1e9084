//! Configuration module for StressGauge
//!
//! - Platform path resolution with an environment override
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::GaugePaths;
pub use settings::Settings;
