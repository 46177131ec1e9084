//! Custom error types for StressGauge
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. The scoring engine itself never fails; these
//! errors come from the goal mutation boundary, storage and export layers.

use thiserror::Error;

/// The main error type for StressGauge operations
#[derive(Error, Debug)]
pub enum GaugeError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// A goal that violates the engine's preconditions
    #[error("Invalid goal '{goal}': {reason}")]
    InvalidGoal { goal: String, reason: String },

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl GaugeError {
    /// Create a "not found" error for goals
    pub fn goal_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Goal",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for strategies
    pub fn strategy_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Strategy",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for claimed subsidies
    pub fn subsidy_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Subsidy",
            identifier: identifier.into(),
        }
    }

    /// Create an invalid goal error
    pub fn invalid_goal(goal: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidGoal {
            goal: goal.into(),
            reason: reason.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a duplicate error
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate { .. })
    }

    /// Check if this is an invalid goal error
    pub fn is_invalid_goal(&self) -> bool {
        matches!(self, Self::InvalidGoal { .. })
    }
}

impl From<std::io::Error> for GaugeError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for GaugeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for StressGauge operations
pub type GaugeResult<T> = Result<T, GaugeError>;
