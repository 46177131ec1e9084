//! Savings goal model
//!
//! A goal is a target amount to accumulate within a number of months. Goals
//! are created and edited at the service boundary; the engine only reads them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use super::ids::GoalId;

/// Fixed set of goal categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum GoalCategory {
    #[serde(rename = "Car/Vehicle")]
    Vehicle,
    Emergency,
    House,
    Vacation,
    Education,
    Investment,
    #[default]
    General,
}

impl GoalCategory {
    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Vehicle => "Car/Vehicle",
            Self::Emergency => "Emergency",
            Self::House => "House",
            Self::Vacation => "Vacation",
            Self::Education => "Education",
            Self::Investment => "Investment",
            Self::General => "General",
        }
    }

    /// Parse a category leniently. Unknown or empty input is `General`.
    pub fn parse_lenient(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "car/vehicle" | "car" | "vehicle" => Self::Vehicle,
            "emergency" => Self::Emergency,
            "house" | "home" => Self::House,
            "vacation" | "travel" => Self::Vacation,
            "education" => Self::Education,
            "investment" => Self::Investment,
            _ => Self::General,
        }
    }
}

impl fmt::Display for GoalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl<'de> Deserialize<'de> for GoalCategory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.map(|s| Self::parse_lenient(&s)).unwrap_or_default())
    }
}

/// A savings objective
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: GoalId,
    pub name: String,
    pub target_amount: f64,
    pub deadline_months: u32,
    #[serde(default)]
    pub category: GoalCategory,
    pub created_at: DateTime<Utc>,
}

/// Reasons a goal cannot be accepted
#[derive(Debug, Clone, PartialEq)]
pub enum GoalValidationError {
    EmptyName,
    NameTooLong(usize),
    NonPositiveTarget(f64),
    ZeroDeadline,
}

impl fmt::Display for GoalValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "goal name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "goal name too long ({} chars, max 100)", len)
            }
            Self::NonPositiveTarget(amount) => {
                write!(f, "target amount must be positive (got {})", amount)
            }
            Self::ZeroDeadline => write!(f, "deadline must be at least 1 month"),
        }
    }
}

impl std::error::Error for GoalValidationError {}

impl Goal {
    /// Create a goal with a freshly generated id and creation time
    pub fn new(
        name: impl Into<String>,
        target_amount: f64,
        deadline_months: u32,
        category: GoalCategory,
    ) -> Self {
        Self {
            id: GoalId::new(),
            name: name.into(),
            target_amount,
            deadline_months,
            category,
            created_at: Utc::now(),
        }
    }

    /// Monthly contribution needed to reach the target on time
    ///
    /// A zero deadline contributes nothing rather than dividing by zero;
    /// such goals are rejected by [`Goal::validate`] before storage.
    pub fn required_monthly(&self) -> f64 {
        if self.deadline_months == 0 {
            return 0.0;
        }
        self.target_amount / f64::from(self.deadline_months)
    }

    /// Validate the goal
    pub fn validate(&self) -> Result<(), GoalValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(GoalValidationError::EmptyName);
        }

        let chars = name.chars().count();
        if chars > 100 {
            return Err(GoalValidationError::NameTooLong(chars));
        }

        if !self.target_amount.is_finite() || self.target_amount <= 0.0 {
            return Err(GoalValidationError::NonPositiveTarget(self.target_amount));
        }

        if self.deadline_months == 0 {
            return Err(GoalValidationError::ZeroDeadline);
        }

        Ok(())
    }

    /// Case-insensitive name match
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.trim().to_lowercase() == name.trim().to_lowercase()
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
