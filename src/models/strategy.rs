//! Discretionary allocation strategies
//!
//! A strategy is a recurring monthly amount the household has committed to
//! outside of goals, such as an investment plan.

use serde::{Deserialize, Serialize};

use super::snapshot::non_negative;

/// An active discretionary allocation drawn from income
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Strategy {
    pub label: String,
    #[serde(default)]
    pub monthly_amount: f64,
}

impl Strategy {
    pub fn new(label: impl Into<String>, monthly_amount: f64) -> Self {
        Self {
            label: label.into(),
            monthly_amount,
        }
    }

    /// Monthly amount clamped to `>= 0`
    pub fn monthly(&self) -> f64 {
        non_negative(self.monthly_amount)
    }

    /// Case-insensitive label match
    pub fn matches_label(&self, label: &str) -> bool {
        self.label.trim().eq_ignore_ascii_case(label.trim())
    }
}

/// Sum of all strategy contributions
pub fn strategy_total(strategies: &[Strategy]) -> f64 {
    strategies.iter().map(Strategy::monthly).sum()
}
