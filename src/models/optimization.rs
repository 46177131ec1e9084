//! Lifestyle optimizations
//!
//! A recorded reduction in one expense category. Optimizations shrink the
//! displayed size of that category's bucket; the freed amount shows up as
//! balance left rather than changing the cash-flow total.

use serde::{Deserialize, Serialize};

use super::snapshot::non_negative;

/// A recorded monthly saving against one expense category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifestyleOptimization {
    /// Free-text category, matched case-insensitively
    pub category: String,
    #[serde(default)]
    pub monthly_savings: f64,
}

impl LifestyleOptimization {
    pub fn new(category: impl Into<String>, monthly_savings: f64) -> Self {
        Self {
            category: category.into(),
            monthly_savings,
        }
    }

    /// Lower-cased, trimmed category with "transportation" folded into "transport"
    pub fn normalized_category(&self) -> String {
        normalize_category(&self.category)
    }

    /// Savings clamped to `>= 0`
    pub fn savings(&self) -> f64 {
        non_negative(self.monthly_savings)
    }
}

/// Normalize a free-text expense category
pub fn normalize_category(category: &str) -> String {
    let cat = category.trim().to_lowercase();
    if cat == "transportation" {
        "transport".to_string()
    } else {
        cat
    }
}
