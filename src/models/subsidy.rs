//! Claimed subsidies
//!
//! Subsidy matching happens elsewhere. This crate only records what the
//! household has claimed and consumes the count and the monthly sum.

use serde::{Deserialize, Serialize};

use super::snapshot::non_negative;

/// A subsidy the household has claimed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimedSubsidy {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub monthly_benefit: f64,
}

impl ClaimedSubsidy {
    pub fn new(name: impl Into<String>, monthly_benefit: f64) -> Self {
        Self {
            name: name.into(),
            monthly_benefit,
        }
    }
}

/// Count and monthly total of claimed subsidies
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubsidySummary {
    pub count: usize,
    pub monthly_total: f64,
}

impl SubsidySummary {
    pub fn from_claimed(claimed: &[ClaimedSubsidy]) -> Self {
        Self {
            count: claimed.len(),
            monthly_total: claimed
                .iter()
                .map(|s| non_negative(s.monthly_benefit))
                .sum(),
        }
    }
}
