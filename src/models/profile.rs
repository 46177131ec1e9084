//! Household profile
//!
//! Everything the orchestration layer holds between runs: the snapshot and
//! the goal, strategy, optimization and subsidy lists. The engine receives
//! borrowed views of these and never keeps them.

use serde::{Deserialize, Serialize};

use super::goal::Goal;
use super::ids::GoalId;
use super::optimization::LifestyleOptimization;
use super::snapshot::FinancialSnapshot;
use super::strategy::Strategy;
use super::subsidy::{ClaimedSubsidy, SubsidySummary};

/// The persisted state of one household
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HouseholdProfile {
    pub snapshot: FinancialSnapshot,
    pub goals: Vec<Goal>,
    pub strategies: Vec<Strategy>,
    pub optimizations: Vec<LifestyleOptimization>,
    pub claimed_subsidies: Vec<ClaimedSubsidy>,
}

impl HouseholdProfile {
    /// Look up a goal by id
    pub fn goal(&self, id: GoalId) -> Option<&Goal> {
        self.goals.iter().find(|g| g.id == id)
    }

    /// Count and sum of claimed subsidies
    pub fn subsidy_summary(&self) -> SubsidySummary {
        SubsidySummary::from_claimed(&self.claimed_subsidies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GoalCategory;

    #[test]
    fn test_empty_profile_from_empty_json() {
        let profile: HouseholdProfile = serde_json::from_str("{}").unwrap();
        assert_eq!(profile, HouseholdProfile::default());
    }

    #[test]
    fn test_goal_lookup() {
        let goal = Goal::new("Emergency Fund", 6000.0, 12, GoalCategory::Emergency);
        let id = goal.id;
        let profile = HouseholdProfile {
            goals: vec![goal],
            ..Default::default()
        };
        assert_eq!(profile.goal(id).map(|g| g.name.as_str()), Some("Emergency Fund"));
        assert!(profile.goal(GoalId::new()).is_none());
    }
}
