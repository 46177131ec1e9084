//! Scoring and allocation engine
//!
//! Two independent pure components over an immutable snapshot:
//!
//! - [`stress::score`] turns a snapshot into a 0-100 stress score and band.
//! - [`feasibility::evaluate`] and [`allocation::allocate`] judge savings goals
//!   and partition income into buckets.
//!
//! Nothing here performs I/O or keeps state between calls, so the functions
//! can be called concurrently with different inputs.

pub mod allocation;
pub mod feasibility;
pub mod interpolate;
pub mod stress;

pub use allocation::{allocate, Allocation, Bucket, BucketKind, OptimizedSavings};
pub use feasibility::{evaluate, evaluate_all, required_total, GoalFeasibility, Verdict};
pub use interpolate::{lerp, PiecewiseLinear};
pub use stress::{score, RiskBand, StressAssessment, StressSignals, SubScores};

use crate::error::{GaugeError, GaugeResult};
use crate::models::Goal;

/// Check the engine's preconditions on a goal
///
/// Callers normally validate at the mutation boundary; this is the same check
/// for inputs that arrive from elsewhere, such as a hand-edited profile file.
pub fn validate_goal(goal: &Goal) -> GaugeResult<()> {
    goal.validate()
        .map_err(|e| GaugeError::invalid_goal(goal.name.clone(), e.to_string()))
}

/// Validate every goal, failing on the first invalid one
pub fn validate_goals(goals: &[Goal]) -> GaugeResult<()> {
    goals.iter().try_for_each(validate_goal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GoalCategory;

    #[test]
    fn test_validate_goals() {
        let good = Goal::new("Fund", 100.0, 2, GoalCategory::General);
        let mut bad = Goal::new("Broken", 100.0, 2, GoalCategory::General);
        bad.deadline_months = 0;

        assert!(validate_goals(std::slice::from_ref(&good)).is_ok());

        let err = validate_goals(&[good, bad]).unwrap_err();
        assert!(err.is_invalid_goal());
        assert_eq!(
            err.to_string(),
            "Invalid goal 'Broken': deadline must be at least 1 month"
        );
    }
}
