//! Goal feasibility
//!
//! Judges each goal's monthly requirement against the income left after fixed
//! commitments, taking every other goal's requirement into account.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{FinancialSnapshot, Goal, GoalId};

/// Share of safe income above which a single goal is dangerous
pub const DANGER_SHARE: f64 = 0.5;
/// Share of safe income above which a goal needs strict discipline
pub const CHALLENGING_SHARE: f64 = 0.3;

/// Feasibility verdict for one goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    Realistic,
    Challenging,
    Unrealistic,
    Danger,
}

impl Verdict {
    /// Fixed explanation shown next to the verdict
    pub fn rationale(&self) -> &'static str {
        match self {
            Self::Danger => "Highly aggressive. Uses over 50% of your free income.",
            Self::Unrealistic => "Requires more free income than possible.",
            Self::Challenging => "Requires strict discipline.",
            Self::Realistic => "Healthy progression. Very achievable.",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Realistic => "Realistic",
            Self::Challenging => "Challenging",
            Self::Unrealistic => "Unrealistic",
            Self::Danger => "Danger",
        };
        write!(f, "{}", label)
    }
}

/// Feasibility of one goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalFeasibility {
    pub goal_id: GoalId,
    pub name: String,
    pub required_monthly: f64,
    /// Headroom left for this goal once every other goal is honored
    pub margin: f64,
    pub verdict: Verdict,
    pub rationale: String,
}

/// Sum of monthly requirements across goals
pub fn required_total(goals: &[Goal]) -> f64 {
    goals.iter().map(Goal::required_monthly).sum()
}

/// Classify a requirement. First match wins: Danger, Unrealistic,
/// Challenging, Realistic.
fn classify(required: f64, safe_available: f64, margin: f64) -> Verdict {
    if required > safe_available * DANGER_SHARE {
        Verdict::Danger
    } else if margin < 0.0 {
        Verdict::Unrealistic
    } else if required > safe_available * CHALLENGING_SHARE {
        Verdict::Challenging
    } else {
        Verdict::Realistic
    }
}

/// Evaluate `goal` against the snapshot and the full goal list
///
/// `all_goals` is expected to contain `goal` itself; its own requirement is
/// added back into the margin so it is not subtracted twice.
pub fn evaluate(goal: &Goal, snapshot: &FinancialSnapshot, all_goals: &[Goal]) -> GoalFeasibility {
    let safe_available = snapshot.clamped().safe_available();
    evaluate_with_total(goal, safe_available, required_total(all_goals))
}

/// Evaluate every goal in `goals`, in order
pub fn evaluate_all(snapshot: &FinancialSnapshot, goals: &[Goal]) -> Vec<GoalFeasibility> {
    let safe_available = snapshot.clamped().safe_available();
    let total = required_total(goals);
    goals
        .iter()
        .map(|goal| evaluate_with_total(goal, safe_available, total))
        .collect()
}

fn evaluate_with_total(goal: &Goal, safe_available: f64, required_total: f64) -> GoalFeasibility {
    let required = goal.required_monthly();
    let margin = safe_available - required_total + required;
    let verdict = classify(required, safe_available, margin);

    GoalFeasibility {
        goal_id: goal.id,
        name: goal.name.clone(),
        required_monthly: required,
        margin,
        verdict,
        rationale: verdict.rationale().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GoalCategory;

    fn snapshot(income: f64, rent: f64, subscriptions: f64) -> FinancialSnapshot {
        FinancialSnapshot {
            income,
            rent,
            subscriptions,
            ..Default::default()
        }
    }

    fn goal(name: &str, target: f64, months: u32) -> Goal {
        Goal::new(name, target, months, GoalCategory::General)
    }

    #[test]
    fn test_single_goal_over_half_is_danger() {
        let s = snapshot(5000.0, 1500.0, 0.0);
        let g = goal("Deposit", 1800.0 * 10.0, 10);
        let result = evaluate(&g, &s, std::slice::from_ref(&g));
        assert_eq!(result.required_monthly, 1800.0);
        assert_eq!(result.verdict, Verdict::Danger);
        assert_eq!(
            result.rationale,
            "Highly aggressive. Uses over 50% of your free income."
        );
    }

    #[test]
    fn test_danger_wins_over_unrealistic() {
        let s = snapshot(5000.0, 1500.0, 0.0);
        let big = goal("Deposit", 1800.0, 1);
        let other = goal("Boat", 4000.0, 1);
        let goals = vec![big.clone(), other];
        let result = evaluate(&big, &s, &goals);
        assert!(result.margin < 0.0);
        assert_eq!(result.verdict, Verdict::Danger);
    }

    #[test]
    fn test_unrealistic_when_others_consume_income() {
        // safe available 3500; this goal needs 1000 (< 50%), others 4000
        let s = snapshot(5000.0, 1500.0, 0.0);
        let this = goal("Holiday", 1000.0, 1);
        let goals = vec![this.clone(), goal("Car", 2000.0, 1), goal("House", 2000.0, 1)];
        let result = evaluate(&this, &s, &goals);
        assert_eq!(result.margin, -500.0);
        assert_eq!(result.verdict, Verdict::Unrealistic);
    }

    #[test]
    fn test_challenging_and_realistic() {
        let s = snapshot(5000.0, 1400.0, 100.0);
        let challenging = goal("Car", 1200.0, 1);
        let result = evaluate(&challenging, &s, std::slice::from_ref(&challenging));
        assert_eq!(result.verdict, Verdict::Challenging);

        let realistic = goal("Laptop", 1000.0, 1);
        let result = evaluate(&realistic, &s, std::slice::from_ref(&realistic));
        assert_eq!(result.verdict, Verdict::Realistic);
    }

    #[test]
    fn test_boundaries_are_strict() {
        // Exactly 50% and exactly 30% do not trigger the stricter verdict
        let s = snapshot(1000.0, 0.0, 0.0);
        let half = goal("Half", 500.0, 1);
        assert_eq!(
            evaluate(&half, &s, std::slice::from_ref(&half)).verdict,
            Verdict::Challenging
        );
        let third = goal("Third", 300.0, 1);
        assert_eq!(
            evaluate(&third, &s, std::slice::from_ref(&third)).verdict,
            Verdict::Realistic
        );
    }

    #[test]
    fn test_no_free_income_is_danger() {
        let s = snapshot(1000.0, 1200.0, 0.0);
        let g = goal("Anything", 10.0, 10);
        assert_eq!(evaluate(&g, &s, std::slice::from_ref(&g)).verdict, Verdict::Danger);
    }

    #[test]
    fn test_evaluate_all_preserves_order() {
        let s = snapshot(5000.0, 1500.0, 0.0);
        let goals = vec![goal("A", 600.0, 6), goal("B", 24000.0, 12)];
        let results = evaluate_all(&s, &goals);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].name, "A");
        assert_eq!(results[0].verdict, Verdict::Realistic);
        assert_eq!(results[1].name, "B");
        assert_eq!(results[1].verdict, Verdict::Danger);
        assert_eq!(results[0], evaluate(&goals[0], &s, &goals));
    }
}
