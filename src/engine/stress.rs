//! Financial stress scoring
//!
//! Blends three piecewise-linear sub-scores (expense ratio, buffer months and
//! debt ratio) into a 0-100 score where higher means more strain. The
//! thresholds, weights and rounding are shared with the analysis service and
//! must not drift.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::interpolate::PiecewiseLinear;
use crate::models::FinancialSnapshot;

/// Expense ratio used when there is no income at all
pub const NO_INCOME_EXPENSE_RATIO: f64 = 999.0;

/// Buffer months assumed when there are no expenses
pub const NO_EXPENSE_BUFFER_MONTHS: f64 = 12.0;

pub const EXPENSE_WEIGHT: f64 = 0.55;
pub const BUFFER_WEIGHT: f64 = 0.25;
pub const DEBT_WEIGHT: f64 = 0.20;

/// Highest score still in the Low band
pub const LOW_BAND_MAX: u8 = 33;
/// Highest score still in the Moderate band
pub const MODERATE_BAND_MAX: u8 = 66;

const EXPENSE_CURVE: PiecewiseLinear = PiecewiseLinear::new(&[
    (0.0, 0.0),
    (0.5, 10.0),
    (0.7, 30.0),
    (0.85, 60.0),
    (1.0, 85.0),
    (1.2, 100.0),
]);

const BUFFER_CURVE: PiecewiseLinear = PiecewiseLinear::new(&[
    (0.0, 100.0),
    (1.0, 70.0),
    (3.0, 35.0),
    (6.0, 10.0),
    (12.0, 0.0),
]);

const DEBT_CURVE: PiecewiseLinear = PiecewiseLinear::new(&[
    (0.0, 0.0),
    (0.1, 10.0),
    (0.2, 35.0),
    (0.35, 70.0),
    (0.5, 100.0),
]);

/// Categorical risk band derived from the score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskBand {
    #[serde(rename = "Low Stress")]
    Low,
    #[serde(rename = "Moderate Stress")]
    Moderate,
    #[serde(rename = "Critical")]
    Critical,
}

impl RiskBand {
    /// 0..=33 Low, 34..=66 Moderate, 67..=100 Critical
    pub fn from_score(score: u8) -> Self {
        if score <= LOW_BAND_MAX {
            Self::Low
        } else if score <= MODERATE_BAND_MAX {
            Self::Moderate
        } else {
            Self::Critical
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low Stress",
            Self::Moderate => "Moderate Stress",
            Self::Critical => "Critical",
        }
    }
}

impl fmt::Display for RiskBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Raw ratios feeding the sub-scores
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StressSignals {
    pub total_expenses: f64,
    pub total_buffer: f64,
    pub expense_ratio: f64,
    pub buffer_months: f64,
    pub debt_ratio: f64,
}

impl StressSignals {
    /// Compute the signals for an already clamped snapshot
    fn from_clamped(s: &FinancialSnapshot) -> Self {
        let total_expenses = s.total_expenses();
        let total_buffer = s.total_buffer();

        let expense_ratio = if s.income > 0.0 {
            total_expenses / s.income
        } else {
            NO_INCOME_EXPENSE_RATIO
        };

        let buffer_months = if total_expenses > 0.0 {
            total_buffer / total_expenses
        } else {
            NO_EXPENSE_BUFFER_MONTHS
        };

        let debt_ratio = if s.income > 0.0 { s.debt / s.income } else { 0.0 };

        Self {
            total_expenses,
            total_buffer,
            expense_ratio,
            buffer_months,
            debt_ratio,
        }
    }
}

/// Unweighted sub-scores, each 0 (no stress) to 100 (maximal)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubScores {
    pub expense: f64,
    pub buffer: f64,
    pub debt: f64,
}

impl SubScores {
    fn from_signals(signals: &StressSignals) -> Self {
        Self {
            expense: EXPENSE_CURVE.eval(signals.expense_ratio).min(100.0),
            buffer: BUFFER_CURVE.eval(signals.buffer_months),
            debt: DEBT_CURVE.eval(signals.debt_ratio).min(100.0),
        }
    }

    /// Weighted blend before rounding
    pub fn weighted(&self) -> f64 {
        EXPENSE_WEIGHT * self.expense + BUFFER_WEIGHT * self.buffer + DEBT_WEIGHT * self.debt
    }
}

/// Result of scoring a snapshot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StressAssessment {
    pub score: u8,
    #[serde(rename = "category")]
    pub band: RiskBand,
    pub sub_scores: SubScores,
    pub signals: StressSignals,
}

/// Score a household snapshot
///
/// Pure and deterministic. Zero income forces the maximal expense sub-score
/// regardless of expenses; zero expenses give the most lenient buffer score.
pub fn score(snapshot: &FinancialSnapshot) -> StressAssessment {
    let clamped = snapshot.clamped();
    let signals = StressSignals::from_clamped(&clamped);
    let sub_scores = SubScores::from_signals(&signals);

    // Non-negative, so f64::round is round-half-up here
    let score = sub_scores.weighted().clamp(0.0, 100.0).round() as u8;

    StressAssessment {
        score,
        band: RiskBand::from_score(score),
        sub_scores,
        signals,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn household() -> FinancialSnapshot {
        FinancialSnapshot {
            income: 4000.0,
            rent: 1200.0,
            utilities: 200.0,
            transport_cost: 300.0,
            food: 500.0,
            debt: 100.0,
            subscriptions: 50.0,
            emergency_savings: 0.0,
            savings: 600.0,
        }
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_reference_household() {
        let result = score(&household());

        assert!(close(result.signals.total_expenses, 2350.0));
        assert!(close(result.signals.expense_ratio, 0.5875));
        assert!(close(result.sub_scores.expense, 18.75));
        assert!((result.sub_scores.buffer - 92.34).abs() < 0.01);
        assert!(close(result.sub_scores.debt, 2.5));
        assert!((result.sub_scores.weighted() - 33.9).abs() < 0.01);
        assert_eq!(result.score, 34);
        assert_eq!(result.band, RiskBand::Moderate);
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(RiskBand::from_score(0), RiskBand::Low);
        assert_eq!(RiskBand::from_score(33), RiskBand::Low);
        assert_eq!(RiskBand::from_score(34), RiskBand::Moderate);
        assert_eq!(RiskBand::from_score(66), RiskBand::Moderate);
        assert_eq!(RiskBand::from_score(67), RiskBand::Critical);
        assert_eq!(RiskBand::from_score(100), RiskBand::Critical);
    }

    #[test]
    fn test_zero_income_maximal_expense_stress() {
        let snapshot = FinancialSnapshot {
            income: 0.0,
            rent: 10.0,
            ..Default::default()
        };
        let result = score(&snapshot);

        assert_eq!(result.signals.expense_ratio, NO_INCOME_EXPENSE_RATIO);
        assert_eq!(result.sub_scores.expense, 100.0);
        assert_eq!(result.sub_scores.buffer, 100.0);
        // Debt ratio is defined as 0 without income
        assert_eq!(result.sub_scores.debt, 0.0);
        assert_eq!(result.score, 80);
        assert_eq!(result.band, RiskBand::Critical);
    }

    #[test]
    fn test_zero_income_ignores_expense_magnitude() {
        let small = score(&FinancialSnapshot {
            rent: 1.0,
            ..Default::default()
        });
        let large = score(&FinancialSnapshot {
            rent: 1_000_000.0,
            ..Default::default()
        });
        assert_eq!(small.sub_scores.expense, large.sub_scores.expense);
        assert_eq!(small.score, large.score);
    }

    #[test]
    fn test_zero_expenses_lenient_buffer() {
        let snapshot = FinancialSnapshot {
            income: 3000.0,
            ..Default::default()
        };
        let result = score(&snapshot);

        assert_eq!(result.signals.buffer_months, NO_EXPENSE_BUFFER_MONTHS);
        assert_eq!(result.sub_scores.buffer, 0.0);
        assert_eq!(result.sub_scores.debt, 0.0);
        assert_eq!(result.score, 0);
        assert_eq!(result.band, RiskBand::Low);
    }

    #[test]
    fn test_extreme_overspend_capped() {
        let snapshot = FinancialSnapshot {
            income: 1000.0,
            rent: 5000.0,
            debt: 2000.0,
            ..Default::default()
        };
        let result = score(&snapshot);
        assert_eq!(result.sub_scores.expense, 100.0);
        assert_eq!(result.sub_scores.debt, 100.0);
        assert_eq!(result.score, 100);
    }

    #[test]
    fn test_negative_inputs_treated_as_zero() {
        let mut snapshot = household();
        snapshot.food = -500.0;
        let mut expected = household();
        expected.food = 0.0;
        assert_eq!(score(&snapshot), score(&expected));
    }

    #[test]
    fn test_idempotent() {
        let snapshot = household();
        assert_eq!(score(&snapshot), score(&snapshot));
    }

    #[test]
    fn test_band_serializes_as_label() {
        let json = serde_json::to_value(score(&household())).unwrap();
        assert_eq!(json["score"], 34);
        assert_eq!(json["category"], "Moderate Stress");
    }

    fn snapshot_strategy() -> impl Strategy<Value = FinancialSnapshot> {
        (
            0u32..20_000,
            0u32..5_000,
            0u32..1_000,
            0u32..1_000,
            0u32..2_000,
            0u32..3_000,
            0u32..500,
            0u32..50_000,
            0u32..50_000,
        )
            .prop_map(
                |(income, rent, utilities, transport, food, debt, subs, emergency, savings)| {
                    FinancialSnapshot {
                        income: income as f64,
                        rent: rent as f64,
                        utilities: utilities as f64,
                        transport_cost: transport as f64,
                        food: food as f64,
                        debt: debt as f64,
                        subscriptions: subs as f64,
                        emergency_savings: emergency as f64,
                        savings: savings as f64,
                    }
                },
            )
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(200))]

        #[test]
        fn prop_score_in_range(snapshot in snapshot_strategy()) {
            let result = score(&snapshot);
            prop_assert!(result.score <= 100);
            prop_assert_eq!(result.band, RiskBand::from_score(result.score));
        }

        #[test]
        fn prop_more_debt_never_lowers_score(snapshot in snapshot_strategy(), extra in 1u32..5_000) {
            let mut worse = snapshot;
            worse.debt += extra as f64;
            prop_assert!(score(&worse).score >= score(&snapshot).score);
        }

        #[test]
        fn prop_more_buffer_never_raises_score(snapshot in snapshot_strategy(), extra in 1u32..50_000) {
            let mut better = snapshot;
            better.emergency_savings += extra as f64;
            prop_assert!(score(&better).score <= score(&snapshot).score);
        }

        #[test]
        fn prop_more_expenses_never_lowers_score(snapshot in snapshot_strategy(), extra in 1u32..5_000) {
            let mut worse = snapshot;
            worse.food += extra as f64;
            prop_assert!(score(&worse).score >= score(&snapshot).score);
        }
    }
}
