//! Income allocation breakdown
//!
//! Partitions monthly income into named buckets: balance left, goals,
//! strategies, general savings, the expense categories and subsidies.
//! Lifestyle optimizations shrink the displayed expense buckets and move the
//! freed amount into balance left; they do not change the cash-flow total.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::feasibility::required_total;
use crate::models::{
    normalize_category, strategy_total, FinancialSnapshot, Goal, GoalId, LifestyleOptimization,
    Strategy,
};

pub const HOUSING: &str = "housing";
pub const TRANSPORT: &str = "transport";
pub const FOOD: &str = "food";
pub const UTILITIES: &str = "utilities";
pub const SUBSCRIPTIONS: &str = "subscriptions";

/// Optimization savings summed per normalized category
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptimizedSavings {
    by_category: BTreeMap<String, f64>,
}

impl OptimizedSavings {
    pub fn from_optimizations(optimizations: &[LifestyleOptimization]) -> Self {
        let mut by_category = BTreeMap::new();
        for opt in optimizations {
            *by_category.entry(opt.normalized_category()).or_insert(0.0) += opt.savings();
        }
        Self { by_category }
    }

    /// Savings recorded against `category` (normalized before lookup)
    pub fn for_category(&self, category: &str) -> f64 {
        self.by_category
            .get(&normalize_category(category))
            .copied()
            .unwrap_or(0.0)
    }

    /// Savings across every category, including ones with no bucket
    pub fn total(&self) -> f64 {
        self.by_category.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_category.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.by_category.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

/// What a bucket represents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "id", rename_all = "snake_case")]
pub enum BucketKind {
    BalanceLeft,
    Goal(GoalId),
    Strategy,
    GeneralSavings,
    Housing,
    Transport,
    Food,
    Utilities,
    Debt,
    Subscriptions,
    Subsidies,
}

/// A named, non-negative share of income
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bucket {
    pub kind: BucketKind,
    pub label: String,
    pub amount: f64,
}

impl Bucket {
    fn new(kind: BucketKind, label: impl Into<String>, amount: f64) -> Self {
        Self {
            kind,
            label: label.into(),
            amount,
        }
    }
}

/// The full allocation breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Allocation {
    /// Buckets in fixed order; zero and negative buckets are omitted
    pub buckets: Vec<Bucket>,
    /// Raw outflow: expenses, savings, goal and strategy contributions
    pub committed_total: f64,
    /// How far the committed total exceeds income, if at all
    pub shortfall: f64,
    /// Sum of all optimization savings moved into balance left
    pub optimized_savings: f64,
}

impl Allocation {
    /// Sum of all bucket amounts
    pub fn total(&self) -> f64 {
        self.buckets.iter().map(|b| b.amount).sum()
    }

    /// Fraction of the bucket sum held by bucket `index`
    pub fn share(&self, index: usize) -> f64 {
        let total = self.total();
        match self.buckets.get(index) {
            Some(bucket) if total > 0.0 => bucket.amount / total,
            _ => 0.0,
        }
    }

    /// Amount of the first bucket of `kind`, zero if it was omitted
    pub fn amount_of(&self, kind: &BucketKind) -> f64 {
        self.buckets
            .iter()
            .find(|b| &b.kind == kind)
            .map(|b| b.amount)
            .unwrap_or(0.0)
    }

    pub fn balance_left(&self) -> f64 {
        self.amount_of(&BucketKind::BalanceLeft)
    }
}

/// Build the allocation breakdown
///
/// Goals are assumed valid (positive deadline); invalid goals are rejected
/// when they are created or edited. `claimed_subsidies_total` only appears
/// when `subsidies_enabled` is set.
pub fn allocate(
    snapshot: &FinancialSnapshot,
    goals: &[Goal],
    strategies: &[Strategy],
    optimizations: &[LifestyleOptimization],
    subsidies_enabled: bool,
    claimed_subsidies_total: f64,
) -> Allocation {
    let s = snapshot.clamped();
    let optimized = OptimizedSavings::from_optimizations(optimizations);

    let displayed = |raw: f64, category: &str| (raw - optimized.for_category(category)).max(0.0);

    let committed_total = s.total_expenses() + s.savings + required_total(goals) + strategy_total(strategies);
    let optimized_total = optimized.total();
    let balance_left = (s.income - committed_total).max(0.0) + optimized_total;

    let mut buckets = Vec::with_capacity(goals.len() + strategies.len() + 9);
    buckets.push(Bucket::new(BucketKind::BalanceLeft, "BALANCE LEFT", balance_left));

    for goal in goals {
        buckets.push(Bucket::new(
            BucketKind::Goal(goal.id),
            goal.name.to_uppercase(),
            goal.required_monthly(),
        ));
    }

    for strategy in strategies {
        buckets.push(Bucket::new(
            BucketKind::Strategy,
            strategy.label.to_uppercase(),
            strategy.monthly(),
        ));
    }

    buckets.extend([
        Bucket::new(BucketKind::GeneralSavings, "GENERAL SAVINGS", s.savings),
        Bucket::new(BucketKind::Housing, "HOUSING", displayed(s.rent, HOUSING)),
        Bucket::new(BucketKind::Transport, "TRANSPORT", displayed(s.transport_cost, TRANSPORT)),
        Bucket::new(BucketKind::Food, "FOOD", displayed(s.food, FOOD)),
        Bucket::new(BucketKind::Utilities, "UTILITIES", displayed(s.utilities, UTILITIES)),
        Bucket::new(BucketKind::Debt, "DEBT", s.debt),
        Bucket::new(
            BucketKind::Subscriptions,
            "SUBSCRIPTIONS",
            displayed(s.subscriptions, SUBSCRIPTIONS),
        ),
    ]);

    if subsidies_enabled {
        buckets.push(Bucket::new(
            BucketKind::Subsidies,
            "SUBSIDIES",
            claimed_subsidies_total.max(0.0),
        ));
    }

    // Also drops NaN amounts
    buckets.retain(|b| b.amount > 0.0);

    Allocation {
        buckets,
        committed_total,
        shortfall: (committed_total - s.income).max(0.0),
        optimized_savings: optimized_total,
    }
}
