//! Table views of profile data
//!
//! Every table uses the same rounded style with right-aligned amount columns.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use super::format::{format_currency, format_percentage};
use crate::engine::{Allocation, GoalFeasibility};
use crate::models::{ClaimedSubsidy, FinancialSnapshot, Goal, LifestyleOptimization, Strategy};

fn render<T: Tabled>(rows: Vec<T>, amounts_from: usize) -> String {
    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .modify(Columns::new(amounts_from..), Alignment::right());
    table.to_string()
}

#[derive(Tabled)]
struct GoalRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Goal")]
    name: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Verdict")]
    verdict: String,
    #[tabled(rename = "Target")]
    target: String,
    #[tabled(rename = "Months")]
    months: u32,
    #[tabled(rename = "Monthly")]
    monthly: String,
    #[tabled(rename = "Margin")]
    margin: String,
}

/// Goals alongside their feasibility, matched by goal id
pub fn format_goal_table(goals: &[Goal], feasibility: &[GoalFeasibility], currency: &str) -> String {
    if goals.is_empty() {
        return "No goals yet. Add one with `stressgauge goal add`.".to_string();
    }

    let rows = goals
        .iter()
        .map(|goal| {
            let verdict = feasibility.iter().find(|f| f.goal_id == goal.id);
            GoalRow {
                id: goal.id.to_string(),
                name: goal.name.clone(),
                category: goal.category.label().to_string(),
                verdict: verdict.map(|f| f.verdict.to_string()).unwrap_or_default(),
                target: format_currency(currency, goal.target_amount),
                months: goal.deadline_months,
                monthly: format_currency(currency, goal.required_monthly()),
                margin: verdict
                    .map(|f| format_currency(currency, f.margin))
                    .unwrap_or_default(),
            }
        })
        .collect();

    render(rows, 4)
}

#[derive(Tabled)]
struct BucketRow {
    #[tabled(rename = "Bucket")]
    label: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Share")]
    share: String,
}

/// Allocation buckets with their share of the bucket total
pub fn format_bucket_table(allocation: &Allocation, currency: &str) -> String {
    if allocation.buckets.is_empty() {
        return "Nothing to allocate. Set an income with `stressgauge snapshot set income <amount>`."
            .to_string();
    }

    let rows = allocation
        .buckets
        .iter()
        .enumerate()
        .map(|(i, bucket)| BucketRow {
            label: bucket.label.clone(),
            amount: format_currency(currency, bucket.amount),
            share: format_percentage(allocation.share(i) * 100.0),
        })
        .collect();

    render(rows, 1)
}

#[derive(Tabled)]
struct FieldRow {
    #[tabled(rename = "Field")]
    field: &'static str,
    #[tabled(rename = "Amount")]
    amount: String,
}

pub fn format_snapshot_table(snapshot: &FinancialSnapshot, currency: &str) -> String {
    let rows = snapshot
        .fields()
        .into_iter()
        .map(|(field, amount)| FieldRow {
            field,
            amount: format_currency(currency, amount),
        })
        .collect();

    render(rows, 1)
}

#[derive(Tabled)]
struct LabelledAmountRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Monthly")]
    monthly: String,
}

fn labelled_amounts<'s>(
    items: impl Iterator<Item = (&'s str, f64)>,
    empty: &str,
    currency: &str,
) -> String {
    let rows: Vec<_> = items
        .map(|(name, amount)| LabelledAmountRow {
            name: name.to_string(),
            monthly: format_currency(currency, amount),
        })
        .collect();

    if rows.is_empty() {
        empty.to_string()
    } else {
        render(rows, 1)
    }
}

pub fn format_strategy_table(strategies: &[Strategy], currency: &str) -> String {
    labelled_amounts(
        strategies.iter().map(|s| (s.label.as_str(), s.monthly_amount)),
        "No strategies recorded.",
        currency,
    )
}

pub fn format_optimization_table(optimizations: &[LifestyleOptimization], currency: &str) -> String {
    labelled_amounts(
        optimizations
            .iter()
            .map(|o| (o.category.as_str(), o.monthly_savings)),
        "No optimizations recorded.",
        currency,
    )
}

pub fn format_subsidy_table(subsidies: &[ClaimedSubsidy], currency: &str) -> String {
    labelled_amounts(
        subsidies.iter().map(|s| (s.name.as_str(), s.monthly_benefit)),
        "No subsidies claimed.",
        currency,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{allocate, evaluate_all};
    use crate::models::GoalCategory;

    fn snapshot() -> FinancialSnapshot {
        FinancialSnapshot {
            income: 4000.0,
            rent: 1200.0,
            food: 500.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_goal_table_contains_verdict() {
        let goals = vec![Goal::new("Laptop", 3000.0, 10, GoalCategory::General)];
        let feasibility = evaluate_all(&snapshot(), &goals);
        let table = format_goal_table(&goals, &feasibility, "RM");

        assert!(table.contains("Laptop"));
        assert!(table.contains("Realistic"));
        assert!(table.contains("RM 300.00"));
        assert!(table.contains(&goals[0].id.to_string()));
    }

    #[test]
    fn test_bucket_table() {
        let allocation = allocate(&snapshot(), &[], &[], &[], false, 0.0);
        let table = format_bucket_table(&allocation, "RM");

        assert!(table.contains("BALANCE LEFT"));
        assert!(table.contains("RM 2,300.00"));
        assert!(table.contains("HOUSING"));
        assert!(table.contains("30%"));
        assert!(!table.contains("TRANSPORT"));
    }

    #[test]
    fn test_empty_tables() {
        assert!(format_goal_table(&[], &[], "RM").starts_with("No goals"));
        assert!(format_strategy_table(&[], "RM").starts_with("No strategies"));
        assert!(format_subsidy_table(&[], "RM").starts_with("No subsidies"));

        let allocation = allocate(&FinancialSnapshot::default(), &[], &[], &[], false, 0.0);
        assert!(format_bucket_table(&allocation, "RM").starts_with("Nothing to allocate"));
    }

    #[test]
    fn test_snapshot_table_lists_every_field() {
        let table = format_snapshot_table(&snapshot(), "$");
        for (field, _) in snapshot().fields() {
            assert!(table.contains(field));
        }
        assert!(table.contains("$ 4,000.00"));
    }
}
