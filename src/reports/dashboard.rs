//! Household dashboard
//!
//! Runs the stress scorer, goal feasibility and the allocator over one
//! snapshot and collects the results into a single report for the terminal
//! and for export.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::{self, Write};

use crate::config::Settings;
use crate::display::{
    double_separator, format_bar, format_currency, format_goal_table, format_percentage,
    separator, truncate,
};
use crate::engine::allocation::{FOOD, HOUSING, SUBSCRIPTIONS, TRANSPORT, UTILITIES};
use crate::engine::{
    allocate, evaluate_all, score, Allocation, BucketKind, GoalFeasibility, OptimizedSavings,
    StressAssessment,
};
use crate::models::{FinancialSnapshot, Goal, HouseholdProfile, SubsidySummary};

const WIDTH: usize = 64;
const LABEL_WIDTH: usize = 20;

/// Everything the dashboard shows, computed from one snapshot
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardReport {
    pub generated_at: DateTime<Utc>,
    pub currency: String,
    pub snapshot: FinancialSnapshot,
    pub stress: StressAssessment,
    pub goals: Vec<GoalFeasibility>,
    pub allocation: Allocation,
    pub subsidies: SubsidySummary,
    pub subsidies_enabled: bool,

    #[serde(skip)]
    goal_details: Vec<Goal>,
    #[serde(skip)]
    bar_width: usize,
    #[serde(skip)]
    optimized: OptimizedSavings,
}

impl DashboardReport {
    /// Generate the report for `profile`
    pub fn generate(profile: &HouseholdProfile, settings: &Settings) -> Self {
        let snapshot = profile.snapshot;
        let subsidies = profile.subsidy_summary();

        let allocation = allocate(
            &snapshot,
            &profile.goals,
            &profile.strategies,
            &profile.optimizations,
            settings.subsidies_enabled,
            subsidies.monthly_total,
        );

        Self {
            generated_at: Utc::now(),
            currency: settings.currency_symbol.clone(),
            snapshot,
            stress: score(&snapshot),
            goals: evaluate_all(&snapshot, &profile.goals),
            allocation,
            subsidies,
            subsidies_enabled: settings.subsidies_enabled,
            goal_details: profile.goals.clone(),
            bar_width: settings.bar_width.max(1),
            optimized: OptimizedSavings::from_optimizations(&profile.optimizations),
        }
    }

    fn money(&self, amount: f64) -> String {
        format_currency(&self.currency, amount)
    }

    /// Raw budget and optimized savings for an expense bucket reduced by
    /// optimizations
    fn optimization_note(&self, kind: &BucketKind) -> Option<(f64, f64)> {
        let s = self.snapshot.clamped();
        let (raw, category) = match kind {
            BucketKind::Housing => (s.rent, HOUSING),
            BucketKind::Transport => (s.transport_cost, TRANSPORT),
            BucketKind::Food => (s.food, FOOD),
            BucketKind::Utilities => (s.utilities, UTILITIES),
            BucketKind::Subscriptions => (s.subscriptions, SUBSCRIPTIONS),
            _ => return None,
        };
        let savings = self.optimized.for_category(category);
        (savings > 0.0 && raw > 0.0).then_some((raw, savings))
    }

    /// Render the dashboard as text
    pub fn format_terminal<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "StressGauge Dashboard")?;
        writeln!(out, "{}", double_separator(WIDTH))?;

        self.write_stress(out)?;
        writeln!(out)?;
        self.write_allocation(out)?;
        writeln!(out)?;
        self.write_goals(out)?;
        writeln!(out)?;
        self.write_subsidies(out)?;

        Ok(())
    }

    fn write_stress<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let stress = &self.stress;
        writeln!(
            out,
            "Stress Score: {:>3} / 100  {}  {}",
            stress.score,
            format_bar(f64::from(stress.score) / 100.0, self.bar_width),
            stress.band
        )?;
        writeln!(out, "{}", separator(WIDTH))?;

        let rows = [
            (
                "Expense pressure",
                stress.sub_scores.expense,
                format!("{} of income", format_percentage(stress.signals.expense_ratio * 100.0)),
            ),
            (
                "Buffer shortfall",
                stress.sub_scores.buffer,
                format!("{:.1} months covered", stress.signals.buffer_months),
            ),
            (
                "Debt load",
                stress.sub_scores.debt,
                format!("{} of income", format_percentage(stress.signals.debt_ratio * 100.0)),
            ),
        ];
        for (label, sub_score, detail) in rows {
            writeln!(
                out,
                "  {:<18} {:>5.1}  {}",
                label, sub_score, detail
            )?;
        }
        Ok(())
    }

    fn write_allocation<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(
            out,
            "Where {} goes each month",
            self.money(self.snapshot.clamped().income)
        )?;
        writeln!(out, "{}", separator(WIDTH))?;

        if self.allocation.buckets.is_empty() {
            writeln!(out, "  Nothing to allocate.")?;
            return Ok(());
        }

        for (i, bucket) in self.allocation.buckets.iter().enumerate() {
            let share = self.allocation.share(i);
            writeln!(
                out,
                "  {:<label$} {:>14}  {}  {:>4}",
                truncate(&bucket.label, LABEL_WIDTH),
                self.money(bucket.amount),
                format_bar(share, self.bar_width),
                format_percentage(share * 100.0),
                label = LABEL_WIDTH
            )?;
            if let Some((raw, savings)) = self.optimization_note(&bucket.kind) {
                writeln!(
                    out,
                    "  {:<label$} {} budget - {} optimized savings",
                    "",
                    self.money(raw),
                    self.money(savings),
                    label = LABEL_WIDTH
                )?;
            }
        }

        if self.allocation.optimized_savings > 0.0 {
            writeln!(
                out,
                "  Optimizations free up {} per month.",
                self.money(self.allocation.optimized_savings)
            )?;
        }
        if self.allocation.shortfall > 0.0 {
            writeln!(
                out,
                "  Commitments exceed income by {} per month.",
                self.money(self.allocation.shortfall)
            )?;
        }
        Ok(())
    }

    fn write_goals<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Goals")?;
        writeln!(out, "{}", separator(WIDTH))?;
        writeln!(
            out,
            "{}",
            format_goal_table(&self.goal_details, &self.goals, &self.currency)
        )?;

        for goal in &self.goals {
            writeln!(out, "  {}: {}", goal.name, goal.rationale)?;
        }
        Ok(())
    }

    fn write_subsidies<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let status = if self.subsidies_enabled {
            "shown in allocation"
        } else {
            "hidden from allocation"
        };
        writeln!(
            out,
            "Claimed subsidies: {} worth {} per month ({})",
            self.subsidies.count,
            self.money(self.subsidies.monthly_total),
            status
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{RiskBand, Verdict};
    use crate::models::{ClaimedSubsidy, GoalCategory, LifestyleOptimization, Strategy};

    fn profile() -> HouseholdProfile {
        HouseholdProfile {
            snapshot: FinancialSnapshot {
                income: 4000.0,
                rent: 1200.0,
                utilities: 200.0,
                transport_cost: 300.0,
                food: 500.0,
                debt: 100.0,
                subscriptions: 50.0,
                emergency_savings: 0.0,
                savings: 600.0,
            },
            goals: vec![Goal::new("Car Deposit", 6000.0, 12, GoalCategory::Vehicle)],
            strategies: vec![Strategy::new("Index Fund", 250.0)],
            optimizations: vec![LifestyleOptimization::new("Food", 100.0)],
            claimed_subsidies: vec![ClaimedSubsidy::new("Childcare", 120.0)],
        }
    }

    fn render(report: &DashboardReport) -> String {
        let mut buf = Vec::new();
        report.format_terminal(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_generate_uses_one_snapshot() {
        let report = DashboardReport::generate(&profile(), &Settings::default());

        assert_eq!(report.stress.score, 34);
        assert_eq!(report.stress.band, RiskBand::Moderate);
        assert_eq!(report.goals.len(), 1);
        assert_eq!(report.goals[0].required_monthly, 500.0);
        assert_eq!(report.goals[0].verdict, Verdict::Realistic);
        // 4000 - 3700 committed, plus 100 freed by the food optimization
        assert_eq!(report.allocation.balance_left(), 400.0);
        assert_eq!(report.subsidies.count, 1);
    }

    #[test]
    fn test_subsidy_bucket_follows_setting() {
        let hidden = DashboardReport::generate(&profile(), &Settings::default());
        assert!(hidden.allocation.buckets.iter().all(|b| b.label != "SUBSIDIES"));

        let settings = Settings {
            subsidies_enabled: true,
            ..Settings::default()
        };
        let shown = DashboardReport::generate(&profile(), &settings);
        assert_eq!(shown.allocation.buckets.last().unwrap().label, "SUBSIDIES");
    }

    #[test]
    fn test_format_terminal() {
        let report = DashboardReport::generate(&profile(), &Settings::default());
        let text = render(&report);

        assert!(text.contains("Stress Score:  34 / 100"));
        assert!(text.contains("Moderate Stress"));
        assert!(text.contains("BALANCE LEFT"));
        assert!(text.contains("Car Deposit: Healthy progression. Very achievable."));
        assert!(text.contains("Optimizations free up RM 100.00 per month."));
        assert!(text.contains("RM 500.00 budget - RM 100.00 optimized savings"));
        assert!(!text.contains("RM 300.00 budget"));
        assert!(text.contains("Claimed subsidies: 1 worth RM 120.00 per month"));
        assert!(!text.contains("exceed income"));
    }

    #[test]
    fn test_shortfall_is_reported() {
        let mut profile = profile();
        profile.snapshot.income = 2000.0;
        let report = DashboardReport::generate(&profile, &Settings::default());

        assert!(report.allocation.shortfall > 0.0);
        assert!(render(&report).contains("Commitments exceed income by RM 1,700.00"));
    }

    #[test]
    fn test_json_shape() {
        let report = DashboardReport::generate(&profile(), &Settings::default());
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["stress"]["score"], 34);
        assert_eq!(json["stress"]["category"], "Moderate Stress");
        assert_eq!(json["currency"], "RM");
        assert!(json.get("goalDetails").is_none());
        assert!(json.get("barWidth").is_none());
    }
}
