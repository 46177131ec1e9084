//! CLI commands for scoring, allocation and the dashboard

use std::io;

use crate::config::Settings;
use crate::display::{format_bucket_table, format_currency};
use crate::engine::{allocate, score};
use crate::error::{GaugeError, GaugeResult};
use crate::reports::DashboardReport;
use crate::storage::Storage;

/// Print the stress score for the stored snapshot
pub fn handle_score_command(storage: &Storage, json: bool) -> GaugeResult<()> {
    let snapshot = storage.profile.get()?.snapshot;
    let assessment = score(&snapshot);

    if json {
        println!("{}", serde_json::to_string_pretty(&assessment)?);
        return Ok(());
    }

    println!("Stress score: {} ({})", assessment.score, assessment.band);
    println!(
        "  Expense pressure {:>5.1}  (weight 55%)",
        assessment.sub_scores.expense
    );
    println!(
        "  Buffer shortfall {:>5.1}  (weight 25%)",
        assessment.sub_scores.buffer
    );
    println!(
        "  Debt load        {:>5.1}  (weight 20%)",
        assessment.sub_scores.debt
    );
    Ok(())
}

/// Print the allocation breakdown for the stored profile
pub fn handle_allocate_command(storage: &Storage, settings: &Settings) -> GaugeResult<()> {
    let profile = storage.profile.get_validated()?;
    let allocation = allocate(
        &profile.snapshot,
        &profile.goals,
        &profile.strategies,
        &profile.optimizations,
        settings.subsidies_enabled,
        profile.subsidy_summary().monthly_total,
    );

    println!("{}", format_bucket_table(&allocation, &settings.currency_symbol));
    if allocation.shortfall > 0.0 {
        println!(
            "Commitments exceed income by {} per month.",
            format_currency(&settings.currency_symbol, allocation.shortfall)
        );
    }
    Ok(())
}

/// Print the full dashboard
pub fn handle_dashboard_command(storage: &Storage, settings: &Settings) -> GaugeResult<()> {
    let report = DashboardReport::generate(&storage.profile.get_validated()?, settings);
    let stdout = io::stdout();
    report
        .format_terminal(&mut stdout.lock())
        .map_err(|e| GaugeError::Io(e.to_string()))
}

/// Print the most recent audit entries, oldest first
pub fn handle_audit_command(storage: &Storage, limit: usize) -> GaugeResult<()> {
    let entries = storage.audit().read_recent(limit)?;
    if entries.is_empty() {
        println!("No changes recorded yet.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }
    Ok(())
}
