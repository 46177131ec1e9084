//! Lifestyle optimization CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_currency, format_optimization_table};
use crate::engine::OptimizedSavings;
use crate::error::GaugeResult;
use crate::services::ProfileService;
use crate::storage::Storage;

/// Optimization subcommands
#[derive(Subcommand, Debug)]
pub enum OptimizeCommands {
    /// Record a monthly saving against an expense category
    Add {
        /// Category: housing, transport, food, utilities, subscriptions
        category: String,
        /// Monthly savings
        savings: f64,
    },
    /// Remove every recorded optimization
    Clear,
    /// List recorded optimizations
    List,
}

/// Handle an optimization command
pub fn handle_optimize_command(
    storage: &Storage,
    settings: &Settings,
    cmd: OptimizeCommands,
) -> GaugeResult<()> {
    let service = ProfileService::new(storage);
    let currency = settings.currency_symbol.as_str();

    match cmd {
        OptimizeCommands::Add { category, savings } => {
            let optimization = service.add_optimization(&category, savings)?;
            println!(
                "Recorded {} per month saved on {}.",
                format_currency(currency, optimization.savings()),
                optimization.category
            );
        }
        OptimizeCommands::Clear => {
            let removed = service.clear_optimizations()?;
            println!("Cleared {} optimization(s).", removed);
        }
        OptimizeCommands::List => {
            let optimizations = service.optimizations()?;
            println!("{}", format_optimization_table(&optimizations, currency));

            let totals = OptimizedSavings::from_optimizations(&optimizations);
            if !totals.is_empty() {
                for (category, amount) in totals.iter() {
                    println!("  {:<14} {}", category, format_currency(currency, amount));
                }
                println!("Total freed: {} per month", format_currency(currency, totals.total()));
            }
        }
    }

    Ok(())
}
