//! Strategy CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_currency, format_strategy_table};
use crate::error::GaugeResult;
use crate::models::strategy_total;
use crate::services::ProfileService;
use crate::storage::Storage;

/// Strategy subcommands
#[derive(Subcommand, Debug)]
pub enum StrategyCommands {
    /// Add a recurring monthly strategy
    Add {
        /// Strategy label
        label: String,
        /// Monthly amount
        amount: f64,
    },
    /// Remove a strategy
    #[command(alias = "delete")]
    Remove {
        /// Strategy label
        label: String,
    },
    /// List strategies
    List,
}

/// Handle a strategy command
pub fn handle_strategy_command(
    storage: &Storage,
    settings: &Settings,
    cmd: StrategyCommands,
) -> GaugeResult<()> {
    let service = ProfileService::new(storage);
    let currency = settings.currency_symbol.as_str();

    match cmd {
        StrategyCommands::Add { label, amount } => {
            let strategy = service.add_strategy(&label, amount)?;
            println!(
                "Added strategy: {} ({} per month)",
                strategy.label,
                format_currency(currency, strategy.monthly())
            );
        }
        StrategyCommands::Remove { label } => {
            let removed = service.remove_strategy(&label)?;
            println!("Removed strategy: {}", removed.label);
        }
        StrategyCommands::List => {
            let strategies = service.strategies()?;
            println!("{}", format_strategy_table(&strategies, currency));
            if !strategies.is_empty() {
                println!(
                    "Total: {} per month",
                    format_currency(currency, strategy_total(&strategies))
                );
            }
        }
    }

    Ok(())
}
