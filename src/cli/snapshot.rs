//! Snapshot CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_snapshot_table;
use crate::error::GaugeResult;
use crate::services::ProfileService;
use crate::storage::Storage;

/// Snapshot subcommands
#[derive(Subcommand, Debug)]
pub enum SnapshotCommands {
    /// Show the current monthly snapshot
    Show,
    /// Set one snapshot field
    Set {
        /// Field name: income, rent, utilities, transport, food, debt,
        /// subscriptions, emergency_savings, savings
        field: String,
        /// Monthly amount
        #[arg(allow_negative_numbers = true)]
        amount: f64,
    },
}

/// Handle a snapshot command
pub fn handle_snapshot_command(
    storage: &Storage,
    settings: &Settings,
    cmd: SnapshotCommands,
) -> GaugeResult<()> {
    let service = ProfileService::new(storage);

    match cmd {
        SnapshotCommands::Show => {
            let snapshot = service.snapshot()?;
            println!("{}", format_snapshot_table(&snapshot, &settings.currency_symbol));
        }
        SnapshotCommands::Set { field, amount } => {
            service.set_snapshot_field(&field, amount)?;
            println!("Updated {}.", field.trim());
            if amount < 0.0 {
                println!("Note: negative amounts are treated as zero when scoring.");
            }
        }
    }

    Ok(())
}
