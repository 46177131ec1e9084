//! Claimed subsidy CLI commands

use clap::Subcommand;

use crate::audit::EntityType;
use crate::config::Settings;
use crate::display::{format_currency, format_subsidy_table};
use crate::error::GaugeResult;
use crate::services::ProfileService;
use crate::storage::Storage;

/// Subsidy subcommands
#[derive(Subcommand, Debug)]
pub enum SubsidyCommands {
    /// Record a claimed subsidy
    Add {
        /// Subsidy name
        name: String,
        /// Monthly benefit
        benefit: f64,
    },
    /// Remove a claimed subsidy
    #[command(alias = "delete")]
    Remove {
        /// Subsidy name
        name: String,
    },
    /// List claimed subsidies
    List,
    /// Show subsidies as a bucket in the allocation
    Enable,
    /// Hide subsidies from the allocation
    Disable,
}

/// Handle a subsidy command
pub fn handle_subsidy_command(
    storage: &Storage,
    settings: &mut Settings,
    cmd: SubsidyCommands,
) -> GaugeResult<()> {
    let service = ProfileService::new(storage);
    let currency = settings.currency_symbol.clone();

    match cmd {
        SubsidyCommands::Add { name, benefit } => {
            let subsidy = service.add_subsidy(&name, benefit)?;
            println!(
                "Recorded subsidy: {} ({} per month)",
                subsidy.name,
                format_currency(&currency, subsidy.monthly_benefit)
            );
        }
        SubsidyCommands::Remove { name } => {
            let removed = service.remove_subsidy(&name)?;
            println!("Removed subsidy: {}", removed.name);
        }
        SubsidyCommands::List => {
            let subsidies = service.subsidies()?;
            println!("{}", format_subsidy_table(&subsidies, &currency));

            let summary = storage.profile.get()?.subsidy_summary();
            let status = if settings.subsidies_enabled {
                "enabled"
            } else {
                "disabled"
            };
            println!(
                "{} claimed, {} per month (allocation display {})",
                summary.count,
                format_currency(&currency, summary.monthly_total),
                status
            );
        }
        SubsidyCommands::Enable => set_subsidies_enabled(storage, settings, true)?,
        SubsidyCommands::Disable => set_subsidies_enabled(storage, settings, false)?,
    }

    Ok(())
}

fn set_subsidies_enabled(storage: &Storage, settings: &mut Settings, enabled: bool) -> GaugeResult<()> {
    if settings.subsidies_enabled != enabled {
        let before = settings.clone();
        settings.subsidies_enabled = enabled;
        settings.save(storage.paths())?;
        storage.log_update(EntityType::Settings, "settings", None, &before, &*settings)?;
    }

    if enabled {
        println!("Subsidies will appear in the allocation.");
    } else {
        println!("Subsidies are hidden from the allocation.");
    }
    Ok(())
}
