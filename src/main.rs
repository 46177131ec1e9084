use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use stressgauge::cli::{
    handle_allocate_command, handle_audit_command, handle_dashboard_command,
    handle_export_command, handle_goal_command, handle_optimize_command, handle_score_command,
    handle_snapshot_command, handle_strategy_command, handle_subsidy_command, ExportFormat,
};
use stressgauge::config::{paths::GaugePaths, settings::Settings};
use stressgauge::storage::Storage;

#[derive(Parser)]
#[command(
    name = "stressgauge",
    version,
    about = "Household financial stress scoring and savings goal allocation",
    long_about = "StressGauge scores your monthly finances on a 0-100 stress scale, \
                  checks whether your savings goals are realistic, and shows where \
                  each month's income goes."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the data directory and settings
    Init {
        /// Currency symbol used in output
        #[arg(long)]
        currency: Option<String>,
    },

    /// Show current configuration and paths
    Config,

    /// Monthly snapshot commands
    #[command(subcommand)]
    Snapshot(stressgauge::cli::SnapshotCommands),

    /// Savings goal commands
    #[command(subcommand)]
    Goal(stressgauge::cli::GoalCommands),

    /// Recurring strategy commands
    #[command(subcommand)]
    Strategy(stressgauge::cli::StrategyCommands),

    /// Lifestyle optimization commands
    #[command(subcommand, alias = "optimization")]
    Optimize(stressgauge::cli::OptimizeCommands),

    /// Claimed subsidy commands
    #[command(subcommand)]
    Subsidy(stressgauge::cli::SubsidyCommands),

    /// Show the stress score
    Score {
        /// Print the full assessment as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the allocation breakdown
    Allocate,

    /// Show the full dashboard
    Dashboard,

    /// Show recent changes
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Export profile and computed results
    Export {
        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Output file path (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = GaugePaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Init { currency }) => {
            if let Some(symbol) = currency {
                settings.currency_symbol = symbol;
            }
            settings.setup_completed = true;
            settings.save(&paths)?;
            storage.save_all()?;

            println!("Initialized StressGauge at: {}", paths.base_dir().display());
            println!();
            println!("Next steps:");
            println!("  stressgauge snapshot set income <amount>");
            println!("  stressgauge goal add <name> <target> <months>");
            println!("  stressgauge dashboard");
        }
        Some(Commands::Config) => {
            println!("StressGauge Configuration");
            println!("=========================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Data directory:  {}", paths.data_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Audit log:       {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Initialized:       {}", paths.is_initialized());
            println!("  Currency symbol:   {}", settings.currency_symbol);
            println!("  Subsidies enabled: {}", settings.subsidies_enabled);
            println!("  Bar width:         {}", settings.bar_width);
        }
        Some(Commands::Snapshot(cmd)) => handle_snapshot_command(&storage, &settings, cmd)?,
        Some(Commands::Goal(cmd)) => handle_goal_command(&storage, &settings, cmd)?,
        Some(Commands::Strategy(cmd)) => handle_strategy_command(&storage, &settings, cmd)?,
        Some(Commands::Optimize(cmd)) => handle_optimize_command(&storage, &settings, cmd)?,
        Some(Commands::Subsidy(cmd)) => handle_subsidy_command(&storage, &mut settings, cmd)?,
        Some(Commands::Score { json }) => handle_score_command(&storage, json)?,
        Some(Commands::Allocate) => handle_allocate_command(&storage, &settings)?,
        Some(Commands::Dashboard) => handle_dashboard_command(&storage, &settings)?,
        Some(Commands::Audit { limit }) => handle_audit_command(&storage, limit)?,
        Some(Commands::Export { format, output }) => {
            handle_export_command(&storage, &settings, format, output)?
        }
        None => {
            println!("StressGauge - household financial stress scoring");
            println!();
            println!("Run 'stressgauge --help' for usage information.");
            println!("Run 'stressgauge dashboard' to see your current picture.");
        }
    }

    Ok(())
}
