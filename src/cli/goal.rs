//! Goal CLI commands
//!
//! Implements CLI commands for savings goal management.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_currency, format_goal_table};
use crate::engine::{evaluate_all, validate_goals};
use crate::error::GaugeResult;
use crate::models::GoalCategory;
use crate::services::{GoalService, GoalUpdate, ProfileService};
use crate::storage::Storage;

/// Goal subcommands
#[derive(Subcommand, Debug)]
pub enum GoalCommands {
    /// Add a savings goal
    Add {
        /// Goal name
        name: String,
        /// Target amount
        target: f64,
        /// Months until the deadline
        months: u32,
        /// Category (car, emergency, house, vacation, education, investment, general)
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Edit a goal; omitted fields keep their current value
    Edit {
        /// Goal name or ID
        goal: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New target amount
        #[arg(short, long)]
        target: Option<f64>,
        /// New deadline in months
        #[arg(short, long)]
        months: Option<u32>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Remove a goal
    #[command(alias = "delete")]
    Remove {
        /// Goal name or ID
        goal: String,
    },
    /// List goals with their feasibility
    List,
    /// Show one goal in detail
    Show {
        /// Goal name or ID
        goal: String,
    },
}

/// Handle a goal command
pub fn handle_goal_command(storage: &Storage, settings: &Settings, cmd: GoalCommands) -> GaugeResult<()> {
    let service = GoalService::new(storage);
    let currency = settings.currency_symbol.as_str();

    match cmd {
        GoalCommands::Add {
            name,
            target,
            months,
            category,
        } => {
            let category = category
                .as_deref()
                .map(GoalCategory::parse_lenient)
                .unwrap_or_default();
            let goal = service.create(&name, target, months, category)?;

            println!("Created goal: {}", goal.name);
            println!("  ID:       {}", goal.id);
            println!("  Category: {}", goal.category);
            println!(
                "  Monthly:  {} for {} months",
                format_currency(currency, goal.required_monthly()),
                goal.deadline_months
            );
        }

        GoalCommands::Edit {
            goal,
            name,
            target,
            months,
            category,
        } => {
            let existing = service.require(&goal)?;
            let mut update = GoalUpdate::from_goal(&existing);
            if let Some(name) = name {
                update.name = name;
            }
            if let Some(target) = target {
                update.target_amount = target;
            }
            if let Some(months) = months {
                update.deadline_months = months;
            }
            if let Some(category) = category {
                update.category = GoalCategory::parse_lenient(&category);
            }

            let updated = service.edit(existing.id, update)?;
            println!("Updated goal: {}", updated.name);
        }

        GoalCommands::Remove { goal } => {
            let existing = service.require(&goal)?;
            let removed = service.delete(existing.id)?;
            println!("Removed goal: {}", removed.name);
        }

        GoalCommands::List => {
            let goals = service.list()?;
            validate_goals(&goals)?;
            let snapshot = ProfileService::new(storage).snapshot()?;
            let feasibility = evaluate_all(&snapshot, &goals);
            println!("{}", format_goal_table(&goals, &feasibility, currency));
        }

        GoalCommands::Show { goal } => {
            let goal = service.require(&goal)?;
            let goals = service.list()?;
            validate_goals(&goals)?;
            let snapshot = ProfileService::new(storage).snapshot()?;
            let feasibility = evaluate_all(&snapshot, &goals)
                .into_iter()
                .find(|f| f.goal_id == goal.id);

            println!("Goal:     {}", goal.name);
            println!("ID:       {}", goal.id);
            println!("Category: {}", goal.category);
            println!("Target:   {}", format_currency(currency, goal.target_amount));
            println!("Deadline: {} months", goal.deadline_months);
            println!("Monthly:  {}", format_currency(currency, goal.required_monthly()));
            if let Some(f) = feasibility {
                println!("Margin:   {}", format_currency(currency, f.margin));
                println!();
                println!("{}: {}", f.verdict, f.rationale);
            }
            println!();
            println!("Created:  {}", goal.created_at.format("%Y-%m-%d %H:%M"));
        }
    }

    Ok(())
}
