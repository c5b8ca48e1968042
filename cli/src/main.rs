mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process;

use crate::commands::{
    cmd_clear, cmd_food_list, cmd_goal_set, cmd_goal_show, cmd_history, cmd_log, cmd_summary,
    cmd_water,
};
use crate::config::Config;
use nosh_core::service::Tracker;
use nosh_core::store::DayStore;

#[derive(Parser)]
#[command(
    name = "nosh",
    version,
    about = "A simple nutrition and water tracker CLI",
    long_about = "\n\n  ███╗   ██╗ ██████╗ ███████╗██╗  ██╗
  ████╗  ██║██╔═══██╗██╔════╝██║  ██║
  ██╔██╗ ██║██║   ██║███████╗███████║
  ██║╚██╗██║██║   ██║╚════██║██╔══██║
  ██║ ╚████║╚██████╔╝███████║██║  ██║
  ╚═╝  ╚═══╝ ╚═════╝ ╚══════╝╚═╝  ╚═╝
       eat well. drink water.
"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log a meal from the food menu
    Log {
        /// Food name as it appears in `nosh food list`
        food: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add drinking water to today's total
    Water {
        /// Amount in ml
        amount: f64,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show a day's meals, water, and progress (defaults to today)
    Summary {
        /// Date to show (YYYY-MM-DD, today, or yesterday)
        date: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show per-day rollups for the last N days
    History {
        /// Number of days to show
        #[arg(short, long, default_value = "7")]
        days: u32,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Clear today's meals and water (targets are kept)
    Clear {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Manage daily requirement targets
    Goal {
        #[command(subcommand)]
        command: GoalCommands,
    },
    /// Inspect the food menu
    Food {
        #[command(subcommand)]
        command: FoodCommands,
    },
}

#[derive(Subcommand)]
enum GoalCommands {
    /// Compute and set today's targets from body metrics
    Set {
        /// Body weight in kg
        #[arg(long)]
        weight: f64,
        /// Tracking mode: toddler or adult
        #[arg(long, default_value = "toddler")]
        mode: String,
        /// Height in cm (required for adult mode)
        #[arg(long)]
        height: Option<f64>,
        /// Age in years (required for adult mode)
        #[arg(long)]
        age: Option<f64>,
        /// Sex: male or female (required for adult mode)
        #[arg(long)]
        sex: Option<String>,
        /// Activity level: low, medium, high
        #[arg(long, default_value = "low")]
        activity: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show today's targets
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
enum FoodCommands {
    /// List the food menu
    List {
        /// Filter foods by name
        #[arg(short, long)]
        search: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let catalog = config.load_catalog()?;
    let store = DayStore::open(&config.log_path);
    let mut tracker = Tracker::new(store, catalog);

    match cli.command {
        Commands::Log { food, json } => cmd_log(&mut tracker, &food, json),
        Commands::Water { amount, json } => cmd_water(&mut tracker, amount, json),
        Commands::Summary { date, json } => cmd_summary(&tracker, date, json),
        Commands::History { days, json } => cmd_history(&tracker, days, json),
        Commands::Clear { json } => cmd_clear(&mut tracker, json),
        Commands::Goal { command } => match command {
            GoalCommands::Set {
                weight,
                mode,
                height,
                age,
                sex,
                activity,
                json,
            } => cmd_goal_set(
                &mut tracker,
                weight,
                &mode,
                height,
                age,
                sex.as_deref(),
                &activity,
                json,
            ),
            GoalCommands::Show { json } => cmd_goal_show(&tracker, json),
        },
        Commands::Food { command } => match command {
            FoodCommands::List { search, json } => {
                cmd_food_list(tracker.catalog(), search.as_deref(), json)
            }
        },
    }
}
