use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use spendlog::cli::{handle_add, handle_export, handle_list, handle_set_budget, handle_summary};
use spendlog::config::paths::SpendlogPaths;
use spendlog::report::Period;
use spendlog::storage::ExpenseStore;

#[derive(Parser)]
#[command(
    name = "spendlog",
    version,
    about = "Tiny terminal expense tracker",
    long_about = "spendlog records dated expenses into a flat CSV file and \
                  derives simple aggregate views: listings, period summaries, \
                  CSV export, and a budget-comparison warning. An interactive \
                  dashboard offers the same data as a form and overview."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add an expense interactively
    Add,

    /// List all expenses, newest first
    List,

    /// Show a period summary with per-category totals
    Summary {
        /// Period shorthand, ignored when both --start and --end are given
        #[arg(long, value_enum, default_value = "month")]
        period: Period,

        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        start: Option<String>,

        /// End date (YYYY-MM-DD)
        #[arg(long)]
        end: Option<String>,
    },

    /// Export expenses (or a filtered range) to CSV
    Export {
        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        start: Option<String>,

        /// End date (YYYY-MM-DD)
        #[arg(long)]
        end: Option<String>,

        /// Output path
        #[arg(long, default_value = "summary.csv")]
        out: PathBuf,
    },

    /// Set the monthly budget
    SetBudget {
        /// Budget amount
        amount: String,
    },

    /// Launch the interactive form/dashboard
    #[command(alias = "ui")]
    Dashboard,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let paths = SpendlogPaths::new()?;
    let store = ExpenseStore::from_paths(&paths);

    match cli.command {
        Some(Commands::Add) => {
            handle_add(&store)?;
        }
        Some(Commands::List) => {
            handle_list(&store)?;
        }
        Some(Commands::Summary { period, start, end }) => {
            handle_summary(&store, &paths, period, start.as_deref(), end.as_deref())?;
        }
        Some(Commands::Export { start, end, out }) => {
            handle_export(&store, start.as_deref(), end.as_deref(), &out)?;
        }
        Some(Commands::SetBudget { amount }) => {
            handle_set_budget(&paths, &amount)?;
        }
        Some(Commands::Dashboard) => {
            spendlog::tui::run_tui(&store)?;
        }
        None => {
            println!("spendlog - Tiny terminal expense tracker");
            println!();
            println!("Run 'spendlog --help' for usage information.");
            println!("Run 'spendlog dashboard' to launch the interactive interface.");
        }
    }

    Ok(())
}
