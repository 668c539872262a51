//! Bank Ledger CLI
//!
//! Loads an account batch file and prints one of the ledger reports

use anyhow::{Context, Result};
use bank_ledger::{CalendarDate, Config, TransactionManager};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Which report to print after loading
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum View {
    /// Accounts sorted by type and holder
    Sorted,
    /// Sorted accounts with the upcoming fee and interest
    Fees,
    /// Apply monthly interest and fees, then list the balances
    Update,
}

#[derive(Debug, Parser)]
#[command(name = "bank-ledger", version, about = "Load an account batch and print ledger reports")]
struct Args {
    /// Batch file of comma-separated account lines
    file: PathBuf,

    /// Report to print
    #[arg(long, value_enum, default_value_t = View::Sorted)]
    view: View,

    /// Date used for age checks, as M/D/YYYY (defaults to today)
    #[arg(long)]
    today: Option<String>,

    /// JSON settings file overriding ledger growth and age limits
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the accounts as JSON instead of a text report
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::from_json_path(path)
            .map_err(|e| anyhow::anyhow!("{}", e))
            .with_context(|| format!("reading config {}", path.display()))?,
        None => Config::default(),
    };

    let mut manager = TransactionManager::with_config(config);
    if let Some(today) = &args.today {
        let date: CalendarDate = today.parse().with_context(|| format!("parsing --today {}", today))?;
        if !date.is_valid() {
            anyhow::bail!("--today {} is not a calendar date", today);
        }
        manager = manager.on_date(date);
    }

    let report = manager
        .load_accounts_from_path(&args.file)
        .map_err(|e| anyhow::anyhow!("{}", e))
        .with_context(|| format!("loading {}", args.file.display()))?;
    print!("{}", report.summary());

    if args.json {
        let accounts = manager.sorted_accounts();
        println!("{}", serde_json::to_string_pretty(accounts)?);
        return Ok(());
    }

    let output = match args.view {
        View::Sorted => manager.display_sorted(),
        View::Fees => manager.display_fees_and_interests(),
        View::Update => manager.update_balances(),
    };
    print!("{}", output);

    Ok(())
}
