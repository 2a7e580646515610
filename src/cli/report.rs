//! CLI commands for summaries and CSV export

use std::path::Path;

use chrono::Local;

use crate::config::paths::SpendlogPaths;
use crate::config::Config;
use crate::display::format_summary;
use crate::error::ExpenseResult;
use crate::report::{filter_by_range, resolve_range, BudgetProjection, Period, SummaryReport};
use crate::storage::ExpenseStore;

use super::parse_date_arg;

/// Print the aggregate view for a period or explicit date range
pub fn handle_summary(
    store: &ExpenseStore,
    paths: &SpendlogPaths,
    period: Period,
    start: Option<&str>,
    end: Option<&str>,
) -> ExpenseResult<()> {
    let expenses = store.load_all();
    if expenses.is_empty() {
        println!("No expenses yet.");
        return Ok(());
    }

    let start = start.map(parse_date_arg).transpose()?;
    let end = end.map(parse_date_arg).transpose()?;
    let today = Local::now().date_naive();
    let (start, end) = resolve_range(period, start, end, today);

    let report = match SummaryReport::generate(&expenses, start, end) {
        Some(report) => report,
        None => {
            println!("No expenses between {} and {}.", start, end);
            return Ok(());
        }
    };

    let projection = Config::load(paths)?
        .monthly_budget
        .map(|budget| BudgetProjection::new(budget, report.total, report.start, report.end));

    print!("{}", format_summary(&report, projection.as_ref()));
    Ok(())
}

/// Write a filtered-or-full copy of the store to `out`
pub fn handle_export(
    store: &ExpenseStore,
    start: Option<&str>,
    end: Option<&str>,
    out: &Path,
) -> ExpenseResult<()> {
    let expenses = store.load_all();
    if expenses.is_empty() {
        println!("No expenses to export.");
        return Ok(());
    }

    // Only an explicit pair of bounds filters; otherwise every record is
    // copied verbatim.
    let selected = match (start, end) {
        (Some(start), Some(end)) => {
            let start = parse_date_arg(start)?;
            let end = parse_date_arg(end)?;
            filter_by_range(&expenses, start, end)
        }
        _ => expenses,
    };

    let count = store.export_to(out, &selected)?;
    println!("Exported {} rows to {}", count, out.display());
    Ok(())
}
