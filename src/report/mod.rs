//! Pure aggregation over in-memory expense records
//!
//! No I/O happens here. Callers load records from the store, resolve the
//! date range, and hand both to these functions.

use std::collections::HashMap;

use chrono::{Datelike, Duration, NaiveDate};
use clap::ValueEnum;

use crate::models::Expense;

/// Named shorthand date ranges, resolved relative to the current date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Period {
    /// The last 7 days
    Week,
    /// The current calendar month so far
    #[default]
    Month,
}

/// Resolve the effective date range for a summary or export
///
/// Explicit bounds win when both are present, even if `start > end` (which
/// yields an empty range downstream, not an error). Otherwise the period
/// decides: `week` is the trailing 7 days, `month` runs from the first of
/// the current month through today.
pub fn resolve_range(
    period: Period,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    today: NaiveDate,
) -> (NaiveDate, NaiveDate) {
    if let (Some(start), Some(end)) = (start, end) {
        return (start, end);
    }
    match period {
        Period::Week => (today - Duration::days(7), today),
        Period::Month => (today.with_day(1).unwrap_or(today), today),
    }
}

/// Records whose parsed date lies in `[start, end]` inclusive
///
/// Records carrying an unparsable raw date never match a range.
pub fn filter_by_range(expenses: &[Expense], start: NaiveDate, end: NaiveDate) -> Vec<Expense> {
    expenses
        .iter()
        .filter(|e| {
            e.date
                .as_date()
                .map(|d| d >= start && d <= end)
                .unwrap_or(false)
        })
        .cloned()
        .collect()
}

/// Per-category sums, ordered by descending total
///
/// Order among categories with equal sums is unspecified.
pub fn group_by_category(expenses: &[Expense]) -> Vec<(String, f64)> {
    let mut sums: HashMap<&str, f64> = HashMap::new();
    for expense in expenses {
        *sums.entry(expense.category.as_str()).or_insert(0.0) += expense.amount;
    }

    let mut totals: Vec<(String, f64)> = sums
        .into_iter()
        .map(|(category, sum)| (category.to_string(), sum))
        .collect();
    totals.sort_by(|a, b| b.1.total_cmp(&a.1));
    totals
}

/// Sum of all amounts; `0.0` for an empty sequence
pub fn total(expenses: &[Expense]) -> f64 {
    expenses.iter().map(|e| e.amount).sum()
}

/// Linearly extrapolate a partial period's spend to a 30-day equivalent
///
/// `days` is the inclusive length of the range, clamped to at least 1.
pub fn project_monthly(total_amount: f64, start: NaiveDate, end: NaiveDate) -> f64 {
    let days = ((end - start).num_days() + 1).max(1);
    total_amount / days as f64 * 30.0
}

/// Aggregate view of a date range, computed on demand and never cached
#[derive(Debug, Clone)]
pub struct SummaryReport {
    /// Start of the range (inclusive)
    pub start: NaiveDate,
    /// End of the range (inclusive)
    pub end: NaiveDate,
    /// Grand total over the range
    pub total: f64,
    /// Per-category sums, descending
    pub by_category: Vec<(String, f64)>,
}

impl SummaryReport {
    /// Build the summary for `[start, end]`
    ///
    /// Returns `None` when no records fall inside the range. An empty range
    /// is a distinct outcome, not a zero-total table.
    pub fn generate(expenses: &[Expense], start: NaiveDate, end: NaiveDate) -> Option<Self> {
        let in_range = filter_by_range(expenses, start, end);
        if in_range.is_empty() {
            return None;
        }

        Some(Self {
            start,
            end,
            total: total(&in_range),
            by_category: group_by_category(&in_range),
        })
    }
}

/// Budget comparison for a summarized range
///
/// Only built when a monthly budget is configured; no budget means no
/// projection line at all.
#[derive(Debug, Clone, Copy)]
pub struct BudgetProjection {
    /// The configured monthly budget
    pub budget: f64,
    /// The range's spend extrapolated to a 30-day equivalent
    pub projected: f64,
}

impl BudgetProjection {
    /// Project the range total against the configured budget
    pub fn new(budget: f64, range_total: f64, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            budget,
            projected: project_monthly(range_total, start, end),
        }
    }

    /// Whether the projection exceeds the budget
    pub fn exceeded(&self) -> bool {
        self.projected > self.budget
    }
}
