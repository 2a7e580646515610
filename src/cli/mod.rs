//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the storage and report layers. No business
//! logic lives here; handlers load, delegate, and print.

pub mod budget;
pub mod expense;
pub mod report;

pub use budget::handle_set_budget;
pub use expense::{handle_add, handle_list};
pub use report::{handle_export, handle_summary};

use std::io::{self, BufRead, Write};

use chrono::NaiveDate;

use crate::error::{ExpenseError, ExpenseResult};

/// Prompt on stdout and read one trimmed line from stdin
pub(crate) fn prompt(label: &str) -> ExpenseResult<String> {
    print!("{}", label);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Parse a `YYYY-MM-DD` command-line date flag
pub(crate) fn parse_date_arg(s: &str) -> ExpenseResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| ExpenseError::bad_date(s))
}
