//! Display formatting for terminal output
//!
//! Provides utilities for formatting expenses and summaries for the CLI.

pub mod expense;
pub mod summary;

pub use expense::{format_expense_row, format_expense_table};
pub use summary::format_summary;
