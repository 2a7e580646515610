//! CLI command for the monthly budget

use crate::config::paths::SpendlogPaths;
use crate::config::settings;
use crate::error::ExpenseResult;

/// Persist the monthly budget
///
/// Fails with a validation error when `amount` is not numeric.
pub fn handle_set_budget(paths: &SpendlogPaths, amount: &str) -> ExpenseResult<()> {
    let budget = settings::set_budget(paths, amount)?;
    println!("Budget set to {:.2}", budget);
    Ok(())
}
