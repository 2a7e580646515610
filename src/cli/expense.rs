//! CLI commands for recording and listing expenses

use chrono::Local;

use crate::display::format_expense_table;
use crate::error::ExpenseResult;
use crate::models::Expense;
use crate::storage::ExpenseStore;

use super::prompt;

/// Interactively prompt for one expense and append it to the store
///
/// Invalid date or amount input prints a message and aborts without
/// writing anything.
pub fn handle_add(store: &ExpenseStore) -> ExpenseResult<()> {
    store.ensure()?;

    let today = Local::now().date_naive();
    let date_input = prompt(&format!("Date (YYYY-MM-DD) [default today {}]: ", today))?;
    let date = if date_input.is_empty() {
        today
    } else {
        match chrono::NaiveDate::parse_from_str(&date_input, "%Y-%m-%d") {
            Ok(date) => date,
            Err(_) => {
                println!("Bad date format. Use YYYY-MM-DD.");
                return Ok(());
            }
        }
    };

    let category = prompt("Category (food, rent, travel, etc.): ")?;

    let amount_input = prompt("Amount (number): ")?;
    let amount: f64 = match amount_input.parse() {
        Ok(amount) => amount,
        Err(_) => {
            println!("Amount must be a number.");
            return Ok(());
        }
    };

    let currency = prompt("Currency [default INR]: ")?;
    let notes = prompt("Notes (optional): ")?;

    let expense = Expense::new(date, &category, amount, &currency, &notes);
    store.append(expense.clone())?;

    println!(
        "Added: {} {} {} {:.2} {} {}",
        expense.id, expense.date, expense.category, expense.amount, expense.currency, expense.notes
    );
    Ok(())
}

/// Print all recorded expenses, newest date first
pub fn handle_list(store: &ExpenseStore) -> ExpenseResult<()> {
    let expenses = store.load_all();
    if expenses.is_empty() {
        println!("No expenses yet. Add with `spendlog add`.");
        return Ok(());
    }

    print!("{}", format_expense_table(&expenses));
    Ok(())
}
