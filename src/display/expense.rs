//! Expense display formatting
//!
//! Fixed-width register-style rows for the `list` command.

use crate::models::Expense;

/// Format a single expense for display (table row)
pub fn format_expense_row(expense: &Expense) -> String {
    format!(
        "{:8}  {:10}  {:12}  {:>10.2}  {:4}  {}",
        expense.id.as_str(),
        expense.date.to_string(),
        truncate(&expense.category, 12),
        expense.amount,
        expense.currency,
        expense.notes
    )
}

/// Format a list of expenses as a table, newest date first
pub fn format_expense_table(expenses: &[Expense]) -> String {
    let mut sorted: Vec<&Expense> = expenses.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));

    let mut output = String::new();
    output.push_str(&format!(
        "{:8}  {:10}  {:12}  {:>10}  {:4}  {}\n",
        "ID", "Date", "Category", "Amount", "Cur", "Notes"
    ));
    output.push_str(&"-".repeat(60));
    output.push('\n');

    for expense in sorted {
        output.push_str(&format_expense_row(expense));
        output.push('\n');
    }

    output
}

/// Truncate a string to a maximum length, appending an ellipsis if needed
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn expense(date: &str, category: &str, amount: f64) -> Expense {
        Expense::new(
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            category,
            amount,
            "INR",
            "",
        )
    }

    #[test]
    fn test_row_contains_fields() {
        let row = format_expense_row(&expense("2024-01-15", "food", 42.5));
        assert!(row.contains("2024-01-15"));
        assert!(row.contains("food"));
        assert!(row.contains("42.50"));
        assert!(row.contains("INR"));
    }

    #[test]
    fn test_table_sorts_newest_first() {
        let expenses = vec![
            expense("2024-01-01", "oldest", 1.0),
            expense("2024-03-01", "newest", 2.0),
            expense("2024-02-01", "middle", 3.0),
        ];
        let table = format_expense_table(&expenses);
        let newest = table.find("newest").unwrap();
        let middle = table.find("middle").unwrap();
        let oldest = table.find("oldest").unwrap();
        assert!(newest < middle);
        assert!(middle < oldest);
    }

    #[test]
    fn test_truncate_long_category() {
        let row = format_expense_row(&expense("2024-01-15", "a-very-long-category-name", 1.0));
        assert!(row.contains('…'));
    }
}
