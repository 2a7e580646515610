//! Expense entry form state
//!
//! Form fields, tab navigation, and validation for the dashboard's entry
//! panel. Validation mirrors the CLI: a bad date or non-numeric amount
//! shows an inline error and nothing is written.

use chrono::{Local, NaiveDate};

use crate::models::Expense;

use super::widgets::TextInput;

/// Which field is currently focused in the entry form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Date,
    Category,
    Amount,
    Currency,
    Notes,
}

impl FormField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Date => Self::Category,
            Self::Category => Self::Amount,
            Self::Amount => Self::Currency,
            Self::Currency => Self::Notes,
            Self::Notes => Self::Date,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Date => Self::Notes,
            Self::Category => Self::Date,
            Self::Amount => Self::Category,
            Self::Currency => Self::Amount,
            Self::Notes => Self::Currency,
        }
    }
}

/// State for the expense entry form
#[derive(Debug, Clone)]
pub struct ExpenseFormState {
    /// Currently focused field
    pub focused_field: FormField,

    /// Date input, prefilled with today
    pub date_input: TextInput,

    /// Category input
    pub category_input: TextInput,

    /// Amount input
    pub amount_input: TextInput,

    /// Currency input, prefilled with the default currency
    pub currency_input: TextInput,

    /// Notes input
    pub notes_input: TextInput,

    /// Inline error message to display
    pub error_message: Option<String>,
}

impl Default for ExpenseFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpenseFormState {
    /// Create a new form state with default values
    pub fn new() -> Self {
        let today = Local::now().date_naive();
        Self {
            focused_field: FormField::Date,
            date_input: TextInput::new()
                .label("Date")
                .placeholder("YYYY-MM-DD")
                .content(today.format("%Y-%m-%d").to_string()),
            category_input: TextInput::new()
                .label("Category")
                .placeholder("food, rent, travel, ..."),
            amount_input: TextInput::new().label("Amount").placeholder("0.00"),
            currency_input: TextInput::new()
                .label("Currency")
                .content(crate::models::expense::DEFAULT_CURRENCY),
            notes_input: TextInput::new().label("Notes").placeholder("Optional note"),
            error_message: None,
        }
    }

    /// The input for the currently focused field
    pub fn focused_input_mut(&mut self) -> &mut TextInput {
        match self.focused_field {
            FormField::Date => &mut self.date_input,
            FormField::Category => &mut self.category_input,
            FormField::Amount => &mut self.amount_input,
            FormField::Currency => &mut self.currency_input,
            FormField::Notes => &mut self.notes_input,
        }
    }

    /// Move focus to the next field
    pub fn focus_next(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    /// Move focus to the previous field
    pub fn focus_prev(&mut self) {
        self.focused_field = self.focused_field.prev();
    }

    /// Validate the form and build the expense to append
    ///
    /// Returns a user-facing message on invalid input; field defaults
    /// (category, currency) are applied by [`Expense::new`].
    pub fn to_expense(&self) -> Result<Expense, String> {
        let date_text = self.date_input.value().trim();
        let date = if date_text.is_empty() {
            Local::now().date_naive()
        } else {
            NaiveDate::parse_from_str(date_text, "%Y-%m-%d")
                .map_err(|_| "Bad date format. Use YYYY-MM-DD.".to_string())?
        };

        let amount_text = self.amount_input.value().trim();
        if amount_text.is_empty() {
            return Err("Amount is required.".to_string());
        }
        let amount: f64 = amount_text
            .parse()
            .map_err(|_| "Amount must be a number.".to_string())?;

        Ok(Expense::new(
            date,
            self.category_input.value(),
            amount,
            self.currency_input.value(),
            self.notes_input.value(),
        ))
    }

    /// Reset the form for the next entry, keeping the currency
    pub fn reset(&mut self) {
        let currency = self.currency_input.value().to_string();
        *self = Self::new();
        self.currency_input = TextInput::new().label("Currency").content(currency);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_cycle_wraps() {
        let mut field = FormField::Date;
        for _ in 0..5 {
            field = field.next();
        }
        assert_eq!(field, FormField::Date);
        assert_eq!(FormField::Date.prev(), FormField::Notes);
    }

    #[test]
    fn test_new_form_prefills_date_and_currency() {
        let form = ExpenseFormState::new();
        assert_eq!(form.currency_input.value(), "INR");
        assert!(form.date_input.value().contains('-'));
    }

    #[test]
    fn test_valid_form_builds_expense() {
        let mut form = ExpenseFormState::new();
        form.date_input = TextInput::new().content("2024-01-15");
        form.category_input = TextInput::new().content("food");
        form.amount_input = TextInput::new().content("12.50");

        let expense = form.to_expense().unwrap();
        assert_eq!(expense.category, "food");
        assert_eq!(expense.amount, 12.50);
        assert_eq!(expense.currency, "INR");
    }

    #[test]
    fn test_blank_category_defaults() {
        let mut form = ExpenseFormState::new();
        form.amount_input = TextInput::new().content("5");

        let expense = form.to_expense().unwrap();
        assert_eq!(expense.category, "other");
    }

    #[test]
    fn test_bad_date_rejected() {
        let mut form = ExpenseFormState::new();
        form.date_input = TextInput::new().content("15/01/2024");
        form.amount_input = TextInput::new().content("5");

        let err = form.to_expense().unwrap_err();
        assert!(err.contains("Bad date"));
    }

    #[test]
    fn test_non_numeric_amount_rejected() {
        let mut form = ExpenseFormState::new();
        form.amount_input = TextInput::new().content("ten");

        let err = form.to_expense().unwrap_err();
        assert!(err.contains("number"));
    }

    #[test]
    fn test_reset_keeps_currency() {
        let mut form = ExpenseFormState::new();
        form.currency_input = TextInput::new().content("USD");
        form.notes_input = TextInput::new().content("scratch");

        form.reset();
        assert_eq!(form.currency_input.value(), "USD");
        assert_eq!(form.notes_input.value(), "");
    }
}
