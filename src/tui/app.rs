//! Application state for the dashboard
//!
//! The App struct holds everything needed for rendering and handling
//! events: the store handle, a cache of loaded records, and the entry
//! form state.

use crate::models::Expense;
use crate::storage::ExpenseStore;

use super::form::ExpenseFormState;

/// Main application state
pub struct App<'a> {
    /// The expense store
    pub store: &'a ExpenseStore,

    /// Loaded records, refreshed after every write
    pub expenses: Vec<Expense>,

    /// Entry form state
    pub form: ExpenseFormState,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Transient status message shown under the form
    pub status: Option<String>,
}

impl<'a> App<'a> {
    /// Create the app state and load the store
    pub fn new(store: &'a ExpenseStore) -> Self {
        Self {
            store,
            expenses: store.load_all(),
            form: ExpenseFormState::new(),
            should_quit: false,
            status: None,
        }
    }

    /// Reload records from disk
    pub fn refresh(&mut self) {
        self.expenses = self.store.load_all();
    }

    /// Validate the form, append the expense, and reset for the next entry
    ///
    /// Validation failures land in the form's inline error message; nothing
    /// is written in that case.
    pub fn submit_form(&mut self) {
        let expense = match self.form.to_expense() {
            Ok(expense) => expense,
            Err(message) => {
                self.form.error_message = Some(message);
                return;
            }
        };

        match self.store.append(expense) {
            Ok(()) => {
                self.form.reset();
                self.status = Some("Expense added".to_string());
                self.refresh();
            }
            Err(e) => {
                self.form.error_message = Some(e.to_string());
            }
        }
    }

    /// Signal the app to quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::TextInput;
    use tempfile::TempDir;

    fn test_store() -> (TempDir, ExpenseStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = ExpenseStore::new(temp_dir.path().join("expenses.csv"));
        store.ensure().unwrap();
        (temp_dir, store)
    }

    #[test]
    fn test_submit_valid_form_appends_and_resets() {
        let (_temp_dir, store) = test_store();
        let mut app = App::new(&store);
        app.form.category_input = TextInput::new().content("food");
        app.form.amount_input = TextInput::new().content("25");

        app.submit_form();

        assert_eq!(app.expenses.len(), 1);
        assert_eq!(app.expenses[0].category, "food");
        assert_eq!(app.form.amount_input.value(), "");
        assert_eq!(app.status.as_deref(), Some("Expense added"));
        assert!(app.form.error_message.is_none());
    }

    #[test]
    fn test_submit_invalid_form_writes_nothing() {
        let (_temp_dir, store) = test_store();
        let mut app = App::new(&store);
        app.form.amount_input = TextInput::new().content("lots");

        app.submit_form();

        assert!(app.expenses.is_empty());
        assert!(app.form.error_message.is_some());
        assert_eq!(store.load_all().len(), 0);
    }
}
