//! The expense store
//!
//! Owns the on-disk expense file. Reads degrade softly: a missing or
//! unreadable file behaves as an empty store so the first run never crashes.
//! Write failures propagate and fail the current command.

use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::config::paths::SpendlogPaths;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;

/// Header row of the expense file
const HEADER: [&str; 6] = ["id", "date", "category", "amount", "currency", "notes"];

/// Repository for expense persistence in a flat CSV file
pub struct ExpenseStore {
    path: PathBuf,
}

impl ExpenseStore {
    /// Create a store over the given file path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Create a store over the standard expense file location
    pub fn from_paths(paths: &SpendlogPaths) -> Self {
        Self::new(paths.expenses_file())
    }

    /// Path to the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the backing file with its header row if it does not exist
    ///
    /// Idempotent; an existing file is left untouched.
    pub fn ensure(&self) -> ExpenseResult<()> {
        if self.path.exists() {
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ExpenseError::Storage(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let mut writer = csv::Writer::from_path(&self.path).map_err(|e| {
            ExpenseError::Storage(format!("Failed to create {}: {}", self.path.display(), e))
        })?;
        writer
            .write_record(HEADER)
            .and_then(|_| writer.flush().map_err(Into::into))
            .map_err(|e| ExpenseError::Storage(format!("Failed to write header: {}", e)))?;

        debug!("created expense file at {}", self.path.display());
        Ok(())
    }

    /// Load every record, in file order
    ///
    /// A missing or unreadable file yields an empty vec. Rows whose date
    /// fails structured parsing come back with the date as a raw string;
    /// rows that cannot be decoded at all are skipped with a warning.
    pub fn load_all(&self) -> Vec<Expense> {
        if !self.path.exists() {
            return Vec::new();
        }

        let mut reader = match csv::Reader::from_path(&self.path) {
            Ok(reader) => reader,
            Err(e) => {
                warn!(
                    "could not read {}, treating store as empty: {}",
                    self.path.display(),
                    e
                );
                return Vec::new();
            }
        };

        let mut expenses = Vec::new();
        for record in reader.deserialize() {
            match record {
                Ok(expense) => expenses.push(expense),
                Err(e) => warn!("skipping malformed row in {}: {}", self.path.display(), e),
            }
        }
        expenses
    }

    /// Append one record, rewriting the entire file
    ///
    /// Not atomic; a crash mid-write can truncate the file. Accepted
    /// limitation for the single-user scope.
    pub fn append(&self, expense: Expense) -> ExpenseResult<()> {
        self.ensure()?;
        let mut expenses = self.load_all();
        expenses.push(expense);
        self.overwrite_all(&expenses)
    }

    /// Replace the file contents with the given records
    pub fn overwrite_all(&self, expenses: &[Expense]) -> ExpenseResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ExpenseError::Storage(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
        write_expenses(&self.path, expenses)
            .map_err(|e| ExpenseError::Storage(format!("Failed to write store: {}", e)))?;
        debug!(
            "wrote {} records to {}",
            expenses.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Write the given records to an arbitrary path (used by `export`)
    ///
    /// Returns the number of rows written.
    pub fn export_to(&self, out: &Path, expenses: &[Expense]) -> ExpenseResult<usize> {
        write_expenses(out, expenses)
            .map_err(|e| ExpenseError::Export(format!("Failed to write {}: {}", out.display(), e)))?;
        Ok(expenses.len())
    }
}

/// Serialize records (with header) to the given path
fn write_expenses(path: &Path, expenses: &[Expense]) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_path(path)?;
    if expenses.is_empty() {
        // Serde-driven writes emit the header from the first record; an
        // empty store still needs one.
        writer.write_record(HEADER)?;
    }
    for expense in expenses {
        writer.serialize(expense)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DateField;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, ExpenseStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = ExpenseStore::new(temp_dir.path().join("expenses.csv"));
        (temp_dir, store)
    }

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
    fn test_ensure_creates_header_only_file() {
        let (_temp_dir, store) = create_test_store();
        store.ensure().unwrap();

        let contents = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(contents.trim(), "id,date,category,amount,currency,notes");

        // Idempotent: a second call leaves the file alone
        store.ensure().unwrap();
        assert_eq!(
            std::fs::read_to_string(store.path()).unwrap(),
            contents
        );
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let (_temp_dir, store) = create_test_store();
        assert!(store.load_all().is_empty());
    }

    #[test]
    fn test_load_header_only_file_is_empty() {
        let (_temp_dir, store) = create_test_store();
        store.ensure().unwrap();
        assert!(store.load_all().is_empty());
    }

    #[test]
    fn test_append_preserves_existing_order() {
        let (_temp_dir, store) = create_test_store();
        store.append(expense("2024-01-10", "food", 10.0)).unwrap();
        store.append(expense("2024-01-05", "rent", 500.0)).unwrap();
        store.append(expense("2024-01-20", "travel", 75.0)).unwrap();

        let loaded = store.load_all();
        assert_eq!(loaded.len(), 3);
        assert_eq!(loaded[0].category, "food");
        assert_eq!(loaded[1].category, "rent");
        assert_eq!(loaded[2].category, "travel");
    }

    #[test]
    fn test_round_trip_preserves_fields() {
        let (_temp_dir, store) = create_test_store();
        let original = Expense::new(
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            "food",
            -42.75,
            "USD",
            "lunch, with a comma",
        );
        store.append(original.clone()).unwrap();

        let loaded = store.load_all();
        assert_eq!(loaded, vec![original]);
    }

    #[test]
    fn test_unparsable_date_kept_raw() {
        let (_temp_dir, store) = create_test_store();
        std::fs::write(
            store.path(),
            "id,date,category,amount,currency,notes\n\
             abcd1234,someday,food,5.0,INR,\n",
        )
        .unwrap();

        let loaded = store.load_all();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].date, DateField::Raw("someday".into()));
        assert_eq!(loaded[0].amount, 5.0);
    }

    #[test]
    fn test_overwrite_all_replaces_contents() {
        let (_temp_dir, store) = create_test_store();
        store.append(expense("2024-01-10", "food", 10.0)).unwrap();

        let replacement = vec![expense("2024-02-01", "rent", 900.0)];
        store.overwrite_all(&replacement).unwrap();

        let loaded = store.load_all();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].category, "rent");
    }

    #[test]
    fn test_overwrite_empty_keeps_header() {
        let (_temp_dir, store) = create_test_store();
        store.append(expense("2024-01-10", "food", 10.0)).unwrap();
        store.overwrite_all(&[]).unwrap();

        let contents = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(contents.trim(), "id,date,category,amount,currency,notes");
    }

    #[test]
    fn test_export_to_reports_row_count() {
        let (temp_dir, store) = create_test_store();
        let expenses = vec![
            expense("2024-01-10", "food", 10.0),
            expense("2024-01-11", "food", 5.0),
        ];
        let out = temp_dir.path().join("out.csv");

        let count = store.export_to(&out, &expenses).unwrap();
        assert_eq!(count, 2);

        let copy = ExpenseStore::new(out);
        assert_eq!(copy.load_all().len(), 2);
    }
}
