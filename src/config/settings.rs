//! The budget config document
//!
//! A single JSON object persisted next to the expense file. The only key
//! spendlog itself reads is `monthly_budget`; any other keys found in the
//! document are preserved across rewrites.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};

use serde::{Deserialize, Serialize};

use super::paths::SpendlogPaths;
use crate::error::{ExpenseError, ExpenseResult};

/// The persisted config document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// The monthly budget, if one has been set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_budget: Option<f64>,

    /// Unrecognized keys, carried through rewrites untouched
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Config {
    /// Load the config document, or an empty one if the file does not exist
    pub fn load(paths: &SpendlogPaths) -> ExpenseResult<Self> {
        let path = paths.config_file();
        if !path.exists() {
            return Ok(Self::default());
        }

        let file = File::open(&path).map_err(|e| {
            ExpenseError::Config(format!("Failed to open {}: {}", path.display(), e))
        })?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader).map_err(|e| {
            ExpenseError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// Write the full document back to disk
    pub fn save(&self, paths: &SpendlogPaths) -> ExpenseResult<()> {
        paths.ensure_directories()?;
        let path = paths.config_file();

        let file = File::create(&path).map_err(|e| {
            ExpenseError::Config(format!("Failed to create {}: {}", path.display(), e))
        })?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer
            .flush()
            .map_err(|e| ExpenseError::Config(format!("Failed to flush config: {}", e)))?;
        Ok(())
    }
}

/// Parse `amount` and persist it as the monthly budget
///
/// Loads the existing document first so unrelated keys survive the rewrite.
pub fn set_budget(paths: &SpendlogPaths, amount: &str) -> ExpenseResult<f64> {
    let budget: f64 = amount
        .trim()
        .parse()
        .map_err(|_| ExpenseError::bad_amount(amount.trim()))?;

    let mut config = Config::load(paths)?;
    config.monthly_budget = Some(budget);
    config.save(paths)?;
    Ok(budget)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_paths() -> (TempDir, SpendlogPaths) {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendlogPaths::with_base_dir(temp_dir.path().to_path_buf());
        (temp_dir, paths)
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let (_temp_dir, paths) = test_paths();
        let config = Config::load(&paths).unwrap();
        assert!(config.monthly_budget.is_none());
        assert!(config.extra.is_empty());
    }

    #[test]
    fn test_set_budget_round_trip() {
        let (_temp_dir, paths) = test_paths();
        let budget = set_budget(&paths, "1500.50").unwrap();
        assert_eq!(budget, 1500.50);

        let config = Config::load(&paths).unwrap();
        assert_eq!(config.monthly_budget, Some(1500.50));
    }

    #[test]
    fn test_set_budget_rejects_non_numeric() {
        let (_temp_dir, paths) = test_paths();
        let err = set_budget(&paths, "lots").unwrap_err();
        assert!(err.is_validation());
        assert!(!paths.config_file().exists());
    }

    #[test]
    fn test_unknown_keys_preserved() {
        let (_temp_dir, paths) = test_paths();
        paths.ensure_directories().unwrap();
        std::fs::write(
            paths.config_file(),
            r#"{"monthly_budget": 100.0, "theme": "dark"}"#,
        )
        .unwrap();

        set_budget(&paths, "250").unwrap();

        let config = Config::load(&paths).unwrap();
        assert_eq!(config.monthly_budget, Some(250.0));
        assert_eq!(
            config.extra.get("theme"),
            Some(&serde_json::Value::String("dark".into()))
        );
    }
}
