//! The expense record
//!
//! One row of the expense file. Records are created once and never mutated;
//! the store has no update or delete operation.

use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::ids::ExpenseId;

/// Category applied when the user leaves the field blank
pub const DEFAULT_CATEGORY: &str = "other";

/// Currency applied when the user leaves the field blank
pub const DEFAULT_CURRENCY: &str = "INR";

/// A record's date column
///
/// Dates normally parse as `YYYY-MM-DD`. A store written by hand (or by an
/// older tool) can carry dates this tool cannot parse; those are kept as raw
/// strings rather than rejecting the whole file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateField {
    /// A well-formed calendar date
    Parsed(NaiveDate),
    /// Fallback for a date value that failed structured parsing
    Raw(String),
}

impl DateField {
    /// Parse a `YYYY-MM-DD` string, falling back to `Raw` on failure
    pub fn parse_lossy(s: &str) -> Self {
        match NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            Ok(date) => Self::Parsed(date),
            Err(_) => Self::Raw(s.to_string()),
        }
    }

    /// The calendar date, if this field parsed
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Parsed(date) => Some(*date),
            Self::Raw(_) => None,
        }
    }
}

impl fmt::Display for DateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parsed(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            Self::Raw(s) => write!(f, "{}", s),
        }
    }
}

impl Ord for DateField {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Parsed(a), Self::Parsed(b)) => a.cmp(b),
            // Raw dates sort before any parsed date so they land at the
            // bottom of newest-first listings.
            (Self::Raw(_), Self::Parsed(_)) => Ordering::Less,
            (Self::Parsed(_), Self::Raw(_)) => Ordering::Greater,
            (Self::Raw(a), Self::Raw(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for DateField {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<NaiveDate> for DateField {
    fn from(date: NaiveDate) -> Self {
        Self::Parsed(date)
    }
}

impl Serialize for DateField {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DateField {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::parse_lossy(&s))
    }
}

/// One expense record, matching the file columns exactly
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Short opaque identifier, generated at creation
    pub id: ExpenseId,

    /// Calendar date of the expense
    pub date: DateField,

    /// Free-form category (e.g. food, rent, travel)
    pub category: String,

    /// Amount spent; no sign constraint is enforced
    pub amount: f64,

    /// Currency label, not validated against any code list
    pub currency: String,

    /// Optional free-form note
    #[serde(default)]
    pub notes: String,
}

impl Expense {
    /// Create a new expense with a fresh ID, applying field defaults
    ///
    /// Blank category and currency fall back to [`DEFAULT_CATEGORY`] and
    /// [`DEFAULT_CURRENCY`].
    pub fn new(
        date: NaiveDate,
        category: &str,
        amount: f64,
        currency: &str,
        notes: &str,
    ) -> Self {
        let category = if category.trim().is_empty() {
            DEFAULT_CATEGORY.to_string()
        } else {
            category.trim().to_string()
        };
        let currency = if currency.trim().is_empty() {
            DEFAULT_CURRENCY.to_string()
        } else {
            currency.trim().to_string()
        };

        Self {
            id: ExpenseId::new(),
            date: DateField::Parsed(date),
            category,
            amount,
            currency,
            notes: notes.trim().to_string(),
        }
    }
}
