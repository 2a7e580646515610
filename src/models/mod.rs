//! Core data models for spendlog

pub mod expense;
pub mod ids;

pub use expense::{DateField, Expense};
pub use ids::ExpenseId;
