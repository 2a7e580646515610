//! spendlog - Tiny terminal expense tracker
//!
//! This library provides the core functionality for spendlog, a small
//! single-user expense tracker. Expenses live in a flat CSV file; a JSON
//! config document holds an optional monthly budget. Two front-ends consume
//! the same data: a clap-based CLI and a ratatui dashboard.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and the budget config document
//! - `error`: Custom error types
//! - `models`: Core data models (expense records and their IDs)
//! - `storage`: CSV file storage layer
//! - `report`: Pure aggregation (range resolution, grouping, projection)
//! - `display`: Terminal formatting for the CLI
//! - `cli`: CLI command handlers
//! - `tui`: Interactive form/dashboard

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod report;
pub mod storage;
pub mod tui;

pub use error::{ExpenseError, ExpenseResult};
