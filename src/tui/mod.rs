//! Interactive form/dashboard
//!
//! A two-panel ratatui interface over the same expense file as the CLI: an
//! entry form on the left, an overview (table, category bars, total spent)
//! on the right.
//!
//! The dashboard intentionally has no budget feature; budgets are only
//! surfaced by the `summary` command.

pub mod app;
pub mod event;
pub mod form;
pub mod handler;
pub mod terminal;
pub mod views;
pub mod widgets;

pub use app::App;
pub use terminal::run_tui;
