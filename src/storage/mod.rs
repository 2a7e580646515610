//! CSV file storage layer
//!
//! The whole store is one flat comma-separated file with a fixed header.
//! Every operation reads the full file and, for writes, rewrites it in
//! place. There is no locking and no atomicity; simultaneous writers can
//! lose data, which is an accepted constraint of the single-user design.

pub mod expenses;

pub use expenses::ExpenseStore;
