//! Workforce utilisation table
//!
//! This library turns a roster of employees and external contractors into a
//! flat, display-ready table of utilisation percentages and last month's
//! estimated earnings.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Roster records, table rows, number and money formatting
//! - `storage`: JSON dataset loading and settings persistence
//! - `services`: Row transformation and the load-once table
//! - `display`: Terminal rendering
//! - `export`: CSV, JSON and YAML export
//! - `cli`: Command handlers for the `utilisation` binary
//! - `logging`: Tracing subscriber setup
//!
//! # Example
//!
//! ```rust,ignore
//! use utilisation::services::UtilisationTable;
//!
//! let table = UtilisationTable::from_file("source-data.json")?;
//! for row in &table {
//!     println!("{} {}", row.person, row.net_earnings_prev_month);
//! }
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{UtilisationError, UtilisationResult};
pub use models::{SourceRecord, TableRow};
pub use services::{transform, UtilisationTable};
