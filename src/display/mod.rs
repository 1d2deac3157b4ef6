//! Display formatting for terminal output
//!
//! Provides table rendering of the finished utilisation rows.

pub mod table;

pub use table::{format_rows, format_summary, format_table};
