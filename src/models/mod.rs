//! Core data models for the utilisation table
//!
//! This module contains the roster input records, the display rows derived
//! from them, and the number and money formatting shared by both.

pub mod history;
pub mod money;
pub mod number;
pub mod row;
pub mod source;

pub use history::MonthHistory;
pub use money::{format_euros, Money};
pub use number::{format_number, format_percentage, parse_float};
pub use row::{TableRow, COLUMNS};
pub use source::{MonthlyUtilisation, PersonDetails, SourceRecord, WorkforceUtilisation};
