//! Service layer for the utilisation table
//!
//! The service layer turns loaded roster records into the finished table:
//! value resolution, row transformation, and the load-once table itself.

pub mod resolve;
pub mod table;
pub mod transform;

pub use resolve::{resolve_numeric, resolve_text, SENTINEL};
pub use table::UtilisationTable;
pub use transform::{
    last_month_income, transform, transform_record, HOURS_PER_MONTH, MISSING_NAME,
};
