//! Roster record to table row transformation
//!
//! Turns person records into display rows: team aggregates are dropped, each
//! value is resolved employee-first, fractions become percentage strings and
//! the previous month's earnings are estimated from the latest utilisation.

use crate::error::UtilisationResult;
use crate::models::{
    format_euros, format_percentage, MonthHistory, PersonDetails, SourceRecord, TableRow,
    WorkforceUtilisation,
};

use super::resolve::{resolve_numeric, SENTINEL};

/// Working hours assumed for a fully utilised month
pub const HOURS_PER_MONTH: f64 = 160.0;

/// Person name shown when neither source carries one
pub const MISSING_NAME: &str = "undefined";

/// Transform roster records into table rows
///
/// Team records are skipped; every other record yields exactly one row, in
/// input order.
///
/// # Errors
///
/// Returns `UtilisationError::MonthHistory` if a consulted month history has
/// fewer than three entries. No partial result is returned.
pub fn transform(records: &[SourceRecord]) -> UtilisationResult<Vec<TableRow>> {
    records
        .iter()
        .filter(|record| !record.is_team())
        .map(transform_record)
        .collect()
}

/// Transform a single person record into a table row
pub fn transform_record(record: &SourceRecord) -> UtilisationResult<TableRow> {
    let employees = record.employees.as_ref();
    let externals = record.externals.as_ref();

    // Names only fall back when absent; an empty employee name is kept
    let name = employees
        .and_then(|p| p.name.as_deref())
        .or_else(|| externals.and_then(|p| p.name.as_deref()))
        .unwrap_or(MISSING_NAME);

    let primary = utilisation(employees);
    let secondary = utilisation(externals);

    let past_12_months = resolve_numeric(
        primary.and_then(|u| u.utilisation_rate_last_twelve_months.as_deref()),
        secondary.and_then(|u| u.utilisation_rate_last_twelve_months.as_deref()),
        SENTINEL,
    );
    let year_to_date = resolve_numeric(
        primary.and_then(|u| u.utilisation_rate_year_to_date.as_deref()),
        secondary.and_then(|u| u.utilisation_rate_year_to_date.as_deref()),
        SENTINEL,
    );

    // The external history is only consulted when the employee one has gaps
    let primary_history = month_history(employees, name)?;
    let secondary_history = if primary_history.map_or(true, |h| !h.is_complete()) {
        month_history(externals, name)?
    } else {
        None
    };

    let june = resolve_numeric(
        primary_history.and_then(|h| h.june),
        secondary_history.and_then(|h| h.june),
        SENTINEL,
    );
    let july = resolve_numeric(
        primary_history.and_then(|h| h.july),
        secondary_history.and_then(|h| h.july),
        SENTINEL,
    );
    let august = resolve_numeric(
        primary_history.and_then(|h| h.august),
        secondary_history.and_then(|h| h.august),
        SENTINEL,
    );

    let hourly_rate = resolve_numeric(
        employees.and_then(|p| p.hourly_rate_for_projects.as_deref()),
        externals.and_then(|p| p.hourly_rate_for_projects.as_deref()),
        SENTINEL,
    );

    Ok(TableRow {
        person: format!("{} ", name),
        past12_months: format_percentage(past_12_months),
        y2d: format_percentage(year_to_date),
        june: format_percentage(june),
        july: format_percentage(july),
        august: format_percentage(august),
        net_earnings_prev_month: format_euros(last_month_income(hourly_rate, august)),
    })
}

/// Estimate last month's earnings from the hourly rate and utilisation
///
/// Unlike the percentage columns, a NaN result is reported as zero.
pub fn last_month_income(hourly_rate: f64, utilisation: f64) -> f64 {
    let worked_hours = HOURS_PER_MONTH * utilisation;
    let income = worked_hours * hourly_rate;
    if income.is_nan() {
        0.0
    } else {
        income
    }
}

fn utilisation(details: Option<&PersonDetails>) -> Option<&WorkforceUtilisation> {
    details.and_then(|p| p.workforce_utilisation.as_ref())
}

fn month_history<'a>(
    details: Option<&'a PersonDetails>,
    person: &str,
) -> UtilisationResult<Option<MonthHistory<'a>>> {
    details
        .and_then(PersonDetails::month_entries)
        .map(|entries| MonthHistory::from_entries(person, entries))
        .transpose()
}
