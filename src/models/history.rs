//! Three-month utilisation history
//!
//! The roster lists the last three reported months most recent first. The
//! table labels them June, July and August, so position 0 is August and
//! position 2 is June.

use crate::error::{UtilisationError, UtilisationResult};

use super::source::MonthlyUtilisation;

/// Validated view of a month history, keyed by the months it is shown as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthHistory<'a> {
    pub august: Option<&'a str>,
    pub july: Option<&'a str>,
    pub june: Option<&'a str>,
}

impl<'a> MonthHistory<'a> {
    /// Build a history from raw entries, most recent first
    ///
    /// Entries beyond the third are ignored.
    ///
    /// # Errors
    ///
    /// Returns `UtilisationError::MonthHistory` when fewer than three entries
    /// are present.
    pub fn from_entries(
        person: &str,
        entries: &'a [MonthlyUtilisation],
    ) -> UtilisationResult<Self> {
        match entries {
            [latest, middle, oldest, ..] => Ok(Self {
                august: latest.utilisation_rate.as_deref(),
                july: middle.utilisation_rate.as_deref(),
                june: oldest.utilisation_rate.as_deref(),
            }),
            _ => Err(UtilisationError::month_history(person, entries.len())),
        }
    }

    /// Check if every month carries a usable (non-empty) rate
    pub fn is_complete(&self) -> bool {
        [self.august, self.july, self.june]
            .iter()
            .all(|rate| rate.is_some_and(|r| !r.is_empty()))
    }
}
