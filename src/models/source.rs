//! Source roster records
//!
//! One record per person or team, as delivered by the HR export. People carry
//! their data under either `employees` or `externals`; team aggregates carry a
//! `teams` key and are never shown in the per-person table.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A single entry of the roster dataset
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceRecord {
    /// Team aggregate marker; any present value, `null` included, counts
    #[serde(default, deserialize_with = "present_value")]
    pub teams: Option<Value>,

    /// Internal employee data
    #[serde(default)]
    pub employees: Option<PersonDetails>,

    /// External contractor data
    #[serde(default)]
    pub externals: Option<PersonDetails>,
}

impl SourceRecord {
    /// Check if this record is a team aggregate rather than a person
    pub fn is_team(&self) -> bool {
        self.teams.is_some()
    }
}

/// Person data shared by employees and externals
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonDetails {
    #[serde(default)]
    pub name: Option<String>,

    /// Hourly rate billed on projects, as text
    #[serde(default, deserialize_with = "numeric_text")]
    pub hourly_rate_for_projects: Option<String>,

    #[serde(default)]
    pub workforce_utilisation: Option<WorkforceUtilisation>,
}

impl PersonDetails {
    /// Month history entries, if the record has any
    pub fn month_entries(&self) -> Option<&[MonthlyUtilisation]> {
        self.workforce_utilisation
            .as_ref()
            .and_then(|w| w.last_three_months_individually.as_deref())
    }
}

/// Utilisation figures of one person, all fractions encoded as text
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkforceUtilisation {
    #[serde(default, deserialize_with = "numeric_text")]
    pub utilisation_rate_last_twelve_months: Option<String>,

    #[serde(default, deserialize_with = "numeric_text")]
    pub utilisation_rate_year_to_date: Option<String>,

    /// Most recent month first
    #[serde(default)]
    pub last_three_months_individually: Option<Vec<MonthlyUtilisation>>,
}

/// Utilisation of a single reported month
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyUtilisation {
    #[serde(default, deserialize_with = "numeric_text")]
    pub utilisation_rate: Option<String>,
}

/// Keep `null` distinguishable from an absent key
fn present_value<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Accept numeric fields encoded either as strings or as JSON numbers
fn numeric_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        // Booleans, arrays and objects are kept as text and fail to parse later
        other => Some(other.to_string()),
    })
}
