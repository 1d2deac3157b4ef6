//! Display-ready table rows
//!
//! Every field is already a formatted string; consumers only lay them out.

use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// One row of the utilisation table, one per person
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Tabled)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    /// Display name followed by a single trailing space
    #[tabled(rename = "Person")]
    pub person: String,

    #[tabled(rename = "Past 12 Months")]
    pub past12_months: String,

    #[tabled(rename = "Y2D")]
    pub y2d: String,

    #[tabled(rename = "June")]
    pub june: String,

    #[tabled(rename = "July")]
    pub july: String,

    #[tabled(rename = "August")]
    pub august: String,

    #[tabled(rename = "Net Earnings Prev Month")]
    pub net_earnings_prev_month: String,
}

/// Column layout of the table: accessor key and header, in display order
pub const COLUMNS: [(&str, &str); 7] = [
    ("person", "Person"),
    ("past12Months", "Past 12 Months"),
    ("y2d", "Y2D"),
    ("june", "June"),
    ("july", "July"),
    ("august", "August"),
    ("netEarningsPrevMonth", "Net Earnings Prev Month"),
];

impl TableRow {
    /// Cell values in column order
    pub fn cells(&self) -> [&str; 7] {
        [
            self.person.as_str(),
            self.past12_months.as_str(),
            self.y2d.as_str(),
            self.june.as_str(),
            self.july.as_str(),
            self.august.as_str(),
            self.net_earnings_prev_month.as_str(),
        ]
    }
}

/// Column headers in display order
pub fn headers() -> [&'static str; 7] {
    COLUMNS.map(|(_, header)| header)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> TableRow {
        TableRow {
            person: "Erika Mustermann ".into(),
            past12_months: "80 %".into(),
            y2d: "75 %".into(),
            june: "60 %".into(),
            july: "70 %".into(),
            august: "90 %".into(),
            net_earnings_prev_month: "13.751,99\u{a0}€".into(),
        }
    }

    #[test]
    fn test_serialized_keys_match_accessors() {
        let value = serde_json::to_value(sample_row()).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), COLUMNS.len());
        for (key, _) in COLUMNS {
            assert!(object.contains_key(key), "missing key {}", key);
        }
    }

    #[test]
    fn test_tabled_headers_match_columns() {
        let tabled_headers: Vec<String> = TableRow::headers()
            .into_iter()
            .map(|h| h.to_string())
            .collect();
        assert_eq!(tabled_headers, headers());
    }

    #[test]
    fn test_cells_in_column_order() {
        let row = sample_row();
        let cells = row.cells();
        assert_eq!(cells[0], "Erika Mustermann ");
        assert_eq!(cells[6], "13.751,99\u{a0}€");
    }
}
