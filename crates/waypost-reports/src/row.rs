//! Report rows and shared report metadata.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One line of a tabular report (a charge or booking-order line item).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRow {
    /// Document date.
    pub date: NaiveDate,

    /// Reference or receipt number.
    pub reference: String,

    /// Customer or vendor the line belongs to.
    pub party: String,

    /// Free-text description of the line.
    pub detail: String,

    /// Line amount.
    pub amount: f64,
}

/// The date range a report covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    /// First day covered, inclusive.
    pub from: NaiveDate,

    /// Last day covered, inclusive.
    pub to: NaiveDate,
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} to {}",
            self.from.format("%d %b %Y"),
            self.to.format("%d %b %Y")
        )
    }
}

/// Fixed letterhead printed at the top of every report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Letterhead {
    /// Company name.
    pub company: String,

    /// Postal address, single line.
    pub address: String,

    /// Contact phone number.
    pub phone: String,
}

impl Default for Letterhead {
    fn default() -> Self {
        Self {
            company: "Waypost Freight Lines".to_string(),
            address: "Plot 17, Transport Avenue, Port District".to_string(),
            phone: "+92 21 111 929 929".to_string(),
        }
    }
}

/// Column headers shared by both renderers.
pub(crate) const COLUMNS: [&str; 5] = ["Date", "Ref No", "Party", "Description", "Amount"];

/// Sum of the amount column across all rows.
pub fn total(rows: &[ReportRow]) -> f64 {
    rows.iter().map(|row| row.amount).sum()
}

/// Formats an amount with two decimal places for display cells.
pub fn format_amount(amount: f64) -> String {
    format!("{amount:.2}")
}

/// Builds the timestamp-suffixed download filename for a report.
///
/// The label is lowercased and spaces become dashes:
/// `report_filename("Charges", "xlsx", at)` yields something like
/// `charges-report-20260806-143000.xlsx`.
pub fn report_filename(label: &str, extension: &str, at: DateTime<Utc>) -> String {
    let slug: String = label
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| if c.is_whitespace() { '-' } else { c })
        .collect();
    format!("{slug}-report-{}.{extension}", at.format("%Y%m%d-%H%M%S"))
}
