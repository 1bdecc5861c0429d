//! # waypost-reports
//!
//! Client-side report generation over already-fetched rows.
//!
//! Both renderers are pure functions from normalized rows to document
//! bytes: they never fetch, validate, or mutate data. The caller supplies
//! a report-type label (the title derives from it) and the date range.
//!
//! - [`render_pdf`] — landscape A4 with the company letterhead, a tabular
//!   body, and a trailing two-decimal total row
//! - [`render_xlsx`] — the same logical content as a styled worksheet,
//!   returned as an `.xlsx` buffer
//! - [`report_filename`] — timestamp-suffixed download name

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod error;
mod pdf;
mod row;
mod xlsx;

pub use error::{Error, Result};
pub use pdf::render_pdf;
pub use row::{format_amount, report_filename, total, Letterhead, Period, ReportRow};
pub use xlsx::render_xlsx;
