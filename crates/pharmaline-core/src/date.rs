//! Publication date normalization
//!
//! Source files mix several date spellings; everything is collapsed to a
//! single `NaiveDate` before it reaches the graph.

use chrono::NaiveDate;

/// Accepted input formats, probed in order.
///
/// `%d %B %Y` covers spellings like "1 January 2020".
const FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y", "%d %B %Y"];

/// Parse a date in any accepted format.
///
/// Returns `None` for anything that matches no format; callers treat that
/// row as malformed rather than failing the run.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}
