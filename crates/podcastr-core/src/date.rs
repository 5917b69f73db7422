//! Header date formatting.
//!
//! Dates are rendered in Brazilian Portuguese as
//! `"<weekday-abbr>, <day> <month>"`, e.g. `"qui, 22 abril"`. The value is
//! computed on demand; callers refresh it by calling again.

#![allow(clippy::unwrap_used)] // Tests use unwrap for brevity

use chrono::{Local, Locale, NaiveDate, NaiveTime};

/// strftime pattern used for the header date.
pub const HEADER_DATE_FORMAT: &str = "%a, %-d %B";

/// Locale the header date is rendered in.
pub const HEADER_LOCALE: Locale = Locale::pt_BR;

/// Format a calendar date for the header.
pub fn format_date(date: NaiveDate) -> String {
    date.and_time(NaiveTime::MIN)
        .and_utc()
        .format_localized(HEADER_DATE_FORMAT, HEADER_LOCALE)
        .to_string()
}

/// Format today's local date for the header.
pub fn today() -> String {
    format_date(Local::now().date_naive())
}
