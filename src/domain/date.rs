//! Calendar dates as the date inputs store them: `YYYY-MM-DD`, sometimes with
//! a trailing time component.

use chrono::NaiveDate;

pub const STORED_FORMAT: &str = "%Y-%m-%d";
pub const DISPLAY_FORMAT: &str = "%d/%m/%Y";

/// Parses the date part of a stored value; `None` when it is not a real date.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let day = raw.trim().split('T').next().unwrap_or_default();
    NaiveDate::parse_from_str(day, STORED_FORMAT).ok()
}

pub(crate) fn iso_date(value: &str, _ctx: &()) -> garde::Result {
    match parse_date(value) {
        Some(_) => Ok(()),
        None => Err(garde::Error::new("must be a valid date (YYYY-MM-DD)")),
    }
}

pub(crate) fn iso_date_opt(value: &Option<String>, ctx: &()) -> garde::Result {
    match value {
        Some(v) => iso_date(v, ctx),
        None => Ok(()),
    }
}
