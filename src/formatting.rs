//! Display masks used by the list screens. Input that does not fit a mask is
//! returned unchanged.

use crate::domain::date::{parse_date, DISPLAY_FORMAT};

fn digits_only(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) {
        Some(trimmed)
    } else {
        None
    }
}

/// Brazilian phone mask: `(61) 98765-4321`, `(61) 3333-4444`, `98765-4321`
/// or `3333-4444`, depending on the number of digits.
pub fn format_phone(raw: &str) -> String {
    let Some(d) = digits_only(raw) else {
        return raw.to_string();
    };
    match d.len() {
        11 => format!("({}) {}-{}", &d[..2], &d[2..7], &d[7..]),
        10 => format!("({}) {}-{}", &d[..2], &d[2..6], &d[6..]),
        9 => format!("{}-{}", &d[..5], &d[5..]),
        8 => format!("{}-{}", &d[..4], &d[4..]),
        _ => raw.to_string(),
    }
}

/// `12345678000190` → `12.345.678/0001-90`.
pub fn format_cnpj(raw: &str) -> String {
    match digits_only(raw) {
        Some(d) if d.len() == 14 => {
            format!("{}.{}.{}/{}-{}", &d[..2], &d[2..5], &d[5..8], &d[8..12], &d[12..])
        }
        _ => raw.to_string(),
    }
}

/// `YYYY-MM-DD` → `DD/MM/YYYY`. Text that is not a real date is returned as is.
pub fn format_date_br(raw: &str) -> String {
    match parse_date(raw) {
        Some(date) => date.format(DISPLAY_FORMAT).to_string(),
        None => raw.to_string(),
    }
}
