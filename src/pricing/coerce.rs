//! Best-effort numeric coercion for form input.
//!
//! Text is parsed the way a browser's `parseFloat` reads it: leading whitespace
//! is skipped and the longest numeric prefix wins (`"3 un"` is `3`). Anything
//! that does not start with a number, or that overflows to infinity, becomes
//! zero. None of these functions fail.

/// Parses the numeric prefix of `input`, or `None` if there is none.
pub fn parse_number(input: &str) -> Option<f64> {
    let prefix = numeric_prefix(input.trim_start());
    if prefix.is_empty() {
        return None;
    }
    prefix.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Sign-preserving coercion: invalid input is `0.0`.
pub fn to_number_or_zero(input: &str) -> f64 {
    parse_number(input).unwrap_or(0.0)
}

/// Coercion used for quantities and prices: invalid or negative input is `0.0`.
pub fn to_non_negative_number_or_zero(input: &str) -> f64 {
    non_negative_or_zero(to_number_or_zero(input))
}

/// Same policy for values that are already numeric.
pub fn non_negative_or_zero(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

// [+-]? (digits [. digits?] | . digits) ([eE] [+-]? digits)?
fn numeric_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    let len = bytes.len();
    let mut i = 0;

    if i < len && (bytes[i] == b'+' || bytes[i] == b'-') {
        i += 1;
    }

    let int_start = i;
    while i < len && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let int_digits = i - int_start;

    let mut frac_digits = 0;
    if i < len && bytes[i] == b'.' {
        let dot = i;
        i += 1;
        let frac_start = i;
        while i < len && bytes[i].is_ascii_digit() {
            i += 1;
        }
        frac_digits = i - frac_start;
        if int_digits == 0 && frac_digits == 0 {
            i = dot;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return "";
    }

    if i < len && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < len && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < len && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    &s[..i]
}
