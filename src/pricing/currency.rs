//! Brazilian real formatting (`R$ 1,234.50`) for amounts and typed input.

use super::coerce::to_number_or_zero;

const CURRENCY_PREFIX: &str = "R$ ";

/// Renders `amount` as `R$ 1,234.50`.
///
/// Two decimals always, `,` groups thousands. Non-finite amounts render as the
/// zero amount.
pub fn format_currency(amount: f64) -> String {
    format!("{CURRENCY_PREFIX}{}", format_grouped(amount))
}

/// Formats raw form text, coercing anything unparseable to zero.
pub fn format_currency_input(raw: &str) -> String {
    format_currency(to_number_or_zero(raw))
}

/// Two-decimal amount without symbol or grouping, as shown in report tables.
pub fn format_amount(amount: f64) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let fixed = format!("{amount:.2}");
    if fixed == "-0.00" {
        "0.00".to_string()
    } else {
        fixed
    }
}

fn format_grouped(amount: f64) -> String {
    let fixed = format_amount(amount);
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}{grouped}.{frac_part}")
}
