//! Business records as they are stored in their collections.
//!
//! Field names on the wire are the Portuguese keys the web screens write, so
//! existing exports load unchanged. Keys a record type does not model are
//! kept in its `extra` map and saved back as they were.

pub mod customer;
pub mod date;
pub mod employee;
pub mod numeric;
pub mod order;
pub mod product;
pub mod supplier;

pub use customer::*;
pub use employee::*;
pub use order::*;
pub use product::*;
pub use supplier::*;

/// Flattens a validation report into one line, `field: message; ...`.
pub fn describe_report(report: &garde::Report) -> String {
    report
        .iter()
        .map(|(path, error)| {
            let field = path.to_string();
            if field.is_empty() {
                error.message().to_string()
            } else {
                format!("{field}: {}", error.message())
            }
        })
        .collect::<Vec<_>>()
        .join("; ")
}

pub(crate) fn positive(value: &f64, _ctx: &()) -> garde::Result {
    if value.is_finite() && *value > 0.0 {
        Ok(())
    } else {
        Err(garde::Error::new("must be a positive amount"))
    }
}

pub(crate) fn positive_opt(value: &Option<f64>, ctx: &()) -> garde::Result {
    match value {
        Some(v) => positive(v, ctx),
        None => Ok(()),
    }
}
