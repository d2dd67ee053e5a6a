//! Spec application for already-stringified values.
//!
//! Named variables are stored as text, so by the time a `{name:spec}`
//! placeholder is resolved the original value is gone. [`apply_format`]
//! recovers what it can: a numeric type char re-parses the stored text as a
//! number and runs it through the numeric renderers; anything else — or a
//! failed parse — falls back to plain string formatting with the full spec.

use crate::spec::{self, SpecParts};
use crate::{number, text};

/// Applies a format spec to a stored string value.
///
/// # Example
///
/// ```rust
/// use microfmt_render::apply_format;
///
/// // Numeric type chars re-parse the stored text.
/// assert_eq!(apply_format("3.14159265", ".2f"), "3.14");
/// assert_eq!(apply_format("255", "X"), "FF");
/// assert_eq!(apply_format("42", "08d"), "00000042");
///
/// // Everything else is string formatting.
/// assert_eq!(apply_format("Alice", "-10"), "Alice     ");
///
/// // A failed parse degrades to string formatting too: ".3" truncates,
/// // "8" pads.
/// assert_eq!(apply_format("not a number", "8.3f"), "     not");
/// ```
pub fn apply_format(value: &str, format_spec: &str) -> String {
    if format_spec.is_empty() {
        return value.to_string();
    }

    let parts = SpecParts::split(format_spec);
    match parts.type_char {
        Some(c) if spec::is_float_type(c) => match value.trim().parse::<f64>() {
            Ok(number) => number::render_float(number, format_spec),
            Err(_) => text::apply_text_format(value, format_spec),
        },
        Some(c) if spec::is_integer_type(c) => match value.trim().parse::<i64>() {
            Ok(number) => number::render_integer(number, format_spec),
            Err(_) => text::apply_text_format(value, format_spec),
        },
        _ => text::apply_text_format(value, format_spec),
    }
}
