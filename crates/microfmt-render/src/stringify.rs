//! Default stringification.
//!
//! When a placeholder carries no format spec and no custom formatter is
//! registered, a value's text comes from here. The built-in conversions are
//! deliberately boring: booleans become `true`/`false`, integers their
//! minimal base-10 digits, floats a fixed-point form with six fractional
//! digits, chars a one-character string, and string-likes themselves.
//!
//! For everything else, [`display_text`] is the single conversion hook: it
//! delegates to [`std::fmt::Display`], which is the pluggable "universal
//! to-string" service in Rust — wired up per type at compile time, usually
//! through the [`impl_template_value!`](crate::impl_template_value) macro.
//! Types with no meaningful text form can use [`opaque_text`], which renders
//! the type name only. It is deterministic across runs and platforms by
//! construction; it never leaks addresses or other process state.

use std::fmt;

/// The universal conversion hook: any `Display` type to its text form.
pub fn display_text<T: fmt::Display + ?Sized>(value: &T) -> String {
    value.to_string()
}

/// Deterministic fallback text for a type with no text form: the type name
/// in angle brackets.
///
/// # Example
///
/// ```rust
/// struct Opaque;
/// assert_eq!(microfmt_render::stringify::opaque_text::<Opaque>(), "<Opaque>");
/// ```
pub fn opaque_text<T: ?Sized>() -> String {
    let name = std::any::type_name::<T>();
    // type_name may qualify with the module path; keep the final segment.
    let short = name.rsplit("::").next().unwrap_or(name);
    format!("<{short}>")
}

/// Default float text: fixed-point with six fractional digits.
pub fn float_text(value: f64) -> String {
    if value.is_finite() {
        format!("{value:.6}")
    } else {
        format!("{value}")
    }
}

/// Default bool text.
pub fn bool_text(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
