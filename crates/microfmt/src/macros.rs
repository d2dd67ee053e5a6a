//! Variadic convenience macros.
//!
//! The engine takes positional arguments as `&[&dyn TemplateValue]`;
//! [`args!`] builds that slice from a comma list, and [`fmt!`] couples it
//! with the global [`format`](crate::format) entry point.

/// Builds a `&[&dyn TemplateValue]` argument pack from a comma list.
///
/// The pack borrows a temporary, so use it inline in the formatting call
/// rather than binding it to a variable.
///
/// # Example
///
/// ```rust
/// use microfmt::{args, Context, LocalContext};
///
/// let mut ctx = LocalContext::new();
/// ctx.set_var("name", "Alice");
/// let out = ctx.format("{name} scored {0:.1f} on try {1}", args![87.543, 2]);
/// assert_eq!(out, "Alice scored 87.5 on try 2");
/// ```
#[macro_export]
macro_rules! args {
    ($($value:expr),* $(,)?) => {
        &[$(&$value as &dyn $crate::TemplateValue),*]
            as &[&dyn $crate::TemplateValue]
    };
}

/// Formats a template with positional arguments through the global,
/// zero-configuration entry point.
///
/// Sugar for `format(template, args![...])`. Named placeholders have no
/// context here and stay verbatim; use a context for those.
///
/// # Example
///
/// ```rust
/// use microfmt::fmt;
///
/// let msg = fmt!("User {0} has {1} messages", "Alice", 5);
/// assert_eq!(msg, "User Alice has 5 messages");
///
/// assert_eq!(fmt!("Pi = {0:.3f}", 3.14159), "Pi = 3.142");
/// assert_eq!(fmt!("Hex: 0x{0:x}", 255), "Hex: 0xff");
/// assert_eq!(fmt!("ID: {0:08d}", 42), "ID: 00000042");
/// ```
#[macro_export]
macro_rules! fmt {
    ($template:expr $(, $arg:expr)* $(,)?) => {
        $crate::format($template, $crate::args![$($arg),*])
    };
}
