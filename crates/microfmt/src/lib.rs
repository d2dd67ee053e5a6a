//! # microfmt — lightweight runtime string templating
//!
//! microfmt substitutes positional (`{0}`) and named (`{name}`) placeholders
//! in a template at runtime, with printf-style format specs (`{0:.2f}`,
//! `{count:08d}`, `{name:-10}`) and pluggable per-type formatters. It is the
//! runtime cousin of `format!`: the template is data, not syntax, so it can
//! come from configuration, user input, or anywhere else.
//!
//! Substitution never fails. A placeholder that cannot be resolved — unknown
//! name, missing argument, no closing brace — stays in the output verbatim,
//! and malformed format specs degrade to the nearest sensible rendering. An
//! opt-in strict surface ([`try_format`], [`Context::try_format`]) reports
//! what the default path silently tolerated.
//!
//! ## Quick start
//!
//! ```rust
//! use microfmt::fmt;
//!
//! // Zero-configuration positional formatting.
//! let msg = fmt!("User {0} has {1} messages", "Alice", 5);
//! assert_eq!(msg, "User Alice has 5 messages");
//!
//! // printf-style specs.
//! assert_eq!(fmt!("Pi = {0:.3f}", 3.14159), "Pi = 3.142");
//! assert_eq!(fmt!("Hex: 0x{0:x}", 255), "Hex: 0xff");
//! assert_eq!(fmt!("ID: {0:08d}", 42), "ID: 00000042");
//! ```
//!
//! ## Contexts
//!
//! Named placeholders resolve through a context, which also hosts custom
//! per-type formatters:
//!
//! ```rust
//! use microfmt::{args, Context, LocalContext};
//!
//! let mut ctx = LocalContext::new();
//! ctx.set_var("name", "Bob");
//! ctx.set_formatter::<bool>(|b| if *b { "YES".into() } else { "NO".into() });
//!
//! let out = ctx.format("Hello {name}, active: {0}", args![true]);
//! assert_eq!(out, "Hello Bob, active: YES");
//! ```
//!
//! [`LocalContext`] is the single-owner, zero-locking variant.
//! [`SharedContext`] is thread-safe, with a shared tier plus transparent
//! per-thread overlays, and the process-wide registry hands out named
//! instances:
//!
//! ```rust
//! use microfmt::{shared_context, Context};
//!
//! let ctx = shared_context("app");
//! ctx.set_var("user", "Adam");
//! assert_eq!(ctx.format("User: {user}", &[]), "User: Adam");
//! # microfmt::remove_context("app");
//! ```
//!
//! ## Custom value types
//!
//! Anything implementing [`TemplateValue`] can be a positional argument;
//! for `Display` types the
//! [`impl_template_value!`](microfmt_render::impl_template_value) macro
//! writes the impl.

mod context;
mod engine;
mod error;
mod macros;
mod registry;

pub use microfmt_render::{
    apply_format, apply_text_format, format_float, format_integer, impl_template_value, pad_text,
    render_char, render_float, render_integer, stringify, Alignment, SpecParts, TemplateValue,
};

pub use context::{
    designate_owner_thread, Context, LocalContext, SharedContext, StatelessContext,
};
pub use error::FormatError;
pub use registry::{clear_contexts, remove_context, shared_context};

/// Formats a template with positional arguments and no named variables.
///
/// This is the zero-configuration entry point, backed by a
/// [`StatelessContext`]; named placeholders always stay verbatim. The
/// [`fmt!`] macro is the variadic sugar over it.
///
/// # Example
///
/// ```rust
/// use microfmt::{args, format};
///
/// let out = format("{0} + {0} = {1}", args![2, 4]);
/// assert_eq!(out, "2 + 2 = 4");
/// ```
pub fn format(template: &str, args: &[&dyn TemplateValue]) -> String {
    Context::format(&StatelessContext, template, args)
}

/// Strict variant of [`format`]: reports the first placeholder the engine
/// had to leave unresolved.
///
/// # Errors
///
/// The first [`FormatError`] in scan order, if any.
///
/// # Example
///
/// ```rust
/// use microfmt::{args, try_format, FormatError};
///
/// assert_eq!(try_format("{0}", args![1]).unwrap(), "1");
///
/// let err = try_format("{0} and {1}", args![1]).unwrap_err();
/// assert_eq!(err, FormatError::MissingArgument { index: 1, supplied: 1 });
/// ```
pub fn try_format(
    template: &str,
    args: &[&dyn TemplateValue],
) -> Result<String, FormatError> {
    Context::try_format(&StatelessContext, template, args)
}
