//! Formatting contexts.
//!
//! A context is what turns the bare substitution engine into a useful API:
//! it owns named variables and custom formatters, and lends both to the
//! engine through the [`Context`] capability trait. Three variants cover the
//! usual trade-offs:
//!
//! - [`StatelessContext`]: no state at all; backs the global
//!   [`format`](crate::format) entry point.
//! - [`LocalContext`]: plain maps, `&mut self` mutation, zero locking.
//!   Single ownership makes it safe; hand it to another thread by moving it.
//! - [`SharedContext`]: thread-safe, with a mutex-guarded shared tier and a
//!   lock-free per-thread overlay. See its docs for the exact routing rules.
//!
//! All variants expose the same formatting surface; only the mutation
//! surface differs (`&mut self` on [`LocalContext`], `&self` on
//! [`SharedContext`]).

mod local;
mod shared;
mod stateless;

pub use local::LocalContext;
pub use shared::{designate_owner_thread, SharedContext};
pub use stateless::StatelessContext;

use std::any::Any;

use microfmt_render::TemplateValue;

use crate::engine;
use crate::error::FormatError;

/// A type-erased custom formatter: registered per [`TypeId`](std::any::TypeId),
/// invoked with the value behind `&dyn Any`.
pub(crate) type Formatter = Box<dyn Fn(&dyn Any) -> String + Send + Sync>;

/// The capability surface the template engine needs from a context.
///
/// Implementations answer variable lookups and run custom formatters; the
/// provided [`format`](Context::format) and [`try_format`](Context::try_format)
/// methods drive the engine with `self` as the lookup source.
pub trait Context {
    /// True if a variable with this name is visible to the calling thread.
    fn has_var(&self, name: &str) -> bool;

    /// The variable's stored text, if visible to the calling thread.
    fn find_var(&self, name: &str) -> Option<String>;

    /// Runs the custom formatter registered for the value's type, if any.
    ///
    /// A registered formatter always wins over spec-driven rendering, so no
    /// spec is passed here.
    fn custom_text(&self, value: &dyn TemplateValue) -> Option<String>;

    /// Renders a template, degrading silently on unresolved placeholders.
    ///
    /// # Example
    ///
    /// ```rust
    /// use microfmt::{args, Context, LocalContext};
    ///
    /// let mut ctx = LocalContext::new();
    /// ctx.set_var("name", "Alice");
    /// let out = ctx.format("Hello {name}, {0} new", args![3]);
    /// assert_eq!(out, "Hello Alice, 3 new");
    /// ```
    fn format(&self, template: &str, args: &[&dyn TemplateValue]) -> String {
        engine::render(template, args, self).text
    }

    /// Renders a template, reporting the first tolerated degradation.
    ///
    /// The output text is identical to [`format`](Context::format); strict
    /// mode only changes what happens to the issues the engine recorded.
    ///
    /// # Errors
    ///
    /// The first [`FormatError`] in scan order, if any placeholder failed to
    /// resolve.
    fn try_format(
        &self,
        template: &str,
        args: &[&dyn TemplateValue],
    ) -> Result<String, FormatError> {
        let rendered = engine::render(template, args, self);
        match rendered.issues.into_iter().next() {
            Some(issue) => Err(issue),
            None => Ok(rendered.text),
        }
    }
}
