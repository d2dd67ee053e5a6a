//! The single-owner context.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;

use microfmt_render::TemplateValue;

use super::{Context, Formatter};

/// A context backed by plain maps, with no locking anywhere.
///
/// Mutation goes through `&mut self`, so the borrow checker enforces the
/// single-owner discipline the design asks for; move the context (or wrap it
/// in your own synchronization) to use it elsewhere. For cross-thread
/// sharing use [`SharedContext`](super::SharedContext) instead.
///
/// # Example
///
/// ```rust
/// use microfmt::{args, Context, LocalContext};
///
/// let mut ctx = LocalContext::new();
/// ctx.set_var("name", "Bob");
/// ctx.set_formatter::<bool>(|b| if *b { "YES".into() } else { "NO".into() });
///
/// let out = ctx.format("Hello {name}, active: {0}", args![true]);
/// assert_eq!(out, "Hello Bob, active: YES");
/// ```
#[derive(Default)]
pub struct LocalContext {
    variables: HashMap<String, String>,
    formatters: HashMap<TypeId, Formatter>,
}

impl LocalContext {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a variable as text. Setting replaces any previous value.
    pub fn set_var(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.variables.insert(name.into(), value.into());
    }

    /// Stores any template value as a variable, stringifying it through a
    /// registered custom formatter first, else its default text.
    ///
    /// ```rust
    /// use microfmt::{Context, LocalContext};
    ///
    /// let mut ctx = LocalContext::new();
    /// ctx.set_value("age", &25);
    /// ctx.set_value("score", &87.5);
    /// assert_eq!(ctx.format("{age} / {score}", &[]), "25 / 87.500000");
    /// ```
    pub fn set_value(&mut self, name: impl Into<String>, value: &dyn TemplateValue) {
        let text = self
            .custom_text(value)
            .unwrap_or_else(|| value.default_text());
        self.variables.insert(name.into(), text);
    }

    /// Removes a variable. Missing names are ignored.
    pub fn clear_var(&mut self, name: &str) {
        self.variables.remove(name);
    }

    /// Registers a custom formatter for values of type `T`, replacing any
    /// previous one. A registered formatter overrides all default rendering
    /// for that type, format spec or not.
    pub fn set_formatter<T: 'static>(
        &mut self,
        formatter: impl Fn(&T) -> String + Send + Sync + 'static,
    ) {
        self.formatters.insert(
            TypeId::of::<T>(),
            Box::new(move |value: &dyn Any| {
                value.downcast_ref::<T>().map(&formatter).unwrap_or_default()
            }),
        );
    }

    /// Removes the custom formatter for `T`, if any.
    pub fn clear_formatter<T: 'static>(&mut self) {
        self.formatters.remove(&TypeId::of::<T>());
    }

    /// True if a custom formatter is registered for `T`.
    pub fn has_formatter<T: 'static>(&self) -> bool {
        self.formatters.contains_key(&TypeId::of::<T>())
    }
}

impl Context for LocalContext {
    fn has_var(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    fn find_var(&self, name: &str) -> Option<String> {
        self.variables.get(name).cloned()
    }

    fn custom_text(&self, value: &dyn TemplateValue) -> Option<String> {
        let any = value.as_any()?;
        self.formatters.get(&any.type_id()).map(|f| f(any))
    }
}

impl fmt::Debug for LocalContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalContext")
            .field("variables", &self.variables)
            .field("formatters", &self.formatters.len())
            .finish()
    }
}
