//! The [`TemplateValue`] trait: what it means to be a positional argument.
//!
//! Every value handed to a formatting call is seen by the engine as a
//! `&dyn TemplateValue`. The trait answers three questions:
//!
//! 1. What is the value's default text (for a bare `{0}` placeholder)?
//! 2. How does it render against a format spec (for `{0:spec}`)?
//! 3. What is its type identity (so a context can find a custom formatter)?
//!
//! Built-in impls cover the native categories — floats, the integer widths
//! through 64 bits, bool, char, and string-likes — each dispatching to the
//! matching renderer. Any other type gets the generic fallback: default text
//! plus string-style width/alignment/truncation, which is what the provided
//! [`render_spec`](TemplateValue::render_spec) body does. The easiest way to
//! opt a custom type in is [`impl_template_value!`](crate::impl_template_value).

use std::any::Any;

use crate::{number, stringify, text};

/// A value usable as a positional template argument.
///
/// # Example
///
/// ```rust
/// use microfmt_render::TemplateValue;
///
/// assert_eq!(5.default_text(), "5");
/// assert_eq!(255.render_spec("x"), "ff");
/// assert_eq!(3.14159.render_spec(".2f"), "3.14");
/// assert_eq!("Bob".render_spec("10"), "       Bob");
/// ```
pub trait TemplateValue {
    /// The default text used for a bare `{N}` placeholder.
    fn default_text(&self) -> String;

    /// Renders the value against a raw format spec (the text after `:`).
    ///
    /// The default body is the generic fallback: stringify, then apply
    /// string-style width/alignment/truncation.
    fn render_spec(&self, format_spec: &str) -> String {
        text::apply_text_format(&self.default_text(), format_spec)
    }

    /// The value as [`Any`], for custom-formatter dispatch by type identity.
    ///
    /// `None` for values with no `'static` type identity — in practice
    /// borrowed `str` slices, which custom formatters therefore never see;
    /// register a formatter for `String` to cover owned strings.
    fn as_any(&self) -> Option<&dyn Any> {
        None
    }
}

macro_rules! integer_template_value {
    ($($ty:ty),+ $(,)?) => {$(
        impl TemplateValue for $ty {
            fn default_text(&self) -> String {
                self.to_string()
            }

            fn render_spec(&self, format_spec: &str) -> String {
                number::render_integer(*self as i64, format_spec)
            }

            fn as_any(&self) -> Option<&dyn Any> {
                Some(self)
            }
        }
    )+};
}

// u64 values above i64::MAX pass through as their bit pattern, which is what
// the unsigned conversions expect; `d` on such a value shows the wrapped
// signed form, as printf would.
integer_template_value!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl TemplateValue for f64 {
    fn default_text(&self) -> String {
        stringify::float_text(*self)
    }

    fn render_spec(&self, format_spec: &str) -> String {
        number::render_float(*self, format_spec)
    }

    fn as_any(&self) -> Option<&dyn Any> {
        Some(self)
    }
}

impl TemplateValue for f32 {
    fn default_text(&self) -> String {
        stringify::float_text(f64::from(*self))
    }

    fn render_spec(&self, format_spec: &str) -> String {
        number::render_float(f64::from(*self), format_spec)
    }

    fn as_any(&self) -> Option<&dyn Any> {
        Some(self)
    }
}

impl TemplateValue for bool {
    fn default_text(&self) -> String {
        stringify::bool_text(*self).to_string()
    }

    fn render_spec(&self, format_spec: &str) -> String {
        text::apply_text_format(stringify::bool_text(*self), format_spec)
    }

    fn as_any(&self) -> Option<&dyn Any> {
        Some(self)
    }
}

impl TemplateValue for char {
    fn default_text(&self) -> String {
        self.to_string()
    }

    fn render_spec(&self, format_spec: &str) -> String {
        number::render_char(*self, format_spec)
    }

    fn as_any(&self) -> Option<&dyn Any> {
        Some(self)
    }
}

impl TemplateValue for String {
    fn default_text(&self) -> String {
        self.clone()
    }

    fn render_spec(&self, format_spec: &str) -> String {
        text::apply_text_format(self, format_spec)
    }

    fn as_any(&self) -> Option<&dyn Any> {
        Some(self)
    }
}

// Borrowed slices keep the default `as_any` (`None`): a `&'a str` has no
// `'static` type identity to look a formatter up under.
impl TemplateValue for str {
    fn default_text(&self) -> String {
        self.to_string()
    }

    fn render_spec(&self, format_spec: &str) -> String {
        text::apply_text_format(self, format_spec)
    }
}

// References delegate wholesale, so `&value` and `&&value` format the same
// and custom formatters still see the innermost type.
impl<'a, T: TemplateValue + ?Sized> TemplateValue for &'a T {
    fn default_text(&self) -> String {
        (**self).default_text()
    }

    fn render_spec(&self, format_spec: &str) -> String {
        (**self).render_spec(format_spec)
    }

    fn as_any(&self) -> Option<&dyn Any> {
        (**self).as_any()
    }
}

/// Implements [`TemplateValue`] for types that already implement
/// [`std::fmt::Display`].
///
/// The default text comes from the crate's universal conversion hook
/// ([`stringify::display_text`]); spec rendering is the generic string
/// fallback.
///
/// # Example
///
/// ```rust
/// use microfmt_render::{impl_template_value, TemplateValue};
///
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// impl std::fmt::Display for Point {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         write!(f, "({}, {})", self.x, self.y)
///     }
/// }
///
/// impl_template_value!(Point);
///
/// let p = Point { x: 10, y: 20 };
/// assert_eq!(p.default_text(), "(10, 20)");
/// assert_eq!(p.render_spec("10"), "  (10, 20)");
/// ```
#[macro_export]
macro_rules! impl_template_value {
    ($($ty:ty),+ $(,)?) => {$(
        impl $crate::TemplateValue for $ty {
            fn default_text(&self) -> ::std::string::String {
                $crate::stringify::display_text(self)
            }

            fn as_any(&self) -> ::std::option::Option<&dyn ::std::any::Any> {
                ::std::option::Option::Some(self)
            }
        }
    )+};
}
