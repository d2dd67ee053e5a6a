//! # microfmt-render — value rendering for the microfmt template engine
//!
//! `microfmt-render` is the pure, stateless half of microfmt: it knows how to
//! turn one value plus one format spec into text, and nothing about
//! templates, variables, or contexts. The `microfmt` crate builds the
//! substitution engine and the context machinery on top of it.
//!
//! ## Spec syntax
//!
//! A format spec is the text after `:` in a placeholder, shaped as
//! `[alignment][width][.precision][type]`:
//!
//! - alignment: `-` left, `^` center, absent means right
//! - width: field width in characters; `0` or absent means no padding
//! - precision: decimal digits for numbers, truncation length for strings
//! - type: `f F g G e E` (float), `d i x X o u` (integer), `b B` (binary);
//!   absent means string-style formatting
//!
//! Parsing never fails. Malformed tokens read as zero or are ignored, and
//! unknown type characters degrade to the category's default conversion.
//!
//! ## Quick start
//!
//! ```rust
//! use microfmt_render::{apply_format, TemplateValue};
//!
//! // Values render through the TemplateValue trait...
//! assert_eq!(3.14159.render_spec(".2f"), "3.14");
//! assert_eq!(255.render_spec("08x"), "000000ff");
//! assert_eq!("Hello World".render_spec(".8"), "Hello...");
//!
//! // ...and stored text re-renders through apply_format.
//! assert_eq!(apply_format("3.14159", ".2f"), "3.14");
//! ```

pub mod apply;
pub mod number;
pub mod spec;
pub mod stringify;
pub mod text;
pub mod value;

pub use apply::apply_format;
pub use number::{format_float, format_integer, render_char, render_float, render_integer};
pub use spec::{Alignment, SpecParts};
pub use text::{apply_text_format, pad_text};
pub use value::TemplateValue;
