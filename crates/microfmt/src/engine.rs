//! The placeholder substitution engine.
//!
//! Substitution runs in three passes over a working string:
//!
//! 1. For each positional index, `{i:spec}` occurrences are replaced with
//!    the argument rendered against the extracted spec.
//! 2. For each positional index, bare `{i}` occurrences are replaced with
//!    the argument's eagerly computed default text.
//! 3. One final pass resolves named placeholders through the context,
//!    applying [`apply_format`](microfmt_render::apply_format) when a spec
//!    is present.
//!
//! Replacement text is never re-scanned within a pass; each pass resumes
//! immediately after what it inserted. A custom formatter registered for an
//! argument's type wins over every rendering rule, spec or no spec.
//!
//! Degradation is the rule, not the exception: unterminated placeholders
//! stop the active pass, unknown names and out-of-range indices stay
//! verbatim, and every such event is recorded as an issue for the strict
//! `try_format` surface. There is no brace escaping — a brace pair that
//! resolves to nothing is simply left alone.

use microfmt_render::{apply_format, TemplateValue};

use crate::context::Context;
use crate::error::FormatError;

/// The outcome of a render: the substituted text plus every degradation the
/// engine tolerated along the way, in scan order.
pub(crate) struct Rendered {
    pub text: String,
    pub issues: Vec<FormatError>,
}

/// A positional argument bound for one formatting call: its eager default
/// text and the value itself for spec-driven re-rendering.
struct Binding<'a> {
    text: String,
    value: &'a dyn TemplateValue,
}

pub(crate) fn render<C: Context + ?Sized>(
    template: &str,
    args: &[&dyn TemplateValue],
    context: &C,
) -> Rendered {
    let mut out = template.to_string();
    let mut issues = Vec::new();

    let bindings: Vec<Binding<'_>> = args
        .iter()
        .map(|&value| Binding {
            text: context
                .custom_text(value)
                .unwrap_or_else(|| value.default_text()),
            value,
        })
        .collect();

    substitute_spec_positionals(&mut out, &bindings, context);
    substitute_bare_positionals(&mut out, &bindings);
    substitute_named(&mut out, bindings.len(), context, &mut issues);

    Rendered { text: out, issues }
}

/// Pass 1: `{i:spec}` placeholders.
fn substitute_spec_positionals<C: Context + ?Sized>(
    out: &mut String,
    bindings: &[Binding<'_>],
    context: &C,
) {
    for (index, binding) in bindings.iter().enumerate() {
        let pattern = format!("{{{index}:");
        let mut pos = 0;
        while let Some(open) = find_from(out, pos, &pattern) {
            let Some(close) = find_char_from(out, open, '}') else {
                break;
            };
            let spec = out[open + pattern.len()..close].to_string();
            let rendered = context
                .custom_text(binding.value)
                .unwrap_or_else(|| binding.value.render_spec(&spec));
            out.replace_range(open..=close, &rendered);
            pos = open + rendered.len();
        }
    }
}

/// Pass 2: bare `{i}` placeholders, replaced with the eager default text.
fn substitute_bare_positionals(out: &mut String, bindings: &[Binding<'_>]) {
    for (index, binding) in bindings.iter().enumerate() {
        let needle = format!("{{{index}}}");
        let mut pos = 0;
        while let Some(open) = find_from(out, pos, &needle) {
            out.replace_range(open..open + needle.len(), &binding.text);
            pos = open + binding.text.len();
        }
    }
}

/// Pass 3: named placeholders, resolved through the context.
fn substitute_named<C: Context + ?Sized>(
    out: &mut String,
    supplied: usize,
    context: &C,
    issues: &mut Vec<FormatError>,
) {
    let mut pos = 0;
    while let Some(open) = find_char_from(out, pos, '{') {
        let Some(close) = find_char_from(out, open, '}') else {
            issues.push(FormatError::Unterminated { position: open });
            break;
        };

        let content = out[open + 1..close].to_string();
        if content.is_empty() || content.starts_with(|c: char| c.is_ascii_digit()) {
            // Positional leftovers: either already handled or out of range.
            record_positional_leftover(&content, supplied, issues);
            pos = close + 1;
            continue;
        }

        let (name, spec) = match content.split_once(':') {
            Some((name, spec)) => (name, spec),
            None => (content.as_str(), ""),
        };

        match context.find_var(name) {
            Some(value) => {
                let rendered = if spec.is_empty() {
                    value
                } else {
                    apply_format(&value, spec)
                };
                out.replace_range(open..=close, &rendered);
                pos = open + rendered.len();
            }
            None => {
                issues.push(FormatError::UnknownVariable {
                    name: name.to_string(),
                });
                pos = close + 1;
            }
        }
    }
}

/// Records an issue for `{N}`/`{N:spec}` leftovers whose index is out of
/// range. Digit-leading content that is not a well-formed index is not a
/// positional placeholder and stays silent.
fn record_positional_leftover(content: &str, supplied: usize, issues: &mut Vec<FormatError>) {
    let selector = content.split(':').next().unwrap_or(content);
    if selector.is_empty() || !selector.bytes().all(|b| b.is_ascii_digit()) {
        return;
    }
    if let Ok(index) = selector.parse::<usize>() {
        if index >= supplied {
            issues.push(FormatError::MissingArgument { index, supplied });
        }
    }
}

fn find_from(haystack: &str, from: usize, needle: &str) -> Option<usize> {
    haystack[from..].find(needle).map(|i| i + from)
}

fn find_char_from(haystack: &str, from: usize, needle: char) -> Option<usize> {
    haystack[from..].find(needle).map(|i| i + from)
}
