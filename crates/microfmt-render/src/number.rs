//! Printf-style numeric rendering.
//!
//! Two layers live here. The low-level formatters ([`format_float`],
//! [`format_integer`]) interpret a spec of the shape
//! `[flags][width][.precision][type]` the way `printf` would, including the
//! zero flag and the two-digit signed exponent of `%e`. The high-level
//! renderers ([`render_float`], [`render_integer`], [`render_char`]) add the
//! alignment layer: a spec with a leading `-` or `^` marker is split so the
//! numeric formatter only sees precision and type, and the width is applied
//! afterwards as string padding — native numeric padding cannot center.
//!
//! Everything here is permissive. Unknown type characters fall back to the
//! default conversion for the category, malformed tokens parse as zero, and
//! nothing returns an error.
//!
//! # Unsigned reinterpretation
//!
//! The `u`, `x`, `X`, `o`, `b`, and `B` conversions render the value's
//! unsigned 64-bit pattern, so negative inputs produce their two's-complement
//! form rather than an error.

use crate::spec::{self, Alignment, SpecParts};
use crate::stringify;
use crate::text;

/// A parsed `[flags][width][.precision][type]` run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct PrintfSpec {
    left: bool,
    plus: bool,
    space: bool,
    zero: bool,
    width: usize,
    precision: Option<usize>,
    conv: Option<char>,
}

fn parse_printf(format_spec: &str) -> PrintfSpec {
    let mut parsed = PrintfSpec::default();
    let mut chars = format_spec.chars().peekable();

    while let Some(&c) = chars.peek() {
        match c {
            '-' => parsed.left = true,
            '+' => parsed.plus = true,
            ' ' => parsed.space = true,
            '0' => parsed.zero = true,
            _ => break,
        }
        chars.next();
    }

    let mut width = 0usize;
    while let Some(d) = chars.peek().and_then(|c| c.to_digit(10)) {
        width = width.saturating_mul(10).saturating_add(d as usize);
        chars.next();
    }
    parsed.width = width;

    if chars.peek() == Some(&'.') {
        chars.next();
        let mut precision = 0usize;
        while let Some(d) = chars.peek().and_then(|c| c.to_digit(10)) {
            precision = precision.saturating_mul(10).saturating_add(d as usize);
            chars.next();
        }
        parsed.precision = Some(precision);
    }

    // Residue after the conversion character is ignored.
    parsed.conv = chars.next().filter(char::is_ascii_alphabetic);
    parsed
}

/// Formats a float with a printf-style spec (`".2f"`, `"08.3f"`, `"e"`, ...).
///
/// An empty spec produces the default fixed-point text with six fractional
/// digits. Unknown conversion characters behave like `f`.
///
/// # Example
///
/// ```rust
/// use microfmt_render::format_float;
///
/// assert_eq!(format_float(3.14159, ".3f"), "3.142");
/// assert_eq!(format_float(95.7, "8.2f"), "   95.70");
/// assert_eq!(format_float(31.4159, ".2e"), "3.14e+01");
/// ```
pub fn format_float(value: f64, format_spec: &str) -> String {
    if format_spec.is_empty() {
        return stringify::float_text(value);
    }

    let parsed = parse_printf(format_spec);
    let upper = matches!(parsed.conv, Some('F' | 'E' | 'G'));

    let body = if !value.is_finite() {
        non_finite_text(value)
    } else {
        match parsed.conv {
            Some('e' | 'E') => exponential(value, parsed.precision.unwrap_or(6)),
            Some('g' | 'G') => general(value, parsed.precision.unwrap_or(6)),
            _ => fixed(value, parsed.precision.unwrap_or(6)),
        }
    };

    let body = if upper { body.to_uppercase() } else { body };
    let body = sign_prefixed(body, parsed.plus, parsed.space);
    pad_number(body, &parsed, value.is_finite())
}

/// Formats an integer with a printf-style spec (`"08d"`, `"x"`, `"8b"`, ...).
///
/// Specs ending in `b` or `B` take the manual binary path: a `0b` prefix,
/// the unsigned 64-bit bit pattern, and a width token covering the whole
/// `0b...` token (leading `0` zero-pads between prefix and digits, anything
/// else space-pads in front). All other specs go through the printf layer;
/// unknown conversion characters behave like `d`.
///
/// # Example
///
/// ```rust
/// use microfmt_render::format_integer;
///
/// assert_eq!(format_integer(42, "08d"), "00000042");
/// assert_eq!(format_integer(255, "x"), "ff");
/// assert_eq!(format_integer(5, "b"), "0b101");
/// assert_eq!(format_integer(5, "08b"), "0b000101");
/// ```
pub fn format_integer(value: i64, format_spec: &str) -> String {
    if format_spec.is_empty() {
        return value.to_string();
    }
    if format_spec.ends_with('b') || format_spec.ends_with('B') {
        return binary(value, &format_spec[..format_spec.len() - 1]);
    }

    let parsed = parse_printf(format_spec);
    let unsigned = matches!(parsed.conv, Some('x' | 'X' | 'o' | 'u'));
    let body = match parsed.conv {
        Some('x') => format!("{:x}", value as u64),
        Some('X') => format!("{:X}", value as u64),
        Some('o') => format!("{:o}", value as u64),
        Some('u') => (value as u64).to_string(),
        _ => value.to_string(),
    };

    let body = match parsed.precision {
        Some(min_digits) => zero_extend(body, min_digits),
        None => body,
    };
    let body = if unsigned {
        body
    } else {
        sign_prefixed(body, parsed.plus, parsed.space)
    };

    // printf drops the zero flag for integers once a precision is given.
    pad_number(body, &parsed, parsed.precision.is_none())
}

/// Renders a float against a raw placeholder spec, alignment included.
///
/// Without a leading alignment marker the whole spec goes straight to
/// [`format_float`]. With one, the value is formatted with precision and
/// type only and then padded to the width as text.
pub fn render_float(value: f64, format_spec: &str) -> String {
    if format_spec.is_empty() {
        return stringify::float_text(value);
    }
    let parts = SpecParts::split(format_spec);
    match parts.align {
        None => format_float(value, format_spec),
        Some(align) => aligned(parts, align, |numeric| format_float(value, numeric)),
    }
}

/// Renders an integer against a raw placeholder spec, alignment included.
///
/// Binary specs short-circuit the alignment layer: the width token before
/// the `b` is interpreted by the binary renderer itself.
pub fn render_integer(value: i64, format_spec: &str) -> String {
    if format_spec.is_empty() {
        return value.to_string();
    }
    if format_spec.ends_with('b') || format_spec.ends_with('B') {
        return format_integer(value, format_spec);
    }
    let parts = SpecParts::split(format_spec);
    match parts.align {
        None => format_integer(value, format_spec),
        Some(align) => aligned(parts, align, |numeric| format_integer(value, numeric)),
    }
}

/// Renders a char: integer specs (`d`, `x`, `o`) format the code point,
/// anything else treats it as a one-character string.
pub fn render_char(value: char, format_spec: &str) -> String {
    if matches!(format_spec.chars().last(), Some('d' | 'x' | 'o')) {
        return render_integer(i64::from(u32::from(value)), format_spec);
    }
    text::apply_text_format(value.encode_utf8(&mut [0; 4]), format_spec)
}

/// The aligned path shared by floats and integers: format with precision and
/// type only, pad to the width part afterwards.
fn aligned(parts: SpecParts<'_>, align: Alignment, format: impl FnOnce(&str) -> String) -> String {
    let (width_part, precision_part) = spec::split_numeric(parts.numeric);
    let numeric = match parts.type_char {
        Some(c) => format!("{precision_part}{c}"),
        None => precision_part.to_string(),
    };
    text::pad_text(&format(&numeric), align, spec::leading_number(width_part))
}

fn fixed(value: f64, precision: usize) -> String {
    format!("{value:.precision$}")
}

/// `%e`: one mantissa digit before the dot, signed two-digit exponent.
fn exponential(value: f64, precision: usize) -> String {
    let formatted = format!("{value:.precision$e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let exponent: i32 = exponent.parse().unwrap_or(0);
            format!("{mantissa}e{exponent:+03}")
        }
        None => formatted,
    }
}

/// `%g`: shortest of fixed and scientific at `precision` significant digits,
/// trailing zeros removed.
fn general(value: f64, precision: usize) -> String {
    let precision = precision.max(1);
    let probe = format!("{:.*e}", precision - 1, value);
    let exponent: i32 = probe
        .split_once('e')
        .and_then(|(_, e)| e.parse().ok())
        .unwrap_or(0);

    if exponent < -4 || exponent >= precision as i32 {
        let mantissa = probe.split_once('e').map_or(probe.as_str(), |(m, _)| m);
        format!("{}e{exponent:+03}", trim_fraction(mantissa))
    } else {
        let decimals = (precision as i32 - 1 - exponent).max(0) as usize;
        trim_fraction(&format!("{value:.decimals$}"))
    }
}

/// Drops trailing fractional zeros, and the dot itself if nothing is left.
fn trim_fraction(text: &str) -> String {
    if !text.contains('.') {
        return text.to_string();
    }
    let trimmed = text.trim_end_matches('0');
    trimmed.strip_suffix('.').unwrap_or(trimmed).to_string()
}

fn non_finite_text(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else if value.is_sign_negative() {
        "-inf".to_string()
    } else {
        "inf".to_string()
    }
}

fn sign_prefixed(body: String, plus: bool, space: bool) -> String {
    if body.starts_with('-') {
        body
    } else if plus {
        format!("+{body}")
    } else if space {
        format!(" {body}")
    } else {
        body
    }
}

/// Pads a digit string to at least `min_digits` digits, keeping the sign.
fn zero_extend(body: String, min_digits: usize) -> String {
    let (sign, digits) = split_sign(&body);
    if digits.len() >= min_digits {
        return body;
    }
    format!("{sign}{}{digits}", "0".repeat(min_digits - digits.len()))
}

/// Field padding: left-justify with spaces, zero-pad after the sign, or
/// right-justify with spaces (the default). Zero padding is suppressed for
/// non-finite values, as printf does.
fn pad_number(body: String, parsed: &PrintfSpec, allow_zero: bool) -> String {
    let len = body.chars().count();
    if parsed.width <= len {
        return body;
    }
    let padding = parsed.width - len;
    if parsed.left {
        format!("{body}{}", " ".repeat(padding))
    } else if parsed.zero && allow_zero {
        let (sign, digits) = split_sign(&body);
        format!("{sign}{}{digits}", "0".repeat(padding))
    } else {
        format!("{}{body}", " ".repeat(padding))
    }
}

fn split_sign(body: &str) -> (&str, &str) {
    match body.as_bytes().first().copied() {
        Some(b'-' | b'+' | b' ') => body.split_at(1),
        _ => ("", body),
    }
}

/// Binary rendering: `0` is `"0b0"`, everything else the bit pattern behind
/// a `0b` prefix. `width_spec` covers the whole token.
fn binary(value: i64, width_spec: &str) -> String {
    if value == 0 {
        return "0b0".to_string();
    }

    let mut reversed = String::new();
    let mut bits = value as u64;
    while bits > 0 {
        reversed.push(if bits & 1 == 1 { '1' } else { '0' });
        bits >>= 1;
    }
    let digits: String = reversed.chars().rev().collect();

    let width = spec::leading_number(width_spec);
    if width > digits.len() + 2 {
        let padding = width - digits.len() - 2;
        if width_spec.starts_with('0') {
            return format!("0b{}{digits}", "0".repeat(padding));
        }
        return format!("{}0b{digits}", " ".repeat(padding));
    }
    format!("0b{digits}")
}
