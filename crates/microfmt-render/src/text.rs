//! Width, alignment, and truncation for already-stringified values.
//!
//! This is the terminal step of every rendering path: numeric renderers hand
//! their output here when an alignment marker asks for padding the native
//! formatter cannot do (centering in particular), and string-like values come
//! straight here.
//!
//! Lengths are counted in `char`s. A spec of the form
//! `[alignment][width][.truncation]` is applied in two steps: truncate first,
//! then pad.

use crate::spec::{self, Alignment};

/// Applies a string-style format spec: `[alignment][width][.truncation]`.
///
/// Truncation only happens when a `.` is present. A truncation length of 3
/// or less cuts hard; anything longer cuts to `length - 3` characters and
/// appends `"..."`. Padding to `width` happens after truncation and is a
/// no-op when the text already fills the field.
///
/// # Example
///
/// ```rust
/// use microfmt_render::apply_text_format;
///
/// assert_eq!(apply_text_format("Bob", "10"), "       Bob");
/// assert_eq!(apply_text_format("Bob", "-10"), "Bob       ");
/// assert_eq!(apply_text_format("abcdefgh", ".7"), "abcd...");
/// assert_eq!(apply_text_format("abcdefgh", ".3"), "abc");
/// ```
pub fn apply_text_format(value: &str, format_spec: &str) -> String {
    if format_spec.is_empty() {
        return value.to_string();
    }

    let (align, rest) = spec::take_alignment(format_spec);
    let (width, max_len) = match rest.split_once('.') {
        Some((before, after)) => (spec::leading_number(before), spec::leading_number(after)),
        None => (spec::leading_number(rest), 0),
    };

    let truncated = truncate(value, max_len);
    pad_text(&truncated, align.unwrap_or(Alignment::Right), width)
}

/// Pads `value` with spaces to `width` characters under `align`.
///
/// A width of zero, or one the value already meets, leaves the text
/// untouched. Centering splits the padding evenly and puts the extra space
/// on the right when the split is odd.
pub fn pad_text(value: &str, align: Alignment, width: usize) -> String {
    let count = value.chars().count();
    if width == 0 || width <= count {
        return value.to_string();
    }

    let padding = width - count;
    match align {
        Alignment::Left => format!("{value}{}", " ".repeat(padding)),
        Alignment::Right => format!("{}{value}", " ".repeat(padding)),
        Alignment::Center => {
            let left = padding / 2;
            format!("{}{value}{}", " ".repeat(left), " ".repeat(padding - left))
        }
    }
}

/// Truncates to `max_len` characters; zero means no truncation.
fn truncate(value: &str, max_len: usize) -> String {
    let count = value.chars().count();
    if max_len == 0 || count <= max_len {
        return value.to_string();
    }
    if max_len <= 3 {
        value.chars().take(max_len).collect()
    } else {
        let head: String = value.chars().take(max_len - 3).collect();
        format!("{head}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_spec_is_identity() {
        assert_eq!(apply_text_format("hello", ""), "hello");
    }

    #[test]
    fn test_right_alignment_is_default() {
        assert_eq!(apply_text_format("Bob", "10"), "       Bob");
    }

    #[test]
    fn test_left_alignment() {
        assert_eq!(apply_text_format("Alice", "-10"), "Alice     ");
    }

    #[test]
    fn test_center_alignment_extra_space_goes_right() {
        assert_eq!(apply_text_format("Tom", "^10"), "   Tom    ");
        assert_eq!(apply_text_format("Tom", "^9"), "   Tom   ");
    }

    #[test]
    fn test_width_smaller_than_value_is_noop() {
        assert_eq!(apply_text_format("Hello World", "5"), "Hello World");
    }

    #[test]
    fn test_truncation_with_ellipsis() {
        let long = "This is a very long string that needs truncation";
        assert_eq!(apply_text_format(long, ".10"), "This is...");
    }

    #[test]
    fn test_short_truncation_has_no_ellipsis() {
        let long = "This is a very long string that needs truncation";
        assert_eq!(apply_text_format(long, ".3"), "Thi");
    }

    #[test]
    fn test_truncation_boundary() {
        assert_eq!(apply_text_format("abcdefgh", ".7"), "abcd...");
        assert_eq!(apply_text_format("abcdefgh", ".3"), "abc");
    }

    #[test]
    fn test_truncation_then_padding() {
        let long = "This is a very long string that needs truncation";
        assert_eq!(apply_text_format(long, "-15.12"), "This is a...   ");
    }

    #[test]
    fn test_no_truncation_when_value_fits() {
        assert_eq!(apply_text_format("Hi", ".10"), "Hi");
    }

    #[test]
    fn test_width_only_never_truncates() {
        let long = "This is a very long string that needs truncation";
        assert_eq!(apply_text_format(long, "15"), long);
    }

    #[test]
    fn test_zero_truncation_length_is_ignored() {
        assert_eq!(apply_text_format("hello", ".0"), "hello");
        assert_eq!(apply_text_format("hello", "."), "hello");
    }

    #[test]
    fn test_non_numeric_tokens_degrade_to_zero() {
        // atoi semantics: "2f" parses as 2, "xyz" as 0.
        assert_eq!(apply_text_format("hello", ".2f"), "he");
        assert_eq!(apply_text_format("hello", "xyz"), "hello");
    }

    #[test]
    fn test_char_counting_not_bytes() {
        assert_eq!(apply_text_format("héllo", "7"), "  héllo");
        assert_eq!(apply_text_format("héllo", ".2"), "hé");
    }

    #[test]
    fn test_pad_text_direct() {
        assert_eq!(pad_text("42", Alignment::Left, 8), "42      ");
        assert_eq!(pad_text("42", Alignment::Right, 8), "      42");
        assert_eq!(pad_text("42", Alignment::Center, 8), "   42   ");
        assert_eq!(pad_text("42", Alignment::Center, 0), "42");
    }
}
