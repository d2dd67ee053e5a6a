//! Property tests for the rendering layer.

use microfmt_render::{
    apply_format, apply_text_format, format_float, format_integer, pad_text, Alignment,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn padded_text_fills_the_field(value in "[a-zA-Z0-9]{0,20}", width in 0usize..40) {
        for align in [Alignment::Left, Alignment::Right, Alignment::Center] {
            let padded = pad_text(&value, align, width);
            let count = padded.chars().count();
            prop_assert!(count >= value.chars().count());
            if width > value.chars().count() {
                prop_assert_eq!(count, width);
            }
            prop_assert_eq!(padded.trim(), value.as_str());
        }
    }

    #[test]
    fn empty_spec_is_always_identity(value in "\\PC{0,30}") {
        prop_assert_eq!(apply_text_format(&value, ""), value.clone());
        prop_assert_eq!(apply_format(&value, ""), value);
    }

    #[test]
    fn truncation_respects_the_limit(value in "[a-z]{0,40}", max in 1usize..20) {
        let spec = format!(".{max}");
        let truncated = apply_text_format(&value, &spec);
        prop_assert!(truncated.chars().count() <= value.chars().count().max(max));
        if value.chars().count() > max {
            prop_assert_eq!(truncated.chars().count(), max);
        }
    }

    #[test]
    fn rendering_is_pure(value in any::<f64>()) {
        prop_assert_eq!(format_float(value, ".3f"), format_float(value, ".3f"));
        prop_assert_eq!(format_float(value, "g"), format_float(value, "g"));
    }

    #[test]
    fn integer_width_is_honored(value in any::<i64>(), width in 1usize..30) {
        let spec = format!("{width}d");
        let rendered = format_integer(value, &spec);
        prop_assert!(rendered.chars().count() >= width);
        prop_assert_eq!(rendered.trim_start().parse::<i64>().ok(), Some(value));
    }

    #[test]
    fn zero_padded_integers_round_trip(value in any::<i64>(), width in 1usize..30) {
        let spec = format!("0{width}d");
        let rendered = format_integer(value, &spec);
        prop_assert!(rendered.chars().count() >= width);
        prop_assert_eq!(rendered.parse::<i64>().ok(), Some(value));
    }

    #[test]
    fn binary_always_carries_the_prefix(value in any::<i64>()) {
        let rendered = format_integer(value, "b");
        prop_assert!(rendered.starts_with("0b"));
        prop_assert!(rendered[2..].bytes().all(|b| b == b'0' || b == b'1'));
    }

    #[test]
    fn well_formed_specs_never_panic(
        value in "\\PC{0,20}",
        spec in "[-^]?[0-9]{0,3}(\\.[0-9]{0,2})?[a-zA-Z]?",
    ) {
        let _ = apply_format(&value, &spec);
        let _ = apply_text_format(&value, &spec);
    }

    #[test]
    fn junk_specs_never_panic(value in "\\PC{0,20}", spec in "\\PC{0,3}") {
        // Short enough that a digit run cannot request an absurd width.
        let _ = apply_format(&value, &spec);
        let _ = apply_text_format(&value, &spec);
    }
}
