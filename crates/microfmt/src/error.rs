//! Error types for template substitution.
//!
//! The default rendering path never fails: unresolved, out-of-range, and
//! unterminated placeholders are left verbatim in the output. [`FormatError`]
//! exists for callers who opt into strict checking through
//! [`try_format`](crate::try_format) or
//! [`Context::try_format`](crate::Context::try_format) — the engine records
//! every degradation it tolerated, and strict mode surfaces the first one.

use thiserror::Error;

/// A degradation the engine tolerated while rendering a template.
///
/// Produced only by the `try_format` surface; the plain `format` calls
/// discard these and return the degraded text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// An opening brace with no matching closing brace. The scan stopped
    /// there; everything from `position` (a byte offset) on was emitted
    /// as-is.
    #[error("unterminated placeholder starting at byte {position}")]
    Unterminated {
        /// Byte offset of the opening brace in the rendered text.
        position: usize,
    },

    /// A positional placeholder whose index has no argument.
    #[error("positional placeholder {{{index}}} has no argument ({supplied} supplied)")]
    MissingArgument {
        /// The index the template asked for.
        index: usize,
        /// How many positional arguments the call supplied.
        supplied: usize,
    },

    /// A named placeholder with no matching variable in the context.
    #[error("unknown variable `{name}`")]
    UnknownVariable {
        /// The variable name as written in the template.
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = FormatError::Unterminated { position: 4 };
        assert_eq!(err.to_string(), "unterminated placeholder starting at byte 4");

        let err = FormatError::MissingArgument {
            index: 2,
            supplied: 1,
        };
        assert_eq!(
            err.to_string(),
            "positional placeholder {2} has no argument (1 supplied)"
        );

        let err = FormatError::UnknownVariable {
            name: "user".to_string(),
        };
        assert_eq!(err.to_string(), "unknown variable `user`");
    }
}
