//! Pattern validation.
//!
//! A pattern is a sequence of literal bytes, the `.` wildcard, and the
//! modifiers `?` (zero-or-one), `*` (zero-or-more), and `+` (one-or-more).
//! A modifier applies to the literal that follows it, so a modifier may not
//! be the last character and two modifiers may not appear back to back.
//! The empty pattern is valid and matches only the empty string.
//!
//! Validation is the only fallible stage: once a pattern passes here, NFA
//! construction and matching cannot fail.

/// Error type for pattern validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// Two modifier characters appear back to back.
    ConsecutiveModifiers { offset: usize },
    /// A modifier character is the last character of the pattern.
    TrailingModifier { offset: usize },
}

impl std::fmt::Display for PatternError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PatternError::ConsecutiveModifiers { offset } => {
                write!(f, "two consecutive modifiers at offset {}", offset)
            }
            PatternError::TrailingModifier { offset } => {
                write!(f, "modifier is the last character at offset {}", offset)
            }
        }
    }
}

impl std::error::Error for PatternError {}

/// Returns true for the modifier characters `?`, `*`, `+`.
#[inline]
pub fn is_modifier(byte: u8) -> bool {
    matches!(byte, b'?' | b'*' | b'+')
}

/// Check a pattern for structural validity.
///
/// Rejects two consecutive modifiers and a modifier in final position.
/// No other restriction applies.
pub fn validate(pattern: &str) -> Result<(), PatternError> {
    let bytes = pattern.as_bytes();
    let mut pending_modifier = false;
    for (i, &byte) in bytes.iter().enumerate() {
        if is_modifier(byte) {
            if pending_modifier {
                return Err(PatternError::ConsecutiveModifiers { offset: i });
            }
            if i == bytes.len() - 1 {
                return Err(PatternError::TrailingModifier { offset: i });
            }
            pending_modifier = true;
        } else {
            pending_modifier = false;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_pattern_is_valid() {
        assert_eq!(validate(""), Ok(()));
    }

    #[test]
    fn test_plain_literals_are_valid() {
        assert_eq!(validate("abc"), Ok(()));
        assert_eq!(validate("a.c"), Ok(()));
        assert_eq!(validate("?a*b+c"), Ok(()));
    }

    #[test]
    fn test_consecutive_modifiers_rejected() {
        assert_eq!(
            validate("??a"),
            Err(PatternError::ConsecutiveModifiers { offset: 1 })
        );
        assert_eq!(
            validate("a*+b"),
            Err(PatternError::ConsecutiveModifiers { offset: 2 })
        );
        // Mixed modifiers count as consecutive too.
        assert_eq!(
            validate("?*"),
            Err(PatternError::ConsecutiveModifiers { offset: 1 })
        );
    }

    #[test]
    fn test_trailing_modifier_rejected() {
        assert_eq!(validate("a?"), Err(PatternError::TrailingModifier { offset: 1 }));
        assert_eq!(validate("+"), Err(PatternError::TrailingModifier { offset: 0 }));
        assert_eq!(validate("ab*"), Err(PatternError::TrailingModifier { offset: 2 }));
    }

    #[test]
    fn test_error_display() {
        let err = validate("a?").unwrap_err();
        assert_eq!(err.to_string(), "modifier is the last character at offset 1");
    }
}
