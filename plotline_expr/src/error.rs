// Copyright 2025 the Plotline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::fmt;

/// Byte range in the source expression.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start offset (inclusive).
    pub start: usize,
    /// End offset (exclusive).
    pub end: usize,
}

impl Span {
    /// Creates a span covering `start..end`.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Creates an empty span at `pos`.
    #[must_use]
    pub const fn at(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    /// Returns `true` if the span covers no bytes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 1-indexed for people reading the message.
        if self.end.saturating_sub(self.start) <= 1 {
            write!(f, "position {}", self.start + 1)
        } else {
            write!(f, "positions {}-{}", self.start + 1, self.end)
        }
    }
}

/// Error produced when an expression cannot be parsed.
#[derive(Clone, Debug, PartialEq)]
pub enum ParseError {
    /// The source is empty or only whitespace.
    Empty,
    /// A character that starts no token.
    UnexpectedChar {
        /// The offending character.
        ch: char,
        /// Where it was found.
        span: Span,
    },
    /// A numeric literal that does not parse as `f64`.
    InvalidNumber {
        /// The literal text.
        text: String,
        /// Where it was found.
        span: Span,
    },
    /// A name that is neither `x`, a constant, nor a known function.
    UnknownIdentifier {
        /// The name as written.
        name: String,
        /// Where it was found.
        span: Span,
    },
    /// A token that does not fit the grammar at this point.
    UnexpectedToken {
        /// What the parser was looking for.
        expected: &'static str,
        /// Where the unexpected token starts.
        span: Span,
    },
    /// The input ended while more was expected.
    UnexpectedEnd {
        /// What the parser was looking for.
        expected: &'static str,
    },
    /// A function was called with the wrong number of arguments.
    ArityMismatch {
        /// Function name.
        name: &'static str,
        /// Number of arguments it takes.
        expected: usize,
        /// Number of arguments supplied.
        found: usize,
        /// Span of the function name.
        span: Span,
    },
    /// Parentheses or unary operators nest deeper than the parser allows.
    TooDeep {
        /// Where the limit was hit.
        span: Span,
    },
}

impl ParseError {
    /// Source location of the error, when it has one.
    #[must_use]
    pub fn span(&self) -> Option<Span> {
        match self {
            Self::Empty | Self::UnexpectedEnd { .. } => None,
            Self::UnexpectedChar { span, .. }
            | Self::InvalidNumber { span, .. }
            | Self::UnknownIdentifier { span, .. }
            | Self::UnexpectedToken { span, .. }
            | Self::ArityMismatch { span, .. }
            | Self::TooDeep { span } => Some(*span),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "expression is empty"),
            Self::UnexpectedChar { ch, span } => {
                write!(f, "unexpected character '{ch}' at {span}")
            }
            Self::InvalidNumber { text, span } => {
                write!(f, "invalid number '{text}' at {span}")
            }
            Self::UnknownIdentifier { name, span } => {
                write!(f, "unknown name '{name}' at {span}")
            }
            Self::UnexpectedToken { expected, span } => {
                write!(f, "expected {expected} at {span}")
            }
            Self::UnexpectedEnd { expected } => {
                write!(f, "expected {expected} but the expression ended")
            }
            Self::ArityMismatch {
                name,
                expected,
                found,
                span,
            } => write!(
                f,
                "{name} takes {expected} argument{} but {found} were given at {span}",
                if *expected == 1 { "" } else { "s" }
            ),
            Self::TooDeep { span } => write!(f, "expression nests too deeply at {span}"),
        }
    }
}

impl core::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::{ParseError, Span};

    #[test]
    fn span_display_is_one_indexed() {
        assert_eq!(Span::new(0, 1).to_string(), "position 1");
        assert_eq!(Span::at(4).to_string(), "position 5");
        assert_eq!(Span::new(2, 6).to_string(), "positions 3-6");
    }

    #[test]
    fn messages_name_the_problem() {
        let err = ParseError::ArityMismatch {
            name: "max",
            expected: 2,
            found: 1,
            span: Span::new(0, 3),
        };
        assert_eq!(
            err.to_string(),
            "max takes 2 arguments but 1 were given at positions 1-3"
        );
        assert_eq!(ParseError::Empty.span(), None);
        assert_eq!(
            ParseError::TooDeep { span: Span::at(9) }.span(),
            Some(Span::at(9))
        );
    }
}
