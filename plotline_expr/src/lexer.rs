// Copyright 2025 the Plotline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::ToString;
use alloc::vec::Vec;

use crate::builtins::{Constant, Function};
use crate::error::{ParseError, Span};

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum TokenKind {
    Number(f64),
    Variable,
    Constant(Constant),
    Function(Function),
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Caret,
    LeftParen,
    RightParen,
    Comma,
}

impl TokenKind {
    /// Tokens that can end an operand.
    fn ends_operand(self) -> bool {
        matches!(
            self,
            Self::Number(_) | Self::Variable | Self::Constant(_) | Self::RightParen
        )
    }

    /// Tokens that can start an operand (excluding unary signs).
    fn starts_operand(self) -> bool {
        matches!(
            self,
            Self::Number(_)
                | Self::Variable
                | Self::Constant(_)
                | Self::Function(_)
                | Self::LeftParen
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Token {
    pub(crate) kind: TokenKind,
    pub(crate) span: Span,
}

/// Splits `src` into tokens and inserts implicit multiplication.
pub(crate) fn lex(src: &str) -> Result<Vec<Token>, ParseError> {
    let bytes = src.as_bytes();
    let mut tokens: Vec<Token> = Vec::with_capacity(src.len() / 2 + 1);
    let mut pos = 0;

    while pos < bytes.len() {
        let b = bytes[pos];
        if b.is_ascii_whitespace() {
            pos += 1;
            continue;
        }

        let start = pos;
        let kind = if b.is_ascii_digit() || b == b'.' {
            pos = scan_number(bytes, pos);
            let text = &src[start..pos];
            match text.parse::<f64>() {
                Ok(value) => TokenKind::Number(value),
                Err(_) => {
                    return Err(ParseError::InvalidNumber {
                        text: text.to_string(),
                        span: Span::new(start, pos),
                    });
                }
            }
        } else if b.is_ascii_alphabetic() || b == b'_' {
            while pos < bytes.len() && (bytes[pos].is_ascii_alphanumeric() || bytes[pos] == b'_') {
                pos += 1;
            }
            resolve_identifier(&src[start..pos], Span::new(start, pos))?
        } else {
            pos += 1;
            match b {
                b'+' => TokenKind::Plus,
                b'-' => TokenKind::Minus,
                b'*' if bytes.get(pos) == Some(&b'*') => {
                    pos += 1;
                    TokenKind::Caret
                }
                b'*' => TokenKind::Star,
                b'/' => TokenKind::Slash,
                b'%' => TokenKind::Percent,
                b'^' => TokenKind::Caret,
                b'(' => TokenKind::LeftParen,
                b')' => TokenKind::RightParen,
                b',' => TokenKind::Comma,
                _ => {
                    // Report the whole (possibly multi-byte) character.
                    let ch = src[start..].chars().next().unwrap_or('\u{fffd}');
                    return Err(ParseError::UnexpectedChar {
                        ch,
                        span: Span::new(start, start + ch.len_utf8()),
                    });
                }
            }
        };

        let token = Token {
            kind,
            span: Span::new(start, pos),
        };
        if let Some(prev) = tokens.last()
            && needs_implicit_mul(prev.kind, token.kind)
        {
            tokens.push(Token {
                kind: TokenKind::Star,
                span: Span::at(start),
            });
        }
        tokens.push(token);
    }

    Ok(tokens)
}

/// `2x`, `2(x+1)`, `(x+1)(x-1)`, `3sin(x)`, `x pi`; but not `2 3`.
fn needs_implicit_mul(prev: TokenKind, next: TokenKind) -> bool {
    if matches!(prev, TokenKind::Number(_)) && matches!(next, TokenKind::Number(_)) {
        return false;
    }
    prev.ends_operand() && next.starts_operand()
}

/// Scans `123`, `1.5`, `.5`, `2.`, `1e-3`, `6.02E23`.
///
/// An `e` is only taken as an exponent when digits follow it, so `2e`
/// stays "2 times e".
fn scan_number(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len() && (bytes[pos].is_ascii_digit() || bytes[pos] == b'.') {
        pos += 1;
    }
    if pos < bytes.len() && matches!(bytes[pos], b'e' | b'E') {
        let mut exp = pos + 1;
        if exp < bytes.len() && matches!(bytes[exp], b'+' | b'-') {
            exp += 1;
        }
        if exp < bytes.len() && bytes[exp].is_ascii_digit() {
            while exp < bytes.len() && bytes[exp].is_ascii_digit() {
                exp += 1;
            }
            pos = exp;
        }
    }
    pos
}

fn resolve_identifier(name: &str, span: Span) -> Result<TokenKind, ParseError> {
    if name.eq_ignore_ascii_case("x") {
        Ok(TokenKind::Variable)
    } else if let Some(f) = Function::from_name(name) {
        Ok(TokenKind::Function(f))
    } else if let Some(c) = Constant::from_name(name) {
        Ok(TokenKind::Constant(c))
    } else {
        Err(ParseError::UnknownIdentifier {
            name: name.to_string(),
            span,
        })
    }
}
