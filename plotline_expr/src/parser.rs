// Copyright 2025 the Plotline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pratt parser that emits postfix instructions directly.
//!
//! No tree is built: each operand is pushed as it is parsed and each
//! operator is emitted once both of its operands are on the program, so
//! evaluation is a single loop over a value stack.

use alloc::vec::Vec;

use crate::builtins::Function;
use crate::error::{ParseError, Span};
use crate::lexer::{Token, TokenKind};

/// Maximum nesting of parentheses, unary signs, calls and right-associative
/// powers.
pub const MAX_DEPTH: usize = 128;

const ADDITIVE: u8 = 10;
const MULTIPLICATIVE: u8 = 20;
// Between `*` and `^`, so `-x^2` is `-(x^2)` and `2*-x` still parses.
const UNARY: u8 = 25;
const POWER: u8 = 30;

/// One step of a compiled program.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Instr {
    Push(f64),
    Var,
    Neg,
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Pow,
    Call1(Function),
    Call2(Function),
}

/// A compiled program and the stack depth it needs.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Program {
    pub(crate) code: Vec<Instr>,
    pub(crate) max_stack: usize,
}

pub(crate) fn compile(tokens: &[Token]) -> Result<Program, ParseError> {
    if tokens.is_empty() {
        return Err(ParseError::Empty);
    }

    let mut parser = Parser {
        tokens,
        pos: 0,
        depth: 0,
        code: Vec::with_capacity(tokens.len()),
        stack: 0,
        max_stack: 0,
    };
    parser.parse_expr(0)?;

    if let Some(token) = parser.current() {
        return Err(ParseError::UnexpectedToken {
            expected: "an operator",
            span: token.span,
        });
    }

    Ok(Program {
        code: parser.code,
        max_stack: parser.max_stack,
    })
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    depth: usize,
    code: Vec<Instr>,
    stack: usize,
    max_stack: usize,
}

impl Parser<'_> {
    fn current(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    fn emit(&mut self, instr: Instr) {
        match instr {
            Instr::Push(_) | Instr::Var => {
                self.stack += 1;
                self.max_stack = self.max_stack.max(self.stack);
            }
            Instr::Add
            | Instr::Sub
            | Instr::Mul
            | Instr::Div
            | Instr::Rem
            | Instr::Pow
            | Instr::Call2(_) => self.stack -= 1,
            Instr::Neg | Instr::Call1(_) => {}
        }
        self.code.push(instr);
    }

    fn expect(&mut self, kind: TokenKind, expected: &'static str) -> Result<(), ParseError> {
        match self.current() {
            Some(token) if token.kind == kind => {
                self.advance();
                Ok(())
            }
            Some(token) => Err(ParseError::UnexpectedToken {
                expected,
                span: token.span,
            }),
            None => Err(ParseError::UnexpectedEnd { expected }),
        }
    }

    fn parse_expr(&mut self, min_bp: u8) -> Result<(), ParseError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            let span = self
                .current()
                .map_or(Span::default(), |token| token.span);
            return Err(ParseError::TooDeep { span });
        }

        self.parse_prefix()?;

        while let Some(token) = self.current() {
            let Some((instr, left_bp, right_bp)) = infix(token.kind) else {
                break;
            };
            if left_bp < min_bp {
                break;
            }
            self.advance();
            self.parse_expr(right_bp)?;
            self.emit(instr);
        }

        self.depth -= 1;
        Ok(())
    }

    fn parse_prefix(&mut self) -> Result<(), ParseError> {
        let token = self
            .current()
            .ok_or(ParseError::UnexpectedEnd { expected: "a value" })?;
        self.advance();

        match token.kind {
            TokenKind::Number(value) => self.emit(Instr::Push(value)),
            TokenKind::Constant(c) => self.emit(Instr::Push(c.value())),
            TokenKind::Variable => self.emit(Instr::Var),
            TokenKind::Minus => {
                self.parse_expr(UNARY)?;
                self.emit(Instr::Neg);
            }
            TokenKind::Plus => self.parse_expr(UNARY)?,
            TokenKind::LeftParen => {
                self.parse_expr(0)?;
                self.expect(TokenKind::RightParen, "')'")?;
            }
            TokenKind::Function(function) => self.parse_call(function, token.span)?,
            _ => {
                return Err(ParseError::UnexpectedToken {
                    expected: "a value",
                    span: token.span,
                });
            }
        }
        Ok(())
    }

    fn parse_call(&mut self, function: Function, name_span: Span) -> Result<(), ParseError> {
        self.expect(TokenKind::LeftParen, "'(' after a function name")?;

        let mut found = 0;
        if self.current().map(|t| t.kind) != Some(TokenKind::RightParen) {
            loop {
                self.parse_expr(0)?;
                found += 1;
                match self.current() {
                    Some(Token {
                        kind: TokenKind::Comma,
                        ..
                    }) => self.advance(),
                    _ => break,
                }
            }
        }
        self.expect(TokenKind::RightParen, "',' or ')'")?;

        let expected = function.arity();
        if found != expected {
            return Err(ParseError::ArityMismatch {
                name: function.name(),
                expected,
                found,
                span: name_span,
            });
        }

        if expected == 2 {
            self.emit(Instr::Call2(function));
        } else {
            self.emit(Instr::Call1(function));
        }
        Ok(())
    }
}

/// Instruction and left/right binding power of an infix operator.
fn infix(kind: TokenKind) -> Option<(Instr, u8, u8)> {
    let (instr, bp) = match kind {
        TokenKind::Plus => (Instr::Add, ADDITIVE),
        TokenKind::Minus => (Instr::Sub, ADDITIVE),
        TokenKind::Star => (Instr::Mul, MULTIPLICATIVE),
        TokenKind::Slash => (Instr::Div, MULTIPLICATIVE),
        TokenKind::Percent => (Instr::Rem, MULTIPLICATIVE),
        // Right-associative: the right operand may contain another `^`.
        TokenKind::Caret => return Some((Instr::Pow, POWER, POWER)),
        _ => return None,
    };
    Some((instr, bp, bp + 1))
}

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::string::String;

    use super::{Instr, MAX_DEPTH, compile};
    use crate::builtins::Function;
    use crate::error::{ParseError, Span};
    use crate::lexer::lex;

    fn code(src: &str) -> alloc::vec::Vec<Instr> {
        compile(&lex(src).unwrap()).unwrap().code
    }

    fn error(src: &str) -> ParseError {
        compile(&lex(src).unwrap()).unwrap_err()
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        assert_eq!(
            code("1+2*x"),
            [
                Instr::Push(1.0),
                Instr::Push(2.0),
                Instr::Var,
                Instr::Mul,
                Instr::Add
            ]
        );
    }

    #[test]
    fn subtraction_is_left_associative() {
        assert_eq!(
            code("5-x-1"),
            [
                Instr::Push(5.0),
                Instr::Var,
                Instr::Sub,
                Instr::Push(1.0),
                Instr::Sub
            ]
        );
    }

    #[test]
    fn power_is_right_associative_and_above_unary() {
        assert_eq!(
            code("2^x^2"),
            [
                Instr::Push(2.0),
                Instr::Var,
                Instr::Push(2.0),
                Instr::Pow,
                Instr::Pow
            ]
        );
        assert_eq!(
            code("-x^2"),
            [Instr::Var, Instr::Push(2.0), Instr::Pow, Instr::Neg]
        );
        assert_eq!(
            code("2^-x"),
            [Instr::Push(2.0), Instr::Var, Instr::Neg, Instr::Pow]
        );
    }

    #[test]
    fn calls_check_arity() {
        assert_eq!(
            code("max(x, 1)"),
            [Instr::Var, Instr::Push(1.0), Instr::Call2(Function::Max)]
        );
        assert_eq!(
            error("max(x)"),
            ParseError::ArityMismatch {
                name: "max",
                expected: 2,
                found: 1,
                span: Span::new(0, 3)
            }
        );
        assert!(matches!(
            error("sin()"),
            ParseError::ArityMismatch { found: 0, .. }
        ));
        assert!(matches!(
            error("sin(x, x)"),
            ParseError::ArityMismatch { found: 2, .. }
        ));
        assert!(matches!(
            error("sin x"),
            ParseError::UnexpectedToken { span, .. } if span == Span::new(4, 5)
        ));
    }

    #[test]
    fn malformed_input_is_rejected() {
        assert_eq!(compile(&[]), Err(ParseError::Empty));
        assert_eq!(
            error("(x"),
            ParseError::UnexpectedEnd { expected: "')'" }
        );
        assert_eq!(
            error("x+"),
            ParseError::UnexpectedEnd { expected: "a value" }
        );
        assert!(matches!(
            error("x)"),
            ParseError::UnexpectedToken { expected: "an operator", .. }
        ));
        assert!(matches!(
            error("2 3"),
            ParseError::UnexpectedToken { span, .. } if span == Span::new(2, 3)
        ));
        assert!(matches!(error("*x"), ParseError::UnexpectedToken { .. }));
    }

    #[test]
    fn nesting_is_capped() {
        let ok: String = format!("{}x{}", "(".repeat(MAX_DEPTH - 2), ")".repeat(MAX_DEPTH - 2));
        assert!(compile(&lex(&ok).unwrap()).is_ok());

        let deep: String = format!("{}x{}", "(".repeat(MAX_DEPTH * 4), ")".repeat(MAX_DEPTH * 4));
        assert!(matches!(error(&deep), ParseError::TooDeep { .. }));
        assert!(matches!(
            error(&"-".repeat(MAX_DEPTH * 4)),
            ParseError::TooDeep { .. }
        ));
    }

    #[test]
    fn long_flat_sums_are_not_nesting() {
        let src = ["x"; 1000].join("+");
        let program = compile(&lex(&src).unwrap()).unwrap();
        assert_eq!(program.max_stack, 2);
    }

    #[test]
    fn stack_depth_is_tracked() {
        let program = compile(&lex("1+(2+(3+x))").unwrap()).unwrap();
        assert_eq!(program.max_stack, 4);
    }
}
