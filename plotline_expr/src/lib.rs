// Copyright 2025 the Plotline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plotline Expr: a small, safe parser and evaluator for `y = f(x)`.
//!
//! Expressions are written in the usual infix notation with the single
//! variable `x`, a fixed set of constants (`pi`, `e`, `tau`, `phi`) and
//! built-in functions (`sin`, `sqrt`, `max`, ...). Nothing outside that set
//! can be named, so user input is never executed as code.
//!
//! ```rust
//! use plotline_expr::Expression;
//!
//! let expr = Expression::parse("2x^2 - 3sin(pi x) + 1").unwrap();
//! assert_eq!(expr.eval(0.0), 1.0);
//! assert!((expr.eval(1.0) - 3.0).abs() < 1e-12);
//!
//! // Undefined points evaluate to a non-finite value instead of failing.
//! let expr = Expression::parse("1/x + sqrt(x)").unwrap();
//! assert!(expr.eval(-1.0).is_nan());
//! assert_eq!(expr.eval(0.0), f64::INFINITY);
//!
//! let err = Expression::parse("2 +* x").unwrap_err();
//! assert_eq!(err.to_string(), "expected a value at position 4");
//! ```
//!
//! ## Grammar
//!
//! - Binary `+ -` bind loosest, then `* / %`, then unary `- +`, then `^`
//!   (also written `**`), which is right-associative: `-x^2` is `-(x^2)`
//!   and `2^3^2` is `2^9`.
//! - Adjacent operands multiply: `2x`, `3(x+1)`, `(x-1)(x+1)`, `x sin(x)`.
//! - Numbers accept a fraction and an exponent: `.5`, `1.5e-3`.
//! - Names are ASCII case-insensitive; `log` is base 10, `ln` is natural.
//!
//! Parsing compiles to a flat postfix program, and nesting is capped at
//! [`MAX_DEPTH`], so neither parsing nor evaluation can overflow the stack.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod builtins;
mod error;
mod lexer;
mod parser;

use alloc::string::String;
use core::fmt;

use smallvec::SmallVec;

pub use builtins::{Constant, Function};
pub use error::{ParseError, Span};
pub use parser::MAX_DEPTH;

use parser::{Instr, Program};

/// Inline capacity of the evaluation stack.
///
/// Each nesting level holds at most one pending operand, so a program that
/// passed the [`MAX_DEPTH`] check never needs more than `MAX_DEPTH + 1`
/// slots and evaluation stays off the heap.
const EVAL_STACK: usize = 256;

const _: () = assert!(MAX_DEPTH < EVAL_STACK);

/// A parsed expression in the variable `x`.
#[derive(Clone, Debug, PartialEq)]
pub struct Expression {
    source: String,
    program: Program,
}

impl Expression {
    /// Parses `source`.
    ///
    /// Leading and trailing whitespace is ignored; an empty or blank source is
    /// [`ParseError::Empty`].
    pub fn parse(source: &str) -> Result<Self, ParseError> {
        let tokens = lexer::lex(source)?;
        let program = parser::compile(&tokens)?;
        Ok(Self {
            source: String::from(source),
            program,
        })
    }

    /// The text this expression was parsed from.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Evaluates the expression at `x`.
    ///
    /// Arithmetic follows IEEE 754: division by zero gives an infinity and
    /// domain errors such as `sqrt(-1)` give NaN. Callers treat any
    /// non-finite result as "undefined here".
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        debug_assert!(self.program.max_stack <= EVAL_STACK);
        let mut stack: SmallVec<[f64; EVAL_STACK]> = SmallVec::new();

        for &instr in &self.program.code {
            match instr {
                Instr::Push(value) => stack.push(value),
                Instr::Var => stack.push(x),
                Instr::Neg => {
                    if let Some(top) = stack.last_mut() {
                        *top = -*top;
                    }
                }
                Instr::Call1(function) => {
                    if let Some(top) = stack.last_mut() {
                        *top = function.apply1(*top);
                    }
                }
                binary => {
                    let (Some(b), Some(a)) = (stack.pop(), stack.pop()) else {
                        return f64::NAN;
                    };
                    stack.push(apply_binary(binary, a, b));
                }
            }
        }

        stack.pop().unwrap_or(f64::NAN)
    }
}

fn apply_binary(instr: Instr, a: f64, b: f64) -> f64 {
    match instr {
        Instr::Add => a + b,
        Instr::Sub => a - b,
        Instr::Mul => a * b,
        Instr::Div => a / b,
        Instr::Rem => libm::fmod(a, b),
        Instr::Pow => libm::pow(a, b),
        Instr::Call2(function) => function.apply2(a, b),
        Instr::Push(_) | Instr::Var | Instr::Neg | Instr::Call1(_) => f64::NAN,
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl core::str::FromStr for Expression {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
