// Copyright 2025 the Plotline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The fixed set of named constants and functions an expression may use.

use core::f64::consts;

/// Named constant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Constant {
    /// Ratio of a circle's circumference to its diameter.
    Pi,
    /// Euler's number.
    E,
    /// `2 * pi`.
    Tau,
    /// The golden ratio.
    Phi,
}

impl Constant {
    /// Every supported constant.
    pub const ALL: [Self; 4] = [Self::Pi, Self::E, Self::Tau, Self::Phi];

    /// Looks up a constant by (ASCII case-insensitive) name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(name))
    }

    /// Canonical name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pi => "pi",
            Self::E => "e",
            Self::Tau => "tau",
            Self::Phi => "phi",
        }
    }

    /// Numeric value.
    #[must_use]
    pub const fn value(self) -> f64 {
        match self {
            Self::Pi => consts::PI,
            Self::E => consts::E,
            Self::Tau => consts::TAU,
            Self::Phi => 1.618_033_988_749_895,
        }
    }
}

/// Built-in function.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Function {
    /// Sine.
    Sin,
    /// Cosine.
    Cos,
    /// Tangent.
    Tan,
    /// Secant.
    Sec,
    /// Cosecant.
    Csc,
    /// Cotangent.
    Cot,
    /// Arcsine.
    Asin,
    /// Arccosine.
    Acos,
    /// Arctangent.
    Atan,
    /// Hyperbolic sine.
    Sinh,
    /// Hyperbolic cosine.
    Cosh,
    /// Hyperbolic tangent.
    Tanh,
    /// Inverse hyperbolic sine.
    Asinh,
    /// Inverse hyperbolic cosine.
    Acosh,
    /// Inverse hyperbolic tangent.
    Atanh,
    /// `e^x`.
    Exp,
    /// Natural logarithm.
    Ln,
    /// Base-10 logarithm (`log` is an alias).
    Log10,
    /// Base-2 logarithm.
    Log2,
    /// Square root.
    Sqrt,
    /// Cube root.
    Cbrt,
    /// Absolute value.
    Abs,
    /// Round towards negative infinity.
    Floor,
    /// Round towards positive infinity.
    Ceil,
    /// Round half away from zero.
    Round,
    /// Sign: `-1`, `0` or `1`.
    Sign,
    /// Smaller of two values.
    Min,
    /// Larger of two values.
    Max,
    /// `a^b`.
    Pow,
    /// Four-quadrant arctangent of `y, x`.
    Atan2,
    /// `sqrt(a^2 + b^2)` without intermediate overflow.
    Hypot,
}

impl Function {
    /// Every supported function.
    pub const ALL: [Self; 31] = [
        Self::Sin,
        Self::Cos,
        Self::Tan,
        Self::Sec,
        Self::Csc,
        Self::Cot,
        Self::Asin,
        Self::Acos,
        Self::Atan,
        Self::Sinh,
        Self::Cosh,
        Self::Tanh,
        Self::Asinh,
        Self::Acosh,
        Self::Atanh,
        Self::Exp,
        Self::Ln,
        Self::Log10,
        Self::Log2,
        Self::Sqrt,
        Self::Cbrt,
        Self::Abs,
        Self::Floor,
        Self::Ceil,
        Self::Round,
        Self::Sign,
        Self::Min,
        Self::Max,
        Self::Pow,
        Self::Atan2,
        Self::Hypot,
    ];

    /// Looks up a function by (ASCII case-insensitive) name.
    ///
    /// `log` resolves to [`Function::Log10`].
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("log") {
            return Some(Self::Log10);
        }
        Self::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(name))
    }

    /// Canonical name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Sec => "sec",
            Self::Csc => "csc",
            Self::Cot => "cot",
            Self::Asin => "asin",
            Self::Acos => "acos",
            Self::Atan => "atan",
            Self::Sinh => "sinh",
            Self::Cosh => "cosh",
            Self::Tanh => "tanh",
            Self::Asinh => "asinh",
            Self::Acosh => "acosh",
            Self::Atanh => "atanh",
            Self::Exp => "exp",
            Self::Ln => "ln",
            Self::Log10 => "log10",
            Self::Log2 => "log2",
            Self::Sqrt => "sqrt",
            Self::Cbrt => "cbrt",
            Self::Abs => "abs",
            Self::Floor => "floor",
            Self::Ceil => "ceil",
            Self::Round => "round",
            Self::Sign => "sign",
            Self::Min => "min",
            Self::Max => "max",
            Self::Pow => "pow",
            Self::Atan2 => "atan2",
            Self::Hypot => "hypot",
        }
    }

    /// Number of arguments the function takes.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::Min | Self::Max | Self::Pow | Self::Atan2 | Self::Hypot => 2,
            _ => 1,
        }
    }

    /// Applies a one-argument function. Two-argument functions yield NaN.
    #[must_use]
    pub fn apply1(self, a: f64) -> f64 {
        match self {
            Self::Sin => libm::sin(a),
            Self::Cos => libm::cos(a),
            Self::Tan => libm::tan(a),
            Self::Sec => 1.0 / libm::cos(a),
            Self::Csc => 1.0 / libm::sin(a),
            Self::Cot => 1.0 / libm::tan(a),
            Self::Asin => libm::asin(a),
            Self::Acos => libm::acos(a),
            Self::Atan => libm::atan(a),
            Self::Sinh => libm::sinh(a),
            Self::Cosh => libm::cosh(a),
            Self::Tanh => libm::tanh(a),
            Self::Asinh => libm::asinh(a),
            Self::Acosh => libm::acosh(a),
            Self::Atanh => libm::atanh(a),
            Self::Exp => libm::exp(a),
            Self::Ln => libm::log(a),
            Self::Log10 => libm::log10(a),
            Self::Log2 => libm::log2(a),
            Self::Sqrt => libm::sqrt(a),
            Self::Cbrt => libm::cbrt(a),
            Self::Abs => libm::fabs(a),
            Self::Floor => libm::floor(a),
            Self::Ceil => libm::ceil(a),
            Self::Round => libm::round(a),
            Self::Sign => {
                if a.is_nan() {
                    f64::NAN
                } else if a > 0.0 {
                    1.0
                } else if a < 0.0 {
                    -1.0
                } else {
                    0.0
                }
            }
            Self::Min | Self::Max | Self::Pow | Self::Atan2 | Self::Hypot => f64::NAN,
        }
    }

    /// Applies a two-argument function. One-argument functions yield NaN.
    #[must_use]
    pub fn apply2(self, a: f64, b: f64) -> f64 {
        match self {
            // NaN propagates so an undefined argument stays undefined.
            Self::Min => {
                if a.is_nan() || b.is_nan() {
                    f64::NAN
                } else {
                    a.min(b)
                }
            }
            Self::Max => {
                if a.is_nan() || b.is_nan() {
                    f64::NAN
                } else {
                    a.max(b)
                }
            }
            Self::Pow => libm::pow(a, b),
            Self::Atan2 => libm::atan2(a, b),
            Self::Hypot => libm::hypot(a, b),
            _ => f64::NAN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Constant, Function};

    #[test]
    fn names_resolve_both_ways() {
        for f in Function::ALL {
            assert_eq!(Function::from_name(f.name()), Some(f));
        }
        for c in Constant::ALL {
            assert_eq!(Constant::from_name(c.name()), Some(c));
        }
        assert_eq!(Function::from_name("LOG"), Some(Function::Log10));
        assert_eq!(Function::from_name("Sin"), Some(Function::Sin));
        assert_eq!(Constant::from_name("PI"), Some(Constant::Pi));
        assert_eq!(Function::from_name("eval"), None);
    }

    #[test]
    fn domain_errors_are_nan_not_panics() {
        assert!(Function::Sqrt.apply1(-1.0).is_nan());
        assert!(Function::Asin.apply1(2.0).is_nan());
        assert_eq!(Function::Ln.apply1(0.0), f64::NEG_INFINITY);
        assert!(Function::Max.apply2(f64::NAN, 1.0).is_nan());
        assert!(Function::Sin.apply2(1.0, 2.0).is_nan());
        assert!(Function::Hypot.apply1(1.0).is_nan());
    }

    #[test]
    fn sign_and_two_argument_functions() {
        assert_eq!(Function::Sign.apply1(-3.0), -1.0);
        assert_eq!(Function::Sign.apply1(0.0), 0.0);
        assert_eq!(Function::Min.apply2(2.0, -1.0), -1.0);
        assert_eq!(Function::Pow.apply2(2.0, 10.0), 1024.0);
        assert_eq!(Function::Hypot.apply2(3.0, 4.0), 5.0);
    }
}
