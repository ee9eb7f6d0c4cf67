// Copyright 2025 the Plotline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// A function of one variable that can be sampled.
///
/// A non-finite result (NaN or an infinity) means "undefined at `x`"; the
/// sampler breaks the curve there. Implementations must not panic.
pub trait Evaluator {
    /// Evaluates the function at `x`.
    fn evaluate(&self, x: f64) -> f64;
}

impl<F> Evaluator for F
where
    F: Fn(f64) -> f64 + ?Sized,
{
    #[inline]
    fn evaluate(&self, x: f64) -> f64 {
        self(x)
    }
}

/// `None` is the "no function" case and is undefined everywhere.
impl<E: Evaluator> Evaluator for Option<E> {
    #[inline]
    fn evaluate(&self, x: f64) -> f64 {
        match self {
            Some(inner) => inner.evaluate(x),
            None => f64::NAN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Evaluator;

    #[test]
    fn closures_and_options() {
        let square = |x: f64| x * x;
        assert_eq!(square.evaluate(3.0), 9.0);
        assert_eq!(Some(square).evaluate(-2.0), 4.0);
        assert!(None::<fn(f64) -> f64>.evaluate(1.0).is_nan());
        assert_eq!(f64::abs.evaluate(-4.0), 4.0);
    }
}
