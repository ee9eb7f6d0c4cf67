// Copyright 2025 the Plotline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::Point;
use plotline_view::{ViewTransform, Viewport};

use crate::{Evaluator, PathSegment};

/// When to break the curve between two adjacent samples.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum BreakPolicy {
    /// Break only where the function is undefined (non-finite).
    ///
    /// Two finite neighbours are always joined, even across a pole such as
    /// `tan(x)` at `pi/2`, which can draw a near-vertical connector.
    #[default]
    NonFiniteOnly,
    /// Also break between finite neighbours whose pixel rows differ by more
    /// than `pixels` and lie on opposite sides of the viewport, one above the
    /// top edge and one below the bottom edge.
    ///
    /// This cuts the connector a pole such as `tan(x)` at `pi/2` would draw,
    /// while steep sections that stay on one side remain joined.
    MaxJump {
        /// Largest row difference still joined, in pixels.
        pixels: f64,
    },
}

impl BreakPolicy {
    fn breaks_between(self, prev: Point, next: Point, height: f64) -> bool {
        match self {
            Self::NonFiniteOnly => false,
            Self::MaxJump { pixels } => {
                let crosses = (prev.y < 0.0 && next.y > height) || (prev.y > height && next.y < 0.0);
                crosses && (next.y - prev.y).abs() > pixels
            }
        }
    }
}

/// Samples a function once per pixel column.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CurveSampler {
    /// Break rule between adjacent samples.
    pub policy: BreakPolicy,
}

impl CurveSampler {
    /// Creates a sampler with the given break rule.
    #[must_use]
    pub fn new(policy: BreakPolicy) -> Self {
        Self { policy }
    }

    /// Samples `evaluator` at every pixel column `0..=width` of `viewport`.
    ///
    /// Each column is mapped to math `x`, evaluated, and the result mapped to
    /// a pixel row. An undefined result (or a row that overflows) ends the
    /// current segment; the next defined result opens a new one. An empty
    /// viewport yields no segments.
    #[must_use]
    pub fn sample<E>(&self, evaluator: &E, view: &ViewTransform, viewport: &Viewport) -> Vec<PathSegment>
    where
        E: Evaluator + ?Sized,
    {
        let mut segments = Vec::new();
        if viewport.is_empty() {
            return segments;
        }

        let height = f64::from(viewport.height());
        let mut current = PathSegment::default();

        for column in 0..=viewport.width() {
            let px = f64::from(column);
            let y = evaluator.evaluate(view.screen_to_math_x(viewport, px));
            let py = if y.is_finite() {
                view.math_to_screen_y(viewport, y)
            } else {
                f64::NAN
            };

            if !py.is_finite() {
                close(&mut current, &mut segments);
                continue;
            }

            let point = Point::new(px, py);
            if let Some(prev) = current.last()
                && self.policy.breaks_between(prev, point, height)
            {
                close(&mut current, &mut segments);
            }
            current.push(point);
        }
        close(&mut current, &mut segments);

        log::trace!(
            "sampled {} columns into {} segments",
            u64::from(viewport.width()) + 1,
            segments.len()
        );
        segments
    }
}

fn close(current: &mut PathSegment, segments: &mut Vec<PathSegment>) {
    if !current.is_empty() {
        segments.push(core::mem::take(current));
    }
}

/// Samples with the default [`BreakPolicy::NonFiniteOnly`].
#[must_use]
pub fn sample_curve<E>(evaluator: &E, view: &ViewTransform, viewport: &Viewport) -> Vec<PathSegment>
where
    E: Evaluator + ?Sized,
{
    CurveSampler::default().sample(evaluator, view, viewport)
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};
    use plotline_view::{ViewTransform, Viewport};

    use super::{BreakPolicy, CurveSampler, sample_curve};
    use crate::Evaluator;

    fn square(x: f64) -> f64 {
        x * x
    }

    #[test]
    fn parabola_through_center() {
        let view = ViewTransform::new();
        let viewport = Viewport::new(800, 600);
        let segments = sample_curve(&square, &view, &viewport);

        assert_eq!(segments.len(), 1);
        let points = segments[0].points();
        assert_eq!(points.len(), 801);
        // Column 400 is math x = 0, so y = 0 lands on row 300.
        assert_eq!(points[400], Point::new(400.0, 300.0));
        // Column 440 is x = 1, one unit (40 px) above the center.
        assert_eq!(points[440], Point::new(440.0, 260.0));
    }

    #[test]
    fn one_sample_per_column_at_any_zoom() {
        let viewport = Viewport::new(320, 200);
        let mut view = ViewTransform::new();
        view.zoom_at(&viewport, Point::new(10.0, 10.0), 1000.0);
        view.pan(Vec2::new(55.0, -12.0));
        let segments = sample_curve(&|x: f64| x, &view, &viewport);
        let total: usize = segments.iter().map(|s| s.len()).sum();
        assert_eq!(total, 321);
    }

    #[test]
    fn gap_leaves_no_points_inside_undefined_interval() {
        // sqrt(x^2 - 1) is undefined on (-1, 1).
        let f = |x: f64| if x * x < 1.0 { f64::NAN } else { (x * x - 1.0).abs() };
        let view = ViewTransform::new();
        let viewport = Viewport::new(800, 600);
        let segments = sample_curve(&f, &view, &viewport);

        assert_eq!(segments.len(), 2);
        for seg in &segments {
            for p in seg.points() {
                let x = view.screen_to_math_x(&viewport, p.x);
                assert!(!(x > -1.0 && x < 1.0), "point at x = {x} inside the gap");
            }
        }
        // Segments are disjoint and ordered left to right.
        let left_end = segments[0].last().unwrap();
        let right_start = segments[1].first().unwrap();
        assert!(left_end.x < right_start.x);
    }

    #[test]
    fn infinities_break_like_nan() {
        let f = |x: f64| 1.0 / x;
        let view = ViewTransform::new();
        let viewport = Viewport::new(800, 600);
        // Column 400 is exactly x = 0.
        assert_eq!(sample_curve(&f, &view, &viewport).len(), 2);
    }

    #[test]
    fn undefined_everywhere_yields_nothing() {
        let view = ViewTransform::new();
        let viewport = Viewport::new(800, 600);
        assert!(sample_curve(&|_: f64| f64::NAN, &view, &viewport).is_empty());
        assert!(sample_curve(&None::<fn(f64) -> f64>, &view, &viewport).is_empty());
        assert!(sample_curve(&square, &view, &Viewport::new(0, 600)).is_empty());
    }

    #[test]
    fn max_jump_cuts_poles_but_not_steep_sections() {
        // A pole at x = 0.0125 (half a column right of center) so no column
        // evaluates it exactly.
        let f = |x: f64| 1.0 / (x - 0.0125);
        let view = ViewTransform::new();
        let viewport = Viewport::new(800, 600);

        assert_eq!(sample_curve(&f, &view, &viewport).len(), 1);

        let sampler = CurveSampler::new(BreakPolicy::MaxJump { pixels: 300.0 });
        assert_eq!(sampler.sample(&f, &view, &viewport).len(), 2);

        // A steep curve that leaves the screen on one side is never cut.
        let steep = |x: f64| 1.0 / (x * x);
        assert_eq!(sampler.sample(&steep, &view, &viewport).len(), 2);
        let line = |x: f64| 6.0 * x;
        assert_eq!(sampler.sample(&line, &view, &viewport).len(), 1);
        let tight = CurveSampler::new(BreakPolicy::MaxJump { pixels: 1.0 });
        assert_eq!(tight.sample(&|x: f64| 0.1 * x, &view, &viewport).len(), 1);
    }

    #[test]
    fn accepts_trait_objects() {
        let boxed: &dyn Evaluator = &square;
        let view = ViewTransform::new();
        let viewport = Viewport::new(100, 100);
        assert_eq!(sample_curve(boxed, &view, &viewport).len(), 1);
    }
}
