// Copyright 2025 the Plotline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use crate::step::{DEFAULT_TARGET_SPACING_PX, calculate_step_for};
use crate::ticks::round_tick;
use crate::{ViewTransform, Viewport};

/// Upper bound on the number of ticks generated for one axis.
///
/// A range that would need more ticks than this (only reachable with a
/// degenerate transform) produces no ticks for that axis.
pub const MAX_TICKS_PER_AXIS: usize = 4096;

/// Grid layout for a single frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GridPlan {
    /// Distance between neighbouring ticks, in math units.
    pub step: f64,
    /// Tick positions along the math X axis, ascending.
    pub x_ticks: Vec<f64>,
    /// Tick positions along the math Y axis, ascending.
    pub y_ticks: Vec<f64>,
}

/// Plans grid steps and visible ticks for a target on-screen spacing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridPlanner {
    /// Desired distance between grid lines, in pixels.
    pub target_spacing_px: f64,
}

impl GridPlanner {
    /// Creates a planner aiming for `target_spacing_px` between grid lines.
    #[must_use]
    pub fn new(target_spacing_px: f64) -> Self {
        Self { target_spacing_px }
    }

    /// Computes the step and the ticks covering the visible region.
    ///
    /// The tick ranges are the visible math bounds rounded outwards to the
    /// nearest multiple of the step, so the first and last tick may lie just
    /// outside the viewport.
    #[must_use]
    pub fn plan(&self, view: &ViewTransform, viewport: &Viewport) -> GridPlan {
        let step = calculate_step_for(view.scale(), self.target_spacing_px);
        let visible = view.visible_math_rect(viewport);
        GridPlan {
            step,
            x_ticks: ticks_between(visible.x0, visible.x1, step),
            y_ticks: ticks_between(visible.y0, visible.y1, step),
        }
    }
}

impl Default for GridPlanner {
    fn default() -> Self {
        Self::new(DEFAULT_TARGET_SPACING_PX)
    }
}

/// Plans the grid with the default 80 px spacing.
#[must_use]
pub fn plan_grid(view: &ViewTransform, viewport: &Viewport) -> GridPlan {
    GridPlanner::default().plan(view, viewport)
}

fn ticks_between(min: f64, max: f64, step: f64) -> Vec<f64> {
    if !(min.is_finite() && max.is_finite() && step.is_finite()) || step <= 0.0 || min > max {
        return Vec::new();
    }

    let first = libm::floor(min / step);
    let last = libm::ceil(max / step);
    let span = last - first;
    if !span.is_finite() || span + 1.0 > MAX_TICKS_PER_AXIS as f64 {
        return Vec::new();
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "span is a non-negative integer below MAX_TICKS_PER_AXIS"
    )]
    let count = span as usize + 1;

    // Multiply from an integer index rather than accumulating `step`, so the
    // error does not grow along the axis.
    (0..count)
        .map(|i| round_tick((first + i as f64) * step))
        .collect()
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use kurbo::{Point, Vec2};
    use plotline_view::{ViewTransform, Viewport};

    use super::{GridPlanner, MAX_TICKS_PER_AXIS, plan_grid, ticks_between};

    fn is_multiple(value: f64, step: f64) -> bool {
        let q = value / step;
        (q - libm::round(q)).abs() < 1e-6
    }

    #[test]
    fn default_view_ticks() {
        let view = ViewTransform::new();
        let viewport = Viewport::new(800, 600);
        let plan = plan_grid(&view, &viewport);

        assert_eq!(plan.step, 2.0);
        let expected_x: Vec<f64> = (-5..=5).map(|i| f64::from(i) * 2.0).collect();
        assert_eq!(plan.x_ticks, expected_x);
        // Visible y is [-7.5, 7.5]; rounded outwards to [-8, 8].
        let expected_y: Vec<f64> = (-4..=4).map(|i| f64::from(i) * 2.0).collect();
        assert_eq!(plan.y_ticks, expected_y);
    }

    #[test]
    fn ticks_cover_visible_range_after_pan_and_zoom() {
        let viewport = Viewport::new(1280, 720);
        let mut view = ViewTransform::new();
        view.pan(Vec2::new(-3_456.0, 789.0));
        view.zoom_at(&viewport, Point::new(100.0, 600.0), 37.0);

        let plan = plan_grid(&view, &viewport);
        let visible = view.visible_math_rect(&viewport);

        let (first, last) = (plan.x_ticks[0], plan.x_ticks[plan.x_ticks.len() - 1]);
        assert!(first <= visible.x0 && first > visible.x0 - plan.step * 1.0001);
        assert!(last >= visible.x1 && last < visible.x1 + plan.step * 1.0001);
        for pair in plan.x_ticks.windows(2) {
            assert!(pair[1] > pair[0]);
        }
        for &t in plan.x_ticks.iter().chain(&plan.y_ticks) {
            assert!(is_multiple(t, plan.step), "{t} is not a multiple of {}", plan.step);
        }
    }

    #[test]
    fn fractional_ticks_are_clean() {
        let viewport = Viewport::new(800, 600);
        let mut view = ViewTransform::new();
        // 80 / 800 = 0.1 units per tick.
        view.set_scale(800.0);
        let plan = plan_grid(&view, &viewport);
        assert!((plan.step - 0.1).abs() < 1e-15);
        assert!(plan.x_ticks.contains(&0.3));
        assert!(plan.x_ticks.contains(&-0.3));
        assert!(plan.y_ticks.contains(&0.0));
    }

    #[test]
    fn custom_spacing_changes_step() {
        let viewport = Viewport::new(800, 600);
        let view = ViewTransform::new();
        let coarse = GridPlanner::new(200.0).plan(&view, &viewport);
        let fine = GridPlanner::new(16.0).plan(&view, &viewport);
        assert_eq!(coarse.step, 5.0);
        assert!((fine.step - 0.5).abs() < 1e-15);
        assert!(fine.x_ticks.len() > coarse.x_ticks.len());
    }

    #[test]
    fn degenerate_ranges_produce_no_ticks() {
        assert!(ticks_between(f64::NAN, 1.0, 1.0).is_empty());
        assert!(ticks_between(0.0, f64::INFINITY, 1.0).is_empty());
        assert!(ticks_between(0.0, 1.0, 0.0).is_empty());
        assert!(ticks_between(2.0, 1.0, 1.0).is_empty());
        assert!(ticks_between(0.0, 1e9, 1.0).is_empty());
        assert_eq!(
            ticks_between(0.0, (MAX_TICKS_PER_AXIS - 1) as f64, 1.0).len(),
            MAX_TICKS_PER_AXIS
        );
    }

    #[test]
    fn empty_viewport_yields_single_tick_column() {
        let plan = plan_grid(&ViewTransform::new(), &Viewport::new(0, 0));
        assert_eq!(plan.x_ticks, [0.0]);
        assert_eq!(plan.y_ticks, [0.0]);
    }
}
