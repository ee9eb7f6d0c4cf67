// Copyright 2025 the Plotline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use plotline_axis::DEFAULT_TARGET_SPACING_PX;
use plotline_curve::BreakPolicy;
use plotline_interaction::DEFAULT_ZOOM_STEP;
use plotline_render::Theme;
use plotline_view::{DEFAULT_SCALE, SCALE_MAX, SCALE_MIN};

/// Knobs for a [`PlotSession`](crate::PlotSession).
///
/// The defaults reproduce the classic plotter: 40 px per unit at home,
/// scale clamped to `[0.001, 100000]`, grid lines about 80 px apart, 10% per
/// wheel notch, and curves broken only where the function is undefined.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotConfig {
    /// Scale restored by a view reset, in pixels per math unit.
    pub home_scale: f64,
    /// Smallest allowed scale.
    pub min_scale: f64,
    /// Largest allowed scale.
    pub max_scale: f64,
    /// Desired distance between grid lines, in pixels.
    pub grid_spacing_px: f64,
    /// Relative zoom per wheel notch.
    pub zoom_step: f64,
    /// Where to break the sampled curve.
    pub break_policy: BreakPolicy,
    /// Colors and widths.
    pub theme: Theme,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            home_scale: DEFAULT_SCALE,
            min_scale: SCALE_MIN,
            max_scale: SCALE_MAX,
            grid_spacing_px: DEFAULT_TARGET_SPACING_PX,
            zoom_step: DEFAULT_ZOOM_STEP,
            break_policy: BreakPolicy::NonFiniteOnly,
            theme: Theme::default(),
        }
    }
}
