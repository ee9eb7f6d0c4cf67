// Copyright 2025 the Plotline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{BezPath, Cap, Join, Point};
use plotline_axis::{GridPlan, GridPlanner, format_tick};
use plotline_curve::{CurveSampler, Evaluator, PathSegment};
use plotline_view::{ViewTransform, Viewport};

use crate::{StrokeStyle, Surface, TextAlign, TextBaseline, Theme};

/// Everything needed to draw one frame.
///
/// A frame is a pure function of the view, the viewport and the plotted
/// function; rendering the same frame twice issues identical ops.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    /// View at the time the frame was computed.
    pub transform: ViewTransform,
    /// Surface size at the time the frame was computed.
    pub viewport: Viewport,
    /// Grid step and visible ticks.
    pub grid: GridPlan,
    /// Curve polylines, in screen pixels.
    pub segments: Vec<PathSegment>,
}

impl Frame {
    /// Plans the grid and samples `evaluator` for the given view.
    #[must_use]
    pub fn compute<E>(
        planner: &GridPlanner,
        sampler: &CurveSampler,
        evaluator: &E,
        transform: ViewTransform,
        viewport: Viewport,
    ) -> Self
    where
        E: Evaluator + ?Sized,
    {
        Self {
            grid: planner.plan(&transform, &viewport),
            segments: sampler.sample(evaluator, &transform, &viewport),
            transform,
            viewport,
        }
    }
}

/// Turns a [`Frame`] into imaging ops.
///
/// Draw order is fixed: clear, grid lines, axis lines, tick labels, origin
/// label, then the curve (glow strokes first, core strokes on top).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Renderer {
    theme: Theme,
}

impl Renderer {
    /// Creates a renderer with the given theme.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Current theme.
    #[must_use]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Replaces the theme.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Draws `frame` onto `surface`.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S, frame: &Frame) {
        let theme = &self.theme;
        let Frame {
            transform,
            viewport,
            grid,
            segments,
        } = frame;

        surface.clear(theme.background);
        if viewport.is_empty() {
            return;
        }

        let width = f64::from(viewport.width());
        let height = f64::from(viewport.height());
        let origin = transform.math_to_screen(viewport, Point::ZERO);

        // Grid: all lines in one path.
        let mut grid_path = BezPath::new();
        for &tick in &grid.x_ticks {
            let px = transform.math_to_screen(viewport, Point::new(tick, 0.0)).x;
            grid_path.move_to((px, 0.0));
            grid_path.line_to((px, height));
        }
        for &tick in &grid.y_ticks {
            let py = transform.math_to_screen_y(viewport, tick);
            grid_path.move_to((0.0, py));
            grid_path.line_to((width, py));
        }
        if !grid_path.elements().is_empty() {
            surface.set_paint(theme.grid);
            surface.set_stroke(StrokeStyle::new(theme.grid_width));
            surface.stroke_path(grid_path);
        }

        // Axes, only where they cross the viewport.
        let x_axis_visible = (0.0..=height).contains(&origin.y);
        let y_axis_visible = (0.0..=width).contains(&origin.x);
        if x_axis_visible || y_axis_visible {
            surface.set_paint(theme.axis);
            surface.set_stroke(StrokeStyle::new(theme.axis_width));
            if x_axis_visible {
                let mut path = BezPath::new();
                path.move_to((0.0, origin.y));
                path.line_to((width, origin.y));
                surface.stroke_path(path);
            }
            if y_axis_visible {
                let mut path = BezPath::new();
                path.move_to((origin.x, 0.0));
                path.line_to((origin.x, height));
                surface.stroke_path(path);
            }
        }

        // Tick labels, then the origin label.
        surface.set_paint(theme.label);
        surface.set_font(theme.font.clone());
        let (label_y, baseline) = x_label_row(origin.y, height, theme);
        for &tick in &grid.x_ticks {
            let px = transform.math_to_screen(viewport, Point::new(tick, 0.0)).x;
            if tick == 0.0 || !(0.0..=width).contains(&px) {
                continue;
            }
            surface.fill_text(
                format_tick(tick),
                Point::new(clamp_inside(px, width, theme.label_margin), label_y),
                TextAlign::Center,
                baseline,
            );
        }
        let (label_x, align) = y_label_column(origin.x, width, theme);
        for &tick in &grid.y_ticks {
            let py = transform.math_to_screen_y(viewport, tick);
            if tick == 0.0 || !(0.0..=height).contains(&py) {
                continue;
            }
            surface.fill_text(
                format_tick(tick),
                Point::new(label_x, clamp_inside(py, height, theme.label_margin)),
                align,
                TextBaseline::Middle,
            );
        }
        if x_axis_visible && y_axis_visible {
            let pad = theme.label_padding;
            surface.fill_text(
                String::from("0"),
                Point::new(origin.x - pad, origin.y + pad),
                TextAlign::Right,
                TextBaseline::Top,
            );
        }

        // Curve.
        let drawable = || segments.iter().filter(|segment| segment.len() >= 2);
        if theme.glow_width > 0.0 {
            surface.set_paint(theme.glow());
            surface.set_stroke(curve_stroke(theme.glow_width));
            for segment in drawable() {
                surface.stroke_path(segment.to_bez_path());
            }
        }
        surface.set_paint(theme.curve);
        surface.set_stroke(curve_stroke(theme.curve_width));
        for segment in drawable() {
            surface.stroke_path(segment.to_bez_path());
        }

        log::trace!(
            "rendered {} x ticks, {} y ticks, {} segments",
            grid.x_ticks.len(),
            grid.y_ticks.len(),
            segments.len()
        );
    }
}

/// Clamps `v` into `[margin, extent - margin]`, favouring the low edge when
/// the surface is too small for both margins.
fn clamp_inside(v: f64, extent: f64, margin: f64) -> f64 {
    v.min(extent - margin).max(margin)
}

fn curve_stroke(width: f64) -> StrokeStyle {
    StrokeStyle::new(width)
        .with_caps(Cap::Round)
        .with_join(Join::Round)
}

/// Row and baseline for x tick labels: just below the x axis, kept at least
/// `label_margin` inside the top and bottom edges.
fn x_label_row(axis_y: f64, height: f64, theme: &Theme) -> (f64, TextBaseline) {
    let margin = theme.label_margin;
    let y = axis_y + theme.label_padding;
    if y + theme.font.size > height - margin {
        (clamp_inside(height, height, margin), TextBaseline::Bottom)
    } else {
        (y.max(margin), TextBaseline::Top)
    }
}

/// Column and alignment for y tick labels: just left of the y axis, kept at
/// least `label_margin` inside the left and right edges.
fn y_label_column(axis_x: f64, width: f64, theme: &Theme) -> (f64, TextAlign) {
    let margin = theme.label_margin;
    let x = axis_x - theme.label_padding;
    if x < margin {
        (margin, TextAlign::Left)
    } else {
        (clamp_inside(x, width, margin), TextAlign::Right)
    }
}
