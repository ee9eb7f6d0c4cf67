// Copyright 2025 the Plotline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use kurbo::{Point, Vec2};
use plotline_axis::GridPlanner;
use plotline_curve::CurveSampler;
use plotline_expr::{Expression, ParseError};
use plotline_interaction::{EventResponse, InteractionController, InteractionState, PointerButton};
use plotline_render::{Frame, Renderer, Surface, Theme};
use plotline_view::{ViewTransform, Viewport};

use crate::PlotConfig;

/// All mutable state of one plot.
///
/// The session is the single owner of the view. Input handlers mutate it and
/// report whether a redraw is needed; [`frame`](Self::frame) and
/// [`render`](Self::render) recompute everything from the current state.
#[derive(Clone, Debug)]
pub struct PlotSession {
    view: ViewTransform,
    viewport: Viewport,
    source: String,
    expression: Option<Expression>,
    error: Option<ParseError>,
    controller: InteractionController,
    planner: GridPlanner,
    sampler: CurveSampler,
    renderer: Renderer,
}

impl PlotSession {
    /// Creates a session with no expression and an empty viewport.
    #[must_use]
    pub fn new(config: PlotConfig) -> Self {
        Self {
            view: ViewTransform::with_limits(config.home_scale, config.min_scale, config.max_scale),
            viewport: Viewport::default(),
            source: String::new(),
            expression: None,
            error: None,
            controller: InteractionController::new().with_zoom_step(config.zoom_step),
            planner: GridPlanner::new(config.grid_spacing_px),
            sampler: CurveSampler::new(config.break_policy),
            renderer: Renderer::new(config.theme),
        }
    }

    /// Current view.
    #[must_use]
    pub fn view(&self) -> &ViewTransform {
        &self.view
    }

    /// Current surface size.
    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Source of the current expression, as last passed to
    /// [`set_expression`](Self::set_expression).
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The compiled expression, if the current source parsed.
    #[must_use]
    pub fn expression(&self) -> Option<&Expression> {
        self.expression.as_ref()
    }

    /// Why the current source failed to parse, if it did.
    ///
    /// A blank source is not an error; it simply plots nothing.
    #[must_use]
    pub fn expression_error(&self) -> Option<&ParseError> {
        self.error.as_ref()
    }

    /// Pan/zoom state of the pointer controller.
    #[must_use]
    pub fn interaction_state(&self) -> InteractionState {
        self.controller.state()
    }

    /// Current theme.
    #[must_use]
    pub fn theme(&self) -> &Theme {
        self.renderer.theme()
    }

    /// Replaces the theme.
    pub fn set_theme(&mut self, theme: Theme) {
        self.renderer.set_theme(theme);
    }

    /// Replaces the plotted expression.
    ///
    /// Returns `true` if the source changed and the plot must be redrawn.
    /// A source that does not parse leaves the plot blank and is reported by
    /// [`expression_error`](Self::expression_error).
    pub fn set_expression(&mut self, source: &str) -> bool {
        if source == self.source {
            return false;
        }
        self.source = String::from(source);

        match Expression::parse(source) {
            Ok(expression) => {
                log::debug!("expression set to `{source}`");
                self.expression = Some(expression);
                self.error = None;
            }
            Err(ParseError::Empty) => {
                log::debug!("expression cleared");
                self.expression = None;
                self.error = None;
            }
            Err(err) => {
                log::debug!("expression `{source}` rejected: {err}");
                self.expression = None;
                self.error = Some(err);
            }
        }
        true
    }

    /// Updates the surface size. Returns `true` if it changed.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        let viewport = Viewport::new(width, height);
        if viewport == self.viewport {
            return false;
        }
        log::debug!("viewport resized to {width}x{height}");
        self.viewport = viewport;
        true
    }

    /// Restores the home scale and centers the math origin.
    pub fn reset_view(&mut self) {
        self.view.reset();
    }

    /// Pans by a pixel delta, as a drag by `delta` would.
    pub fn pan_by(&mut self, delta: Vec2) {
        self.view.pan(delta);
    }

    /// Zooms by `factor` around `anchor`, as the wheel does with a fixed step.
    pub fn zoom_at(&mut self, anchor: Point, factor: f64) {
        self.view.zoom_at(&self.viewport, anchor, factor);
    }

    /// Forwards a button press to the controller.
    pub fn pointer_down(&mut self, button: PointerButton, pos: Point) -> EventResponse {
        self.controller.pointer_down(button, pos)
    }

    /// Forwards pointer movement; pans while a primary drag is active.
    pub fn pointer_move(&mut self, pos: Point) -> EventResponse {
        self.controller.pointer_move(&mut self.view, pos)
    }

    /// Forwards a button release.
    pub fn pointer_up(&mut self) -> EventResponse {
        self.controller.pointer_up()
    }

    /// Forwards a cancelled pointer or the pointer leaving the surface.
    pub fn pointer_cancel(&mut self) -> EventResponse {
        self.controller.pointer_cancel()
    }

    /// Forwards a wheel event; zooms around `pos`.
    pub fn wheel(&mut self, pos: Point, delta_y: f64) -> EventResponse {
        self.controller.wheel(&mut self.view, &self.viewport, pos, delta_y)
    }

    /// Plans the grid and samples the current expression.
    #[must_use]
    pub fn frame(&self) -> Frame {
        let evaluator = self
            .expression
            .as_ref()
            .map(|expression| move |x: f64| expression.eval(x));
        Frame::compute(&self.planner, &self.sampler, &evaluator, self.view, self.viewport)
    }

    /// Draws the current state onto `surface`.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        self.renderer.render(surface, &self.frame());
    }
}

impl Default for PlotSession {
    fn default() -> Self {
        Self::new(PlotConfig::default())
    }
}
