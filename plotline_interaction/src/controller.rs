// Copyright 2025 the Plotline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;
use plotline_view::{ViewTransform, Viewport};

use crate::DragState;

/// Default relative zoom per wheel notch.
pub const DEFAULT_ZOOM_STEP: f64 = 0.1;

/// Pointer buttons, independent of any windowing system.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Main button, usually the left mouse button or a touch contact.
    Primary,
    /// Usually the middle mouse button.
    Auxiliary,
    /// Usually the right mouse button.
    Secondary,
    /// Any other button, by DOM index.
    Other(u16),
}

impl PointerButton {
    /// Maps a DOM `MouseEvent.button` index.
    #[must_use]
    pub fn from_dom_index(index: u16) -> Self {
        match index {
            0 => Self::Primary,
            1 => Self::Auxiliary,
            2 => Self::Secondary,
            n => Self::Other(n),
        }
    }
}

/// What the host should do after an event was handled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventResponse {
    /// The view changed and the plot must be redrawn.
    pub redraw: bool,
    /// The host should suppress its default handling (page scroll, text
    /// selection).
    pub prevent_default: bool,
}

impl EventResponse {
    /// Nothing happened.
    pub const IGNORED: Self = Self {
        redraw: false,
        prevent_default: false,
    };
}

/// Interaction state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InteractionState {
    /// No button held.
    #[default]
    Idle,
    /// The primary button is held and moves pan the view.
    Panning,
}

/// Turns pointer and wheel events into [`ViewTransform`] mutations.
///
/// The controller owns only the drag bookkeeping. The view and viewport are
/// passed in per event, so the caller stays the single owner of view state.
#[derive(Clone, Debug, PartialEq)]
pub struct InteractionController {
    drag: DragState,
    zoom_step: f64,
}

impl InteractionController {
    /// Creates an idle controller with [`DEFAULT_ZOOM_STEP`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            drag: DragState::default(),
            zoom_step: DEFAULT_ZOOM_STEP,
        }
    }

    /// Sets the relative zoom per wheel notch.
    ///
    /// Scrolling up zooms by `1 + step`, scrolling down by `1 - step`. Steps
    /// outside `(0, 1)` or non-finite steps fall back to the default.
    #[must_use]
    pub fn with_zoom_step(mut self, step: f64) -> Self {
        self.zoom_step = if step.is_finite() && step > 0.0 && step < 1.0 {
            step
        } else {
            DEFAULT_ZOOM_STEP
        };
        self
    }

    /// Relative zoom per wheel notch.
    #[must_use]
    pub fn zoom_step(&self) -> f64 {
        self.zoom_step
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> InteractionState {
        if self.drag.is_dragging() {
            InteractionState::Panning
        } else {
            InteractionState::Idle
        }
    }

    /// Drag bookkeeping for the current pan.
    #[must_use]
    pub fn drag(&self) -> &DragState {
        &self.drag
    }

    /// Handles a button press at `pos`.
    ///
    /// Only the primary button starts a pan.
    pub fn pointer_down(&mut self, button: PointerButton, pos: Point) -> EventResponse {
        if button != PointerButton::Primary {
            return EventResponse::IGNORED;
        }
        log::trace!("pan started at ({}, {})", pos.x, pos.y);
        self.drag.start(pos);
        EventResponse {
            redraw: false,
            prevent_default: true,
        }
    }

    /// Handles pointer movement to `pos`.
    ///
    /// While panning, the view moves by the pixel delta since the last event.
    /// Moves while idle do nothing.
    pub fn pointer_move(&mut self, view: &mut ViewTransform, pos: Point) -> EventResponse {
        let Some(delta) = self.drag.update(pos) else {
            return EventResponse::IGNORED;
        };
        view.pan(delta);
        EventResponse {
            redraw: delta.x != 0.0 || delta.y != 0.0,
            prevent_default: true,
        }
    }

    /// Handles a button release anywhere. Ends a pan if one is active.
    pub fn pointer_up(&mut self) -> EventResponse {
        self.end_pan()
    }

    /// Handles a cancelled pointer or the pointer leaving the surface.
    /// Behaves like [`pointer_up`](Self::pointer_up).
    pub fn pointer_cancel(&mut self) -> EventResponse {
        self.end_pan()
    }

    /// Handles a wheel event with vertical delta `delta_y` at `pos`.
    ///
    /// A negative delta (scroll up) zooms in around `pos`, a positive one
    /// zooms out. The event is always consumed. The pan state is unchanged.
    pub fn wheel(
        &mut self,
        view: &mut ViewTransform,
        viewport: &Viewport,
        pos: Point,
        delta_y: f64,
    ) -> EventResponse {
        let Some(factor) = self.zoom_factor(delta_y) else {
            return EventResponse {
                redraw: false,
                prevent_default: true,
            };
        };
        view.zoom_at(viewport, pos, factor);
        EventResponse {
            redraw: true,
            prevent_default: true,
        }
    }

    /// Zoom factor for a wheel delta, or `None` if it should not zoom.
    #[must_use]
    pub fn zoom_factor(&self, delta_y: f64) -> Option<f64> {
        if delta_y < 0.0 {
            Some(1.0 + self.zoom_step)
        } else if delta_y > 0.0 {
            Some(1.0 - self.zoom_step)
        } else {
            // Zero or NaN.
            None
        }
    }

    fn end_pan(&mut self) -> EventResponse {
        if !self.drag.is_dragging() {
            return EventResponse::IGNORED;
        }
        log::trace!("pan ended");
        self.drag.end();
        EventResponse::IGNORED
    }
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};
    use plotline_view::{ViewTransform, Viewport};

    use super::{EventResponse, InteractionController, InteractionState, PointerButton};

    #[test]
    fn primary_drag_pans_by_pixel_delta() {
        let viewport = Viewport::new(800, 600);
        let mut view = ViewTransform::new();
        let mut ctl = InteractionController::new();

        let down = ctl.pointer_down(PointerButton::Primary, Point::new(100.0, 100.0));
        assert!(!down.redraw);
        assert_eq!(ctl.state(), InteractionState::Panning);

        let moved = ctl.pointer_move(&mut view, Point::new(140.0, 80.0));
        assert_eq!(
            moved,
            EventResponse {
                redraw: true,
                prevent_default: true
            }
        );
        // 40 px at 40 px/unit is one unit.
        assert_eq!(view.offset(), Vec2::new(1.0, -0.5));
        // The origin follows the pointer.
        assert_eq!(
            view.math_to_screen(&viewport, Point::ZERO),
            Point::new(440.0, 280.0)
        );

        ctl.pointer_up();
        assert_eq!(ctl.state(), InteractionState::Idle);
        assert_eq!(
            ctl.pointer_move(&mut view, Point::new(0.0, 0.0)),
            EventResponse::IGNORED
        );
        assert_eq!(view.offset(), Vec2::new(1.0, -0.5));
    }

    #[test]
    fn other_buttons_do_not_pan() {
        let mut view = ViewTransform::new();
        let mut ctl = InteractionController::new();
        for button in [
            PointerButton::Secondary,
            PointerButton::Auxiliary,
            PointerButton::from_dom_index(4),
        ] {
            assert_eq!(
                ctl.pointer_down(button, Point::new(1.0, 1.0)),
                EventResponse::IGNORED
            );
        }
        ctl.pointer_move(&mut view, Point::new(50.0, 50.0));
        assert_eq!(view.offset(), Vec2::ZERO);
        assert_eq!(PointerButton::from_dom_index(0), PointerButton::Primary);
    }

    #[test]
    fn cancel_ends_a_pan() {
        let mut ctl = InteractionController::new();
        ctl.pointer_down(PointerButton::Primary, Point::ZERO);
        ctl.pointer_cancel();
        assert_eq!(ctl.state(), InteractionState::Idle);
        assert!(ctl.drag().origin().is_none());
    }

    #[test]
    fn wheel_zooms_around_the_cursor() {
        let viewport = Viewport::new(800, 600);
        let mut view = ViewTransform::new();
        let mut ctl = InteractionController::new();

        let cursor = Point::new(600.0, 150.0);
        let anchor = view.screen_to_math(&viewport, cursor);
        let up = ctl.wheel(&mut view, &viewport, cursor, -120.0);
        assert!(up.redraw && up.prevent_default);
        assert!((view.scale() - 44.0).abs() < 1e-9);
        let back = view.math_to_screen(&viewport, anchor);
        assert!((back.x - cursor.x).abs() < 1e-9);
        assert!((back.y - cursor.y).abs() < 1e-9);

        ctl.wheel(&mut view, &viewport, cursor, 3.0);
        assert!((view.scale() - 44.0 * 0.9).abs() < 1e-9);
    }

    #[test]
    fn zero_wheel_delta_is_consumed_without_zoom() {
        let viewport = Viewport::new(800, 600);
        let mut view = ViewTransform::new();
        let mut ctl = InteractionController::new();

        for delta in [0.0, f64::NAN] {
            let response = ctl.wheel(&mut view, &viewport, Point::new(10.0, 10.0), delta);
            assert!(!response.redraw);
            assert!(response.prevent_default);
        }
        assert_eq!(view, ViewTransform::new());
    }

    #[test]
    fn wheel_during_a_pan_keeps_panning() {
        let viewport = Viewport::new(800, 600);
        let mut view = ViewTransform::new();
        let mut ctl = InteractionController::new();

        ctl.pointer_down(PointerButton::Primary, Point::new(10.0, 10.0));
        ctl.wheel(&mut view, &viewport, Point::new(10.0, 10.0), -1.0);
        assert_eq!(ctl.state(), InteractionState::Panning);
        assert!(ctl.pointer_move(&mut view, Point::new(20.0, 10.0)).redraw);
    }

    #[test]
    fn zoom_step_is_configurable() {
        let ctl = InteractionController::new().with_zoom_step(0.25);
        assert_eq!(ctl.zoom_factor(-1.0), Some(1.25));
        assert_eq!(ctl.zoom_factor(1.0), Some(0.75));

        let fallback = InteractionController::new().with_zoom_step(1.5);
        assert_eq!(fallback.zoom_step(), 0.1);
    }
}
