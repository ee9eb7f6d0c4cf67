// Copyright 2025 the Plotline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag bookkeeping: where a drag started, where the pointer was last seen,
//! and the pixel deltas between them.
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use plotline_interaction::DragState;
//!
//! let mut drag = DragState::default();
//! drag.start(Point::new(10.0, 20.0));
//!
//! assert_eq!(drag.update(Point::new(15.0, 18.0)), Some(Vec2::new(5.0, -2.0)));
//! assert_eq!(drag.update(Point::new(16.0, 18.0)), Some(Vec2::new(1.0, 0.0)));
//! assert_eq!(drag.total_offset(Point::new(16.0, 18.0)), Some(Vec2::new(6.0, -2.0)));
//!
//! drag.end();
//! assert!(!drag.is_dragging());
//! ```

use kurbo::{Point, Vec2};

/// Start and last-seen positions of an active drag, in screen pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragState {
    origin: Option<Point>,
    last: Option<Point>,
}

impl DragState {
    /// Begins a drag at `pos`, replacing any drag in progress.
    pub fn start(&mut self, pos: Point) {
        self.origin = Some(pos);
        self.last = Some(pos);
    }

    /// Moves the drag to `pos` and returns the delta since the previous
    /// position, or `None` when no drag is active.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        if !self.is_dragging() {
            return None;
        }
        let last = self.last.replace(pos)?;
        Some(pos - last)
    }

    /// Offset from the drag origin to `pos`.
    #[must_use]
    pub fn total_offset(&self, pos: Point) -> Option<Vec2> {
        self.origin.map(|origin| pos - origin)
    }

    /// Where the current drag began.
    #[must_use]
    pub fn origin(&self) -> Option<Point> {
        self.origin
    }

    /// Last position passed to [`start`](Self::start) or
    /// [`update`](Self::update).
    #[must_use]
    pub fn last(&self) -> Option<Point> {
        self.last
    }

    /// Ends the drag.
    pub fn end(&mut self) {
        *self = Self::default();
    }

    /// Whether a drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.origin.is_some()
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::DragState;

    #[test]
    fn idle_drag_reports_nothing() {
        let mut drag = DragState::default();
        assert!(!drag.is_dragging());
        assert_eq!(drag.update(Point::new(3.0, 4.0)), None);
        assert_eq!(drag.last(), None);
        assert_eq!(drag.total_offset(Point::new(3.0, 4.0)), None);
    }

    #[test]
    fn deltas_are_incremental_and_offset_is_cumulative() {
        let mut drag = DragState::default();
        drag.start(Point::new(100.0, 100.0));

        assert_eq!(drag.update(Point::new(90.0, 85.0)), Some(Vec2::new(-10.0, -15.0)));
        assert_eq!(drag.update(Point::new(92.5, 85.0)), Some(Vec2::new(2.5, 0.0)));
        assert_eq!(drag.update(Point::new(92.5, 85.0)), Some(Vec2::ZERO));
        assert_eq!(
            drag.total_offset(Point::new(92.5, 85.0)),
            Some(Vec2::new(-7.5, -15.0))
        );
        assert_eq!(drag.origin(), Some(Point::new(100.0, 100.0)));
    }

    #[test]
    fn restart_replaces_the_previous_drag() {
        let mut drag = DragState::default();
        drag.start(Point::ZERO);
        drag.update(Point::new(10.0, 10.0));

        drag.start(Point::new(50.0, 60.0));
        assert_eq!(drag.last(), Some(Point::new(50.0, 60.0)));
        assert_eq!(
            drag.total_offset(Point::new(55.0, 65.0)),
            Some(Vec2::new(5.0, 5.0))
        );
    }

    #[test]
    fn end_resets() {
        let mut drag = DragState::default();
        drag.start(Point::new(1.0, 2.0));
        drag.end();
        assert_eq!(drag, DragState::default());
        // Ending twice is harmless.
        drag.end();
        assert!(!drag.is_dragging());
    }
}
