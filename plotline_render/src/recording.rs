// Copyright 2025 the Plotline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use peniko::Color;

use crate::{DrawOp, FontDesc, ImagingOp, StateOp, StrokeStyle, Surface};

/// Snapshot of the current imaging state inside a [`RecordingSurface`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StateSnapshot {
    /// Current paint, if set.
    pub paint: Option<Color>,
    /// Current stroke style, if set.
    pub stroke: Option<StrokeStyle>,
    /// Current font, if set.
    pub font: Option<FontDesc>,
}

/// Event recorded by a [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// State operation and the resulting state snapshot.
    State {
        /// State operation that was applied.
        op: StateOp,
        /// Snapshot after applying the state operation.
        state: StateSnapshot,
    },
    /// Draw operation and the state snapshot used for drawing.
    Draw {
        /// Draw operation that was applied.
        op: DrawOp,
        /// Snapshot at the time of drawing.
        state: StateSnapshot,
    },
}

/// Surface that records ops and the state each one was applied under.
///
/// It draws nothing. Tests use it to assert on draw order and styling, and
/// other surfaces can replay its [`ops`](Self::ops).
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    events: Vec<Event>,
    ops: Vec<ImagingOp>,
    state: StateSnapshot,
}

impl RecordingSurface {
    /// Creates an empty recording.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded events, in the order they were applied.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Raw imaging ops, in the order they were applied.
    #[must_use]
    pub fn ops(&self) -> &[ImagingOp] {
        &self.ops
    }

    /// Draw events only, each with the state it was drawn under.
    pub fn draws(&self) -> impl Iterator<Item = (&DrawOp, &StateSnapshot)> + '_ {
        self.events.iter().filter_map(|event| match event {
            Event::Draw { op, state } => Some((op, state)),
            Event::State { .. } => None,
        })
    }

    /// Current state.
    #[must_use]
    pub fn current_state(&self) -> &StateSnapshot {
        &self.state
    }

    /// Clears recorded events and ops but keeps the current state.
    pub fn clear_events(&mut self) {
        self.events.clear();
        self.ops.clear();
    }

    /// Applies every recorded op, in order, to another surface.
    pub fn replay<S: Surface + ?Sized>(&self, target: &mut S) {
        for op in &self.ops {
            match op {
                ImagingOp::State(op) => target.state(op.clone()),
                ImagingOp::Draw(op) => target.draw(op.clone()),
            }
        }
    }
}

impl Surface for RecordingSurface {
    fn state(&mut self, op: StateOp) {
        match &op {
            StateOp::SetPaint(color) => self.state.paint = Some(*color),
            StateOp::SetStroke(style) => self.state.stroke = Some(style.clone()),
            StateOp::SetFont(font) => self.state.font = Some(font.clone()),
        }

        self.ops.push(ImagingOp::State(op.clone()));
        self.events.push(Event::State {
            op,
            state: self.state.clone(),
        });
    }

    fn draw(&mut self, op: DrawOp) {
        self.ops.push(ImagingOp::Draw(op.clone()));
        self.events.push(Event::Draw {
            op,
            state: self.state.clone(),
        });
    }
}
