// Copyright 2025 the Plotline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plotline Interaction: pointer and wheel handling for a plot view.
//!
//! [`InteractionController`] is a two-state machine:
//!
//! - **Idle**: a primary-button press starts a pan.
//! - **Panning**: every move pans the [`ViewTransform`](plotline_view::ViewTransform)
//!   by the pixel delta since the previous event; a release (or cancel) ends
//!   the pan.
//!
//! The wheel zooms around the cursor in either state. Every handler returns
//! an [`EventResponse`] telling the host whether to redraw and whether to
//! suppress the platform's default handling.
//!
//! ```rust
//! use kurbo::Point;
//! use plotline_interaction::{InteractionController, PointerButton};
//! use plotline_view::{ViewTransform, Viewport};
//!
//! let viewport = Viewport::new(800, 600);
//! let mut view = ViewTransform::new();
//! let mut controller = InteractionController::new();
//!
//! controller.pointer_down(PointerButton::Primary, Point::new(400.0, 300.0));
//! let response = controller.pointer_move(&mut view, Point::new(440.0, 300.0));
//! assert!(response.redraw);
//! controller.pointer_up();
//!
//! // Scroll up zooms in by 10%.
//! let response = controller.wheel(&mut view, &viewport, Point::new(400.0, 300.0), -1.0);
//! assert!(response.prevent_default);
//! assert!((view.scale() - 44.0).abs() < 1e-9);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod controller;
mod drag;

pub use controller::{
    DEFAULT_ZOOM_STEP, EventResponse, InteractionController, InteractionState, PointerButton,
};
pub use drag::DragState;
