// Copyright 2025 the Plotline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plotline: an interactive plot of `y = f(x)` on a pannable, zoomable
//! Cartesian grid.
//!
//! [`PlotSession`] owns everything that persists between frames: the
//! [`ViewTransform`], the surface size, the compiled expression and the
//! pointer controller. Hosts feed it input and draw with it:
//!
//! ```rust
//! use kurbo::Point;
//! use plotline::{PlotSession, PointerButton, RecordingSurface};
//!
//! let mut session = PlotSession::default();
//! session.resize(800, 600);
//! session.set_expression("sin(x) / x");
//!
//! // Drag right by 40 px, then scroll up over the center.
//! session.pointer_down(PointerButton::Primary, Point::new(400.0, 300.0));
//! assert!(session.pointer_move(Point::new(440.0, 300.0)).redraw);
//! session.pointer_up();
//! assert!(session.wheel(Point::new(400.0, 300.0), -1.0).redraw);
//!
//! let mut surface = RecordingSurface::new();
//! session.render(&mut surface);
//! assert!(surface.draws().count() > 1);
//! ```
//!
//! The building blocks live in their own crates and are re-exported here:
//! [`view`], [`axis`], [`curve`], [`expr`], [`render`] and [`interaction`].
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod config;
mod session;

pub use plotline_axis as axis;
pub use plotline_curve as curve;
pub use plotline_expr as expr;
pub use plotline_interaction as interaction;
pub use plotline_render as render;
pub use plotline_view as view;

pub use config::PlotConfig;
pub use plotline_curve::BreakPolicy;
pub use plotline_expr::{Expression, ParseError};
pub use plotline_interaction::{EventResponse, InteractionState, PointerButton};
pub use plotline_render::{Frame, RecordingSurface, Surface, Theme};
pub use plotline_view::{ViewTransform, Viewport};
pub use session::PlotSession;
