// Copyright 2025 the Plotline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plotline Render: imaging IR, surfaces, and the frame renderer.
//!
//! Rendering is split in two:
//!
//! - A tiny imaging IR: [`StateOp`] (paint, stroke, font) and [`DrawOp`]
//!   (clear, stroke a path, fill text), consumed by any [`Surface`].
//! - A [`Renderer`] that turns a [`Frame`] (grid plan plus curve segments)
//!   into those ops with a [`Theme`].
//!
//! Concrete surfaces live in their own crates (SVG export, HTML canvas).
//! [`RecordingSurface`] keeps every op together with the state it was applied
//! under, which is what tests and debugging tools want.
//!
//! ```rust
//! use plotline_axis::GridPlanner;
//! use plotline_curve::CurveSampler;
//! use plotline_render::{DrawOp, Frame, RecordingSurface, Renderer};
//! use plotline_view::{ViewTransform, Viewport};
//!
//! let frame = Frame::compute(
//!     &GridPlanner::default(),
//!     &CurveSampler::default(),
//!     &|x: f64| x * x,
//!     ViewTransform::new(),
//!     Viewport::new(800, 600),
//! );
//!
//! let mut surface = RecordingSurface::new();
//! Renderer::default().render(&mut surface, &frame);
//!
//! let (first, _) = surface.draws().next().unwrap();
//! assert!(matches!(first, DrawOp::Clear(_)));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod ir;
mod recording;
mod renderer;
mod surface;
mod theme;

pub use ir::{DrawOp, FontDesc, ImagingOp, StateOp, StrokeStyle, TextAlign, TextBaseline};
pub use peniko::Color;
pub use recording::{Event, RecordingSurface, StateSnapshot};
pub use renderer::{Frame, Renderer};
pub use surface::Surface;
pub use theme::Theme;
