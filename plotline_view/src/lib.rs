// Copyright 2025 the Plotline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plotline View: the math-space view transform behind a function plot.
//!
//! This crate provides a small, headless model of a Cartesian plot view
//! expressed in device pixels. It focuses on:
//! - View state: a uniform scale (pixels per math unit) plus a pan offset
//!   in math units.
//! - Coordinate conversion between math space (y up) and screen space
//!   (origin top-left, y down).
//! - Panning by pixel deltas and zooming anchored at a cursor position.
//!
//! It does **not** draw anything or interpret input events. Callers are
//! expected to:
//! - Keep one [`ViewTransform`] per plotting session.
//! - Rebuild the [`Viewport`] whenever the drawing surface is resized.
//! - Trigger a redraw after every mutation; the transform never redraws
//!   itself.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use plotline_view::{ViewTransform, Viewport};
//!
//! // Device/view size: 800x600 window.
//! let viewport = Viewport::new(800, 600);
//! let mut view = ViewTransform::new();
//!
//! // The math origin sits at the center of the viewport.
//! assert_eq!(view.math_to_screen(&viewport, Point::ZERO), Point::new(400.0, 300.0));
//!
//! // Zoom in around the cursor; the math point under it stays put.
//! let cursor = Point::new(600.0, 150.0);
//! let before = view.screen_to_math(&viewport, cursor);
//! view.zoom_at(&viewport, cursor, 1.1);
//! let after = view.math_to_screen(&viewport, before);
//! assert!((after.x - cursor.x).abs() < 1e-9);
//! assert!((after.y - cursor.y).abs() < 1e-9);
//! ```
//!
//! ## Design notes
//!
//! - The zoom is **uniform**: one scale for both axes.
//! - The pan offset is stored in math units, so a pixel drag is divided by
//!   the current scale before it is applied.
//! - The scale is clamped into `[SCALE_MIN, SCALE_MAX]` on every mutation;
//!   out-of-range requests are silently clamped.
//!
//! This crate is `no_std`.

#![no_std]

mod transform;
mod viewport;

pub use transform::{
    DEFAULT_SCALE, SCALE_MAX, SCALE_MIN, ViewTransform, ViewTransformDebugInfo,
};
pub use viewport::Viewport;
