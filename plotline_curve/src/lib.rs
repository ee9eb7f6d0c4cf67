// Copyright 2025 the Plotline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plotline Curve: turn `y = f(x)` into drawable screen-space polylines.
//!
//! The sampler walks every pixel column of a [`Viewport`], maps it to math
//! `x` through a [`ViewTransform`], evaluates the function, and maps the
//! result back to a pixel row. Consecutive defined samples form a
//! [`PathSegment`]; an undefined sample (NaN or infinite) ends the segment,
//! so the curve is never drawn across a gap in its domain.
//!
//! ```rust
//! use kurbo::Point;
//! use plotline_curve::sample_curve;
//! use plotline_view::{ViewTransform, Viewport};
//!
//! let view = ViewTransform::new();
//! let viewport = Viewport::new(800, 600);
//!
//! let segments = sample_curve(&|x: f64| x * x, &view, &viewport);
//! assert_eq!(segments.len(), 1);
//! assert_eq!(segments[0].points()[400], Point::new(400.0, 300.0));
//!
//! // ln(x) is undefined left of the y axis.
//! let segments = sample_curve(&|x: f64| x.ln(), &view, &viewport);
//! assert_eq!(segments.len(), 1);
//! assert_eq!(segments[0].first().unwrap().x, 401.0);
//! ```
//!
//! Sampling is one evaluation per column regardless of zoom. Adjacent
//! finite samples are joined by default; [`BreakPolicy::MaxJump`] opts into
//! cutting the near-vertical connector drawn across a pole.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod evaluator;
mod sampler;
mod segment;

pub use evaluator::Evaluator;
pub use sampler::{BreakPolicy, CurveSampler, sample_curve};
pub use segment::PathSegment;
