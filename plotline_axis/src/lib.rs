// Copyright 2025 the Plotline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plotline Axis: grid step selection and tick planning.
//!
//! Given a [`ViewTransform`] and a [`Viewport`], this crate picks a
//! human-readable grid step (1, 2 or 5 times a power of ten) that keeps grid
//! lines roughly a fixed number of pixels apart at any zoom level, and lists
//! the tick positions visible on each axis.
//!
//! ```rust
//! use plotline_axis::{calculate_step, plan_grid};
//! use plotline_view::{ViewTransform, Viewport};
//!
//! let view = ViewTransform::new(); // 40 px per unit
//! let viewport = Viewport::new(800, 600);
//!
//! // 80 px / 40 px-per-unit = 2 units between ticks.
//! assert_eq!(calculate_step(view.scale()), 2.0);
//!
//! let plan = plan_grid(&view, &viewport);
//! assert_eq!(plan.step, 2.0);
//! assert_eq!(plan.x_ticks.first(), Some(&-10.0));
//! assert_eq!(plan.x_ticks.last(), Some(&10.0));
//! assert!(plan.y_ticks.contains(&0.0));
//! ```
//!
//! Tick values are rounded to ten significant digits so labels never show
//! binary floating-point residue such as `0.30000000000000004`.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod plan;
mod step;
mod ticks;

pub use plan::{GridPlan, GridPlanner, MAX_TICKS_PER_AXIS, plan_grid};
pub use step::{DEFAULT_TARGET_SPACING_PX, calculate_step, calculate_step_for};
pub use ticks::{SIGNIFICANT_DIGITS, format_tick, round_tick};

use plotline_view::{ViewTransform, Viewport};
