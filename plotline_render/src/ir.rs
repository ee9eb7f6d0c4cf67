// Copyright 2025 the Plotline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::borrow::Cow;
use alloc::string::String;

use kurbo::{BezPath, Point};
use peniko::Color;

/// Stroke parameters (width, joins, caps, dashes).
///
/// This is a re-export of [`kurbo::Stroke`].
pub type StrokeStyle = kurbo::Stroke;

/// Font used for text draws.
#[derive(Clone, Debug, PartialEq)]
pub struct FontDesc {
    /// Family name or generic family, such as `monospace`.
    pub family: Cow<'static, str>,
    /// Size in pixels.
    pub size: f64,
}

impl FontDesc {
    /// Creates a font description.
    #[must_use]
    pub fn new(family: impl Into<Cow<'static, str>>, size: f64) -> Self {
        Self {
            family: family.into(),
            size,
        }
    }
}

impl Default for FontDesc {
    fn default() -> Self {
        Self::new("monospace", 11.0)
    }
}

/// Horizontal placement of text relative to its origin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextAlign {
    /// Text starts at the origin.
    #[default]
    Left,
    /// Text is centered on the origin.
    Center,
    /// Text ends at the origin.
    Right,
}

/// Vertical placement of text relative to its origin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextBaseline {
    /// The top of the em box sits on the origin.
    Top,
    /// The middle of the em box sits on the origin.
    Middle,
    /// The alphabetic baseline sits on the origin.
    #[default]
    Alphabetic,
    /// The bottom of the em box sits on the origin.
    Bottom,
}

/// State operations that mutate the current imaging state.
#[derive(Clone, Debug, PartialEq)]
pub enum StateOp {
    /// Set the current paint color for strokes, fills and text.
    SetPaint(Color),
    /// Set the current stroke style.
    SetStroke(StrokeStyle),
    /// Set the current font.
    SetFont(FontDesc),
}

/// Draw operations that produce pixels given the current state.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// Fill the whole surface with a color, ignoring the current paint.
    Clear(Color),
    /// Stroke a path with the current stroke and paint.
    StrokePath(BezPath),
    /// Fill text with the current font and paint.
    FillText {
        /// Text to draw.
        text: String,
        /// Anchor point, in pixels.
        origin: Point,
        /// Horizontal placement relative to `origin`.
        align: TextAlign,
        /// Vertical placement relative to `origin`.
        baseline: TextBaseline,
    },
}

/// Unified imaging operation used by recordings.
#[derive(Clone, Debug, PartialEq)]
pub enum ImagingOp {
    /// State-changing operation.
    State(StateOp),
    /// Drawing operation.
    Draw(DrawOp),
}
