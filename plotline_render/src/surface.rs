// Copyright 2025 the Plotline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use kurbo::{BezPath, Point};
use peniko::Color;

use crate::{DrawOp, FontDesc, StateOp, StrokeStyle, TextAlign, TextBaseline};

/// Drawing target that consumes imaging ops.
///
/// Implementations apply each op in order. State persists across draws until
/// changed; its initial value is backend-defined, so callers set paint,
/// stroke and font before the first draw that uses them.
pub trait Surface {
    /// Apply a state operation.
    fn state(&mut self, op: StateOp);

    /// Apply a draw operation.
    fn draw(&mut self, op: DrawOp);

    /// Set the current paint.
    ///
    /// This is equivalent to `self.state(StateOp::SetPaint(color))`.
    #[inline]
    fn set_paint(&mut self, color: Color) {
        self.state(StateOp::SetPaint(color));
    }

    /// Set the current stroke style.
    #[inline]
    fn set_stroke(&mut self, stroke: StrokeStyle) {
        self.state(StateOp::SetStroke(stroke));
    }

    /// Set the current font.
    #[inline]
    fn set_font(&mut self, font: FontDesc) {
        self.state(StateOp::SetFont(font));
    }

    /// Fill the whole surface with `color`.
    #[inline]
    fn clear(&mut self, color: Color) {
        self.draw(DrawOp::Clear(color));
    }

    /// Stroke `path` with the current stroke and paint.
    #[inline]
    fn stroke_path(&mut self, path: BezPath) {
        self.draw(DrawOp::StrokePath(path));
    }

    /// Fill `text` at `origin` with the current font and paint.
    #[inline]
    fn fill_text(&mut self, text: String, origin: Point, align: TextAlign, baseline: TextBaseline) {
        self.draw(DrawOp::FillText {
            text,
            origin,
            align,
            baseline,
        });
    }
}

impl<S: Surface + ?Sized> Surface for &mut S {
    #[inline]
    fn state(&mut self, op: StateOp) {
        (**self).state(op);
    }

    #[inline]
    fn draw(&mut self, op: DrawOp) {
        (**self).draw(op);
    }
}
