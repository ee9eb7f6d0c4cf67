// Copyright 2025 the Plotline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! HTML canvas (2D) surface for Plotline imaging ops.
//!
//! This crate provides a [`Surface`] implementation backed by
//! `web_sys::CanvasRenderingContext2d` when targeting `wasm32`.
//!
//! ```no_run
//! #[cfg(target_arch = "wasm32")]
//! fn make_surface(
//!     canvas: web_sys::HtmlCanvasElement,
//! ) -> Result<plotline_web_canvas::WebCanvasSurface, wasm_bindgen::JsValue> {
//!     plotline_web_canvas::WebCanvasSurface::new_html_canvas(canvas)
//! }
//! ```
//!
//! Mapping:
//! - `Clear` fills the whole canvas with `fillRect` under an identity transform.
//! - `StrokePath` replays the path with `beginPath`/`moveTo`/`lineTo`/... and
//!   calls `stroke`.
//! - `FillText` calls `fillText` after setting `textAlign` and `textBaseline`.
//!
//! On other targets the crate only exports a stand-in type that ignores all
//! ops, so it can stay in the workspace.

#![no_std]

extern crate alloc;

#[cfg(any(target_arch = "wasm32", test))]
use alloc::{format, string::String};
#[cfg(any(target_arch = "wasm32", test))]
use kurbo::{Cap, Join};
#[cfg(any(target_arch = "wasm32", test))]
use plotline_render::{FontDesc, TextAlign, TextBaseline};
use plotline_render::{DrawOp, StateOp, Surface};

#[cfg(target_arch = "wasm32")]
use alloc::string::ToString;
#[cfg(target_arch = "wasm32")]
use core::fmt;
#[cfg(target_arch = "wasm32")]
use plotline_render::StrokeStyle;

#[cfg(target_arch = "wasm32")]
use js_sys::Array;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsCast, JsValue};
#[cfg(target_arch = "wasm32")]
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

#[cfg(any(target_arch = "wasm32", test))]
fn cap_to_canvas(cap: Cap) -> &'static str {
    match cap {
        Cap::Butt => "butt",
        Cap::Round => "round",
        Cap::Square => "square",
    }
}

#[cfg(any(target_arch = "wasm32", test))]
fn join_to_canvas(join: Join) -> &'static str {
    match join {
        Join::Bevel => "bevel",
        Join::Miter => "miter",
        Join::Round => "round",
    }
}

#[cfg(any(target_arch = "wasm32", test))]
fn align_to_canvas(align: TextAlign) -> &'static str {
    match align {
        TextAlign::Left => "left",
        TextAlign::Center => "center",
        TextAlign::Right => "right",
    }
}

#[cfg(any(target_arch = "wasm32", test))]
fn baseline_to_canvas(baseline: TextBaseline) -> &'static str {
    match baseline {
        TextBaseline::Top => "top",
        TextBaseline::Middle => "middle",
        TextBaseline::Alphabetic => "alphabetic",
        TextBaseline::Bottom => "bottom",
    }
}

/// CSS `font` shorthand, e.g. `11px monospace`.
#[cfg(any(target_arch = "wasm32", test))]
fn font_to_css(font: &FontDesc) -> String {
    format!("{}px {}", font.size, font.family)
}

#[cfg(target_arch = "wasm32")]
fn color_to_css(color: peniko::Color) -> String {
    // `Rgba8` formats as a CSS `rgb(...)`/`rgba(...)` string.
    color.to_rgba8().to_string()
}

#[cfg(target_arch = "wasm32")]
fn apply_stroke_style(ctx: &CanvasRenderingContext2d, style: &StrokeStyle) {
    ctx.set_line_width(style.width);
    ctx.set_miter_limit(style.miter_limit);
    ctx.set_line_cap(cap_to_canvas(style.start_cap));
    ctx.set_line_join(join_to_canvas(style.join));

    let dash = Array::new();
    for v in style.dash_pattern.iter().copied() {
        dash.push(&JsValue::from_f64(v));
    }
    let _ = ctx.set_line_dash(&dash);
    ctx.set_line_dash_offset(style.dash_offset);
}

#[cfg(target_arch = "wasm32")]
fn begin_path_from_bez(ctx: &CanvasRenderingContext2d, path: &kurbo::BezPath) {
    use kurbo::PathEl;

    ctx.begin_path();
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => ctx.move_to(p.x, p.y),
            PathEl::LineTo(p) => ctx.line_to(p.x, p.y),
            PathEl::QuadTo(p1, p) => ctx.quadratic_curve_to(p1.x, p1.y, p.x, p.y),
            PathEl::CurveTo(p1, p2, p) => ctx.bezier_curve_to(p1.x, p1.y, p2.x, p2.y, p.x, p.y),
            PathEl::ClosePath => ctx.close_path(),
        }
    }
}

/// Canvas 2D surface (only available on `wasm32`).
///
/// Paint is applied lazily at draw time, so a `Clear` never disturbs the
/// paint used by later strokes and text.
#[cfg(target_arch = "wasm32")]
pub struct WebCanvasSurface {
    ctx: CanvasRenderingContext2d,
    paint: String,
}

#[cfg(target_arch = "wasm32")]
impl fmt::Debug for WebCanvasSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebCanvasSurface")
            .field("paint", &self.paint)
            .finish_non_exhaustive()
    }
}

#[cfg(target_arch = "wasm32")]
impl WebCanvasSurface {
    /// Create a surface that draws into the given canvas 2D context.
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self {
            ctx,
            paint: color_to_css(peniko::Color::BLACK),
        }
    }

    /// Create a surface for a DOM canvas element.
    pub fn new_html_canvas(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("missing 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self::new(ctx))
    }

    /// The underlying context.
    pub fn context(&self) -> &CanvasRenderingContext2d {
        &self.ctx
    }

    fn clear_canvas(&self, color: peniko::Color) {
        let Some(canvas) = self.ctx.canvas() else {
            return;
        };
        self.ctx.save();
        let _ = self.ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        self.ctx.set_fill_style_str(&color_to_css(color));
        self.ctx.fill_rect(
            0.0,
            0.0,
            f64::from(canvas.width()),
            f64::from(canvas.height()),
        );
        self.ctx.restore();
    }
}

#[cfg(target_arch = "wasm32")]
impl Surface for WebCanvasSurface {
    fn state(&mut self, op: StateOp) {
        match op {
            StateOp::SetPaint(color) => self.paint = color_to_css(color),
            StateOp::SetStroke(style) => apply_stroke_style(&self.ctx, &style),
            StateOp::SetFont(font) => self.ctx.set_font(&font_to_css(&font)),
        }
    }

    fn draw(&mut self, op: DrawOp) {
        match op {
            DrawOp::Clear(color) => self.clear_canvas(color),
            DrawOp::StrokePath(path) => {
                if path.elements().is_empty() {
                    return;
                }
                self.ctx.set_stroke_style_str(&self.paint);
                begin_path_from_bez(&self.ctx, &path);
                self.ctx.stroke();
            }
            DrawOp::FillText {
                text,
                origin,
                align,
                baseline,
            } => {
                self.ctx.set_fill_style_str(&self.paint);
                self.ctx.set_text_align(align_to_canvas(align));
                self.ctx.set_text_baseline(baseline_to_canvas(baseline));
                let _ = self.ctx.fill_text(&text, origin.x, origin.y);
            }
        }
    }
}

/// Stand-in type for non-wasm targets so the crate can be included in the
/// workspace. All ops are ignored.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Default)]
pub struct WebCanvasSurface;

#[cfg(not(target_arch = "wasm32"))]
impl Surface for WebCanvasSurface {
    fn state(&mut self, _op: StateOp) {}

    fn draw(&mut self, _op: DrawOp) {}
}
