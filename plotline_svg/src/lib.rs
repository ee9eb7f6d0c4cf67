// Copyright 2025 the Plotline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG export surface for Plotline imaging ops.
//!
//! [`SvgSurface`] records the ops a [`Renderer`](plotline_render::Renderer)
//! issues and writes them out as a standalone SVG document:
//! - `Clear` becomes a full-size `<rect>`.
//! - `StrokePath` becomes a `<path>` with the current paint and stroke.
//! - `FillText` becomes a `<text>` with escaped content and the current font.
//!
//! ```rust
//! use plotline_render::{Color, Surface};
//! use plotline_svg::SvgSurface;
//!
//! let mut surface = SvgSurface::new();
//! surface.clear(Color::WHITE);
//! let svg = surface.to_svg(320, 200);
//! assert!(svg.starts_with("<svg"));
//! assert!(svg.contains("<rect width=\"320\" height=\"200\" fill=\"#ffffff\"/>"));
//! ```
//!
//! Numbers are written compactly: integers without a fraction, everything
//! else with at most three decimals.

#![no_std]

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write as _;

use kurbo::{BezPath, Cap, Join, PathEl};
use peniko::Color;
use plotline_render::{
    DrawOp, FontDesc, ImagingOp, StateOp, StrokeStyle, Surface, TextAlign, TextBaseline,
};

#[derive(Clone, Debug, Default)]
struct SvgState {
    paint: Option<Color>,
    stroke: Option<StrokeStyle>,
    font: Option<FontDesc>,
}

/// A recording surface that exports SVG.
#[derive(Clone, Debug, Default)]
pub struct SvgSurface {
    ops: Vec<ImagingOp>,
}

impl SvgSurface {
    /// Creates an empty surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the recorded ops.
    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }

    /// Returns the recorded imaging ops.
    #[must_use]
    pub fn ops(&self) -> &[ImagingOp] {
        &self.ops
    }

    /// Export the recorded ops as an SVG document.
    ///
    /// `width`/`height` are used both as the SVG `width`/`height` attributes
    /// and to set `viewBox="0 0 width height"`.
    #[must_use]
    pub fn to_svg(&self, width: u32, height: u32) -> String {
        let mut body = String::new();
        let mut state = SvgState::default();

        for op in &self.ops {
            match op {
                ImagingOp::State(StateOp::SetPaint(color)) => state.paint = Some(*color),
                ImagingOp::State(StateOp::SetStroke(style)) => state.stroke = Some(style.clone()),
                ImagingOp::State(StateOp::SetFont(font)) => state.font = Some(font.clone()),
                ImagingOp::Draw(draw) => write_draw_op(&mut body, draw, &state, width, height),
            }
        }

        let mut svg = String::new();
        let _ = writeln!(
            svg,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">"
        );
        svg.push_str(&body);
        svg.push_str("</svg>\n");
        svg
    }
}

impl Surface for SvgSurface {
    fn state(&mut self, op: StateOp) {
        self.ops.push(ImagingOp::State(op));
    }

    fn draw(&mut self, op: DrawOp) {
        self.ops.push(ImagingOp::Draw(op));
    }
}

fn write_draw_op(out: &mut String, op: &DrawOp, state: &SvgState, width: u32, height: u32) {
    match op {
        DrawOp::Clear(color) => {
            let (rgb, a) = color_to_svg(*color);
            let _ = write!(out, "<rect width=\"{width}\" height=\"{height}\" fill=\"{rgb}\"");
            if a < 1.0 {
                let _ = write!(out, " fill-opacity=\"{}\"", fmt_num(f64::from(a)));
            }
            out.push_str("/>\n");
        }
        DrawOp::StrokePath(path) => {
            if path.elements().is_empty() {
                return;
            }
            let _ = writeln!(
                out,
                "<path d=\"{}\" fill=\"none\"{}/>",
                bez_path_to_svg_d(path),
                stroke_attrs(state)
            );
        }
        DrawOp::FillText {
            text,
            origin,
            align,
            baseline,
        } => {
            let _ = write!(
                out,
                "<text x=\"{}\" y=\"{}\" text-anchor=\"{}\" dominant-baseline=\"{}\"",
                fmt_num(origin.x),
                fmt_num(origin.y),
                text_anchor_svg(*align),
                baseline_svg(*baseline)
            );
            if let Some(font) = &state.font {
                let _ = write!(
                    out,
                    " font-family=\"{}\" font-size=\"{}\"",
                    escape_xml(&font.family),
                    fmt_num(font.size)
                );
            }
            if let Some(color) = state.paint {
                let (rgb, a) = color_to_svg(color);
                let _ = write!(out, " fill=\"{rgb}\"");
                if a < 1.0 {
                    let _ = write!(out, " fill-opacity=\"{}\"", fmt_num(f64::from(a)));
                }
            }
            let _ = writeln!(out, ">{}</text>", escape_xml(text));
        }
    }
}

fn stroke_attrs(state: &SvgState) -> String {
    let mut out = String::new();
    if let Some(color) = state.paint {
        let (rgb, a) = color_to_svg(color);
        let _ = write!(out, " stroke=\"{rgb}\"");
        if a < 1.0 {
            let _ = write!(out, " stroke-opacity=\"{}\"", fmt_num(f64::from(a)));
        }
    }
    if let Some(stroke) = state.stroke.as_ref() {
        let _ = write!(out, " stroke-width=\"{}\"", fmt_num(stroke.width));
        // SVG has a single linecap, while kurbo can specify start/end caps.
        // Use the start cap when they differ.
        if stroke.start_cap != Cap::Butt {
            let _ = write!(
                out,
                " stroke-linecap=\"{}\"",
                stroke_cap_svg(stroke.start_cap)
            );
        }
        if stroke.join != Join::Miter {
            let _ = write!(out, " stroke-linejoin=\"{}\"", stroke_join_svg(stroke.join));
        }
    }
    out
}

fn stroke_cap_svg(cap: Cap) -> &'static str {
    match cap {
        Cap::Butt => "butt",
        Cap::Round => "round",
        Cap::Square => "square",
    }
}

fn stroke_join_svg(join: Join) -> &'static str {
    match join {
        Join::Miter => "miter",
        Join::Round => "round",
        Join::Bevel => "bevel",
    }
}

fn text_anchor_svg(align: TextAlign) -> &'static str {
    match align {
        TextAlign::Left => "start",
        TextAlign::Center => "middle",
        TextAlign::Right => "end",
    }
}

fn baseline_svg(baseline: TextBaseline) -> &'static str {
    match baseline {
        TextBaseline::Top => "text-before-edge",
        TextBaseline::Middle => "central",
        TextBaseline::Alphabetic => "alphabetic",
        TextBaseline::Bottom => "text-after-edge",
    }
}

fn color_to_svg(color: Color) -> (String, f32) {
    let rgba = color.to_rgba8();
    let a = f32::from(rgba.a) / 255.0;
    (format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b), a)
}

fn bez_path_to_svg_d(path: &BezPath) -> String {
    let mut d = String::new();
    for el in path.iter() {
        match el {
            PathEl::MoveTo(p) => {
                let _ = write!(d, "M{} {}", fmt_num(p.x), fmt_num(p.y));
            }
            PathEl::LineTo(p) => {
                let _ = write!(d, "L{} {}", fmt_num(p.x), fmt_num(p.y));
            }
            PathEl::QuadTo(p1, p2) => {
                let _ = write!(
                    d,
                    "Q{} {} {} {}",
                    fmt_num(p1.x),
                    fmt_num(p1.y),
                    fmt_num(p2.x),
                    fmt_num(p2.y)
                );
            }
            PathEl::CurveTo(p1, p2, p3) => {
                let _ = write!(
                    d,
                    "C{} {} {} {} {} {}",
                    fmt_num(p1.x),
                    fmt_num(p1.y),
                    fmt_num(p2.x),
                    fmt_num(p2.y),
                    fmt_num(p3.x),
                    fmt_num(p3.y)
                );
            }
            PathEl::ClosePath => d.push('Z'),
        }
    }
    d
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

fn fmt_num(v: f64) -> String {
    if !v.is_finite() {
        return format!("{v}");
    }
    // Integral values within i64 range print without a fraction.
    if v.abs() < 9.0e15 {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "magnitude checked above; only used to detect integers"
        )]
        let i = v as i64;
        if i as f64 == v {
            return format!("{i}");
        }
    }

    let mut s = format!("{v:.3}");
    while s.contains('.') && s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    if s == "-0" {
        s.remove(0);
    }
    s
}
