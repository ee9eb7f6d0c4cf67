// Copyright 2025 the Plotline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::Color;

use crate::FontDesc;

/// Colors, widths and text settings used by the [`Renderer`](crate::Renderer).
///
/// Widths and distances are in pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    /// Fill for the whole surface.
    pub background: Color,
    /// Grid line color.
    pub grid: Color,
    /// Axis line color.
    pub axis: Color,
    /// Tick label color.
    pub label: Color,
    /// Curve core color; the glow uses the same color at reduced alpha.
    pub curve: Color,
    /// Grid line width.
    pub grid_width: f64,
    /// Axis line width.
    pub axis_width: f64,
    /// Curve core width.
    pub curve_width: f64,
    /// Width of the translucent stroke drawn under the curve.
    ///
    /// Zero disables the glow.
    pub glow_width: f64,
    /// Alpha multiplier applied to [`curve`](Self::curve) for the glow.
    pub glow_alpha: f32,
    /// Tick label font.
    pub font: FontDesc,
    /// Minimum distance between a label anchor and the surface edge.
    pub label_margin: f64,
    /// Distance between a label anchor and the axis it annotates.
    pub label_padding: f64,
}

impl Theme {
    /// Light-on-dark theme. This is the default.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            background: Color::from_rgb8(0x0b, 0x10, 0x1a),
            grid: Color::from_rgba8(0xff, 0xff, 0xff, 0x14),
            axis: Color::from_rgba8(0xff, 0xff, 0xff, 0x73),
            label: Color::from_rgba8(0xff, 0xff, 0xff, 0x99),
            curve: Color::from_rgb8(0x4c, 0xc9, 0xf0),
            grid_width: 1.0,
            axis_width: 1.5,
            curve_width: 2.0,
            glow_width: 8.0,
            glow_alpha: 0.25,
            font: FontDesc::default(),
            label_margin: 4.0,
            label_padding: 4.0,
        }
    }

    /// Dark-on-light theme, suited to printing and documents.
    #[must_use]
    pub fn light() -> Self {
        Self {
            background: Color::WHITE,
            grid: Color::from_rgba8(0x00, 0x00, 0x00, 0x1a),
            axis: Color::from_rgba8(0x00, 0x00, 0x00, 0xa6),
            label: Color::from_rgba8(0x00, 0x00, 0x00, 0xb3),
            curve: Color::from_rgb8(0x1f, 0x5f, 0xd1),
            glow_width: 0.0,
            ..Self::dark()
        }
    }

    /// The glow color: the curve color with its alpha scaled by
    /// [`glow_alpha`](Self::glow_alpha).
    #[must_use]
    pub fn glow(&self) -> Color {
        self.curve.multiply_alpha(self.glow_alpha)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
