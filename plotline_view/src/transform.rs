// Copyright 2025 the Plotline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Vec2};

use crate::Viewport;

/// Smallest allowed scale, in pixels per math unit.
pub const SCALE_MIN: f64 = 1e-3;

/// Largest allowed scale, in pixels per math unit.
pub const SCALE_MAX: f64 = 1e5;

/// Scale restored by [`ViewTransform::reset`] unless configured otherwise.
pub const DEFAULT_SCALE: f64 = 40.0;

/// Uniform scale + pan mapping between math space and screen pixels.
///
/// With viewport center `(cx, cy)`:
///
/// ```text
/// px = cx + (x + offset_x) * scale
/// py = cy - (y - offset_y) * scale
/// ```
///
/// The Y axis is flipped: screen rows grow downwards while math `y` grows
/// upwards. The offsets are expressed in math units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    scale: f64,
    offset: Vec2,
    home_scale: f64,
    min_scale: f64,
    max_scale: f64,
}

impl ViewTransform {
    /// Creates a transform at the default scale with no pan.
    ///
    /// - Initial scale is [`DEFAULT_SCALE`].
    /// - Initial offset is zero (math origin at the viewport center).
    /// - Scale is clamped to `[SCALE_MIN, SCALE_MAX]`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_limits(DEFAULT_SCALE, SCALE_MIN, SCALE_MAX)
    }

    /// Creates a transform with a custom home scale and scale limits.
    ///
    /// The limits are normalized so that `min_scale <= max_scale`, and the
    /// home scale is clamped into them.
    #[must_use]
    pub fn with_limits(home_scale: f64, min_scale: f64, max_scale: f64) -> Self {
        let mut view = Self {
            scale: DEFAULT_SCALE,
            offset: Vec2::ZERO,
            home_scale: DEFAULT_SCALE,
            min_scale: SCALE_MIN,
            max_scale: SCALE_MAX,
        };
        view.set_scale_limits(min_scale, max_scale);
        view.set_home_scale(home_scale);
        view.reset();
        view
    }

    /// Returns the current scale in pixels per math unit.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns the pan offset in math units.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Returns the scale that [`ViewTransform::reset`] restores.
    #[must_use]
    pub fn home_scale(&self) -> f64 {
        self.home_scale
    }

    /// Returns the `(min, max)` scale limits.
    #[must_use]
    pub fn scale_limits(&self) -> (f64, f64) {
        (self.min_scale, self.max_scale)
    }

    /// Sets the minimum and maximum scale.
    ///
    /// The provided range is normalized so that `min_scale <= max_scale`. A
    /// limit that is not a positive finite number is replaced by
    /// [`SCALE_MIN`] or [`SCALE_MAX`] respectively. The current and home
    /// scales are clamped into the new range.
    pub fn set_scale_limits(&mut self, min_scale: f64, max_scale: f64) {
        let min_scale = if min_scale.is_finite() && min_scale > 0.0 {
            min_scale
        } else {
            SCALE_MIN
        };
        let max_scale = if max_scale.is_finite() && max_scale > 0.0 {
            max_scale
        } else {
            SCALE_MAX
        };
        let (min_scale, max_scale) = if min_scale <= max_scale {
            (min_scale, max_scale)
        } else {
            (max_scale, min_scale)
        };
        self.min_scale = min_scale;
        self.max_scale = max_scale;
        self.scale = self.clamp_scale(self.scale);
        self.home_scale = self.clamp_scale(self.home_scale);
    }

    /// Sets the scale used by [`ViewTransform::reset`], clamped into the limits.
    pub fn set_home_scale(&mut self, scale: f64) {
        if scale.is_finite() && scale > 0.0 {
            self.home_scale = self.clamp_scale(scale);
        }
    }

    /// Sets the scale directly, clamping it into the configured range.
    ///
    /// The offset is left untouched, so the view zooms about the math point
    /// at `-offset` (the point drawn at the viewport center).
    pub fn set_scale(&mut self, scale: f64) {
        if scale.is_finite() && scale > 0.0 {
            self.scale = self.clamp_scale(scale);
        }
    }

    /// Converts a math-space point into screen pixels.
    #[must_use]
    pub fn math_to_screen(&self, viewport: &Viewport, pt: Point) -> Point {
        let c = viewport.center();
        Point::new(
            c.x + (pt.x + self.offset.x) * self.scale,
            c.y - (pt.y - self.offset.y) * self.scale,
        )
    }

    /// Converts a screen pixel position into math space.
    #[must_use]
    pub fn screen_to_math(&self, viewport: &Viewport, pt: Point) -> Point {
        let c = viewport.center();
        Point::new(
            (pt.x - c.x) / self.scale - self.offset.x,
            -(pt.y - c.y) / self.scale + self.offset.y,
        )
    }

    /// Converts a pixel column into its math-space `x`.
    #[must_use]
    pub fn screen_to_math_x(&self, viewport: &Viewport, px: f64) -> f64 {
        (px - viewport.center().x) / self.scale - self.offset.x
    }

    /// Converts a math-space `y` into its pixel row.
    #[must_use]
    pub fn math_to_screen_y(&self, viewport: &Viewport, y: f64) -> f64 {
        viewport.center().y - (y - self.offset.y) * self.scale
    }

    /// Pans the view by a delta in screen pixels.
    ///
    /// Every rendered point moves by exactly `delta` pixels regardless of the
    /// current scale.
    pub fn pan(&mut self, delta: Vec2) {
        if delta == Vec2::ZERO {
            return;
        }
        self.offset += delta / self.scale;
    }

    /// Zooms by `factor` around an anchor in screen pixels.
    ///
    /// The math point under `anchor` before the zoom maps back onto `anchor`
    /// afterwards. Non-positive or non-finite factors are ignored.
    pub fn zoom_at(&mut self, viewport: &Viewport, anchor: Point, factor: f64) {
        if !factor.is_finite() || factor <= 0.0 {
            return;
        }
        let math_anchor = self.screen_to_math(viewport, anchor);
        self.scale = self.clamp_scale(self.scale * factor);

        let c = viewport.center();
        self.offset = Vec2::new(
            (anchor.x - c.x) / self.scale - math_anchor.x,
            math_anchor.y - (c.y - anchor.y) / self.scale,
        );
    }

    /// Restores the home scale and a zero offset.
    pub fn reset(&mut self) {
        self.scale = self.home_scale;
        self.offset = Vec2::ZERO;
    }

    /// Returns the math-space rectangle visible through `viewport`.
    ///
    /// The rectangle is normalized (`y0 <= y1`) even though screen and math
    /// Y axes point in opposite directions.
    #[must_use]
    pub fn visible_math_rect(&self, viewport: &Viewport) -> Rect {
        let top_left = self.screen_to_math(viewport, Point::ZERO);
        let bottom_right = self.screen_to_math(
            viewport,
            Point::new(f64::from(viewport.width()), f64::from(viewport.height())),
        );
        Rect::from_points(top_left, bottom_right)
    }

    /// Returns the size of one pixel in math units (`1 / scale`).
    #[must_use]
    pub fn math_units_per_pixel(&self) -> f64 {
        1.0 / self.scale
    }

    /// Snapshot of the current transform state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self, viewport: &Viewport) -> ViewTransformDebugInfo {
        ViewTransformDebugInfo {
            viewport: *viewport,
            visible_math_rect: self.visible_math_rect(viewport),
            scale: self.scale,
            offset: self.offset,
            home_scale: self.home_scale,
            min_scale: self.min_scale,
            max_scale: self.max_scale,
        }
    }

    fn clamp_scale(&self, scale: f64) -> f64 {
        scale.clamp(self.min_scale, self.max_scale)
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::new()
    }
}

/// Debug snapshot of a [`ViewTransform`] state.
#[derive(Clone, Copy, Debug)]
pub struct ViewTransformDebugInfo {
    /// Viewport the snapshot was taken against.
    pub viewport: Viewport,
    /// Math-space rectangle currently visible.
    pub visible_math_rect: Rect,
    /// Current scale in pixels per math unit.
    pub scale: f64,
    /// Current pan offset in math units.
    pub offset: Vec2,
    /// Scale restored by a reset.
    pub home_scale: f64,
    /// Minimum scale.
    pub min_scale: f64,
    /// Maximum scale.
    pub max_scale: f64,
}
