// Copyright 2025 the Plotline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size};

/// Pixel extent of the drawing surface.
///
/// The center is derived from the size (`width / 2`, `height / 2`) and is the
/// screen position of the math origin when the pan offset is zero. A viewport
/// is rebuilt from the surface size on every resize and is read-only for the
/// duration of a frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    width: u32,
    height: u32,
    center: Point,
}

impl Viewport {
    /// Creates a viewport for a surface of `width` x `height` pixels.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            center: Point::new(f64::from(width) / 2.0, f64::from(height) / 2.0),
        }
    }

    /// Width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Center of the viewport in pixels.
    #[must_use]
    pub fn center(&self) -> Point {
        self.center
    }

    /// Size as a float [`Size`].
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }

    /// The full viewport rectangle, anchored at the origin.
    #[must_use]
    pub fn rect(&self) -> Rect {
        self.size().to_rect()
    }

    /// Returns `true` if either dimension is zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect};

    use super::Viewport;

    #[test]
    fn center_is_half_the_size() {
        let vp = Viewport::new(800, 600);
        assert_eq!(vp.center(), Point::new(400.0, 300.0));
        assert_eq!(vp.rect(), Rect::new(0.0, 0.0, 800.0, 600.0));
    }

    #[test]
    fn odd_sizes_keep_fractional_center() {
        let vp = Viewport::new(801, 3);
        assert_eq!(vp.center(), Point::new(400.5, 1.5));
    }

    #[test]
    fn zero_sized_viewport_is_empty() {
        assert!(Viewport::default().is_empty());
        assert!(Viewport::new(10, 0).is_empty());
        assert!(!Viewport::new(1, 1).is_empty());
    }
}
