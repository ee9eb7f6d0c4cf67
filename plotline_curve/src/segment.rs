// Copyright 2025 the Plotline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::{BezPath, Point};

/// A maximal run of drawable curve points, in screen pixels.
///
/// Points are ordered by increasing pixel column. Consecutive points are
/// meant to be joined by straight lines; separate segments are never joined.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PathSegment {
    points: Vec<Point>,
}

impl PathSegment {
    /// Creates a segment from points in drawing order.
    #[must_use]
    pub fn from_points(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub(crate) fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Points in drawing order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the segment has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First point, if any.
    #[must_use]
    pub fn first(&self) -> Option<Point> {
        self.points.first().copied()
    }

    /// Last point, if any.
    #[must_use]
    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Builds a polyline: one `move_to` followed by a `line_to` per point.
    #[must_use]
    pub fn to_bez_path(&self) -> BezPath {
        let mut path = BezPath::new();
        let mut points = self.points.iter().copied();
        if let Some(first) = points.next() {
            path.move_to(first);
            for p in points {
                path.line_to(p);
            }
        }
        path
    }
}

impl From<PathSegment> for Vec<Point> {
    fn from(segment: PathSegment) -> Self {
        segment.points
    }
}
