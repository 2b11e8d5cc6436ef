//! Core geometry types: the drawing extent accumulator.

use serde::Serialize;

/// Axis-aligned drawing extent in millimeters.
///
/// Uses screen orientation: `top` is the smaller Y value and `bottom` the
/// larger one, matching the SVG viewport the extent is rendered into.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Extent {
    /// Minimum X coordinate.
    pub left: f64,
    /// Maximum X coordinate.
    pub right: f64,
    /// Minimum Y coordinate.
    pub top: f64,
    /// Maximum Y coordinate.
    pub bottom: f64,
}

impl Extent {
    /// Creates the extent covered by a circle of `radius` centered at `(cx, cy)`.
    pub fn around(cx: f64, cy: f64, radius: f64) -> Self {
        Self {
            left: cx - radius,
            right: cx + radius,
            top: cy - radius,
            bottom: cy + radius,
        }
    }

    /// Grows this extent to also cover a circle of `radius` at `(cx, cy)`.
    pub fn include(&mut self, cx: f64, cy: f64, radius: f64) {
        self.left = self.left.min(cx - radius);
        self.right = self.right.max(cx + radius);
        self.top = self.top.min(cy - radius);
        self.bottom = self.bottom.max(cy + radius);
    }

    /// Returns this extent pushed outward by `margin` on all four sides.
    #[must_use]
    pub fn expanded(self, margin: f64) -> Self {
        Self {
            left: self.left - margin,
            right: self.right + margin,
            top: self.top - margin,
            bottom: self.bottom + margin,
        }
    }

    /// Horizontal size of the extent.
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Vertical size of the extent.
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

/// Folds a circle into an optional extent, starting a new one if none exists.
pub fn fold_extent(extent: Option<Extent>, cx: f64, cy: f64, radius: f64) -> Option<Extent> {
    Some(extent.map_or_else(
        || Extent::around(cx, cy, radius),
        |mut current| {
            current.include(cx, cy, radius);
            current
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn assert_extent(extent: &Extent, left: f64, right: f64, top: f64, bottom: f64) {
        assert!((extent.left - left).abs() < EPSILON, "left {}", extent.left);
        assert!((extent.right - right).abs() < EPSILON, "right {}", extent.right);
        assert!((extent.top - top).abs() < EPSILON, "top {}", extent.top);
        assert!(
            (extent.bottom - bottom).abs() < EPSILON,
            "bottom {}",
            extent.bottom
        );
    }

    #[test]
    fn first_circle_initializes_extent() {
        let extent = fold_extent(None, 10.0, 10.0, 1.0);
        assert!(extent.is_some(), "extent should start on first circle");
        if let Some(extent) = extent {
            assert_extent(&extent, 9.0, 11.0, 9.0, 11.0);
        }
    }

    #[test]
    fn single_hole_margin_matches_largest_tool() {
        let extent = fold_extent(None, 10.0, 10.0, 1.0).map(|e| e.expanded(3.0));
        assert!(extent.is_some());
        if let Some(extent) = extent {
            assert_extent(&extent, 6.0, 14.0, 6.0, 14.0);
            assert!((extent.width() - 8.0).abs() < EPSILON);
            assert!((extent.height() - 8.0).abs() < EPSILON);
        }
    }

    #[test]
    fn later_circles_grow_each_side_independently() {
        let mut extent = fold_extent(None, 0.0, 0.0, 0.5);
        extent = fold_extent(extent, 4.0, -2.0, 1.0);
        extent = fold_extent(extent, 1.0, 3.0, 0.0);
        assert!(extent.is_some());
        if let Some(extent) = extent {
            assert_extent(&extent, -0.5, 5.0, -3.0, 3.0);
        }
    }

    #[test]
    fn zero_radius_circle_is_a_point() {
        let extent = Extent::around(1.0, 2.0, 0.0);
        assert_extent(&extent, 1.0, 1.0, 2.0, 2.0);
        assert!(extent.width().abs() < EPSILON);
    }

    #[test]
    fn default_extent_is_zero_rectangle() {
        let extent = Extent::default().expanded(0.8);
        assert_extent(&extent, -0.8, 0.8, -0.8, 0.8);
    }
}
