// Copyright 2026 the Panelkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The headless pad model.
//!
//! [`PadModel`] owns the pad's two axis ranges and its pixel rectangle, and
//! derives everything else: pointer-to-value mapping, value re-clamping,
//! origin and handle pixel positions, and the four glyph path strings. It
//! holds no value of its own — the bound host slot is the value's home —
//! and knows nothing about events or subscriptions, which keeps the whole
//! mapping surface testable as plain arithmetic.
//!
//! Coordinate conventions:
//! - Pixel X and value X grow in the same direction; pixel left edge is
//!   `range_x[0]`.
//! - Pixel Y grows downward, value Y grows upward; pixel top edge is
//!   `range_y[1]`.
//! - Inverted ranges (`min > max`) are permitted and flip the respective
//!   axis.

use kurbo::{Point, Rect, Size};

use panelkit_scale::{clamp, clamp_unordered, map, normalize};

use crate::markup::{
    PadPaths, axes_path, handle_axes_path, handle_path, handle_shadow_path,
};

/// Ranges, pixel rectangle, and derived geometry of one pad surface.
#[derive(Clone, Debug, PartialEq)]
pub struct PadModel {
    range_x: [f64; 2],
    range_y: [f64; 2],
    rect: Rect,
}

impl PadModel {
    /// Creates a model with the given axis ranges and an empty rectangle.
    ///
    /// The rectangle stays degenerate until the first
    /// [`set_view_size`](Self::set_view_size); deriving paths from a
    /// zero-size rectangle is safe and yields degenerate path data.
    #[must_use]
    pub fn new(range_x: [f64; 2], range_y: [f64; 2]) -> Self {
        Self {
            range_x,
            range_y,
            rect: Rect::ZERO,
        }
    }

    /// Returns copies of both axis ranges, X first.
    #[must_use]
    pub fn range(&self) -> [[f64; 2]; 2] {
        [self.range_x, self.range_y]
    }

    /// Returns a copy of the X-axis range.
    #[must_use]
    pub fn range_x(&self) -> [f64; 2] {
        self.range_x
    }

    /// Returns a copy of the Y-axis range.
    #[must_use]
    pub fn range_y(&self) -> [f64; 2] {
        self.range_y
    }

    /// Stores new axis ranges.
    ///
    /// Returns `false` when both axes are element-wise equal to the current
    /// ranges, in which case callers skip re-clamping and redrawing.
    pub fn set_range(&mut self, range_x: [f64; 2], range_y: [f64; 2]) -> bool {
        let differs = self.range_x != range_x || self.range_y != range_y;
        self.range_x = range_x;
        self.range_y = range_y;
        differs
    }

    /// Returns the pad's pixel rectangle in page coordinates.
    #[must_use]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Moves the rectangle's top-left corner, preserving its size.
    pub fn set_origin(&mut self, origin: Point) {
        self.rect = Rect::from_origin_size(origin, self.rect.size());
    }

    /// Resizes the rectangle to a square of the given side, preserving its
    /// top-left corner.
    pub fn set_view_size(&mut self, side: f64) {
        self.rect = Rect::from_origin_size(self.rect.origin(), Size::new(side, side));
    }

    /// Maps a pointer position in page coordinates to a value pair.
    ///
    /// The position is first clamped to the rectangle, so drags that wander
    /// off the surface saturate at the range bounds. X maps directly; Y
    /// maps inverted (pixel top is `range_y[1]`).
    #[must_use]
    pub fn pointer_value(&self, pos: Point) -> [f64; 2] {
        let w = self.rect.width();
        let h = self.rect.height();
        let x = clamp(pos.x - self.rect.x0, 0.0, w);
        let y = clamp(pos.y - self.rect.y0, 0.0, h);
        [
            map(x, 0.0, w, self.range_x[0], self.range_x[1]),
            map(y, 0.0, h, self.range_y[1], self.range_y[0]),
        ]
    }

    /// Clamps a value pair into the current ranges.
    ///
    /// Each axis clamps into the interval its bounds span, whatever their
    /// order, so inverted axes constrain correctly.
    #[must_use]
    pub fn reclamp(&self, value: [f64; 2]) -> [f64; 2] {
        [
            clamp_unordered(value[0], self.range_x[0], self.range_x[1]),
            clamp_unordered(value[1], self.range_y[0], self.range_y[1]),
        ]
    }

    /// Returns the pixel position of the range origin's axis cross.
    ///
    /// Each coordinate is kept at least one pixel inside the surface so the
    /// cross never sits exactly on the border.
    #[must_use]
    pub fn origin_px(&self) -> Point {
        let w = self.rect.width();
        let h = self.rect.height();
        let oxr = -self.range_x[0] / (self.range_x[1] - self.range_x[0]);
        let oyr = 1.0 - (-self.range_y[0] / (self.range_y[1] - self.range_y[0]));
        Point::new(
            (w * oxr).min(w - 1.0).max(1.0),
            (h * oyr).min(h - 1.0).max(1.0),
        )
    }

    /// Returns the pixel position of the handle for `value`.
    ///
    /// The value is normalized per axis, clamped to `[0, 1]` (the handle
    /// never leaves the surface even when the value lies outside the
    /// ranges), Y-flipped, and scaled by the rectangle size.
    #[must_use]
    pub fn handle_px(&self, value: [f64; 2]) -> Point {
        let xn = clamp(normalize(value[0], self.range_x[0], self.range_x[1]), 0.0, 1.0);
        let yn = 1.0 - clamp(normalize(value[1], self.range_y[0], self.range_y[1]), 0.0, 1.0);
        Point::new(xn * self.rect.width(), yn * self.rect.height())
    }

    /// Derives the four glyph path strings for `value`.
    #[must_use]
    pub fn paths(&self, value: [f64; 2]) -> PadPaths {
        let size = self.rect.size();
        let origin = self.origin_px();
        let handle = self.handle_px(value);
        PadPaths {
            axes: axes_path(origin, size),
            handle_axes: handle_axes_path(handle, size),
            handle_shadow: handle_shadow_path(handle),
            handle: handle_path(handle),
        }
    }
}

impl Default for PadModel {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_RANGE, crate::config::DEFAULT_RANGE)
    }
}
