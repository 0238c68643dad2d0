// Copyright 2026 the Panelkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG glyph geometry and markup assembly.
//!
//! The pad renders as four path primitives inside one square drawing
//! surface, identified by fixed class names so external stylesheets can
//! style them:
//!
//! - `axes`: the background axis cross at the range origin;
//! - `handle-axes`: the crosshair following the handle, with a gap around
//!   the handle circle;
//! - `handle-shadow`: two concentric circles offset slightly downward;
//! - `handle`: two concentric circles at the exact handle position,
//!   filled with the even-odd rule so the inner circle punches a hole.
//!
//! Everything here is derived geometry; path strings are recomputed in full
//! from the handle and origin positions on every redraw.

use alloc::format;
use alloc::string::String;
use core::fmt::Write as _;

use kurbo::{Point, Size};

/// Radius of the outer handle circle, in pixels.
pub const HANDLE_RADIUS: f64 = 6.0;

/// Radius of the inner handle circle, in pixels.
pub const HANDLE_INNER_RADIUS: f64 = HANDLE_RADIUS - 2.0;

/// Vertical offset of the handle shadow, in pixels.
pub const SHADOW_OFFSET_Y: f64 = 2.0;

/// The four derived path strings of a pad surface.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PadPaths {
    /// Background axis cross at the range origin.
    pub axes: String,
    /// Handle crosshair with a gap around the handle.
    pub handle_axes: String,
    /// Handle shadow glyph.
    pub handle_shadow: String,
    /// Handle glyph.
    pub handle: String,
}

/// Builds the background axis cross through `origin`.
pub(crate) fn axes_path(origin: Point, size: Size) -> String {
    let mut d = String::new();
    let _ = write!(
        d,
        "M{} 0 L{} {} M0 {} L{} {}",
        fmt_scalar(origin.x),
        fmt_scalar(origin.x),
        fmt_scalar(size.height),
        fmt_scalar(origin.y),
        fmt_scalar(size.width),
        fmt_scalar(origin.y),
    );
    d
}

/// Builds the handle crosshair, leaving a [`HANDLE_RADIUS`] gap around
/// `handle`.
pub(crate) fn handle_axes_path(handle: Point, size: Size) -> String {
    let r = HANDLE_RADIUS;
    let mut d = String::new();
    let _ = write!(
        d,
        "M0 {y} L{x_before} {y} M{x_after} {y} L{w} {y} \
         M{x} 0 L{x} {y_before} M{x} {y_after} L{x} {h}",
        x = fmt_scalar(handle.x),
        y = fmt_scalar(handle.y),
        x_before = fmt_scalar(handle.x - r),
        x_after = fmt_scalar(handle.x + r),
        y_before = fmt_scalar(handle.y - r),
        y_after = fmt_scalar(handle.y + r),
        w = fmt_scalar(size.width),
        h = fmt_scalar(size.height),
    );
    d
}

/// Builds the handle shadow glyph, offset [`SHADOW_OFFSET_Y`] below the
/// handle.
pub(crate) fn handle_shadow_path(handle: Point) -> String {
    concentric_circles(Point::new(handle.x, handle.y + SHADOW_OFFSET_Y))
}

/// Builds the handle glyph at the exact handle position.
pub(crate) fn handle_path(handle: Point) -> String {
    concentric_circles(handle)
}

/// Two concentric circles around `center`, drawn as arc pairs.
///
/// Rendered with `fill-rule="evenodd"` so the inner circle cuts a ring out
/// of the outer one.
fn concentric_circles(center: Point) -> String {
    let mut d = String::new();
    for r in [HANDLE_RADIUS, HANDLE_INNER_RADIUS] {
        let _ = write!(
            d,
            "M{} {}a{r},{r} 0 1,0 {d},0a{r},{r} 0 1,0 -{d},0",
            fmt_scalar(center.x - r),
            fmt_scalar(center.y),
            r = fmt_scalar(r),
            d = fmt_scalar(r * 2.0),
        );
    }
    d
}

/// Assembles the pad's rendered markup: one `input-background` container
/// holding one square `svg-pad` drawing surface with the four classed
/// paths.
pub(crate) fn render_document(size: Size, paths: &PadPaths) -> String {
    let w = fmt_scalar(size.width);
    let h = fmt_scalar(size.height);
    let mut out = String::new();
    let _ = write!(
        out,
        "<div class=\"input-background\">\
         <svg class=\"svg-pad\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">"
    );
    let _ = write!(out, "<path class=\"axes\" d=\"{}\"/>", paths.axes);
    let _ = write!(
        out,
        "<path class=\"handle-axes\" d=\"{}\"/>",
        paths.handle_axes
    );
    let _ = write!(
        out,
        "<path class=\"handle-shadow\" fill-rule=\"evenodd\" d=\"{}\"/>",
        paths.handle_shadow
    );
    let _ = write!(
        out,
        "<path class=\"handle\" fill-rule=\"evenodd\" d=\"{}\"/>",
        paths.handle
    );
    out.push_str("</svg></div>");
    out
}

/// Formats a scalar for path data: integers without a fractional part,
/// short stable fractions otherwise.
pub(crate) fn fmt_scalar(v: f64) -> String {
    if v.is_finite() {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "best-effort pretty formatting"
        )]
        let i = v as i64;
        let diff = (i as f64) - v;
        if diff > -1e-9 && diff < 1e-9 {
            return format!("{i}");
        }
    } else {
        return format!("{v}");
    }

    let mut s = format!("{v:.3}");
    while s.contains('.') && s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    s
}
