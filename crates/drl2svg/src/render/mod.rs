//! Drawing parsed holes as concentric toolpath circles.
//!
//! [`draw`] walks the holes in file order and hands every pass to a
//! [`Canvas`]. The canvas decides the output encoding; [`svg::SvgCanvas`] is
//! the one used by the CLI and the WASM exports.

pub mod svg;

use crate::excellon::DrillResult;
use crate::geometry::{concentric_radii, Extent};

/// Unit label for every drawing produced by this crate.
pub const DRAWING_UNIT: &str = "mm";

/// Sink for toolpath drawing calls.
pub trait Canvas {
    /// Opens a drawing covering `extent`, measured in `unit`.
    fn start_view(&mut self, extent: &Extent, unit: &str);

    /// Draws one circle centered at `(cx, cy)`.
    fn circle(&mut self, cx: f64, cy: f64, radius: f64);

    /// Closes the drawing.
    fn end(&mut self);
}

/// Draws every hole of `result` onto `canvas` and returns the circle count.
///
/// Holes are drawn in file order, each one innermost pass first.
pub fn draw<C: Canvas + ?Sized>(result: &DrillResult, bit_diameter: f64, canvas: &mut C) -> usize {
    canvas.start_view(&result.extent, DRAWING_UNIT);

    let mut circles = 0;
    for hole in &result.holes {
        for radius in concentric_radii(hole.radius, bit_diameter) {
            canvas.circle(hole.cx, hole.cy, radius);
            circles += 1;
        }
    }

    canvas.end();
    circles
}

/// Canvas that records circles as flat `[cx, cy, r, ...]` data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingCanvas {
    /// Extent passed to [`Canvas::start_view`].
    pub extent: Option<Extent>,
    /// Interleaved circle data `[cx0, cy0, r0, cx1, ...]`.
    pub circles: Vec<f64>,
    /// Whether [`Canvas::end`] was called.
    pub ended: bool,
}

impl Canvas for RecordingCanvas {
    fn start_view(&mut self, extent: &Extent, _unit: &str) {
        self.extent = Some(*extent);
    }

    fn circle(&mut self, cx: f64, cy: f64, radius: f64) {
        self.circles.extend_from_slice(&[cx, cy, radius]);
    }

    fn end(&mut self) {
        self.ended = true;
    }
}
