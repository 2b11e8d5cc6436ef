//! SVG serialization of toolpath drawings.

use crate::geometry::Extent;

use super::Canvas;

/// Digits after the decimal point for every emitted number.
pub const DECIMALS: usize = 3;

const CIRCLE_STYLE: &str = "fill:none;stroke:black;stroke-width:0.05";

/// [`Canvas`] producing an SVG document whose user units are `unit`.
#[derive(Debug, Default)]
pub struct SvgCanvas {
    out: String,
}

impl SvgCanvas {
    /// Creates an empty canvas.
    pub const fn new() -> Self {
        Self { out: String::new() }
    }

    /// Returns the markup written so far.
    pub fn as_str(&self) -> &str {
        &self.out
    }

    /// Consumes the canvas and returns the SVG document.
    pub fn into_string(self) -> String {
        self.out
    }
}

impl Canvas for SvgCanvas {
    fn start_view(&mut self, extent: &Extent, unit: &str) {
        let width = number(extent.width());
        let height = number(extent.height());
        self.out.push_str("<?xml version=\"1.0\"?>\n");
        self.out.push_str(&format!(
            "<svg width=\"{width}{unit}\" height=\"{height}{unit}\" viewBox=\"{} {} {width} {height}\" \
             xmlns=\"http://www.w3.org/2000/svg\" xmlns:xlink=\"http://www.w3.org/1999/xlink\">\n",
            number(extent.left),
            number(extent.top),
        ));
    }

    fn circle(&mut self, cx: f64, cy: f64, radius: f64) {
        self.out.push_str(&format!(
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" style=\"{CIRCLE_STYLE}\"/>\n",
            number(cx),
            number(cy),
            number(radius),
        ));
    }

    fn end(&mut self) {
        self.out.push_str("</svg>\n");
    }
}

/// Formats `value` with [`DECIMALS`] digits, never printing a negative zero.
fn number(value: f64) -> String {
    let formatted = format!("{value:.DECIMALS$}");
    if formatted.trim_start_matches('-').bytes().all(|b| b == b'0' || b == b'.') {
        formatted.trim_start_matches('-').to_string()
    } else {
        formatted
    }
}
