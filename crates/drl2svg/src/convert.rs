//! One-pass drill file to SVG conversion.

use std::io::{BufRead, Write};

use serde::Serialize;
use tracing::debug;

use crate::config::ConvertOptions;
use crate::error::DrillError;
use crate::excellon::{self, DrillResult};
use crate::geometry::Extent;
use crate::render::svg::SvgCanvas;
use crate::render::{draw, Canvas};

/// Summary of a conversion, returned to JavaScript and logged by the CLI.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrillMeta {
    /// Margin-expanded drawing extent in millimeters.
    pub extent: Extent,
    /// Number of holes parsed.
    pub hole_count: usize,
    /// Number of toolpath circles drawn.
    pub circle_count: usize,
    /// Number of distinct tools defined.
    pub tool_count: usize,
    /// Largest tool diameter, if any tool was defined.
    pub max_tool_diameter: Option<f64>,
    /// Number of lines outside the recognized subset.
    pub ignored_lines: usize,
    /// Warning messages.
    pub warnings: Vec<String>,
}

impl DrillMeta {
    fn new(result: &DrillResult, circle_count: usize) -> Self {
        Self {
            extent: result.extent,
            hole_count: result.holes.len(),
            circle_count,
            tool_count: result.tools.len(),
            max_tool_diameter: result.max_tool_diameter,
            ignored_lines: result.ignored_lines,
            warnings: result.warnings.clone(),
        }
    }
}

/// A finished conversion: the SVG document and its summary.
#[derive(Debug, Clone)]
pub struct Conversion {
    /// The parsed drill data.
    pub result: DrillResult,
    /// Conversion summary.
    pub meta: DrillMeta,
    /// SVG document.
    pub svg: String,
}

/// Parses `data` and renders it onto `canvas`.
///
/// # Errors
///
/// Propagates every [`DrillError`] raised by [`excellon::parse`]. Nothing is
/// drawn when parsing fails.
pub fn convert_onto<C: Canvas + ?Sized>(
    data: &[u8],
    options: &ConvertOptions,
    canvas: &mut C,
) -> Result<(DrillResult, DrillMeta), DrillError> {
    let result = excellon::parse(data, options)?;
    let circles = draw(&result, options.bit_diameter, canvas);
    let meta = DrillMeta::new(&result, circles);
    Ok((result, meta))
}

/// Converts an in-memory drill file into an SVG document.
///
/// # Errors
///
/// Propagates every [`DrillError`] raised by [`excellon::parse`].
pub fn convert(data: &[u8], options: &ConvertOptions) -> Result<Conversion, DrillError> {
    let mut canvas = SvgCanvas::new();
    let (result, meta) = convert_onto(data, options, &mut canvas)?;
    Ok(Conversion {
        result,
        meta,
        svg: canvas.into_string(),
    })
}

/// Converts a drill file read line by line from `reader`.
///
/// The whole input is parsed and rendered in memory, so a fatal input error
/// surfaces before any output destination is touched.
///
/// # Errors
///
/// Returns [`DrillError::Io`] for read failures and the parser's errors for
/// invalid input.
pub fn convert_reader<R: BufRead>(
    reader: R,
    options: &ConvertOptions,
) -> Result<Conversion, DrillError> {
    let result = excellon::parse_reader(reader, options)?;

    let mut canvas = SvgCanvas::new();
    let circles = draw(&result, options.bit_diameter, &mut canvas);
    debug!(circles, bytes = canvas.as_str().len(), "svg rendered");

    let meta = DrillMeta::new(&result, circles);
    Ok(Conversion {
        result,
        meta,
        svg: canvas.into_string(),
    })
}

impl Conversion {
    /// Writes the SVG document to `writer` and flushes it.
    ///
    /// # Errors
    ///
    /// Returns [`DrillError::Io`] when writing fails.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<(), DrillError> {
        writer.write_all(self.svg.as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}
