//! Excellon drill parser.
//!
//! Folds the lines of a drill file into holes with their cut radius for the
//! configured bit, plus the margin-expanded drawing extent.

use std::collections::HashMap;
use std::io::BufRead;

use tracing::{debug, warn};

use crate::config::ConvertOptions;
use crate::error::DrillError;
use crate::geometry::{fold_extent, pass_count, Extent, MAX_PASSES};

use super::line::{classify, LineKind};
use super::types::{DrillResult, ExcellonUnits, Hole, ToolDefinition};

#[derive(Debug)]
struct ParserState {
    bit_diameter: f64,
    units: Option<ExcellonUnits>,
    tools: HashMap<u32, f64>,
    selected_radius: f64,
    max_tool_diameter: Option<f64>,
    extent: Option<Extent>,
    holes: Vec<Hole>,
    ignored_lines: usize,
    warnings: Vec<String>,
    warned_unitless: bool,
}

impl ParserState {
    fn new(options: &ConvertOptions) -> Self {
        Self {
            bit_diameter: options.bit_diameter,
            units: None,
            tools: HashMap::new(),
            selected_radius: 0.0,
            max_tool_diameter: None,
            extent: None,
            holes: Vec::new(),
            ignored_lines: 0,
            warnings: Vec::new(),
            warned_unitless: false,
        }
    }

    /// Scale from file units to millimeters; zero until a unit directive.
    fn scale(&mut self, line_number: usize) -> f64 {
        if let Some(units) = self.units {
            return units.scale();
        }

        if !self.warned_unitless {
            self.warned_unitless = true;
            self.warn(format!(
                "line {line_number}: values before any METRIC/INCH directive are scaled to zero"
            ));
        }
        0.0
    }

    fn warn(&mut self, message: String) {
        warn!("{message}");
        self.warnings.push(message);
    }

    fn finish(self) -> DrillResult {
        if !self.tools.is_empty() {
            debug!(tools = ?self.tools, "tools loaded");
        }

        let mut tools: Vec<ToolDefinition> = self
            .tools
            .into_iter()
            .map(|(number, diameter)| ToolDefinition { number, diameter })
            .collect();
        tools.sort_by_key(|tool| tool.number);

        let margin = self.max_tool_diameter.unwrap_or(0.0);
        let extent = self.extent.unwrap_or_default().expanded(margin);

        DrillResult {
            holes: self.holes,
            tools,
            extent,
            max_tool_diameter: self.max_tool_diameter,
            units: self.units,
            ignored_lines: self.ignored_lines,
            warnings: self.warnings,
        }
    }
}

/// Parse an Excellon drill file held in memory.
///
/// Lines that are not valid UTF-8 are ignored like any other unrecognized
/// line.
///
/// # Errors
///
/// Returns [`DrillError::InvalidBitDiameter`] for unusable options,
/// [`DrillError::ToolTooSmall`] when a tool is narrower than the bit and
/// [`DrillError::ToolTooLarge`] when a tool needs too many passes.
pub fn parse(data: &[u8], options: &ConvertOptions) -> Result<DrillResult, DrillError> {
    options.validate()?;
    let mut state = ParserState::new(options);

    for (index, bytes) in data.split(|byte| *byte == b'\n').enumerate() {
        process_bytes(&mut state, index + 1, bytes)?;
    }

    Ok(state.finish())
}

/// Parse an Excellon drill file from a buffered reader, one line at a time.
///
/// # Errors
///
/// Returns [`DrillError::Io`] when reading fails, otherwise the same errors
/// as [`parse`].
pub fn parse_reader<R: BufRead>(
    mut reader: R,
    options: &ConvertOptions,
) -> Result<DrillResult, DrillError> {
    options.validate()?;
    let mut state = ParserState::new(options);

    let mut buf = Vec::new();
    let mut line_number = 0;
    while reader.read_until(b'\n', &mut buf)? > 0 {
        line_number += 1;
        process_bytes(&mut state, line_number, &buf)?;
        buf.clear();
    }

    Ok(state.finish())
}

/// Parse already split drill file lines.
///
/// # Errors
///
/// Returns [`DrillError::InvalidBitDiameter`] for unusable options,
/// [`DrillError::ToolTooSmall`] when a tool is narrower than the bit and
/// [`DrillError::ToolTooLarge`] when a tool needs too many passes. Parsing
/// stops at the first fatal error; no partial result is returned.
pub fn parse_lines<'a, I>(lines: I, options: &ConvertOptions) -> Result<DrillResult, DrillError>
where
    I: IntoIterator<Item = &'a str>,
{
    options.validate()?;
    let mut state = ParserState::new(options);

    for (index, line) in lines.into_iter().enumerate() {
        process_line(&mut state, index + 1, line)?;
    }

    Ok(state.finish())
}

fn process_bytes(
    state: &mut ParserState,
    line_number: usize,
    bytes: &[u8],
) -> Result<(), DrillError> {
    match std::str::from_utf8(bytes) {
        Ok(line) => process_line(state, line_number, line),
        Err(_) => {
            ignore(state, &String::from_utf8_lossy(bytes));
            Ok(())
        }
    }
}

fn process_line(
    state: &mut ParserState,
    line_number: usize,
    raw_line: &str,
) -> Result<(), DrillError> {
    let line = raw_line.trim();
    if line.is_empty() {
        return Ok(());
    }

    let normalized = line.to_ascii_uppercase();

    match classify(&normalized) {
        LineKind::Units(units) => state.units = Some(units),
        LineKind::ToolDefinition { number, diameter } => {
            define_tool(state, line_number, line, number, diameter)?;
        }
        LineKind::ToolSelection(number) => select_tool(state, line_number, number),
        LineKind::Coordinate { x, y } => record_hole(state, line_number, x, y),
        LineKind::Other => ignore(state, line),
    }

    Ok(())
}

fn define_tool(
    state: &mut ParserState,
    line_number: usize,
    line: &str,
    number: u32,
    raw_diameter: f64,
) -> Result<(), DrillError> {
    let diameter = raw_diameter * state.scale(line_number);

    if diameter < state.bit_diameter {
        return Err(DrillError::ToolTooSmall {
            line: line_number,
            text: line.to_string(),
            diameter,
            bit_diameter: state.bit_diameter,
        });
    }

    let cut_radius = (diameter - state.bit_diameter) * 0.5;
    #[allow(clippy::cast_precision_loss)]
    let too_many_passes = pass_count(cut_radius, state.bit_diameter) > MAX_PASSES as f64;
    if !diameter.is_finite() || too_many_passes {
        return Err(DrillError::ToolTooLarge {
            line: line_number,
            text: line.to_string(),
            diameter,
            max_passes: MAX_PASSES,
        });
    }

    if state.max_tool_diameter.map_or(true, |max| diameter > max) {
        state.max_tool_diameter = Some(diameter);
    }

    if state.tools.insert(number, diameter).is_some() {
        state.warn(format!(
            "line {line_number}: duplicate tool definition for T{number}; last definition wins"
        ));
    }

    Ok(())
}

fn select_tool(state: &mut ParserState, line_number: usize, number: u32) {
    // Keyed by number, so `T01` selects a tool defined as `T1`.
    if let Some(diameter) = state.tools.get(&number).copied() {
        state.selected_radius = (diameter - state.bit_diameter) * 0.5;
    } else {
        state.ignored_lines += 1;
        state.warn(format!(
            "line {line_number}: tool T{number} selected but not defined; ignored"
        ));
    }
}

fn record_hole(state: &mut ParserState, line_number: usize, x: f64, y: f64) {
    let scale = state.scale(line_number);
    let hole = Hole {
        radius: state.selected_radius,
        cx: x * scale,
        cy: y * scale,
    };

    state.extent = fold_extent(state.extent, hole.cx, hole.cy, hole.radius);
    state.holes.push(hole);
}

fn ignore(state: &mut ParserState, line: &str) {
    state.ignored_lines += 1;
    debug!("ignored: {line:?}");
}
