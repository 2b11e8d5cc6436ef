//! Excellon drill file types.

use crate::geometry::Extent;

/// Millimeters per inch.
pub const MM_PER_INCH: f64 = 25.4;

/// A hole to be milled, in millimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hole {
    /// Distance the bit edge travels beyond the center to clear this hole.
    pub radius: f64,
    /// X coordinate of the hole center.
    pub cx: f64,
    /// Y coordinate of the hole center.
    pub cy: f64,
}

/// Excellon tool definition after unit conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToolDefinition {
    /// Tool number (T1, T2, etc.).
    pub number: u32,
    /// Drill diameter in millimeters.
    pub diameter: f64,
}

/// Unit system for Excellon files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExcellonUnits {
    /// Metric (millimeters).
    Metric,
    /// Imperial (inches).
    Imperial,
}

impl ExcellonUnits {
    /// Factor converting raw file values into millimeters.
    pub const fn scale(self) -> f64 {
        match self {
            Self::Metric => 1.0,
            Self::Imperial => MM_PER_INCH,
        }
    }
}

/// Result of Excellon parsing for a single file.
#[derive(Debug, Clone, PartialEq)]
pub struct DrillResult {
    /// Holes in file order.
    pub holes: Vec<Hole>,
    /// Tool table sorted by tool number.
    pub tools: Vec<ToolDefinition>,
    /// Drawing extent, already expanded by the largest tool diameter.
    pub extent: Extent,
    /// Largest tool diameter defined, if any tool was defined.
    pub max_tool_diameter: Option<f64>,
    /// Last unit directive seen, if any.
    pub units: Option<ExcellonUnits>,
    /// Number of lines outside the recognized subset.
    pub ignored_lines: usize,
    /// Non-fatal parser warnings.
    pub warnings: Vec<String>,
}
