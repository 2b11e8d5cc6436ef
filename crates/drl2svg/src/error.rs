//! Error types for the drill parsing and rendering pipeline.

use thiserror::Error;

/// Errors that abort a drill file conversion.
#[derive(Debug, Error)]
pub enum DrillError {
    /// A tool is narrower than the milling bit, so the bit cannot cut it.
    #[error(
        "line {line}: unable to handle tool `{text}`: diameter {diameter:.3} mm < bit diameter {bit_diameter:.3} mm"
    )]
    ToolTooSmall {
        /// 1-based line number of the offending tool definition.
        line: usize,
        /// The tool definition line as read.
        text: String,
        /// Tool diameter after unit conversion, in millimeters.
        diameter: f64,
        /// Configured bit diameter, in millimeters.
        bit_diameter: f64,
    },

    /// The configured bit diameter cannot drive a toolpath.
    #[error("invalid bit diameter {0}: must be a positive number of millimeters")]
    InvalidBitDiameter(f64),

    /// A tool is so much wider than the bit that clearing it would take an
    /// unbounded number of concentric passes.
    #[error(
        "line {line}: unable to handle tool `{text}`: diameter {diameter:.3} mm needs more than {max_passes} passes"
    )]
    ToolTooLarge {
        /// 1-based line number of the offending tool definition.
        line: usize,
        /// The tool definition line as read.
        text: String,
        /// Tool diameter after unit conversion, in millimeters.
        diameter: f64,
        /// Pass limit per hole.
        max_passes: usize,
    },

    /// Reading the drill file or writing the SVG failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
