//! Conversion options shared by the CLI and the WASM exports.

use crate::error::DrillError;

/// Bit diameter used when none is configured, in millimeters.
pub const DEFAULT_BIT_DIAMETER: f64 = 0.7;

/// Options controlling toolpath generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvertOptions {
    /// Diameter of the milling bit, in millimeters.
    pub bit_diameter: f64,
}

impl ConvertOptions {
    /// Creates options for the given bit diameter.
    pub const fn new(bit_diameter: f64) -> Self {
        Self { bit_diameter }
    }

    /// Checks that the options describe a usable bit.
    ///
    /// # Errors
    ///
    /// Returns [`DrillError::InvalidBitDiameter`] when the bit diameter is
    /// not a finite, strictly positive number.
    pub fn validate(&self) -> Result<(), DrillError> {
        if self.bit_diameter.is_finite() && self.bit_diameter > 0.0 {
            Ok(())
        } else {
            Err(DrillError::InvalidBitDiameter(self.bit_diameter))
        }
    }
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self::new(DEFAULT_BIT_DIAMETER)
    }
}
