//! Geometry for drill toolpaths: drawing extent and concentric passes.

pub mod concentric;
pub mod types;

pub use concentric::*;
pub use types::*;
