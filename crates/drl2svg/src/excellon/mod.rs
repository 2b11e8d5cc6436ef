//! Excellon drill file parsing for the `METRIC`/`INCH`, tool and coordinate subset.

pub mod line;
pub mod parser;
pub mod types;

pub use parser::{parse, parse_lines, parse_reader};
pub use types::*;
