#![deny(warnings)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::indexing_slicing)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! `drl2svg` — Excellon drill files to mm-accurate SVG toolpaths for CNC milling.
//!
//! Every hole is drawn as concentric circles spaced `0.45 × bit` apart so a
//! bit narrower than the hole clears it completely.

pub mod config;
pub mod convert;
pub mod error;
pub mod excellon;
pub mod geometry;
pub mod render;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

pub use crate::config::ConvertOptions;
pub use crate::convert::{convert, convert_reader, Conversion, DrillMeta};
pub use crate::error::DrillError;

use crate::convert::convert_onto;
use crate::render::svg::SvgCanvas;
use crate::render::{Canvas, RecordingCanvas};

#[derive(Debug, Default)]
struct LastOutput {
    svg: SvgCanvas,
    circles: RecordingCanvas,
}

impl Canvas for LastOutput {
    fn start_view(&mut self, extent: &geometry::Extent, unit: &str) {
        self.svg.start_view(extent, unit);
        self.circles.start_view(extent, unit);
    }

    fn circle(&mut self, cx: f64, cy: f64, radius: f64) {
        self.svg.circle(cx, cy, radius);
        self.circles.circle(cx, cy, radius);
    }

    fn end(&mut self) {
        self.svg.end();
        self.circles.end();
    }
}

thread_local! {
    static LAST_OUTPUT: RefCell<Option<LastOutput>> = const { RefCell::new(None) };
}

fn store_output(output: LastOutput) {
    LAST_OUTPUT.with(|o| {
        *o.borrow_mut() = Some(output);
    });
}

/// Initialize the WASM module. Sets up the panic hook for debugging.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Convert an Excellon drill file from raw bytes into an SVG toolpath drawing.
///
/// Returns [`DrillMeta`] as a `JsValue` via `serde-wasm-bindgen`.
/// The drawing is stored internally; retrieve it with [`get_svg`] and
/// [`get_circles`].
///
/// # Errors
///
/// Returns a descriptive error string if the drill file cannot be converted.
#[wasm_bindgen]
pub fn convert_drl(data: &[u8], bit_diameter: f64) -> Result<JsValue, JsValue> {
    let meta = convert_drl_internal(data, bit_diameter).map_err(|e| JsValue::from_str(&e))?;
    serde_wasm_bindgen::to_value(&meta).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Internal conversion logic shared between the wasm export and native tests.
#[doc(hidden)]
pub fn convert_drl_internal(data: &[u8], bit_diameter: f64) -> Result<DrillMeta, String> {
    let options = ConvertOptions::new(bit_diameter);
    let mut output = LastOutput::default();
    let (_, meta) = convert_onto(data, &options, &mut output).map_err(|err| err.to_string())?;

    store_output(output);

    Ok(meta)
}

/// Retrieve the SVG document of the last conversion.
///
/// Returns an empty string if nothing has been converted yet.
#[wasm_bindgen]
pub fn get_svg() -> String {
    LAST_OUTPUT.with(|o| {
        o.borrow()
            .as_ref()
            .map_or_else(String::new, |out| out.svg.as_str().to_string())
    })
}

/// Retrieve the toolpath circles of the last conversion.
///
/// Returns a copy of the interleaved `[cx0, cy0, r0, cx1, ...]` data in
/// drawing order. Returns an empty array if nothing has been converted yet.
#[wasm_bindgen]
pub fn get_circles() -> Vec<f64> {
    LAST_OUTPUT.with(|o| {
        o.borrow()
            .as_ref()
            .map_or_else(Vec::new, |out| out.circles.circles.clone())
    })
}
