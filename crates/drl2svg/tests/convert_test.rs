//! End-to-end tests for drill file to SVG conversion.

use std::time::Instant;

use drl2svg::{convert, convert_reader, ConvertOptions, DrillError};

/// KiCad fixture → SVG sized in millimeters with one circle per pass.
#[test]
#[allow(clippy::expect_used)]
fn kicad_svg_is_sized_in_mm() {
    let data = include_bytes!("fixtures/kicad-sample/board-PTH.drl");
    let result = convert(data, &ConvertOptions::default());
    assert!(
        result.is_ok(),
        "expected Ok, got Err: {:?}",
        result.as_ref().err()
    );
    let conversion = result.as_ref().expect("assert!(result.is_ok()) above");

    assert_eq!(conversion.meta.hole_count, 15);
    assert_eq!(conversion.meta.circle_count, 21);
    assert_eq!(conversion.svg.matches("<circle").count(), 21);
    assert!(conversion.svg.contains("width=\"67.321mm\""), "{}", conversion.svg);
    assert!(conversion.svg.contains("height=\"52.081mm\""), "{}", conversion.svg);
    assert!(
        conversion.svg.contains("viewBox=\"0.629 0.629 67.321 52.081\""),
        "{}",
        conversion.svg
    );
}

/// The largest hole is drawn innermost pass first.
#[test]
#[allow(clippy::expect_used)]
fn kicad_large_hole_passes_are_innermost_first() {
    let data = include_bytes!("fixtures/kicad-sample/board-PTH.drl");
    let conversion = convert(data, &ConvertOptions::default()).expect("fixture converts");

    let passes: Vec<&str> = conversion
        .svg
        .lines()
        .filter(|line| line.contains("cx=\"5.080\" cy=\"5.080\""))
        .collect();
    assert_eq!(passes.len(), 4);
    let radii = ["r=\"0.305\"", "r=\"0.620\"", "r=\"0.935\"", "r=\"1.250\""];
    for (line, radius) in passes.iter().zip(radii) {
        assert!(line.contains(radius), "{line} should contain {radius}");
    }
}

/// Same input and bit → byte-identical output.
#[test]
fn conversion_is_repeatable() {
    let data = include_bytes!("fixtures/minimal/drill.drl");
    let options = ConvertOptions::new(0.6);
    let first = convert(data, &options);
    let second = convert_reader(data.as_slice(), &options);
    assert!(first.is_ok() && second.is_ok());
    if let (Ok(a), Ok(b)) = (first, second) {
        assert_eq!(a.svg, b.svg);
        assert_eq!(a.result.holes, b.result.holes);
        assert_eq!(a.meta, b.meta);
    }
}

/// Undersized tool → error, no SVG.
#[test]
fn undersized_tool_produces_no_svg() {
    let data = include_bytes!("fixtures/minimal/undersized.drl");
    let result = convert(data, &ConvertOptions::default());
    assert!(matches!(result, Err(DrillError::ToolTooSmall { line: 4, .. })));
}

/// Empty input → valid, empty drawing.
#[test]
fn empty_input_is_a_degenerate_drawing() {
    let result = convert(b"", &ConvertOptions::default());
    assert!(result.is_ok());
    if let Ok(conversion) = result {
        assert_eq!(conversion.meta.hole_count, 0);
        assert!(conversion.svg.contains("viewBox=\"0.000 0.000 0.000 0.000\""));
        assert!(conversion.svg.trim_end().ends_with("</svg>"));
    }
}

/// Fixture conversion completes well under a second.
#[test]
fn kicad_conversion_time_under_1000ms() {
    let data = include_bytes!("fixtures/kicad-sample/board-PTH.drl");
    let start = Instant::now();
    let result = convert(data, &ConvertOptions::default());
    let elapsed = start.elapsed();
    assert!(result.is_ok());
    assert!(
        elapsed.as_millis() < 1000,
        "conversion should complete in < 1000ms, took {}ms",
        elapsed.as_millis()
    );
}
