#![deny(warnings)]
#![deny(clippy::all)]
#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

//! drl2svg - convert KiCad-generated drill files into mm-accurate SVG files
//! that can be milled on a CNC.
//!
//! Usage:
//!   drl2svg --drl board.drl --dest board.svg
//!   drl2svg --bit-size 0.8 < board.drl > board.svg

use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use drl2svg::config::DEFAULT_BIT_DIAMETER;
use drl2svg::{convert_reader, Conversion, ConvertOptions};
use tracing::{info, warn};

/// Convert an Excellon drill file into concentric-circle SVG toolpaths.
#[derive(Parser, Debug)]
#[command(name = "drl2svg", version, about)]
struct Cli {
    /// Drill file to read ("-" for standard input)
    #[arg(long, value_name = "PATH")]
    drl: Option<PathBuf>,

    /// CNC bit diameter, in mm
    #[arg(long = "bit-size", value_name = "MM", default_value_t = DEFAULT_BIT_DIAMETER)]
    bit_size: f64,

    /// Log more debugging information (ignored lines, loaded tools)
    #[arg(long)]
    debug: bool,

    /// Output SVG file ("-" or omitted for standard output)
    #[arg(long, value_name = "PATH")]
    dest: Option<PathBuf>,
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        tracing_subscriber::EnvFilter::new("drl2svg=debug")
    } else {
        tracing_subscriber::EnvFilter::from_default_env()
            .add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// `None` and `-` both select the standard stream.
fn named_path(path: Option<&Path>) -> Option<&Path> {
    path.filter(|p| p.as_os_str() != "-")
}

fn read_input(path: Option<&Path>, options: &ConvertOptions) -> Result<Conversion> {
    match named_path(path) {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("unable to read {}", path.display()))?;
            convert_reader(BufReader::new(file), options)
                .with_context(|| format!("failed to convert {}", path.display()))
        }
        None => {
            let stdin = io::stdin();
            convert_reader(stdin.lock(), options).context("failed to convert standard input")
        }
    }
}

fn write_output(path: Option<&Path>, conversion: &Conversion) -> Result<()> {
    match named_path(path) {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            conversion
                .write_to(BufWriter::new(file))
                .with_context(|| format!("failed to write {}", path.display()))
        }
        None => {
            let stdout = io::stdout();
            conversion
                .write_to(BufWriter::new(stdout.lock()))
                .context("failed to write standard output")
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let options = ConvertOptions::new(cli.bit_size);
    let conversion = read_input(cli.drl.as_deref(), &options)?;
    write_output(cli.dest.as_deref(), &conversion)?;

    let meta = &conversion.meta;
    if meta.hole_count == 0 {
        warn!("no holes found; wrote an empty drawing");
    }
    info!(
        holes = meta.hole_count,
        circles = meta.circle_count,
        tools = meta.tool_count,
        ignored = meta.ignored_lines,
        width_mm = meta.extent.width(),
        height_mm = meta.extent.height(),
        "conversion complete"
    );

    Ok(())
}
