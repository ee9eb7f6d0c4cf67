// Copyright 2025 the Plotline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `plot_svg`: plot `y = f(x)` into an SVG file.
//!
//! ```text
//! plot_svg "sin(x)/x" --output sinc.svg --width 1024 --height 512 --zoom-at 512,256,2
//! ```
//!
//! The view starts at the home view and then applies `--pan` (a drag by
//! `DX,DY` pixels) and `--zoom-at` (a zoom by `FACTOR` anchored at `PX,PY`),
//! in that order.

mod config;
mod logger;

use std::error::Error;
use std::fs;
use std::io::{self, Write as _};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use kurbo::{Point, Vec2};
use plotline::{PlotConfig, PlotSession};
use plotline_svg::SvgSurface;

use crate::config::FileConfig;

#[derive(Debug, Parser)]
#[command(name = "plot_svg", version, about = "Plot y = f(x) into an SVG file")]
struct Args {
    /// Expression in `x`, e.g. `x^2 - 3x + 1` or `sin(x)/x`.
    expression: String,

    /// Output file; stdout when omitted.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Image width in pixels.
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Image height in pixels.
    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Home scale in pixels per math unit.
    #[arg(long)]
    scale: Option<f64>,

    /// Pan by `DX,DY` pixels.
    #[arg(long, value_name = "DX,DY", value_parser = parse_pair, allow_hyphen_values = true)]
    pan: Option<(f64, f64)>,

    /// Zoom by `FACTOR` around pixel `PX,PY`.
    #[arg(long, value_name = "PX,PY,FACTOR", value_parser = parse_triple, allow_hyphen_values = true)]
    zoom_at: Option<(f64, f64, f64)>,

    /// JSON file overriding plot settings.
    #[arg(long, value_name = "FILE.json")]
    config: Option<PathBuf>,

    /// Log to stderr (`-v` debug, `-vv` trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_numbers<const N: usize>(s: &str) -> Result<[f64; N], String> {
    let mut out = [0.0; N];
    let mut parts = s.split(',');
    for slot in &mut out {
        let part = parts
            .next()
            .ok_or_else(|| format!("expected {N} comma-separated numbers"))?;
        *slot = part
            .trim()
            .parse()
            .map_err(|_| format!("`{}` is not a number", part.trim()))?;
    }
    if parts.next().is_some() {
        return Err(format!("expected {N} comma-separated numbers"));
    }
    Ok(out)
}

fn parse_pair(s: &str) -> Result<(f64, f64), String> {
    let [a, b] = parse_numbers::<2>(s)?;
    Ok((a, b))
}

fn parse_triple(s: &str) -> Result<(f64, f64, f64), String> {
    let [a, b, c] = parse_numbers::<3>(s)?;
    Ok((a, b, c))
}

fn build_session(args: &Args) -> Result<PlotSession, Box<dyn Error>> {
    let mut config = PlotConfig::default();
    if let Some(path) = &args.config {
        FileConfig::load(path)?.apply(&mut config)?;
    }
    if let Some(scale) = args.scale {
        config.home_scale = scale;
    }

    let mut session = PlotSession::new(config);
    session.resize(args.width, args.height);
    session.set_expression(&args.expression);
    if let Some(err) = session.expression_error() {
        return Err(format!("cannot plot `{}`: {err}", args.expression).into());
    }

    if let Some((dx, dy)) = args.pan {
        session.pan_by(Vec2::new(dx, dy));
    }
    if let Some((px, py, factor)) = args.zoom_at {
        session.zoom_at(Point::new(px, py), factor);
    }
    log::debug!(
        "view: scale {} offset {:?}",
        session.view().scale(),
        session.view().offset()
    );
    Ok(session)
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let session = build_session(args)?;

    let mut surface = SvgSurface::new();
    session.render(&mut surface);
    let svg = surface.to_svg(args.width, args.height);

    match &args.output {
        Some(path) => {
            fs::write(path, svg)
                .map_err(|err| format!("cannot write {}: {err}", path.display()))?;
            log::debug!("wrote {}", path.display());
        }
        None => io::stdout().lock().write_all(svg.as_bytes())?,
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    logger::init(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("plot_svg: {err}");
            ExitCode::FAILURE
        }
    }
}
