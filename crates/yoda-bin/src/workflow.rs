/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsStr;
use std::fmt::{Debug, Display, Formatter};
use std::io::{stdin, BufRead};
use std::path::{Path, PathBuf};
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use clap::ArgMatches;
use log::{debug, info, trace, warn};
use yoda_core::{GridStatistics, RangeError, ShapeError};
use yoda_hex::{FormatError, HexEncodeErrors};
use yoda_imageprocs::median::median_filter;
use yoda_imageprocs::noise::{salt_and_pepper, NoiseAmount};
use yoda_imageprocs::parity::compare;
use yoda_imageprocs::sobel::sobel_edges;
use zune_image::errors::ImageErrors;

use crate::cmd_parsers::{get_median_options, get_sobel_options};
use crate::cmd_parsers::global_options::CmdOptions;
use crate::file_io::{read_hex, sample_image, save_image, write_hex};
use crate::serde::{GridReport, Parity};

/// Image formats accepted by `encode`
const SOURCE_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "bmp"];

/// Errors that stop a workflow
pub enum WorkflowErrors {
    Format(FormatError),
    Shape(ShapeError),
    Range(RangeError),
    Image(ImageErrors),
    IoErrors(std::io::Error),
    /// Hardware output differs from the golden model in this many pixels
    ParityFailure(usize),
    GenericString(String)
}

impl Debug for WorkflowErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Format(err) => writeln!(f, "{err:?}"),
            Self::Shape(err) => writeln!(f, "{err:?}"),
            Self::Range(err) => writeln!(f, "{err:?}"),
            Self::Image(err) => writeln!(f, "Image error: {err:?}"),
            Self::IoErrors(err) => writeln!(f, "I/O error: {err}"),
            Self::ParityFailure(count) => {
                writeln!(f, "Hardware output differs from golden model in {count} pixels")
            }
            Self::GenericString(err) => writeln!(f, "{err}")
        }
    }
}

impl Display for WorkflowErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl From<FormatError> for WorkflowErrors {
    fn from(value: FormatError) -> Self {
        Self::Format(value)
    }
}

impl From<ShapeError> for WorkflowErrors {
    fn from(value: ShapeError) -> Self {
        Self::Shape(value)
    }
}

impl From<RangeError> for WorkflowErrors {
    fn from(value: RangeError) -> Self {
        Self::Range(value)
    }
}

impl From<HexEncodeErrors> for WorkflowErrors {
    fn from(value: HexEncodeErrors) -> Self {
        match value {
            HexEncodeErrors::Shape(err) => Self::Shape(err),
            HexEncodeErrors::IoErrors(err) => Self::IoErrors(err)
        }
    }
}

impl From<ImageErrors> for WorkflowErrors {
    fn from(value: ImageErrors) -> Self {
        Self::Image(value)
    }
}

impl From<std::io::Error> for WorkflowErrors {
    fn from(value: std::io::Error) -> Self {
        Self::IoErrors(value)
    }
}

impl From<String> for WorkflowErrors {
    fn from(value: String) -> Self {
        Self::GenericString(value)
    }
}

pub(crate) fn exec_workflow_from_cmd(
    name: &str, args: &ArgMatches, cmd_opts: &CmdOptions
) -> Result<(), WorkflowErrors> {
    info!("Running {} workflow", name);

    match name {
        "encode" => encode(args, cmd_opts),
        "filter" => filter(args, cmd_opts),
        "edges" => edges(args, cmd_opts),
        "render" => render(args, cmd_opts),
        "compare" => compare_outputs(args, cmd_opts),
        "probe" => probe(args, cmd_opts),
        _ => Err(WorkflowErrors::GenericString(format!(
            "Unknown subcommand {name}"
        )))
    }
}

fn path_arg<'a>(args: &'a ArgMatches, id: &str) -> Result<&'a PathBuf, WorkflowErrors> {
    args.get_one::<PathBuf>(id)
        .ok_or_else(|| WorkflowErrors::GenericString(format!("Missing argument {id}")))
}

fn encode(args: &ArgMatches, cmd_opts: &CmdOptions) -> Result<(), WorkflowErrors> {
    let in_file = path_arg(args, "in")?;
    let out_file = path_arg(args, "out")?;

    check_extension(in_file, &SOURCE_EXTENSIONS)?;
    check_extension(out_file, &["hex"])?;
    verify_file_paths(in_file, out_file, cmd_opts)?;

    let amount = NoiseAmount::new(args.get_one::<f32>("noise").copied().unwrap_or(0.0))?;

    let mut grid = sample_image(in_file, cmd_opts.width, cmd_opts.height)?;
    log_statistics("Source", &grid.statistics());

    if amount.get() > 0.0 {
        let seed = args.get_one::<u64>("seed").copied().unwrap_or_else(random_seed);

        info!(
            "Adding salt and pepper noise, amount {}, seed {}",
            amount.get(),
            seed
        );
        grid = salt_and_pepper(&grid, amount, seed)?;
        debug!(
            "{} pixels set to each of 0 and 255",
            amount.pixel_count(grid.pixels().len())
        );
    }

    write_hex(out_file, &grid)
}

fn filter(args: &ArgMatches, cmd_opts: &CmdOptions) -> Result<(), WorkflowErrors> {
    let in_file = path_arg(args, "in")?;
    let out_file = path_arg(args, "out")?;
    let png_file = args.get_one::<PathBuf>("png");

    check_extension(out_file, &["hex"])?;
    verify_file_paths(in_file, out_file, cmd_opts)?;

    if let Some(png) = png_file {
        check_extension(png, &["png"])?;
        verify_file_paths(in_file, png, cmd_opts)?;
    }

    let options = get_median_options(args)?;
    debug!("Median options {:?}", options);

    let grid = read_hex(in_file, cmd_opts.hex_options())?;
    log_statistics("Input", &grid.statistics());

    let start = Instant::now();
    let filtered = median_filter(&grid, &options)?;
    info!(
        "Median filtering completed in {:.3} ms",
        start.elapsed().as_secs_f64() * 1000.0
    );
    log_statistics("Filtered", &filtered.statistics());

    write_hex(out_file, &filtered)?;

    if let Some(png) = png_file {
        save_image(png, &filtered)?;
    }
    if cmd_opts.json {
        print_json(&GridReport::new(out_file, filtered.statistics()))?;
    }
    Ok(())
}

fn edges(args: &ArgMatches, cmd_opts: &CmdOptions) -> Result<(), WorkflowErrors> {
    let in_file = path_arg(args, "in")?;
    let out_file = path_arg(args, "out")?;
    let png_file = args.get_one::<PathBuf>("png");

    check_extension(out_file, &["hex"])?;
    verify_file_paths(in_file, out_file, cmd_opts)?;

    if let Some(png) = png_file {
        check_extension(png, &["png"])?;
        verify_file_paths(in_file, png, cmd_opts)?;
    }

    let options = get_sobel_options(args)?;
    debug!("Sobel options {:?}", options);

    let grid = read_hex(in_file, cmd_opts.hex_options())?;
    log_statistics("Input", &grid.statistics());

    let start = Instant::now();
    let edges = sobel_edges(&grid, &options)?;
    info!(
        "Edge detection completed in {:.3} ms",
        start.elapsed().as_secs_f64() * 1000.0
    );
    log_statistics("Edges", &edges.statistics());

    write_hex(out_file, &edges)?;

    if let Some(png) = png_file {
        save_image(png, &edges)?;
    }
    if cmd_opts.json {
        print_json(&GridReport::new(out_file, edges.statistics()))?;
    }
    Ok(())
}

fn render(args: &ArgMatches, cmd_opts: &CmdOptions) -> Result<(), WorkflowErrors> {
    let in_file = path_arg(args, "in")?;
    let out_file = path_arg(args, "out")?;

    check_extension(out_file, &["png"])?;
    verify_file_paths(in_file, out_file, cmd_opts)?;

    let grid = read_hex(in_file, cmd_opts.hex_options())?;

    save_image(out_file, &grid)
}

fn compare_outputs(args: &ArgMatches, cmd_opts: &CmdOptions) -> Result<(), WorkflowErrors> {
    let golden_file = path_arg(args, "golden")?;
    let candidate_file = path_arg(args, "candidate")?;

    verify_input_path(golden_file)?;
    verify_input_path(candidate_file)?;

    let golden = read_hex(golden_file, cmd_opts.hex_options())?;
    let candidate = read_hex(candidate_file, cmd_opts.hex_options())?;

    let report = compare(&golden, &candidate, cmd_opts.max_reported)?;

    if cmd_opts.json {
        print_json(&Parity::new(golden_file, candidate_file, &report))?;
    } else if report.is_exact() {
        println!("{} pixels compared, outputs are bit exact", report.total);
    } else {
        println!(
            "{} of {} pixels differ, largest difference {}",
            report.mismatched, report.total, report.max_abs_diff
        );
        for mismatch in &report.first_mismatch {
            println!(
                "  ({}, {}): golden {:02X}, candidate {:02X}",
                mismatch.x, mismatch.y, mismatch.golden, mismatch.candidate
            );
        }
    }

    if report.is_exact() {
        Ok(())
    } else {
        Err(WorkflowErrors::ParityFailure(report.mismatched))
    }
}

fn probe(args: &ArgMatches, cmd_opts: &CmdOptions) -> Result<(), WorkflowErrors> {
    let in_file = path_arg(args, "in")?;
    verify_input_path(in_file)?;

    let grid = read_hex(in_file, cmd_opts.hex_options())?;

    print_json(&GridReport::new(in_file, grid.statistics()))
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), WorkflowErrors> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| WorkflowErrors::GenericString(format!("Could not serialize report: {e}")))?;

    println!("{json}");
    Ok(())
}

fn log_statistics(stage: &str, stats: &GridStatistics) {
    info!(
        "{} image {}x{}, min {}, max {}, mean {:.2}",
        stage, stats.width, stats.height, stats.min, stats.max, stats.mean
    );
    trace!("{} image has {} distinct values", stage, stats.unique);

    if stats.min == stats.max {
        warn!("{} image is uniform, every pixel is {}", stage, stats.min);
    }
}

fn random_seed() -> u64 {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_nanos() as u64);

    info!("No seed given, using {}", seed);
    seed
}

fn check_extension(path: &Path, accepted: &[&str]) -> Result<(), WorkflowErrors> {
    let extension = path
        .extension()
        .and_then(OsStr::to_str)
        .map(str::to_ascii_lowercase);

    match extension {
        Some(ext) if accepted.contains(&ext.as_str()) => Ok(()),
        _ => Err(WorkflowErrors::GenericString(format!(
            "Unsupported file {:?}, expected one of {} extensions",
            path,
            accepted.join(",")
        )))
    }
}

fn verify_input_path(in_path: &Path) -> Result<(), WorkflowErrors> {
    if !in_path.exists() {
        return Err(WorkflowErrors::GenericString(format!(
            "Path {:?}, does not exist",
            in_path
        )));
    }

    if !in_path.is_file() {
        return Err(WorkflowErrors::GenericString(format!(
            "Path {:?} is not a file",
            in_path
        )));
    }
    Ok(())
}

fn verify_file_paths(
    in_path: &Path, out_path: &Path, cmd_opts: &CmdOptions
) -> Result<(), WorkflowErrors> {
    if in_path == out_path {
        return Err(WorkflowErrors::GenericString(format!(
            "Cannot use {:?} as both input and output",
            in_path
        )));
    }
    verify_input_path(in_path)?;

    if out_path.exists() {
        if cmd_opts.override_files {
            info!("Overwriting path {:?} ", out_path);
        } else {
            println!("File {:?} exists, overwrite [y/N]", out_path);
            let mut result = String::new();

            stdin().lock().read_line(&mut result)?;

            if result.trim() != "y" {
                return Err(WorkflowErrors::GenericString(format!(
                    "Not overwriting file {:?}",
                    out_path
                )));
            }
        }
    }
    Ok(())
}
