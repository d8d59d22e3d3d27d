/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};

pub mod help_strings;

fn input_arg(help: &'static str) -> Arg {
    Arg::new("in")
        .short('i')
        .long("input")
        .help(help)
        .value_parser(value_parser!(PathBuf))
        .required(true)
}

fn output_arg(help: &'static str) -> Arg {
    Arg::new("out")
        .short('o')
        .long("output")
        .help(help)
        .value_parser(value_parser!(PathBuf))
        .required(true)
}

#[rustfmt::skip]
fn encode_cmd() -> Command {
    Command::new("encode")
        .about("Convert an image to a memory image for FPGA memory initialization")
        .long_about(help_strings::ENCODE_HELP)
        .arg(input_arg("Image to read, one of jpg, jpeg, png or bmp"))
        .arg(output_arg("Memory image to write, must have a .hex extension"))
        .arg(Arg::new("noise")
            .long("noise")
            .help_heading("TEST VECTORS")
            .help("Fraction of pixels turned to salt, and again to pepper (0.0 to 1.0)")
            .value_parser(value_parser!(f32))
            .default_value("0.0"))
        .arg(Arg::new("seed")
            .long("seed")
            .help_heading("TEST VECTORS")
            .help("Seed for the noise generator, random if not given")
            .value_parser(value_parser!(u64)))
}

#[rustfmt::skip]
fn filter_cmd() -> Command {
    Command::new("filter")
        .about("Run the golden model median filter over a memory image")
        .long_about(help_strings::FILTER_HELP)
        .arg(input_arg("Memory image to filter"))
        .arg(output_arg("Memory image to write the filtered pixels to"))
        .arg(Arg::new("png")
            .long("png")
            .help("Also write the filtered image as a png")
            .value_parser(value_parser!(PathBuf)))
        .arg(Arg::new("border")
            .long("border")
            .help_heading("FILTER")
            .help("How pixels outside the image are produced")
            .long_help(help_strings::BORDER_HELP)
            .value_parser(["reflect", "symmetric", "replicate"])
            .default_value("reflect"))
        .arg(Arg::new("network")
            .long("network")
            .help_heading("FILTER")
            .help("Comparison network selecting the median")
            .long_help(help_strings::NETWORK_HELP)
            .value_parser(["four-pass", "full"])
            .default_value("four-pass"))
        .arg(Arg::new("single-threaded")
            .long("single-threaded")
            .help_heading("FILTER")
            .action(ArgAction::SetTrue)
            .help("Filter on the calling thread only"))
}

#[rustfmt::skip]
fn edges_cmd() -> Command {
    Command::new("edges")
        .about("Run Sobel edge detection over a memory image")
        .long_about(help_strings::EDGES_HELP)
        .arg(input_arg("Memory image to read"))
        .arg(output_arg("Memory image to write the edge magnitudes to"))
        .arg(Arg::new("png")
            .long("png")
            .help("Also write the edges as a png")
            .value_parser(value_parser!(PathBuf)))
        .arg(Arg::new("border")
            .long("border")
            .help_heading("FILTER")
            .help("How pixels outside the image are produced")
            .long_help(help_strings::BORDER_HELP)
            .value_parser(["reflect", "symmetric", "replicate"])
            .default_value("reflect"))
}

fn render_cmd() -> Command {
    Command::new("render")
        .about("Write a memory image out as a png for viewing")
        .arg(input_arg("Memory image to read"))
        .arg(output_arg("Image to write"))
}

#[rustfmt::skip]
fn compare_cmd() -> Command {
    Command::new("compare")
        .about("Check hardware output against golden model output bit for bit")
        .arg(Arg::new("golden")
            .help("Memory image produced by the golden model")
            .value_parser(value_parser!(PathBuf))
            .required(true))
        .arg(Arg::new("candidate")
            .help("Memory image dumped from the hardware simulation")
            .value_parser(value_parser!(PathBuf))
            .required(true))
}

fn probe_cmd() -> Command {
    Command::new("probe")
        .about("Validate a memory image and print statistics about it")
        .arg(input_arg("Memory image to read"))
}

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("yoda")
        .about("Golden model for the YODA FPGA median filter")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(encode_cmd())
        .subcommand(filter_cmd())
        .subcommand(edges_cmd())
        .subcommand(render_cmd())
        .subcommand(compare_cmd())
        .subcommand(probe_cmd())
        .arg(Arg::new("width")
            .long("width")
            .global(true)
            .help_heading("GEOMETRY")
            .help("Image width of the FPGA memory")
            .value_parser(value_parser!(usize))
            .default_value("256"))
        .arg(Arg::new("height")
            .long("height")
            .global(true)
            .help_heading("GEOMETRY")
            .help("Image height of the FPGA memory")
            .value_parser(value_parser!(usize))
            .default_value("256"))
        .arg(Arg::new("max-reported")
            .long("max-reported")
            .global(true)
            .help_heading("DIAGNOSTICS")
            .help("Number of bad lines or mismatching pixels to show")
            .value_parser(value_parser!(usize))
            .default_value("5"))
        .arg(Arg::new("json")
            .long("json")
            .global(true)
            .action(ArgAction::SetTrue)
            .help_heading("DIAGNOSTICS")
            .help("Print reports as json"))
        .arg(Arg::new("all-yes")
            .short('y')
            .long("yes")
            .global(true)
            .action(ArgAction::SetTrue)
            .help("Overwrite existing output files without asking"))
        .arg(Arg::new("debug")
            .long("debug")
            .global(true)
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .global(true)
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .global(true)
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .global(true)
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about each pipeline stage"))
}
