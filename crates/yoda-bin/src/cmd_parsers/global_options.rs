/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::parser::ValueSource;
use clap::ArgMatches;
use log::{info, Level};
use yoda_core::{FPGA_HEIGHT, FPGA_WIDTH};
use yoda_hex::HexOptions;

#[derive(Debug, Copy, Clone)]
pub struct CmdOptions {
    pub width:          usize,
    pub height:         usize,
    pub max_reported:   usize,
    pub override_files: bool,
    pub json:           bool
}

impl CmdOptions {
    pub fn new() -> CmdOptions {
        CmdOptions {
            width:          FPGA_WIDTH,
            height:         FPGA_HEIGHT,
            max_reported:   5,
            override_files: false,
            json:           false
        }
    }

    /// Decoder options matching the memory geometry given on the command line
    pub fn hex_options(&self) -> HexOptions {
        HexOptions::default()
            .set_width(self.width)
            .set_height(self.height)
            .set_max_reported(self.max_reported)
    }
}

pub fn parse_options(options: &ArgMatches) -> CmdOptions {
    let mut cmd_options = CmdOptions::new();

    if let Some(width) = options.get_one::<usize>("width") {
        cmd_options.width = *width;
    }
    if let Some(height) = options.get_one::<usize>("height") {
        cmd_options.height = *height;
    }
    if let Some(max_reported) = options.get_one::<usize>("max-reported") {
        cmd_options.max_reported = *max_reported;
    }
    info!(
        "Memory geometry set to {}x{}",
        cmd_options.width, cmd_options.height
    );

    if options.value_source("all-yes") == Some(ValueSource::CommandLine) {
        info!("Setting all commands to yes");
        cmd_options.override_files = true;
    }
    cmd_options.json = options.get_flag("json");

    cmd_options
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level = if options.get_flag("debug") {
        Level::Debug
    } else if options.get_flag("trace") {
        Level::Trace
    } else if options.get_flag("warn") {
        Level::Warn
    } else if options.get_flag("info") {
        Level::Info
    } else {
        Level::Warn
    };

    if let Err(e) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not initialize logger: {e}");
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}
