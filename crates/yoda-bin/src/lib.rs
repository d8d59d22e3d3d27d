/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::process::exit;

use log::error;

use crate::workflow::exec_workflow_from_cmd;

mod cmd_args;
mod cmd_parsers;
mod file_io;
mod serde;
mod workflow;

pub fn main() {
    let cmd = cmd_args::create_cmd_args();
    let options = cmd.get_matches();

    // a subcommand is required, clap exits before we get here without one
    let Some((name, sub_options)) = options.subcommand() else {
        return;
    };

    cmd_parsers::global_options::setup_logger(sub_options);

    let parsed_opts = cmd_parsers::global_options::parse_options(sub_options);

    let result = exec_workflow_from_cmd(name, sub_options, &parsed_opts);

    if let Err(reason) = result {
        println!();
        error!(" Could not complete workflow, reason {:?}", reason);

        println!();
        exit(-1);
    }
}
