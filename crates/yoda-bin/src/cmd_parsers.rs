/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::ArgMatches;
use yoda_imageprocs::median::MedianOptions;
use yoda_imageprocs::network::MedianNetwork;
use yoda_imageprocs::pad::PadMethod;
use yoda_imageprocs::sobel::SobelOptions;

pub mod global_options;

/// Build median filter options from the `filter` subcommand's arguments
pub fn get_median_options(options: &ArgMatches) -> Result<MedianOptions, String> {
    let mut median_options = MedianOptions::default();

    if let Some(border) = options.get_one::<String>("border") {
        median_options = median_options.set_pad_method(PadMethod::from_string_result(border)?);
    }
    if let Some(network) = options.get_one::<String>("network") {
        median_options = median_options.set_network(MedianNetwork::from_string_result(network)?);
    }
    if options.get_flag("single-threaded") {
        median_options = median_options.set_use_threads(false);
    }
    Ok(median_options)
}

/// Build edge detection options from the `edges` subcommand's arguments
pub fn get_sobel_options(options: &ArgMatches) -> Result<SobelOptions, String> {
    let mut sobel_options = SobelOptions::default();

    if let Some(border) = options.get_one::<String>("border") {
        sobel_options = sobel_options.set_pad_method(PadMethod::from_string_result(border)?);
    }
    Ok(sobel_options)
}
