/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use serde::Deserialize;
use yoda_core::PixelGrid;
use yoda_imageprocs::median::{median_filter, MedianOptions};

use crate::{load_entries, JsonBorder, JsonNetwork};

#[derive(Clone, Deserialize, Debug)]
pub struct MedianEntry {
    pub name:     String,
    pub width:    usize,
    pub height:   usize,
    pub border:   JsonBorder,
    pub network:  JsonNetwork,
    pub input:    Vec<u8>,
    pub expected: Vec<u8>,
    pub comment:  Option<String>
}

#[test]
#[allow(clippy::uninlined_format_args)]
fn test_median_vectors() {
    let entries: Vec<MedianEntry> = load_entries("median.json");

    let mut error = false;
    let mut failed = Vec::new();

    for entry in &entries {
        let grid = PixelGrid::new(entry.width, entry.height, entry.input.clone()).unwrap();

        let options = MedianOptions::default()
            .set_pad_method(entry.border.to_pad_method())
            .set_network(entry.network.to_network());

        for use_threads in [true, false] {
            let filtered = median_filter(&grid, &options.set_use_threads(use_threads)).unwrap();

            if filtered.pixels() != &entry.expected[..] {
                error = true;
                failed.push(entry.name.clone());
                // report error
                let err = format!(
                    "Output mismatch for {:?} (threads {})\nExpected {:?} but found {:?}\nConfig:{:#?}",
                    entry.name,
                    use_threads,
                    entry.expected,
                    filtered.pixels(),
                    entry
                );
                eprintln!("{}\n", err);
            }
        }
    }
    if error {
        panic!("Errors found during median filtering\n {:#?}", failed);
    }
}

#[test]
fn four_pass_divergence_is_visible_through_the_filter() {
    let entries: Vec<MedianEntry> = load_entries("median.json");

    let four_pass = entries
        .iter()
        .find(|e| e.name == "four_pass_divergence_3x3")
        .unwrap();
    let full = entries
        .iter()
        .find(|e| e.name == "four_pass_divergence_3x3_full")
        .unwrap();

    assert_eq!(four_pass.input, full.input);
    // only the centre pixel sees the problematic ordering
    assert_ne!(four_pass.expected[4], full.expected[4]);
}
