/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image processing routines for the YODA golden model
//!
//! Everything here mirrors a block of the FPGA design, results must be
//! bit identical to what the hardware produces for the same input.
//! [`sobel`] is the exception, it is a software reference for the
//! edge detection stage.
//!
//! # Example
//! - Filter a noisy grid
//! ```
//! use yoda_core::PixelGrid;
//! use yoda_imageprocs::median::{median_filter, MedianOptions};
//!
//! let mut grid = PixelGrid::filled(16, 16, 100).unwrap();
//! grid.set(5, 5, 255);
//!
//! let filtered = median_filter(&grid, &MedianOptions::default()).unwrap();
//! assert_eq!(filtered.get(5, 5), Some(100));
//! ```
#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::pedantic,
    clippy::inline_always,
    clippy::missing_errors_doc,
    clippy::panic
)]
#![allow(
    clippy::needless_return,
    clippy::similar_names,
    clippy::inline_always,
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc
)]

pub mod median;
pub mod network;
pub mod noise;
pub mod pad;
pub mod parity;
pub mod sobel;
