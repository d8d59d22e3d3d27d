/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by the YODA golden model crates
//!
//! This crate provides the data structure every other crate
//! works on and the validation errors they share.
//!
//! It currently contains
//!
//! - [`PixelGrid`](grid::PixelGrid), a row-major array of 8-bit greyscale samples
//! - The fixed FPGA resolution, [`FPGA_WIDTH`] x [`FPGA_HEIGHT`]
//! - [`ShapeError`](errors::ShapeError) and [`RangeError`](errors::RangeError)
//! - Grid statistics used for diagnostics
//!
//! # Features
//!  - `serde`: Enables serializing of grid statistics
#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::pedantic,
    clippy::inline_always,
    clippy::missing_errors_doc,
    clippy::panic
)]
#![allow(clippy::module_name_repetitions, clippy::doc_markdown)]

pub mod errors;
pub mod grid;
mod serde;

pub use errors::{RangeError, ShapeError};
pub use grid::{GridStatistics, PixelGrid};

/// Width of the image memory on the FPGA
pub const FPGA_WIDTH: usize = 256;
/// Height of the image memory on the FPGA
pub const FPGA_HEIGHT: usize = 256;
