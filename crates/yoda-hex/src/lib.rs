/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The memory image format is what simulators and synthesis tools read to
//! initialize FPGA block RAM (`$readmemh` style). It has the following format:
//! ```text
//! ╔═══════════════╤══════════════════════════════════════════════════╗
//! ║ Lines         │ Description                                      ║
//! ╠═══════════════╪══════════════════════════════════════════════════╣
//! ║ width*height  │ One pixel per line, two uppercase hex digits     ║
//! ║               │ (00-FF) followed by `\n`, row-major order        ║
//! ╚═══════════════╧══════════════════════════════════════════════════╝
//! ```
//! There is no header, the dimensions are a contract between both sides
//! (256x256, i.e 65536 lines, for the FPGA).
//!
//! The decoder is the boundary of trust for dumps coming out of a hardware
//! simulator, it tolerates surrounding whitespace, blank lines and lowercase
//! digits but rejects anything that does not decode to exactly
//! `width*height` bytes.
//!
//! # Example
//! ```
//! use yoda_core::PixelGrid;
//! use yoda_hex::{HexDecoder, HexEncoder, HexOptions};
//!
//! let grid = PixelGrid::from_fn(4, 2, |x, y| (x * 60 + y) as u8).unwrap();
//! let text = HexEncoder::new(&grid).encode_to_string().unwrap();
//!
//! assert_eq!(text.lines().count(), 8);
//!
//! let options = HexOptions::default().set_width(4).set_height(2);
//! let decoded = HexDecoder::new_with_options(text.as_bytes(), options)
//!     .decode()
//!     .unwrap();
//! assert_eq!(decoded, grid);
//! ```
#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::pedantic,
    clippy::inline_always,
    clippy::missing_errors_doc,
    clippy::panic
)]
#![allow(clippy::module_name_repetitions, clippy::doc_markdown)]

pub use decoder::*;
pub use encoder::*;
pub use errors::*;
use yoda_core::PixelGrid;

mod decoder;
mod encoder;
mod errors;

/// Decode memory image text at the FPGA resolution
///
/// # Errors
/// See [`HexDecoder::decode`]
pub fn decode(text: &str) -> Result<PixelGrid, FormatError> {
    HexDecoder::new(text.as_bytes()).decode()
}

/// Encode a grid to memory image text
///
/// # Errors
/// A [`ShapeError`](yoda_core::ShapeError) if the grid's buffer does
/// not match its dimensions
pub fn encode(grid: &PixelGrid) -> Result<String, yoda_core::ShapeError> {
    HexEncoder::new(grid).encode_to_string()
}

/// Normalize case and whitespace of memory image text.
///
/// Equivalent to `encode(decode(text))`
///
/// # Errors
/// See [`HexDecoder::decode`]
pub fn canonicalize(text: &str, options: HexOptions) -> Result<String, FormatError> {
    let grid = HexDecoder::new_with_options(text.as_bytes(), options).decode()?;

    Ok(HexEncoder::new(&grid).encode_to_string()?)
}
