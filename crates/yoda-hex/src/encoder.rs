/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Encoding support for memory images
use std::io::Write;

use yoda_core::{PixelGrid, ShapeError};

use crate::errors::HexEncodeErrors;

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";
/// Two digits and a newline
const BYTES_PER_PIXEL: usize = 3;

/// A memory image encoder
///
/// Writes one pixel per line as two uppercase hex digits, in
/// row-major order. Every line, including the last, ends with `\n`.
///
/// # Example
/// ```
/// use yoda_core::PixelGrid;
/// use yoda_hex::HexEncoder;
///
/// let grid = PixelGrid::new(2, 2, vec![0, 10, 171, 255]).unwrap();
/// let mut sink = vec![];
/// let written = HexEncoder::new(&grid).encode(&mut sink).unwrap();
///
/// assert_eq!(written, 12);
/// assert_eq!(sink, b"00\n0A\nAB\nFF\n");
/// ```
pub struct HexEncoder<'a> {
    grid: &'a PixelGrid
}

impl<'a> HexEncoder<'a> {
    pub fn new(grid: &'a PixelGrid) -> HexEncoder<'a> {
        HexEncoder { grid }
    }

    /// Encode the grid into `sink`, returning the number of bytes written
    ///
    /// # Errors
    /// - [`HexEncodeErrors::Shape`] if the grid's buffer does not match its dimensions,
    ///   nothing is written in that case
    /// - [`HexEncodeErrors::IoErrors`] if the sink fails
    pub fn encode<W: Write>(&self, mut sink: W) -> Result<usize, HexEncodeErrors> {
        let contents = self.encode_to_vec()?;

        sink.write_all(&contents)?;
        sink.flush()?;

        Ok(contents.len())
    }

    /// Encode the grid into a new string
    ///
    /// # Errors
    /// If the grid's buffer does not match its dimensions
    pub fn encode_to_string(&self) -> Result<String, ShapeError> {
        let contents = self.encode_to_vec()?;
        // only ascii digits and newlines were written
        Ok(contents.into_iter().map(char::from).collect())
    }

    fn encode_to_vec(&self) -> Result<Vec<u8>, ShapeError> {
        self.grid.validate()?;

        let pixels = self.grid.pixels();
        let mut contents = Vec::with_capacity(pixels.len() * BYTES_PER_PIXEL);

        for &pix in pixels {
            contents.extend_from_slice(&[
                HEX_DIGITS[usize::from(pix >> 4)],
                HEX_DIGITS[usize::from(pix & 15)],
                b'\n'
            ]);
        }
        Ok(contents)
    }
}

#[cfg(test)]
mod tests {
    use yoda_core::{PixelGrid, ShapeError};

    use crate::encoder::HexEncoder;
    use crate::errors::HexEncodeErrors;

    #[test]
    fn every_byte_is_two_uppercase_digits() {
        let grid = PixelGrid::from_fn(16, 16, |x, y| (y * 16 + x) as u8).unwrap();
        let text = HexEncoder::new(&grid).encode_to_string().unwrap();

        for (value, line) in text.lines().enumerate() {
            assert_eq!(line, format!("{value:02X}"));
        }
        assert_eq!(text.lines().count(), 256);
        assert!(text.ends_with("FF\n"));
    }

    #[test]
    fn inconsistent_grid_writes_nothing() {
        let grid = PixelGrid::from_raw(4, 4, vec![0; 3]);
        let mut sink = vec![];

        let err = HexEncoder::new(&grid).encode(&mut sink).unwrap_err();

        assert!(matches!(
            err,
            HexEncodeErrors::Shape(ShapeError::BufferLength {
                expected: 16,
                found:    3
            })
        ));
        assert!(sink.is_empty());
    }
}
