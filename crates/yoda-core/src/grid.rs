/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A row-major grid of 8-bit greyscale samples
//!
//! The grid is the unit of work for the whole pipeline, it is what the
//! memory image codec produces and consumes and what the median filter
//! reads and writes.
//!
//! ```text
//!   x ──────────────────►  width
//! y ┌────┬────┬────┬────┐
//! │ │ 0  │ 1  │ 2  │ 3  │   pixels[y * width + x]
//! │ ├────┼────┼────┼────┤
//! │ │ 4  │ 5  │ 6  │ 7  │
//! ▼ └────┴────┴────┴────┘
//! height
//! ```
use crate::errors::ShapeError;

/// Fixed size 2D array of 8-bit intensities stored in row-major order.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct PixelGrid {
    width:  usize,
    height: usize,
    pixels: Vec<u8>
}

impl PixelGrid {
    /// Create a new grid, validating that the buffer matches
    /// the dimensions
    ///
    /// # Errors
    /// - [`ShapeError::InvalidDimensions`] if either dimension is zero
    ///   or `width * height` overflows
    /// - [`ShapeError::BufferLength`] if `pixels.len() != width * height`
    pub fn new(width: usize, height: usize, pixels: Vec<u8>) -> Result<PixelGrid, ShapeError> {
        let grid = PixelGrid::from_raw(width, height, pixels);
        grid.validate()?;
        Ok(grid)
    }

    /// Create a grid without checking that the buffer matches
    /// the dimensions.
    ///
    /// Consumers call [`validate`](Self::validate) before reading pixels,
    /// so an inconsistent grid is reported as a [`ShapeError`] when used
    /// rather than here.
    pub fn from_raw(width: usize, height: usize, pixels: Vec<u8>) -> PixelGrid {
        PixelGrid {
            width,
            height,
            pixels
        }
    }

    /// Create a grid where every pixel has the same value
    ///
    /// # Errors
    /// [`ShapeError::InvalidDimensions`] on zero or overflowing dimensions
    pub fn filled(width: usize, height: usize, value: u8) -> Result<PixelGrid, ShapeError> {
        let size = expected_len(width, height)?;

        Ok(PixelGrid::from_raw(width, height, vec![value; size]))
    }

    /// Create a grid by calling `func(x, y)` for every pixel in
    /// row-major order
    ///
    /// # Errors
    /// [`ShapeError::InvalidDimensions`] on zero or overflowing dimensions
    pub fn from_fn<F>(width: usize, height: usize, mut func: F) -> Result<PixelGrid, ShapeError>
    where
        F: FnMut(usize, usize) -> u8
    {
        let size = expected_len(width, height)?;
        let mut pixels = Vec::with_capacity(size);

        for y in 0..height {
            for x in 0..width {
                pixels.push(func(x, y));
            }
        }
        Ok(PixelGrid::from_raw(width, height, pixels))
    }

    /// Check that the pixel buffer holds exactly `width * height` samples
    ///
    /// # Errors
    /// See [`new`](Self::new)
    pub fn validate(&self) -> Result<(), ShapeError> {
        let expected = expected_len(self.width, self.height)?;

        if self.pixels.len() != expected {
            return Err(ShapeError::BufferLength {
                expected,
                found: self.pixels.len()
            });
        }
        Ok(())
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Return `(width, height)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Return the pixel at column `x`, row `y` or `None` if out of bounds
    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y * self.width + x).copied()
    }

    /// Set the pixel at column `x`, row `y`.
    ///
    /// Returns `false` and leaves the grid untouched if the position
    /// is out of bounds
    pub fn set(&mut self, x: usize, y: usize, value: u8) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        match self.pixels.get_mut(y * self.width + x) {
            Some(pix) => {
                *pix = value;
                true
            }
            None => false
        }
    }

    /// Iterate over complete rows of the grid
    pub fn rows(&self) -> core::slice::ChunksExact<'_, u8> {
        self.pixels.chunks_exact(self.width.max(1))
    }

    /// Summarize the grid, for diagnostics
    pub fn statistics(&self) -> GridStatistics {
        let mut seen = [false; 256];
        let mut min = u8::MAX;
        let mut max = u8::MIN;
        let mut sum = 0_u64;

        for &pix in &self.pixels {
            seen[usize::from(pix)] = true;
            min = min.min(pix);
            max = max.max(pix);
            sum += u64::from(pix);
        }
        if self.pixels.is_empty() {
            min = 0;
        }
        #[allow(clippy::cast_precision_loss)]
        let mean = if self.pixels.is_empty() {
            0.0
        } else {
            sum as f64 / self.pixels.len() as f64
        };

        GridStatistics {
            width: self.width,
            height: self.height,
            min,
            max,
            mean,
            unique: seen.iter().filter(|x| **x).count()
        }
    }
}

/// Summary of a grid's contents.
///
/// Printed by the command line tool after every load and filter step
/// so that a broken hardware dump (e.g. all zeros) is obvious at a glance.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GridStatistics {
    pub width:  usize,
    pub height: usize,
    pub min:    u8,
    pub max:    u8,
    pub mean:   f64,
    /// Number of distinct intensity values present
    pub unique: usize
}

fn expected_len(width: usize, height: usize) -> Result<usize, ShapeError> {
    if width == 0 || height == 0 {
        return Err(ShapeError::InvalidDimensions { width, height });
    }
    width
        .checked_mul(height)
        .ok_or(ShapeError::InvalidDimensions { width, height })
}
