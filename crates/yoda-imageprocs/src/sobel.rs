/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Sobel edge detection
//!
//! The gradient magnitude of every pixel is computed from its 3x3
//! neighbourhood, taken from a copy of the input padded by one pixel
//! on every side, then min-max normalized back to 8 bits.
//!
//! Gx matrix
//! ```text
//!   -1, 0, 1,
//!   -2, 0, 2,
//!   -1, 0, 1
//! ```
//! Gy matrix
//! ```text
//! -1,-2,-1,
//!  0, 0, 0,
//!  1, 2, 1
//! ```
use yoda_core::{PixelGrid, ShapeError};

use crate::pad::{pad, PadMethod};

/// Options for edge detection
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SobelOptions {
    pad_method: PadMethod
}

impl SobelOptions {
    /// Set how pixels outside the image are produced
    #[must_use]
    pub const fn set_pad_method(mut self, pad_method: PadMethod) -> Self {
        self.pad_method = pad_method;
        self
    }
    pub const fn pad_method(&self) -> PadMethod {
        self.pad_method
    }
}

impl Default for SobelOptions {
    fn default() -> Self {
        SobelOptions {
            pad_method: PadMethod::Reflect
        }
    }
}

/// Detect edges in a grid, returning a new grid with the same dimensions
///
/// The strongest edge becomes 255 and the weakest 0. A grid with the
/// same gradient everywhere, e.g. a uniform one, comes back all zeros.
///
/// # Errors
/// [`ShapeError`] if the grid's buffer does not hold `width * height` pixels
pub fn sobel_edges(grid: &PixelGrid, options: &SobelOptions) -> Result<PixelGrid, ShapeError> {
    grid.validate()?;

    let (width, height) = grid.dimensions();
    let mut magnitude = vec![0.0_f32; grid.pixels().len()];

    sobel_magnitude(grid.pixels(), &mut magnitude, width, height, options.pad_method)?;

    PixelGrid::new(width, height, normalize_min_max(&magnitude))
}

/// Gradient magnitude `sqrt(gx^2 + gy^2)` of a single channel
///
/// # Arguments
/// - in_channel: Input pixels, row-major
/// - out_channel: Where magnitudes are written, same length as input
/// - width, height: Dimensions of both channels
/// - pad_method: How pixels outside the image are produced
///
/// # Errors
/// [`ShapeError`] if either channel does not hold `width * height` pixels
pub fn sobel_magnitude(
    in_channel: &[u8], out_channel: &mut [f32], width: usize, height: usize,
    pad_method: PadMethod
) -> Result<(), ShapeError> {
    let padded = pad(in_channel, width, height, 1, 1, pad_method)?;

    if out_channel.len() != in_channel.len() {
        return Err(ShapeError::BufferLength {
            expected: in_channel.len(),
            found:    out_channel.len()
        });
    }
    let padded_w = width + 2;

    for (y, out_row) in out_channel.chunks_exact_mut(width).enumerate() {
        let top = &padded[y * padded_w..(y + 1) * padded_w];
        let middle = &padded[(y + 1) * padded_w..(y + 2) * padded_w];
        let bottom = &padded[(y + 2) * padded_w..(y + 3) * padded_w];

        for (((t, m), b), out) in top
            .windows(3)
            .zip(middle.windows(3))
            .zip(bottom.windows(3))
            .zip(out_row.iter_mut())
        {
            let window = [t[0], t[1], t[2], m[0], m[1], m[2], b[0], b[1], b[2]];

            *out = sobel_inner(&window);
        }
    }
    Ok(())
}

/// Map magnitudes linearly onto `0..=255`, truncating
///
/// Returns all zeros when every magnitude is the same
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn normalize_min_max(magnitude: &[f32]) -> Vec<u8> {
    let (min, max) = magnitude
        .iter()
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });

    let range = f64::from(max) - f64::from(min);

    if magnitude.is_empty() || range <= f64::EPSILON {
        return vec![0; magnitude.len()];
    }
    let scale = 255.0 / range;
    let shift = -f64::from(min) * scale;

    let (scale, shift) = (scale as f32, shift as f32);

    // `as u8` saturates, rounding noise around 0 and 255 stays in range
    magnitude.iter().map(|&v| (v * scale + shift) as u8).collect()
}

/// Gradient magnitude of a 3x3 window
#[allow(clippy::neg_multiply, clippy::identity_op, clippy::cast_precision_loss)]
#[rustfmt::skip]
fn sobel_inner(c: &[u8; 9]) -> f32 {
    // matrix
    //  -1, 0, 1,
    //  -2, 0, 2,
    //  -1, 0, 1
    let mut gx = 0;
    gx += (i32::from(c[0]) * -1) + (i32::from(c[2]) * 1);
    gx += (i32::from(c[3]) * -2) + (i32::from(c[5]) * 2);
    gx += (i32::from(c[6]) * -1) + (i32::from(c[8]) * 1);

    // matrix
    // -1,-2,-1,
    //  0, 0, 0,
    //  1, 2, 1
    let mut gy = 0;
    gy += (i32::from(c[0]) * -1) + (i32::from(c[1]) * -2);
    gy += (i32::from(c[2]) * -1) + (i32::from(c[6]) * 1);
    gy += (i32::from(c[7]) * 2) + (i32::from(c[8]) * 1);

    // at most 2 * 1020^2, exact in an f32
    ((gx * gx + gy * gy) as f32).sqrt()
}
