/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Methods used for extending pixels around the border
//!
//! Window operations need values outside the image, this decides
//! where they come from.
use yoda_core::ShapeError;

/// Padding method to use
///
/// Shown for a row `a,b,c` padded by two on each side
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum PadMethod {
    /// Mirror interior pixels, the edge pixel is not repeated.
    ///
    /// ```text
    /// c b | a b c | b a
    /// ```
    /// This is numpy's `reflect` and the FPGA default
    #[default]
    Reflect,
    /// Mirror including the edge pixel
    ///
    /// ```text
    /// b a | a b c | c b
    /// ```
    Symmetric,
    /// Duplicate the edge pixel
    ///
    /// ```text
    /// a a | a b c | c c
    /// ```
    Replicate
}

impl PadMethod {
    pub fn from_string_result(input: &str) -> Result<Self, String> {
        match input {
            "reflect" => Ok(Self::Reflect),
            "symmetric" => Ok(Self::Symmetric),
            "replicate" => Ok(Self::Replicate),
            _ => Err(format!(
                "Unknown border mode {input:?}, accepted values are reflect,symmetric,replicate"
            ))
        }
    }
}

/// Map a possibly out of bounds coordinate into `0..len`
///
/// `len` must be non-zero
#[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
pub fn map_index(i: isize, len: usize, method: PadMethod) -> usize {
    if len == 1 {
        return 0;
    }
    match method {
        PadMethod::Reflect => {
            let period = (2 * len - 2) as isize;
            let r = i.rem_euclid(period) as usize;
            if r < len {
                r
            } else {
                (2 * len - 2) - r
            }
        }
        PadMethod::Symmetric => {
            let period = (2 * len) as isize;
            let r = i.rem_euclid(period) as usize;
            if r < len {
                r
            } else {
                (2 * len - 1) - r
            }
        }
        PadMethod::Replicate => i.clamp(0, len as isize - 1) as usize
    }
}

/// Pad pixels creating a buffer around actual pixels
///
///```text
///    padded width ──────────────────────────────►
/// │ ┌─────────────────────────────────────┐
/// │ │          PADDING                    │
/// │ │     ┌────────────────────┐          │
/// │ │     │                    │          │
/// │ │     │   IMAGE            │          │
/// │ │     │                    │          │
/// │ │     └────────────────────┘          │
/// ▼ │                                     │
///   └─────────────────────────────────────┘
/// ```
///
/// # Arguments
///  - pixels: Un-padded raw pixels
///  - width: Width of raw pixels
///  - height : Height of raw pixels
///  - pad_x: Number of columns added on both the left and the right
///  - pad_y: Number of rows added on both the top and the bottom
///  - method: Method to use for pad pixels.
///
/// # Returns:
///  - A vec of `(width + 2 * pad_x) * (height + 2 * pad_y)` pixels.
///
/// # Errors
/// If `pixels.len() != width * height` or a dimension is zero
pub fn pad<T: Copy + Default>(
    pixels: &[T], width: usize, height: usize, pad_x: usize, pad_y: usize, method: PadMethod
) -> Result<Vec<T>, ShapeError> {
    if width == 0 || height == 0 {
        return Err(ShapeError::InvalidDimensions { width, height });
    }
    let expected = width
        .checked_mul(height)
        .ok_or(ShapeError::InvalidDimensions { width, height })?;

    if pixels.len() != expected {
        return Err(ShapeError::BufferLength {
            expected,
            found: pixels.len()
        });
    }

    let padded_w = width + pad_x * 2;
    let padded_h = height + pad_y * 2;

    let mut out_pixels = vec![T::default(); padded_h * padded_w];

    let start = pad_x;
    let end = padded_w - pad_x;

    // columns to the left and right only depend on the width,
    // resolve them once
    #[allow(clippy::cast_possible_wrap)]
    let left: Vec<usize> = (0..pad_x)
        .map(|px| map_index(px as isize - pad_x as isize, width, method))
        .collect();
    #[allow(clippy::cast_possible_wrap)]
    let right: Vec<usize> = (0..pad_x)
        .map(|px| map_index((width + px) as isize, width, method))
        .collect();

    for (py, out) in out_pixels.chunks_exact_mut(padded_w).enumerate() {
        #[allow(clippy::cast_possible_wrap)]
        let sy = map_index(py as isize - pad_y as isize, height, method);
        let in_row = &pixels[sy * width..(sy + 1) * width];

        out[start..end].copy_from_slice(in_row);

        for (out_px, src) in out[..start].iter_mut().zip(&left) {
            *out_px = in_row[*src];
        }
        for (out_px, src) in out[end..].iter_mut().zip(&right) {
            *out_px = in_row[*src];
        }
    }
    Ok(out_pixels)
}
