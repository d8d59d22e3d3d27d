/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Validation errors shared across crates
use core::fmt::{Debug, Display, Formatter};

/// A pixel buffer whose length does not match its declared dimensions
/// or two grids whose dimensions disagree.
#[derive(Copy, Clone, Eq, PartialEq)]
pub enum ShapeError {
    /// `width * height` was `expected` but the buffer holds `found` pixels
    BufferLength { expected: usize, found: usize },
    /// Dimensions where one side is zero, or where `width * height` overflows
    InvalidDimensions { width: usize, height: usize },
    /// Two grids that must share dimensions do not
    DimensionMismatch {
        expected: (usize, usize),
        found:    (usize, usize)
    }
}

impl Debug for ShapeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::BufferLength { expected, found } => {
                write!(
                    f,
                    "Pixel buffer length mismatch, expected {expected} pixels but found {found}"
                )
            }
            Self::InvalidDimensions { width, height } => {
                write!(f, "Invalid grid dimensions {width}x{height}")
            }
            Self::DimensionMismatch { expected, found } => {
                write!(
                    f,
                    "Grid dimensions differ, expected {}x{} but found {}x{}",
                    expected.0, expected.1, found.0, found.1
                )
            }
        }
    }
}

impl Display for ShapeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for ShapeError {}

/// A configuration value outside its documented bounds
#[derive(Clone, PartialEq)]
pub struct RangeError {
    name:  &'static str,
    value: f64,
    min:   f64,
    max:   f64
}

impl RangeError {
    pub fn new(name: &'static str, value: f64, min: f64, max: f64) -> RangeError {
        RangeError {
            name,
            value,
            min,
            max
        }
    }
    /// Name of the rejected parameter
    pub const fn name(&self) -> &'static str {
        self.name
    }
    /// The rejected value
    pub const fn value(&self) -> f64 {
        self.value
    }
}

impl Debug for RangeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} must be between {} and {}, got {}",
            self.name, self.min, self.max, self.value
        )
    }
}

impl Display for RangeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for RangeError {}
