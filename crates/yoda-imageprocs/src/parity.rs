/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Bit exact comparison of golden model output against hardware output
use yoda_core::{PixelGrid, ShapeError};

/// A pixel where the two outputs differ
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Mismatch {
    pub x:         usize,
    pub y:         usize,
    pub golden:    u8,
    pub candidate: u8
}

/// Result of comparing two grids
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParityReport {
    /// Number of pixels compared
    pub total:          usize,
    /// Number of pixels that differ
    pub mismatched:     usize,
    /// Largest absolute difference over all pixels
    pub max_abs_diff:   u8,
    /// The first mismatches in row-major order
    pub first_mismatch: Vec<Mismatch>
}

impl ParityReport {
    /// True if both grids are bit identical
    pub const fn is_exact(&self) -> bool {
        self.mismatched == 0
    }
}

/// Compare `candidate` against `golden` pixel by pixel
///
/// At most `max_reported` mismatches are kept in the report, all
/// are counted.
///
/// # Errors
/// [`ShapeError`] if either grid is inconsistent or their dimensions differ
pub fn compare(
    golden: &PixelGrid, candidate: &PixelGrid, max_reported: usize
) -> Result<ParityReport, ShapeError> {
    golden.validate()?;
    candidate.validate()?;

    if golden.dimensions() != candidate.dimensions() {
        return Err(ShapeError::DimensionMismatch {
            expected: golden.dimensions(),
            found:    candidate.dimensions()
        });
    }
    let width = golden.width();

    let mut report = ParityReport {
        total:          golden.pixels().len(),
        mismatched:     0,
        max_abs_diff:   0,
        first_mismatch: Vec::new()
    };

    for (pos, (&g, &c)) in golden.pixels().iter().zip(candidate.pixels()).enumerate() {
        if g == c {
            continue;
        }
        report.mismatched += 1;
        report.max_abs_diff = report.max_abs_diff.max(g.abs_diff(c));

        if report.first_mismatch.len() < max_reported {
            report.first_mismatch.push(Mismatch {
                x:         pos % width,
                y:         pos / width,
                golden:    g,
                candidate: c
            });
        }
    }
    Ok(report)
}
