/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Salt and pepper noise for generating filter test vectors
use nanorand::{Rng, WyRand};
use yoda_core::{PixelGrid, RangeError, ShapeError};

/// Fraction of the image turned into salt, and again into pepper.
///
/// Always within `0.0..=1.0`
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct NoiseAmount(f32);

impl NoiseAmount {
    /// # Errors
    /// [`RangeError`] if `amount` is outside `0.0..=1.0` or NaN
    pub fn new(amount: f32) -> Result<NoiseAmount, RangeError> {
        if !(0.0..=1.0).contains(&amount) {
            return Err(RangeError::new("noise amount", f64::from(amount), 0.0, 1.0));
        }
        Ok(NoiseAmount(amount))
    }

    pub const fn get(self) -> f32 {
        self.0
    }

    /// Number of pixels set to each of 0 and 255 for an image with `pixels` pixels
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn pixel_count(self, pixels: usize) -> usize {
        (f64::from(self.0) * pixels as f64).floor() as usize
    }
}

/// Add salt and pepper noise, returning a new grid.
///
/// `amount * width * height` random positions are set to 255, then the same
/// number of random positions are set to 0, so pepper may overwrite salt.
/// Positions are drawn uniformly over the whole grid from a generator seeded
/// with `seed`, the same seed always gives the same result.
///
/// # Errors
/// [`ShapeError`] if the grid's buffer does not match its dimensions
pub fn salt_and_pepper(
    grid: &PixelGrid, amount: NoiseAmount, seed: u64
) -> Result<PixelGrid, ShapeError> {
    grid.validate()?;

    let (width, height) = grid.dimensions();
    let count = amount.pixel_count(width * height);

    let mut noisy = grid.clone();
    let mut rng = WyRand::new_seed(seed);

    for value in [u8::MAX, u8::MIN] {
        for _ in 0..count {
            let x = rng.generate_range(0..width);
            let y = rng.generate_range(0..height);
            noisy.set(x, y, value);
        }
    }
    Ok(noisy)
}

#[cfg(test)]
mod tests {
    use yoda_core::PixelGrid;

    use crate::noise::{salt_and_pepper, NoiseAmount};

    #[test]
    fn amount_outside_unit_range_is_rejected() {
        for amount in [-0.01, 1.01, f32::NAN, f32::INFINITY] {
            assert!(NoiseAmount::new(amount).is_err(), "{amount}");
        }
        for amount in [0.0, 0.05, 1.0] {
            assert_eq!(NoiseAmount::new(amount).unwrap().get(), amount);
        }
    }

    #[test]
    fn range_error_names_the_parameter() {
        let err = NoiseAmount::new(1.5).unwrap_err();

        assert_eq!(err.name(), "noise amount");
        assert_eq!(err.to_string(), "noise amount must be between 0 and 1, got 1.5");
    }

    #[test]
    fn zero_amount_is_identity() {
        let grid = PixelGrid::from_fn(64, 64, |x, y| (x ^ y) as u8).unwrap();
        let noisy = salt_and_pepper(&grid, NoiseAmount::new(0.0).unwrap(), 1).unwrap();

        assert_eq!(noisy, grid);
    }

    #[test]
    fn only_extremes_are_introduced() {
        let grid = PixelGrid::filled(256, 256, 128).unwrap();
        let amount = NoiseAmount::new(0.05).unwrap();
        let noisy = salt_and_pepper(&grid, amount, 7).unwrap();

        let salt = noisy.pixels().iter().filter(|x| **x == 255).count();
        let pepper = noisy.pixels().iter().filter(|x| **x == 0).count();
        let untouched = noisy.pixels().iter().filter(|x| **x == 128).count();

        assert_eq!(salt + pepper + untouched, 256 * 256);
        // collisions only ever reduce the count
        assert!(pepper <= amount.pixel_count(256 * 256));
        assert!(salt + pepper <= 2 * amount.pixel_count(256 * 256));
        assert!(pepper > 0 && salt > 0);
    }

    #[test]
    fn same_seed_same_noise() {
        let grid = PixelGrid::filled(100, 50, 60).unwrap();
        let amount = NoiseAmount::new(0.1).unwrap();

        let a = salt_and_pepper(&grid, amount, 42).unwrap();
        let b = salt_and_pepper(&grid, amount, 42).unwrap();
        let c = salt_and_pepper(&grid, amount, 43).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
