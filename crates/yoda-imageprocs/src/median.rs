/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! 3x3 median filter equivalent to the FPGA median unit
//!
//! Every output pixel is selected from its 3x3 neighbourhood, taken from a
//! copy of the input padded by one pixel on every side, by a fixed comparison
//! network, see [`network`](crate::network). The default network is the one
//! the hardware runs; [`MedianNetwork::OddEvenTransposition`] always gives
//! the true median.
//!
//! The filter never writes into its input, neighbours are always read from
//! the unfiltered image.
use yoda_core::{PixelGrid, ShapeError};

use crate::network::{median_of_9, MedianNetwork};
use crate::pad::{pad, PadMethod};

/// Options for the median filter
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct MedianOptions {
    pad_method:  PadMethod,
    network:     MedianNetwork,
    use_threads: bool
}

impl MedianOptions {
    /// Set how pixels outside the image are produced
    #[must_use]
    pub const fn set_pad_method(mut self, pad_method: PadMethod) -> Self {
        self.pad_method = pad_method;
        self
    }
    /// Set the comparison network used to select the median
    #[must_use]
    pub const fn set_network(mut self, network: MedianNetwork) -> Self {
        self.network = network;
        self
    }
    /// Whether rows may be filtered on multiple threads.
    ///
    /// Has no effect without the `threads` feature. Results are
    /// identical either way.
    #[must_use]
    pub const fn set_use_threads(mut self, yes: bool) -> Self {
        self.use_threads = yes;
        self
    }
    pub const fn pad_method(&self) -> PadMethod {
        self.pad_method
    }
    pub const fn network(&self) -> MedianNetwork {
        self.network
    }
    pub const fn use_threads(&self) -> bool {
        self.use_threads
    }
}

impl Default for MedianOptions {
    fn default() -> Self {
        MedianOptions {
            pad_method:  PadMethod::Reflect,
            network:     MedianNetwork::FourPass,
            use_threads: true
        }
    }
}

/// Filter a grid, returning a new grid with the same dimensions
///
/// # Errors
/// [`ShapeError`] if the grid's buffer does not hold `width * height` pixels,
/// checked before any pixel is read
pub fn median_filter(grid: &PixelGrid, options: &MedianOptions) -> Result<PixelGrid, ShapeError> {
    grid.validate()?;

    let (width, height) = grid.dimensions();
    let mut out = vec![0; grid.pixels().len()];

    median_3x3(grid.pixels(), &mut out, width, height, options)?;

    PixelGrid::new(width, height, out)
}

/// Median filter a single channel of raw pixels
///
/// # Arguments
/// - in_channel: Input pixels, row-major
/// - out_channel: Where filtered pixels are written, same length as input
/// - width, height: Dimensions of both channels
/// - options: Border and network selection
///
/// # Errors
/// [`ShapeError`] if either channel does not hold `width * height` pixels
pub fn median_3x3(
    in_channel: &[u8], out_channel: &mut [u8], width: usize, height: usize,
    options: &MedianOptions
) -> Result<(), ShapeError> {
    let padded = pad(in_channel, width, height, 1, 1, options.pad_method)?;

    if out_channel.len() != in_channel.len() {
        return Err(ShapeError::BufferLength {
            expected: in_channel.len(),
            found:    out_channel.len()
        });
    }
    let network = options.network;

    #[cfg(feature = "threads")]
    {
        let threads = if options.use_threads {
            std::thread::available_parallelism()
                .map_or(1, std::num::NonZeroUsize::get)
                .min(height)
        } else {
            1
        };

        if threads > 1 {
            let rows_per_band = height.div_ceil(threads);
            let padded = &padded;

            // bands of output rows are disjoint, the padded input is shared
            std::thread::scope(|s| {
                for (band, out_band) in out_channel.chunks_mut(rows_per_band * width).enumerate() {
                    s.spawn(move || {
                        filter_rows(padded, width, band * rows_per_band, out_band, network);
                    });
                }
            });
            return Ok(());
        }
    }
    filter_rows(&padded, width, 0, out_channel, network);

    Ok(())
}

/// Filter output rows starting at `first_row`.
///
/// `padded` is the whole input padded by one pixel, output row `y`
/// reads padded rows `y`, `y + 1` and `y + 2`
fn filter_rows(
    padded: &[u8], width: usize, first_row: usize, out_rows: &mut [u8], network: MedianNetwork
) {
    let padded_w = width + 2;

    for (row, out_row) in out_rows.chunks_exact_mut(width).enumerate() {
        let y = first_row + row;

        let top = &padded[y * padded_w..(y + 1) * padded_w];
        let middle = &padded[(y + 1) * padded_w..(y + 2) * padded_w];
        let bottom = &padded[(y + 2) * padded_w..(y + 3) * padded_w];

        for (((t, m), b), out) in top
            .windows(3)
            .zip(middle.windows(3))
            .zip(bottom.windows(3))
            .zip(out_row.iter_mut())
        {
            let mut window = [t[0], t[1], t[2], m[0], m[1], m[2], b[0], b[1], b[2]];

            *out = median_of_9(&mut window, network);
        }
    }
}

#[cfg(test)]
mod tests {
    use nanorand::Rng;
    use yoda_core::{PixelGrid, ShapeError};

    use crate::median::{median_filter, MedianOptions};
    use crate::network::MedianNetwork;
    use crate::pad::{map_index, PadMethod};

    fn random_grid(width: usize, height: usize, seed: u64) -> PixelGrid {
        let mut data = vec![0_u8; width * height];
        nanorand::WyRand::new_seed(seed).fill(&mut data);
        PixelGrid::new(width, height, data).unwrap()
    }

    /// Straightforward median with a library sort
    #[allow(clippy::cast_possible_wrap)]
    fn reference_median(grid: &PixelGrid, method: PadMethod) -> Vec<u8> {
        let (width, height) = grid.dimensions();
        let mut out = Vec::with_capacity(width * height);

        for y in 0..height {
            for x in 0..width {
                let mut window = Vec::with_capacity(9);

                for dy in -1..=1_isize {
                    for dx in -1..=1_isize {
                        let sy = map_index(y as isize + dy, height, method);
                        let sx = map_index(x as isize + dx, width, method);
                        window.push(grid.get(sx, sy).unwrap());
                    }
                }
                window.sort_unstable();
                out.push(window[4]);
            }
        }
        out
    }

    #[test]
    fn uniform_grid_is_unchanged() {
        for value in [0, 1, 127, 254, 255] {
            let grid = PixelGrid::filled(256, 256, value).unwrap();

            for network in [MedianNetwork::OddEvenTransposition, MedianNetwork::FourPass] {
                let options = MedianOptions::default().set_network(network);

                assert_eq!(median_filter(&grid, &options).unwrap(), grid);
            }
        }
    }

    #[test]
    fn bright_corner_is_removed() {
        let mut grid = PixelGrid::filled(256, 256, 0).unwrap();
        grid.set(0, 0, 255);

        let filtered = median_filter(&grid, &MedianOptions::default()).unwrap();

        assert_eq!(filtered.get(0, 0), Some(0));
        assert!(filtered.pixels().iter().all(|x| *x == 0));
        // input is untouched
        assert_eq!(grid.get(0, 0), Some(255));
    }

    #[test]
    fn impulse_noise_is_removed() {
        let mut grid = PixelGrid::filled(32, 32, 100).unwrap();
        grid.set(5, 5, 255);
        grid.set(20, 7, 0);
        grid.set(31, 31, 255);

        let filtered = median_filter(&grid, &MedianOptions::default()).unwrap();

        assert!(filtered.pixels().iter().all(|x| *x == 100));
    }

    #[test]
    fn matches_reference_for_every_border_mode() {
        let grid = random_grid(37, 23, 3);

        for method in [PadMethod::Reflect, PadMethod::Symmetric, PadMethod::Replicate] {
            let options = MedianOptions::default()
                .set_pad_method(method)
                .set_network(MedianNetwork::OddEvenTransposition);
            let filtered = median_filter(&grid, &options).unwrap();

            assert_eq!(filtered.pixels(), &reference_median(&grid, method)[..], "{method:?}");
        }
    }

    #[test]
    fn thin_grids_are_supported() {
        for (width, height) in [(1, 1), (1, 17), (17, 1), (2, 2)] {
            let grid = random_grid(width, height, 11);
            let options = MedianOptions::default().set_network(MedianNetwork::OddEvenTransposition);
            let filtered = median_filter(&grid, &options).unwrap();

            assert_eq!(filtered.dimensions(), (width, height));
            assert_eq!(
                filtered.pixels(),
                &reference_median(&grid, PadMethod::Reflect)[..]
            );
        }
    }

    #[test]
    fn default_options_follow_the_hardware_network() {
        // centre neighbourhood is exactly this ordering
        let grid = PixelGrid::new(3, 3, vec![5, 6, 7, 8, 0, 1, 2, 3, 4]).unwrap();

        let hardware = median_filter(&grid, &MedianOptions::default()).unwrap();
        assert_eq!(hardware.get(1, 1), Some(5));

        let options = MedianOptions::default().set_network(MedianNetwork::OddEvenTransposition);
        let full = median_filter(&grid, &options).unwrap();
        assert_eq!(full.get(1, 1), Some(4));
    }

    #[test]
    fn repeated_runs_are_identical() {
        let grid = random_grid(256, 256, 99);
        let options = MedianOptions::default();

        let first = median_filter(&grid, &options).unwrap();
        let second = median_filter(&grid, &options).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn threaded_and_single_threaded_agree() {
        let grid = random_grid(256, 256, 1234);

        for network in [MedianNetwork::OddEvenTransposition, MedianNetwork::FourPass] {
            let options = MedianOptions::default().set_network(network);

            let threaded = median_filter(&grid, &options.set_use_threads(true)).unwrap();
            let single = median_filter(&grid, &options.set_use_threads(false)).unwrap();

            assert_eq!(threaded, single);
        }
    }

    #[test]
    fn inconsistent_grid_is_a_shape_error() {
        let grid = PixelGrid::from_raw(256, 256, vec![0; 256 * 255]);

        assert_eq!(
            median_filter(&grid, &MedianOptions::default()),
            Err(ShapeError::BufferLength {
                expected: 65536,
                found:    65280
            })
        );
    }
}
