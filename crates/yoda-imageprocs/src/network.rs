/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Fixed comparison networks selecting the median of nine values
//!
//! Both networks are odd-even transposition sorts, a sequence of phases
//! alternating between comparing pairs `(0,1) (2,3) (4,5) (6,7)` (even phase)
//! and `(1,2) (3,4) (5,6) (7,8)` (odd phase). A comparator swaps its pair if
//! it is out of ascending order. The sequence of comparators never depends on
//! the data so it maps one to one onto hardware.

/// Number of values in a 3x3 window
pub const WINDOW_SIZE: usize = 9;

/// Index of the median once the window is sorted
pub const MEDIAN_INDEX: usize = WINDOW_SIZE / 2;

/// Which comparison network selects the median
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum MedianNetwork {
    /// Four passes of an even and an odd phase (eight phases), the network
    /// the FPGA median unit implements.
    ///
    /// One phase short of a full odd-even transposition sort, for 2880 of
    /// the 9! orderings of distinct values index 4 does not hold the
    /// median. Output is bit identical to the hardware for every input.
    #[default]
    FourPass,
    /// Nine phases, always sorts the whole window so index 4 is the
    /// true median.
    OddEvenTransposition
}

impl MedianNetwork {
    pub fn from_string_result(input: &str) -> Result<Self, String> {
        match input {
            "four-pass" => Ok(Self::FourPass),
            "full" => Ok(Self::OddEvenTransposition),
            _ => Err(format!(
                "Unknown median network {input:?}, accepted values are four-pass,full"
            ))
        }
    }

    /// Number of even and odd phases the network runs
    pub const fn phases(self) -> usize {
        match self {
            Self::FourPass => 8,
            Self::OddEvenTransposition => WINDOW_SIZE
        }
    }

    /// Number of compare and swap units, four per phase
    pub const fn comparators(self) -> usize {
        self.phases() * 4
    }
}

#[inline(always)]
fn compare_swap<T: Copy + PartialOrd>(window: &mut [T; WINDOW_SIZE], i: usize) {
    if window[i] > window[i + 1] {
        window.swap(i, i + 1);
    }
}

#[inline(always)]
fn even_phase<T: Copy + PartialOrd>(window: &mut [T; WINDOW_SIZE]) {
    compare_swap(window, 0);
    compare_swap(window, 2);
    compare_swap(window, 4);
    compare_swap(window, 6);
}

#[inline(always)]
fn odd_phase<T: Copy + PartialOrd>(window: &mut [T; WINDOW_SIZE]) {
    compare_swap(window, 1);
    compare_swap(window, 3);
    compare_swap(window, 5);
    compare_swap(window, 7);
}

/// Run `network` over `window` in place and return the value left
/// at the median index.
///
/// The window is expected in row-major order of the 3x3 neighbourhood,
/// [`MedianNetwork::FourPass`] results depend on that order.
#[inline]
pub fn median_of_9<T: Copy + PartialOrd>(
    window: &mut [T; WINDOW_SIZE], network: MedianNetwork
) -> T {
    for _ in 0..4 {
        even_phase(window);
        odd_phase(window);
    }
    if network == MedianNetwork::OddEvenTransposition {
        even_phase(window);
    }
    window[MEDIAN_INDEX]
}
