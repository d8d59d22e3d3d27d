/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Full resolution runs, compared by digest

use nanorand::Rng;
use yoda_core::{PixelGrid, FPGA_HEIGHT, FPGA_WIDTH};
use yoda_hex::{canonicalize, decode, encode, HexOptions};
use yoda_imageprocs::median::{median_filter, MedianOptions};
use yoda_imageprocs::network::MedianNetwork;
use yoda_imageprocs::noise::{salt_and_pepper, NoiseAmount};
use yoda_imageprocs::pad::PadMethod;

use crate::hash;

fn gradient_with_noise(seed: u64) -> PixelGrid {
    let grid = PixelGrid::from_fn(FPGA_WIDTH, FPGA_HEIGHT, |x, y| ((x + y) / 2) as u8).unwrap();

    salt_and_pepper(&grid, NoiseAmount::new(0.05).unwrap(), seed).unwrap()
}

#[test]
fn filter_output_is_stable_across_runs_and_threads() {
    let grid = gradient_with_noise(0xF96A);

    for network in [MedianNetwork::OddEvenTransposition, MedianNetwork::FourPass] {
        for method in [PadMethod::Reflect, PadMethod::Symmetric, PadMethod::Replicate] {
            let options = MedianOptions::default()
                .set_network(network)
                .set_pad_method(method);

            let digests: Vec<u128> = [true, true, false, false]
                .iter()
                .map(|threads| {
                    let filtered = median_filter(&grid, &options.set_use_threads(*threads)).unwrap();
                    hash(filtered.pixels())
                })
                .collect();

            assert!(
                digests.windows(2).all(|w| w[0] == w[1]),
                "{network:?} {method:?} {digests:?}"
            );
        }
    }
}

#[test]
fn noise_is_reproducible_from_seed() {
    let a = hash(gradient_with_noise(1).pixels());
    let b = hash(gradient_with_noise(1).pixels());
    let c = hash(gradient_with_noise(2).pixels());

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn hex_text_roundtrips_through_files_unchanged() {
    let mut pixels = vec![0_u8; FPGA_WIDTH * FPGA_HEIGHT];
    nanorand::WyRand::new_seed(77).fill(&mut pixels);
    let grid = PixelGrid::new(FPGA_WIDTH, FPGA_HEIGHT, pixels).unwrap();

    let text = encode(&grid).unwrap();
    let lowercase = text.to_ascii_lowercase().replace('\n', "\r\n");

    let canonical = canonicalize(&lowercase, HexOptions::default()).unwrap();

    assert_eq!(hash(canonical.as_bytes()), hash(text.as_bytes()));
    assert_eq!(decode(&text).unwrap(), grid);
}

#[test]
fn filtering_noisy_gradient_restores_most_pixels() {
    let clean = PixelGrid::from_fn(FPGA_WIDTH, FPGA_HEIGHT, |x, y| ((x + y) / 2) as u8).unwrap();
    let noisy = gradient_with_noise(5);
    let filtered = median_filter(&noisy, &MedianOptions::default()).unwrap();

    let close = clean
        .pixels()
        .iter()
        .zip(filtered.pixels())
        .filter(|(a, b)| a.abs_diff(**b) <= 1)
        .count();

    // 10% of pixels are corrupted before filtering
    assert!(close * 100 >= clean.pixels().len() * 95, "{close}");
}
