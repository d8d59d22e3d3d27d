/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![allow(unused_imports, unused)]

use std::fs::read;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Deserialize;
use xxhash_rust::xxh3::xxh3_128;
use yoda_imageprocs::network::MedianNetwork;
use yoda_imageprocs::pad::PadMethod;

mod determinism;
mod hex;
mod median;

#[derive(Copy, Clone, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonBorder {
    Reflect,
    Symmetric,
    Replicate
}

impl JsonBorder {
    pub fn to_pad_method(self) -> PadMethod {
        match self {
            Self::Reflect => PadMethod::Reflect,
            Self::Symmetric => PadMethod::Symmetric,
            Self::Replicate => PadMethod::Replicate
        }
    }
}

#[derive(Copy, Clone, Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JsonNetwork {
    Full,
    FourPass
}

impl JsonNetwork {
    pub fn to_network(self) -> MedianNetwork {
        match self {
            Self::Full => MedianNetwork::OddEvenTransposition,
            Self::FourPass => MedianNetwork::FourPass
        }
    }
}

/// Load test entries from a json file in the `tests` directory
pub fn load_entries<T: DeserializeOwned>(name: &str) -> Vec<T> {
    let file = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join(name);

    let json_file = read(file).unwrap();

    serde_json::from_slice(&json_file).unwrap()
}

fn hash(contents: &[u8]) -> u128 {
    xxh3_128(contents)
}
