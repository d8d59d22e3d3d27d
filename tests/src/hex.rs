/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use serde::Deserialize;
use yoda_hex::{HexDecoder, HexEncoder, HexOptions};

use crate::load_entries;

#[derive(Clone, Deserialize, Debug)]
pub struct HexEntry {
    pub name:    String,
    pub width:   usize,
    pub height:  usize,
    pub text:    String,
    /// Decoded pixels when the text is valid
    pub pixels:  Option<Vec<u8>>,
    /// Expected error message when it is not
    pub error:   Option<String>,
    pub comment: Option<String>
}

#[test]
#[allow(clippy::uninlined_format_args)]
fn test_hex_vectors() {
    let entries: Vec<HexEntry> = load_entries("hex.json");

    let mut error = false;
    let mut failed = Vec::new();

    for entry in &entries {
        let options = HexOptions::default()
            .set_width(entry.width)
            .set_height(entry.height);

        let result = HexDecoder::new_with_options(entry.text.as_bytes(), options).decode();

        let found = match &result {
            Ok(grid) => format!("{:?}", grid.pixels()),
            Err(e) => e.to_string()
        };
        let expected = match (&entry.pixels, &entry.error) {
            (Some(pixels), None) => format!("{:?}", pixels),
            (None, Some(message)) => message.clone(),
            _ => panic!("Entry {:?} must have exactly one of pixels or error", entry.name)
        };

        if found != expected {
            error = true;
            failed.push(entry.name.clone());
            let err = format!(
                "Decode mismatch for {:?}\nExpected {} but found {}\nConfig:{:#?}",
                entry.name, expected, found, entry
            );
            eprintln!("{}\n", err);
        }
    }
    if error {
        panic!("Errors found during hex decoding\n {:#?}", failed);
    }
}

#[test]
fn valid_vectors_reencode_canonically() {
    let entries: Vec<HexEntry> = load_entries("hex.json");

    for entry in entries.iter().filter(|e| e.pixels.is_some()) {
        let options = HexOptions::default()
            .set_width(entry.width)
            .set_height(entry.height);

        let grid = HexDecoder::new_with_options(entry.text.as_bytes(), options)
            .decode()
            .unwrap();
        let text = HexEncoder::new(&grid).encode_to_string().unwrap();

        assert_eq!(text.lines().count(), entry.width * entry.height, "{}", entry.name);
        assert!(text.ends_with('\n'));
        assert!(text
            .lines()
            .all(|l| l.len() == 2 && l.bytes().all(|b| b.is_ascii_digit() || (b'A'..=b'F').contains(&b))));
    }
}
