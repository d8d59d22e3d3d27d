/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::{read, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use log::{debug, info};
use yoda_core::PixelGrid;
use yoda_hex::{HexDecoder, HexEncoder, HexOptions};
use zune_core::bit_depth::BitDepth;
use zune_core::colorspace::ColorSpace;
use zune_image::core_filters::colorspace::ColorspaceConv;
use zune_image::core_filters::depth::Depth;
use zune_image::image::Image;
use zune_image::traits::OperationsTrait;
use zune_imageprocs::resize::{Resize, ResizeMethod};

use crate::workflow::WorkflowErrors;

/// Read and validate a memory image
pub fn read_hex(path: &Path, options: HexOptions) -> Result<PixelGrid, WorkflowErrors> {
    info!("Reading memory image {:?}", path);

    // hardware dumps are not guaranteed to be utf-8, the decoder reports bad bytes per line
    let data = read(path)?;
    let grid = HexDecoder::new_with_options(&data, options).decode()?;

    debug!("Decoded {} pixels", grid.pixels().len());
    Ok(grid)
}

/// Write a grid as a memory image, truncating `path` if it exists
pub fn write_hex(path: &Path, grid: &PixelGrid) -> Result<(), WorkflowErrors> {
    let file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open(path)?;

    let mut writer = BufWriter::new(file);
    let written = HexEncoder::new(grid).encode(&mut writer)?;
    writer.flush()?;

    info!("Wrote {} bytes to {:?}", written, path);
    Ok(())
}

/// Load an image and sample it down to an 8 bit grayscale grid of `width x height`
pub fn sample_image(path: &Path, width: usize, height: usize) -> Result<PixelGrid, WorkflowErrors> {
    info!("Decoding image {:?}", path);

    let mut image = Image::open(path)?;
    let (in_width, in_height) = image.dimensions();
    debug!("Source dimensions {}x{}", in_width, in_height);

    Depth::new(BitDepth::Eight).execute(&mut image)?;
    ColorspaceConv::new(ColorSpace::Luma).execute(&mut image)?;

    if (in_width, in_height) != (width, height) {
        info!(
            "Resizing from {}x{} to {}x{}",
            in_width, in_height, width, height
        );
        Resize::new(width, height, ResizeMethod::Bilinear).execute(&mut image)?;
    }

    // luma images have a single channel in their only frame
    let pixels = image
        .flatten_to_u8()
        .into_iter()
        .next()
        .ok_or_else(|| WorkflowErrors::GenericString(format!("No frames decoded from {path:?}")))?;

    Ok(PixelGrid::new(width, height, pixels)?)
}

/// Save a grid as an 8 bit grayscale image, format is picked from the extension
pub fn save_image(path: &Path, grid: &PixelGrid) -> Result<(), WorkflowErrors> {
    grid.validate()?;

    let (width, height) = grid.dimensions();
    let image = Image::from_u8(grid.pixels(), width, height, ColorSpace::Luma);

    image.save(path)?;

    info!("Saved {}x{} image to {:?}", width, height, path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use yoda_core::PixelGrid;
    use yoda_hex::{FormatError, HexOptions};

    use crate::file_io::{read_hex, write_hex};
    use crate::workflow::WorkflowErrors;

    #[test]
    fn hex_files_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grid.hex");

        let grid = PixelGrid::from_fn(8, 4, |x, y| (x * 31 + y * 7) as u8).unwrap();
        write_hex(&path, &grid).unwrap();

        let options = HexOptions::default().set_width(8).set_height(4);
        assert_eq!(read_hex(&path, options).unwrap(), grid);
    }

    #[test]
    fn invalid_utf8_is_a_format_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dump.hex");
        std::fs::write(&path, b"00\n\xC3\n").unwrap();

        let options = HexOptions::default().set_width(2).set_height(1);

        match read_hex(&path, options) {
            Err(WorkflowErrors::Format(FormatError::InvalidLines { count, examples })) => {
                assert_eq!(count, 1);
                assert_eq!(examples[0].record, 2);
            }
            Err(other) => panic!("Expected a format error, got {other:?}"),
            Ok(_) => panic!("Expected a format error")
        }
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_hex(&dir.path().join("missing.hex"), HexOptions::default());

        assert!(matches!(result, Err(WorkflowErrors::IoErrors(_))));
    }
}
