/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use yoda_core::{PixelGrid, ShapeError, FPGA_HEIGHT, FPGA_WIDTH};

use crate::errors::{BadLine, FormatError, LineFault};

/// Options for decoding memory images
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct HexOptions {
    width:        usize,
    height:       usize,
    max_reported: usize
}

impl HexOptions {
    /// Set the expected image width
    #[must_use]
    pub const fn set_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }
    /// Set the expected image height
    #[must_use]
    pub const fn set_height(mut self, height: usize) -> Self {
        self.height = height;
        self
    }
    /// Set how many bad lines are kept as examples in
    /// [`FormatError::InvalidLines`]. All bad lines are still counted.
    #[must_use]
    pub const fn set_max_reported(mut self, max_reported: usize) -> Self {
        self.max_reported = max_reported;
        self
    }
    pub const fn width(&self) -> usize {
        self.width
    }
    pub const fn height(&self) -> usize {
        self.height
    }
    pub const fn max_reported(&self) -> usize {
        self.max_reported
    }
}

impl Default for HexOptions {
    fn default() -> Self {
        Self {
            width:        FPGA_WIDTH,
            height:       FPGA_HEIGHT,
            max_reported: 5
        }
    }
}

/// A memory image decoder
///
/// # Example
/// ```
/// use yoda_hex::{FormatError, HexDecoder};
/// let mut decoder = HexDecoder::new(b"NOT A MEMORY IMAGE");
///
/// assert!(matches!(decoder.decode(), Err(FormatError::LineCount { .. })));
/// ```
pub struct HexDecoder<'a> {
    data:    &'a [u8],
    options: HexOptions
}

impl<'a> HexDecoder<'a> {
    /// Create a decoder expecting a 256x256 image
    pub fn new(data: &'a [u8]) -> HexDecoder<'a> {
        HexDecoder::new_with_options(data, HexOptions::default())
    }

    pub fn new_with_options(data: &'a [u8], options: HexOptions) -> HexDecoder<'a> {
        HexDecoder { data, options }
    }

    /// Return the dimensions the decoder expects
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.options.width, self.options.height)
    }

    /// Decode the memory image into a grid.
    ///
    /// Blank lines are skipped, every other line must hold one byte
    /// in hexadecimal.
    ///
    /// # Errors
    /// - [`FormatError::LineCount`] if the number of non-blank lines is not
    ///   `width * height`, checked before any line is parsed
    /// - [`FormatError::InvalidLines`] if any line is not hexadecimal or does
    ///   not fit in a byte, every line is checked before this is returned
    /// - [`FormatError::Shape`] if the configured dimensions are zero
    pub fn decode(&mut self) -> Result<PixelGrid, FormatError> {
        let (width, height) = self.dimensions();

        let expected = width
            .checked_mul(height)
            .filter(|size| *size != 0)
            .ok_or(ShapeError::InvalidDimensions { width, height })?;

        let found = non_blank_lines(self.data).count();

        if found != expected {
            return Err(FormatError::LineCount { expected, found });
        }

        let mut pixels = Vec::with_capacity(expected);
        let mut bad_count = 0;
        let mut examples = Vec::new();

        for (record, line_no, line) in non_blank_lines(self.data) {
            match parse_line(line) {
                Ok(value) => pixels.push(value),
                Err(fault) => {
                    bad_count += 1;

                    if examples.len() < self.options.max_reported {
                        examples.push(BadLine {
                            record,
                            line: line_no,
                            content: String::from_utf8_lossy(line).into_owned(),
                            fault
                        });
                    }
                }
            }
        }
        if bad_count > 0 {
            return Err(FormatError::InvalidLines {
                count: bad_count,
                examples
            });
        }
        Ok(PixelGrid::new(width, height, pixels)?)
    }
}

/// Split into lines on `\n`, `\r\n` or a lone `\r`, yielding each
/// line's 1-based number and its content without the terminator
fn physical_lines(data: &[u8]) -> impl Iterator<Item = (usize, &[u8])> {
    let mut rest = Some(data);

    core::iter::from_fn(move || {
        let remaining = rest?;

        match remaining.iter().position(|b| *b == b'\n' || *b == b'\r') {
            Some(end) => {
                let crlf = remaining[end] == b'\r' && remaining.get(end + 1) == Some(&b'\n');
                let terminator = if crlf { 2 } else { 1 };
                rest = Some(&remaining[end + terminator..]);
                Some(&remaining[..end])
            }
            None => {
                rest = None;
                Some(remaining)
            }
        }
    })
    .enumerate()
    .map(|(pos, line)| (pos + 1, line))
}

/// Iterate over lines that are not blank after trimming, yielding
/// `(record, line, content)`.
///
/// `record` counts non-blank lines only and is the pixel's 1-based index,
/// `line` is the line number in the input with blank lines included.
fn non_blank_lines(data: &[u8]) -> impl Iterator<Item = (usize, usize, &[u8])> {
    physical_lines(data)
        .map(|(line_no, line)| (line_no, line.trim_ascii()))
        .filter(|(_, line)| !line.is_empty())
        .enumerate()
        .map(|(pos, (line_no, line))| (pos + 1, line_no, line))
}

/// Parse one trimmed, non-empty line.
///
/// Any number of hex digits is accepted as long as the value fits in a
/// byte, so `F` and `0FF` are valid while `100` is out of range.
fn parse_line(line: &[u8]) -> Result<u8, LineFault> {
    let mut value = 0_u32;
    let mut overflow = false;

    for &byte in line {
        let digit = match byte {
            b'0'..=b'9' => byte - b'0',
            b'a'..=b'f' => byte - b'a' + 10,
            b'A'..=b'F' => byte - b'A' + 10,
            _ => return Err(LineFault::InvalidHex)
        };
        if !overflow {
            value = value * 16 + u32::from(digit);
            overflow = value > u32::from(u8::MAX);
        }
    }
    if overflow {
        return Err(LineFault::OutOfRange);
    }
    u8::try_from(value).map_err(|_| LineFault::OutOfRange)
}

#[cfg(test)]
mod tests {
    use crate::decoder::{non_blank_lines, parse_line, physical_lines};
    use crate::errors::LineFault;

    #[test]
    fn parse_accepts_case_and_short_forms() {
        assert_eq!(parse_line(b"00"), Ok(0));
        assert_eq!(parse_line(b"FF"), Ok(255));
        assert_eq!(parse_line(b"aB"), Ok(0xAB));
        assert_eq!(parse_line(b"F"), Ok(15));
        assert_eq!(parse_line(b"0FF"), Ok(255));
        assert_eq!(parse_line(b"0000000000000000007f"), Ok(127));
    }

    #[test]
    fn parse_rejects_out_of_range() {
        assert_eq!(parse_line(b"100"), Err(LineFault::OutOfRange));
        assert_eq!(parse_line(b"FFFFFFFFFFFFFFFFFFFF"), Err(LineFault::OutOfRange));
    }

    #[test]
    fn parse_rejects_non_hex() {
        assert_eq!(parse_line(b"G1"), Err(LineFault::InvalidHex));
        assert_eq!(parse_line(b"0x1F"), Err(LineFault::InvalidHex));
        assert_eq!(parse_line(b"+1"), Err(LineFault::InvalidHex));
        assert_eq!(parse_line(b"1 2"), Err(LineFault::InvalidHex));
        // non hex wins over range
        assert_eq!(parse_line(b"FFFZ"), Err(LineFault::InvalidHex));
    }

    #[test]
    fn blank_lines_are_numbered_both_ways() {
        let lines: Vec<_> = non_blank_lines(b"AA\n\n  \r\n bb \r\n").collect();

        assert_eq!(lines, vec![(1, 1, &b"AA"[..]), (2, 4, &b"bb"[..])]);
    }

    #[test]
    fn every_line_ending_is_accepted() {
        let lines: Vec<_> = physical_lines(b"01\n02\r\n03\r04\r\r05").collect();

        assert_eq!(
            lines,
            vec![
                (1, &b"01"[..]),
                (2, &b"02"[..]),
                (3, &b"03"[..]),
                (4, &b"04"[..]),
                (5, &b""[..]),
                (6, &b"05"[..])
            ]
        );
    }
}
