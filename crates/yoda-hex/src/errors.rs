/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};

use yoda_core::ShapeError;

/// Longest line content echoed back in an error message
const MAX_ECHOED_CHARS: usize = 32;

/// Why a single line was rejected
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum LineFault {
    /// The line contains something other than hexadecimal digits
    InvalidHex,
    /// Valid hexadecimal, but the value does not fit in a byte
    OutOfRange
}

impl Display for LineFault {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            LineFault::InvalidHex => write!(f, "Invalid HEX format"),
            LineFault::OutOfRange => write!(f, "Value out of range")
        }
    }
}

/// A rejected line of a memory image
#[derive(Clone, Eq, PartialEq)]
pub struct BadLine {
    /// 1-based position among non-blank lines, i.e. the pixel index plus one
    pub record:  usize,
    /// 1-based line number in the input text, blank lines included
    pub line:    usize,
    /// The line's content, whitespace trimmed
    pub content: String,
    pub fault:   LineFault
}

impl Debug for BadLine {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "Line {}", self.record)?;
        // blank lines shifted the record away from the text line
        if self.line != self.record {
            write!(f, " (file line {})", self.line)?;
        }
        if self.content.chars().count() > MAX_ECHOED_CHARS {
            let short: String = self.content.chars().take(MAX_ECHOED_CHARS).collect();
            write!(f, ": '{short}...' - {}", self.fault)
        } else {
            write!(f, ": '{}' - {}", self.content, self.fault)
        }
    }
}

/// Errors possible when decoding a memory image
pub enum FormatError {
    /// The number of non-blank lines is not `width * height`
    LineCount { expected: usize, found: usize },
    /// Some lines failed to parse or were out of range.
    ///
    /// `count` is the total number of bad lines, `examples`
    /// holds the first few of them in input order
    InvalidLines {
        count:    usize,
        examples: Vec<BadLine>
    },
    /// The dimensions the decoder was configured with are unusable
    Shape(ShapeError)
}

impl Debug for FormatError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::LineCount { expected, found } => {
                write!(f, "Expected {expected} pixels, got {found}")
            }
            Self::InvalidLines { count, examples } => {
                write!(f, "{count} invalid HEX lines detected")?;
                if !examples.is_empty() {
                    write!(f, " (first {} shown)", examples.len())?;
                }
                for example in examples {
                    write!(f, "\n  {example:?}")?;
                }
                Ok(())
            }
            Self::Shape(err) => {
                write!(f, "{err:?}")
            }
        }
    }
}

impl Display for FormatError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for FormatError {}

impl From<ShapeError> for FormatError {
    fn from(value: ShapeError) -> Self {
        FormatError::Shape(value)
    }
}

/// Errors possible during encoding
pub enum HexEncodeErrors {
    /// The grid's buffer does not match its dimensions
    Shape(ShapeError),
    /// The sink failed
    IoErrors(std::io::Error)
}

impl Debug for HexEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Shape(err) => write!(f, "{err:?}"),
            Self::IoErrors(err) => write!(f, "I/O error {err:?}")
        }
    }
}

impl Display for HexEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for HexEncodeErrors {}

impl From<ShapeError> for HexEncodeErrors {
    fn from(value: ShapeError) -> Self {
        HexEncodeErrors::Shape(value)
    }
}

impl From<std::io::Error> for HexEncodeErrors {
    fn from(value: std::io::Error) -> Self {
        HexEncodeErrors::IoErrors(value)
    }
}
