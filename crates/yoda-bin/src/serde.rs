/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::Path;

use serde::ser::{SerializeSeq, SerializeStruct};
use serde::{Serialize, Serializer};
use yoda_core::GridStatistics;
use yoda_imageprocs::parity::{Mismatch, ParityReport};

/// Statistics of a memory image on disk
pub struct GridReport<'a> {
    file:       &'a Path,
    statistics: GridStatistics
}

impl<'a> GridReport<'a> {
    pub fn new(file: &'a Path, statistics: GridStatistics) -> GridReport<'a> {
        GridReport { file, statistics }
    }
}

impl Serialize for GridReport<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("GridReport", 2)?;

        state.serialize_field("file", &self.file.to_string_lossy())?;
        state.serialize_field("statistics", &self.statistics)?;

        state.end()
    }
}

/// Outcome of comparing hardware output against the golden model
pub struct Parity<'a> {
    golden:    &'a Path,
    candidate: &'a Path,
    report:    &'a ParityReport
}

impl<'a> Parity<'a> {
    pub fn new(golden: &'a Path, candidate: &'a Path, report: &'a ParityReport) -> Parity<'a> {
        Parity {
            golden,
            candidate,
            report
        }
    }
}

struct Mismatches<'a>(&'a [Mismatch]);

impl Serialize for Mismatches<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut seq = serializer.serialize_seq(Some(self.0.len()))?;

        for mismatch in self.0 {
            seq.serialize_element(&[mismatch.x, mismatch.y])?;
        }
        seq.end()
    }
}

impl Serialize for Parity<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("Parity", 8)?;

        state.serialize_field("golden", &self.golden.to_string_lossy())?;
        state.serialize_field("candidate", &self.candidate.to_string_lossy())?;
        state.serialize_field("exact", &self.report.is_exact())?;
        state.serialize_field("total", &self.report.total)?;
        state.serialize_field("mismatched", &self.report.mismatched)?;
        state.serialize_field("max_abs_diff", &self.report.max_abs_diff)?;
        state.serialize_field("first_mismatch", &Mismatches(&self.report.first_mismatch))?;
        state.serialize_field(
            "first_values",
            &self
                .report
                .first_mismatch
                .iter()
                .map(|m| [m.golden, m.candidate])
                .collect::<Vec<_>>()
        )?;

        state.end()
    }
}
