// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Assignment file importer

use super::format::parse_line;
use crate::error::{AssignError, ParseError, Result};
use crate::record::AssignmentRecord;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Records read from a source, along with the lines that failed to parse
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParsedRecords {
    pub records: Vec<AssignmentRecord>,
    pub errors: Vec<ParseError>,
}

/// Read records line by line. Malformed lines are collected, not fatal.
pub fn read_records<R: BufRead>(reader: R) -> std::io::Result<ParsedRecords> {
    let mut parsed = ParsedRecords::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        match parse_line(&line, index + 1) {
            Some(Ok(record)) => parsed.records.push(record),
            Some(Err(err)) => parsed.errors.push(err),
            None => {}
        }
    }

    Ok(parsed)
}

/// Import an assignment file
pub fn import_records(path: &Path) -> Result<ParsedRecords> {
    if path.as_os_str().is_empty() {
        return Err(AssignError::MissingPath);
    }

    let file = File::open(path).map_err(|e| AssignError::io(path, e))?;
    read_records(BufReader::new(file)).map_err(|e| AssignError::io(path, e))
}
