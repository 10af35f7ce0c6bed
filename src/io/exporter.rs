// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Assignment file exporter

use super::format::format_record;
use crate::error::{AssignError, Result};
use crate::record::AssignmentRecord;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write one line per record
pub fn write_records<'a, W, I>(writer: &mut W, records: I) -> std::io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a AssignmentRecord>,
{
    for record in records {
        writeln!(writer, "{}", format_record(record))?;
    }
    writer.flush()
}

/// Export records to an assignment file, replacing any existing content
pub fn export_records(records: &[AssignmentRecord], path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(AssignError::MissingPath);
    }

    let file = File::create(path).map_err(|e| AssignError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    write_records(&mut writer, records).map_err(|e| AssignError::io(path, e))
}
