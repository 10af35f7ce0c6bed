// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! JSON record files.
//!
//! Unlike the text format this keeps every slot, including empty ones in the
//! middle of a list, so it is what the command-line tool keeps its working
//! records in between invocations.

use crate::record::AssignmentRecord;
use anyhow::{Context, Result};
use std::path::Path;

/// Load records from a JSON array
pub fn load_records_json(path: impl AsRef<Path>) -> Result<Vec<AssignmentRecord>> {
    let content = std::fs::read_to_string(path.as_ref())
        .with_context(|| format!("Failed to read records file: {:?}", path.as_ref()))?;
    let records = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse records file: {:?}", path.as_ref()))?;
    Ok(records)
}

/// Save records as a pretty-printed JSON array
pub fn save_records_json(records: &[AssignmentRecord], path: impl AsRef<Path>) -> Result<()> {
    let content = serde_json::to_string_pretty(records).context("Failed to serialize records")?;
    std::fs::write(path.as_ref(), content)
        .with_context(|| format!("Failed to write records file: {:?}", path.as_ref()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_interior_empty_slot_survives() -> Result<()> {
        let records = vec![
            AssignmentRecord::new(
                "Cube",
                vec!["Red".to_string(), String::new(), "Blue".to_string()],
                vec!["Scatter".to_string()],
            ),
            AssignmentRecord::new("Plane", Vec::new(), Vec::new()),
        ];

        let file = NamedTempFile::with_suffix(".json")?;
        save_records_json(&records, file.path())?;
        let loaded = load_records_json(file.path())?;

        assert_eq!(loaded, records);
        assert_eq!(loaded[0].material_names()[1], "");
        Ok(())
    }

    #[test]
    fn test_malformed_file_names_path() -> Result<()> {
        let file = NamedTempFile::with_suffix(".json")?;
        std::fs::write(file.path(), "Cube|Red|")?;

        let err = load_records_json(file.path()).unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse records file"));
        Ok(())
    }
}
