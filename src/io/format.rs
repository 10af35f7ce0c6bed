// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Line format for assignment files.
//!
//! One record per line:
//!
//! ```text
//! <mesh>|<material>,<material>,...|<node group>,<node group>,...
//! ```
//!
//! Names are written verbatim. A name containing `|` or `,` will not survive
//! a round trip, and neither will empty entries other than a lone placeholder,
//! since empty pieces are dropped on parse.

use crate::error::ParseError;
use crate::record::AssignmentRecord;

/// Separates the mesh, material and node group fields
pub const FIELD_DELIMITER: char = '|';

/// Separates names within a field
pub const NAME_DELIMITER: char = ',';

/// Format a record as a single line, without a line terminator
pub fn format_record(record: &AssignmentRecord) -> String {
    let separator = NAME_DELIMITER.to_string();
    format!(
        "{}{}{}{}{}",
        record.mesh_name(),
        FIELD_DELIMITER,
        record.material_names().join(&separator),
        FIELD_DELIMITER,
        record.geo_node_names().join(&separator),
    )
}

/// Parse one line of an assignment file.
///
/// Returns `None` for blank lines. Fields past the third are ignored.
pub fn parse_line(line: &str, line_number: usize) -> Option<Result<AssignmentRecord, ParseError>> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let parts: Vec<&str> = line.split(FIELD_DELIMITER).collect();
    if parts.len() < 3 {
        return Some(Err(ParseError {
            line_number,
            content: line.to_string(),
        }));
    }

    Some(Ok(AssignmentRecord::new(
        parts[0].trim(),
        split_names(parts[1]),
        split_names(parts[2]),
    )))
}

fn split_names(field: &str) -> Vec<String> {
    field
        .split(NAME_DELIMITER)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_ok(line: &str) -> AssignmentRecord {
        parse_line(line, 1)
            .expect("line should not be blank")
            .expect("line should parse")
    }

    #[test]
    fn test_parse_basic_line() {
        let record = parse_ok("Cube|Red,Blue|NodeGroupA");
        assert_eq!(record.mesh_name(), "Cube");
        assert_eq!(record.material_names(), &["Red".to_string(), "Blue".to_string()]);
        assert_eq!(record.geo_node_names(), &["NodeGroupA".to_string()]);
    }

    #[test]
    fn test_parse_trims_and_drops_empty_pieces() {
        let record = parse_ok("  Cube | Red , ,Blue ,|  ");
        assert_eq!(record.mesh_name(), "Cube");
        assert_eq!(record.material_names(), &["Red".to_string(), "Blue".to_string()]);
        assert_eq!(record.geo_node_names(), &[String::new()]);
    }

    #[test]
    fn test_parse_blank_line() {
        assert!(parse_line("", 1).is_none());
        assert!(parse_line("   \t", 4).is_none());
    }

    #[test]
    fn test_parse_too_few_fields() {
        let err = parse_line(" Cube|Red ", 7).unwrap().unwrap_err();
        assert_eq!(err.line_number, 7);
        assert_eq!(err.content, "Cube|Red");
    }

    #[test]
    fn test_parse_ignores_extra_fields() {
        let record = parse_ok("Cube|Red|Scatter|trailing");
        assert_eq!(record.geo_node_names(), &["Scatter".to_string()]);
    }

    #[test]
    fn test_format_record() {
        let record = AssignmentRecord::new(
            "Cube",
            vec!["Red".to_string(), "Blue".to_string()],
            Vec::new(),
        );
        assert_eq!(format_record(&record), "Cube|Red,Blue|");
    }
}
