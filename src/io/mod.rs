// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! I/O module - the assignment text format, importing, exporting, and JSON
//! record files

mod exporter;
mod format;
mod importer;
mod json;

pub use exporter::{export_records, write_records};
pub use format::{format_record, parse_line, FIELD_DELIMITER, NAME_DELIMITER};
pub use importer::{import_records, read_records, ParsedRecords};
pub use json::{load_records_json, save_records_json};
