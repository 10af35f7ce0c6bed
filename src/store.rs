// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Record store: the ordered set of assignment records for one document

use crate::error::{AssignError, ParseError, Result};
use crate::io;
use crate::record::AssignmentRecord;
use crate::report::{Report, ReportSink};
use crate::scene::{MeshObject, SceneLookup, SceneObject};
use log::debug;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// Counts for a record created from a selected object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddedRecord {
    pub mesh_name: String,
    pub material_count: usize,
    pub geo_node_count: usize,
}

/// Outcome of [`RecordStore::add_from_selection`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddSummary {
    pub added: Vec<AddedRecord>,
    /// Names of inputs that were not meshes
    pub skipped: Vec<String>,
}

impl AddSummary {
    pub fn added_count(&self) -> usize {
        self.added.len()
    }
}

/// Outcome of an import
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub imported: usize,
    pub errors: Vec<ParseError>,
}

/// Outcome of [`RecordStore::apply_to_scene`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplySummary {
    /// Records whose mesh was found
    pub meshes_applied: usize,
    /// Existing slots overwritten
    pub slots_assigned: usize,
    /// New slots added
    pub slots_appended: usize,
    pub meshes_missing: usize,
    pub materials_missing: usize,
}

/// Ordered assignment records plus the interactive selection index
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordStore {
    records: Vec<AssignmentRecord>,
    active_index: Option<usize>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[AssignmentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AssignmentRecord> {
        self.records.iter()
    }

    pub fn get(&self, index: usize) -> Option<&AssignmentRecord> {
        self.records.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut AssignmentRecord> {
        self.records.get_mut(index)
    }

    pub fn push(&mut self, record: AssignmentRecord) {
        self.records.push(record);
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active_index
    }

    /// Select a record for interactive editing, or clear the selection with `None`
    pub fn set_active_index(&mut self, index: Option<usize>) -> Result<()> {
        if let Some(index) = index {
            self.check_index(index)?;
        }
        self.active_index = index;
        Ok(())
    }

    /// Append one record per mesh in `objects`.
    ///
    /// Objects that are not meshes are skipped with a warning.
    pub fn add_from_selection<'a, I>(&mut self, objects: I, reports: &mut dyn ReportSink) -> AddSummary
    where
        I: IntoIterator<Item = &'a SceneObject>,
    {
        let mut summary = AddSummary::default();

        for object in objects {
            if !object.is_mesh() {
                reports.report(Report::warning(format!(
                    "Object {} is not a valid mesh.",
                    object.name
                )));
                summary.skipped.push(object.name.clone());
                continue;
            }

            let record = AssignmentRecord::new(
                object.name.clone(),
                object.material_slot_names(),
                object.geo_node_group_names(),
            );
            let added = AddedRecord {
                mesh_name: object.name.clone(),
                material_count: record.material_names().len(),
                geo_node_count: record.geo_node_names().len(),
            };

            reports.report(Report::info(format!(
                "Added {} with {} materials and {} GeoNode modifiers",
                added.mesh_name, added.material_count, added.geo_node_count
            )));

            self.records.push(record);
            summary.added.push(added);
        }

        summary
    }

    /// Remove and return the record at `index`
    pub fn remove_at(&mut self, index: usize) -> Result<AssignmentRecord> {
        self.check_index(index)?;
        let removed = self.records.remove(index);

        self.active_index = match self.active_index {
            Some(active) if active > index => Some(active - 1),
            Some(active) if active >= self.records.len() => self.records.len().checked_sub(1),
            other => other,
        };

        Ok(removed)
    }

    pub fn clear(&mut self) {
        self.records.clear();
        self.active_index = None;
    }

    /// Write every record to `writer` in the assignment text format
    pub fn export_to_writer<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        io::write_records(writer, &self.records)
    }

    /// Export records to a text file, replacing its content
    pub fn export_to_text(
        &self,
        path: impl AsRef<Path>,
        reports: &mut dyn ReportSink,
    ) -> Result<PathBuf> {
        let path = path.as_ref();
        io::export_records(&self.records, path)?;

        reports.report(Report::info(format!("Exported to {}", path.display())));
        Ok(path.to_path_buf())
    }

    /// Append records parsed from `reader`.
    ///
    /// Malformed lines are reported and skipped.
    pub fn import_from_reader<R: BufRead>(
        &mut self,
        reader: R,
        reports: &mut dyn ReportSink,
    ) -> std::io::Result<ImportSummary> {
        let parsed = io::read_records(reader)?;
        Ok(self.absorb(parsed, reports))
    }

    /// Append records parsed from a text file.
    ///
    /// Existing records are kept. Only a failure to open or read the file is
    /// returned as an error; malformed lines are reported and skipped.
    pub fn import_from_text(
        &mut self,
        path: impl AsRef<Path>,
        reports: &mut dyn ReportSink,
    ) -> Result<ImportSummary> {
        let path = path.as_ref();
        let parsed = io::import_records(path)?;
        let summary = self.absorb(parsed, reports);

        reports.report(Report::info(format!("Imported from {}", path.display())));
        Ok(summary)
    }

    fn absorb(&mut self, parsed: io::ParsedRecords, reports: &mut dyn ReportSink) -> ImportSummary {
        for err in &parsed.errors {
            reports.report(Report::error(format!("Invalid format in line: {}", err.content)));
        }

        let imported = parsed.records.len();
        self.records.extend(parsed.records);

        ImportSummary {
            imported,
            errors: parsed.errors,
        }
    }

    /// Assign recorded materials to scene meshes by slot position.
    ///
    /// Slots are overwritten or appended, never removed. Geometry-node names
    /// are not applied. Missing meshes and materials are reported and skipped.
    pub fn apply_to_scene<S>(&self, scene: &mut S, reports: &mut dyn ReportSink) -> ApplySummary
    where
        S: SceneLookup + ?Sized,
    {
        let mut summary = ApplySummary::default();

        for record in &self.records {
            debug!("Processing record for mesh: {}", record.mesh_name());

            // Resolved up front: the mesh below borrows `scene` mutably until
            // the end of this record, so no lookups are possible after it.
            let materials: Vec<Option<S::Material>> = record
                .material_names()
                .iter()
                .map(|name| scene.material_by_name(name))
                .collect();

            let mesh = match scene.object_by_name(record.mesh_name()) {
                Some(object) if object.is_mesh() => object,
                _ => {
                    reports.report(Report::error(format!(
                        "Mesh '{}' not found or invalid.",
                        record.mesh_name()
                    )));
                    summary.meshes_missing += 1;
                    continue;
                }
            };

            for (slot, (name, material)) in record.material_names().iter().zip(materials).enumerate() {
                let Some(material) = material else {
                    reports.report(Report::error(format!("Material '{}' not found.", name)));
                    summary.materials_missing += 1;
                    continue;
                };

                if slot < mesh.material_slot_count() {
                    mesh.set_material(slot, material);
                    summary.slots_assigned += 1;
                } else {
                    mesh.append_material(material);
                    summary.slots_appended += 1;
                }
                debug!("Applied {} to {} slot {}", name, record.mesh_name(), slot);
            }

            summary.meshes_applied += 1;
        }

        summary
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.records.len() {
            Ok(())
        } else {
            Err(AssignError::OutOfRange {
                index,
                len: self.records.len(),
            })
        }
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a AssignmentRecord;
    type IntoIter = std::slice::Iter<'a, AssignmentRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
