// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Per-document session owning the record store

use crate::error::AssignError;
use crate::report::{Report, ReportSink};
use crate::scene::{SceneHost, SceneLookup};
use crate::store::{AddSummary, ApplySummary, RecordStore};
use std::path::Path;

/// How a user-facing action ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Finished,
    Cancelled,
}

/// One open document and its assignment records.
///
/// Actions here report failures through the sink instead of returning them,
/// the way a host operator would surface them to the user.
#[derive(Debug, Default)]
pub struct Session {
    document: String,
    store: RecordStore,
}

impl Session {
    /// Open a session for `document` with an empty store
    pub fn open(document: impl Into<String>) -> Self {
        let document = document.into();
        log::debug!("Opened session for {}", document);
        Self {
            document,
            store: RecordStore::new(),
        }
    }

    /// Open a session around existing records
    pub fn with_store(document: impl Into<String>, store: RecordStore) -> Self {
        Self {
            document: document.into(),
            store,
        }
    }

    pub fn document(&self) -> &str {
        &self.document
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut RecordStore {
        &mut self.store
    }

    /// Record every selected mesh in `host`
    pub fn add_selected<H>(&mut self, host: &H, reports: &mut dyn ReportSink) -> AddSummary
    where
        H: SceneHost + ?Sized,
    {
        let selected = host.selected_objects();
        self.store.add_from_selection(&selected, reports)
    }

    pub fn remove(&mut self, index: usize, reports: &mut dyn ReportSink) -> Outcome {
        match self.store.remove_at(index) {
            Ok(removed) => {
                log::debug!("Removed record for {}", removed.mesh_name());
                Outcome::Finished
            }
            Err(err) => {
                reports.report(Report::error(format!("Failed to remove slot: {}", err)));
                Outcome::Cancelled
            }
        }
    }

    pub fn remove_all(&mut self) -> Outcome {
        self.store.clear();
        Outcome::Finished
    }

    pub fn apply<H>(&self, host: &mut H, reports: &mut dyn ReportSink) -> ApplySummary
    where
        H: SceneLookup + ?Sized,
    {
        self.store.apply_to_scene(host, reports)
    }

    pub fn export(&self, path: impl AsRef<Path>, reports: &mut dyn ReportSink) -> Outcome {
        match self.store.export_to_text(path, reports) {
            Ok(_) => Outcome::Finished,
            Err(err) => Self::fail("export", err, reports),
        }
    }

    pub fn import(&mut self, path: impl AsRef<Path>, reports: &mut dyn ReportSink) -> Outcome {
        match self.store.import_from_text(path, reports) {
            Ok(_) => Outcome::Finished,
            Err(err) => Self::fail("import", err, reports),
        }
    }

    /// Close the session, handing back its records
    pub fn close(self) -> RecordStore {
        log::debug!("Closed session for {}", self.document);
        self.store
    }

    fn fail(action: &str, err: AssignError, reports: &mut dyn ReportSink) -> Outcome {
        match err {
            AssignError::MissingPath => {
                reports.report(Report::error(err.to_string()));
                Outcome::Cancelled
            }
            err => {
                reports.report(Report::error(format!("Failed to {}: {}", action, err)));
                Outcome::Finished
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::ReportLevel;
    use crate::scene::{MemoryScene, SceneObject};
    use tempfile::NamedTempFile;

    #[test]
    fn test_add_selected_and_apply() {
        let mut scene = MemoryScene::new();
        scene
            .add_object(SceneObject::mesh("Cube").with_material("Red"))
            .add_material("Red")
            .add_material("Blue")
            .select("Cube");

        let mut reports: Vec<Report> = Vec::new();
        let mut session = Session::open("untitled.blend");
        let summary = session.add_selected(&scene, &mut reports);
        assert_eq!(summary.added_count(), 1);

        session
            .store_mut()
            .get_mut(0)
            .unwrap()
            .set_material_name(0, "Blue")
            .unwrap();
        session.apply(&mut scene, &mut reports);

        assert_eq!(scene.object("Cube").unwrap().material_slot_names(), vec!["Blue"]);
    }

    #[test]
    fn test_export_without_path_is_cancelled() {
        let session = Session::open("untitled.blend");
        let mut reports: Vec<Report> = Vec::new();

        assert_eq!(session.export("", &mut reports), Outcome::Cancelled);
        assert_eq!(reports[0].message, "No file path specified");
    }

    #[test]
    fn test_import_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = Session::open("untitled.blend");
        let mut reports: Vec<Report> = Vec::new();

        let outcome = session.import(dir.path().join("absent.txt"), &mut reports);
        assert_eq!(outcome, Outcome::Finished);
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].level, ReportLevel::Error);
        assert!(reports[0].message.starts_with("Failed to import:"));
        assert!(session.store().is_empty());
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut session = Session::open("untitled.blend");
        let mut reports: Vec<Report> = Vec::new();
        assert_eq!(session.remove(0, &mut reports), Outcome::Cancelled);
        assert_eq!(reports[0].level, ReportLevel::Error);
    }

    #[test]
    fn test_export_import_through_session() -> anyhow::Result<()> {
        let mut scene = MemoryScene::new();
        scene.add_object(SceneObject::mesh("Cube")).select("Cube");

        let mut reports: Vec<Report> = Vec::new();
        let mut first = Session::open("a.blend");
        first.add_selected(&scene, &mut reports);

        let file = NamedTempFile::with_suffix(".txt")?;
        assert_eq!(first.export(file.path(), &mut reports), Outcome::Finished);

        let mut second = Session::open("b.blend");
        assert_eq!(second.import(file.path(), &mut reports), Outcome::Finished);
        assert_eq!(second.close(), first.close());
        Ok(())
    }
}
