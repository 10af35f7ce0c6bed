// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Mesh-material assignment records.
//!
//! Captures which materials and geometry-node groups each mesh should carry,
//! saves them to a plain `mesh|materials|node groups` text file, and applies
//! the materials back onto a scene by slot position.

pub mod cli;
pub mod config;
pub mod error;
pub mod io;
pub mod record;
pub mod report;
pub mod scene;
pub mod session;
pub mod store;

pub use config::AssignerConfig;
pub use error::{AssignError, ParseError, Result};
pub use record::AssignmentRecord;
pub use report::{Report, ReportLevel, ReportSink};
pub use scene::{MemoryScene, MeshObject, SceneHost, SceneLookup, SceneObject};
pub use session::{Outcome, Session};
pub use store::{AddSummary, AddedRecord, ApplySummary, ImportSummary, RecordStore};

/// Load an assignment file into a fresh store
pub fn load_records(path: impl AsRef<std::path::Path>, reports: &mut dyn ReportSink) -> Result<RecordStore> {
    let mut store = RecordStore::new();
    store.import_from_text(path, reports)?;
    Ok(store)
}
