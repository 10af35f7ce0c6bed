// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Round-trip export/import tests

use anyhow::Result;
use matassign::{
    AssignmentRecord, MemoryScene, RecordStore, Report, ReportLevel, SceneHost, SceneObject,
};
use matassign::scene::ModifierSnapshot;
use tempfile::NamedTempFile;

fn names(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_roundtrip_preserves_records() -> Result<()> {
    let mut original = RecordStore::new();
    original.push(AssignmentRecord::new(
        "Cube",
        names(&["Red", "Blue"]),
        names(&["NodeGroupA"]),
    ));
    original.push(AssignmentRecord::new("Plane", Vec::new(), Vec::new()));
    original.push(AssignmentRecord::new(
        "Cube",
        names(&["Green"]),
        names(&["Scatter", "Bevel"]),
    ));

    let file = NamedTempFile::with_suffix(".txt")?;
    let mut reports: Vec<Report> = Vec::new();

    let written = original.export_to_text(file.path(), &mut reports)?;
    assert_eq!(written, file.path());

    let mut restored = RecordStore::new();
    let summary = restored.import_from_text(file.path(), &mut reports)?;

    assert_eq!(summary.imported, 3);
    assert!(summary.errors.is_empty());
    assert_eq!(restored.records(), original.records());

    let messages: Vec<&str> = reports.iter().map(|r| r.message.as_str()).collect();
    assert_eq!(
        messages,
        vec![
            format!("Exported to {}", file.path().display()),
            format!("Imported from {}", file.path().display()),
        ]
    );
    assert!(reports.iter().all(|r| r.level == ReportLevel::Info));

    Ok(())
}

#[test]
fn test_selection_records_roundtrip() -> Result<()> {
    let mut scene = MemoryScene::new();
    scene
        .add_object(
            SceneObject::mesh("Rock")
                .with_material("Stone")
                .with_material("Moss")
                .with_modifier(ModifierSnapshot::geometry_nodes("GeometryNodes", "Scatter")),
        )
        .add_object(SceneObject::mesh("Empty.Mesh"))
        .select("Rock")
        .select("Empty.Mesh");

    let mut reports: Vec<Report> = Vec::new();
    let mut original = RecordStore::new();
    original.add_from_selection(&scene.selected_objects(), &mut reports);

    let file = NamedTempFile::with_suffix(".txt")?;
    original.export_to_text(file.path(), &mut reports)?;
    assert_eq!(
        std::fs::read_to_string(file.path())?,
        "Rock|Stone,Moss|Scatter\nEmpty.Mesh||\n"
    );

    let mut restored = RecordStore::new();
    restored.import_from_text(file.path(), &mut reports)?;
    assert_eq!(restored.records(), original.records());

    for record in restored.iter() {
        assert!(!record.material_names().is_empty());
        assert!(!record.geo_node_names().is_empty());
    }

    Ok(())
}

#[test]
fn test_export_replaces_existing_content() -> Result<()> {
    let file = NamedTempFile::with_suffix(".txt")?;
    std::fs::write(file.path(), "Old|Stale|Stale\nOlder|Stale|Stale\n")?;

    let mut store = RecordStore::new();
    store.push(AssignmentRecord::new("Cube", names(&["Red"]), Vec::new()));
    store.export_to_text(file.path(), &mut Vec::<Report>::new())?;

    assert_eq!(std::fs::read_to_string(file.path())?, "Cube|Red|\n");
    Ok(())
}

#[test]
fn test_export_empty_store_writes_empty_file() -> Result<()> {
    let file = NamedTempFile::with_suffix(".txt")?;
    RecordStore::new().export_to_text(file.path(), &mut Vec::<Report>::new())?;

    assert_eq!(std::fs::metadata(file.path())?.len(), 0);
    Ok(())
}
