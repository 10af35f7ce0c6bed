// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Per-mesh assignment records

use crate::error::{AssignError, Result};
use serde::{Deserialize, Serialize};

/// Intended materials and geometry-node groups for one mesh.
///
/// Both name lists always hold at least one entry. An empty string stands for
/// "nothing in this slot" and is what an otherwise empty list collapses to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RecordFields")]
pub struct AssignmentRecord {
    mesh_name: String,
    material_names: Vec<String>,
    geo_node_names: Vec<String>,
}

impl AssignmentRecord {
    /// Create a record, inserting placeholders for empty lists
    pub fn new(
        mesh_name: impl Into<String>,
        material_names: impl IntoIterator<Item = String>,
        geo_node_names: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            mesh_name: mesh_name.into(),
            material_names: with_placeholder(material_names),
            geo_node_names: with_placeholder(geo_node_names),
        }
    }

    pub fn mesh_name(&self) -> &str {
        &self.mesh_name
    }

    pub fn material_names(&self) -> &[String] {
        &self.material_names
    }

    pub fn geo_node_names(&self) -> &[String] {
        &self.geo_node_names
    }

    pub fn set_mesh_name(&mut self, name: impl Into<String>) {
        self.mesh_name = name.into();
    }

    /// Rename the material at `slot`
    pub fn set_material_name(&mut self, slot: usize, name: impl Into<String>) -> Result<()> {
        set_entry(&mut self.material_names, slot, name.into())
    }

    /// Rename the geometry-node group at `slot`
    pub fn set_geo_node_name(&mut self, slot: usize, name: impl Into<String>) -> Result<()> {
        set_entry(&mut self.geo_node_names, slot, name.into())
    }

    pub fn push_material(&mut self, name: impl Into<String>) {
        self.material_names.push(name.into());
    }

    pub fn push_geo_node(&mut self, name: impl Into<String>) {
        self.geo_node_names.push(name.into());
    }
}

#[derive(Deserialize)]
struct RecordFields {
    mesh_name: String,
    #[serde(default)]
    material_names: Vec<String>,
    #[serde(default)]
    geo_node_names: Vec<String>,
}

impl From<RecordFields> for AssignmentRecord {
    fn from(fields: RecordFields) -> Self {
        Self::new(fields.mesh_name, fields.material_names, fields.geo_node_names)
    }
}

fn with_placeholder(names: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut names: Vec<String> = names.into_iter().collect();
    if names.is_empty() {
        names.push(String::new());
    }
    names
}

fn set_entry(entries: &mut [String], slot: usize, name: String) -> Result<()> {
    let len = entries.len();
    let entry = entries
        .get_mut(slot)
        .ok_or(AssignError::OutOfRange { index: slot, len })?;
    *entry = name;
    Ok(())
}
