// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! JSON-backed in-memory scene

use super::{SceneHost, SceneLookup, SceneObject};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A scene held entirely in memory.
///
/// Stored on disk as JSON:
///
/// ```json
/// {
///   "objects": [{ "name": "Cube", "kind": "mesh", "material_slots": ["Red", null] }],
///   "materials": ["Red", "Blue"],
///   "selection": ["Cube"]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryScene {
    #[serde(default)]
    pub objects: Vec<SceneObject>,
    /// Names of materials available in the scene
    #[serde(default)]
    pub materials: Vec<String>,
    /// Selected object names, in selection order
    #[serde(default)]
    pub selection: Vec<String>,
}

impl MemoryScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a scene from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read scene file: {:?}", path.as_ref()))?;
        Self::from_json(&content)
            .with_context(|| format!("Failed to parse scene file: {:?}", path.as_ref()))
    }

    pub fn from_json(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    /// Save the scene to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = serde_json::to_string_pretty(self).context("Failed to serialize scene")?;
        std::fs::write(path.as_ref(), content)
            .with_context(|| format!("Failed to write scene file: {:?}", path.as_ref()))?;
        Ok(())
    }

    pub fn add_object(&mut self, object: SceneObject) -> &mut Self {
        self.objects.push(object);
        self
    }

    pub fn add_material(&mut self, name: impl Into<String>) -> &mut Self {
        self.materials.push(name.into());
        self
    }

    /// Append an object name to the selection
    pub fn select(&mut self, name: impl Into<String>) -> &mut Self {
        self.selection.push(name.into());
        self
    }

    pub fn object(&self, name: &str) -> Option<&SceneObject> {
        self.objects.iter().find(|object| object.name == name)
    }
}

impl SceneLookup for MemoryScene {
    type Material = String;
    type Object = SceneObject;

    fn object_by_name(&mut self, name: &str) -> Option<&mut SceneObject> {
        self.objects.iter_mut().find(|object| object.name == name)
    }

    fn material_by_name(&self, name: &str) -> Option<String> {
        self.materials.iter().find(|material| *material == name).cloned()
    }
}

impl SceneHost for MemoryScene {
    fn selected_objects(&self) -> Vec<SceneObject> {
        self.selection
            .iter()
            .filter_map(|name| {
                let object = self.object(name);
                if object.is_none() {
                    log::debug!("Selected object '{}' is not in the scene", name);
                }
                object.cloned()
            })
            .collect()
    }
}
