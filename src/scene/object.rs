// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Scene object data

use super::MeshObject;
use serde::{Deserialize, Serialize};

/// Object type as the host reports it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    #[default]
    Mesh,
    Curve,
    Light,
    Camera,
    Empty,
    Other,
}

/// Modifier type as the host reports it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModifierKind {
    /// Geometry nodes
    #[default]
    Nodes,
    Other,
}

/// A modifier on an object's stack
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifierSnapshot {
    pub name: String,
    #[serde(default)]
    pub kind: ModifierKind,
    /// Node group driving a geometry-nodes modifier, if one is assigned
    #[serde(default)]
    pub node_group: Option<String>,
}

impl ModifierSnapshot {
    pub fn geometry_nodes(name: impl Into<String>, node_group: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ModifierKind::Nodes,
            node_group: Some(node_group.into()),
        }
    }

    pub fn other(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ModifierKind::Other,
            node_group: None,
        }
    }
}

/// A scene object with its material slots and modifier stack
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneObject {
    pub name: String,
    #[serde(default)]
    pub kind: ObjectKind,
    /// Material name per slot; `None` for an empty slot
    #[serde(default)]
    pub material_slots: Vec<Option<String>>,
    #[serde(default)]
    pub modifiers: Vec<ModifierSnapshot>,
}

impl SceneObject {
    /// Create a mesh object with no slots or modifiers
    pub fn mesh(name: impl Into<String>) -> Self {
        Self::with_kind(name, ObjectKind::Mesh)
    }

    pub fn with_kind(name: impl Into<String>, kind: ObjectKind) -> Self {
        Self {
            name: name.into(),
            kind,
            material_slots: Vec::new(),
            modifiers: Vec::new(),
        }
    }

    /// Add a slot holding `material`
    pub fn with_material(mut self, material: impl Into<String>) -> Self {
        self.material_slots.push(Some(material.into()));
        self
    }

    /// Add an unset slot
    pub fn with_empty_slot(mut self) -> Self {
        self.material_slots.push(None);
        self
    }

    pub fn with_modifier(mut self, modifier: ModifierSnapshot) -> Self {
        self.modifiers.push(modifier);
        self
    }

    /// Slot material names in slot order, with unset slots as empty strings
    pub fn material_slot_names(&self) -> Vec<String> {
        self.material_slots
            .iter()
            .map(|slot| slot.clone().unwrap_or_default())
            .collect()
    }

    /// Node groups of geometry-nodes modifiers that have one assigned, in stack order
    pub fn geo_node_group_names(&self) -> Vec<String> {
        self.modifiers
            .iter()
            .filter(|modifier| modifier.kind == ModifierKind::Nodes)
            .filter_map(|modifier| modifier.node_group.clone())
            .collect()
    }
}

impl MeshObject<String> for SceneObject {
    fn is_mesh(&self) -> bool {
        self.kind == ObjectKind::Mesh
    }

    fn material_slot_count(&self) -> usize {
        self.material_slots.len()
    }

    fn set_material(&mut self, slot: usize, material: String) {
        self.material_slots[slot] = Some(material);
    }

    fn append_material(&mut self, material: String) {
        self.material_slots.push(Some(material));
    }
}
