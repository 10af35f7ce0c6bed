// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Scene collaborators: the traits a host application implements, plus an
//! in-memory scene for tools and tests.

mod memory;
mod object;

pub use memory::MemoryScene;
pub use object::{ModifierKind, ModifierSnapshot, ObjectKind, SceneObject};

/// An object whose material slots can be rewritten
pub trait MeshObject<M> {
    /// Whether the object carries mesh data
    fn is_mesh(&self) -> bool;

    /// Number of material slots currently on the mesh
    fn material_slot_count(&self) -> usize;

    /// Overwrite an existing slot. `slot` is below `material_slot_count()`.
    fn set_material(&mut self, slot: usize, material: M);

    /// Add a new slot at the end holding `material`
    fn append_material(&mut self, material: M);
}

/// Name-based access to live scene data
pub trait SceneLookup {
    type Material;
    type Object: MeshObject<Self::Material>;

    fn object_by_name(&mut self, name: &str) -> Option<&mut Self::Object>;

    fn material_by_name(&self, name: &str) -> Option<Self::Material>;
}

/// A host scene with a current selection
pub trait SceneHost: SceneLookup {
    /// Currently selected objects, in selection order
    fn selected_objects(&self) -> Vec<SceneObject>;
}
