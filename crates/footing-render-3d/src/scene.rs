//! The host scene: an arena of renderable objects and materials.
//!
//! Geometry groups insert, reshape and remove objects here; the render host
//! reads the objects and drains the change journal between frames to keep
//! its engine in sync.

use indexmap::IndexMap;

use footing_core::GroupId;

use crate::geometry::{BoundingBox, Mesh, Shape};
use crate::material::Material;
use crate::tessellation::{tessellate, TessellationOptions};

/// Handle of one renderable object in a [`Scene3D`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrimitiveId(pub u64);

/// Handle of one material in a [`Scene3D`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MaterialId(pub u64);

/// What part of a footing an object represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum PrimitiveRole {
    Slab,
    Body,
    Post,
}

/// One mutation of the scene, in the order it happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "camelCase"))]
pub enum SceneChange {
    Added { id: PrimitiveId },
    Updated { id: PrimitiveId },
    Removed { id: PrimitiveId },
    MaterialAdded { id: MaterialId },
    MaterialRemoved { id: MaterialId },
}

/// An object in the scene.
#[derive(Debug, Clone)]
pub struct SceneObject {
    pub name: String,
    pub role: PrimitiveRole,
    /// Group that owns this object.
    pub group: GroupId,
    pub shape: Shape,
    /// Tessellated mesh in scene coordinates.
    pub mesh: Mesh,
    pub material: MaterialId,
}

/// Objects, materials and the change journal of one render surface.
#[derive(Debug, Clone, Default)]
pub struct Scene3D {
    objects: IndexMap<PrimitiveId, SceneObject>,
    materials: IndexMap<MaterialId, Material>,
    changes: Vec<SceneChange>,
    options: TessellationOptions,
    next_primitive: u64,
    next_material: u64,
    next_group: u64,
}

impl Scene3D {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: TessellationOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub(crate) fn allocate_group_id(&mut self) -> GroupId {
        self.next_group += 1;
        GroupId(self.next_group)
    }

    pub fn add_material(&mut self, material: Material) -> MaterialId {
        self.next_material += 1;
        let id = MaterialId(self.next_material);
        self.materials.insert(id, material);
        self.changes.push(SceneChange::MaterialAdded { id });
        id
    }

    pub fn remove_material(&mut self, id: MaterialId) -> Option<Material> {
        let removed = self.materials.shift_remove(&id);
        if removed.is_some() {
            self.changes.push(SceneChange::MaterialRemoved { id });
        }
        removed
    }

    pub fn material(&self, id: MaterialId) -> Option<&Material> {
        self.materials.get(&id)
    }

    /// Tessellate `shape` and add it to the scene.
    pub fn insert(
        &mut self,
        group: GroupId,
        role: PrimitiveRole,
        name: impl Into<String>,
        shape: Shape,
        material: MaterialId,
    ) -> PrimitiveId {
        self.next_primitive += 1;
        let id = PrimitiveId(self.next_primitive);
        let mesh = tessellate(&shape, &self.options);
        self.objects.insert(
            id,
            SceneObject {
                name: name.into(),
                role,
                group,
                shape,
                mesh,
                material,
            },
        );
        self.changes.push(SceneChange::Added { id });
        id
    }

    /// Replace the shape of an existing object, keeping its identity.
    ///
    /// Returns false if the object does not exist. An identical shape is
    /// left untouched and not journaled.
    pub fn reshape(&mut self, id: PrimitiveId, shape: Shape) -> bool {
        let Some(object) = self.objects.get_mut(&id) else {
            return false;
        };
        if object.shape != shape {
            object.mesh = tessellate(&shape, &self.options);
            object.shape = shape;
            self.changes.push(SceneChange::Updated { id });
        }
        true
    }

    pub fn remove(&mut self, id: PrimitiveId) -> Option<SceneObject> {
        let removed = self.objects.shift_remove(&id);
        if removed.is_some() {
            self.changes.push(SceneChange::Removed { id });
        }
        removed
    }

    pub fn object(&self, id: PrimitiveId) -> Option<&SceneObject> {
        self.objects.get(&id)
    }

    pub fn contains(&self, id: PrimitiveId) -> bool {
        self.objects.contains_key(&id)
    }

    /// Objects in insertion order.
    pub fn objects(&self) -> impl Iterator<Item = (PrimitiveId, &SceneObject)> {
        self.objects.iter().map(|(id, obj)| (*id, obj))
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    pub fn material_count(&self) -> usize {
        self.materials.len()
    }

    /// Objects owned by one group.
    pub fn objects_in_group(&self, group: GroupId) -> impl Iterator<Item = (PrimitiveId, &SceneObject)> {
        self.objects().filter(move |(_, obj)| obj.group == group)
    }

    /// Get the combined bounding box of all objects.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        self.objects
            .values()
            .filter_map(|obj| obj.mesh.bounding_box())
            .reduce(|a, b| a.union(&b))
    }

    /// Take every change recorded since the last drain.
    pub fn drain_changes(&mut self) -> Vec<SceneChange> {
        std::mem::take(&mut self.changes)
    }
}
