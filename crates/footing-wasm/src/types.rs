//! JavaScript-friendly views of the host scene.

use serde::{Deserialize, Serialize};

use footing_render_3d::{PrimitiveRole, Scene3D};

/// One renderable object, ready for upload into a JS engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeshJs {
    pub id: u64,
    pub group: u64,
    pub name: String,
    pub role: PrimitiveRole,
    /// Flat `[x, y, z, ...]` in scene coordinates.
    pub positions: Vec<f32>,
    pub normals: Vec<f32>,
    pub indices: Vec<u32>,
    pub material: MaterialJs,
}

/// Surface parameters for a JS standard material.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialJs {
    pub id: u64,
    pub name: String,
    /// `#RRGGBB`
    pub color: String,
    pub metallic: f32,
    pub roughness: f32,
    pub opacity: f32,
}

/// Every object in `scene`, in insertion order.
pub fn mesh_records(scene: &Scene3D) -> Vec<MeshJs> {
    scene
        .objects()
        .map(|(id, obj)| {
            let material = scene.material(obj.material);
            MeshJs {
                id: id.0,
                group: obj.group.0,
                name: obj.name.clone(),
                role: obj.role,
                positions: obj.mesh.flat_positions(),
                normals: obj.mesh.flat_normals(),
                indices: obj.mesh.indices.clone(),
                material: MaterialJs {
                    id: obj.material.0,
                    name: material.map(|m| m.name.clone()).unwrap_or_default(),
                    color: material.map(|m| m.color.to_hex()).unwrap_or_else(|| "#FFFFFF".to_string()),
                    metallic: material.map_or(0.0, |m| m.metallic),
                    roughness: material.map_or(1.0, |m| m.roughness),
                    opacity: material.map_or(1.0, |m| m.opacity),
                },
            }
        })
        .collect()
}
