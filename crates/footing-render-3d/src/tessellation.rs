//! Tessellation of 3D shapes to triangle meshes.

use super::geometry::{Mesh, Shape, ShapeKind};
use glam::Vec3;
use std::f32::consts::TAU;

/// Tessellation quality settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TessellationOptions {
    /// Number of segments around curved surfaces.
    pub curve_segments: u32,
}

impl Default for TessellationOptions {
    fn default() -> Self {
        Self { curve_segments: 32 }
    }
}

impl TessellationOptions {
    pub fn with_segments(curve_segments: u32) -> Self {
        Self {
            curve_segments: curve_segments.clamp(8, 128),
        }
    }
}

/// Tessellate a shape and move the result to the shape's placement.
pub fn tessellate(shape: &Shape, options: &TessellationOptions) -> Mesh {
    let mut mesh = match shape.kind() {
        ShapeKind::Box { width, height, depth } => {
            tessellate_box(*width as f32, *height as f32, *depth as f32)
        }
        ShapeKind::Cylinder { radius, height } => {
            tessellate_cylinder(*radius as f32, *height as f32, options.curve_segments)
        }
    };
    mesh.transform(shape.transform());
    mesh
}

/// Tessellate a box centered at origin.
fn tessellate_box(width: f32, height: f32, depth: f32) -> Mesh {
    let hw = width / 2.0;
    let hh = height / 2.0;
    let hd = depth / 2.0;

    let corners = [
        Vec3::new(-hw, -hh, -hd), // 0: left-bottom-back
        Vec3::new( hw, -hh, -hd), // 1: right-bottom-back
        Vec3::new( hw,  hh, -hd), // 2: right-top-back
        Vec3::new(-hw,  hh, -hd), // 3: left-top-back
        Vec3::new(-hw, -hh,  hd), // 4: left-bottom-front
        Vec3::new( hw, -hh,  hd), // 5: right-bottom-front
        Vec3::new( hw,  hh,  hd), // 6: right-top-front
        Vec3::new(-hw,  hh,  hd), // 7: left-top-front
    ];

    // Each face: corners wound counter-clockwise seen from outside
    let faces = [
        ([1, 0, 3, 2], Vec3::NEG_Z),
        ([4, 5, 6, 7], Vec3::Z),
        ([0, 4, 7, 3], Vec3::NEG_X),
        ([5, 1, 2, 6], Vec3::X),
        ([0, 1, 5, 4], Vec3::NEG_Y),
        ([7, 6, 2, 3], Vec3::Y),
    ];

    let mut vertices = Vec::with_capacity(24);
    let mut normals = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);

    for (corner_indices, normal) in &faces {
        let base = vertices.len() as u32;

        for &ci in corner_indices {
            vertices.push(corners[ci]);
            normals.push(*normal);
        }

        indices.extend_from_slice(&[
            base, base + 1, base + 2,
            base, base + 2, base + 3,
        ]);
    }

    Mesh { vertices, normals, indices }
}

/// Tessellate a cylinder centered at origin, extending along Y axis.
fn tessellate_cylinder(radius: f32, height: f32, segments: u32) -> Mesh {
    let half_height = height / 2.0;
    let segments = segments.max(8);

    let mut vertices = Vec::new();
    let mut normals = Vec::new();
    let mut indices = Vec::new();

    let ring = |i: u32| {
        let angle = (i as f32 / segments as f32) * TAU;
        (angle.cos(), angle.sin())
    };

    // Side
    for i in 0..=segments {
        let (c, s) = ring(i);
        let normal = Vec3::new(c, 0.0, s);
        vertices.push(Vec3::new(c * radius, -half_height, s * radius));
        normals.push(normal);
        vertices.push(Vec3::new(c * radius, half_height, s * radius));
        normals.push(normal);
    }

    for i in 0..segments {
        let base = i * 2;
        indices.extend_from_slice(&[
            base, base + 1, base + 2,
            base + 1, base + 3, base + 2,
        ]);
    }

    // Caps
    for (y, normal) in [(half_height, Vec3::Y), (-half_height, Vec3::NEG_Y)] {
        let center = vertices.len() as u32;
        vertices.push(Vec3::new(0.0, y, 0.0));
        normals.push(normal);

        for i in 0..=segments {
            let (c, s) = ring(i);
            vertices.push(Vec3::new(c * radius, y, s * radius));
            normals.push(normal);
        }

        for i in 0..segments {
            let rim = center + 1 + i;
            if normal.y > 0.0 {
                indices.extend_from_slice(&[center, rim + 1, rim]);
            } else {
                indices.extend_from_slice(&[center, rim, rim + 1]);
            }
        }
    }

    Mesh { vertices, normals, indices }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tessellate_box() {
        let mesh = tessellate_box(2.0, 3.0, 4.0);

        // 6 faces * 4 vertices, 6 faces * 2 triangles
        assert_eq!(mesh.vertices.len(), 24);
        assert_eq!(mesh.normals.len(), 24);
        assert_eq!(mesh.triangle_count(), 12);
    }

    #[test]
    fn test_box_winding_faces_outward() {
        let mesh = tessellate_box(1.0, 1.0, 1.0);
        for tri in mesh.indices.chunks_exact(3) {
            let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| mesh.vertices[i as usize]);
            let face_normal = (b - a).cross(c - a).normalize();
            assert!((face_normal - mesh.normals[tri[0] as usize]).length() < 1e-5);
        }
    }

    #[test]
    fn test_tessellate_cylinder() {
        let mesh = tessellate_cylinder(1.0, 2.0, 16);

        // 16 quads on the side plus 16 triangles per cap
        assert_eq!(mesh.triangle_count(), 64);
        assert_eq!(mesh.vertices.len(), mesh.normals.len());
        for v in &mesh.vertices {
            assert!(v.y.abs() <= 1.0 + 1e-6);
        }
    }

    #[test]
    fn test_tessellate_applies_placement() {
        let shape = Shape::box_shape(2.0, 2.0, 2.0).translate(Vec3::new(0.0, 5.0, 0.0));
        let mesh = tessellate(&shape, &TessellationOptions::default());
        let bounds = mesh.bounding_box().unwrap();

        assert!((bounds.center().y - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_segment_clamp() {
        assert_eq!(TessellationOptions::with_segments(2).curve_segments, 8);
        assert_eq!(TessellationOptions::with_segments(4096).curve_segments, 128);
    }
}
