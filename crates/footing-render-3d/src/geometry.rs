//! 3D geometry types and operations.

use glam::{Mat4, Vec3};

/// A solid primitive with its placement.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    kind: ShapeKind,
    bounds: BoundingBox,
    transform: Mat4,
}

/// The kind of shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeKind {
    Box { width: f64, height: f64, depth: f64 },
    Cylinder { radius: f64, height: f64 },
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: Vec3,
    pub max: Vec3,
}

impl BoundingBox {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    pub fn from_points(points: impl Iterator<Item = Vec3>) -> Option<Self> {
        let mut min = Vec3::splat(f32::INFINITY);
        let mut max = Vec3::splat(f32::NEG_INFINITY);
        let mut has_points = false;

        for p in points {
            min = min.min(p);
            max = max.max(p);
            has_points = true;
        }

        if has_points {
            Some(Self { min, max })
        } else {
            None
        }
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Merge with another bounding box.
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }
}

impl Shape {
    /// Create a box shape centered at origin.
    pub fn box_shape(width: f64, height: f64, depth: f64) -> Self {
        let half = Vec3::new(width as f32 / 2.0, height as f32 / 2.0, depth as f32 / 2.0);
        Self {
            kind: ShapeKind::Box { width, height, depth },
            bounds: BoundingBox::new(-half, half),
            transform: Mat4::IDENTITY,
        }
    }

    /// Create a cylinder shape centered at origin, extending along Y axis.
    pub fn cylinder(radius: f64, height: f64) -> Self {
        let r = radius as f32;
        let h = height as f32 / 2.0;
        Self {
            kind: ShapeKind::Cylinder { radius, height },
            bounds: BoundingBox::new(
                Vec3::new(-r, -h, -r),
                Vec3::new(r, h, r),
            ),
            transform: Mat4::IDENTITY,
        }
    }

    /// Get the shape kind.
    pub fn kind(&self) -> &ShapeKind {
        &self.kind
    }

    /// Get the bounding box.
    pub fn bounding_box(&self) -> BoundingBox {
        self.bounds
    }

    /// Get the transform matrix.
    pub fn transform(&self) -> Mat4 {
        self.transform
    }

    /// Where the shape's local origin ends up.
    pub fn position(&self) -> Vec3 {
        self.transform.w_axis.truncate()
    }

    /// Apply a translation.
    pub fn translate(mut self, offset: Vec3) -> Self {
        self.transform = Mat4::from_translation(offset) * self.transform;
        self.bounds = BoundingBox::new(self.bounds.min + offset, self.bounds.max + offset);
        self
    }

    /// Translate by a double-precision offset.
    pub fn translate_f64(self, x: f64, y: f64, z: f64) -> Self {
        self.translate(Vec3::new(x as f32, y as f32, z as f32))
    }
}

/// A triangle mesh for rendering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Compute the bounding box of the mesh.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        BoundingBox::from_points(self.vertices.iter().copied())
    }

    /// Transform all vertices by a matrix.
    pub fn transform(&mut self, matrix: Mat4) {
        let normal_matrix = matrix.inverse().transpose();

        for v in &mut self.vertices {
            *v = matrix.transform_point3(*v);
        }

        for n in &mut self.normals {
            *n = normal_matrix.transform_vector3(*n).normalize();
        }
    }

    /// Flatten positions to `[x0, y0, z0, x1, ...]` for upload.
    pub fn flat_positions(&self) -> Vec<f32> {
        self.vertices.iter().flat_map(|v| v.to_array()).collect()
    }

    pub fn flat_normals(&self) -> Vec<f32> {
        self.normals.iter().flat_map(|n| n.to_array()).collect()
    }
}
