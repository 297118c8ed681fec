//! Material definitions for footing geometry.

use footing_core::Color;

/// A material describing surface appearance.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Display name, e.g. for a material library in the host engine.
    pub name: String,
    /// Base color of the material.
    pub color: Color,
    /// Metallic factor (0.0 = dielectric, 1.0 = metal).
    pub metallic: f32,
    /// Roughness factor (0.0 = smooth/glossy, 1.0 = rough/matte).
    pub roughness: f32,
    /// 1.0 is fully opaque.
    pub opacity: f32,
}

impl Material {
    /// Grey, matte concrete for slabs and cuboid bodies.
    pub fn concrete() -> Self {
        Self {
            name: "concrete".to_string(),
            color: Color::from_rgb8(0x80, 0x80, 0x80),
            metallic: 0.0,
            roughness: 0.9,
            opacity: 1.0,
        }
    }

    /// Steel for posts and anchors.
    pub fn steel() -> Self {
        Self {
            name: "steel".to_string(),
            color: Color::from_rgb8(0x4a, 0x4f, 0x55),
            metallic: 1.0,
            roughness: 0.35,
            opacity: 1.0,
        }
    }
}
