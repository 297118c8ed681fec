//! Core value types: coordinates, layouts, colors, and model identifiers.

use std::fmt;

/// A coordinate triple. y is up.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Distance from the vertical axis through the origin.
    pub fn horizontal_distance(&self) -> f64 {
        self.x.hypot(self.z)
    }

    /// Angle in the horizontal plane, measured from +x toward +z.
    pub fn azimuth(&self) -> f64 {
        self.z.atan2(self.x)
    }
}

/// Ordered post positions for one geometry instance.
///
/// Order carries no meaning beyond determinism.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PostLayout {
    points: Vec<Point3>,
}

impl PostLayout {
    pub fn new(points: Vec<Point3>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point3> {
        self.points.iter()
    }

    /// Minimum and maximum of a coordinate across all points.
    pub fn extent(&self, axis: impl Fn(&Point3) -> f64) -> Option<(f64, f64)> {
        self.points.iter().map(axis).fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
    }
}

impl From<Vec<Point3>> for PostLayout {
    fn from(points: Vec<Point3>) -> Self {
        Self::new(points)
    }
}

impl<'a> IntoIterator for &'a PostLayout {
    type Item = &'a Point3;
    type IntoIter = std::slice::Iter<'a, Point3>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// RGBA color with components in 0.0..=1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Create from 8-bit RGB values.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Convert to hex string (e.g., "#FF5733").
    pub fn to_hex(&self) -> String {
        let to8 = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{:02X}{:02X}{:02X}", to8(self.r), to8(self.g), to8(self.b))
    }
}

/// The three shape families a viewer can show. Exactly one is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum ModelKind {
    #[default]
    CircularColumns,
    ComplexColumn,
    RectangleColumn,
}

impl ModelKind {
    pub const ALL: [ModelKind; 3] = [
        ModelKind::CircularColumns,
        ModelKind::ComplexColumn,
        ModelKind::RectangleColumn,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModelKind::CircularColumns => "circularColumns",
            ModelKind::ComplexColumn => "complexColumn",
            ModelKind::RectangleColumn => "rectangleColumn",
        }
    }

    /// Parse the selector name used by the UI layer.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier of a geometry group, unique within one host scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupId(pub u64);

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
