//! Scene geometry for column footings.
//!
//! This crate provides:
//! - Box and cylinder primitives, tessellated to triangle meshes
//! - Concrete and steel materials
//! - A host scene arena with a change journal for the render host
//! - The base slab shared by all footing families
//! - The create/update/dispose lifecycle of geometry groups
//! - The three shape families: circular columns, complex column, rectangle column

mod circular;
mod complex;
mod geometry;
mod group;
mod material;
mod rectangle;
mod scene;
mod slab;
mod tessellation;

pub use circular::CircularColumns;
pub use complex::{ComplexColumn, ComplexLayout};
pub use geometry::{BoundingBox, Mesh, Shape, ShapeKind};
pub use group::{GeometryGroup, GroupPlan, PrimitiveSnapshot, ShapeFamily};
pub use material::Material;
pub use rectangle::RectangleColumn;
pub use scene::{MaterialId, PrimitiveId, PrimitiveRole, Scene3D, SceneChange, SceneObject};
pub use slab::{slab_shape, Footprint, INFINITE_SLAB_EXTENT};
pub use tessellation::{tessellate, TessellationOptions};
