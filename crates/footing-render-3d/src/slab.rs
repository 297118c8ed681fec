//! The base slab shared by every shape family.
//!
//! A finite slab is the footprint grown by the four margins. An infinite
//! slab keeps the same center and thickness and widens each horizontal
//! extent to at least [`INFINITE_SLAB_EXTENT`], so nothing placed relative
//! to the footprint moves when the flag flips and the infinite slab always
//! covers the finite one.

use footing_core::SlabMargins;

use crate::geometry::Shape;

/// Minimum horizontal extent of an effectively unbounded foundation.
pub const INFINITE_SLAB_EXTENT: f64 = 1000.0;

/// Plan-view rectangle covered by the structure standing on the slab.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Footprint {
    pub min_x: f64,
    pub max_x: f64,
    pub min_z: f64,
    pub max_z: f64,
}

impl Footprint {
    /// A `width` by `depth` rectangle centered on the origin.
    pub fn centered(width: f64, depth: f64) -> Self {
        Self::around(0.0, 0.0, width, depth)
    }

    /// A `width` by `depth` rectangle centered on `(x, z)`.
    pub fn around(x: f64, z: f64, width: f64, depth: f64) -> Self {
        Self {
            min_x: x - width / 2.0,
            max_x: x + width / 2.0,
            min_z: z - depth / 2.0,
            max_z: z + depth / 2.0,
        }
    }

    pub fn union(&self, other: &Footprint) -> Footprint {
        Footprint {
            min_x: self.min_x.min(other.min_x),
            max_x: self.max_x.max(other.max_x),
            min_z: self.min_z.min(other.min_z),
            max_z: self.max_z.max(other.max_z),
        }
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn depth(&self) -> f64 {
        self.max_z - self.min_z
    }

    /// The footprint grown by the margins on each side.
    pub fn expanded(&self, margins: &SlabMargins) -> Footprint {
        Footprint {
            min_x: self.min_x - margins.left,
            max_x: self.max_x + margins.right,
            min_z: self.min_z - margins.back,
            max_z: self.max_z + margins.front,
        }
    }

    pub fn center(&self) -> (f64, f64) {
        ((self.min_x + self.max_x) / 2.0, (self.min_z + self.max_z) / 2.0)
    }
}

/// Slab occupying `y ∈ [0, thickness]` under `footprint`.
pub fn slab_shape(footprint: &Footprint, margins: &SlabMargins, thickness: f64, finite: bool) -> Shape {
    let outline = footprint.expanded(margins);
    let (cx, cz) = outline.center();
    let (width, depth) = if finite {
        (outline.width(), outline.depth())
    } else {
        (
            INFINITE_SLAB_EXTENT.max(outline.width()),
            INFINITE_SLAB_EXTENT.max(outline.depth()),
        )
    };

    Shape::box_shape(width, thickness, depth).translate_f64(cx, thickness / 2.0, cz)
}
