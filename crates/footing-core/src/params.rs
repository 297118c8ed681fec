//! Parameter records for the three shape families.
//!
//! Records are flat and externally supplied. `validate` checks each field
//! against its domain; span checks that depend on several fields at once
//! (inset spans, effective radius) happen in the layout calculators.

use crate::errors::Result;
use crate::validate;

/// Vertical gap between the slab top and the center of a rectangle-column post.
pub const POST_VERTICAL_CLEARANCE: f64 = 0.75;

/// Slab overhang beyond the footprint on each of the four sides.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct SlabMargins {
    /// Overhang toward -x.
    pub left: f64,
    /// Overhang toward +x.
    pub right: f64,
    /// Overhang toward +z.
    pub front: f64,
    /// Overhang toward -z.
    pub back: f64,
}

impl Default for SlabMargins {
    fn default() -> Self {
        Self::uniform(0.5)
    }
}

impl SlabMargins {
    pub const fn uniform(margin: f64) -> Self {
        Self {
            left: margin,
            right: margin,
            front: margin,
            back: margin,
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate::non_negative("marginLeft", self.left)?;
        validate::non_negative("marginRight", self.right)?;
        validate::non_negative("marginFront", self.front)?;
        validate::non_negative("marginBack", self.back)?;
        Ok(())
    }
}

/// A ring of cylindrical columns standing on a slab.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct CircularColumnParams {
    /// Nominal radius of the column ring.
    pub radius: f64,
    /// Inset subtracted from `radius` before placement.
    pub post_offset: f64,
    pub post_count: u32,
    /// Radius of each column. Does not affect placement.
    pub post_radius: f64,
    pub column_height: f64,
    pub concrete_thickness: f64,
    pub margins: SlabMargins,
    pub is_finite_concrete: bool,
}

impl Default for CircularColumnParams {
    fn default() -> Self {
        Self {
            radius: 1.5,
            post_offset: 0.06,
            post_count: 10,
            post_radius: 0.05,
            column_height: 1.5,
            concrete_thickness: 1.0,
            margins: SlabMargins::default(),
            is_finite_concrete: true,
        }
    }
}

impl CircularColumnParams {
    pub fn validate(&self) -> Result<()> {
        validate::positive("radius", self.radius)?;
        validate::non_negative("postOffset", self.post_offset)?;
        validate::count("postCount", self.post_count)?;
        validate::positive("postRadius", self.post_radius)?;
        validate::positive("columnHeight", self.column_height)?;
        validate::positive("concreteThickness", self.concrete_thickness)?;
        self.margins.validate()
    }

    /// Columns stand on the slab; the layout places their centers.
    pub fn post_elevation(&self) -> f64 {
        self.concrete_thickness + self.column_height / 2.0
    }
}

/// One rectangular block of a complex column footing.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct Cuboid {
    /// Extent along x.
    pub width: f64,
    /// Extent along z.
    pub depth: f64,
    pub height: f64,
    /// Posts along each z-running (left/right) edge.
    pub posts_left: u32,
    /// Posts along each x-running (top/bottom) edge.
    pub posts_top: u32,
}

impl Default for Cuboid {
    fn default() -> Self {
        Self {
            width: 2.0,
            depth: 1.5,
            height: 1.0,
            posts_left: 3,
            posts_top: 4,
        }
    }
}

impl Cuboid {
    pub fn validate(&self, prefix: &str) -> Result<()> {
        validate::positive(&format!("{prefix}.width"), self.width)?;
        validate::positive(&format!("{prefix}.depth"), self.depth)?;
        validate::positive(&format!("{prefix}.height"), self.height)?;
        validate::count(&format!("{prefix}.postsLeft"), self.posts_left)?;
        validate::count(&format!("{prefix}.postsTop"), self.posts_top)?;
        Ok(())
    }
}

/// Two overlapping cuboids on a slab, each with posts along its perimeter.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct ComplexColumnParams {
    pub concrete_thickness: f64,
    pub margins: SlabMargins,
    pub is_finite_concrete: bool,
    /// Centered on the origin.
    pub cuboid1: Cuboid,
    pub cuboid2: Cuboid,
    /// Translation of `cuboid2` relative to `cuboid1` along x.
    pub cuboid2_offset_x: f64,
    /// Translation of `cuboid2` relative to `cuboid1` along z.
    pub cuboid2_offset_z: f64,
    pub post_radius: f64,
    /// Inset of the posts from each cuboid edge.
    pub post_offset: f64,
    pub post_height: f64,
}

impl Default for ComplexColumnParams {
    fn default() -> Self {
        Self {
            concrete_thickness: 1.0,
            margins: SlabMargins::default(),
            is_finite_concrete: true,
            cuboid1: Cuboid::default(),
            cuboid2: Cuboid {
                width: 1.2,
                depth: 2.4,
                height: 1.0,
                posts_left: 4,
                posts_top: 2,
            },
            cuboid2_offset_x: 0.8,
            cuboid2_offset_z: 0.6,
            post_radius: 0.04,
            post_offset: 0.1,
            post_height: 0.6,
        }
    }
}

impl ComplexColumnParams {
    pub fn validate(&self) -> Result<()> {
        validate::positive("concreteThickness", self.concrete_thickness)?;
        self.margins.validate()?;
        self.cuboid1.validate("cuboid1")?;
        self.cuboid2.validate("cuboid2")?;
        validate::finite("cuboid2OffsetX", self.cuboid2_offset_x)?;
        validate::finite("cuboid2OffsetZ", self.cuboid2_offset_z)?;
        validate::positive("postRadius", self.post_radius)?;
        validate::non_negative("postOffset", self.post_offset)?;
        validate::positive("postHeight", self.post_height)?;
        Ok(())
    }

    /// Posts stand on the top face of the cuboid they belong to.
    pub fn post_elevation(&self, cuboid: &Cuboid) -> f64 {
        self.concrete_thickness + cuboid.height + self.post_height / 2.0
    }
}

/// A rectangular grid of posts above a slab.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct RectangleColumnParams {
    /// Footprint extent along x.
    pub width: f64,
    /// Footprint extent along z.
    pub depth: f64,
    pub posts_x: u32,
    pub posts_z: u32,
    /// Inset of the outermost posts from each footprint edge.
    pub post_offset: f64,
    pub post_diameter: f64,
    pub post_height: f64,
    pub concrete_thickness: f64,
    pub margins: SlabMargins,
    pub is_finite_concrete: bool,
}

impl Default for RectangleColumnParams {
    fn default() -> Self {
        Self {
            width: 3.0,
            depth: 2.0,
            posts_x: 3,
            posts_z: 2,
            post_offset: 0.1,
            post_diameter: 0.1,
            post_height: 1.5,
            concrete_thickness: 1.5,
            margins: SlabMargins::default(),
            is_finite_concrete: true,
        }
    }
}

impl RectangleColumnParams {
    pub fn validate(&self) -> Result<()> {
        validate::positive("width", self.width)?;
        validate::positive("depth", self.depth)?;
        validate::count("postsX", self.posts_x)?;
        validate::count("postsZ", self.posts_z)?;
        validate::non_negative("postOffset", self.post_offset)?;
        validate::positive("postDiameter", self.post_diameter)?;
        validate::positive("postHeight", self.post_height)?;
        validate::positive("concreteThickness", self.concrete_thickness)?;
        self.margins.validate()
    }

    pub fn post_elevation(&self) -> f64 {
        self.concrete_thickness + POST_VERTICAL_CLEARANCE
    }
}
