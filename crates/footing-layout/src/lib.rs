//! Post placement for column footings.
//!
//! Every calculator here is a pure function of its inputs: no scene, no
//! engine, and bit-identical output for identical input. Invalid inputs
//! are reported as [`FootingError::InvalidParameter`].
//!
//! - [`compute_circular_layout`]: posts evenly spaced on a circle
//! - [`compute_rectangular_layout`]: a row-major grid of posts
//! - [`compute_perimeter_layout`]: the boundary ring of such a grid

mod circular;
mod perimeter;
mod rectangular;

pub use circular::compute_circular_layout;
pub use perimeter::compute_perimeter_layout;
pub use rectangular::{axis_positions, compute_rectangular_layout};

pub use footing_core::{FootingError, Point3, PostLayout, Result};
