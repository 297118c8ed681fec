//! Circular post arrangement.

use std::f64::consts::TAU;

use footing_core::{validate, FootingError, Point3, PostLayout, Result};

/// Place `count` posts evenly on a circle of radius `radius - edge_offset`
/// in the horizontal plane at height `elevation`.
///
/// The first post sits at angle 0 (on +x); angles grow toward +z in steps
/// of `2π / count`.
pub fn compute_circular_layout(
    radius: f64,
    edge_offset: f64,
    count: u32,
    elevation: f64,
) -> Result<PostLayout> {
    validate::positive("radius", radius)?;
    validate::non_negative("edgeOffset", edge_offset)?;
    validate::count("count", count)?;
    validate::finite("elevation", elevation)?;

    let effective = radius - edge_offset;
    if effective <= 0.0 {
        return Err(FootingError::invalid(
            "edgeOffset",
            format!("effective radius {radius} - {edge_offset} must stay positive"),
        ));
    }

    let step = TAU / count as f64;
    let points = (0..count)
        .map(|i| {
            let angle = step * i as f64;
            Point3::new(effective * angle.cos(), elevation, effective * angle.sin())
        })
        .collect();

    Ok(PostLayout::new(points))
}
