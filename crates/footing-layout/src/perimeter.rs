//! Posts along the edges of a rectangular footprint.

use footing_core::{validate, Point3, PostLayout, Result};

use crate::rectangular::axis_positions;

/// Place posts around the perimeter of a `width` by `depth` rectangle
/// centered at `center` (x, z).
///
/// `count_top` posts run along each x-edge and `count_left` along each
/// z-edge, all inset by `edge_offset`. Corner posts are shared by the two
/// edges that meet there. Order follows the rectangular grid (z outer, x
/// inner) restricted to the boundary.
pub fn compute_perimeter_layout(
    width: f64,
    depth: f64,
    count_top: u32,
    count_left: u32,
    edge_offset: f64,
    elevation: f64,
    center: (f64, f64),
) -> Result<PostLayout> {
    validate::finite("elevation", elevation)?;
    validate::finite("centerX", center.0)?;
    validate::finite("centerZ", center.1)?;
    let xs = axis_positions("width", "postsTop", width, count_top, edge_offset)?;
    let zs = axis_positions("depth", "postsLeft", depth, count_left, edge_offset)?;

    let last_x = xs.len() - 1;
    let last_z = zs.len() - 1;
    let mut points = Vec::with_capacity(2 * (xs.len() + zs.len()));

    for (iz, &z) in zs.iter().enumerate() {
        let on_x_edge = iz == 0 || iz == last_z;
        for (ix, &x) in xs.iter().enumerate() {
            if on_x_edge || ix == 0 || ix == last_x {
                points.push(Point3::new(x + center.0, elevation, z + center.1));
            }
        }
    }

    Ok(PostLayout::new(points))
}
