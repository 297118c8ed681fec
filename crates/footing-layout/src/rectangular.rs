//! Rectangular grid arrangement.

use footing_core::{validate, FootingError, Point3, PostLayout, Result};

/// Positions of `count` posts along one axis of length `size`, inset by
/// `edge_offset` from both ends and centered on zero.
///
/// A single post sits at the center. Otherwise posts run from
/// `-(size/2 - edge_offset)` to `+(size/2 - edge_offset)` inclusive.
pub fn axis_positions(
    name: &str,
    count_name: &str,
    size: f64,
    count: u32,
    edge_offset: f64,
) -> Result<Vec<f64>> {
    validate::positive(name, size)?;
    validate::count(count_name, count)?;
    validate::non_negative("edgeOffset", edge_offset)?;

    if count == 1 {
        return Ok(vec![0.0]);
    }

    let half_span = size / 2.0 - edge_offset;
    if half_span <= 0.0 {
        return Err(FootingError::invalid(
            "edgeOffset",
            format!("inset {edge_offset} leaves no span along {name} of {size}"),
        ));
    }

    let last = (count - 1) as f64;
    Ok((0..count)
        .map(|i| -half_span + 2.0 * half_span * (i as f64 / last))
        .collect())
}

/// Place a `count_x` by `count_z` grid of posts over a `width` by `depth`
/// footprint centered on the origin, all at height `elevation`.
///
/// Order is row-major: z ascending in the outer loop, x ascending within
/// each row.
pub fn compute_rectangular_layout(
    width: f64,
    depth: f64,
    count_x: u32,
    count_z: u32,
    edge_offset: f64,
    elevation: f64,
) -> Result<PostLayout> {
    validate::finite("elevation", elevation)?;
    let xs = axis_positions("width", "countX", width, count_x, edge_offset)?;
    let zs = axis_positions("depth", "countZ", depth, count_z, edge_offset)?;

    let points = zs
        .iter()
        .flat_map(|&z| xs.iter().map(move |&x| Point3::new(x, elevation, z)))
        .collect();

    Ok(PostLayout::new(points))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f64 = 1e-9;

    fn distinct(values: impl Iterator<Item = f64>) -> Vec<f64> {
        let mut out: Vec<f64> = Vec::new();
        for v in values {
            if !out.iter().any(|o| (o - v).abs() < EPS) {
                out.push(v);
            }
        }
        out.sort_by(|a, b| a.total_cmp(b));
        out
    }

    #[test]
    fn test_reference_grid() {
        let layout = compute_rectangular_layout(3.0, 2.0, 3, 2, 0.1, 2.25).unwrap();

        assert_eq!(layout.len(), 6);
        let xs = distinct(layout.iter().map(|p| p.x));
        let zs = distinct(layout.iter().map(|p| p.z));
        assert_eq!(xs.len(), 3);
        assert!((xs[0] + 1.4).abs() < EPS);
        assert!(xs[1].abs() < EPS);
        assert!((xs[2] - 1.4).abs() < EPS);
        assert_eq!(zs.len(), 2);
        assert!((zs[0] + 0.9).abs() < EPS);
        assert!((zs[1] - 0.9).abs() < EPS);
        assert!(layout.iter().all(|p| p.y == 2.25));
    }

    #[test]
    fn test_row_major_order() {
        let layout = compute_rectangular_layout(2.0, 2.0, 2, 2, 0.0, 0.0).unwrap();
        let coords: Vec<(f64, f64)> = layout.iter().map(|p| (p.x, p.z)).collect();
        assert_eq!(coords, vec![(-1.0, -1.0), (1.0, -1.0), (-1.0, 1.0), (1.0, 1.0)]);
    }

    #[test]
    fn test_single_count_centers_axis() {
        let layout = compute_rectangular_layout(4.0, 4.0, 1, 3, 0.5, 1.0).unwrap();
        assert!(layout.iter().all(|p| p.x == 0.0));
    }

    #[test]
    fn test_single_count_ignores_span() {
        // inset swallows the width, but a lone post needs no span
        let layout = compute_rectangular_layout(0.2, 4.0, 1, 2, 0.5, 0.0).unwrap();
        assert_eq!(layout.len(), 2);
        assert!(layout.iter().all(|p| p.x == 0.0));
    }

    #[test]
    fn test_non_positive_span_rejected() {
        assert!(compute_rectangular_layout(1.0, 3.0, 2, 2, 0.5, 0.0).is_err());
        assert!(compute_rectangular_layout(1.0, 3.0, 2, 2, 0.6, 0.0).is_err());
    }

    #[test]
    fn test_zero_count_rejected() {
        assert!(compute_rectangular_layout(1.0, 1.0, 0, 2, 0.0, 0.0).is_err());
        assert!(compute_rectangular_layout(1.0, 1.0, 2, 0, 0.0, 0.0).is_err());
    }

    proptest! {
        #[test]
        fn prop_grid_count_and_extrema(
            width in 0.5f64..20.0,
            depth in 0.5f64..20.0,
            count_x in 1u32..12,
            count_z in 1u32..12,
            offset_frac in 0.0f64..0.45,
            elevation in -5.0f64..5.0,
        ) {
            let offset = width.min(depth) * offset_frac;
            let layout = compute_rectangular_layout(width, depth, count_x, count_z, offset, elevation).unwrap();

            prop_assert_eq!(layout.len(), (count_x * count_z) as usize);

            let (min_x, max_x) = layout.extent(|p| p.x).unwrap();
            let (min_z, max_z) = layout.extent(|p| p.z).unwrap();
            let hx = if count_x > 1 { width / 2.0 - offset } else { 0.0 };
            let hz = if count_z > 1 { depth / 2.0 - offset } else { 0.0 };
            prop_assert!((min_x + hx).abs() < EPS && (max_x - hx).abs() < EPS);
            prop_assert!((min_z + hz).abs() < EPS && (max_z - hz).abs() < EPS);
            prop_assert!(layout.iter().all(|p| p.y == elevation));
        }
    }
}
