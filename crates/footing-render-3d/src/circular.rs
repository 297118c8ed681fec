//! Cylindrical columns on a ring.

use footing_core::{CircularColumnParams, ModelKind, PostLayout, Result};
use footing_layout::compute_circular_layout;

use crate::geometry::Shape;
use crate::group::{check_post_count, GroupPlan, ShapeFamily};
use crate::slab::{slab_shape, Footprint};

/// A ring of vertical cylindrical columns on a slab.
///
/// The slab footprint is the square around the nominal ring. The layout
/// already carries the effective placement radius; `post_radius` only sizes
/// the columns.
pub struct CircularColumns;

impl ShapeFamily for CircularColumns {
    type Params = CircularColumnParams;
    type Layout = PostLayout;

    const KIND: ModelKind = ModelKind::CircularColumns;

    fn layout(params: &CircularColumnParams) -> Result<PostLayout> {
        params.validate()?;
        compute_circular_layout(
            params.radius,
            params.post_offset,
            params.post_count,
            params.post_elevation(),
        )
    }

    fn plan(layout: &PostLayout, params: &CircularColumnParams) -> Result<GroupPlan> {
        params.validate()?;
        check_post_count("postCount", params.post_count as usize, layout.len())?;

        let diameter = 2.0 * params.radius;
        let slab = slab_shape(
            &Footprint::centered(diameter, diameter),
            &params.margins,
            params.concrete_thickness,
            params.is_finite_concrete,
        );
        let posts = layout
            .iter()
            .map(|p| Shape::cylinder(params.post_radius, params.column_height).translate_f64(p.x, p.y, p.z))
            .collect();

        Ok(GroupPlan {
            slab,
            bodies: Vec::new(),
            posts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::ShapeKind;
    use crate::scene::{PrimitiveRole, Scene3D};
    use footing_core::{validate::MAX_EXTENT, FootingError};

    #[test]
    fn test_build_reference_ring() {
        let mut scene = Scene3D::new();
        let params = CircularColumnParams::default();
        let group = CircularColumns::build(&mut scene, &params).unwrap();

        assert_eq!(group.post_ids().len(), 10);
        assert_eq!(group.primitive_count(), 11);
        let first = scene.object(group.post_ids()[0]).unwrap();
        assert_eq!(first.role, PrimitiveRole::Post);
        let pos = first.shape.position();
        assert!((pos.x - 1.44).abs() < 1e-5);
        assert!((pos.y - 1.75).abs() < 1e-6);
        // columns stand on the slab
        assert!((first.shape.bounding_box().min.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_post_radius_does_not_move_posts() {
        let params = CircularColumnParams::default();
        let thick = CircularColumnParams {
            post_radius: 0.2,
            ..params.clone()
        };
        assert_eq!(CircularColumns::layout(&params).unwrap(), CircularColumns::layout(&thick).unwrap());

        let plan = CircularColumns::plan(&CircularColumns::layout(&thick).unwrap(), &thick).unwrap();
        assert_eq!(*plan.posts[0].kind(), ShapeKind::Cylinder { radius: 0.2, height: 1.5 });
    }

    #[test]
    fn test_finite_toggle_changes_only_slab_extent() {
        let mut scene = Scene3D::new();
        let infinite = CircularColumnParams {
            is_finite_concrete: false,
            ..Default::default()
        };
        let mut group = CircularColumns::build(&mut scene, &infinite).unwrap();
        let before = group.snapshot(&scene);
        let post_ids = group.post_ids().to_vec();

        let finite = CircularColumnParams {
            is_finite_concrete: true,
            ..infinite
        };
        CircularColumns::rebuild(&mut scene, &mut group, &finite).unwrap();
        let after = group.snapshot(&scene);

        assert_eq!(group.post_ids(), post_ids.as_slice());
        assert_eq!(before.len(), after.len());
        assert_ne!(before[0], after[0]);
        assert_eq!(before[0].bounds.center(), after[0].bounds.center());
        assert_eq!(before[1..], after[1..]);
    }

    #[test]
    fn test_mismatched_layout_rejected_without_side_effects() {
        let mut scene = Scene3D::new();
        let params = CircularColumnParams::default();
        let short = compute_circular_layout(1.5, 0.06, 4, 1.75).unwrap();

        let err = CircularColumns::create(&mut scene, &short, &params).unwrap_err();
        assert!(err.is_invalid_parameter());
        assert_eq!(scene.object_count(), 0);
        assert_eq!(scene.material_count(), 0);
    }

    #[test]
    fn test_invalid_update_keeps_prior_geometry() {
        let mut scene = Scene3D::new();
        let params = CircularColumnParams::default();
        let mut group = CircularColumns::build(&mut scene, &params).unwrap();
        let before = group.snapshot(&scene);
        scene.drain_changes();

        let bad = CircularColumnParams {
            post_offset: 2.0,
            ..params
        };
        assert!(CircularColumns::rebuild(&mut scene, &mut group, &bad).is_err());
        assert_eq!(group.snapshot(&scene), before);
        assert!(scene.drain_changes().is_empty());
    }

    #[test]
    fn test_largest_ring_updates_idempotently() {
        let mut scene = Scene3D::new();
        let params = CircularColumnParams {
            radius: MAX_EXTENT,
            is_finite_concrete: false,
            ..Default::default()
        };
        let mut group = CircularColumns::build(&mut scene, &params).unwrap();
        let before = group.snapshot(&scene);
        scene.drain_changes();

        CircularColumns::rebuild(&mut scene, &mut group, &params).unwrap();
        assert!(scene.drain_changes().is_empty());
        assert_eq!(group.snapshot(&scene), before);
        assert!(before.iter().all(|p| p.bounds.min.is_finite() && p.bounds.max.is_finite()));
    }

    #[test]
    fn test_oversized_inputs_rejected() {
        let mut scene = Scene3D::new();
        let huge = CircularColumnParams {
            radius: f64::MAX / 1.5,
            ..Default::default()
        };
        assert!(CircularColumns::build(&mut scene, &huge).unwrap_err().is_invalid_parameter());

        let crowded = CircularColumnParams {
            post_count: u32::MAX,
            ..Default::default()
        };
        assert!(CircularColumns::build(&mut scene, &crowded).unwrap_err().is_invalid_parameter());
        assert_eq!(scene.object_count(), 0);
    }

    #[test]
    fn test_update_after_dispose_fails() {
        let mut scene = Scene3D::new();
        let params = CircularColumnParams::default();
        let mut group = CircularColumns::build(&mut scene, &params).unwrap();
        group.dispose(&mut scene);

        let layout = CircularColumns::layout(&params).unwrap();
        let err = CircularColumns::update(&mut scene, &mut group, &layout, &params).unwrap_err();
        assert_eq!(err, FootingError::DisposedGroupReuse { group: group.id() });
        assert_eq!(scene.object_count(), 0);
    }
}
