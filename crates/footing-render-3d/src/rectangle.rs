//! A rectangular grid of posts above a slab.

use footing_core::{ModelKind, PostLayout, RectangleColumnParams, Result};
use footing_layout::compute_rectangular_layout;

use crate::geometry::Shape;
use crate::group::{check_post_count, GroupPlan, ShapeFamily};
use crate::slab::{slab_shape, Footprint};

/// Posts on a `posts_x` by `posts_z` grid over a rectangular footprint.
pub struct RectangleColumn;

impl ShapeFamily for RectangleColumn {
    type Params = RectangleColumnParams;
    type Layout = PostLayout;

    const KIND: ModelKind = ModelKind::RectangleColumn;

    fn layout(params: &RectangleColumnParams) -> Result<PostLayout> {
        params.validate()?;
        compute_rectangular_layout(
            params.width,
            params.depth,
            params.posts_x,
            params.posts_z,
            params.post_offset,
            params.post_elevation(),
        )
    }

    fn plan(layout: &PostLayout, params: &RectangleColumnParams) -> Result<GroupPlan> {
        params.validate()?;
        check_post_count(
            "postsX * postsZ",
            params.posts_x as usize * params.posts_z as usize,
            layout.len(),
        )?;

        let slab = slab_shape(
            &Footprint::centered(params.width, params.depth),
            &params.margins,
            params.concrete_thickness,
            params.is_finite_concrete,
        );
        let radius = params.post_diameter / 2.0;
        let posts = layout
            .iter()
            .map(|p| Shape::cylinder(radius, params.post_height).translate_f64(p.x, p.y, p.z))
            .collect();

        Ok(GroupPlan {
            slab,
            bodies: Vec::new(),
            posts,
        })
    }
}
