//! Two overlapping cuboids with posts along their perimeters.

use footing_core::{ComplexColumnParams, Cuboid, ModelKind, PostLayout, Result};
use footing_layout::compute_perimeter_layout;

use crate::geometry::Shape;
use crate::group::{check_post_count, GroupPlan, ShapeFamily};
use crate::slab::{slab_shape, Footprint};

/// Post rings of both cuboids. The two sets are independent.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexLayout {
    pub cuboid1: PostLayout,
    pub cuboid2: PostLayout,
}

impl ComplexLayout {
    pub fn len(&self) -> usize {
        self.cuboid1.len() + self.cuboid2.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Posts on the ring around a cuboid with these edge counts.
fn ring_size(cuboid: &Cuboid) -> usize {
    let (top, left) = (cuboid.posts_top as usize, cuboid.posts_left as usize);
    if top == 1 || left == 1 {
        top * left
    } else {
        2 * (top + left) - 4
    }
}

/// A complex column footing: slab, two cuboid bodies, two post rings.
pub struct ComplexColumn;

impl ComplexColumn {
    fn cuboid_center(params: &ComplexColumnParams, second: bool) -> (f64, f64) {
        if second {
            (params.cuboid2_offset_x, params.cuboid2_offset_z)
        } else {
            (0.0, 0.0)
        }
    }

    fn ring(params: &ComplexColumnParams, cuboid: &Cuboid, center: (f64, f64)) -> Result<PostLayout> {
        compute_perimeter_layout(
            cuboid.width,
            cuboid.depth,
            cuboid.posts_top,
            cuboid.posts_left,
            params.post_offset,
            params.post_elevation(cuboid),
            center,
        )
    }

    fn body(params: &ComplexColumnParams, cuboid: &Cuboid, (x, z): (f64, f64)) -> Shape {
        Shape::box_shape(cuboid.width, cuboid.height, cuboid.depth).translate_f64(
            x,
            params.concrete_thickness + cuboid.height / 2.0,
            z,
        )
    }
}

impl ShapeFamily for ComplexColumn {
    type Params = ComplexColumnParams;
    type Layout = ComplexLayout;

    const KIND: ModelKind = ModelKind::ComplexColumn;

    fn layout(params: &ComplexColumnParams) -> Result<ComplexLayout> {
        params.validate()?;
        Ok(ComplexLayout {
            cuboid1: Self::ring(params, &params.cuboid1, Self::cuboid_center(params, false))?,
            cuboid2: Self::ring(params, &params.cuboid2, Self::cuboid_center(params, true))?,
        })
    }

    fn plan(layout: &ComplexLayout, params: &ComplexColumnParams) -> Result<GroupPlan> {
        params.validate()?;
        check_post_count("cuboid1 posts", ring_size(&params.cuboid1), layout.cuboid1.len())?;
        check_post_count("cuboid2 posts", ring_size(&params.cuboid2), layout.cuboid2.len())?;

        let c1 = Self::cuboid_center(params, false);
        let c2 = Self::cuboid_center(params, true);
        let footprint = Footprint::around(c1.0, c1.1, params.cuboid1.width, params.cuboid1.depth)
            .union(&Footprint::around(c2.0, c2.1, params.cuboid2.width, params.cuboid2.depth));

        let slab = slab_shape(
            &footprint,
            &params.margins,
            params.concrete_thickness,
            params.is_finite_concrete,
        );
        let bodies = vec![
            Self::body(params, &params.cuboid1, c1),
            Self::body(params, &params.cuboid2, c2),
        ];
        let posts = layout
            .cuboid1
            .iter()
            .chain(layout.cuboid2.iter())
            .map(|p| Shape::cylinder(params.post_radius, params.post_height).translate_f64(p.x, p.y, p.z))
            .collect();

        Ok(GroupPlan { slab, bodies, posts })
    }
}
