//! Geometry groups and the create/update/dispose lifecycle.
//!
//! A shape family turns a layout and a parameter record into a
//! [`GroupPlan`]: the full list of shapes a group must contain. Planning is
//! pure and does all validation, so a failed create or update never touches
//! the scene. Realizing a plan inserts objects; applying a plan to an
//! existing group reshapes objects in place and only adds or removes the
//! difference in count.

use footing_core::{FootingError, GroupId, ModelKind, Result};

use crate::geometry::{BoundingBox, Shape, ShapeKind};
use crate::material::Material;
use crate::scene::{MaterialId, PrimitiveId, PrimitiveRole, Scene3D};

/// Every shape a group should own, by role.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupPlan {
    pub slab: Shape,
    pub bodies: Vec<Shape>,
    pub posts: Vec<Shape>,
}

/// Observable description of one primitive, for equivalence checks.
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveSnapshot {
    pub role: PrimitiveRole,
    pub kind: ShapeKind,
    pub bounds: BoundingBox,
}

/// Owning handle for every primitive and material of one structure.
#[derive(Debug)]
pub struct GeometryGroup {
    id: GroupId,
    kind: ModelKind,
    slab: Option<PrimitiveId>,
    bodies: Vec<PrimitiveId>,
    posts: Vec<PrimitiveId>,
    concrete: Option<MaterialId>,
    steel: Option<MaterialId>,
    disposed: bool,
}

impl GeometryGroup {
    /// Insert every shape of `plan` into `scene`.
    pub(crate) fn realize(scene: &mut Scene3D, kind: ModelKind, plan: GroupPlan) -> Self {
        let id = scene.allocate_group_id();
        let concrete = scene.add_material(Material::concrete());
        let steel = scene.add_material(Material::steel());

        let slab = scene.insert(id, PrimitiveRole::Slab, "slab", plan.slab, concrete);
        let mut group = Self {
            id,
            kind,
            slab: Some(slab),
            bodies: Vec::new(),
            posts: Vec::new(),
            concrete: Some(concrete),
            steel: Some(steel),
            disposed: false,
        };
        group.sync_role(scene, PrimitiveRole::Body, plan.bodies);
        group.sync_role(scene, PrimitiveRole::Post, plan.posts);

        tracing::debug!(
            group = %id,
            kind = %kind,
            primitives = group.primitive_count(),
            "created geometry group"
        );
        group
    }

    /// Bring the group in line with `plan`, reusing existing primitives.
    pub(crate) fn apply(&mut self, scene: &mut Scene3D, plan: GroupPlan) {
        let before = self.posts.len();
        match self.slab {
            Some(slab) if scene.reshape(slab, plan.slab.clone()) => {}
            _ => {
                let material = self.concrete_material(scene);
                self.slab = Some(scene.insert(self.id, PrimitiveRole::Slab, "slab", plan.slab, material));
            }
        }
        self.sync_role(scene, PrimitiveRole::Body, plan.bodies);
        self.sync_role(scene, PrimitiveRole::Post, plan.posts);

        tracing::debug!(
            group = %self.id,
            posts_before = before,
            posts_after = self.posts.len(),
            "updated geometry group"
        );
    }

    /// Reshape the first `min(old, new)` members of a role in place, then
    /// insert the extra shapes or remove the surplus objects.
    fn sync_role(&mut self, scene: &mut Scene3D, role: PrimitiveRole, shapes: Vec<Shape>) {
        let material = match role {
            PrimitiveRole::Post => self.steel_material(scene),
            _ => self.concrete_material(scene),
        };
        let group = self.id;
        let members = match role {
            PrimitiveRole::Slab => return,
            PrimitiveRole::Body => &mut self.bodies,
            PrimitiveRole::Post => &mut self.posts,
        };

        let keep = shapes.len().min(members.len());
        for surplus in members.drain(keep..) {
            scene.remove(surplus);
        }

        let prefix = match role {
            PrimitiveRole::Body => "body",
            _ => "post",
        };
        for (index, shape) in shapes.into_iter().enumerate() {
            let existing = members.get(index).copied();
            match existing {
                Some(id) if scene.reshape(id, shape.clone()) => {}
                Some(_) => {
                    members[index] = scene.insert(group, role, format!("{prefix}-{index}"), shape, material);
                }
                None => {
                    members.push(scene.insert(group, role, format!("{prefix}-{index}"), shape, material));
                }
            }
        }
    }

    fn concrete_material(&mut self, scene: &mut Scene3D) -> MaterialId {
        match self.concrete {
            Some(id) if scene.material(id).is_some() => id,
            _ => *self.concrete.insert(scene.add_material(Material::concrete())),
        }
    }

    fn steel_material(&mut self, scene: &mut Scene3D) -> MaterialId {
        match self.steel {
            Some(id) if scene.material(id).is_some() => id,
            _ => *self.steel.insert(scene.add_material(Material::steel())),
        }
    }

    /// Fail unless this group is live and was built by `expected`.
    pub fn ensure_usable(&self, expected: ModelKind) -> Result<()> {
        if self.disposed {
            return Err(FootingError::DisposedGroupReuse { group: self.id });
        }
        if self.kind != expected {
            return Err(FootingError::FamilyMismatch {
                group: self.id,
                expected,
                found: self.kind,
            });
        }
        Ok(())
    }

    /// Release every primitive and material this group owns.
    ///
    /// Calling it again is a no-op.
    pub fn dispose(&mut self, scene: &mut Scene3D) {
        if self.disposed {
            return;
        }
        let released = self.primitive_count();
        for id in self.primitive_ids().collect::<Vec<_>>() {
            scene.remove(id);
        }
        for id in [self.concrete.take(), self.steel.take()].into_iter().flatten() {
            scene.remove_material(id);
        }
        self.slab = None;
        self.bodies.clear();
        self.posts.clear();
        self.disposed = true;

        tracing::debug!(group = %self.id, released, "disposed geometry group");
    }

    pub fn id(&self) -> GroupId {
        self.id
    }

    pub fn kind(&self) -> ModelKind {
        self.kind
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn slab_id(&self) -> Option<PrimitiveId> {
        self.slab
    }

    pub fn body_ids(&self) -> &[PrimitiveId] {
        &self.bodies
    }

    pub fn post_ids(&self) -> &[PrimitiveId] {
        &self.posts
    }

    pub fn material_ids(&self) -> impl Iterator<Item = MaterialId> + '_ {
        self.concrete.iter().chain(self.steel.iter()).copied()
    }

    /// Slab first, then bodies, then posts.
    pub fn primitive_ids(&self) -> impl Iterator<Item = PrimitiveId> + '_ {
        self.slab.iter().chain(&self.bodies).chain(&self.posts).copied()
    }

    pub fn primitive_count(&self) -> usize {
        self.primitive_ids().count()
    }

    /// Describe every owned primitive in [`primitive_ids`](Self::primitive_ids) order.
    pub fn snapshot(&self, scene: &Scene3D) -> Vec<PrimitiveSnapshot> {
        self.primitive_ids()
            .filter_map(|id| scene.object(id))
            .map(|obj| PrimitiveSnapshot {
                role: obj.role,
                kind: *obj.shape.kind(),
                bounds: obj.shape.bounding_box(),
            })
            .collect()
    }
}

/// One family of footing geometry: how to lay it out and what to build.
pub trait ShapeFamily {
    type Params;
    type Layout;

    const KIND: ModelKind;

    /// Compute post positions for `params`.
    fn layout(params: &Self::Params) -> Result<Self::Layout>;

    /// Every shape a group must contain for these inputs. Performs all
    /// validation, including layout/parameter consistency.
    fn plan(layout: &Self::Layout, params: &Self::Params) -> Result<GroupPlan>;

    /// Build a new group from scratch.
    fn create(scene: &mut Scene3D, layout: &Self::Layout, params: &Self::Params) -> Result<GeometryGroup> {
        let plan = Self::plan(layout, params)?;
        Ok(GeometryGroup::realize(scene, Self::KIND, plan))
    }

    /// Reconcile an existing group with new inputs.
    fn update(
        scene: &mut Scene3D,
        group: &mut GeometryGroup,
        layout: &Self::Layout,
        params: &Self::Params,
    ) -> Result<()> {
        group.ensure_usable(Self::KIND)?;
        let plan = Self::plan(layout, params)?;
        group.apply(scene, plan);
        Ok(())
    }

    /// Lay out and create in one step.
    fn build(scene: &mut Scene3D, params: &Self::Params) -> Result<GeometryGroup> {
        let layout = Self::layout(params)?;
        Self::create(scene, &layout, params)
    }

    /// Lay out and update in one step.
    fn rebuild(scene: &mut Scene3D, group: &mut GeometryGroup, params: &Self::Params) -> Result<()> {
        group.ensure_usable(Self::KIND)?;
        let layout = Self::layout(params)?;
        Self::update(scene, group, &layout, params)
    }
}

/// Reject a layout whose post count disagrees with the parameters.
pub(crate) fn check_post_count(name: &str, expected: usize, found: usize) -> Result<()> {
    if expected == found {
        Ok(())
    } else {
        Err(FootingError::invalid(
            name,
            format!("layout has {found} posts but the parameters call for {expected}"),
        ))
    }
}
