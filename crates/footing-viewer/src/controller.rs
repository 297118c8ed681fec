//! Create/update/dispose dispatch for the active model.

use serde::{Deserialize, Serialize};

use footing_core::{
    CircularColumnParams, ComplexColumnParams, ModelKind, RectangleColumnParams, Result,
};
use footing_render_3d::{
    CircularColumns, ComplexColumn, GeometryGroup, RectangleColumn, Scene3D, ShapeFamily,
};

/// Current parameter records of all three families.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModelParameters {
    pub circular: CircularColumnParams,
    pub complex: ComplexColumnParams,
    pub rectangle: RectangleColumnParams,
}

impl ModelParameters {
    /// Run layout and planning for `kind` without touching any scene.
    pub fn preflight(&self, kind: ModelKind) -> Result<()> {
        match kind {
            ModelKind::CircularColumns => preflight::<CircularColumns>(&self.circular),
            ModelKind::ComplexColumn => preflight::<ComplexColumn>(&self.complex),
            ModelKind::RectangleColumn => preflight::<RectangleColumn>(&self.rectangle),
        }
    }

    fn build(&self, scene: &mut Scene3D, kind: ModelKind) -> Result<GeometryGroup> {
        match kind {
            ModelKind::CircularColumns => CircularColumns::build(scene, &self.circular),
            ModelKind::ComplexColumn => ComplexColumn::build(scene, &self.complex),
            ModelKind::RectangleColumn => RectangleColumn::build(scene, &self.rectangle),
        }
    }

    fn rebuild(&self, scene: &mut Scene3D, group: &mut GeometryGroup) -> Result<()> {
        match group.kind() {
            ModelKind::CircularColumns => CircularColumns::rebuild(scene, group, &self.circular),
            ModelKind::ComplexColumn => ComplexColumn::rebuild(scene, group, &self.complex),
            ModelKind::RectangleColumn => RectangleColumn::rebuild(scene, group, &self.rectangle),
        }
    }
}

fn preflight<F: ShapeFamily>(params: &F::Params) -> Result<()> {
    let layout = F::layout(params)?;
    F::plan(&layout, params).map(|_| ())
}

/// One change coming from the UI layer.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewerEvent {
    SelectModel(ModelKind),
    SetCircular(CircularColumnParams),
    SetComplex(ComplexColumnParams),
    SetRectangle(RectangleColumnParams),
    Unmount,
}

/// Holds the selected model and its parameters, and owns the single live
/// geometry group while mounted.
#[derive(Debug, Default)]
pub struct ViewerController {
    selected: ModelKind,
    parameters: ModelParameters,
    active: Option<GeometryGroup>,
}

impl ViewerController {
    pub fn new(selected: ModelKind, parameters: ModelParameters) -> Self {
        Self {
            selected,
            parameters,
            active: None,
        }
    }

    pub fn selected(&self) -> ModelKind {
        self.selected
    }

    pub fn parameters(&self) -> &ModelParameters {
        &self.parameters
    }

    pub fn active_group(&self) -> Option<&GeometryGroup> {
        self.active.as_ref()
    }

    pub fn is_mounted(&self) -> bool {
        self.active.is_some()
    }

    /// Create geometry for the selected model. Re-mounting reconciles the
    /// existing group instead of creating a second one.
    pub fn mount(&mut self, scene: &mut Scene3D) -> Result<()> {
        match self.active.as_mut() {
            Some(group) => self.parameters.rebuild(scene, group),
            None => {
                let group = self.parameters.build(scene, self.selected)?;
                tracing::info!(model = %self.selected, group = %group.id(), "mounted viewer");
                self.active = Some(group);
                Ok(())
            }
        }
    }

    /// Release the active group, if any.
    pub fn unmount(&mut self, scene: &mut Scene3D) {
        if let Some(mut group) = self.active.take() {
            group.dispose(scene);
            tracing::info!(model = %self.selected, "unmounted viewer");
        }
    }

    /// Switch the active model.
    ///
    /// The new model's parameters are checked before anything is disposed,
    /// so a rejected switch leaves the current geometry in place.
    pub fn select_model(&mut self, scene: &mut Scene3D, kind: ModelKind) -> Result<()> {
        if kind == self.selected {
            return Ok(());
        }
        if self.active.is_none() {
            self.selected = kind;
            return Ok(());
        }

        if let Err(err) = self.parameters.preflight(kind) {
            tracing::warn!(from = %self.selected, to = %kind, error = %err, "model switch rejected");
            return Err(err);
        }

        let previous = self.selected;
        self.unmount(scene);
        self.selected = kind;
        let group = self.parameters.build(scene, kind)?;
        tracing::info!(from = %previous, to = %kind, group = %group.id(), "switched model");
        self.active = Some(group);
        Ok(())
    }

    pub fn set_circular_params(&mut self, scene: &mut Scene3D, params: CircularColumnParams) -> Result<()> {
        let next = ModelParameters {
            circular: params,
            ..self.parameters.clone()
        };
        self.commit(scene, ModelKind::CircularColumns, next)
    }

    pub fn set_complex_params(&mut self, scene: &mut Scene3D, params: ComplexColumnParams) -> Result<()> {
        let next = ModelParameters {
            complex: params,
            ..self.parameters.clone()
        };
        self.commit(scene, ModelKind::ComplexColumn, next)
    }

    pub fn set_rectangle_params(&mut self, scene: &mut Scene3D, params: RectangleColumnParams) -> Result<()> {
        let next = ModelParameters {
            rectangle: params,
            ..self.parameters.clone()
        };
        self.commit(scene, ModelKind::RectangleColumn, next)
    }

    /// Feed one UI change through the controller.
    pub fn handle(&mut self, scene: &mut Scene3D, event: ViewerEvent) -> Result<()> {
        match event {
            ViewerEvent::SelectModel(kind) => self.select_model(scene, kind),
            ViewerEvent::SetCircular(params) => self.set_circular_params(scene, params),
            ViewerEvent::SetComplex(params) => self.set_complex_params(scene, params),
            ViewerEvent::SetRectangle(params) => self.set_rectangle_params(scene, params),
            ViewerEvent::Unmount => {
                self.unmount(scene);
                Ok(())
            }
        }
    }

    /// Accept `next` if `changed` validates; update the live group in place
    /// when it belongs to that family. Rejected records leave both the
    /// stored parameters and the scene untouched.
    fn commit(&mut self, scene: &mut Scene3D, changed: ModelKind, next: ModelParameters) -> Result<()> {
        if let Err(err) = next.preflight(changed) {
            tracing::warn!(model = %changed, error = %err, "parameters rejected");
            return Err(err);
        }

        if let Some(group) = self.active.as_mut().filter(|g| g.kind() == changed) {
            next.rebuild(scene, group)?;
        }
        self.parameters = next;
        Ok(())
    }
}
