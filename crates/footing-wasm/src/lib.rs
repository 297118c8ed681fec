//! WebAssembly bindings for the footing viewer.
//!
//! The browser owns the canvas, camera, lights and render loop. This crate
//! owns the host scene and the controller, and hands the JS side mesh
//! buffers plus a journal of what changed since the last frame.
//!
//! ## Example
//!
//! ```js
//! import init, { FootingViewer } from 'footing-wasm';
//!
//! await init();
//! const viewer = new FootingViewer(JSON.stringify({ model: 'circularColumns' }));
//! viewer.mount();
//! syncEngine(viewer.meshes());
//!
//! viewer.setCircularParams({ postCount: 12 });
//! applyChanges(viewer.drainChanges(), viewer.meshes());
//!
//! viewer.selectModel('rectangleColumn');
//! viewer.unmount();
//! ```

use wasm_bindgen::prelude::*;

use footing_core::{CircularColumnParams, ComplexColumnParams, ModelKind, RectangleColumnParams};
use footing_render_3d::Scene3D;
use footing_viewer::{ViewerConfig, ViewerController};

mod types;

pub use types::*;

/// Install the panic hook and route `tracing` output to the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(debug_assertions)]
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
}

/// A footing viewer bound to one render surface.
#[wasm_bindgen]
pub struct FootingViewer {
    scene: Scene3D,
    controller: ViewerController,
}

#[wasm_bindgen]
impl FootingViewer {
    /// Create a viewer from an optional JSON config.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<FootingViewer, JsError> {
        let config = match config_json {
            Some(json) => ViewerConfig::from_json_str(&json)
                .map_err(|e| JsError::new(&format!("Config error: {}", e)))?,
            None => ViewerConfig::default(),
        };
        tracing::info!(model = %config.model, segments = config.curve_segments, "viewer created");

        Ok(Self {
            scene: Scene3D::with_options(config.tessellation()),
            controller: ViewerController::new(config.model, config.parameters),
        })
    }

    /// Get the version of the viewer.
    #[wasm_bindgen(js_name = version)]
    pub fn version() -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }

    /// Create geometry for the selected model.
    #[wasm_bindgen]
    pub fn mount(&mut self) -> Result<(), JsError> {
        self.controller
            .mount(&mut self.scene)
            .map_err(|e| JsError::new(&format!("Mount error: {}", e)))
    }

    /// Dispose all geometry. Safe to call repeatedly.
    #[wasm_bindgen]
    pub fn unmount(&mut self) {
        self.controller.unmount(&mut self.scene);
    }

    /// Switch to `circularColumns`, `complexColumn` or `rectangleColumn`.
    #[wasm_bindgen(js_name = selectModel)]
    pub fn select_model(&mut self, name: &str) -> Result<(), JsError> {
        let kind = ModelKind::from_name(name)
            .ok_or_else(|| JsError::new(&format!("Unknown model: {}", name)))?;
        self.controller
            .select_model(&mut self.scene, kind)
            .map_err(|e| JsError::new(&format!("Model switch error: {}", e)))
    }

    /// Name of the selected model.
    #[wasm_bindgen(js_name = selectedModel)]
    pub fn selected_model(&self) -> String {
        self.controller.selected().as_str().to_string()
    }

    /// Replace the circular-column parameters. Missing fields take defaults.
    #[wasm_bindgen(js_name = setCircularParams)]
    pub fn set_circular_params(&mut self, params: JsValue) -> Result<(), JsError> {
        let params: CircularColumnParams = serde_wasm_bindgen::from_value(params)
            .map_err(|e| JsError::new(&format!("Invalid circular parameters: {}", e)))?;
        self.controller
            .set_circular_params(&mut self.scene, params)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Replace the complex-column parameters. Missing fields take defaults.
    #[wasm_bindgen(js_name = setComplexParams)]
    pub fn set_complex_params(&mut self, params: JsValue) -> Result<(), JsError> {
        let params: ComplexColumnParams = serde_wasm_bindgen::from_value(params)
            .map_err(|e| JsError::new(&format!("Invalid complex parameters: {}", e)))?;
        self.controller
            .set_complex_params(&mut self.scene, params)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Replace the rectangle-column parameters. Missing fields take defaults.
    #[wasm_bindgen(js_name = setRectangleParams)]
    pub fn set_rectangle_params(&mut self, params: JsValue) -> Result<(), JsError> {
        let params: RectangleColumnParams = serde_wasm_bindgen::from_value(params)
            .map_err(|e| JsError::new(&format!("Invalid rectangle parameters: {}", e)))?;
        self.controller
            .set_rectangle_params(&mut self.scene, params)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Current parameter records of all three models.
    #[wasm_bindgen]
    pub fn parameters(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(self.controller.parameters())
            .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
    }

    /// Changes recorded since the last call, oldest first.
    #[wasm_bindgen(js_name = drainChanges)]
    pub fn drain_changes(&mut self) -> Result<JsValue, JsError> {
        let changes = self.scene.drain_changes();
        serde_wasm_bindgen::to_value(&changes)
            .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
    }

    /// Mesh buffers and materials of every live object.
    #[wasm_bindgen]
    pub fn meshes(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(&mesh_records(&self.scene))
            .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
    }

    /// Number of live objects in the scene.
    #[wasm_bindgen(js_name = objectCount)]
    pub fn object_count(&self) -> usize {
        self.scene.object_count()
    }
}
