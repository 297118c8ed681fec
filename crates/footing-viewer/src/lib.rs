//! The viewer controller for column footings.
//!
//! The controller holds the parameter records of all three shape families
//! and the selected model, and decides on every change whether to create,
//! update or dispose geometry. It never owns the scene: the render host
//! passes its [`Scene3D`](footing_render_3d::Scene3D) into every call.

mod config;
mod controller;

pub use config::{ConfigError, ViewerConfig};
pub use controller::{ModelParameters, ViewerController, ViewerEvent};
