//! Viewer configuration loaded from JSON.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use footing_core::{FootingError, ModelKind};
use footing_render_3d::TessellationOptions;

use crate::controller::ModelParameters;

/// Errors while loading a [`ViewerConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid default parameters: {0}")]
    Invalid(#[from] FootingError),
}

/// Initial state of a viewer.
///
/// Every field is optional in JSON; missing fields take the reference
/// defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ViewerConfig {
    /// Model shown on mount.
    pub model: ModelKind,
    pub parameters: ModelParameters,
    /// Segments around each cylinder.
    pub curve_segments: u32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            model: ModelKind::default(),
            parameters: ModelParameters::default(),
            curve_segments: 32,
        }
    }
}

impl ViewerConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: ViewerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every parameter record produces valid geometry.
    pub fn validate(&self) -> Result<(), FootingError> {
        for kind in ModelKind::ALL {
            self.parameters.preflight(kind)?;
        }
        Ok(())
    }

    pub fn tessellation(&self) -> TessellationOptions {
        TessellationOptions::with_segments(self.curve_segments)
    }

    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_is_default() {
        let config = ViewerConfig::from_json_str("{}").unwrap();
        assert_eq!(config, ViewerConfig::default());
    }

    #[test]
    fn test_partial_record_keeps_other_defaults() {
        let config = ViewerConfig::from_json_str(
            r#"{
                "model": "rectangleColumn",
                "parameters": { "rectangle": { "postsX": 5, "isFiniteConcrete": false } }
            }"#,
        )
        .unwrap();

        assert_eq!(config.model, ModelKind::RectangleColumn);
        assert_eq!(config.parameters.rectangle.posts_x, 5);
        assert!(!config.parameters.rectangle.is_finite_concrete);
        assert_eq!(config.parameters.rectangle.width, 3.0);
        assert_eq!(config.parameters.circular.post_count, 10);
    }

    #[test]
    fn test_out_of_domain_defaults_rejected() {
        let err = ViewerConfig::from_json_str(r#"{ "parameters": { "circular": { "postCount": 0 } } }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = ViewerConfig::from_json_str("{ model: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_round_trip_through_json() {
        let json = ViewerConfig::default().to_json_string().unwrap();
        assert_eq!(ViewerConfig::from_json_str(&json).unwrap(), ViewerConfig::default());
    }

    #[test]
    fn test_tessellation_clamps_segments() {
        let config = ViewerConfig {
            curve_segments: 3,
            ..Default::default()
        };
        assert_eq!(config.tessellation().curve_segments, 8);
    }
}
