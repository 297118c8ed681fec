//! Error types for the footing viewer.

use crate::types::{GroupId, ModelKind};
use thiserror::Error;

/// Result alias used throughout the footing crates.
pub type Result<T> = std::result::Result<T, FootingError>;

/// Errors raised by layout calculators and geometry builders.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FootingError {
    /// A numeric or count input fell outside its valid domain.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// `update` was called on a group that has already been disposed.
    #[error("Geometry group {group} has already been disposed")]
    DisposedGroupReuse { group: GroupId },

    /// A group was handed to a shape family other than the one that built it.
    #[error("Geometry group {group} was built as {found}, not {expected}")]
    FamilyMismatch {
        group: GroupId,
        expected: ModelKind,
        found: ModelKind,
    },
}

impl FootingError {
    pub fn invalid(name: impl Into<String>, reason: impl Into<String>) -> Self {
        FootingError::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error reports an out-of-domain input.
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, FootingError::InvalidParameter { .. })
    }
}
