//! Domain checks shared by the layout calculators and the geometry builders.
//!
//! Non-finite values are rejected everywhere, and magnitudes are capped so
//! that every derived extent still fits the `f32` render geometry.

use crate::errors::{FootingError, Result};

/// Largest accepted length, offset or elevation, in either direction.
pub const MAX_EXTENT: f64 = 1.0e6;

/// Largest accepted post count along any one dimension.
pub const MAX_COUNT: u32 = 4096;

fn in_range(value: f64) -> bool {
    value.is_finite() && value.abs() <= MAX_EXTENT
}

/// Require `value > 0`.
pub fn positive(name: &str, value: f64) -> Result<f64> {
    if in_range(value) && value > 0.0 {
        Ok(value)
    } else {
        Err(FootingError::invalid(
            name,
            format!("must be a positive number up to {MAX_EXTENT}, got {value}"),
        ))
    }
}

/// Require `value >= 0`.
pub fn non_negative(name: &str, value: f64) -> Result<f64> {
    if in_range(value) && value >= 0.0 {
        Ok(value)
    } else {
        Err(FootingError::invalid(
            name,
            format!("must be zero or a positive number up to {MAX_EXTENT}, got {value}"),
        ))
    }
}

/// Require a finite value within `±MAX_EXTENT`.
pub fn finite(name: &str, value: f64) -> Result<f64> {
    if in_range(value) {
        Ok(value)
    } else {
        Err(FootingError::invalid(
            name,
            format!("must be finite and within ±{MAX_EXTENT}, got {value}"),
        ))
    }
}

/// Require a count between one and `MAX_COUNT`.
pub fn count(name: &str, value: u32) -> Result<u32> {
    if (1..=MAX_COUNT).contains(&value) {
        Ok(value)
    } else {
        Err(FootingError::invalid(
            name,
            format!("must be between 1 and {MAX_COUNT}, got {value}"),
        ))
    }
}
