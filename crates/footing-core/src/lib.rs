//! Core types, parameter records, and errors for the footing viewer.
//!
//! This crate provides the foundational types used across all other footing crates:
//! - Coordinate and layout types (`Point3`, `PostLayout`)
//! - Parameter records for the three shape families
//! - Domain validation helpers
//! - Error types

pub mod errors;
pub mod params;
pub mod types;
pub mod validate;

pub use errors::*;
pub use params::*;
pub use types::*;
