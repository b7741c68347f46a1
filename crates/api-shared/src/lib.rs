//! # API Shared
//!
//! Shared definitions for the MedGuide HTTP surfaces.
//!
//! Contains:
//! - Wire types for the JSON API (`types` module), annotated for OpenAPI
//! - Shared services like `HealthService`
//!
//! Used by `api-rest` and the root run binary.

pub mod health;
pub mod types;

pub use health::HealthService;
pub use types::*;
