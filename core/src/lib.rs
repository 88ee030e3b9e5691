//! # CitaLink Core
//!
//! Core business logic and domain layer for the CitaLink backend.
//! This crate contains the verification-attempt entity, business services,
//! repository interfaces, and error types that form the identity
//! verification engine.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
