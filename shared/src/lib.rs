//! Shared utilities and common types for CitaLink server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Response envelope structures
//! - Utility functions (address normalization, masking)
//! - Common type definitions

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AppConfig, CacheConfig, DatabaseConfig, Environment, ServerConfig};
pub use types::{ApiResponse, Language};
pub use utils::address;
