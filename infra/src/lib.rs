//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the CitaLink
//! verification engine. It provides concrete implementations of the
//! collaborator interfaces defined in `cl_core`:
//!
//! - **Channels**: message senders per delivery channel (Twilio SMS and
//!   WhatsApp, SMTP email, the chat-app stub, and a mock for development)
//! - **Cache**: Redis client and the Redis-backed attempt store
//! - **Database**: MySQL profile store using SQLx
//!
//! ## Features
//!
//! - `mysql`: Enable the MySQL profile store (default)
//! - `redis-cache`: Enable the Redis attempt store (default)
//! - `twilio-sms`: Enable the Twilio senders (default)

pub mod cache;
pub mod channels;

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

pub mod config;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Message delivery error
    #[error("Delivery error: {0}")]
    Delivery(String),

    /// Email transport error
    #[error("Email error: {0}")]
    Email(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
