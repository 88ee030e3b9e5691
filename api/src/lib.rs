//! HTTP transport for the CitaLink verification engine
//!
//! Exposes the two verification operations over actix-web:
//! - `POST /api/v1/verification/send-code`
//! - `POST /api/v1/verification/verify-code`

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
