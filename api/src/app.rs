//! Application wiring for the HTTP server

use std::sync::Arc;

use actix_web::{web, HttpResponse};

use cl_core::repositories::attempt::AttemptStore;
use cl_core::repositories::profile::ProfileStore;
use cl_core::services::verification::VerificationService;

use crate::routes;

/// Shared application state holding the verification service
pub struct AppState<A, P>
where
    A: AttemptStore + ?Sized,
    P: ProfileStore + ?Sized,
{
    pub verification_service: Arc<VerificationService<A, P>>,
}

/// Register all API routes for the given state types
pub fn configure_routes<A, P>(cfg: &mut web::ServiceConfig)
where
    A: AttemptStore + ?Sized + 'static,
    P: ProfileStore + ?Sized + 'static,
{
    cfg.route("/health", web::get().to(health_check)).service(
        web::scope("/api/v1/verification")
            .route(
                "/send-code",
                web::post().to(routes::verification::start_verification::<A, P>),
            )
            .route(
                "/verify-code",
                web::post().to(routes::verification::check_verification::<A, P>),
            ),
    );
}

/// Health check endpoint
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "citalink-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
