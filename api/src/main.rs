//! CitaLink verification API server

use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use tracing::info;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;

use cl_api::app::{configure_routes, AppState};
use cl_core::repositories::attempt::{AttemptStore, InMemoryAttemptStore};
use cl_core::repositories::profile::{NoopProfileStore, ProfileStore};
use cl_core::services::verification::{VerificationService, VerificationServiceConfig};
use cl_infra::cache::{RedisAttemptStore, RedisClient};
use cl_infra::channels::create_channel_router;
use cl_infra::config::DeliveryConfig;
use cl_infra::database::{create_pool, MySqlProfileStore};
use cl_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("starting CitaLink verification API server");

    let config = AppConfig::from_env();
    let delivery_config = DeliveryConfig::from_env();

    let router = Arc::new(create_channel_router(config.environment, &delivery_config));

    // The in-memory store is a single-instance default; point
    // ATTEMPT_STORE at "redis" when running more than one replica.
    let store: Arc<dyn AttemptStore> = match std::env::var("ATTEMPT_STORE").as_deref() {
        Ok("redis") => {
            let client = RedisClient::new(config.cache.clone())
                .await
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;
            info!("using Redis attempt store");
            Arc::new(RedisAttemptStore::new(client))
        }
        _ => {
            info!("using in-memory attempt store");
            Arc::new(InMemoryAttemptStore::new())
        }
    };

    let profile_store: Arc<dyn ProfileStore> = match std::env::var("PROFILE_STORE").as_deref() {
        Ok("mysql") => {
            let pool = create_pool(&config.database)
                .await
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;
            info!("using MySQL profile store");
            Arc::new(MySqlProfileStore::new(pool))
        }
        _ => {
            info!("using no-op profile store");
            Arc::new(NoopProfileStore::new())
        }
    };

    let verification_service = Arc::new(VerificationService::new(
        store,
        profile_store,
        router,
        VerificationServiceConfig::default(),
    ));

    let state = web::Data::new(AppState {
        verification_service,
    });

    let bind_address = config.server.bind_address();
    info!(address = %bind_address, environment = %config.environment, "binding HTTP server");

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(cl_api::middleware::cors::create_cors())
            .app_data(state.clone())
            .configure(configure_routes::<dyn AttemptStore, dyn ProfileStore>)
    })
    .bind(&bind_address)?
    .run()
    .await
}
