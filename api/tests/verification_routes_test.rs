//! Integration tests for the verification endpoints
//!
//! Boots the actix app with a capturing sender, issues a code over the
//! wire, and verifies it using a different raw form of the same address.

use actix_web::{test, web, App};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use cl_api::app::{configure_routes, AppState};
use cl_core::domain::entities::verification_attempt::Channel;
use cl_core::repositories::attempt::InMemoryAttemptStore;
use cl_core::repositories::profile::NoopProfileStore;
use cl_core::services::dispatch::ChannelRouter;
use cl_core::services::verification::{
    MessageSender, VerificationService, VerificationServiceConfig,
};
use cl_shared::config::environment::Environment;

/// Sender that captures outbound messages for code extraction
struct CapturingSender {
    sent: Mutex<HashMap<String, String>>,
}

impl CapturingSender {
    fn new() -> Self {
        Self {
            sent: Mutex::new(HashMap::new()),
        }
    }

    fn code_for(&self, address: &str) -> Option<String> {
        let sent = self.sent.lock().unwrap();
        let message = sent.get(address)?;
        let mut run = String::new();
        for c in message.chars().chain(std::iter::once(' ')) {
            if c.is_ascii_digit() {
                run.push(c);
            } else {
                if run.len() == 6 {
                    return Some(run);
                }
                run.clear();
            }
        }
        None
    }
}

#[async_trait]
impl MessageSender for CapturingSender {
    async fn send(&self, address: &str, message: &str) -> Result<String, String> {
        self.sent
            .lock()
            .unwrap()
            .insert(address.to_string(), message.to_string());
        Ok("captured-msg".to_string())
    }

    fn provider_name(&self) -> &str {
        "capturing"
    }
}

fn build_state(
    sender: Arc<CapturingSender>,
) -> web::Data<AppState<InMemoryAttemptStore, NoopProfileStore>> {
    let router = Arc::new(
        ChannelRouter::new(Environment::Production)
            .with_sender(Channel::Sms, sender.clone())
            .with_sender(Channel::Whatsapp, sender.clone())
            .with_sender(Channel::ChatApp, sender.clone())
            .with_sender(Channel::Email, sender),
    );
    let service = VerificationService::new(
        Arc::new(InMemoryAttemptStore::new()),
        Arc::new(NoopProfileStore::new()),
        router,
        VerificationServiceConfig::default(),
    );

    web::Data::new(AppState {
        verification_service: Arc::new(service),
    })
}

#[actix_rt::test]
async fn test_send_and_verify_round_trip() {
    let sender = Arc::new(CapturingSender::new());
    let state = build_state(sender.clone());
    let app = test::init_service(
        App::new()
            .app_data(state)
            .configure(configure_routes::<InMemoryAttemptStore, NoopProfileStore>),
    )
    .await;

    // Issue a code using the modern request shape
    let request = test::TestRequest::post()
        .uri("/api/v1/verification/send-code")
        .set_json(serde_json::json!({
            "address": "+821011112222",
            "channel": "sms"
        }))
        .to_request();
    let response: serde_json::Value = test::call_and_read_body_json(&app, request).await;

    assert_eq!(response["ok"], true);
    assert_eq!(response["expires_in_seconds"], 300);
    // The code itself is never in the response
    assert!(response.get("code").is_none());

    // Verify using the national raw form of the same number
    let code = sender.code_for("+821011112222").unwrap();
    let request = test::TestRequest::post()
        .uri("/api/v1/verification/verify-code")
        .set_json(serde_json::json!({
            "address": "01011112222",
            "code": code
        }))
        .to_request();
    let response: serde_json::Value = test::call_and_read_body_json(&app, request).await;

    assert_eq!(response["ok"], true);
    assert_eq!(response["verified"], true);

    // Replay is rejected with CodeNotFound
    let request = test::TestRequest::post()
        .uri("/api/v1/verification/verify-code")
        .set_json(serde_json::json!({
            "address": "01011112222",
            "code": code
        }))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);

    let body: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(body["ok"], false);
    assert_eq!(body["error_kind"], "CodeNotFound");
}

#[actix_rt::test]
async fn test_legacy_shape_is_accepted() {
    let sender = Arc::new(CapturingSender::new());
    let state = build_state(sender.clone());
    let app = test::init_service(
        App::new()
            .app_data(state)
            .configure(configure_routes::<InMemoryAttemptStore, NoopProfileStore>),
    )
    .await;

    let request = test::TestRequest::post()
        .uri("/api/v1/verification/send-code")
        .set_json(serde_json::json!({
            "phone": "01011112222",
            "country_code": "+82"
        }))
        .to_request();
    let response: serde_json::Value = test::call_and_read_body_json(&app, request).await;

    assert_eq!(response["ok"], true);
    // The legacy shape dispatched over SMS to the normalized number
    assert!(sender.code_for("+821011112222").is_some());
}

#[actix_rt::test]
async fn test_wrong_code_is_mismatch() {
    let sender = Arc::new(CapturingSender::new());
    let state = build_state(sender.clone());
    let app = test::init_service(
        App::new()
            .app_data(state)
            .configure(configure_routes::<InMemoryAttemptStore, NoopProfileStore>),
    )
    .await;

    let request = test::TestRequest::post()
        .uri("/api/v1/verification/send-code")
        .set_json(serde_json::json!({
            "address": "01011112222",
            "channel": "sms"
        }))
        .to_request();
    let _: serde_json::Value = test::call_and_read_body_json(&app, request).await;

    let code = sender.code_for("+821011112222").unwrap();
    let wrong = if code == "000000" { "000001" } else { "000000" };

    let request = test::TestRequest::post()
        .uri("/api/v1/verification/verify-code")
        .set_json(serde_json::json!({
            "address": "01011112222",
            "code": wrong
        }))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(
        response.status(),
        actix_web::http::StatusCode::UNPROCESSABLE_ENTITY
    );

    let body: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(body["error_kind"], "CodeMismatch");
}

#[actix_rt::test]
async fn test_unknown_address_is_not_found() {
    let sender = Arc::new(CapturingSender::new());
    let state = build_state(sender);
    let app = test::init_service(
        App::new()
            .app_data(state)
            .configure(configure_routes::<InMemoryAttemptStore, NoopProfileStore>),
    )
    .await;

    let request = test::TestRequest::post()
        .uri("/api/v1/verification/verify-code")
        .set_json(serde_json::json!({
            "address": "+821099990000",
            "code": "123456"
        }))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn test_invalid_code_shape_is_rejected() {
    let sender = Arc::new(CapturingSender::new());
    let state = build_state(sender);
    let app = test::init_service(
        App::new()
            .app_data(state)
            .configure(configure_routes::<InMemoryAttemptStore, NoopProfileStore>),
    )
    .await;

    let request = test::TestRequest::post()
        .uri("/api/v1/verification/verify-code")
        .set_json(serde_json::json!({
            "address": "+821011112222",
            "code": "12"
        }))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);

    let body: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(body["error_kind"], "InvalidInput");
}

#[actix_rt::test]
async fn test_health_endpoint() {
    let sender = Arc::new(CapturingSender::new());
    let state = build_state(sender);
    let app = test::init_service(
        App::new()
            .app_data(state)
            .configure(configure_routes::<InMemoryAttemptStore, NoopProfileStore>),
    )
    .await;

    let request = test::TestRequest::get().uri("/health").to_request();
    let response: serde_json::Value = test::call_and_read_body_json(&app, request).await;
    assert_eq!(response["status"], "healthy");
}
