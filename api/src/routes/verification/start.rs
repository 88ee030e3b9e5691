//! Handler for POST /api/v1/verification/send-code

use actix_web::{web, HttpResponse};

use cl_core::errors::VerificationError;
use cl_core::repositories::attempt::AttemptStore;
use cl_core::repositories::profile::ProfileStore;
use cl_shared::types::response::ApiResponse;

use crate::app::AppState;
use crate::dto::verification::{SendCodePayload, StartVerificationResponse};
use crate::handlers::error::error_response;

/// Issue and dispatch a verification code
///
/// Accepts both the current request shape and the legacy
/// `{phone, country_code}` shape; see the DTO adapter.
///
/// # Request Body
///
/// ```json
/// { "address": "01012345678", "channel": "sms", "nationality": "KR" }
/// ```
///
/// # Response
///
/// ```json
/// { "ok": true, "expires_in_seconds": 300 }
/// ```
pub async fn start_verification<A, P>(
    state: web::Data<AppState<A, P>>,
    payload: web::Json<SendCodePayload>,
) -> HttpResponse
where
    A: AttemptStore + ?Sized + 'static,
    P: ProfileStore + ?Sized + 'static,
{
    let payload = payload.into_inner();

    if let Err(errors) = payload.validate() {
        tracing::warn!(errors = %errors, "send-code request failed validation");
        return error_response(&VerificationError::InvalidInput {
            field: "address".to_string(),
        });
    }

    let request = payload.into_start_request();

    match state.verification_service.start_verification(request).await {
        Ok(outcome) => HttpResponse::Ok().json(ApiResponse::success(StartVerificationResponse {
            expires_in_seconds: outcome.expires_in_seconds,
        })),
        Err(error) => error_response(&error),
    }
}
