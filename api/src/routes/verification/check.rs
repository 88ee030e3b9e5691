//! Handler for POST /api/v1/verification/verify-code

use actix_web::{web, HttpResponse};
use validator::Validate;

use cl_core::errors::VerificationError;
use cl_core::repositories::attempt::AttemptStore;
use cl_core::repositories::profile::ProfileStore;
use cl_shared::types::response::ApiResponse;

use crate::app::AppState;
use crate::dto::verification::{CheckVerificationRequest, CheckVerificationResponse};
use crate::handlers::error::error_response;

/// Validate a presented verification code
///
/// # Request Body
///
/// ```json
/// { "address": "01012345678", "code": "123456" }
/// ```
///
/// # Response
///
/// ```json
/// { "ok": true, "verified": true }
/// ```
pub async fn check_verification<A, P>(
    state: web::Data<AppState<A, P>>,
    request: web::Json<CheckVerificationRequest>,
) -> HttpResponse
where
    A: AttemptStore + ?Sized + 'static,
    P: ProfileStore + ?Sized + 'static,
{
    let request = request.into_inner();

    if let Err(errors) = request.validate() {
        tracing::warn!(errors = %errors, "verify-code request failed validation");
        return error_response(&VerificationError::InvalidInput {
            field: "code".to_string(),
        });
    }

    match state
        .verification_service
        .check_verification(&request.address, &request.code)
        .await
    {
        Ok(outcome) => HttpResponse::Ok().json(ApiResponse::success(CheckVerificationResponse {
            verified: outcome.verified,
        })),
        Err(error) => error_response(&error),
    }
}
