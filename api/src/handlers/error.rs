//! Mapping from domain errors to HTTP responses
//!
//! Every error kind is client-facing and carried verbatim in the
//! `error_kind` field; internal faults are surfaced generically without
//! leaking details.

use actix_web::HttpResponse;

use cl_core::errors::VerificationError;
use cl_shared::types::response::ApiResponse;

/// Build the HTTP response for a verification error
pub fn error_response(error: &VerificationError) -> HttpResponse {
    let body = ApiResponse::failure(error.kind());

    match error {
        VerificationError::InvalidInput { .. } => HttpResponse::BadRequest().json(body),
        VerificationError::DispatchFailed { .. } => HttpResponse::BadGateway().json(body),
        VerificationError::CodeNotFound => HttpResponse::NotFound().json(body),
        VerificationError::CodeExpired => HttpResponse::Gone().json(body),
        VerificationError::CodeMismatch => HttpResponse::UnprocessableEntity().json(body),
        VerificationError::Internal { .. } => HttpResponse::InternalServerError().json(body),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn test_status_codes() {
        let cases = [
            (
                VerificationError::InvalidInput {
                    field: "address".to_string(),
                },
                StatusCode::BAD_REQUEST,
            ),
            (VerificationError::CodeNotFound, StatusCode::NOT_FOUND),
            (VerificationError::CodeExpired, StatusCode::GONE),
            (
                VerificationError::CodeMismatch,
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                VerificationError::Internal {
                    message: "x".to_string(),
                },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error_response(&error).status(), expected);
        }
    }
}
