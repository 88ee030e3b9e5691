//! Request and response types for the verification endpoints
//!
//! The send-code endpoint accepts two wire shapes: the current one and
//! the legacy `{phone, country_code}` shape still sent by older mobile
//! clients. Both are normalized into the single internal `StartRequest`
//! before the service sees them.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use cl_core::domain::entities::verification_attempt::Channel;
use cl_core::services::verification::StartRequest;

/// Current request shape for issuing a verification code
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct StartVerificationRequest {
    /// Phone number (any recognizable raw form) or email address
    #[validate(length(min = 3, max = 254))]
    pub address: String,

    /// Delivery channel
    pub channel: Channel,

    /// Optional country hint from the caller's form
    #[serde(default)]
    pub country: Option<String>,

    /// Optional nationality hint for message-language selection
    #[serde(default)]
    pub nationality: Option<String>,
}

/// Legacy request shape kept for older mobile clients
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LegacySendCodeRequest {
    /// Phone number without country code, or full E.164 format
    #[validate(length(min = 7, max = 16))]
    pub phone: String,

    /// Country code with or without '+' prefix
    #[validate(length(min = 1, max = 5))]
    pub country_code: String,
}

/// Either request shape accepted by the send-code endpoint
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SendCodePayload {
    Modern(StartVerificationRequest),
    Legacy(LegacySendCodeRequest),
}

impl SendCodePayload {
    /// Validate whichever shape was received
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        match self {
            SendCodePayload::Modern(request) => request.validate(),
            SendCodePayload::Legacy(request) => request.validate(),
        }
    }

    /// Normalize both shapes into the canonical service request
    ///
    /// Legacy clients always requested SMS delivery; their raw national
    /// number goes straight to the engine's normalizer and the country
    /// code survives only as a language hint.
    pub fn into_start_request(self) -> StartRequest {
        match self {
            SendCodePayload::Modern(request) => StartRequest {
                address: request.address,
                channel: request.channel,
                country_hint: request.country,
                nationality_hint: request.nationality,
            },
            SendCodePayload::Legacy(request) => StartRequest {
                address: request.phone,
                channel: Channel::Sms,
                country_hint: Some(request.country_code),
                nationality_hint: None,
            },
        }
    }
}

/// Request to validate a presented code
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CheckVerificationRequest {
    /// Address the code was sent to, in any recognizable raw form
    #[validate(length(min = 3, max = 254))]
    pub address: String,

    /// 6-digit verification code
    #[validate(length(equal = 6))]
    pub code: String,
}

/// Success payload of the send-code endpoint
#[derive(Debug, Clone, Serialize)]
pub struct StartVerificationResponse {
    /// Seconds until the issued code expires
    pub expires_in_seconds: i64,
}

/// Success payload of the verify-code endpoint
#[derive(Debug, Clone, Serialize)]
pub struct CheckVerificationResponse {
    /// Whether the address is now verified
    pub verified: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modern_shape_deserializes() {
        let payload: SendCodePayload = serde_json::from_str(
            r#"{"address": "01012345678", "channel": "sms", "nationality": "KR"}"#,
        )
        .unwrap();

        let request = payload.into_start_request();
        assert_eq!(request.address, "01012345678");
        assert_eq!(request.channel, Channel::Sms);
        assert_eq!(request.nationality_hint.as_deref(), Some("KR"));
    }

    #[test]
    fn test_legacy_shape_deserializes() {
        let payload: SendCodePayload =
            serde_json::from_str(r#"{"phone": "01012345678", "country_code": "+82"}"#).unwrap();

        assert!(payload.validate().is_ok());
        let request = payload.into_start_request();
        assert_eq!(request.address, "01012345678");
        assert_eq!(request.channel, Channel::Sms);
        assert_eq!(request.country_hint.as_deref(), Some("+82"));
    }

    #[test]
    fn test_modern_shape_with_email_channel() {
        let payload: SendCodePayload =
            serde_json::from_str(r#"{"address": "ana@empresa.mx", "channel": "email"}"#).unwrap();

        let request = payload.into_start_request();
        assert_eq!(request.channel, Channel::Email);
        assert!(request.country_hint.is_none());
    }

    #[test]
    fn test_validation_rejects_short_phone() {
        let payload: SendCodePayload =
            serde_json::from_str(r#"{"phone": "123", "country_code": "+82"}"#).unwrap();
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_check_request_requires_six_digit_code() {
        let request = CheckVerificationRequest {
            address: "+821012345678".to_string(),
            code: "123".to_string(),
        };
        assert!(request.validate().is_err());

        let request = CheckVerificationRequest {
            address: "+821012345678".to_string(),
            code: "123456".to_string(),
        };
        assert!(request.validate().is_ok());
    }
}
