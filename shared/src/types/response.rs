//! API response envelope types

use serde::Serialize;

/// Uniform response envelope for the verification API
///
/// Success responses carry `ok: true` plus the flattened payload;
/// failure responses carry `ok: false` plus a stable `error_kind`
/// string the client can branch on.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    /// Whether the operation succeeded
    pub ok: bool,

    /// Operation payload, flattened into the envelope on success
    #[serde(flatten)]
    pub data: Option<T>,

    /// Machine-readable error kind on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Build a success envelope around a payload
    pub fn success(data: T) -> Self {
        Self {
            ok: true,
            data: Some(data),
            error_kind: None,
        }
    }
}

impl ApiResponse<()> {
    /// Build a failure envelope with the given error kind
    pub fn failure(kind: impl Into<String>) -> Self {
        Self {
            ok: false,
            data: None,
            error_kind: Some(kind.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Payload {
        expires_in_seconds: i64,
    }

    #[test]
    fn test_success_envelope_flattens_payload() {
        let body = serde_json::to_value(ApiResponse::success(Payload {
            expires_in_seconds: 300,
        }))
        .unwrap();

        assert_eq!(body["ok"], true);
        assert_eq!(body["expires_in_seconds"], 300);
        assert!(body.get("error_kind").is_none());
    }

    #[test]
    fn test_failure_envelope_carries_kind() {
        let body = serde_json::to_value(ApiResponse::failure("CodeExpired")).unwrap();

        assert_eq!(body["ok"], false);
        assert_eq!(body["error_kind"], "CodeExpired");
    }
}
