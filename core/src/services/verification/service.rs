//! Main verification service implementation

use constant_time_eq::constant_time_eq;
use rand::rngs::OsRng;
use rand::RngCore;
use std::sync::Arc;

use cl_shared::utils::address::{mask_address, normalize_address};

use crate::domain::entities::verification_attempt::{VerificationAttempt, CODE_LENGTH};
use crate::errors::{VerificationError, VerificationResult};
use crate::repositories::attempt::AttemptStore;
use crate::repositories::profile::ProfileStore;
use crate::services::dispatch::ChannelRouter;
use crate::services::language::resolve_language;

use super::config::VerificationServiceConfig;
use super::types::{CheckOutcome, StartOutcome, StartRequest};

/// Verification service orchestrating issuance and validation of one-time
/// codes
///
/// Owns the per-address state machine: `NONE → PENDING → (VERIFIED |
/// EXPIRED)`. A verified attempt collapses straight back to `NONE` — the
/// durable effect lives in the external profile store, not here.
pub struct VerificationService<A, P>
where
    A: AttemptStore + ?Sized,
    P: ProfileStore + ?Sized,
{
    /// Store holding in-flight attempts
    store: Arc<A>,
    /// External profile store flagged after successful checks
    profile_store: Arc<P>,
    /// Router over per-channel message senders
    router: Arc<ChannelRouter>,
    /// Service configuration
    config: VerificationServiceConfig,
}

impl<A, P> VerificationService<A, P>
where
    A: AttemptStore + ?Sized,
    P: ProfileStore + ?Sized,
{
    /// Create a new verification service
    pub fn new(
        store: Arc<A>,
        profile_store: Arc<P>,
        router: Arc<ChannelRouter>,
        config: VerificationServiceConfig,
    ) -> Self {
        Self {
            store,
            profile_store,
            router,
            config,
        }
    }

    /// Issue and dispatch a verification code
    ///
    /// Normalizes the address, mints a code, resolves the message
    /// language, and dispatches over the requested channel. The attempt is
    /// written only after a successful dispatch, so an undelivered code
    /// never leaves an orphaned record. A live attempt for the same
    /// address is replaced wholesale; the newest code always wins.
    pub async fn start_verification(
        &self,
        request: StartRequest,
    ) -> VerificationResult<StartOutcome> {
        let raw = request.address.trim();
        if raw.is_empty() {
            return Err(VerificationError::InvalidInput {
                field: "address".to_string(),
            });
        }

        let address = normalize_address(raw);
        let code = Self::generate_secure_code();
        let nationality = request
            .nationality_hint
            .as_deref()
            .or(request.country_hint.as_deref());
        let language = resolve_language(nationality, &address);

        tracing::info!(
            address = %mask_address(&address),
            channel = %request.channel,
            language = %language,
            event = "otp_issue_requested",
            "issuing verification code"
        );

        let message_id = self
            .router
            .dispatch(request.channel, &address, &code, language)
            .await?;

        // Dispatch succeeded; only now does the attempt become visible.
        let attempt = VerificationAttempt::new(
            address.clone(),
            code,
            request.channel,
            self.config.code_ttl_seconds,
        );
        self.store.put(attempt).await.map_err(|error| {
            tracing::error!(
                address = %mask_address(&address),
                error = %error,
                event = "attempt_store_failed",
                "failed to persist verification attempt"
            );
            VerificationError::Internal {
                message: format!("failed to persist verification attempt: {}", error),
            }
        })?;

        Ok(StartOutcome {
            expires_in_seconds: self.config.code_ttl_seconds,
            message_id,
        })
    }

    /// Validate a presented code against the stored attempt
    ///
    /// Normalization here matches `start_verification` exactly, so any raw
    /// form of the same address finds the same attempt. A matching code
    /// consumes the attempt; a mismatch leaves it intact for retry until
    /// expiry (unless a bounded attempt cap is configured).
    pub async fn check_verification(
        &self,
        raw_address: &str,
        presented_code: &str,
    ) -> VerificationResult<CheckOutcome> {
        let raw = raw_address.trim();
        if raw.is_empty() {
            return Err(VerificationError::InvalidInput {
                field: "address".to_string(),
            });
        }
        let presented = presented_code.trim();
        if presented.is_empty() {
            return Err(VerificationError::InvalidInput {
                field: "code".to_string(),
            });
        }

        let address = normalize_address(raw);

        let attempt = self
            .store
            .get(&address)
            .await
            .map_err(|error| {
                tracing::error!(
                    address = %mask_address(&address),
                    error = %error,
                    event = "attempt_load_failed",
                    "failed to load verification attempt"
                );
                VerificationError::Internal {
                    message: format!("failed to load verification attempt: {}", error),
                }
            })?;

        let mut attempt = match attempt {
            Some(attempt) => attempt,
            None => {
                tracing::info!(
                    address = %mask_address(&address),
                    event = "otp_not_found",
                    "no live verification attempt for address"
                );
                return Err(VerificationError::CodeNotFound);
            }
        };

        if attempt.is_expired() {
            if let Err(error) = self.store.delete(&address).await {
                tracing::warn!(
                    address = %mask_address(&address),
                    error = %error,
                    "failed to purge expired verification attempt"
                );
            }
            tracing::info!(
                address = %mask_address(&address),
                event = "otp_expired",
                "verification attempt expired"
            );
            return Err(VerificationError::CodeExpired);
        }

        if !Self::codes_match(&attempt.code, presented) {
            attempt.record_failed_attempt();
            tracing::warn!(
                address = %mask_address(&address),
                attempts = attempt.attempts,
                event = "otp_mismatch",
                "presented code does not match"
            );

            if let Some(limit) = self.config.max_attempts {
                if attempt.attempts >= limit {
                    tracing::warn!(
                        address = %mask_address(&address),
                        limit = limit,
                        event = "otp_attempts_exhausted",
                        "attempt cap reached; removing verification attempt"
                    );
                    let _ = self.store.delete(&address).await;
                } else {
                    let _ = self.store.put(attempt).await;
                }
            }

            return Err(VerificationError::CodeMismatch);
        }

        // Consume the attempt before reporting success so a replayed code
        // can never validate twice.
        self.store.delete(&address).await.map_err(|error| {
            tracing::error!(
                address = %mask_address(&address),
                error = %error,
                event = "attempt_consume_failed",
                "failed to consume verification attempt"
            );
            VerificationError::Internal {
                message: format!("failed to consume verification attempt: {}", error),
            }
        })?;

        if let Err(error) = self
            .profile_store
            .mark_verified(&address, attempt.channel)
            .await
        {
            tracing::warn!(
                address = %mask_address(&address),
                error = %error,
                event = "profile_update_failed",
                "address verified but profile flag update failed"
            );
        }

        tracing::info!(
            address = %mask_address(&address),
            channel = %attempt.channel,
            event = "otp_verified",
            "verification code accepted"
        );

        Ok(CheckOutcome { verified: true })
    }

    /// Generate a uniformly distributed 6-digit code from the OS CSPRNG
    pub fn generate_secure_code() -> String {
        let mut bytes = [0u8; 4];
        OsRng.fill_bytes(&mut bytes);
        // Modulo bias over a 32-bit draw is negligible for a 6-digit range
        let code = u32::from_le_bytes(bytes) % 1_000_000;
        format!("{:0width$}", code, width = CODE_LENGTH)
    }

    /// Constant-time comparison of the stored and presented codes
    fn codes_match(stored: &str, presented: &str) -> bool {
        stored.len() == presented.len() && constant_time_eq(stored.as_bytes(), presented.as_bytes())
    }
}
