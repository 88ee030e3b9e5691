//! Domain-specific error types and error handling.
//!
//! All verification errors are client-facing and user-recoverable; message
//! text is English only, with internationalization left to the presentation
//! layer.

use thiserror::Error;

use crate::domain::entities::verification_attempt::Channel;

/// Errors produced by the verification engine
#[derive(Error, Debug)]
pub enum VerificationError {
    /// Missing or malformed caller input; reported before any side effect
    #[error("Invalid input: {field}")]
    InvalidInput { field: String },

    /// The delivery provider rejected or timed out sending the message
    #[error("Failed to dispatch verification code via {channel}")]
    DispatchFailed { channel: Channel },

    /// No live attempt exists for the address (never sent, already
    /// consumed, or expired and reaped)
    #[error("Verification code not found")]
    CodeNotFound,

    /// An attempt existed but its time-to-live has elapsed
    #[error("Verification code expired")]
    CodeExpired,

    /// The presented code differs from the issued code
    #[error("Verification code mismatch")]
    CodeMismatch,

    /// Infrastructure fault; logged with full context and surfaced
    /// generically without leaking internals
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl VerificationError {
    /// Stable machine-readable kind for API responses
    pub fn kind(&self) -> &'static str {
        match self {
            VerificationError::InvalidInput { .. } => "InvalidInput",
            VerificationError::DispatchFailed { .. } => "DispatchFailed",
            VerificationError::CodeNotFound => "CodeNotFound",
            VerificationError::CodeExpired => "CodeExpired",
            VerificationError::CodeMismatch => "CodeMismatch",
            VerificationError::Internal { .. } => "InternalError",
        }
    }

    /// Whether the error represents a server-side fault rather than a
    /// caller-correctable condition
    pub fn is_internal(&self) -> bool {
        matches!(self, VerificationError::Internal { .. })
    }
}

pub type VerificationResult<T> = Result<T, VerificationError>;
