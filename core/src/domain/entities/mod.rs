//! Business entities for the verification engine.

pub mod verification_attempt;

pub use verification_attempt::{Channel, VerificationAttempt, CODE_LENGTH, CODE_TTL_SECONDS};
