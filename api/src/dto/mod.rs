//! Data transfer objects for the verification API

pub mod verification;

pub use verification::*;
