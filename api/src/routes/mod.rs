//! API route handlers

pub mod verification;
