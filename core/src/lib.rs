//! # OTP Relay Core
//!
//! Domain layer for the OTP relay backend. This crate contains the pending
//! verification store, the verification service, the upstream provider
//! contract, and the error types shared across the server.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
