//! Verification service module
//!
//! Tracks at most one outstanding OTP challenge per phone number and relays
//! dispatch and validation to the upstream provider:
//!
//! - **PendingStore**: in-memory map with per-entry timer-based expiry
//! - **VerificationService**: orchestrates normalize, dispatch, store, validate
//! - **OtpProviderTrait**: the contract an upstream provider client fulfils

pub mod config;
pub mod service;
pub mod store;
pub mod traits;
pub mod types;

pub use config::VerificationConfig;
pub use service::VerificationService;
pub use store::PendingStore;
pub use traits::OtpProviderTrait;
pub use types::{DispatchedOtp, VerificationOutcome};

#[cfg(test)]
mod tests;
