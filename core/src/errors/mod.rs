//! Domain error types for the OTP relay
//!
//! Errors are split by trust boundary: `ValidationError` covers malformed
//! client input, `ProviderError` covers failures of the upstream verification
//! provider, and `DomainError` is the unified type handlers map to HTTP
//! responses. Upstream detail never crosses the handler boundary; it is
//! logged and replaced with a generic message.

use thiserror::Error;

/// Result type used by domain services
pub type DomainResult<T> = Result<T, DomainError>;

/// Client input validation errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Phone number is required")]
    MissingPhone,

    #[error("Phone number must be a valid 10-digit number")]
    InvalidPhone,

    #[error("OTP is required")]
    MissingOtp,
}

/// Failures of the upstream verification provider
#[derive(Error, Debug)]
pub enum ProviderError {
    /// A usable auth credential could not be obtained
    #[error("failed to obtain provider auth token: {0}")]
    Auth(String),

    /// The provider call itself failed (transport error, non-success HTTP
    /// status, or a response missing required fields)
    #[error("provider request failed: {0}")]
    Upstream(String),
}

/// Unified domain error handled at the API boundary
#[derive(Error, Debug)]
pub enum DomainError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Confirm was called for a phone with no pending verification,
    /// either because none was sent or because it already expired
    #[error("OTP expired or not sent")]
    OtpNotFoundOrExpired,

    /// The provider rejected the submitted code; the pending entry is
    /// preserved so the caller can retry within the expiry window
    #[error("Invalid OTP")]
    InvalidOtp,

    #[error(transparent)]
    Provider(#[from] ProviderError),
}
