//! Upstream provider contract

use async_trait::async_trait;

use crate::errors::ProviderError;

use super::types::{DispatchedOtp, VerificationOutcome};

/// Contract for the upstream OTP provider.
///
/// Implementations live in the infra crate (a real HTTP client and a mock
/// for development). The trait is object-safe so the service can hold a
/// `dyn` provider chosen at startup.
#[async_trait]
pub trait OtpProviderTrait: Send + Sync {
    /// Request OTP dispatch for a phone number.
    ///
    /// Returns the opaque verification handle together with the auth token
    /// that was used, so the caller can snapshot it for later validation.
    ///
    /// # Errors
    ///
    /// * `ProviderError::Auth` - a valid credential could not be obtained
    /// * `ProviderError::Upstream` - the send call failed or returned no handle
    async fn dispatch_otp(
        &self,
        country_code: &str,
        phone: &str,
    ) -> Result<DispatchedOtp, ProviderError>;

    /// Submit a code for validation against a previous dispatch.
    ///
    /// `auth_token` is the credential snapshot taken at dispatch time.
    ///
    /// # Errors
    ///
    /// * `ProviderError::Upstream` - transport or HTTP failure; a rejected
    ///   code is not an error, it is `VerificationOutcome::Failed`
    async fn validate_otp(
        &self,
        country_code: &str,
        phone: &str,
        verification_id: &str,
        auth_token: &str,
        code: &str,
    ) -> Result<VerificationOutcome, ProviderError>;
}
