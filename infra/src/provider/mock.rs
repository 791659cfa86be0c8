//! Mock OTP provider
//!
//! A mock implementation of the provider contract for development and
//! testing. Dispatches are logged instead of hitting the network and the
//! fixed development code `123456` validates successfully.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{info, warn};

use otp_core::errors::ProviderError;
use otp_core::services::verification::{DispatchedOtp, OtpProviderTrait, VerificationOutcome};
use otp_shared::phone::mask_phone;

/// The code the mock provider accepts
pub const MOCK_ACCEPTED_CODE: &str = "123456";

/// Mock OTP provider for development and testing
///
/// This implementation:
/// - Logs dispatches to the console instead of sending SMS
/// - Issues sequential mock verification handles
/// - Accepts the fixed development code
/// - Can simulate failures for testing
#[derive(Clone)]
pub struct MockOtpProvider {
    /// Counter for tracking the number of dispatches
    dispatch_count: Arc<AtomicU64>,
    /// Whether to simulate provider failures
    simulate_failure: bool,
}

impl MockOtpProvider {
    /// Create a new mock provider
    pub fn new() -> Self {
        Self {
            dispatch_count: Arc::new(AtomicU64::new(0)),
            simulate_failure: false,
        }
    }

    /// Create a mock provider that fails every call
    pub fn failing() -> Self {
        Self {
            dispatch_count: Arc::new(AtomicU64::new(0)),
            simulate_failure: true,
        }
    }

    /// Get the total number of dispatches requested
    pub fn dispatch_count(&self) -> u64 {
        self.dispatch_count.load(Ordering::SeqCst)
    }
}

impl Default for MockOtpProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OtpProviderTrait for MockOtpProvider {
    async fn dispatch_otp(
        &self,
        country_code: &str,
        phone: &str,
    ) -> Result<DispatchedOtp, ProviderError> {
        if self.simulate_failure {
            warn!(
                phone = %mask_phone(phone),
                "mock provider simulating dispatch failure"
            );
            return Err(ProviderError::Upstream(
                "simulated dispatch failure".to_string(),
            ));
        }

        let n = self.dispatch_count.fetch_add(1, Ordering::SeqCst) + 1;
        let verification_id = format!("mock-{n}");

        info!(
            provider = "mock",
            phone = %mask_phone(phone),
            country_code = country_code,
            verification_id = %verification_id,
            accepted_code = MOCK_ACCEPTED_CODE,
            "OTP dispatch (mock), no SMS sent"
        );

        Ok(DispatchedOtp {
            verification_id,
            auth_token: "mock-token".to_string(),
        })
    }

    async fn validate_otp(
        &self,
        _country_code: &str,
        phone: &str,
        verification_id: &str,
        _auth_token: &str,
        code: &str,
    ) -> Result<VerificationOutcome, ProviderError> {
        if self.simulate_failure {
            return Err(ProviderError::Upstream(
                "simulated validation failure".to_string(),
            ));
        }

        let outcome = if code == MOCK_ACCEPTED_CODE {
            VerificationOutcome::Completed
        } else {
            VerificationOutcome::Failed
        };

        info!(
            provider = "mock",
            phone = %mask_phone(phone),
            verification_id = %verification_id,
            outcome = ?outcome,
            "OTP validation (mock)"
        );

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_dispatch_issues_sequential_handles() {
        let provider = MockOtpProvider::new();

        let first = provider.dispatch_otp("91", "9876543210").await.unwrap();
        let second = provider.dispatch_otp("91", "9876543210").await.unwrap();

        assert_eq!(first.verification_id, "mock-1");
        assert_eq!(second.verification_id, "mock-2");
        assert_eq!(provider.dispatch_count(), 2);
    }

    #[tokio::test]
    async fn test_validate_accepts_development_code() {
        let provider = MockOtpProvider::new();
        let outcome = provider
            .validate_otp("91", "9876543210", "mock-1", "mock-token", MOCK_ACCEPTED_CODE)
            .await
            .unwrap();
        assert_eq!(outcome, VerificationOutcome::Completed);
    }

    #[tokio::test]
    async fn test_validate_rejects_other_codes() {
        let provider = MockOtpProvider::new();
        let outcome = provider
            .validate_otp("91", "9876543210", "mock-1", "mock-token", "000000")
            .await
            .unwrap();
        assert_eq!(outcome, VerificationOutcome::Failed);
    }

    #[tokio::test]
    async fn test_failing_provider_errors() {
        let provider = MockOtpProvider::failing();
        let result = provider.dispatch_otp("91", "9876543210").await;
        assert!(matches!(result, Err(ProviderError::Upstream(_))));
    }
}
