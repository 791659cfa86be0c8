//! Verification service implementation

use std::sync::Arc;
use tracing::{info, warn};

use otp_shared::phone::{is_valid_national_number, mask_phone, normalize_phone};

use crate::domain::entities::PendingVerification;
use crate::errors::{DomainError, DomainResult, ValidationError};

use super::config::VerificationConfig;
use super::store::PendingStore;
use super::traits::OtpProviderTrait;
use super::types::VerificationOutcome;

/// Service handling the start/confirm verification flow.
///
/// Holds the provider client and the pending store; handlers share one
/// instance behind an `Arc`.
pub struct VerificationService {
    /// Upstream provider client
    provider: Arc<dyn OtpProviderTrait>,
    /// Pending verification store
    store: PendingStore,
    /// Service configuration
    config: VerificationConfig,
}

impl VerificationService {
    /// Create a new verification service
    pub fn new(
        provider: Arc<dyn OtpProviderTrait>,
        store: PendingStore,
        config: VerificationConfig,
    ) -> Self {
        Self {
            provider,
            store,
            config,
        }
    }

    /// Start a verification: dispatch an OTP and record the pending challenge.
    ///
    /// The phone number is normalized to digits and must be a 10-digit
    /// national number. A previous pending challenge for the same phone is
    /// replaced; only the newest dispatch can be confirmed afterwards.
    pub async fn start_verification(&self, phone: &str) -> DomainResult<()> {
        let phone = Self::normalized_phone(phone)?;

        let dispatched = self
            .provider
            .dispatch_otp(&self.config.country_code, &phone)
            .await?;

        info!(
            phone = %mask_phone(&phone),
            verification_id = %dispatched.verification_id,
            event = "otp_dispatched",
            "OTP dispatched, challenge pending"
        );

        self.store.put(PendingVerification::new(
            phone,
            dispatched.verification_id,
            dispatched.auth_token,
        ));

        Ok(())
    }

    /// Confirm a verification: validate the submitted code against the
    /// pending challenge for this phone number.
    ///
    /// The pending entry is consumed only on success; a rejected code leaves
    /// it in place so the caller can retry within the expiry window.
    pub async fn confirm_verification(&self, phone: &str, code: &str) -> DomainResult<()> {
        let phone = Self::normalized_phone(phone)?;
        if code.trim().is_empty() {
            return Err(ValidationError::MissingOtp.into());
        }

        let pending = self
            .store
            .get(&phone)
            .ok_or(DomainError::OtpNotFoundOrExpired)?;

        let outcome = self
            .provider
            .validate_otp(
                &self.config.country_code,
                &phone,
                &pending.verification_id,
                &pending.auth_token,
                code,
            )
            .await?;

        match outcome {
            VerificationOutcome::Completed => {
                self.store.remove(&phone);
                info!(
                    phone = %mask_phone(&phone),
                    event = "otp_verified",
                    "OTP verified, challenge consumed"
                );
                Ok(())
            }
            VerificationOutcome::Failed => {
                warn!(
                    phone = %mask_phone(&phone),
                    event = "otp_rejected",
                    "provider rejected submitted code, challenge preserved"
                );
                Err(DomainError::InvalidOtp)
            }
        }
    }

    /// Access to the pending store, mainly for tests and introspection
    pub fn store(&self) -> &PendingStore {
        &self.store
    }

    fn normalized_phone(phone: &str) -> Result<String, ValidationError> {
        let digits = normalize_phone(phone);
        if digits.is_empty() {
            return Err(ValidationError::MissingPhone);
        }
        if !is_valid_national_number(&digits) {
            return Err(ValidationError::InvalidPhone);
        }
        Ok(digits)
    }
}
