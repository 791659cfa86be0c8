//! Mock provider for service tests

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use crate::errors::ProviderError;
use crate::services::verification::traits::OtpProviderTrait;
use crate::services::verification::types::{DispatchedOtp, VerificationOutcome};

/// Scripted provider: dispatch hands out sequential handles, validation
/// compares against a configured accepted code. Either call can be switched
/// to fail to exercise the error paths.
pub struct ScriptedProvider {
    dispatch_count: AtomicU64,
    accepted_code: String,
    fail_dispatch: Mutex<Option<ProviderError>>,
    fail_validate: Mutex<Option<ProviderError>>,
    /// Last (verification_id, auth_token) pair seen by validate_otp
    pub last_validation: Mutex<Option<(String, String)>>,
}

impl ScriptedProvider {
    pub fn accepting(code: &str) -> Self {
        Self {
            dispatch_count: AtomicU64::new(0),
            accepted_code: code.to_string(),
            fail_dispatch: Mutex::new(None),
            fail_validate: Mutex::new(None),
            last_validation: Mutex::new(None),
        }
    }

    pub fn fail_next_dispatch(&self, error: ProviderError) {
        *self.fail_dispatch.lock().unwrap() = Some(error);
    }

    pub fn fail_next_validate(&self, error: ProviderError) {
        *self.fail_validate.lock().unwrap() = Some(error);
    }

    pub fn dispatch_count(&self) -> u64 {
        self.dispatch_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl OtpProviderTrait for ScriptedProvider {
    async fn dispatch_otp(
        &self,
        _country_code: &str,
        _phone: &str,
    ) -> Result<DispatchedOtp, ProviderError> {
        if let Some(error) = self.fail_dispatch.lock().unwrap().take() {
            return Err(error);
        }
        let n = self.dispatch_count.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(DispatchedOtp {
            verification_id: format!("ver-{n}"),
            auth_token: format!("token-{n}"),
        })
    }

    async fn validate_otp(
        &self,
        _country_code: &str,
        _phone: &str,
        verification_id: &str,
        auth_token: &str,
        code: &str,
    ) -> Result<VerificationOutcome, ProviderError> {
        if let Some(error) = self.fail_validate.lock().unwrap().take() {
            return Err(error);
        }
        *self.last_validation.lock().unwrap() =
            Some((verification_id.to_string(), auth_token.to_string()));
        if code == self.accepted_code {
            Ok(VerificationOutcome::Completed)
        } else {
            Ok(VerificationOutcome::Failed)
        }
    }
}
