//! Types for provider dispatch and validation results

/// Result of a successful OTP dispatch at the provider
#[derive(Debug, Clone)]
pub struct DispatchedOtp {
    /// Opaque verification handle identifying this dispatch
    pub verification_id: String,
    /// The provider auth token used for the dispatch, carried alongside so
    /// validation can reuse it
    pub auth_token: String,
}

/// Outcome of submitting a code to the provider for validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationOutcome {
    /// The provider confirmed the code
    Completed,
    /// The provider rejected the code
    Failed,
}
