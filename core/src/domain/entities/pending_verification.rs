//! Pending verification entity

use chrono::{DateTime, Utc};

/// An outstanding, unconfirmed OTP challenge for one phone number.
///
/// Created when the upstream provider accepts a dispatch request and deleted
/// exactly once: on successful validation, on expiry, or implicitly when a
/// newer challenge for the same phone replaces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingVerification {
    /// Normalized phone number (digits only), the store key
    pub phone: String,

    /// Opaque handle issued by the provider for this specific dispatch;
    /// required to validate a code later
    pub verification_id: String,

    /// The provider auth token active at dispatch time. Validation reuses
    /// this snapshot even if the process-wide token has since rotated.
    pub auth_token: String,

    /// When the challenge was created
    pub created_at: DateTime<Utc>,
}

impl PendingVerification {
    /// Create a new pending verification for a normalized phone number
    pub fn new(
        phone: impl Into<String>,
        verification_id: impl Into<String>,
        auth_token: impl Into<String>,
    ) -> Self {
        Self {
            phone: phone.into(),
            verification_id: verification_id.into(),
            auth_token: auth_token.into(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_pending_verification() {
        let pending = PendingVerification::new("9876543210", "ver-1", "token-a");
        assert_eq!(pending.phone, "9876543210");
        assert_eq!(pending.verification_id, "ver-1");
        assert_eq!(pending.auth_token, "token-a");
        assert!(pending.created_at <= Utc::now());
    }
}
