//! Verification service configuration

use std::env;

/// Configuration for the verification service
#[derive(Debug, Clone)]
pub struct VerificationConfig {
    /// Country calling code forwarded to the provider with every dispatch
    /// and validation call (digits only, no `+`)
    pub country_code: String,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            country_code: String::from("91"),
        }
    }
}

impl VerificationConfig {
    /// Load configuration from environment variables
    ///
    /// `DEFAULT_COUNTRY_CODE` overrides the country calling code.
    pub fn from_env() -> Self {
        let country_code =
            env::var("DEFAULT_COUNTRY_CODE").unwrap_or_else(|_| "91".to_string());
        Self { country_code }
    }
}
