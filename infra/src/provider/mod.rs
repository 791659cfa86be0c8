//! OTP provider module
//!
//! Provider clients implementing OTP dispatch and validation:
//!
//! - **Message Central**: production client against the Message Central
//!   verification REST API, with process-wide auth token caching
//! - **Mock**: console-logging implementation for development and testing

use std::env;
use std::sync::Arc;

use otp_core::services::verification::OtpProviderTrait;

pub mod message_central;
pub mod mock;

pub use message_central::{MessageCentralConfig, MessageCentralProvider};
pub use mock::MockOtpProvider;

/// Create an OTP provider based on environment configuration.
///
/// `OTP_PROVIDER` selects the implementation (`message-central` is the
/// default, `mock` forces the mock). When Message Central credentials are
/// missing or incomplete the mock is used as a fallback so the server stays
/// runnable in development.
pub fn create_otp_provider() -> Arc<dyn OtpProviderTrait> {
    let provider = env::var("OTP_PROVIDER").unwrap_or_else(|_| "message-central".to_string());

    match provider.as_str() {
        "mock" => Arc::new(MockOtpProvider::new()),
        "message-central" => match MessageCentralConfig::from_env() {
            Ok(config) => Arc::new(MessageCentralProvider::new(config)),
            Err(e) => {
                tracing::error!("Failed to load Message Central configuration: {}", e);
                tracing::warn!("Falling back to mock OTP provider");
                Arc::new(MockOtpProvider::new())
            }
        },
        other => {
            tracing::warn!("Unknown OTP provider '{}', using mock implementation", other);
            Arc::new(MockOtpProvider::new())
        }
    }
}
