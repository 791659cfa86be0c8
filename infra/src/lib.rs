//! # OTP Relay Infrastructure
//!
//! Infrastructure layer for the OTP relay: upstream provider clients
//! implementing the `OtpProviderTrait` contract from the core crate.

pub mod provider;

pub use provider::{create_otp_provider, MessageCentralConfig, MessageCentralProvider, MockOtpProvider};
