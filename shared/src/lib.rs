//! Shared utilities and configuration for the OTP relay server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - Phone number utilities (normalization, validation, masking)

pub mod config;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::ServerConfig;
pub use utils::phone;
