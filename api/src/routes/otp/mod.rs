//! OTP routes

use std::sync::Arc;

use otp_core::services::verification::VerificationService;

pub mod send_otp;
pub mod verify_otp;

pub use send_otp::send_otp;
pub use verify_otp::verify_otp;

/// Application state shared by the OTP handlers
pub struct AppState {
    pub verification: Arc<VerificationService>,
}
