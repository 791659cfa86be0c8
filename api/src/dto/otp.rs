//! OTP endpoint DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for `POST /send-otp`
#[derive(Debug, Deserialize, Validate)]
pub struct SendOtpRequest {
    /// Phone number, free-form; normalized server-side
    #[validate(length(min = 1, message = "Phone number is required"))]
    pub phone: String,
}

/// Request body for `POST /verify-otp`
#[derive(Debug, Deserialize, Validate)]
pub struct VerifyOtpRequest {
    #[validate(length(min = 1, message = "Phone number is required"))]
    pub phone: String,

    /// The code the user received via SMS
    #[validate(length(min = 1, message = "OTP is required"))]
    pub otp: String,
}

/// Uniform response body for both OTP endpoints.
///
/// The provider's verification handle is deliberately never included;
/// it stays server-side.
#[derive(Debug, Serialize)]
pub struct OtpResponse {
    pub success: bool,
    pub message: String,
}

impl OtpResponse {
    /// Build a success response
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// Build a failure response
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}
