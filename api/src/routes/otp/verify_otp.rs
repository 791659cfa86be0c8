//! Handler for `POST /verify-otp`

use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use otp_shared::phone::mask_phone;

use crate::dto::{OtpResponse, VerifyOtpRequest};
use crate::handlers::error::to_response;

use super::AppState;

/// Validates a submitted code against the pending challenge for the phone
/// number. The challenge is consumed on success only; a wrong code leaves it
/// in place for a retry within the expiry window.
///
/// # Request body
///
/// ```json
/// { "phone": "9876543210", "otp": "123456" }
/// ```
///
/// # Responses
///
/// - 200: `{ "success": true, "message": "OTP verified" }`
/// - 400: missing phone or OTP
/// - 401: no pending challenge ("OTP expired or not sent") or wrong code
///   ("Invalid OTP")
/// - 500: provider failure (generic message)
pub async fn verify_otp(
    state: web::Data<AppState>,
    request: web::Json<VerifyOtpRequest>,
) -> HttpResponse {
    let request_id = Uuid::new_v4();

    if let Err(errors) = request.validate() {
        log::warn!("[{}] verify-otp validation failed: {}", request_id, errors);
        return HttpResponse::BadRequest()
            .json(OtpResponse::failure("Phone number and OTP are required"));
    }

    log::info!(
        "[{}] verify-otp requested for {}",
        request_id,
        mask_phone(&request.phone)
    );

    match state
        .verification
        .confirm_verification(&request.phone, &request.otp)
        .await
    {
        Ok(()) => {
            log::info!(
                "[{}] OTP verified for {}",
                request_id,
                mask_phone(&request.phone)
            );
            HttpResponse::Ok().json(OtpResponse::ok("OTP verified"))
        }
        Err(error) => {
            log::warn!(
                "[{}] verify-otp failed for {}: {}",
                request_id,
                mask_phone(&request.phone),
                error
            );
            to_response(&error, "Failed to verify OTP")
        }
    }
}
