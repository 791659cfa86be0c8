//! Handler for `POST /send-otp`

use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use otp_shared::phone::mask_phone;

use crate::dto::{OtpResponse, SendOtpRequest};
use crate::handlers::error::to_response;

use super::AppState;

/// Dispatches an OTP to the given phone number and records the pending
/// challenge.
///
/// # Request body
///
/// ```json
/// { "phone": "9876543210" }
/// ```
///
/// # Responses
///
/// - 200: `{ "success": true, "message": "OTP sent" }`
/// - 400: missing or malformed phone number
/// - 500: provider or credential failure (generic message)
pub async fn send_otp(
    state: web::Data<AppState>,
    request: web::Json<SendOtpRequest>,
) -> HttpResponse {
    let request_id = Uuid::new_v4();

    if let Err(errors) = request.validate() {
        log::warn!("[{}] send-otp validation failed: {}", request_id, errors);
        return HttpResponse::BadRequest().json(OtpResponse::failure("Phone number is required"));
    }

    log::info!(
        "[{}] send-otp requested for {}",
        request_id,
        mask_phone(&request.phone)
    );

    match state.verification.start_verification(&request.phone).await {
        Ok(()) => {
            log::info!("[{}] OTP sent to {}", request_id, mask_phone(&request.phone));
            HttpResponse::Ok().json(OtpResponse::ok("OTP sent"))
        }
        Err(error) => {
            log::error!(
                "[{}] send-otp failed for {}: {}",
                request_id,
                mask_phone(&request.phone),
                error
            );
            to_response(&error, "Failed to send OTP")
        }
    }
}
