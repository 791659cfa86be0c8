//! Mapping from domain errors to HTTP responses
//!
//! The mapping enforces the trust boundary: validation problems surface as
//! 400 with their own message, verification failures as 401 with messages
//! that distinguish "expired or not sent" from "wrong code", and provider
//! failures as a generic 500. Upstream detail is logged where the failure
//! happened and never reaches the response body.

use actix_web::HttpResponse;

use otp_core::errors::DomainError;

use crate::dto::OtpResponse;

/// Convert a domain error into the HTTP response for it.
///
/// `upstream_message` is the generic client-facing text used when the
/// upstream provider failed (the callers know whether a send or a verify
/// was in flight).
pub fn to_response(error: &DomainError, upstream_message: &str) -> HttpResponse {
    match error {
        DomainError::Validation(e) => {
            HttpResponse::BadRequest().json(OtpResponse::failure(e.to_string()))
        }
        DomainError::OtpNotFoundOrExpired | DomainError::InvalidOtp => {
            HttpResponse::Unauthorized().json(OtpResponse::failure(error.to_string()))
        }
        DomainError::Provider(_) => {
            HttpResponse::InternalServerError().json(OtpResponse::failure(upstream_message))
        }
    }
}
