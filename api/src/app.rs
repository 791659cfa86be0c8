//! Application factory
//!
//! Builds the actix-web application with middleware, routes, and shared
//! state. The factory is used both by the binary and by integration tests.

use actix_web::{body::MessageBody, middleware::Logger, web, App, HttpResponse};

use otp_shared::config::ServerConfig;

use crate::dto::OtpResponse;
use crate::middleware::cors::create_cors;
use crate::routes::otp::{send_otp, verify_otp, AppState};

/// Create and configure the application
pub fn create_app(
    state: web::Data<AppState>,
    config: &ServerConfig,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let cors = create_cors(config);

    App::new()
        .app_data(state)
        .wrap(Logger::default())
        .wrap(cors)
        // Health check
        .route("/", web::get().to(liveness))
        // OTP endpoints
        .route("/send-otp", web::post().to(send_otp))
        .route("/verify-otp", web::post().to(verify_otp))
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Plain-text liveness probe
async fn liveness() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("OTP relay is running")
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(OtpResponse::failure("The requested resource was not found"))
}
