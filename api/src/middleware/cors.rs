//! CORS middleware configuration
//!
//! Origins come from the server configuration (`ALLOWED_ORIGINS`). With no
//! configured origins the policy is permissive, which keeps local frontend
//! development working without extra setup.

use actix_cors::Cors;
use actix_web::http::{header, Method};

use otp_shared::config::ServerConfig;

/// Creates a CORS middleware instance for the given server configuration
pub fn create_cors(config: &ServerConfig) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
        ])
        .max_age(3600);

    if config.allowed_origins.is_empty() {
        log::info!("CORS: no ALLOWED_ORIGINS configured, allowing any origin");
        cors.allow_any_origin()
    } else {
        config.allowed_origins.iter().fold(cors, |cors, origin| {
            log::info!("CORS: allowing origin {}", origin);
            cors.allowed_origin(origin)
        })
    }
}
