use actix_web::{web, HttpServer};
use log::info;
use std::sync::Arc;

use otp_api::app::create_app;
use otp_api::routes::otp::AppState;
use otp_core::services::verification::{PendingStore, VerificationConfig, VerificationService};
use otp_infra::create_otp_provider;
use otp_shared::config::ServerConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting OTP relay server");

    let server_config = ServerConfig::from_env();
    let verification_config = VerificationConfig::from_env();

    // Wire the provider, the pending store, and the service
    let provider = create_otp_provider();
    let service = Arc::new(VerificationService::new(
        provider,
        PendingStore::new(),
        verification_config,
    ));

    let bind_address = server_config.bind_address();
    info!("Server will bind to: {}", bind_address);

    let state = web::Data::new(AppState {
        verification: service,
    });

    HttpServer::new(move || create_app(state.clone(), &server_config))
        .bind(&bind_address)?
        .run()
        .await
}
