//! Configuration module
//!
//! Configuration is read from environment variables at startup. The upstream
//! provider settings live next to the provider client in the infra crate;
//! this module only covers the HTTP server surface.

pub mod server;

pub use server::ServerConfig;
