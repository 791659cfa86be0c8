//! Verification service tests

mod mocks;
mod service_tests;
