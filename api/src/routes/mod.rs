//! HTTP routes

pub mod otp;
