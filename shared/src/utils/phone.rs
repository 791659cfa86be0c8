//! Phone number utilities

use once_cell::sync::Lazy;
use regex::Regex;

/// Length of a normalized national phone number
pub const NATIONAL_NUMBER_LENGTH: usize = 10;

// 10-digit national number, no leading zero
static NATIONAL_NUMBER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[1-9]\d{9}$").unwrap());

/// Normalize a phone number to its digits, dropping formatting characters
/// and any leading `+` country prefix markers
pub fn normalize_phone(phone: &str) -> String {
    phone.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Check whether a normalized phone number is a valid national number
pub fn is_valid_national_number(phone: &str) -> bool {
    NATIONAL_NUMBER_REGEX.is_match(phone)
}

/// Mask a phone number for logging, keeping only the last 4 digits
pub fn mask_phone(phone: &str) -> String {
    let digits = normalize_phone(phone);
    if digits.len() >= 7 {
        format!("***{}", &digits[digits.len() - 4..])
    } else {
        "****".to_string()
    }
}
