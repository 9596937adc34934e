//! Mobile and landline number validators
//!
//! Numbers are in local format: eleven ASCII digits with a leading zero.
//! Mobile numbers start with `09`.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::messages::{DEFAULT_MOBILE_MESSAGE, DEFAULT_PHONE_MESSAGE};

// `[0-9]` rather than `\d`: the latter also matches Persian digits
static MOBILE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^09[0-9]{9}$").expect("mobile pattern is valid"));

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^0[0-9]{10}$").expect("phone pattern is valid"));

/// `09` followed by exactly nine digits
pub fn is_mobile_number(value: &str) -> bool {
    MOBILE_PATTERN.is_match(value)
}

/// `0` followed by exactly ten digits
pub fn is_phone_number(value: &str) -> bool {
    PHONE_PATTERN.is_match(value)
}

/// Returns the message when `value` is absent, empty or not a mobile number
///
/// `message` defaults to [`DEFAULT_MOBILE_MESSAGE`].
pub fn validate_mobile(value: Option<&str>, message: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() && is_mobile_number(v) => String::new(),
        _ => message.unwrap_or(DEFAULT_MOBILE_MESSAGE).to_string(),
    }
}

/// Returns the message when `value` is absent, empty or not a landline number
///
/// `message` defaults to [`DEFAULT_PHONE_MESSAGE`].
pub fn validate_phone(value: Option<&str>, message: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() && is_phone_number(v) => String::new(),
        _ => message.unwrap_or(DEFAULT_PHONE_MESSAGE).to_string(),
    }
}
