//! Selection field validators
//!
//! These only check that something was selected. The selected value itself
//! is not compared against a list of options.

use crate::messages::{DEFAULT_ACCOUNT_TYPE_MESSAGE, DEFAULT_GENDER_MESSAGE};
use crate::truthy::Truthy;

fn require_selection<V: Truthy>(value: V, message: Option<&str>, default: &str) -> String {
    if value.is_truthy() {
        String::new()
    } else {
        message.unwrap_or(default).to_string()
    }
}

/// Returns the message when no gender is selected
///
/// `message` defaults to [`DEFAULT_GENDER_MESSAGE`].
pub fn validate_gender<V: Truthy>(value: V, message: Option<&str>) -> String {
    require_selection(value, message, DEFAULT_GENDER_MESSAGE)
}

/// Returns the message when no account type is selected
///
/// `message` defaults to [`DEFAULT_ACCOUNT_TYPE_MESSAGE`].
pub fn validate_account_type<V: Truthy>(value: V, message: Option<&str>) -> String {
    require_selection(value, message, DEFAULT_ACCOUNT_TYPE_MESSAGE)
}
