//! Built-in failure messages (Persian)

/// Used by [`validate_mobile`](crate::validate_mobile) when no message is given
pub const DEFAULT_MOBILE_MESSAGE: &str = "شماره موبایل معتبر نیست";

/// Used by [`validate_phone`](crate::validate_phone) when no message is given
pub const DEFAULT_PHONE_MESSAGE: &str = "شماره تلفن معتبر نیست";

/// Used by [`validate_gender`](crate::validate_gender) when no message is given
pub const DEFAULT_GENDER_MESSAGE: &str = "جنسیت را انتخاب کنید";

/// Used by [`validate_account_type`](crate::validate_account_type) when no message is given
pub const DEFAULT_ACCOUNT_TYPE_MESSAGE: &str = "نوع حساب کاربری را انتخاب کنید";

/// Rule-layer message for a `required` field without a custom message
pub const DEFAULT_REQUIRED_MESSAGE: &str = "این فیلد الزامی است";

/// Rule-layer message for a `min_length` check without a custom message
pub fn default_min_length_message(min_chars: usize) -> String {
    format!("حداقل {} کاراکتر وارد کنید", min_chars)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_length_message_mentions_count() {
        assert_eq!(default_min_length_message(3), "حداقل 3 کاراکتر وارد کنید");
    }
}
