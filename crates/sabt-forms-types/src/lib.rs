//! Validated field types for sabt-forms
//!
//! Newtype wrappers built with `nutype`. A value that exists is already
//! valid, so handlers past the form boundary can take `MobileNumber` instead
//! of re-checking a `String`.
//!
//! The predicates are the ones the field validators use, so a value accepted
//! by `validate_mobile` always constructs a `MobileNumber` and vice versa.
//!
//! # Example
//!
//! ```rust
//! use sabt_forms_types::{MobileNumber, RequiredText};
//!
//! let mobile = MobileNumber::try_new("09123456789".to_string()).unwrap();
//! assert_eq!(mobile.as_ref(), "09123456789");
//!
//! let name = RequiredText::try_new("  سارا ".to_string()).unwrap();
//! assert_eq!(name.as_ref(), "سارا");
//!
//! assert!(RequiredText::try_new("   ".to_string()).is_err());
//! ```

use nutype::nutype;
use sabt_forms_validation::{is_mobile_number, is_phone_number, trim_whitespace};

/// Local-format mobile number: `09` followed by nine digits
#[nutype(
    validate(predicate = is_mobile_number),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        TryFrom,
        Into,
        Deref,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct MobileNumber(String);

/// Local-format landline number: `0` followed by ten digits
#[nutype(
    validate(predicate = is_phone_number),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        TryFrom,
        Into,
        Deref,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct PhoneNumber(String);

/// Text that is non-empty once surrounding whitespace is trimmed
///
/// The stored value is the trimmed text.
#[nutype(
    sanitize(with = trim_owned),
    validate(not_empty),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        TryFrom,
        Into,
        Deref,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct RequiredText(String);

// nutype's `trim` only knows `char::is_whitespace`; this also drops the BOM
fn trim_owned(s: String) -> String {
    trim_whitespace(&s).to_string()
}
