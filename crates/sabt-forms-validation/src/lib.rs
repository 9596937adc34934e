//! Sabt-Forms-Validation Core
//!
//! Pure field validators for registration forms. Every validator returns an
//! empty string when the value passes and the failure message otherwise, so
//! form code can collect results and surface one of them with [`first_error`].
//!
//! ```
//! use sabt_forms_validation::{first_error, validate_mobile, validate_required_field};
//!
//! let errors = [
//!     validate_required_field("  ", "نام را وارد کنید"),
//!     validate_mobile(Some("0912"), None),
//! ];
//! assert_eq!(first_error(&errors), Some("نام را وارد کنید"));
//! ```
//!
//! Validators that ship a built-in (Persian) message take `Option<&str>`;
//! `None` selects the default from [`messages`].

pub mod choice;
pub mod errors;
pub mod messages;
pub mod phone;
pub mod text;
pub mod truthy;

#[cfg(feature = "rules")]
pub mod rules;

// Re-export all validators
pub use choice::*;
pub use errors::*;
pub use phone::*;
pub use text::*;
pub use truthy::Truthy;

#[cfg(feature = "rules")]
pub use rules::{FieldKind, FieldRules, FormErrors, FormRules, RulesError};
