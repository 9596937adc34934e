//! Declarative rule sets
//!
//! A [`FormRules`] maps field names to [`FieldRules`] and can be written in
//! code or loaded from TOML/JSON, so the same rules drive server-side checks
//! and the WASM client.
//!
//! ```toml
//! [full_name]
//! required = true
//! minLength = 3
//!
//! [mobile]
//! kind = "mobile"
//! required = true
//! message = "شماره همراه را درست وارد کنید"
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::first_error;
use crate::messages::{default_min_length_message, DEFAULT_REQUIRED_MESSAGE};
use crate::{
    validate_account_type, validate_gender, validate_length, validate_mobile, validate_phone,
    validate_required_field,
};

/// Field name -> first failure message, for failing fields only
pub type FormErrors = BTreeMap<String, String>;

/// Errors raised while loading a rule set
#[derive(Debug, thiserror::Error)]
pub enum RulesError {
    #[error("invalid TOML rules: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid JSON rules: {0}")]
    Json(#[from] serde_json::Error),

    #[error("field '{field}': minLength must be at least 1")]
    ZeroMinLength { field: String },
}

/// What a field holds, selecting the format check applied to it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKind {
    /// Free text, no format check
    #[default]
    Text,
    Mobile,
    Phone,
    Gender,
    AccountType,
}

/// Validation rules for a single field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldRules {
    pub kind: FieldKind,

    pub required: bool,

    /// Minimum number of non-whitespace characters
    pub min_length: Option<usize>,

    /// Replaces every built-in message for this field
    pub message: Option<String>,
}

impl FieldRules {
    pub fn new(kind: FieldKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_length(mut self, min_chars: usize) -> Self {
        self.min_length = Some(min_chars);
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Runs every rule against `value` and returns the failure messages in
    /// order: required, then min length, then the kind's format check
    ///
    /// A failed `required` check stops evaluation. An optional field left
    /// empty passes without further checks.
    pub fn check(&self, value: Option<&str>) -> Vec<String> {
        let text = value.unwrap_or("");
        let message = self.message.as_deref();

        if self.required {
            let error =
                validate_required_field(text, message.unwrap_or(DEFAULT_REQUIRED_MESSAGE));
            if !error.is_empty() {
                return vec![error];
            }
        } else if text.is_empty() {
            return Vec::new();
        }

        let mut errors = Vec::new();

        if let Some(min) = self.min_length {
            let error = match message {
                Some(m) => validate_length(text, min, m),
                None => validate_length(text, min, &default_min_length_message(min)),
            };
            errors.push(error);
        }

        errors.push(match self.kind {
            FieldKind::Text => String::new(),
            FieldKind::Mobile => validate_mobile(value, message),
            FieldKind::Phone => validate_phone(value, message),
            FieldKind::Gender => validate_gender(value, message),
            FieldKind::AccountType => validate_account_type(value, message),
        });

        errors.retain(|e| !e.is_empty());
        errors
    }

    /// Rejects rules that could never behave as intended; `field` names the
    /// field in the error
    pub fn verify(&self, field: &str) -> Result<(), RulesError> {
        if self.min_length == Some(0) {
            return Err(RulesError::ZeroMinLength {
                field: field.to_string(),
            });
        }
        Ok(())
    }

    /// The first failure message for `value`, if any
    pub fn first(&self, value: Option<&str>) -> Option<String> {
        first_error(&self.check(value)).map(str::to_string)
    }
}

/// Rules for every field of a form, keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormRules {
    fields: BTreeMap<String, FieldRules>,
}

impl FormRules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, name: impl Into<String>, rules: FieldRules) -> Self {
        self.insert(name, rules);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, rules: FieldRules) -> Option<FieldRules> {
        self.fields.insert(name.into(), rules)
    }

    pub fn get(&self, name: &str) -> Option<&FieldRules> {
        self.fields.get(name)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldRules)> {
        self.fields.iter().map(|(name, rules)| (name.as_str(), rules))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Parses a rule set from TOML, one table per field
    pub fn from_toml_str(source: &str) -> Result<Self, RulesError> {
        let rules: Self = toml::from_str(source)?;
        rules.verify()
    }

    /// Parses a rule set from a JSON object keyed by field name
    pub fn from_json_str(source: &str) -> Result<Self, RulesError> {
        let rules: Self = serde_json::from_str(source)?;
        rules.verify()
    }

    /// Rejects rule sets that could never behave as intended
    ///
    /// Called by the `from_*_str` loaders; rules deserialized some other way
    /// should go through it too.
    pub fn verify(self) -> Result<Self, RulesError> {
        for (name, rules) in &self.fields {
            rules.verify(name)?;
        }

        tracing::debug!(fields = self.fields.len(), "loaded form rules");
        Ok(self)
    }

    /// Validates the submitted values; fields without a value count as absent
    pub fn validate(&self, values: &BTreeMap<String, String>) -> FormErrors {
        self.validate_with(|name| values.get(name).map(String::as_str))
    }

    /// Validates values fetched by field name through `value_of`
    pub fn validate_with<'v, F>(&self, mut value_of: F) -> FormErrors
    where
        F: FnMut(&str) -> Option<&'v str>,
    {
        let mut errors = FormErrors::new();

        for (name, rules) in &self.fields {
            let value = value_of(name);
            tracing::trace!(field = %name, present = value.is_some(), "checking field");

            if let Some(message) = rules.first(value) {
                tracing::debug!(field = %name, %message, "field failed validation");
                errors.insert(name.clone(), message);
            }
        }

        errors
    }
}
