//! Sabt-Forms WASM
//!
//! WebAssembly bindings for the sabt-forms validators. The exported names
//! match the helpers the frontend already imports, so swapping the module
//! in does not touch any form component.
//!
//! ```javascript
//! import { firstError, validateMobile, validateRequiredField } from 'sabt-forms-wasm';
//!
//! const error = firstError([
//!     validateRequiredField(name, 'نام را وارد کنید'),
//!     validateMobile(mobile),
//! ]);
//! ```

use std::collections::BTreeMap;

use sabt_forms_validation as core;
use sabt_forms_validation::{FieldRules, FormRules, Truthy};
use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::prelude::*;

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// A JS value judged with JavaScript's own truthiness rules
struct JsSelection<'a>(&'a JsValue);

impl Truthy for JsSelection<'_> {
    fn is_truthy(&self) -> bool {
        self.0.is_truthy()
    }
}

/// First non-empty message, `undefined` when every check passed
#[wasm_bindgen(js_name = firstError)]
pub fn first_error_js(errors: Vec<String>) -> Option<String> {
    core::first_error(&errors).map(str::to_string)
}

/// `null`/`undefined` count as an empty field
#[wasm_bindgen(js_name = validateRequiredField)]
pub fn validate_required_field_js(value: Option<String>, msg: Option<String>) -> String {
    core::validate_required_field(
        value.as_deref().unwrap_or(""),
        msg.as_deref().unwrap_or(""),
    )
}

/// `min_char` is a JS number: negative or NaN never fails, fractions round up
#[wasm_bindgen(js_name = validateLength)]
pub fn validate_length_js(value: Option<String>, min_char: f64, msg: Option<String>) -> String {
    core::validate_length(
        value.as_deref().unwrap_or(""),
        min_chars_from_js(min_char),
        msg.as_deref().unwrap_or(""),
    )
}

// `count < n` over integer counts is `count < ceil(n)`; NaN compares false
fn min_chars_from_js(min_char: f64) -> usize {
    if min_char.is_nan() || min_char <= 0.0 {
        0
    } else {
        min_char.ceil() as usize
    }
}

#[wasm_bindgen(js_name = validateMobile)]
pub fn validate_mobile_js(value: Option<String>, msg: Option<String>) -> String {
    core::validate_mobile(value.as_deref(), msg.as_deref())
}

#[wasm_bindgen(js_name = validatePhone)]
pub fn validate_phone_js(value: Option<String>, msg: Option<String>) -> String {
    core::validate_phone(value.as_deref(), msg.as_deref())
}

/// Any truthy value counts as a selection (`0`, `false`, `null` do not)
#[wasm_bindgen(js_name = validateGender)]
pub fn validate_gender_js(value: JsValue, msg: Option<String>) -> String {
    core::validate_gender(JsSelection(&value), msg.as_deref())
}

#[wasm_bindgen(js_name = validateAccountType)]
pub fn validate_account_type_js(value: JsValue, msg: Option<String>) -> String {
    core::validate_account_type(JsSelection(&value), msg.as_deref())
}

/// Validate a single field value against a rules object
///
/// # Example (JavaScript)
/// ```javascript
/// const error = validateField('0912', { kind: 'mobile', required: true });
/// ```
///
/// Returns the first failure message or `""`.
#[wasm_bindgen(js_name = validateField)]
pub fn validate_field(value: Option<String>, rules: JsValue) -> Result<String, JsValue> {
    let rules: FieldRules = serde_wasm_bindgen::from_value(rules)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse rules: {}", e)))?;
    rules
        .verify("value")
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    Ok(rules.first(value.as_deref()).unwrap_or_default())
}

/// Validate a whole form
///
/// `values` maps field names to their current text (`null` or a missing key
/// means absent); `rules` maps field names to rules objects. Returns a plain
/// object holding the first message of every failing field.
#[wasm_bindgen(js_name = validateForm)]
pub fn validate_form(values: JsValue, rules: JsValue) -> Result<JsValue, JsValue> {
    let values: BTreeMap<String, Option<String>> = serde_wasm_bindgen::from_value(values)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse values: {}", e)))?;

    let rules: FormRules = serde_wasm_bindgen::from_value(rules)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse rules: {}", e)))?;
    let rules = rules
        .verify()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let errors = rules.validate_with(|name| values.get(name).and_then(|v| v.as_deref()));

    Ok(errors.serialize(&Serializer::json_compatible())?)
}
