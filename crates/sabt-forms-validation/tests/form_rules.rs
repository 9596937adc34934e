//! Rule sets loaded from configuration and applied to a submitted form

use std::collections::BTreeMap;

use pretty_assertions::assert_eq;
use sabt_forms_validation::messages::{
    default_min_length_message, DEFAULT_MOBILE_MESSAGE, DEFAULT_REQUIRED_MESSAGE,
};
use sabt_forms_validation::{FieldKind, FieldRules, FormErrors, FormRules, RulesError};
use tracing_subscriber::filter::LevelFilter;

const SIGNUP_RULES: &str = r#"
[full_name]
required = true
minLength = 3

[mobile]
kind = "mobile"
required = true

[phone]
kind = "phone"
message = "شماره ثابت را درست وارد کنید"

[gender]
kind = "gender"

[account_type]
kind = "accountType"
required = true
message = "نوع حساب را مشخص کنید"
"#;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(LevelFilter::TRACE)
        .with_test_writer()
        .try_init();
}

fn values(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn loads_rules_from_toml() {
    init_tracing();
    let rules = FormRules::from_toml_str(SIGNUP_RULES).unwrap();

    assert_eq!(rules.len(), 5);
    assert_eq!(
        rules.get("full_name"),
        Some(&FieldRules::new(FieldKind::Text).required().min_length(3))
    );
    assert_eq!(
        rules.get("account_type"),
        Some(
            &FieldRules::new(FieldKind::AccountType)
                .required()
                .message("نوع حساب را مشخص کنید")
        )
    );
    assert_eq!(rules.get("missing"), None);
}

#[test]
fn valid_submission_has_no_errors() {
    init_tracing();
    let rules = FormRules::from_toml_str(SIGNUP_RULES).unwrap();

    let form = values(&[
        ("full_name", "مریم احمدی"),
        ("mobile", "09121234567"),
        ("phone", "02188776655"),
        ("gender", "female"),
        ("account_type", "personal"),
    ]);

    assert_eq!(rules.validate(&form), FormErrors::new());
}

#[test]
fn invalid_submission_reports_first_error_per_field() {
    init_tracing();
    let rules = FormRules::from_toml_str(SIGNUP_RULES).unwrap();

    let form = values(&[
        ("full_name", "a b"),
        ("mobile", "9121234567"),
        ("phone", "021"),
        ("gender", ""),
    ]);

    let expected: FormErrors = [
        ("account_type", "نوع حساب را مشخص کنید".to_string()),
        ("full_name", default_min_length_message(3)),
        ("mobile", DEFAULT_MOBILE_MESSAGE.to_string()),
        ("phone", "شماره ثابت را درست وارد کنید".to_string()),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
    .collect();

    assert_eq!(rules.validate(&form), expected);
}

#[test]
fn rules_built_in_code_match_json() {
    let json = r#"{
        "mobile": { "kind": "mobile", "required": true },
        "gender": { "kind": "gender", "required": true }
    }"#;

    let loaded = FormRules::from_json_str(json).unwrap();
    let built = FormRules::new()
        .with_field("mobile", FieldRules::new(FieldKind::Mobile).required())
        .with_field("gender", FieldRules::new(FieldKind::Gender).required());

    assert_eq!(loaded, built);
    assert_eq!(
        loaded.fields().map(|(name, _)| name).collect::<Vec<_>>(),
        vec!["gender", "mobile"]
    );
}

#[test]
fn validate_with_reads_values_through_a_lookup() {
    let rules = FormRules::new()
        .with_field("mobile", FieldRules::new(FieldKind::Mobile).required())
        .with_field("gender", FieldRules::new(FieldKind::Gender).min_length(1))
        .with_field("account_type", FieldRules::new(FieldKind::AccountType).required());

    let errors = rules.validate_with(|name| match name {
        "mobile" => Some("09351112233"),
        "gender" => Some(" "),
        _ => None,
    });

    let mut expected = FormErrors::new();
    expected.insert("account_type".to_string(), DEFAULT_REQUIRED_MESSAGE.to_string());
    expected.insert("gender".to_string(), "حداقل 1 کاراکتر وارد کنید".to_string());
    assert_eq!(errors, expected);
}

#[test]
fn optional_selection_left_empty_passes() {
    let account = FieldRules::new(FieldKind::AccountType);
    assert_eq!(account.check(Some("")), Vec::<String>::new());
    assert_eq!(account.check(None), Vec::<String>::new());
    assert_eq!(account.first(Some("business")), None);
}

#[test]
fn malformed_configuration_is_rejected() {
    let err = FormRules::from_toml_str("[mobile]\nkind = \"fax\"\n").unwrap_err();
    assert!(matches!(err, RulesError::Toml(_)));

    let err = FormRules::from_json_str("{\"mobile\": 3}").unwrap_err();
    assert!(matches!(err, RulesError::Json(_)));

    let err = FormRules::from_toml_str("[bio]\nminLength = 0\n").unwrap_err();
    assert_eq!(
        err.to_string(),
        "field 'bio': minLength must be at least 1"
    );
}
