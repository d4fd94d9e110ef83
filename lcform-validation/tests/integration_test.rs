//! Integration tests for lcform-validation

use lcform_validation::*;
use serde_json::json;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

fn required(value: &FieldValue, _vm: &serde_json::Value) -> RuleResult {
    let informed = value.as_str().is_some_and(|s| !s.is_empty());
    let message = if informed { "" } else { "Mandatory field" };

    Ok(FieldValidationResult {
        key: None,
        kind: "REQUIRED".to_string(),
        succeeded: informed,
        error_message: message.to_string(),
    })
}

#[tokio::test]
async fn test_required_field_empty_value() {
    let mut engine = ValidationEngine::new();
    engine.add_field_validation("fullname", required, None);

    let vm = json!({"id": "1", "fullname": "john"});
    let result = engine
        .trigger_field_validation(vm, "fullname", json!(""), None)
        .await
        .unwrap();

    assert_eq!(result.key.as_deref(), Some("fullname"));
    assert_eq!(result.kind, "REQUIRED");
    assert!(!result.succeeded);
    assert_eq!(result.error_message, "Mandatory field");
}

#[tokio::test]
async fn test_required_field_informed_value() {
    let mut engine = ValidationEngine::new();
    engine.add_field_validation("fullname", required, None);

    let vm = json!({"id": "1", "fullname": "john"});
    let result = engine
        .trigger_field_validation(vm, "fullname", json!("john"), None)
        .await
        .unwrap();

    assert_eq!(result.key.as_deref(), Some("fullname"));
    assert!(result.succeeded);
    assert!(result.error_message.is_empty());
}

#[tokio::test]
async fn test_uncontrolled_rule_error_rejects() {
    let mut engine = ValidationEngine::<serde_json::Value>::new();
    engine.add_field_validation(
        "fullname",
        |_value, _vm| Err("Intentionally Uncontrolled test Exception".into()),
        None,
    );

    let result = engine
        .trigger_field_validation(json!({}), "fullname", json!(""), None)
        .await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_in_progress_with_timed_async_rule() {
    let mut engine = ValidationEngine::<serde_json::Value>::new();
    engine.add_field_validation_async(
        "email",
        |value: FieldValue, _vm| async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            Email::new().check(&value)
        },
        None,
    );

    let trigger = engine.trigger_field_validation(json!({}), "email", json!("nope"), None);
    assert!(engine.is_validation_in_progress());

    let result = trigger.await.unwrap();
    assert!(!result.succeeded);
    assert_eq!(result.kind, "EMAIL");
    assert!(!engine.is_validation_in_progress());
}

#[tokio::test]
async fn test_overlapping_timed_triggers() {
    let mut engine = ValidationEngine::<serde_json::Value>::new();
    for (key, delay) in [("fast", 10u64), ("slow", 60u64)] {
        engine.add_field_validation_async(
            key,
            move |_value, _vm| async move {
                tokio::time::sleep(Duration::from_millis(delay)).await;
                Required::new().check(&json!("x"))
            },
            None,
        );
    }

    let slow = engine.trigger_field_validation(json!({}), "slow", json!("x"), None);
    let fast = engine.trigger_field_validation(json!({}), "fast", json!("x"), None);

    let (slow, fast) = futures::join!(slow, async {
        let result = fast.await;
        // the slow trigger is still running
        assert!(engine.is_validation_in_progress());
        result
    });

    assert!(slow.is_ok() && fast.is_ok());
    assert!(!engine.is_validation_in_progress());
}

#[tokio::test]
async fn test_built_in_rules_in_full_form() {
    let mut engine = ValidationEngine::<serde_json::Value>::new();
    engine
        .add_field_rule("fullname", Required::new(), None)
        .add_field_rule("fullname", MaxLength::new(10), None)
        .add_field_rule("email", Required::new(), None)
        .add_field_rule("email", Email::new(), None)
        .add_field_rule(
            "zip",
            Pattern::new(r"^\d{5}$").unwrap().with_message("Invalid zip"),
            None,
        );

    let vm = json!({"fullname": "john", "email": "john@", "zip": "1234"});
    let result = engine.validate_full_form(vm).await;

    assert!(!result.succeeded);
    assert_eq!(result.field_errors.len(), 5);

    let failures: Vec<_> = result
        .failures()
        .map(|r| (r.key.as_deref().unwrap_or_default(), r.kind.as_str()))
        .collect();
    assert_eq!(failures, vec![("email", "EMAIL"), ("zip", "PATTERN")]);
}

#[tokio::test]
async fn test_full_form_is_resilient_per_rule() {
    let mut engine = ValidationEngine::<serde_json::Value>::new();
    engine
        .add_field_validation("a", |_value, _vm| Err(RuleError::failed("boom")), None)
        .add_field_rule("b", Required::new(), None)
        .add_form_validation_async(|_vm| async {
            Err::<FieldValidationResult, _>(RuleError::failed("global boom"))
        })
        .add_form_validation(|_vm| Ok(FieldValidationResult::ok("GLOBAL")));

    let result = engine.validate_full_form(json!({"a": "x", "b": "y"})).await;

    assert!(!result.succeeded);
    assert_eq!(result.field_errors.len(), 2);
    assert_eq!(result.field_errors[0].kind, "RULE_FAILURE");
    assert!(result.field_errors[1].succeeded);
    assert_eq!(result.form_global_errors.len(), 2);
    assert_eq!(result.form_global_errors[0].kind, "RULE_FAILURE");
    assert!(result.form_global_errors[1].succeeded);
}

#[tokio::test]
async fn test_filtered_rules_only_run_when_requested() {
    let blur_runs = Arc::new(AtomicUsize::new(0));
    let counter = blur_runs.clone();

    let mut engine = ValidationEngine::<serde_json::Value>::new();
    engine.add_field_validation(
        "email",
        move |value, _vm| {
            counter.fetch_add(1, Ordering::SeqCst);
            Email::new().check(value)
        },
        Some(json!("blur")),
    );

    engine
        .trigger_field_validation(json!({}), "email", json!("a@b.com"), Some(&json!("change")))
        .await
        .unwrap();
    assert_eq!(blur_runs.load(Ordering::SeqCst), 0);

    engine
        .trigger_field_validation(json!({}), "email", json!("a@b.com"), Some(&json!("blur")))
        .await
        .unwrap();
    assert_eq!(blur_runs.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_engine_from_toml_config() {
    let config = EngineConfig::from_toml_str(
        r#"
        enable_logging = false
        rule_failure_type = "UNEXPECTED_ERROR"
        "#,
    )
    .unwrap();

    let mut engine = ValidationEngine::<serde_json::Value>::with_config(config);
    engine.add_field_validation("fullname", |_value, _vm| Err(RuleError::failed("x")), None);

    let result = engine.validate_full_form(json!({})).await;
    assert_eq!(result.field_errors[0].kind, "UNEXPECTED_ERROR");
}

#[tokio::test]
async fn test_result_json_shape() {
    let mut engine = ValidationEngine::new();
    engine.add_field_validation("fullname", required, None);

    let result = engine.validate_full_form(json!({"fullname": ""})).await;

    assert_eq!(
        result.to_json(),
        json!({
            "succeeded": false,
            "fieldErrors": [{
                "key": "fullname",
                "type": "REQUIRED",
                "succeeded": false,
                "errorMessage": "Mandatory field",
            }],
            "formGlobalErrors": [],
        })
    );
}
