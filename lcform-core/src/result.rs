//! Validation result entities

use crate::RuleError;
use serde::{Deserialize, Serialize};

/// Outcome of a single rule, or what a rule invocation produces
pub type RuleResult = Result<FieldValidationResult, RuleError>;

/// Result of one field (or whole-form) rule
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldValidationResult {
    /// Field key, stamped by the engine
    pub key: Option<String>,

    /// Rule category, e.g. `"REQUIRED"`
    #[serde(rename = "type")]
    pub kind: String,

    /// Whether the value passed the rule
    pub succeeded: bool,

    /// Human readable message, empty when succeeded
    pub error_message: String,
}

impl FieldValidationResult {
    /// Empty, not-succeeded result
    pub fn new() -> Self {
        Self::default()
    }

    /// Successful result for a rule category
    pub fn ok(kind: impl Into<String>) -> Self {
        Self {
            key: None,
            kind: kind.into(),
            succeeded: true,
            error_message: String::new(),
        }
    }

    /// Failed result for a rule category
    pub fn fail(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            key: None,
            kind: kind.into(),
            succeeded: false,
            error_message: message.into(),
        }
    }

    /// Assign the field key
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }
}

/// Aggregated result of a full-form validation
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValidationResult {
    /// True only when every field and global result succeeded
    pub succeeded: bool,

    /// One entry per executed field rule, in registration order
    pub field_errors: Vec<FieldValidationResult>,

    /// One entry per whole-form rule, in registration order
    pub form_global_errors: Vec<FieldValidationResult>,
}

impl FormValidationResult {
    /// Build the aggregate, computing `succeeded` over both sequences
    pub fn from_parts(
        field_errors: Vec<FieldValidationResult>,
        form_global_errors: Vec<FieldValidationResult>,
    ) -> Self {
        let succeeded = field_errors
            .iter()
            .chain(form_global_errors.iter())
            .all(|result| result.succeeded);

        Self {
            succeeded,
            field_errors,
            form_global_errors,
        }
    }

    /// Failed entries, field results first
    pub fn failures(&self) -> impl Iterator<Item = &FieldValidationResult> {
        self.field_errors
            .iter()
            .chain(self.form_global_errors.iter())
            .filter(|result| !result.succeeded)
    }

    /// Field results stamped with `key`
    pub fn field_errors_for(&self, key: &str) -> Vec<&FieldValidationResult> {
        self.field_errors
            .iter()
            .filter(|result| result.key.as_deref() == Some(key))
            .collect()
    }

    /// Convert to JSON representation
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "succeeded": self.succeeded,
            "fieldErrors": self.field_errors,
            "formGlobalErrors": self.form_global_errors,
        })
    }
}
