// Built-in field rules

use crate::FieldRule;
use async_trait::async_trait;
use lcform_core::{FieldValidationResult, FieldValue, RuleResult};
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;
use std::sync::Arc;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$").unwrap()
});

/// Text form of a value; `None` for null
fn text(value: &FieldValue) -> Option<Cow<'_, str>> {
    match value {
        FieldValue::Null => None,
        FieldValue::String(s) => Some(Cow::Borrowed(s.as_str())),
        other => Some(Cow::Owned(other.to_string())),
    }
}

/// Length of a value: characters for text, items for arrays
fn length(value: &FieldValue) -> Option<usize> {
    match value {
        FieldValue::Array(items) => Some(items.len()),
        other => text(other).map(|s| s.chars().count()),
    }
}

fn verdict(kind: &str, passed: bool, message: &str) -> RuleResult {
    if passed {
        Ok(FieldValidationResult::ok(kind))
    } else {
        Ok(FieldValidationResult::fail(kind, message))
    }
}

/// Fails on null, empty strings and empty arrays
pub struct Required {
    message: String,
}

impl Required {
    pub const TYPE: &'static str = "REQUIRED";

    pub fn new() -> Self {
        Self {
            message: "Mandatory field".to_string(),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn check(&self, value: &FieldValue) -> RuleResult {
        let informed = match value {
            FieldValue::Null => false,
            FieldValue::String(s) => !s.is_empty(),
            FieldValue::Array(items) => !items.is_empty(),
            _ => true,
        };
        verdict(Self::TYPE, informed, &self.message)
    }
}

impl Default for Required {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<VM: Send + Sync> FieldRule<VM> for Required {
    async fn validate(&self, value: &FieldValue, _vm: &Arc<VM>) -> RuleResult {
        self.check(value)
    }
}

/// Minimum length of a present value
pub struct MinLength {
    min: usize,
    message: String,
}

impl MinLength {
    pub const TYPE: &'static str = "MIN_LENGTH";

    pub fn new(min: usize) -> Self {
        Self {
            min,
            message: format!("Must be at least {} characters", min),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn check(&self, value: &FieldValue) -> RuleResult {
        let passed = length(value).is_none_or(|len| len >= self.min);
        verdict(Self::TYPE, passed, &self.message)
    }
}

#[async_trait]
impl<VM: Send + Sync> FieldRule<VM> for MinLength {
    async fn validate(&self, value: &FieldValue, _vm: &Arc<VM>) -> RuleResult {
        self.check(value)
    }
}

/// Maximum length of a present value
pub struct MaxLength {
    max: usize,
    message: String,
}

impl MaxLength {
    pub const TYPE: &'static str = "MAX_LENGTH";

    pub fn new(max: usize) -> Self {
        Self {
            max,
            message: format!("Must be at most {} characters", max),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn check(&self, value: &FieldValue) -> RuleResult {
        let passed = length(value).is_none_or(|len| len <= self.max);
        verdict(Self::TYPE, passed, &self.message)
    }
}

#[async_trait]
impl<VM: Send + Sync> FieldRule<VM> for MaxLength {
    async fn validate(&self, value: &FieldValue, _vm: &Arc<VM>) -> RuleResult {
        self.check(value)
    }
}

/// Email format of a present value. Empty strings pass; pair with [`Required`].
pub struct Email {
    message: String,
}

impl Email {
    pub const TYPE: &'static str = "EMAIL";

    pub fn new() -> Self {
        Self {
            message: "Please enter a valid email address".to_string(),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn check(&self, value: &FieldValue) -> RuleResult {
        let passed = text(value).is_none_or(|s| s.is_empty() || EMAIL_REGEX.is_match(&s));
        verdict(Self::TYPE, passed, &self.message)
    }
}

impl Default for Email {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<VM: Send + Sync> FieldRule<VM> for Email {
    async fn validate(&self, value: &FieldValue, _vm: &Arc<VM>) -> RuleResult {
        self.check(value)
    }
}

/// Custom regex match of a present value
pub struct Pattern {
    regex: Regex,
    message: String,
}

impl Pattern {
    pub const TYPE: &'static str = "PATTERN";

    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self::from_regex(Regex::new(pattern)?))
    }

    pub fn from_regex(regex: Regex) -> Self {
        Self {
            message: format!("Must match {}", regex.as_str()),
            regex,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn check(&self, value: &FieldValue) -> RuleResult {
        let passed = text(value).is_none_or(|s| self.regex.is_match(&s));
        verdict(Self::TYPE, passed, &self.message)
    }
}

#[async_trait]
impl<VM: Send + Sync> FieldRule<VM> for Pattern {
    async fn validate(&self, value: &FieldValue, _vm: &Arc<VM>) -> RuleResult {
        self.check(value)
    }
}
