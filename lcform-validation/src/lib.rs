//! Form validation engine for lcform
//!
//! Registers field-level and whole-form rules for a view model and runs
//! them on field edits and on form submission.
//!
//! # Examples
//!
//! ## Field Validation
//!
//! ```
//! use lcform_validation::{ValidationEngine, Required, Email};
//! use serde_json::json;
//!
//! # futures::executor::block_on(async {
//! let mut engine = ValidationEngine::<serde_json::Value>::new();
//! engine
//!     .add_field_rule("fullname", Required::new(), None)
//!     .add_field_rule("email", Email::new(), Some(json!({"onBlur": true})));
//!
//! let vm = json!({"fullname": "", "email": "john@example.com"});
//! let result = engine
//!     .trigger_field_validation(vm, "fullname", json!(""), None)
//!     .await
//!     .unwrap();
//!
//! assert!(!result.succeeded);
//! assert_eq!(result.error_message, "Mandatory field");
//! # });
//! ```
//!
//! ## Full Form Validation
//!
//! ```
//! use lcform_validation::{ValidationEngine, Required};
//! use lcform_core::FieldValidationResult;
//! use serde_json::json;
//!
//! # futures::executor::block_on(async {
//! let mut engine = ValidationEngine::<serde_json::Value>::new();
//! engine
//!     .add_field_rule("fullname", Required::new(), None)
//!     .add_form_validation(|vm| {
//!         if vm["password"] == vm["confirmPassword"] {
//!             Ok(FieldValidationResult::ok("PASSWORD_MATCH"))
//!         } else {
//!             Ok(FieldValidationResult::fail("PASSWORD_MATCH", "Passwords differ"))
//!         }
//!     });
//!
//! let vm = json!({"fullname": "john", "password": "a", "confirmPassword": "b"});
//! let result = engine.validate_full_form(vm).await;
//!
//! assert!(!result.succeeded);
//! assert_eq!(result.field_errors.len(), 1);
//! assert_eq!(result.form_global_errors[0].error_message, "Passwords differ");
//! # });
//! ```
//!
//! ## Error Handling
//!
//! A rule that cannot reach a verdict returns `Err(RuleError)`. A single
//! field trigger rejects with that error; full-form validation records it as
//! a failed entry instead.

mod base;
mod config;
mod engine;
pub mod join;
mod rules;
mod traits;

pub use base::*;
pub use config::*;
pub use engine::*;
pub use join::{join_collect_all, join_fail_fast};
pub use rules::*;
pub use traits::{FieldRule, FormRule};

pub use lcform_core::{
    FieldFilter, FieldValidationResult, FieldValue, FormValidationResult, RuleError, RuleResult,
    ViewModel,
};
