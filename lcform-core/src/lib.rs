//! Core data model for lcform
//!
//! Holds the types that flow between a view model, its validation rules and
//! the validation engine:
//!
//! - **Results** - [`FieldValidationResult`] and [`FormValidationResult`]
//! - **Mappings** - [`FormNameToFieldNameMapping`] between UI and view-model names
//! - **View models** - [`ViewModel`] lookup of field values by name
//! - **Errors** - [`RuleError`] for failing rules, [`ConfigError`] for configuration
//!
//! # Example
//!
//! ```
//! use lcform_core::{FieldValidationResult, FormValidationResult};
//!
//! let name = FieldValidationResult::fail("REQUIRED", "Mandatory field").with_key("fullname");
//! let email = FieldValidationResult::ok("EMAIL").with_key("email");
//!
//! let form = FormValidationResult::from_parts(vec![name, email], Vec::new());
//! assert!(!form.succeeded);
//! assert_eq!(form.failures().count(), 1);
//! ```

pub mod error;
pub mod mapping;
pub mod result;
pub mod view_model;

pub use error::{ConfigError, Result, RuleError};
pub use mapping::{FieldMappings, FormNameToFieldNameMapping};
pub use result::{FieldValidationResult, FormValidationResult, RuleResult};
pub use view_model::{ViewModel, serialized_field_value};

/// Opaque current value of a form field
pub type FieldValue = serde_json::Value;

/// Opaque discriminator narrowing which rules apply to a trigger, compared by equality
pub type FieldFilter = serde_json::Value;
