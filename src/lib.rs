// lcform - form validation for view models
//
// Field-level and whole-form validation rules, synchronous or asynchronous,
// run on field edits and on submission with aggregated results.

// Re-export the data model
pub use lcform_core::*;

// Re-export optional crates
#[cfg(feature = "validation")]
pub use lcform_validation;

// Prelude for common imports
pub mod prelude {
    pub use crate::{
        FieldFilter, FieldMappings, FieldValidationResult, FieldValue, FormNameToFieldNameMapping,
        FormValidationResult, RuleError, RuleResult, ViewModel, serialized_field_value,
    };

    #[cfg(feature = "validation")]
    pub use lcform_validation::{
        BaseFormValidation, Email, EngineConfig, EngineConfigBuilder, FieldRule, FormRule,
        FormValidation, MaxLength, MinLength, Pattern, Required, ValidationEngine,
    };
}
