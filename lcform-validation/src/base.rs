// Per-view-model validation facade

use crate::config::EngineConfig;
use crate::engine::{FieldValidationFuture, FormValidationFuture, ValidationEngine};
use lcform_core::{FieldFilter, FieldValue, ViewModel};
use std::sync::Arc;

/// A view-model specific validation definition backed by an engine.
///
/// Implementors only supply the engine; validating a field or the whole
/// form forwards to it.
pub trait FormValidation<VM>
where
    VM: Send + Sync + 'static,
{
    /// Engine holding this definition's rules
    fn validation_engine(&self) -> &ValidationEngine<VM>;

    /// Validate a single field edit
    fn validate_field(
        &self,
        vm: impl Into<Arc<VM>>,
        key: &str,
        value: FieldValue,
        filter: Option<&FieldFilter>,
    ) -> FieldValidationFuture<'_> {
        self.validation_engine()
            .trigger_field_validation(vm, key, value, filter)
    }

    /// Validate the whole form
    fn validate_form(&self, vm: impl Into<Arc<VM>>) -> FormValidationFuture<'_>
    where
        VM: ViewModel,
    {
        self.validation_engine().validate_full_form(vm)
    }
}

/// Owns one [`ValidationEngine`] and forwards to it
pub struct BaseFormValidation<VM> {
    engine: ValidationEngine<VM>,
}

impl<VM> BaseFormValidation<VM>
where
    VM: Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self {
            engine: ValidationEngine::new(),
        }
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            engine: ValidationEngine::with_config(config),
        }
    }

    pub fn engine(&self) -> &ValidationEngine<VM> {
        &self.engine
    }

    /// Engine for rule registration
    pub fn engine_mut(&mut self) -> &mut ValidationEngine<VM> {
        &mut self.engine
    }
}

impl<VM> Default for BaseFormValidation<VM>
where
    VM: Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<VM> FormValidation<VM> for BaseFormValidation<VM>
where
    VM: Send + Sync + 'static,
{
    fn validation_engine(&self) -> &ValidationEngine<VM> {
        &self.engine
    }
}
