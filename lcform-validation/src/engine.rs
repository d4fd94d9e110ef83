//! Validation engine implementation

use crate::config::EngineConfig;
use crate::join::{join_collect_all, join_fail_fast, settle};
use crate::traits::{
    AsyncFnFieldRule, AsyncFnFormRule, FieldRule, FnFieldRule, FnFormRule, FormRule,
};
use futures::FutureExt;
use futures::future::BoxFuture;
use lcform_core::{
    FieldFilter, FieldMappings, FieldValidationResult, FieldValue, FormNameToFieldNameMapping,
    FormValidationResult, RuleError, RuleResult, ViewModel,
};
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tracing::{debug, warn};

/// Pending result of a single-field trigger
pub type FieldValidationFuture<'a> = BoxFuture<'a, RuleResult>;

/// Pending results of every matching rule of a single-field trigger
pub type FieldValidationsFuture<'a> = BoxFuture<'a, Result<Vec<FieldValidationResult>, RuleError>>;

/// Pending result of a full-form trigger
pub type FormValidationFuture<'a> = BoxFuture<'a, FormValidationResult>;

/// A rule registered under a field key
pub struct FieldValidation<VM> {
    rule: Box<dyn FieldRule<VM>>,
    filter: Option<FieldFilter>,
}

impl<VM> FieldValidation<VM> {
    /// Filter this rule was registered with
    pub fn filter(&self) -> Option<&FieldFilter> {
        self.filter.as_ref()
    }

    /// Whether this rule applies to a trigger carrying `filter`.
    ///
    /// A missing filter on either side always applies; otherwise the two
    /// must be equal.
    pub fn applies_to(&self, filter: Option<&FieldFilter>) -> bool {
        match (&self.filter, filter) {
            (Some(own), Some(requested)) => own == requested,
            _ => true,
        }
    }
}

/// Counts a trigger as in progress until dropped
struct InProgressGuard<'a> {
    counter: &'a AtomicUsize,
}

impl<'a> InProgressGuard<'a> {
    fn enter(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self { counter }
    }
}

impl Drop for InProgressGuard<'_> {
    fn drop(&mut self) {
        self.counter.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Registry and runner of field and whole-form validation rules.
///
/// Rules are registered through `&mut self` and triggers borrow `&self` for
/// as long as their future is alive, so the registries cannot change while
/// a validation is in flight.
///
/// # Examples
///
/// ```
/// use lcform_validation::ValidationEngine;
/// use lcform_core::FieldValidationResult;
/// use serde_json::json;
///
/// # futures::executor::block_on(async {
/// let mut engine = ValidationEngine::<serde_json::Value>::new();
/// engine.add_field_validation(
///     "fullname",
///     |value, _vm| {
///         if value.as_str().is_some_and(|s| !s.is_empty()) {
///             Ok(FieldValidationResult::ok("REQUIRED"))
///         } else {
///             Ok(FieldValidationResult::fail("REQUIRED", "Mandatory field"))
///         }
///     },
///     None,
/// );
///
/// let vm = json!({"id": "1", "fullname": "john"});
/// let result = engine
///     .trigger_field_validation(vm, "fullname", json!(""), None)
///     .await
///     .unwrap();
///
/// assert_eq!(result.key.as_deref(), Some("fullname"));
/// assert!(!result.succeeded);
/// # });
/// ```
pub struct ValidationEngine<VM> {
    /// Field rules grouped by key, in key registration order
    field_validations: Vec<(String, Vec<FieldValidation<VM>>)>,

    /// Whole-form rules
    form_validations: Vec<Box<dyn FormRule<VM>>>,

    field_mappings: FieldMappings,

    /// Number of triggers whose rules have not all settled
    in_progress: AtomicUsize,

    /// Set once any trigger has been invoked
    dirty: AtomicBool,

    config: EngineConfig,
}

impl<VM> ValidationEngine<VM>
where
    VM: Send + Sync + 'static,
{
    /// Create a new engine with the default configuration
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create an engine with custom config
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            field_validations: Vec::new(),
            form_validations: Vec::new(),
            field_mappings: FieldMappings::new(),
            in_progress: AtomicUsize::new(0),
            dirty: AtomicBool::new(false),
            config,
        }
    }

    /// Register a synchronous rule for a field
    pub fn add_field_validation<F>(
        &mut self,
        key: impl Into<String>,
        validation_fn: F,
        filter: Option<FieldFilter>,
    ) -> &mut Self
    where
        F: Fn(&FieldValue, &VM) -> RuleResult + Send + Sync + 'static,
    {
        self.add_field_rule(key, FnFieldRule(validation_fn), filter)
    }

    /// Register an asynchronous rule for a field
    pub fn add_field_validation_async<F, Fut>(
        &mut self,
        key: impl Into<String>,
        validation_fn: F,
        filter: Option<FieldFilter>,
    ) -> &mut Self
    where
        F: Fn(FieldValue, Arc<VM>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = RuleResult> + Send + 'static,
    {
        self.add_field_rule(key, AsyncFnFieldRule::new(validation_fn), filter)
    }

    /// Register any [`FieldRule`] for a field. Rules for the same key accumulate.
    pub fn add_field_rule<R>(
        &mut self,
        key: impl Into<String>,
        rule: R,
        filter: Option<FieldFilter>,
    ) -> &mut Self
    where
        R: FieldRule<VM> + 'static,
    {
        let key = key.into();

        if self.config.enable_logging {
            debug!(
                "Registered field validation for '{}' (filter: {:?})",
                key, filter
            );
        }

        let validation = FieldValidation {
            rule: Box::new(rule),
            filter,
        };

        match self.field_validations.iter().position(|(k, _)| *k == key) {
            Some(index) => self.field_validations[index].1.push(validation),
            None => self.field_validations.push((key, vec![validation])),
        }

        self
    }

    /// Register a synchronous whole-form rule
    pub fn add_form_validation<F>(&mut self, validation_fn: F) -> &mut Self
    where
        F: Fn(&VM) -> RuleResult + Send + Sync + 'static,
    {
        self.add_form_rule(FnFormRule(validation_fn))
    }

    /// Register an asynchronous whole-form rule
    pub fn add_form_validation_async<F, Fut>(&mut self, validation_fn: F) -> &mut Self
    where
        F: Fn(Arc<VM>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = RuleResult> + Send + 'static,
    {
        self.add_form_rule(AsyncFnFormRule::new(validation_fn))
    }

    /// Register any [`FormRule`]
    pub fn add_form_rule<R>(&mut self, rule: R) -> &mut Self
    where
        R: FormRule<VM> + 'static,
    {
        self.form_validations.push(Box::new(rule));

        if self.config.enable_logging {
            debug!(
                "Registered form validation #{}",
                self.form_validations.len()
            );
        }

        self
    }

    /// Map a form field name to the view-model attribute holding its value
    pub fn add_field_mapping(
        &mut self,
        form_field_name: impl Into<String>,
        vm_field_name: impl Into<String>,
    ) -> &mut Self {
        self.field_mappings
            .add(FormNameToFieldNameMapping::new(form_field_name, vm_field_name));
        self
    }

    /// Validate one field and resolve to the result of the last invoked
    /// matching rule.
    ///
    /// All matching rules run; use [`trigger_field_validation_all`] to see
    /// every result. Resolves to a succeeded no-op result when no rule
    /// matches. Any rule error rejects the whole trigger with that error.
    ///
    /// [`trigger_field_validation_all`]: Self::trigger_field_validation_all
    pub fn trigger_field_validation(
        &self,
        vm: impl Into<Arc<VM>>,
        key: &str,
        value: FieldValue,
        filter: Option<&FieldFilter>,
    ) -> FieldValidationFuture<'_> {
        let all = self.trigger_field_validation_all(vm, key, value, filter);
        let key = key.to_string();

        async move {
            let mut results = all.await?;
            Ok(results
                .pop()
                .unwrap_or_else(|| FieldValidationResult::ok("").with_key(key)))
        }
        .boxed()
    }

    /// Validate one field and resolve to every matching rule's result, in
    /// registration order. Resolves to an empty list when no rule matches.
    pub fn trigger_field_validation_all(
        &self,
        vm: impl Into<Arc<VM>>,
        key: &str,
        value: FieldValue,
        filter: Option<&FieldFilter>,
    ) -> FieldValidationsFuture<'_> {
        let guard = self.begin_trigger();
        let vm: Arc<VM> = vm.into();
        let key = key.to_string();
        let filter = filter.cloned();
        let catch_panics = self.config.catch_panics;

        async move {
            let _guard = guard;
            let matching = self.matching_validations(&key, filter.as_ref());

            if matching.is_empty() {
                if self.config.enable_logging {
                    debug!("No validations apply to field '{}'", key);
                }
                return Ok(Vec::new());
            }

            if self.config.enable_logging {
                debug!(
                    "Triggering {} validation(s) for field '{}'",
                    matching.len(),
                    key
                );
            }

            let runs: Vec<BoxFuture<'_, RuleResult>> = matching
                .iter()
                .map(|validation| {
                    settle(validation.rule.validate(&value, &vm), catch_panics).boxed()
                })
                .collect();
            let outcome = join_fail_fast(runs).await;

            match outcome {
                Ok(results) => Ok(results
                    .into_iter()
                    .map(|result| result.with_key(key.as_str()))
                    .collect()),
                Err(err) => {
                    if self.config.enable_logging {
                        warn!("Validation of field '{}' failed: {}", key, err);
                    }
                    Err(err)
                }
            }
        }
        .boxed()
    }

    /// Validate every registered field and every whole-form rule.
    ///
    /// Field values are read from the view model, through the field
    /// mappings. Rule errors and panics become failed entries whatever
    /// `catch_panics` says; this never rejects.
    pub fn validate_full_form(&self, vm: impl Into<Arc<VM>>) -> FormValidationFuture<'_>
    where
        VM: ViewModel,
    {
        let guard = self.begin_trigger();
        let vm: Arc<VM> = vm.into();

        async move {
            let _guard = guard;

            let values: Vec<FieldValue> = self
                .field_validations
                .iter()
                .map(|(key, _)| vm.field_value(self.field_mappings.resolve(key)))
                .collect();

            let field_jobs: Vec<(&str, &FieldValue, &FieldValidation<VM>)> = self
                .field_validations
                .iter()
                .zip(values.iter())
                .flat_map(|((key, validations), value)| {
                    validations
                        .iter()
                        .map(move |validation| (key.as_str(), value, validation))
                })
                .collect();

            if self.config.enable_logging {
                debug!(
                    "Validating full form: {} field rule(s), {} form rule(s)",
                    field_jobs.len(),
                    self.form_validations.len()
                );
            }

            let vm = &vm;
            let field_runs: Vec<BoxFuture<'_, RuleResult>> = field_jobs
                .iter()
                .map(|(_, value, validation)| {
                    settle(validation.rule.validate(value, vm), true).boxed()
                })
                .collect();
            let form_runs: Vec<BoxFuture<'_, RuleResult>> = self
                .form_validations
                .iter()
                .map(|rule| settle(rule.validate(vm), true).boxed())
                .collect();
            let (field_outcomes, form_outcomes) =
                futures::join!(join_collect_all(field_runs), join_collect_all(form_runs));

            let field_errors = field_jobs
                .iter()
                .zip(field_outcomes)
                .map(|((key, _, _), outcome)| self.settled_entry(key, outcome).with_key(*key))
                .collect();
            let form_global_errors = form_outcomes
                .into_iter()
                .map(|outcome| self.settled_entry("<form>", outcome))
                .collect();

            let result = FormValidationResult::from_parts(field_errors, form_global_errors);

            if self.config.enable_logging {
                debug!(
                    "Full form validation finished (succeeded: {}, failures: {})",
                    result.succeeded,
                    result.failures().count()
                );
            }

            result
        }
        .boxed()
    }

    /// Same as [`validate_full_form`](Self::validate_full_form)
    pub fn trigger_full_form_validation(&self, vm: impl Into<Arc<VM>>) -> FormValidationFuture<'_>
    where
        VM: ViewModel,
    {
        self.validate_full_form(vm)
    }

    /// Whether any validation has been triggered
    pub fn is_form_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Whether no validation has been triggered yet
    pub fn is_form_pristine(&self) -> bool {
        !self.is_form_dirty()
    }

    /// Whether any trigger still has unsettled rules
    pub fn is_validation_in_progress(&self) -> bool {
        self.in_progress.load(Ordering::SeqCst) > 0
    }

    /// Registered field keys, in registration order
    pub fn field_keys(&self) -> impl Iterator<Item = &str> {
        self.field_validations.iter().map(|(key, _)| key.as_str())
    }

    /// Number of rules registered for a field
    pub fn field_validation_count(&self, key: &str) -> usize {
        self.field_validations
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, validations)| validations.len())
            .unwrap_or(0)
    }

    /// Number of whole-form rules
    pub fn form_validation_count(&self) -> usize {
        self.form_validations.len()
    }

    pub fn field_mappings(&self) -> &FieldMappings {
        &self.field_mappings
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn begin_trigger(&self) -> InProgressGuard<'_> {
        self.dirty.store(true, Ordering::SeqCst);
        InProgressGuard::enter(&self.in_progress)
    }

    fn matching_validations(
        &self,
        key: &str,
        filter: Option<&FieldFilter>,
    ) -> Vec<&FieldValidation<VM>> {
        self.field_validations
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, validations)| {
                validations
                    .iter()
                    .filter(|validation| validation.applies_to(filter))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Full-form entry for a settled rule
    fn settled_entry(&self, source: &str, outcome: RuleResult) -> FieldValidationResult {
        match outcome {
            Ok(result) => result,
            Err(err) => {
                if self.config.enable_logging {
                    warn!("Validation rule for '{}' failed: {}", source, err);
                }
                FieldValidationResult::fail(self.config.rule_failure_type.as_str(), err.to_string())
            }
        }
    }
}

impl<VM> Default for ValidationEngine<VM>
where
    VM: Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}
