// Rule traits and closure adapters

use async_trait::async_trait;
use lcform_core::{FieldValue, RuleResult};
use std::future::Future;
use std::marker::PhantomData;
use std::sync::Arc;

/// Rule evaluating one field's value
#[async_trait]
pub trait FieldRule<VM>: Send + Sync {
    /// Validate the current value against the view model
    async fn validate(&self, value: &FieldValue, vm: &Arc<VM>) -> RuleResult;
}

/// Rule evaluating the whole view model (cross-field constraints)
#[async_trait]
pub trait FormRule<VM>: Send + Sync {
    /// Validate the view model
    async fn validate(&self, vm: &Arc<VM>) -> RuleResult;
}

/// Synchronous field closure `(value, vm) -> RuleResult`
pub(crate) struct FnFieldRule<F>(pub(crate) F);

#[async_trait]
impl<VM, F> FieldRule<VM> for FnFieldRule<F>
where
    VM: Send + Sync,
    F: Fn(&FieldValue, &VM) -> RuleResult + Send + Sync,
{
    async fn validate(&self, value: &FieldValue, vm: &Arc<VM>) -> RuleResult {
        (self.0)(value, vm.as_ref())
    }
}

/// Asynchronous field closure `(value, vm) -> Future<RuleResult>`
pub(crate) struct AsyncFnFieldRule<F, Fut> {
    f: F,
    _marker: PhantomData<fn() -> Fut>,
}

impl<F, Fut> AsyncFnFieldRule<F, Fut> {
    pub(crate) fn new(f: F) -> Self {
        Self {
            f,
            _marker: PhantomData,
        }
    }
}

#[async_trait]
impl<VM, F, Fut> FieldRule<VM> for AsyncFnFieldRule<F, Fut>
where
    VM: Send + Sync,
    F: Fn(FieldValue, Arc<VM>) -> Fut + Send + Sync,
    Fut: Future<Output = RuleResult> + Send,
{
    async fn validate(&self, value: &FieldValue, vm: &Arc<VM>) -> RuleResult {
        (self.f)(value.clone(), Arc::clone(vm)).await
    }
}

/// Synchronous whole-form closure `(vm) -> RuleResult`
pub(crate) struct FnFormRule<F>(pub(crate) F);

#[async_trait]
impl<VM, F> FormRule<VM> for FnFormRule<F>
where
    VM: Send + Sync,
    F: Fn(&VM) -> RuleResult + Send + Sync,
{
    async fn validate(&self, vm: &Arc<VM>) -> RuleResult {
        (self.0)(vm.as_ref())
    }
}

/// Asynchronous whole-form closure `(vm) -> Future<RuleResult>`
pub(crate) struct AsyncFnFormRule<F, Fut> {
    f: F,
    _marker: PhantomData<fn() -> Fut>,
}

impl<F, Fut> AsyncFnFormRule<F, Fut> {
    pub(crate) fn new(f: F) -> Self {
        Self {
            f,
            _marker: PhantomData,
        }
    }
}

#[async_trait]
impl<VM, F, Fut> FormRule<VM> for AsyncFnFormRule<F, Fut>
where
    VM: Send + Sync,
    F: Fn(Arc<VM>) -> Fut + Send + Sync,
    Fut: Future<Output = RuleResult> + Send,
{
    async fn validate(&self, vm: &Arc<VM>) -> RuleResult {
        (self.f)(Arc::clone(vm)).await
    }
}
