//! Join strategies for concurrently running rules
//!
//! Both strategies poll every future to settlement inside the caller's task;
//! nothing is spawned and no in-flight rule is ever aborted. They differ only
//! in what they report once everything has settled.

use futures::FutureExt;
use futures::future::join_all;
use lcform_core::{RuleError, RuleResult};
use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;

/// Wait for every future, then yield all values or the first error.
///
/// Values and the reported error follow invocation order, not settle order.
pub async fn join_fail_fast<I, T, E>(futures: I) -> Result<Vec<T>, E>
where
    I: IntoIterator,
    I::Item: Future<Output = Result<T, E>>,
{
    join_all(futures).await.into_iter().collect()
}

/// Wait for every future and yield every outcome in invocation order
pub async fn join_collect_all<I, T, E>(futures: I) -> Vec<Result<T, E>>
where
    I: IntoIterator,
    I::Item: Future<Output = Result<T, E>>,
{
    join_all(futures).await
}

/// Run one rule future, turning a panic into [`RuleError::Panicked`] when
/// `catch_panics` is set.
pub async fn settle<F>(rule: F, catch_panics: bool) -> RuleResult
where
    F: Future<Output = RuleResult>,
{
    if !catch_panics {
        return rule.await;
    }

    match AssertUnwindSafe(rule).catch_unwind().await {
        Ok(outcome) => outcome,
        Err(payload) => Err(RuleError::Panicked(panic_message(payload.as_ref()))),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
