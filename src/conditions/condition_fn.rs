//! # Function-backed condition (`ConditionFn`)
//!
//! [`ConditionFn`] wraps a closure `F: Fn(CancellationToken) -> Fut`,
//! producing a fresh future per attempt. No hidden state is carried between
//! attempts; if shared state is needed, move an `Arc<...>` into the closure
//! explicitly.
//!
//! ## Example
//! ```
//! use tokio_util::sync::CancellationToken;
//! use holdoff::{BoxError, Condition, ConditionFn, ConditionRef};
//!
//! let ready: ConditionRef = ConditionFn::arc("ready", |_ctx: CancellationToken| async move {
//!     // probe something...
//!     Ok::<bool, BoxError>(true)
//! });
//!
//! assert_eq!(ready.name(), "ready");
//! ```

use std::borrow::Cow;
use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::conditions::condition::Condition;
use crate::error::BoxError;

/// Function-backed condition implementation.
///
/// Wraps a closure that *creates* a new future per attempt.
pub struct ConditionFn<F> {
    name: Cow<'static, str>,
    f: F,
}

impl<F> ConditionFn<F> {
    /// Creates a new function-backed condition.
    ///
    /// Prefer [`ConditionFn::arc`] when you immediately need a [`ConditionRef`].
    pub fn new(name: impl Into<Cow<'static, str>>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }

    /// Creates the condition and returns it as a shared handle.
    pub fn arc(name: impl Into<Cow<'static, str>>, f: F) -> Arc<Self> {
        Arc::new(Self::new(name, f))
    }
}

#[async_trait]
impl<F, Fut> Condition for ConditionFn<F>
where
    F: Fn(CancellationToken) -> Fut + Send + Sync + 'static, // Fn, not FnMut
    Fut: Future<Output = Result<bool, BoxError>> + Send + 'static,
{
    fn name(&self) -> &str {
        &self.name
    }

    async fn check(&self, ctx: CancellationToken) -> Result<bool, BoxError> {
        (self.f)(ctx).await
    }
}
