// formwork/src/autosave/sink.rs

//! Defines the `AutosaveSink` trait for persistence targets and an adapter
//! for plain async closures.

use std::future::Future;
use std::marker::PhantomData;

use async_trait::async_trait;

use crate::core::value::FormValues;

/// A persistence target for autosaved form values.
///
/// Implementations typically PUT the values to a backend autosave
/// endpoint; the coordinator treats them as opaque. A failing save is
/// reported back as an `anyhow::Error`; the coordinator logs it and
/// surfaces a transient failed status, it never retries.
#[async_trait]
pub trait AutosaveSink: Send + Sync + 'static {
  async fn save(&self, values: FormValues) -> anyhow::Result<()>;
}

/// Adapts a user-supplied asynchronous closure into an `AutosaveSink`.
pub struct FunctionalSink<F, Fut>
where
  F: Fn(FormValues) -> Fut + Send + Sync + 'static,
  Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
{
  save_fn: F,
  _phantom_fut: PhantomData<fn() -> Fut>,
}

impl<F, Fut> FunctionalSink<F, Fut>
where
  F: Fn(FormValues) -> Fut + Send + Sync + 'static,
  Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
{
  pub fn new(save_fn: F) -> Self {
    Self {
      save_fn,
      _phantom_fut: PhantomData,
    }
  }
}

#[async_trait]
impl<F, Fut> AutosaveSink for FunctionalSink<F, Fut>
where
  F: Fn(FormValues) -> Fut + Send + Sync + 'static,
  Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
{
  async fn save(&self, values: FormValues) -> anyhow::Result<()> {
    (self.save_fn)(values).await
  }
}
