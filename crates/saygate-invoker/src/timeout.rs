use async_trait::async_trait;
use std::time::Duration;

use crate::{InvokeError, InvokeResult, Invoker};

/// Wraps an invoker so that each call fails with [`InvokeError::Timeout`]
/// once `timeout` elapses. The pending call is dropped at that point.
pub struct TimeoutInvoker<I> {
    inner: I,
    timeout: Duration,
}

impl<I> TimeoutInvoker<I> {
    pub fn new(inner: I, timeout: Duration) -> Self {
        Self { inner, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl<I: Invoker> Invoker for TimeoutInvoker<I> {
    async fn invoke(&self, function_name: &str, payload: Vec<u8>) -> InvokeResult<Vec<u8>> {
        tokio::time::timeout(self.timeout, self.inner.invoke(function_name, payload))
            .await
            .map_err(|_| InvokeError::Timeout(self.timeout))?
    }
}
