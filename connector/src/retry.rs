//! Timeout and retry wrapper for any executor

use crate::errors::ExecutorError;
use crate::traits::Executor;
use async_trait::async_trait;
use config::ExecutionConfig;
use statement::Statement;
use std::future::Future;
use std::time::Duration;
use type_mapping::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Deadline for a single attempt
    pub timeout: Duration,
    /// Total attempts, the first one included
    pub max_attempts: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(20),
            max_attempts: 3,
            delay: Duration::ZERO,
        }
    }
}

impl From<&ExecutionConfig> for RetryPolicy {
    fn from(config: &ExecutionConfig) -> Self {
        Self {
            timeout: Duration::from_secs(config.timeout_seconds),
            max_attempts: config.retry_attempts,
            delay: Duration::from_millis(config.retry_delay_ms),
        }
    }
}

/// Bounds every call with a timeout and retries calls that time out.
/// Any other error is returned immediately.
#[derive(Debug, Clone)]
pub struct RetryingExecutor<E> {
    inner: E,
    policy: RetryPolicy,
}

impl<E: Executor> RetryingExecutor<E> {
    pub fn new(inner: E, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    pub fn inner(&self) -> &E {
        &self.inner
    }

    async fn attempt<T, F, Fut>(&self, operation: &str, call: F) -> Result<T, ExecutorError>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<T, ExecutorError>>,
    {
        let max_attempts = self.policy.max_attempts.max(1);
        let mut attempt = 1;
        loop {
            let result = match tokio::time::timeout(self.policy.timeout, call()).await {
                Ok(result) => result,
                Err(_) => Err(ExecutorError::Timeout(format!(
                    "{} exceeded {:?}",
                    operation, self.policy.timeout
                ))),
            };

            match result {
                Err(e) if e.is_timeout() && attempt < max_attempts => {
                    tracing::warn!(
                        "[RETRY] {} attempt {}/{} failed: {}",
                        operation,
                        attempt,
                        max_attempts,
                        e
                    );
                    if !self.policy.delay.is_zero() {
                        tokio::time::sleep(self.policy.delay).await;
                    }
                    attempt += 1;
                }
                other => return other,
            }
        }
    }
}

#[async_trait]
impl<E: Executor> Executor for RetryingExecutor<E> {
    async fn execute(&self, statement: &Statement) -> Result<u64, ExecutorError> {
        self.attempt("execute", move || self.inner.execute(statement)).await
    }

    async fn fetch_all(&self, statement: &Statement) -> Result<Vec<Record>, ExecutorError> {
        self.attempt("fetch_all", move || self.inner.fetch_all(statement)).await
    }
}
