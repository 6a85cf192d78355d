//! Executor that records statements instead of sending them
//!
//! Used for previewing generated CQL/SQL and for tests. Rows returned by
//! `fetch_all` are scripted up front, one result set per call.

use crate::errors::ExecutorError;
use crate::traits::Executor;
use async_trait::async_trait;
use statement::Statement;
use std::collections::VecDeque;
use tokio::sync::Mutex;
use type_mapping::Record;

type FailurePredicate = Box<dyn Fn(&Statement) -> bool + Send + Sync>;

#[derive(Default)]
pub struct DryRunExecutor {
    executed: Mutex<Vec<Statement>>,
    results: Mutex<VecDeque<Vec<Record>>>,
    fail_when: Option<FailurePredicate>,
}

impl std::fmt::Debug for DryRunExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DryRunExecutor")
            .field("has_failure_rule", &self.fail_when.is_some())
            .finish()
    }
}

impl DryRunExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue result sets, handed out in order by successive `fetch_all` calls
    pub fn with_results(results: Vec<Vec<Record>>) -> Self {
        Self {
            results: Mutex::new(results.into()),
            ..Self::default()
        }
    }

    /// Reject every statement the predicate matches with a query error
    pub fn failing_when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&Statement) -> bool + Send + Sync + 'static,
    {
        self.fail_when = Some(Box::new(predicate));
        self
    }

    /// Statements accepted so far, in execution order
    pub async fn executed(&self) -> Vec<Statement> {
        self.executed.lock().await.clone()
    }

    pub async fn clear(&self) {
        self.executed.lock().await.clear();
    }

    async fn record(&self, statement: &Statement) -> Result<(), ExecutorError> {
        if self.fail_when.as_ref().is_some_and(|rule| rule(statement)) {
            tracing::debug!("[DRY_RUN] rejected: {}", statement.query());
            return Err(ExecutorError::Query(format!(
                "statement rejected: {}",
                statement.query()
            )));
        }
        tracing::info!(
            "[DRY_RUN] {} {:?}",
            statement.query(),
            statement.params()
        );
        self.executed.lock().await.push(statement.clone());
        Ok(())
    }
}

#[async_trait]
impl Executor for DryRunExecutor {
    async fn execute(&self, statement: &Statement) -> Result<u64, ExecutorError> {
        self.record(statement).await?;
        Ok(1)
    }

    async fn fetch_all(&self, statement: &Statement) -> Result<Vec<Record>, ExecutorError> {
        self.record(statement).await?;
        Ok(self.results.lock().await.pop_front().unwrap_or_default())
    }
}
