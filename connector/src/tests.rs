use crate::*;
use async_trait::async_trait;
use statement::{BoundValue, Filter, InsertMode, Statement, StatementError};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;
use type_mapping::{FieldValue, Record};

fn row(store: &str, price: i64) -> Record {
    Record::new()
        .with("dt", "2018-05-09")
        .with("store_name", store)
        .with("discount_price", price)
}

#[tokio::test]
async fn test_single_create_sends_insert() {
    let executor = Arc::new(DryRunExecutor::new());
    let connector = MySqlConnector::mysql(executor.clone());

    connector
        .create("goods", row("xxx", 100).into(), InsertMode::Insert)
        .await
        .unwrap();

    let executed = executor.executed().await;
    assert_eq!(executed.len(), 1);
    assert_eq!(
        executed[0].query(),
        "INSERT INTO `goods` (`dt`, `store_name`, `discount_price`) VALUES (%s, %s, %s)"
    );
    assert_eq!(
        executed[0].params(),
        &[
            BoundValue::Text("2018-05-09".into()),
            BoundValue::Text("xxx".into()),
            BoundValue::Integer(100),
        ]
    );
}

#[tokio::test]
async fn test_batch_create_skips_failed_rows() {
    let executor = Arc::new(
        DryRunExecutor::new()
            .failing_when(|s| s.params().contains(&BoundValue::Text("bad".into()))),
    );
    let connector = MySqlConnector::mysql(executor.clone());
    let rows = vec![row("a", 1), row("bad", 2), row("c", 3)];

    connector
        .create("goods", rows.into(), InsertMode::Ignore)
        .await
        .unwrap();

    let executed = executor.executed().await;
    assert_eq!(executed.len(), 2);
    assert!(executed
        .iter()
        .all(|s| s.query().starts_with("INSERT IGNORE INTO `goods`")));
    assert_eq!(executed[1].params()[1], BoundValue::Text("c".into()));
}

#[tokio::test]
async fn test_batch_create_skips_empty_rows() {
    let executor = Arc::new(DryRunExecutor::new());
    let connector = CassandraConnector::cassandra(executor.clone());
    let rows = vec![row("a", 1), Record::new(), row("c", 3)];

    connector
        .create("goods", rows.into(), InsertMode::Insert)
        .await
        .unwrap();

    let executed = executor.executed().await;
    assert_eq!(executed.len(), 2);
    assert!(executed.iter().all(|s| s.params().len() == 3));

    let err = connector
        .create("goods", Record::new().into(), InsertMode::Insert)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ConnectorError::Statement(StatementError::EmptyAssignments(_))
    ));
}

#[tokio::test]
async fn test_single_create_propagates_failure() {
    let executor = DryRunExecutor::new().failing_when(|_| true);
    let connector = MySqlConnector::mysql(executor);

    let err = connector
        .create("goods", row("a", 1).into(), InsertMode::Insert)
        .await
        .unwrap_err();
    assert!(matches!(err, ConnectorError::Executor(ExecutorError::Query(_))));
}

#[tokio::test]
async fn test_empty_batch_is_noop() {
    let executor = Arc::new(DryRunExecutor::new());
    let connector = CassandraConnector::cassandra(executor.clone());

    connector
        .create("events", Vec::<Record>::new().into(), InsertMode::Insert)
        .await
        .unwrap();
    assert!(executor.executed().await.is_empty());
}

#[tokio::test]
async fn test_select_returns_scripted_rows() {
    let rows = vec![row("xxx", 100), row("yyy", 90)];
    let executor = Arc::new(DryRunExecutor::with_results(vec![rows.clone()]));
    let connector = MySqlConnector::mysql(executor.clone());

    let fetched = connector
        .select(
            "goods",
            &["dt", "category", "store_name", "discount_price"],
            &[Filter::eq("dt", "2018-05-09")],
            &["category"],
            Some(100),
        )
        .await
        .unwrap();
    assert_eq!(fetched, rows);

    let executed = executor.executed().await;
    assert_eq!(
        executed[0].query(),
        "SELECT `dt`, `category`, `store_name`, `discount_price` FROM `goods` WHERE `dt` =  %s ORDER BY `category` LIMIT 100"
    );

    // result sets are consumed one per call
    let again = connector.select("goods", &[], &[], &[], None).await.unwrap();
    assert!(again.is_empty());
}

#[tokio::test]
async fn test_update_and_delete_through_cassandra() {
    let executor = Arc::new(DryRunExecutor::new());
    let connector = CassandraConnector::cassandra(executor.clone());
    let filters = [Filter::eq("dt", "2018-05-09"), Filter::eq("store_name", "xxx")];

    connector
        .update("goods", &Record::new().with("discount_price", 110), &filters)
        .await
        .unwrap();
    connector.delete("goods", &filters[1..]).await.unwrap();

    let executed = executor.executed().await;
    assert_eq!(
        executed[0].query(),
        "UPDATE \"goods\" SET \"discount_price\"=? WHERE \"dt\" =  ? AND \"store_name\" =  ? IF EXISTS"
    );
    assert_eq!(executed[0].params()[0], BoundValue::Integer(110));
    assert_eq!(
        executed[1].query(),
        "DELETE FROM \"goods\" WHERE \"store_name\" =  ?"
    );
}

#[tokio::test]
async fn test_statement_errors_never_reach_executor() {
    let executor = Arc::new(DryRunExecutor::new());
    let connector = MySqlConnector::mysql(executor.clone());

    let err = connector
        .delete("goods", &[Filter::new("x", "between", 1)])
        .await
        .unwrap_err();
    assert!(matches!(err, ConnectorError::Statement(_)));

    let err = connector
        .update("goods", &Record::new(), &[Filter::eq("id", 1)])
        .await
        .unwrap_err();
    assert!(matches!(err, ConnectorError::Statement(_)));

    assert!(executor.executed().await.is_empty());
}

/// Times out a fixed number of calls, then succeeds
struct SlowExecutor {
    calls: AtomicU32,
    slow_calls: u32,
}

impl SlowExecutor {
    fn new(slow_calls: u32) -> Self {
        Self {
            calls: AtomicU32::new(0),
            slow_calls,
        }
    }

    async fn respond(&self) -> Result<(), ExecutorError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if call < self.slow_calls {
            tokio::time::sleep(Duration::from_secs(60)).await;
        }
        Ok(())
    }
}

#[async_trait]
impl Executor for SlowExecutor {
    async fn execute(&self, _statement: &Statement) -> Result<u64, ExecutorError> {
        self.respond().await?;
        Ok(1)
    }

    async fn fetch_all(&self, _statement: &Statement) -> Result<Vec<Record>, ExecutorError> {
        self.respond().await?;
        Ok(vec![Record::new().with("ok", true)])
    }
}

fn quick_policy(max_attempts: u32) -> RetryPolicy {
    RetryPolicy {
        timeout: Duration::from_millis(50),
        max_attempts,
        delay: Duration::ZERO,
    }
}

#[tokio::test(start_paused = true)]
async fn test_retry_recovers_after_timeouts() {
    let executor = RetryingExecutor::new(SlowExecutor::new(2), quick_policy(3));
    let statement = Statement::new("SELECT 1".into(), vec![]);

    let rows = executor.fetch_all(&statement).await.unwrap();
    assert_eq!(rows[0].get("ok"), Some(&FieldValue::Boolean(true)));
    assert_eq!(executor.inner().calls.load(Ordering::SeqCst), 3);
}

#[tokio::test(start_paused = true)]
async fn test_retry_gives_up_after_max_attempts() {
    let executor = RetryingExecutor::new(SlowExecutor::new(10), quick_policy(3));
    let statement = Statement::new("DELETE FROM `t` ".into(), vec![]);

    let err = executor.execute(&statement).await.unwrap_err();
    assert!(err.is_timeout());
    assert_eq!(executor.inner().calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_retry_does_not_repeat_other_errors() {
    let executor = RetryingExecutor::new(
        Arc::new(DryRunExecutor::new().failing_when(|_| true)),
        quick_policy(5),
    );
    let statement = Statement::new("DELETE FROM `t` ".into(), vec![]);

    let err = executor.execute(&statement).await.unwrap_err();
    assert!(matches!(err, ExecutorError::Query(_)));
}

#[test]
fn test_policy_from_execution_config() {
    let policy = RetryPolicy::from(&config::ExecutionConfig::default());
    assert_eq!(policy, RetryPolicy::default());
    assert_eq!(policy.timeout, Duration::from_secs(20));
    assert_eq!(policy.max_attempts, 3);
}
