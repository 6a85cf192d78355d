//! Prints the CQL a Cassandra connector would send, without a cluster.
//!
//! ```sh
//! cargo run --example cql_dry_run
//! ```

use std::sync::Arc;

use chrono::Utc;
use crudhaus::prelude::*;
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const CONFIG: &str = r#"
[cassandra]
contact_points = ["127.0.0.1"]
keyspace = "shop"

[execution]
timeout_seconds = 5
retry_attempts = 2
"#;

#[derive(Serialize)]
struct Visit {
    visitor_id: i64,
    page: String,
    tags: Vec<String>,
    seen_at: chrono::DateTime<Utc>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let crudhaus = Crudhaus::new(AppConfig::from_toml_str(CONFIG)?);
    let recorder = Arc::new(DryRunExecutor::new());
    let visits = crudhaus.cassandra(recorder.clone())?;

    let visit = Visit {
        visitor_id: 42,
        page: "/checkout".to_string(),
        tags: vec!["mobile".to_string(), "promo".to_string()],
        seen_at: Utc::now(),
    };
    visits
        .create("visits", serialize_to_record(&visit)?.into(), InsertMode::Insert)
        .await?;

    visits
        .select(
            "visits",
            &["page", "seen_at"],
            &[
                Filter::eq("visitor_id", 42),
                Filter::new("tags", "CONTAINS", "promo"),
            ],
            &["-seen_at"],
            Some(20),
        )
        .await?;

    visits
        .update(
            "visits",
            &Record::new().with("page", "/thanks"),
            &[Filter::eq("visitor_id", 42)],
        )
        .await?;

    visits
        .delete("visits", &[Filter::in_values("visitor_id", vec![42, 43])])
        .await?;

    for statement in recorder.executed().await {
        println!("{}", statement.query());
        println!("    {:?}", statement.params());
    }
    Ok(())
}
