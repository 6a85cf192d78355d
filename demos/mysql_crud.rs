//! Select, copy, update and delete goods rows on a live MySQL server.
//!
//! Reads `crudhaus.toml` (or the file named by `CRUDHAUS_CONFIG`) and needs a
//! `goods` table with `dt`, `category`, `store_name` and `discount_price`.
//!
//! ```sh
//! RUST_LOG=debug cargo run --example mysql_crud
//! ```

use crudhaus::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,connector=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let crudhaus = Crudhaus::load()?;
    let goods = crudhaus.mysql().await?;

    let rows = goods
        .select(
            "goods",
            &["dt", "category", "store_name", "discount_price"],
            &[Filter::eq("dt", "2018-05-09")],
            &["category"],
            Some(100),
        )
        .await?;
    println!("Fetched {} rows for 2018-05-09", rows.len());
    for row in rows.iter().take(5) {
        println!("  {:?}", row);
    }

    // Re-insert the fetched rows under the test store name; duplicates are skipped
    let copies: Vec<Record> = rows
        .into_iter()
        .map(|mut row| {
            row.insert("store_name", "xxx");
            row
        })
        .collect();
    goods.create("goods", copies.into(), InsertMode::Ignore).await?;

    goods
        .update(
            "goods",
            &Record::new().with("discount_price", 110),
            &[Filter::eq("dt", "2018-05-09"), Filter::eq("store_name", "xxx")],
        )
        .await?;

    goods
        .delete("goods", &[Filter::eq("store_name", "xxx")])
        .await?;

    println!("Done");
    Ok(())
}
