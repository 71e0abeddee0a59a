//! These tests start a disposable Postgres through Docker.
//! Run them with `cargo test -- --ignored`.

use sql_connection::{
    PostgresDbConfig, SqlTransaction, TransactionOps, connect_postgres_db,
};
use test_utils::TestPostgresContainer;

#[tokio::test]
#[ignore = "requires a running Docker daemon"]
async fn test_connect_returns_usable_pool() -> anyhow::Result<()> {
    let container = TestPostgresContainer::new().await?;
    let config =
        PostgresDbConfig::single_connection(&container.connection_string);

    let db = connect_postgres_db(&config).await?;
    let client = db.get_client().await?;
    let row = client.query_one("SELECT 42::INT4 AS answer", &[]).await?;
    let answer: i32 = row.get("answer");

    assert_eq!(answer, 42);
    Ok(())
}

#[tokio::test]
#[ignore = "requires a running Docker daemon"]
async fn test_transaction_rollback_discards_writes() -> anyhow::Result<()> {
    let container = TestPostgresContainer::new().await?;
    let mut client = container.db.get_client().await?;

    let tx = SqlTransaction(client.transaction().await?);
    tx.execute(
        "INSERT INTO users (id, name, \"createdAt\") VALUES ('u1', 'Temp', \
         NOW())",
        &[],
    )
    .await?;
    tx.rollback().await?;

    assert_eq!(container.count_rows("users").await?, 0);
    Ok(())
}

#[tokio::test]
#[ignore = "requires a running Docker daemon"]
async fn test_transaction_submit_persists_writes() -> anyhow::Result<()> {
    let container = TestPostgresContainer::new().await?;
    let mut client = container.db.get_client().await?;

    let tx = SqlTransaction(client.transaction().await?);
    tx.execute(
        "INSERT INTO users (id, name, \"createdAt\") VALUES ('u1', 'Kept', \
         NOW())",
        &[],
    )
    .await?;
    tx.submit().await?;

    assert_eq!(container.count_rows("users").await?, 1);
    Ok(())
}

#[tokio::test]
async fn test_connect_rejects_malformed_uri() {
    let config = PostgresDbConfig::single_connection("not a uri at all");

    let result = connect_postgres_db(&config).await;

    assert!(result.is_err());
}
