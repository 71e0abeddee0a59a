use std::time::Duration;

use anyhow::{Context, Result};
use sql_connection::{PostgresDbConfig, SqlConnect, connect_postgres_db};
use testcontainers_modules::{
    postgres::Postgres,
    testcontainers::{ContainerAsync, ImageExt, runners::AsyncRunner},
};
use tracing::debug;

/// Tables the demo-content seeder reads and writes, in the column naming the
/// web application uses.
pub const CONTENT_SCHEMA: &str = include_str!("content_schema.sql");

/// Disposable PostgreSQL with [`CONTENT_SCHEMA`] applied.
pub struct TestPostgresContainer {
    pub db: SqlConnect,
    pub connection_string: String,
    // Keep the container alive for the lifetime of this struct
    _container: ContainerAsync<Postgres>,
}

impl TestPostgresContainer {
    pub async fn new() -> Result<Self> {
        let container = Postgres::default()
            .with_env_var("POSTGRES_DB", "testdb")
            .with_env_var("POSTGRES_USER", "testuser")
            .with_env_var("POSTGRES_PASSWORD", "testpass")
            .start()
            .await
            .context("Failed to start PostgreSQL container")?;

        let host = container.get_host().await?;
        let port = container.get_host_port_ipv4(5432).await?;
        let connection_string = format!(
            "postgresql://testuser:testpass@{host}:{port}/testdb"
        );

        let db = Self::wait_until_ready(&connection_string).await?;

        let instance = Self {
            db,
            connection_string,
            _container: container,
        };
        instance
            .execute_batch(CONTENT_SCHEMA)
            .await
            .context("Failed to apply content schema")?;

        Ok(instance)
    }

    async fn wait_until_ready(connection_string: &str) -> Result<SqlConnect> {
        let config = PostgresDbConfig {
            uri: connection_string.to_string(),
            max_conn: Some(4),
            min_conn: None,
            logger: false,
        };
        let db = connect_postgres_db(&config).await?;

        let mut attempts = 0;
        loop {
            let probe = match db.get_client().await {
                Ok(client) => {
                    client
                        .query_one("SELECT 1", &[])
                        .await
                        .map(|_| ())
                        .map_err(anyhow::Error::from)
                }
                Err(e) => Err(anyhow::Error::from(e)),
            };

            match probe {
                Ok(()) => return Ok(db),
                Err(e) if attempts < 20 => {
                    attempts += 1;
                    debug!(attempts, error = %e, "PostgreSQL not ready yet");
                    tokio::time::sleep(Duration::from_millis(500)).await;
                }
                Err(e) => return Err(e).context("PostgreSQL not ready"),
            }
        }
    }

    pub async fn execute_batch(&self, sql: &str) -> Result<()> {
        let client = self.db.get_client().await?;
        client
            .batch_execute(sql)
            .await
            .context("Failed to execute SQL")?;
        Ok(())
    }

    pub async fn insert_user(
        &self, id: &str, name: Option<&str>, created_offset_days: i32,
    ) -> Result<()> {
        let client = self.db.get_client().await?;
        client
            .execute(
                "INSERT INTO users (id, name, \"createdAt\") VALUES ($1, $2, \
                 NOW() - make_interval(days => $3))",
                &[&id, &name, &created_offset_days],
            )
            .await
            .context("Failed to insert user")?;
        Ok(())
    }

    /// Table names come from test code only.
    pub async fn count_rows(&self, table: &str) -> Result<i64> {
        let client = self.db.get_client().await?;
        let sql = format!("SELECT COUNT(*) FROM {table}");
        let row = client.query_one(sql.as_str(), &[]).await?;
        Ok(row.get(0))
    }
}
