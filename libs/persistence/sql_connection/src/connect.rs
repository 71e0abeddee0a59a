use std::time::Duration;

use deadpool_postgres::{Manager, ManagerConfig, Pool, RecyclingMethod};
use tokio_postgres::NoTls;
use tracing::{debug, info, instrument};

use crate::{
    SqlConnect,
    config::{DbConnectConfig, DbOptionsConfig},
};

/// Opens `count` connections up front so connection failures surface
/// immediately instead of at the first query.
async fn prewarm_pool(pool: &Pool, count: u32) -> Result<(), anyhow::Error> {
    debug!("Pre-warming pool with {} connections", count);
    let mut held = Vec::with_capacity(count as usize);

    for i in 0..count {
        held.push(pool.get().await?);
        debug!("Pre-warmed connection {}/{}", i + 1, count);
    }
    drop(held);

    let status = pool.status();
    info!(
        "Pool pre-warming complete: {} connections available",
        status.available
    );
    Ok(())
}

#[instrument(skip_all, name = "connect-pgsql")]
pub async fn connect_postgres_db<C>(
    config: &C,
) -> Result<SqlConnect, anyhow::Error>
where
    C: DbConnectConfig + DbOptionsConfig,
{
    let pg_config = config.uri().parse::<tokio_postgres::Config>()?;

    info!(
        postgres.scheme = config.scheme(),
        postgres.host = ?pg_config.get_hosts(),
        postgres.dbname = ?pg_config.get_dbname(),
        postgres.max_conn = ?config.max_conn(),
        postgres.min_conn = ?config.min_conn(),
        postgres.sql_logger = config.sql_logger()
    );

    let mgr_config = ManagerConfig {
        recycling_method: RecyclingMethod::Fast,
    };
    let mgr = Manager::from_config(pg_config, NoTls, mgr_config);

    let mut pool_builder = Pool::builder(mgr)
        .runtime(deadpool_postgres::Runtime::Tokio1)
        .wait_timeout(Some(Duration::from_secs(5)))
        .create_timeout(Some(Duration::from_secs(10)))
        .recycle_timeout(Some(Duration::from_secs(1)));

    if let Some(max_conn) = config.max_conn() {
        pool_builder = pool_builder.max_size(max_conn as usize);
    }

    let pool = pool_builder.build()?;

    if let Some(min_conn) = config.min_conn() {
        prewarm_pool(&pool, min_conn).await?;
    }

    Ok(SqlConnect::new(pool))
}
