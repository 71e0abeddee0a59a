pub use config::{DbConnectConfig, DbOptionsConfig, PostgresDbConfig};
pub use database_traits;
pub use database_traits::transaction::{SqlTransaction, TransactionOps};
pub use deadpool_postgres::PoolError;
pub use impl_get_connect::SqlConnect;
pub use tokio_postgres::Error as PgError;

pub mod config;
mod connect;
mod impl_get_connect;

pub use connect::connect_postgres_db;
