//! Database connection pool management

use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};
use sqlx::Connection;
use std::time::Duration;
use tracing::info;

use crate::config::Config;
use crate::db::DbError;

/// Build connection options from config
pub fn connect_options(config: &Config) -> MySqlConnectOptions {
    MySqlConnectOptions::new()
        .host(&config.db_host)
        .port(config.db_port)
        .username(&config.db_user)
        .password(&config.db_password)
        .database(&config.db_name)
        .timezone(Some(config.db_timezone.clone()))
}

/// Create a MySQL connection pool
///
/// The pool is lazy: no connection is opened until the first acquire, which
/// is the startup liveness check.
pub fn create_pool(config: &Config) -> MySqlPool {
    info!(
        "Creating MySQL pool for {}:{}/{}",
        config.db_host, config.db_port, config.db_name
    );

    let pool = MySqlPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(config.db_acquire_timeout())
        .idle_timeout(Duration::from_secs(600))
        .connect_lazy_with(connect_options(config));

    info!(
        "MySQL connection pool created with max {} connections",
        config.db_max_connections
    );

    pool
}

/// Acquire one connection, ping it and hand it back to the pool
pub async fn liveness_check(pool: &MySqlPool) -> Result<(), DbError> {
    let mut conn = pool.acquire().await.map_err(DbError::Connection)?;
    conn.ping().await.map_err(DbError::Query)?;
    info!("Database liveness check passed");
    Ok(())
}
