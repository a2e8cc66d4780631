//! Database repositories
//!
//! Query functions take a `&mut MySqlConnection` so a caller can run several
//! statements on one acquired connection. [`ShowStore`] is what handlers see.

pub mod genres;
pub mod shows;

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::db::models::{ShowDetailRow, ShowSummaryRow};
use crate::db::DbError;

/// Read access to the show catalogue
#[async_trait]
pub trait ShowStore: Send + Sync {
    /// Distinct genre names in database order
    async fn distinct_genres(&self) -> Result<Vec<String>, DbError>;

    /// Up to [`shows::SHOW_LIST_LIMIT`] shows tagged with `genre`, name descending
    async fn shows_by_genre(&self, genre: &str) -> Result<Vec<ShowSummaryRow>, DbError>;

    /// Detail row for `tvid`, if any
    async fn show_detail(&self, tvid: i64) -> Result<Option<ShowDetailRow>, DbError>;
}

/// [`ShowStore`] backed by a MySQL pool
#[derive(Clone)]
pub struct MySqlShowStore {
    pool: MySqlPool,
}

impl MySqlShowStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShowStore for MySqlShowStore {
    async fn distinct_genres(&self) -> Result<Vec<String>, DbError> {
        let mut conn = self.pool.acquire().await.map_err(DbError::Connection)?;
        genres::distinct_genres(&mut conn)
            .await
            .map_err(DbError::Query)
    }

    async fn shows_by_genre(&self, genre: &str) -> Result<Vec<ShowSummaryRow>, DbError> {
        // Both lookups share this connection; it goes back to the pool on drop.
        let mut conn = self.pool.acquire().await.map_err(DbError::Connection)?;

        let tvids = genres::tvids_by_genre(&mut conn, genre)
            .await
            .map_err(DbError::Query)?;

        shows::names_by_ids(&mut conn, &tvids)
            .await
            .map_err(DbError::Query)
    }

    async fn show_detail(&self, tvid: i64) -> Result<Option<ShowDetailRow>, DbError> {
        let mut conn = self.pool.acquire().await.map_err(DbError::Connection)?;
        shows::detail_by_id(&mut conn, tvid)
            .await
            .map_err(DbError::Query)
    }
}
