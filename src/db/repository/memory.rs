//! In-memory [`ShowStore`] for handler tests
//!
//! Mirrors the MySQL statements (filter, name descending, limit) and models a
//! bounded pool with a semaphore so tests can assert that no "connection" is
//! kept after a request, including failed ones.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::{Semaphore, SemaphorePermit};

use super::shows::SHOW_LIST_LIMIT;
use super::ShowStore;
use crate::db::models::{ShowDetailRow, ShowSummaryRow};
use crate::db::DbError;

pub const POOL_SIZE: usize = 4;

/// Which stage of a lookup should fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outage {
    None,
    Connect,
    Query,
}

pub struct MemoryShowStore {
    /// (genre, tvid) pairs in insertion order
    genres: Vec<(String, i64)>,
    shows: Vec<ShowDetailRow>,
    permits: Arc<Semaphore>,
    connect_down: AtomicBool,
    query_down: AtomicBool,
}

impl MemoryShowStore {
    pub fn new() -> Self {
        Self {
            genres: Vec::new(),
            shows: Vec::new(),
            permits: Arc::new(Semaphore::new(POOL_SIZE)),
            connect_down: AtomicBool::new(false),
            query_down: AtomicBool::new(false),
        }
    }

    pub fn with_show(mut self, tvid: i64, name: &str, genres: &[&str]) -> Self {
        for genre in genres {
            self.genres.push((genre.to_string(), tvid));
        }
        self.shows.push(ShowDetailRow {
            tvid,
            name: name.to_string(),
            lang: Some("English".to_string()),
            official_site: Some(format!("https://example.com/shows/{}", tvid)),
            rating: Some("8.5".to_string()),
            image: None,
            summary: Some(format!("About {}", name)),
            runtime: Some(60),
        });
        self
    }

    /// Tag without a matching `tv_shows` row
    pub fn with_tag(mut self, genre: &str, tvid: i64) -> Self {
        self.genres.push((genre.to_string(), tvid));
        self
    }

    pub fn set_outage(&self, outage: Outage) {
        self.connect_down
            .store(outage == Outage::Connect, Ordering::SeqCst);
        self.query_down.store(outage == Outage::Query, Ordering::SeqCst);
    }

    /// Semaphore standing in for the pool, for availability assertions
    pub fn permits(&self) -> Arc<Semaphore> {
        self.permits.clone()
    }

    async fn acquire(&self) -> Result<SemaphorePermit<'_>, DbError> {
        let permit = self
            .permits
            .acquire()
            .await
            .map_err(|_| DbError::Connection(sqlx::Error::PoolClosed))?;

        if self.connect_down.load(Ordering::SeqCst) {
            return Err(DbError::Connection(sqlx::Error::PoolTimedOut));
        }
        Ok(permit)
    }

    fn query(&self) -> Result<(), DbError> {
        if self.query_down.load(Ordering::SeqCst) {
            return Err(DbError::Query(sqlx::Error::Protocol(
                "server has gone away".to_string(),
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl ShowStore for MemoryShowStore {
    async fn distinct_genres(&self) -> Result<Vec<String>, DbError> {
        let _conn = self.acquire().await?;
        self.query()?;

        let mut seen: Vec<String> = Vec::new();
        for (genre, _) in &self.genres {
            if !seen.contains(genre) {
                seen.push(genre.clone());
            }
        }
        Ok(seen)
    }

    async fn shows_by_genre(&self, genre: &str) -> Result<Vec<ShowSummaryRow>, DbError> {
        let _conn = self.acquire().await?;
        self.query()?;

        let tvids: Vec<i64> = self
            .genres
            .iter()
            .filter(|(g, _)| g == genre)
            .map(|(_, tvid)| *tvid)
            .collect();

        self.query()?;
        let mut rows: Vec<ShowSummaryRow> = self
            .shows
            .iter()
            .filter(|show| tvids.contains(&show.tvid))
            .map(|show| ShowSummaryRow {
                tvid: show.tvid,
                name: show.name.clone(),
            })
            .collect();
        rows.sort_by(|a, b| b.name.cmp(&a.name));
        rows.truncate(SHOW_LIST_LIMIT as usize);
        Ok(rows)
    }

    async fn show_detail(&self, tvid: i64) -> Result<Option<ShowDetailRow>, DbError> {
        let _conn = self.acquire().await?;
        self.query()?;

        Ok(self.shows.iter().find(|show| show.tvid == tvid).cloned())
    }
}
