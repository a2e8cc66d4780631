//! Database row types for MySQL
//!
//! These map directly to rows of `genres` and `tv_shows`. Numeric columns are
//! cast in SQL so their wire types stay stable regardless of how the schema
//! declares them.

use sqlx::FromRow;

/// One row of the show-name lookup
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct ShowSummaryRow {
    pub tvid: i64,
    pub name: String,
}

/// Full detail row for a single show
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct ShowDetailRow {
    pub tvid: i64,
    pub name: String,
    pub lang: Option<String>,
    pub official_site: Option<String>,
    pub rating: Option<String>,
    pub image: Option<String>,
    pub summary: Option<String>,
    pub runtime: Option<i64>,
}
