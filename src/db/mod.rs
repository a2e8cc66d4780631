//! Database module
//!
//! MySQL integration using sqlx with:
//! - Connection pool management and startup liveness check
//! - Row types with FromRow
//! - Repository functions for the read-only show catalogue

pub mod error;
pub mod models;
pub mod pool;
pub mod repository;

// Re-export commonly used items
pub use error::DbError;
pub use pool::{create_pool, liveness_check};
pub use repository::{MySqlShowStore, ShowStore};
