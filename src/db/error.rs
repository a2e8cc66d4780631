use thiserror::Error;

/// Failures raised while talking to MySQL.
///
/// Acquiring a connection and running a statement fail for different reasons
/// (pool exhausted or server unreachable vs. a bad statement or dropped
/// session), so they are kept apart for logging even though both end up as
/// a 500 for the client.
#[derive(Error, Debug)]
pub enum DbError {
    #[error("connection failure: {0}")]
    Connection(#[source] sqlx::Error),
    #[error("query failure: {0}")]
    Query(#[source] sqlx::Error),
}
