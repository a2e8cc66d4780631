use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::db::DbError;
use crate::models::RouteKeyError;

/// Errors surfaced by route handlers.
///
/// Every database failure is answered with the body `<h3>DB Error</h3>`.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("connection failure: {0}")]
    ConnectionFailure(#[source] sqlx::Error),
    #[error("query failure: {0}")]
    QueryFailure(#[source] sqlx::Error),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("render failure: {0}")]
    Render(#[from] askama::Error),
}

impl From<DbError> for AppError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::Connection(e) => AppError::ConnectionFailure(e),
            DbError::Query(e) => AppError::QueryFailure(e),
        }
    }
}

impl From<RouteKeyError> for AppError {
    fn from(err: RouteKeyError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::ConnectionFailure(_) | AppError::QueryFailure(_) => {
                tracing::error!(error = %self, "DB Error");
                (StatusCode::INTERNAL_SERVER_ERROR, "<h3>DB Error</h3>")
            }
            AppError::Render(_) => {
                tracing::error!(error = %self, "Template rendering failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "<h3>Render Error</h3>")
            }
            AppError::NotFound(_) => {
                tracing::warn!(error = %self, "Show not found");
                (StatusCode::NOT_FOUND, "<h3>Show Not Found</h3>")
            }
            AppError::BadRequest(_) => {
                tracing::warn!(error = %self, "Rejected request");
                (StatusCode::BAD_REQUEST, "<h3>Bad Request</h3>")
            }
        };

        (status, Html(body)).into_response()
    }
}
