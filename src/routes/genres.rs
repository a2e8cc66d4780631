use axum::{extract::State, response::Html};
use std::sync::Arc;

use crate::error::AppError;
use crate::models::GenreLink;
use crate::views::{self, IndexPage};
use crate::AppState;

/// GET / and /index.html - List distinct genres
pub async fn index(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    let genres: Vec<GenreLink> = state
        .store
        .distinct_genres()
        .await?
        .into_iter()
        .map(GenreLink::new)
        .collect();

    tracing::debug!("Listing {} genres", genres.len());

    views::render(&IndexPage { genres })
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use crate::db::repository::memory::{Outage, POOL_SIZE};
    use crate::routes::test_support::{app, attr_values, catalogue, get};

    #[tokio::test]
    async fn test_lists_each_genre_once() {
        let response = get(app(catalogue()), "/").await;

        assert_eq!(response.status, StatusCode::OK);
        assert!(response.content_type.starts_with("text/html"));

        let hrefs = attr_values(&response.body, "href");
        assert_eq!(hrefs.len(), 4);
        for genre in ["Drama", "Comedy", "Science-Fiction", "Documentary"] {
            assert_eq!(
                response.body.matches(&format!(">{}</a>", genre)).count(),
                1,
                "genre {} should appear once",
                genre
            );
        }
    }

    #[tokio::test]
    async fn test_index_html_alias() {
        let root = get(app(catalogue()), "/").await;
        let alias = get(app(catalogue()), "/index.html").await;

        assert_eq!(alias.status, StatusCode::OK);
        assert_eq!(alias.body, root.body);
    }

    #[tokio::test]
    async fn test_outage_returns_db_error_and_releases_connection() {
        for outage in [Outage::Connect, Outage::Query] {
            let store = catalogue();
            store.set_outage(outage);
            let permits = store.permits();

            let response = get(app(store), "/").await;

            assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
            assert!(response.content_type.starts_with("text/html"));
            assert_eq!(response.body, "<h3>DB Error</h3>");
            assert_eq!(permits.available_permits(), POOL_SIZE);
        }
    }
}
