//! HTTP routes
//!
//! | Method | Path              | Handler                  |
//! |--------|-------------------|--------------------------|
//! | GET    | `/`, `/index.html`| [`genres::index`]        |
//! | GET    | `/getTVShows`     | [`tvshows::get_tv_shows`]|
//! | GET    | `/getDetail/:id`  | [`tvshows::get_detail`]  |

pub mod genres;
pub mod tvshows;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::AppState;

/// Build the application router
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(genres::index))
        .route("/index.html", get(genres::index))
        .route("/getTVShows", get(tvshows::get_tv_shows))
        .route("/getDetail/:id", get(tvshows::get_detail))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .with_state(state)
}
