use axum::{
    extract::{Path, Query, State},
    response::Html,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::error::AppError;
use crate::models::{GenreLink, RouteKey, ShowDetail, ShowLink};
use crate::views::{self, ShowDetailPage, TvShowsPage};
use crate::AppState;

/// Query params for the genre listing
#[derive(Debug, Deserialize)]
pub struct TvShowsQuery {
    pub genre: Option<String>,
}

/// GET /getTVShows?genre=<g> - Shows tagged with a genre
///
/// The genre is not checked against the known set; an unknown one yields an
/// empty list.
pub async fn get_tv_shows(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TvShowsQuery>,
) -> Result<Html<String>, AppError> {
    let genre = query
        .genre
        .filter(|g| !g.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest("genre is required".to_string()))?;

    let tvshows: Vec<ShowLink> = state
        .store
        .shows_by_genre(&genre)
        .await?
        .into_iter()
        .map(|row| ShowLink::from_row(&genre, row))
        .collect();

    tracing::debug!("Genre {:?} has {} shows", genre, tvshows.len());

    views::render(&TvShowsPage { genre, tvshows })
}

/// GET /getDetail/:id - Detail page for a `<genre>-<tvid>` key
pub async fn get_detail(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let key = RouteKey::parse(&id)?;

    let row = state
        .store
        .show_detail(key.tvid)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("tvid {}", key.tvid)))?;

    views::render(&ShowDetailPage {
        genre: GenreLink::new(key.genre),
        tvshow: ShowDetail::from(row),
    })
}
