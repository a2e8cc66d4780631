//! Askama page templates
//!
//! All pages extend `templates/base.html`. Values are HTML-escaped.

use askama::Template;
use axum::response::Html;

use crate::error::AppError;
use crate::models::{GenreLink, ShowDetail, ShowLink};

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage {
    pub genres: Vec<GenreLink>,
}

#[derive(Template)]
#[template(path = "tvshows.html")]
pub struct TvShowsPage {
    pub genre: String,
    pub tvshows: Vec<ShowLink>,
}

#[derive(Template)]
#[template(path = "show_detail.html")]
pub struct ShowDetailPage {
    pub genre: GenreLink,
    pub tvshow: ShowDetail,
}

/// Render a page into an HTML response body
pub fn render<T: Template>(page: &T) -> Result<Html<String>, AppError> {
    Ok(Html(page.render()?))
}
