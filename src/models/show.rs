//! View models built from database rows

use crate::db::models::{ShowDetailRow, ShowSummaryRow};
use crate::models::route_key::RouteKey;

/// Entry on the genre index page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreLink {
    pub name: String,
    pub href: String,
}

impl GenreLink {
    pub fn new(name: String) -> Self {
        let href = format!("/getTVShows?genre={}", urlencoding::encode(&name));
        Self { name, href }
    }
}

/// Entry on a genre's show list; `key` is the `<genre>-<tvid>` token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowLink {
    pub key: String,
    pub name: String,
    pub href: String,
}

impl ShowLink {
    pub fn from_row(genre: &str, row: ShowSummaryRow) -> Self {
        let key = RouteKey::new(genre, row.tvid);
        Self {
            key: key.to_string(),
            href: key.detail_href(),
            name: row.name,
        }
    }
}

/// Labelled value on the detail page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailField {
    pub label: &'static str,
    pub value: String,
}

/// Detail page model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowDetail {
    pub tvid: i64,
    pub name: String,
    pub image: String,
    pub summary: String,
    pub official_site: String,
    pub fields: Vec<DetailField>,
}

impl From<ShowDetailRow> for ShowDetail {
    fn from(row: ShowDetailRow) -> Self {
        let mut fields = Vec::new();
        if let Some(lang) = row.lang {
            fields.push(DetailField {
                label: "Language",
                value: lang,
            });
        }
        if let Some(rating) = row.rating {
            fields.push(DetailField {
                label: "Rating",
                value: rating,
            });
        }
        if let Some(runtime) = row.runtime {
            fields.push(DetailField {
                label: "Runtime",
                value: format!("{} min", runtime),
            });
        }

        ShowDetail {
            tvid: row.tvid,
            name: row.name,
            image: row.image.unwrap_or_default(),
            summary: row.summary.unwrap_or_default(),
            official_site: row.official_site.unwrap_or_default(),
            fields,
        }
    }
}
