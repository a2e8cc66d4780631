//! Composite `<genre>-<tvid>` key carried in detail links
//!
//! The key is split on the last `-`, so genres such as `Science-Fiction`
//! survive the round trip. The id part must be an integer.

use std::fmt;
use thiserror::Error;

pub const SEPARATOR: char = '-';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteKey {
    pub genre: String,
    pub tvid: i64,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RouteKeyError {
    #[error("missing '-' between genre and id in {0:?}")]
    MissingSeparator(String),
    #[error("empty genre in {0:?}")]
    EmptyGenre(String),
    #[error("id is not a number in {0:?}")]
    InvalidId(String),
}

impl RouteKey {
    pub fn new(genre: impl Into<String>, tvid: i64) -> Self {
        Self {
            genre: genre.into(),
            tvid,
        }
    }

    pub fn parse(raw: &str) -> Result<Self, RouteKeyError> {
        let (genre, tvid) = raw
            .rsplit_once(SEPARATOR)
            .ok_or_else(|| RouteKeyError::MissingSeparator(raw.to_string()))?;

        if genre.is_empty() {
            return Err(RouteKeyError::EmptyGenre(raw.to_string()));
        }

        let tvid = tvid
            .parse::<i64>()
            .map_err(|_| RouteKeyError::InvalidId(raw.to_string()))?;

        Ok(Self::new(genre, tvid))
    }

    /// Path of the detail page, percent-encoded
    pub fn detail_href(&self) -> String {
        format!("/getDetail/{}", urlencoding::encode(&self.to_string()))
    }
}

impl fmt::Display for RouteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.genre, SEPARATOR, self.tvid)
    }
}
