//! View-layer types shared by routes and templates

pub mod route_key;
pub mod show;

pub use route_key::{RouteKey, RouteKeyError};
pub use show::{GenreLink, ShowDetail, ShowLink};
