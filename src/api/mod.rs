//! HTTP access to the article backend.

mod client;
mod error;

pub use client::ArticleClient;
pub use error::{FetchError, FetchErrorKind};
