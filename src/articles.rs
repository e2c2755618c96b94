//! Article records exchanged with the backend.
//!
//! Every optional field accepts both a missing key and an explicit `null`.

use serde::{Deserialize, Serialize};

/// Backend identifier of an article.
pub type ArticleId = u64;

/// Sport an article belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sport {
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
}

/// Team mentioned in an article.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Team {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Article as returned by the listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub sport: Option<Sport>,
    #[serde(default)]
    pub date: Option<String>,
}

/// Minimal reference used to request an article's details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArticleSummary {
    pub id: ArticleId,
}

impl ArticleSummary {
    pub fn new(id: ArticleId) -> Self {
        Self { id }
    }
}

impl From<&Article> for ArticleSummary {
    fn from(article: &Article) -> Self {
        Self { id: article.id }
    }
}

/// Full article record fetched on demand.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ArticleDetail {
    pub id: Option<u64>,
    pub title: Option<String>,
    pub summary: Option<String>,
    pub thumbnail: Option<String>,
    pub sport: Option<Sport>,
    pub date: Option<String>,
    pub content: Option<String>,
    pub teams: Option<Vec<Team>>,
}

impl ArticleDetail {
    /// Thumbnail URL, or `placeholder` when the article has none.
    pub fn thumbnail_or<'a>(&'a self, placeholder: &'a str) -> &'a str {
        self.thumbnail.as_deref().unwrap_or(placeholder)
    }

    /// Name of the sport, if both the sport and its name are present.
    pub fn sport_name(&self) -> Option<&str> {
        self.sport.as_ref().and_then(|sport| sport.name.as_deref())
    }
}
