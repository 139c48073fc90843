//! Article fetching
//!
//! The batch runner only depends on the [`ArticleFetcher`] trait. The HTTP
//! implementation downloads a page once and extracts its readable text; tests
//! substitute in-memory fetchers.

pub mod http;

pub use http::{extract_article, HttpFetcher};

use crate::errors::Result;

/// Title and body text of a downloaded article
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedArticle {
    pub title: String,
    pub text: String,
}

impl FetchedArticle {
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
        }
    }
}

/// Source of article text. Exactly one attempt is made per URL.
pub trait ArticleFetcher: Send + Sync {
    fn fetch(&self, url: &str) -> Result<FetchedArticle>;
}
