//! Blocking HTTP fetcher with readability extraction

use dom_smoothie::{Config, Readability, TextMode};
use reqwest::blocking::Client;
use std::time::Duration;

use super::{ArticleFetcher, FetchedArticle};
use crate::config::FetchConfig;
use crate::errors::{Error, Result};

/// Downloads article pages and extracts their main text
pub struct HttpFetcher {
    client: Client,
    max_elements_to_parse: usize,
}

impl HttpFetcher {
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| Error::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            max_elements_to_parse: config.max_elements_to_parse,
        })
    }

    fn download(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| Error::fetch(url, e.to_string()))?;

        if !response.status().is_success() {
            return Err(Error::fetch(url, format!("HTTP {}", response.status())));
        }

        response.text().map_err(|e| Error::fetch(url, e.to_string()))
    }
}

impl ArticleFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<FetchedArticle> {
        let html = self.download(url)?;
        let article = extract_article(&html, url, self.max_elements_to_parse)?;
        if article.text.trim().is_empty() {
            return Err(Error::fetch(url, "no article text found"));
        }
        Ok(article)
    }
}

/// Run readability extraction on a downloaded page.
///
/// Block elements are separated by line breaks in the extracted text, so
/// adjacent paragraphs never run together.
pub fn extract_article(html: &str, url: &str, max_elements_to_parse: usize) -> Result<FetchedArticle> {
    let cfg = Config {
        max_elements_to_parse,
        text_mode: TextMode::Formatted,
        ..Default::default()
    };

    let mut readability = Readability::new(html, Some(url), Some(cfg))
        .map_err(|e| Error::fetch(url, format!("unparsable page: {e}")))?;
    let article = readability
        .parse()
        .map_err(|e| Error::fetch(url, format!("no readable content: {e}")))?;

    let text: &str = &article.text_content;
    Ok(FetchedArticle::new(article.title.clone(), text.trim()))
}
