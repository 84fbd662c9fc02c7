use async_trait::async_trait;
use scraper::Html;
use tracing::debug;

use crate::error::{Result, ScraperError};

/// HTTP capability used by both scrape stages. Constructed explicitly and
/// injected so tests can substitute canned pages.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// GET the URL and return the response body as text.
    async fn fetch_html(&self, url: &str) -> Result<String>;
}

pub struct ReqwestFetcher {
    client: reqwest::Client,
}

impl ReqwestFetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for ReqwestFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PageFetcher for ReqwestFetcher {
    async fn fetch_html(&self, url: &str) -> Result<String> {
        debug!("HTTP GET {}", url);
        let response = self
            .client
            .get(url)
            .header("User-Agent", "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/114.0.0.0 Safari/537.36")
            .send()
            .await?
            .error_for_status()?;
        let body = response.text().await?;
        debug!("HTTP response: {} bytes from {}", body.len(), url);
        Ok(body)
    }
}

/// Parse a fetched body into a queryable document. The parser is lenient
/// about malformed markup; an empty body is the one thing refused.
pub fn parse_html(body: &str, context: &str) -> Result<Html> {
    if body.trim().is_empty() {
        return Err(ScraperError::Parse {
            message: format!("empty response body for {context}"),
        });
    }
    Ok(Html::parse_document(body))
}
