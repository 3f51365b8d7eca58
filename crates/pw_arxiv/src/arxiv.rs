use async_trait::async_trait;

use pw_core::{Paper, PaperSource, Result};

use crate::listing;

pub const DEFAULT_CATEGORY: &str = "cs.CV";

/// Fetches recently published papers from the arXiv listing pages. The
/// listing page is arXiv's own definition of "recent"; no date filtering
/// happens here.
#[derive(Debug, Clone)]
pub struct ArxivSource {
    client: reqwest::Client,
    base_url: String,
    category: String,
}

impl ArxivSource {
    const BASE_URL: &'static str = "https://arxiv.org";

    pub fn new(category: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: Self::BASE_URL.to_string(),
            category: category.to_string(),
        }
    }

    /// Points the source at a different host, e.g. a mirror or a test
    /// stand-in.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    fn listing_url(&self) -> String {
        format!("{}/list/{}/recent", self.base_url, self.category)
    }
}

#[async_trait]
impl PaperSource for ArxivSource {
    fn name(&self) -> &str {
        "arXiv"
    }

    async fn fetch_recent(&self) -> Result<Vec<Paper>> {
        let url = self.listing_url();
        tracing::debug!("Fetching listing page {}", url);
        let response = self.client.get(&url).send().await?;
        let html = response.text().await?;
        let papers = listing::parse_listing(&html, &self.base_url);
        tracing::info!("📚 Fetched {} recent {} papers", papers.len(), self.category);
        Ok(papers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_url() {
        let source = ArxivSource::new("cs.CV");
        assert_eq!(source.listing_url(), "https://arxiv.org/list/cs.CV/recent");

        let source = ArxivSource::new("cs.LG").with_base_url("http://127.0.0.1:9999/");
        assert_eq!(source.listing_url(), "http://127.0.0.1:9999/list/cs.LG/recent");
    }

    #[tokio::test]
    async fn test_fetch_recent_from_stand_in() {
        const PAGE: &str = r#"
            <dl>
              <dt><a href="/abs/2406.11111" title="Abstract">arXiv:2406.11111</a></dt>
              <dd>
                <div class="meta">
                  <div class="list-title"><span class="descriptor">Title:</span> Stand-in Paper</div>
                  <div class="list-authors"><a href="/a/x">A. Author</a></div>
                  <p class="mathjax">A summary.</p>
                </div>
              </dd>
            </dl>
        "#;

        let app = axum::Router::new().route(
            "/list/cs.CV/recent",
            axum::routing::get(|| async { axum::response::Html(PAGE) }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let source = ArxivSource::new("cs.CV").with_base_url(&format!("http://{}", addr));
        let papers = source.fetch_recent().await.unwrap();
        assert_eq!(papers.len(), 1);
        assert_eq!(papers[0].title, "Stand-in Paper");
        assert_eq!(papers[0].url, format!("http://{}/abs/2406.11111", addr));
        assert_eq!(papers[0].summary, "A summary.");
    }
}
