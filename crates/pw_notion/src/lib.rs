use std::fmt;

use reqwest::{Client, StatusCode};
use serde::Serialize;

use pw_core::{Config, Error, Result};

/// Notion API protocol revision sent with every request.
pub const NOTION_VERSION: &str = "2022-06-28";

/// Client for the Notion page-creation endpoint. One page per forwarded
/// paper; no deduplication, the same paper submitted twice creates two
/// pages.
pub struct NotionClient {
    client: Client,
    token: String,
    database_id: String,
    api_url: String,
}

impl fmt::Debug for NotionClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotionClient")
            .field("token", &"<redacted>")
            .field("database_id", &self.database_id)
            .field("api_url", &self.api_url)
            .finish()
    }
}

#[derive(Serialize)]
struct CreatePageRequest {
    parent: Parent,
    properties: PageProperties,
}

#[derive(Serialize)]
struct Parent {
    database_id: String,
}

#[derive(Serialize)]
struct PageProperties {
    #[serde(rename = "Title")]
    title: TitleProperty,
    #[serde(rename = "URL")]
    url: UrlProperty,
}

#[derive(Serialize)]
struct TitleProperty {
    title: Vec<RichText>,
}

#[derive(Serialize)]
struct RichText {
    text: TextContent,
}

#[derive(Serialize)]
struct TextContent {
    content: String,
}

#[derive(Serialize)]
struct UrlProperty {
    url: String,
}

impl NotionClient {
    pub fn new(config: &Config) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: &Config) -> Self {
        Self {
            client,
            token: config.notion_token.clone(),
            database_id: config.notion_database_id.clone(),
            api_url: config.notion_api_url.clone(),
        }
    }

    fn build_request(&self, title: &str, url: &str) -> CreatePageRequest {
        CreatePageRequest {
            parent: Parent {
                database_id: self.database_id.clone(),
            },
            properties: PageProperties {
                title: TitleProperty {
                    title: vec![RichText {
                        text: TextContent {
                            content: title.to_string(),
                        },
                    }],
                },
                url: UrlProperty {
                    url: url.to_string(),
                },
            },
        }
    }

    /// Creates one page in the configured database, with the submitted
    /// title as the `Title` property and the url as the `URL` property.
    ///
    /// Exactly 200 counts as success. Any other status is returned as a
    /// Notion API error carrying the upstream status code and the raw
    /// response body text.
    pub async fn create_paper_page(&self, title: &str, url: &str) -> Result<()> {
        let request = self.build_request(title, url);

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Notion-Version", NOTION_VERSION)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("Notion API answered {} for '{}'", status, title);
            return Err(Error::NotionApi {
                status: status.as_u16(),
                body,
            });
        }

        tracing::info!("🗃️ Added paper to Notion: {}", title);
        Ok(())
    }
}
