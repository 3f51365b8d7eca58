use std::fmt;
use url::Url;

use crate::{Error, Result};

/// Settings for the Notion forwarding target, read once at process start
/// and passed into the handler state. All three values are required; the
/// process must refuse to start without them.
#[derive(Clone)]
pub struct Config {
    pub notion_token: String,
    pub notion_database_id: String,
    pub notion_api_url: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("notion_token", &"<redacted>")
            .field("notion_database_id", &self.notion_database_id)
            .field("notion_api_url", &self.notion_api_url)
            .finish()
    }
}

impl Config {
    /// Reads `NOTION_TOKEN`, `NOTION_DATABASE_ID` and `NOTION_API_URL` from
    /// the environment. Missing or empty values are a config error.
    pub fn from_env() -> Result<Self> {
        let notion_token = required_var("NOTION_TOKEN")?;
        let notion_database_id = required_var("NOTION_DATABASE_ID")?;
        let notion_api_url = required_var("NOTION_API_URL")?;

        Url::parse(&notion_api_url)
            .map_err(|e| Error::Config(format!("NOTION_API_URL is not a valid URL: {}", e)))?;

        Ok(Self {
            notion_token,
            notion_database_id,
            notion_api_url,
        })
    }
}

fn required_var(name: &str) -> Result<String> {
    let value = std::env::var(name)
        .map_err(|_| Error::Config(format!("{} is not set", name)))?;
    let value = value.trim().to_string();
    if value.is_empty() {
        return Err(Error::Config(format!("{} is empty", name)));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test so the env mutations stay sequential.
    #[test]
    fn test_from_env() {
        std::env::remove_var("NOTION_TOKEN");
        std::env::remove_var("NOTION_DATABASE_ID");
        std::env::remove_var("NOTION_API_URL");
        assert!(Config::from_env().is_err());

        std::env::set_var("NOTION_TOKEN", "secret-token");
        std::env::set_var("NOTION_DATABASE_ID", "db-id");
        std::env::set_var("NOTION_API_URL", "   ");
        assert!(Config::from_env().is_err());

        std::env::set_var("NOTION_API_URL", "not a url");
        assert!(Config::from_env().is_err());

        std::env::set_var("NOTION_API_URL", "https://api.notion.com/v1/pages");
        let config = Config::from_env().unwrap();
        assert_eq!(config.notion_token, "secret-token");
        assert_eq!(config.notion_database_id, "db-id");
        assert_eq!(config.notion_api_url, "https://api.notion.com/v1/pages");

        let debug = format!("{:?}", config);
        assert!(!debug.contains("secret-token"));
    }
}
