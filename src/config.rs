use std::collections::HashMap;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{CatalogError, Result};

pub const ENV_API_HOST: &str = "API_URL";
pub const ENV_API_KEY: &str = "API_KEY";
pub const ENV_IMAGE_HOST: &str = "API_IMG_URL";

pub const DEFAULT_SCHEME: &str = "https";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_CARDS_PER_PAGE: usize = 10;
pub const DECK_FILE_NAME: &str = "HearthStoneDeck.json";

pub fn endpoints() -> HashMap<&'static str, &'static str> {
    HashMap::from([
        ("info", "info"),
        // Filter endpoints, queried with the selected option as parameter
        ("classes", "cards/classes"),
        ("sets", "cards/sets"),
        ("types", "cards/types"),
        ("factions", "cards/factions"),
        ("qualities", "cards/qualities"),
        ("races", "cards/races"),
        // Single card lookup by identifier
        ("cards", "cards"),
    ])
}

pub fn default_deck_dir() -> PathBuf {
    if let Some(downloads) = dirs::download_dir() {
        downloads
    } else {
        PathBuf::from(".")
    }
}

/// Connection settings for the remote card API.
///
/// Every field is optional here; missing credentials are only reported when a
/// read is attempted, so a session can be constructed before the environment
/// is complete.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub host: Option<String>,
    pub key: Option<String>,
    pub image_host: Option<String>,
    pub scheme: String,
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: None,
            key: None,
            image_host: None,
            scheme: DEFAULT_SCHEME.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ApiConfig {
    /// Read `API_URL`, `API_KEY` and `API_IMG_URL` from the environment.
    pub fn from_env() -> Self {
        Self {
            host: env::var(ENV_API_HOST).ok(),
            key: env::var(ENV_API_KEY).ok(),
            image_host: env::var(ENV_IMAGE_HOST).ok(),
            ..Self::default()
        }
    }

    /// Validate that host, key and image host are all present and non-blank.
    pub fn credentials(&self) -> Result<Credentials<'_>> {
        let host = required(&self.host, ENV_API_HOST)?;
        let key = required(&self.key, ENV_API_KEY)?;
        let image_host = required(&self.image_host, ENV_IMAGE_HOST)?;
        Ok(Credentials {
            host,
            key,
            image_host,
        })
    }
}

/// Borrowed view of validated credentials.
#[derive(Debug, Clone, Copy)]
pub struct Credentials<'a> {
    pub host: &'a str,
    pub key: &'a str,
    pub image_host: &'a str,
}

fn required<'a>(value: &'a Option<String>, var: &str) -> Result<&'a str> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(CatalogError::Configuration(format!(
            "The supplied API credentials are invalid: {var} is not set"
        ))),
    }
}
