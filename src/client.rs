//! HTTP access to the remote card API.
//!
//! [`CardSource`] is the seam the catalog session reads through; [`RemoteClient`]
//! is the production implementation over a blocking `reqwest` client. Every
//! failure is normalised into [`CatalogError`] and nothing is retried here.

use reqwest::blocking::Client;
use reqwest::Url;
use serde_json::Value;

use crate::config::{self, ApiConfig};
use crate::error::{CatalogError, Result};

/// Parameterised reads against named endpoints, plus image locators.
pub trait CardSource {
    /// GET `endpoint`, optionally with `param` as an extra path segment, and
    /// return the decoded JSON body.
    fn read(&mut self, endpoint: &str, param: Option<&str>) -> Result<Value>;

    /// Locator of the rendered image for card `id`. Never fails.
    fn image_locator_for(&self, id: &str) -> String;
}

// ---------------------------------------------------------------------------
// RemoteClient
// ---------------------------------------------------------------------------

/// Reads the card API over HTTP.
pub struct RemoteClient {
    config: ApiConfig,
    http: Option<Client>,
}

impl RemoteClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config, http: None }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Lazy HTTP client, created on first read.
    fn http(&mut self, endpoint: &str) -> Result<Client> {
        if let Some(client) = &self.http {
            return Ok(client.clone());
        }
        let client = Client::builder()
            .timeout(self.config.timeout)
            .build()
            .map_err(|e| CatalogError::transport(endpoint, e))?;
        self.http = Some(client.clone());
        Ok(client)
    }

    /// Build the request target for `endpoint`.
    ///
    /// The parameter is pushed as a single percent-encoded path segment, so
    /// option values such as `Blackrock Mountain` stay intact.
    pub fn url_for(&self, endpoint: &str, param: Option<&str>) -> Result<Url> {
        let creds = self.config.credentials()?;
        let endpoints = config::endpoints();
        let path = endpoints
            .get(endpoint)
            .ok_or_else(|| CatalogError::UnsupportedEndpoint(endpoint.to_string()))?;

        let base = format!("{}://{}/{}", self.config.scheme, creds.host, path);
        let mut url = Url::parse(&base).map_err(|e| {
            CatalogError::Configuration(format!("Invalid API host {}: {}", creds.host, e))
        })?;

        if let Some(param) = param.filter(|p| !p.is_empty()) {
            url.path_segments_mut()
                .map_err(|_| {
                    CatalogError::Configuration(format!("API host {} cannot take a path", creds.host))
                })?
                .push(param);
        }
        Ok(url)
    }
}

impl CardSource for RemoteClient {
    fn read(&mut self, endpoint: &str, param: Option<&str>) -> Result<Value> {
        let url = self.url_for(endpoint, param)?;
        let creds = self.config.credentials()?;
        let (host, key) = (creds.host.to_string(), creds.key.to_string());
        let client = self.http(endpoint)?;

        tracing::debug!(endpoint, %url, "reading remote endpoint");

        let result = (|| -> Result<Value> {
            let resp = client
                .get(url.clone())
                .header("x-rapidapi-host", host)
                .header("x-rapidapi-key", key)
                .send()
                .map_err(|e| CatalogError::transport(endpoint, e))?;

            let status = resp.status();
            if !status.is_success() {
                return Err(CatalogError::status(endpoint, status.as_u16()));
            }

            resp.json::<Value>()
                .map_err(|e| CatalogError::transport(endpoint, e))
        })();

        if let Err(e) = &result {
            tracing::warn!(endpoint, %url, error = %e, "remote read failed");
        }
        result
    }

    fn image_locator_for(&self, id: &str) -> String {
        let image_host = self.config.image_host.as_deref().unwrap_or_default();
        format!("{}/{}.png", image_host, id)
    }
}
