//! Hearthstone card catalog SDK for Rust.
//!
//! Browses the Hearthstone card API: load the available filters, narrow the
//! card set one filter at a time, page through the results, look up single
//! cards and keep a personal deck that can be saved to and loaded from a JSON
//! file.
//!
//! The [`CatalogSession`] decides when a filter needs a request and when the
//! already-fetched cards can simply be filtered in memory.
//!
//! # Quick start
//!
//! ```no_run
//! use hearthstone_catalog::{CatalogSession, FilterName};
//!
//! // Reads API_URL, API_KEY and API_IMG_URL from the environment.
//! let mut session = CatalogSession::builder().build();
//!
//! let filters = session.initialize().unwrap();
//! let mages = session.apply_filter(FilterName::Classes, "Mage").unwrap();
//! let spells = session.apply_filter(FilterName::Types, "Spell").unwrap();
//! let next_options = session.narrowed_filter_catalog();
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod session;
pub mod stack;

#[cfg(feature = "async")]
pub use async_client::AsyncCatalogSession;
pub use cache::CardCache;
pub use client::{CardSource, RemoteClient};
pub use config::ApiConfig;
pub use error::{CatalogError, Result};
pub use models::{
    AppliedFilter, Card, CardPage, Deck, DisplayCard, FilterCatalog, FilterName, Paginator,
};
pub use session::CatalogSession;
pub use stack::FilterStack;

use std::fmt;
use std::time::Duration;

// ---------------------------------------------------------------------------
// CatalogBuilder
// ---------------------------------------------------------------------------

/// Builder for a [`CatalogSession`] over the remote API.
///
/// Starts from the environment (`API_URL`, `API_KEY`, `API_IMG_URL`); every
/// setter overrides the corresponding value. Missing credentials are not an
/// error until the first request.
pub struct CatalogBuilder {
    config: ApiConfig,
    cards_per_page: usize,
}

impl Default for CatalogBuilder {
    fn default() -> Self {
        Self {
            config: ApiConfig::from_env(),
            cards_per_page: config::DEFAULT_CARDS_PER_PAGE,
        }
    }
}

impl CatalogBuilder {
    /// Start from an explicit configuration instead of the environment.
    pub fn from_config(config: ApiConfig) -> Self {
        Self {
            config,
            cards_per_page: config::DEFAULT_CARDS_PER_PAGE,
        }
    }

    /// API host, e.g. `omgvamp-hearthstone-v1.p.rapidapi.com`.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = Some(host.into());
        self
    }

    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.key = Some(key.into());
        self
    }

    /// Base URL card images are served from.
    pub fn image_host(mut self, image_host: impl Into<String>) -> Self {
        self.config.image_host = Some(image_host.into());
        self
    }

    /// URL scheme for API requests. Defaults to `https`.
    pub fn scheme(mut self, scheme: impl Into<String>) -> Self {
        self.config.scheme = scheme.into();
        self
    }

    /// HTTP request timeout. Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Page size used for the first page after each filter change.
    ///
    /// Defaults to 10.
    pub fn cards_per_page(mut self, cards_per_page: usize) -> Self {
        self.cards_per_page = cards_per_page;
        self
    }

    /// Build the session. No request is made until it is initialised.
    pub fn build(self) -> CatalogSession<RemoteClient> {
        CatalogSession::with_cards_per_page(RemoteClient::new(self.config), self.cards_per_page)
    }
}

impl CatalogSession<RemoteClient> {
    /// Create a new builder for a session over the remote API.
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl<S: CardSource> fmt::Display for CatalogSession<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let active: Vec<&str> = self
            .active_filter_names()
            .into_iter()
            .map(FilterName::as_str)
            .collect();
        write!(
            f,
            "CatalogSession(filters=[{}], anchor={}, fetched={}, filtered={}, cached={})",
            active.join(", "),
            self.anchor().map(FilterName::as_str).unwrap_or("none"),
            self.fetched_cards().len(),
            self.filtered_cards().len(),
            self.cached_cards().len()
        )
    }
}
