//! Async wrapper around [`CatalogSession`] for use in async runtimes (Tokio, etc.).
//!
//! Every operation runs on the blocking thread pool via
//! [`tokio::task::spawn_blocking`], so the blocking HTTP reads never stall the
//! event loop. The session sits behind a [`Mutex`]: an operation waits for the
//! previous one to finish, which keeps a slow fetch from interleaving with a
//! newer filter change.
//!
//! # Example
//!
//! ```no_run
//! use hearthstone_catalog::{AsyncCatalogSession, CatalogSession, FilterName};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let session = AsyncCatalogSession::new(CatalogSession::builder().build());
//!
//!     let filters = session.initialize().await.unwrap();
//!     let page = session
//!         .apply_filter(FilterName::Classes, "Mage")
//!         .await
//!         .unwrap();
//!
//!     session.close().await.unwrap();
//! }
//! ```

use std::sync::{Arc, Mutex};

use crate::client::CardSource;
use crate::error::{CatalogError, Result};
use crate::models::{CardPage, DisplayCard, FilterCatalog, FilterName};
use crate::session::CatalogSession;

/// Async, single-flight handle to a [`CatalogSession`].
///
/// Cloning the handle shares the same session.
pub struct AsyncCatalogSession<S> {
    inner: Arc<Mutex<CatalogSession<S>>>,
}

impl<S> Clone for AsyncCatalogSession<S> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<S> AsyncCatalogSession<S>
where
    S: CardSource + Send + 'static,
{
    pub fn new(session: CatalogSession<S>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    /// Run a session operation on the blocking thread pool.
    ///
    /// The closure gets exclusive access to the session for its whole run.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut CatalogSession<S>) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let session = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let mut guard = session
                .lock()
                .map_err(|_| CatalogError::InvalidArgument("session lock poisoned".into()))?;
            f(&mut *guard)
        })
        .await
        .map_err(|e| CatalogError::InvalidArgument(format!("Task join error: {e}")))?
    }

    pub async fn initialize(&self) -> Result<FilterCatalog> {
        self.run(|s| s.initialize()).await
    }

    pub async fn reset(&self) -> Result<(FilterCatalog, CardPage)> {
        self.run(|s| s.reset()).await
    }

    pub async fn apply_filter(&self, name: FilterName, value: &str) -> Result<CardPage> {
        let value = value.to_string();
        self.run(move |s| s.apply_filter(name, &value)).await
    }

    pub async fn card_by_identifier(&self, id: &str) -> Result<Option<DisplayCard>> {
        let id = id.to_string();
        self.run(move |s| s.card_by_identifier(&id)).await
    }

    pub async fn page(&self, page_number: usize, page_size: usize) -> Result<CardPage> {
        self.run(move |s| Ok(s.page(page_number, page_size))).await
    }

    pub async fn narrowed_filter_catalog(&self) -> Result<FilterCatalog> {
        self.run(|s| Ok(s.narrowed_filter_catalog())).await
    }

    pub async fn active_filter_names(&self) -> Result<Vec<FilterName>> {
        self.run(|s| Ok(s.active_filter_names())).await
    }

    /// See [`CatalogSession::generation`].
    pub async fn generation(&self) -> Result<u64> {
        self.run(|s| Ok(s.generation())).await
    }

    /// Release this handle on the blocking pool.
    ///
    /// The blocking HTTP client must not be dropped on an async worker, so
    /// the last handle to a session over [`RemoteClient`](crate::RemoteClient)
    /// should be closed this way rather than dropped.
    pub async fn close(self) -> Result<()> {
        tokio::task::spawn_blocking(move || drop(self))
            .await
            .map_err(|e| CatalogError::InvalidArgument(format!("Task join error: {e}")))
    }
}
