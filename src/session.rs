//! The catalog session: filter stack, fetched cards and pagination.
//!
//! The first filter applied is the *anchor*: its endpoint is queried remotely
//! and the response becomes the fetched card set. Every later filter narrows
//! that set locally, without another request, until the anchor itself is
//! cleared or changed.

use std::collections::HashSet;

use crate::cache::CardCache;
use crate::client::CardSource;
use crate::config;
use crate::error::Result;
use crate::models::{
    cards_from_response, AppliedFilter, Card, CardPage, DisplayCard, FilterCatalog, FilterName,
    Paginator,
};
use crate::stack::{ApplyOutcome, FilterStack};

const INFO_ENDPOINT: &str = "info";
const CARDS_ENDPOINT: &str = "cards";

/// Stateful query layer between a [`CardSource`] and a UI.
///
/// Every mutating operation takes `&mut self`, so calls are serialised: one
/// operation finishes (successfully or not) before the next can start.
pub struct CatalogSession<S> {
    source: S,
    cards_per_page: usize,
    filters: FilterCatalog,
    stack: FilterStack,
    /// Cards read from the anchor endpoint. Empty means nothing is fetched,
    /// so the next filter application reads the anchor again.
    fetched: Vec<Card>,
    filtered: Vec<Card>,
    cache: CardCache,
    generation: u64,
}

impl<S: CardSource> CatalogSession<S> {
    pub fn new(source: S) -> Self {
        Self::with_cards_per_page(source, config::DEFAULT_CARDS_PER_PAGE)
    }

    pub fn with_cards_per_page(source: S, cards_per_page: usize) -> Self {
        Self {
            source,
            cards_per_page,
            filters: FilterCatalog::new(),
            stack: FilterStack::new(),
            fetched: Vec::new(),
            filtered: Vec::new(),
            cache: CardCache::new(),
            generation: 0,
        }
    }

    // -- Lifecycle ---------------------------------------------------------

    /// Clear all filter state and load the filter catalog from `info`.
    ///
    /// Individually fetched cards stay cached. If the read fails, the stored
    /// catalog is left empty and the session can be initialised again.
    pub fn initialize(&mut self) -> Result<FilterCatalog> {
        self.generation += 1;
        self.stack.clear();
        self.clear_cards();
        self.filters = FilterCatalog::new();

        let info = self.source.read(INFO_ENDPOINT, None)?;
        self.filters = FilterCatalog::from_info(&info);
        tracing::info!(
            generation = self.generation,
            filters = self.filters.len(),
            "filter catalog loaded"
        );
        Ok(self.filters.clone())
    }

    /// Re-load the filter catalog and drop every active filter.
    ///
    /// Returns the full catalog together with an empty card page.
    pub fn reset(&mut self) -> Result<(FilterCatalog, CardPage)> {
        let filters = self.initialize()?;
        Ok((filters, CardPage::empty()))
    }

    // -- Filtering ---------------------------------------------------------

    /// Select `value` for `name`, or clear `name` when `value` is empty, and
    /// return the first page of the resulting card set.
    ///
    /// At most one request is made: against the anchor's endpoint, and only
    /// when no cards are fetched for the current anchor. An anchor that came
    /// back empty is read again on the next call. On error the filter
    /// stack keeps the change while the card data stays stale.
    pub fn apply_filter(&mut self, name: FilterName, value: &str) -> Result<CardPage> {
        self.generation += 1;

        if value.is_empty() {
            if self.stack.remove(name) {
                tracing::debug!(filter = %name, "filter cleared");
            }
        } else if self.stack.apply(name, value) == ApplyOutcome::AnchorChanged {
            tracing::debug!(filter = %name, value, "anchor value changed; refetching");
            self.fetched.clear();
        }

        if !self.stack.has_anchor_entry() {
            match self.stack.promote_first() {
                Some(anchor) => {
                    tracing::debug!(anchor = %anchor, "anchor promoted");
                    self.fetched.clear();
                }
                None => {
                    self.clear_cards();
                    return Ok(CardPage::empty());
                }
            }
        }

        let Some(anchor) = self.stack.anchor_entry().cloned() else {
            self.clear_cards();
            return Ok(CardPage::empty());
        };

        if self.fetched.is_empty() {
            self.fetched = self.fetch_anchor(&anchor)?;
        }

        let mut filtered = self.fetched.clone();
        for filter in self.stack.non_anchor() {
            filtered.retain(|card| card.matches(filter.filter_name, &filter.filter_value));
        }
        self.filtered = filtered;

        Ok(self.page(1, self.cards_per_page))
    }

    fn fetch_anchor(&mut self, anchor: &AppliedFilter) -> Result<Vec<Card>> {
        let endpoint = anchor.filter_name.endpoint();
        let value = self.source.read(endpoint, Some(anchor.filter_value.as_str()))?;
        let cards = cards_from_response(endpoint, value)?;
        tracing::debug!(
            endpoint,
            value = %anchor.filter_value,
            cards = cards.len(),
            "anchor cards fetched"
        );
        Ok(cards)
    }

    fn clear_cards(&mut self) {
        self.fetched.clear();
        self.filtered.clear();
    }

    /// Filter options that still occur among the filtered cards.
    ///
    /// Before any card has been fetched, and when the fetch came back empty,
    /// this is the full catalog.
    pub fn narrowed_filter_catalog(&self) -> FilterCatalog {
        if self.fetched_cards().is_empty() {
            return self.filters.clone();
        }

        self.filters
            .iter()
            .map(|(name, options)| {
                let present: HashSet<&str> = self
                    .filtered
                    .iter()
                    .filter_map(|card| card.property(name))
                    .collect();
                let kept: Vec<String> = options
                    .iter()
                    .filter(|option| present.contains(option.as_str()))
                    .cloned()
                    .collect();
                (name, kept)
            })
            .collect()
    }

    /// Names of the active filters, in the order they were applied.
    pub fn active_filter_names(&self) -> Vec<FilterName> {
        self.stack.names()
    }

    pub fn active_filters(&self) -> &[AppliedFilter] {
        self.stack.entries()
    }

    pub fn anchor(&self) -> Option<FilterName> {
        self.stack.anchor()
    }

    // -- Pagination --------------------------------------------------------

    /// One page of the filtered cards (`page_number` is 1-based).
    ///
    /// Pages past the end are empty rather than an error; the paginator still
    /// reports the totals of the whole filtered set.
    pub fn page(&self, page_number: usize, page_size: usize) -> CardPage {
        let total = self.filtered.len();
        let start = page_number.saturating_sub(1).saturating_mul(page_size);
        let window: &[Card] = if page_number == 0 || start >= total {
            &[]
        } else {
            &self.filtered[start..start.saturating_add(page_size).min(total)]
        };

        let cards = window
            .iter()
            .map(|card| card.to_display(self.source.image_locator_for(&card.card_id)))
            .collect();

        CardPage {
            cards,
            paginator: Some(Paginator::new(total, page_size, page_number)),
        }
    }

    pub fn cards_per_page(&self) -> usize {
        self.cards_per_page
    }

    // -- Single card lookup ------------------------------------------------

    /// Look up one card, fetching it only if it is neither in the fetched set
    /// nor in the card cache.
    ///
    /// Returns `None` when the API has no such card.
    pub fn card_by_identifier(&mut self, id: &str) -> Result<Option<DisplayCard>> {
        if id.is_empty() {
            return Ok(None);
        }

        let local = self
            .fetched_cards()
            .iter()
            .find(|card| card.card_id == id)
            .or_else(|| self.cache.get(id))
            .cloned();

        let card = match local {
            Some(card) => {
                tracing::debug!(card_id = id, "card served without a request");
                card
            }
            None => match self.source.read(CARDS_ENDPOINT, Some(id)) {
                Ok(value) => match cards_from_response(CARDS_ENDPOINT, value)?.into_iter().next() {
                    Some(card) => card,
                    None => return Ok(None),
                },
                Err(e) if e.http_status() == Some(404) => return Ok(None),
                Err(e) => return Err(e),
            },
        };

        let display = card.to_display(self.source.image_locator_for(&card.card_id));
        self.cache.insert(id, card);
        Ok(Some(display))
    }

    // -- Accessors ---------------------------------------------------------

    /// The full, unnarrowed filter catalog from the last initialisation.
    pub fn filters(&self) -> &FilterCatalog {
        &self.filters
    }

    pub fn fetched_cards(&self) -> &[Card] {
        &self.fetched
    }

    pub fn filtered_cards(&self) -> &[Card] {
        &self.filtered
    }

    pub fn cached_cards(&self) -> &CardCache {
        &self.cache
    }

    pub fn image_locator_for(&self, id: &str) -> String {
        self.source.image_locator_for(id)
    }

    /// Incremented by every operation that mutates filter state.
    ///
    /// A caller that issued an operation at generation `n` can discard its
    /// result if the generation has since moved on.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }
}
