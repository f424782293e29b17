//! Cache of individually fetched cards.
//!
//! Cards looked up by identifier are kept here for the life of the session.
//! Unlike the fetched card set, the cache is not cleared when the filter
//! catalog is re-initialised.

use std::collections::HashMap;

use crate::models::Card;

#[derive(Debug, Default)]
pub struct CardCache {
    cards: HashMap<String, Card>,
}

impl CardCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<&Card> {
        self.cards.get(id)
    }

    /// Store `card` under `id`, replacing any previous entry.
    pub fn insert(&mut self, id: &str, card: Card) {
        self.cards.insert(id.to_string(), card);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.cards.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
