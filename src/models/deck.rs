use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::card::DisplayCard;
use crate::config;
use crate::error::Result;

// ---------------------------------------------------------------------------
// Deck: A user-curated, ordered selection of cards
// ---------------------------------------------------------------------------

/// An ordered list of cards picked by the user.
///
/// The deck lives outside the catalog session. It serialises as a plain JSON
/// array of card records, which is also the on-disk file format. Records are
/// kept as raw JSON objects, so a file written elsewhere round-trips with all
/// of its attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Deck {
    records: Vec<Value>,
}

fn record_id(record: &Value) -> Option<&str> {
    record.get("cardId").and_then(Value::as_str)
}

impl Deck {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a deck from display records, keeping their order.
    pub fn from_cards(cards: Vec<DisplayCard>) -> Self {
        Self::from_records(cards.into_iter().map(Value::from).collect())
    }

    /// Wrap raw card records as-is.
    pub fn from_records(records: Vec<Value>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Value] {
        &self.records
    }

    pub fn into_records(self) -> Vec<Value> {
        self.records
    }

    /// Records that decode as [`DisplayCard`], in deck order.
    pub fn cards(&self) -> Vec<DisplayCard> {
        self.records
            .iter()
            .filter_map(|record| serde_json::from_value(record.clone()).ok())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, card_id: &str) -> bool {
        self.records.iter().any(|r| record_id(r) == Some(card_id))
    }

    /// Append a card unless one with the same identifier is already present.
    ///
    /// Returns `false` (deck unchanged) for a duplicate.
    pub fn add(&mut self, card: DisplayCard) -> bool {
        if self.contains(&card.card_id) {
            return false;
        }
        self.records.push(card.into());
        true
    }

    /// Remove every record with `card_id`. Returns whether any was removed.
    pub fn remove(&mut self, card_id: &str) -> bool {
        let before = self.records.len();
        self.records.retain(|r| record_id(r) != Some(card_id));
        self.records.len() != before
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    // -- Persistence -------------------------------------------------------

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.records)?)
    }

    /// Parse a deck from a JSON array.
    ///
    /// Entries are taken as written; duplicates and unknown attributes are
    /// kept.
    pub fn from_json(data: &str) -> Result<Self> {
        let records: Vec<Value> = serde_json::from_str(data)?;
        Ok(Self { records })
    }

    /// Write the deck to `path`, replacing any existing file.
    pub fn export<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, self.to_json()?)?;
        tracing::debug!(path = %path.display(), cards = self.len(), "deck exported");
        Ok(())
    }

    /// Write the deck as `HearthStoneDeck.json` inside `dir`.
    ///
    /// Returns the path of the written file.
    pub fn export_to_dir<P: AsRef<Path>>(&self, dir: P) -> Result<PathBuf> {
        let path = dir.as_ref().join(config::DECK_FILE_NAME);
        self.export(&path)?;
        Ok(path)
    }

    /// Write the deck into the platform download directory.
    pub fn export_default(&self) -> Result<PathBuf> {
        self.export_to_dir(config::default_deck_dir())
    }

    /// Read a deck previously written by [`export`](Self::export).
    pub fn import<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let deck = Self::from_json(&contents)?;
        tracing::debug!(path = %path.display(), cards = deck.len(), "deck imported");
        Ok(deck)
    }
}
