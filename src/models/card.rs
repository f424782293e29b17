use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::filter::FilterName;
use crate::error::{CatalogError, Result};

// ---------------------------------------------------------------------------
// Card: A card record as kept by the session
// ---------------------------------------------------------------------------

/// A card record with only the attributes the catalog uses.
///
/// Decoding a raw API object into `Card` drops every other attribute, so the
/// session never holds more than these ten fields. Equality is by `card_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub card_id: String,
    pub name: String,
    pub player_class: Option<String>,
    pub card_set: Option<String>,
    #[serde(rename = "type")]
    pub type_field: Option<String>,
    pub faction: Option<String>,
    pub rarity: Option<String>,
    pub race: Option<String>,
    pub text: Option<String>,
    pub cost: Option<i64>,
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.card_id == other.card_id
    }
}

impl Eq for Card {}

impl Card {
    /// Value of the property a filter compares against, if the card has it.
    pub fn property(&self, filter: FilterName) -> Option<&str> {
        let value = match filter {
            FilterName::Classes => &self.player_class,
            FilterName::Sets => &self.card_set,
            FilterName::Types => &self.type_field,
            FilterName::Factions => &self.faction,
            FilterName::Qualities => &self.rarity,
            FilterName::Races => &self.race,
        };
        value.as_deref()
    }

    /// Whether the card has the property for `filter` and it equals `value`.
    pub fn matches(&self, filter: FilterName, value: &str) -> bool {
        self.property(filter) == Some(value)
    }

    /// Build the presentation record for this card.
    pub fn to_display(&self, image: String) -> DisplayCard {
        DisplayCard {
            card_id: self.card_id.clone(),
            name: self.name.clone(),
            card_set: self.card_set.clone(),
            type_field: self.type_field.clone(),
            text: self.text.clone(),
            cost: self.cost,
            image,
        }
    }
}

// ---------------------------------------------------------------------------
// DisplayCard: What a UI renders and what a deck file stores
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayCard {
    pub card_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_set: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<i64>,
    #[serde(default)]
    pub image: String,
}

impl From<DisplayCard> for Value {
    fn from(card: DisplayCard) -> Self {
        let mut record = Map::new();
        record.insert("cardId".into(), card.card_id.into());
        record.insert("name".into(), card.name.into());
        if let Some(card_set) = card.card_set {
            record.insert("cardSet".into(), card_set.into());
        }
        if let Some(type_field) = card.type_field {
            record.insert("type".into(), type_field.into());
        }
        if let Some(text) = card.text {
            record.insert("text".into(), text.into());
        }
        if let Some(cost) = card.cost {
            record.insert("cost".into(), cost.into());
        }
        record.insert("image".into(), card.image.into());
        Value::Object(record)
    }
}

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

/// Decode a card-list response from `endpoint`.
///
/// `null` is an empty list. Entries that are not card objects are skipped;
/// anything other than an array or `null` is a decoding failure.
pub fn cards_from_response(endpoint: &str, value: Value) -> Result<Vec<Card>> {
    let entries = match value {
        Value::Null => return Ok(Vec::new()),
        Value::Array(entries) => entries,
        other => {
            return Err(CatalogError::transport(
                endpoint,
                format!("expected an array of cards, got {}", json_kind(&other)),
            ))
        }
    };

    let total = entries.len();
    let cards: Vec<Card> = entries
        .into_iter()
        .filter_map(|entry| serde_json::from_value(entry).ok())
        .collect();

    if cards.len() < total {
        tracing::warn!(
            endpoint,
            skipped = total - cards.len(),
            "skipped card records without an identifier or name"
        );
    }
    Ok(cards)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
