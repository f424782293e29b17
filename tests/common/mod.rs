//! Shared test fixtures for the catalog integration tests.
//!
//! Provides `FakeSource`, a scripted in-memory `CardSource` that records every
//! read, and `sample_session()` which wires it to a small Mage/Warrior card
//! pool.

#![allow(dead_code)]

use hearthstone_catalog::{CardSource, CatalogError, CatalogSession, Result};
use serde_json::{json, Value};
use std::collections::HashMap;

pub const IMAGE_HOST: &str = "https://images.test";

/// Scripted card source. Responses are keyed by `endpoint` or
/// `endpoint/param`; unknown keys answer `null`.
#[derive(Debug, Default)]
pub struct FakeSource {
    responses: HashMap<String, Value>,
    statuses: HashMap<String, u16>,
    pub calls: Vec<String>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(mut self, key: &str, value: Value) -> Self {
        self.set_response(key, value);
        self
    }

    pub fn with_status(mut self, key: &str, status: u16) -> Self {
        self.statuses.insert(key.to_string(), status);
        self
    }

    pub fn set_response(&mut self, key: &str, value: Value) {
        self.statuses.remove(key);
        self.responses.insert(key.to_string(), value);
    }
}

impl CardSource for FakeSource {
    fn read(&mut self, endpoint: &str, param: Option<&str>) -> Result<Value> {
        let key = match param {
            Some(p) if !p.is_empty() => format!("{endpoint}/{p}"),
            _ => endpoint.to_string(),
        };
        self.calls.push(key.clone());

        if let Some(status) = self.statuses.get(&key) {
            return Err(CatalogError::status(endpoint, *status));
        }
        Ok(self.responses.get(&key).cloned().unwrap_or(Value::Null))
    }

    fn image_locator_for(&self, id: &str) -> String {
        format!("{IMAGE_HOST}/{id}.png")
    }
}

// ---------------------------------------------------------------------------
// Sample data
// ---------------------------------------------------------------------------

pub fn sample_info() -> Value {
    json!({
        "patch": "17.6.0.53261",
        "classes": ["Mage", "Warrior"],
        "sets": ["Basic", "Classic"],
        "types": ["Minion", "Spell"],
        "factions": ["Alliance", "Horde"],
        "qualities": ["Free", "Common", "Legendary"],
        "races": ["Elemental"],
        "standard": ["Basic", "Classic"],
        "locales": ["enUS", "frFR"]
    })
}

fn card(
    id: &str,
    name: &str,
    class: &str,
    set: &str,
    type_: &str,
    rarity: &str,
    cost: i64,
) -> Value {
    json!({
        "cardId": id,
        "dbfId": "1",
        "name": name,
        "playerClass": class,
        "cardSet": set,
        "type": type_,
        "rarity": rarity,
        "cost": cost,
        "text": format!("{name} text"),
        "artist": "Blizzard",
        "flavor": "Flavor text.",
        "locale": "enUS",
        "img": "http://old.example/img.png"
    })
}

pub fn mage_cards() -> Value {
    json!([
        card("EX1_277", "Arcane Missiles", "Mage", "Basic", "Spell", "Free", 1),
        card("CS2_029", "Fireball", "Mage", "Basic", "Spell", "Common", 4),
        card("CS2_033", "Water Elemental", "Mage", "Basic", "Minion", "Common", 4),
        card("EX1_559", "Archmage Antonidas", "Mage", "Classic", "Minion", "Legendary", 7),
        card("CS2_032", "Flamestrike", "Mage", "Basic", "Spell", "Common", 7),
    ])
}

pub fn warrior_cards() -> Value {
    json!([
        card("EX1_400", "Whirlwind", "Warrior", "Classic", "Spell", "Common", 1),
        card("CS2_108", "Execute", "Warrior", "Basic", "Spell", "Free", 1),
        card("EX1_084", "Warsong Commander", "Warrior", "Classic", "Minion", "Free", 3),
    ])
}

pub fn spell_cards() -> Value {
    json!([
        card("EX1_277", "Arcane Missiles", "Mage", "Basic", "Spell", "Free", 1),
        card("CS2_029", "Fireball", "Mage", "Basic", "Spell", "Common", 4),
        card("CS2_032", "Flamestrike", "Mage", "Basic", "Spell", "Common", 7),
        card("EX1_400", "Whirlwind", "Warrior", "Classic", "Spell", "Common", 1),
        card("CS2_108", "Execute", "Warrior", "Basic", "Spell", "Free", 1),
    ])
}

pub fn lookup_card() -> Value {
    json!([card("NEW_001", "Dragonling Mechanic", "Neutral", "Classic", "Minion", "Common", 4)])
}

pub fn sample_source() -> FakeSource {
    FakeSource::new()
        .with_response("info", sample_info())
        .with_response("classes/Mage", mage_cards())
        .with_response("classes/Warrior", warrior_cards())
        .with_response("types/Spell", spell_cards())
        .with_response("cards/NEW_001", lookup_card())
}

/// A session over `sample_source()` that has already been initialised.
pub fn sample_session() -> CatalogSession<FakeSource> {
    let mut session = CatalogSession::new(sample_source());
    session.initialize().unwrap();
    session
}

/// Remote reads made after initialisation.
pub fn calls_after_init(session: &CatalogSession<FakeSource>) -> Vec<String> {
    session
        .source()
        .calls
        .iter()
        .skip_while(|c| c.as_str() == "info")
        .cloned()
        .collect()
}

pub fn ids(page: &hearthstone_catalog::CardPage) -> Vec<&str> {
    page.cards.iter().map(|c| c.card_id.as_str()).collect()
}
