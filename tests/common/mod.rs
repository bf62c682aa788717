//! Common test utilities and fixtures for the integration tests

#![allow(dead_code)]

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use flagline::CountryRecord;
use serde_json::{json, Value};

pub fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

pub fn ctrl(ch: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL))
}

/// Key events for typing `text` into the search field
pub fn typed(text: &str) -> Vec<Event> {
    text.chars().map(|ch| key(KeyCode::Char(ch))).collect()
}

pub fn fixture_records() -> Vec<CountryRecord> {
    vec![
        CountryRecord::new("Zebra", "Republic of Zebra", "https://flags.test/zb.svg", 500),
        CountryRecord::new("Apple", "Kingdom of Apple", "https://flags.test/ap.svg", 1_500),
        CountryRecord::new("Mango", "Mango Islands", "https://flags.test/mg.svg", 1_000),
    ]
}

/// A payload shaped like the REST Countries response
pub fn countries_payload() -> Value {
    json!([
        {
            "name": { "common": "Sweden", "official": "Kingdom of Sweden" },
            "flags": { "png": "https://flagcdn.com/w320/se.png", "svg": "https://flagcdn.com/se.svg", "alt": "A blue field with a yellow cross" },
            "population": 10353442
        },
        {
            "name": { "common": "Åland Islands", "official": "Åland Islands" },
            "flags": { "png": "https://flagcdn.com/w320/ax.png", "svg": "https://flagcdn.com/ax.svg" },
            "population": 29458
        },
        {
            "name": { "common": "Chile", "official": "Republic of Chile" },
            "flags": { "png": "https://flagcdn.com/w320/cl.png" },
            "population": 19116209
        },
        {
            "name": { "official": "Nameless Territory" },
            "flags": { "svg": "https://flagcdn.com/xx.svg" },
            "population": 1
        }
    ])
}
