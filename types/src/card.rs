//! Card and deck types.
//!
//! The deck is supplied externally (typically from a JSON file) and is never
//! mutated by the draw pipeline - shuffling always operates on a copy.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How many keywords a reveal surfaces in its meta line.
const KEYWORD_PREVIEW_LEN: usize = 4;

/// One symbolic card.
///
/// Field names serialize in camelCase (`lightUpright`, `lightReversed`)
/// so existing deck JSON files load unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Display name, unique within the deck.
    pub name: String,
    /// Keyword tags, possibly empty.
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Message shown when the card is drawn upright.
    pub light_upright: String,
    /// Message shown when the card is drawn reversed.
    pub light_reversed: String,
    /// Optional art reference; presentation layers decide what to do
    /// when it is absent or unloadable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Card {
    /// The first few keywords, for compact display.
    #[must_use]
    pub fn keyword_preview(&self) -> &[String] {
        &self.keywords[..self.keywords.len().min(KEYWORD_PREVIEW_LEN)]
    }
}

#[derive(Debug, Error)]
pub enum DeckError {
    #[error("deck must contain at least {} cards (got {len})", Deck::MIN_CARDS)]
    TooSmall { len: usize },
    #[error("deck contains duplicate card name: {0}")]
    DuplicateName(String),
}

/// A validated, ordered collection of cards.
///
/// Construction enforces the minimum size the draw pipeline requires and
/// the name-uniqueness the persisted record relies on for resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck(Vec<Card>);

impl Deck {
    /// A draw takes three cards, so a deck must hold at least three.
    pub const MIN_CARDS: usize = 3;

    pub fn new(cards: Vec<Card>) -> Result<Self, DeckError> {
        if cards.len() < Self::MIN_CARDS {
            return Err(DeckError::TooSmall { len: cards.len() });
        }
        for (i, card) in cards.iter().enumerate() {
            if cards[..i].iter().any(|other| other.name == card.name) {
                return Err(DeckError::DuplicateName(card.name.clone()));
            }
        }
        Ok(Self(cards))
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Resolve a persisted pick back into the deck by card name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Card> {
        self.0.iter().find(|card| card.name == name)
    }
}

#[cfg(test)]
pub(crate) fn test_card(name: &str) -> Card {
    Card {
        name: name.to_string(),
        keywords: vec!["calm".to_string(), "light".to_string()],
        light_upright: format!("{name} shines on your path."),
        light_reversed: format!("{name} asks for a softer pace."),
        image: None,
    }
}

#[cfg(test)]
mod tests {
    use super::{Card, Deck, DeckError, test_card};

    #[test]
    fn deck_rejects_fewer_than_three_cards() {
        let result = Deck::new(vec![test_card("Sun"), test_card("Moon")]);
        assert!(matches!(result, Err(DeckError::TooSmall { len: 2 })));
    }

    #[test]
    fn deck_rejects_duplicate_names() {
        let result = Deck::new(vec![test_card("Sun"), test_card("Moon"), test_card("Sun")]);
        assert!(matches!(result, Err(DeckError::DuplicateName(name)) if name == "Sun"));
    }

    #[test]
    fn deck_find_resolves_by_name() {
        let deck = Deck::new(vec![test_card("Sun"), test_card("Moon"), test_card("Star")])
            .expect("valid deck");
        assert_eq!(deck.find("Moon").map(|c| c.name.as_str()), Some("Moon"));
        assert!(deck.find("Tower").is_none());
    }

    #[test]
    fn keyword_preview_caps_at_four() {
        let mut card = test_card("Sun");
        card.keywords = (0..6).map(|i| format!("k{i}")).collect();
        assert_eq!(card.keyword_preview().len(), 4);

        card.keywords = vec!["only".to_string()];
        assert_eq!(card.keyword_preview(), ["only".to_string()]);
    }

    #[test]
    fn card_deserializes_camel_case_field_names() {
        let json = r#"{
            "name": "The Sun",
            "keywords": ["joy", "vitality"],
            "lightUpright": "Warmth finds you.",
            "lightReversed": "Warmth is nearby, a little hidden.",
            "image": "assets/cards/sun.png"
        }"#;
        let card: Card = serde_json::from_str(json).expect("parse");
        assert_eq!(card.name, "The Sun");
        assert_eq!(card.light_upright, "Warmth finds you.");
        assert_eq!(card.image.as_deref(), Some("assets/cards/sun.png"));
    }

    #[test]
    fn card_keywords_and_image_default_when_absent() {
        let json = r#"{
            "name": "The Moon",
            "lightUpright": "Trust your quiet knowing.",
            "lightReversed": "Let a worry rest for tonight."
        }"#;
        let card: Card = serde_json::from_str(json).expect("parse");
        assert!(card.keywords.is_empty());
        assert!(card.image.is_none());
    }
}
