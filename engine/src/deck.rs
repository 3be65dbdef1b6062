//! Deck input: external JSON files and the built-in fallback deck.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use lumen_types::{Card, Deck, DeckError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeckLoadError {
    #[error("failed to read deck file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse deck file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Invalid(#[from] DeckError),
}

/// Load and validate a deck from a JSON array of cards.
pub fn load_deck(path: &Path) -> Result<Deck, DeckLoadError> {
    let raw = fs::read_to_string(path).map_err(|source| DeckLoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let cards: Vec<Card> = serde_json::from_str(&raw).map_err(|source| DeckLoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Deck::new(cards)?)
}

/// The deck used when no external deck file is configured.
#[must_use]
pub fn builtin_deck() -> Deck {
    let cards = [
        (
            "The Sun",
            &["joy", "vitality", "warmth"][..],
            "Warmth finds you today; let yourself enjoy one simple thing fully.",
            "The light is nearby even if clouded; a small comfort counts double.",
        ),
        (
            "The Moon",
            &["intuition", "rest", "dreams"],
            "Trust your quiet knowing; it has been right more often than you credit.",
            "Let a worry rest for tonight; it will be smaller in the morning.",
        ),
        (
            "The Star",
            &["hope", "renewal", "calm"],
            "Something you wished for is quietly on its way; keep the window open.",
            "Hope is resting, not gone; water one small plan today.",
        ),
        (
            "Strength",
            &["patience", "courage", "softness"],
            "Your gentleness is the strong move today; lead with it.",
            "Be as patient with yourself as you would be with a friend.",
        ),
        (
            "The Lantern",
            &["guidance", "clarity", "focus"],
            "One step is lit; take it and the next will show itself.",
            "The path is dim, not blocked; slow down and look again.",
        ),
        (
            "The River",
            &["flow", "change", "ease"],
            "Let the current help; what moves today moves in your favor.",
            "No need to paddle against it; drift a little and regather.",
        ),
        (
            "The Garden",
            &["growth", "care", "tending"],
            "Something you planted is sprouting; give it a little attention.",
            "Growth is happening underground; trust the quiet season.",
        ),
        (
            "The Hearth",
            &["home", "comfort", "belonging"],
            "Make one corner of your day feel like home, and start there.",
            "Comfort is allowed; rest is part of the work.",
        ),
    ]
    .into_iter()
    .map(|(name, keywords, upright, reversed)| Card {
        name: name.to_string(),
        keywords: keywords.iter().map(|kw| (*kw).to_string()).collect(),
        light_upright: upright.to_string(),
        light_reversed: reversed.to_string(),
        image: None,
    })
    .collect();
    Deck::new(cards).expect("built-in deck is valid")
}

#[cfg(test)]
mod tests {
    use std::fs;

    use lumen_types::{Deck, DeckError};

    use super::{DeckLoadError, builtin_deck, load_deck};

    #[test]
    fn builtin_deck_is_big_enough() {
        let deck = builtin_deck();
        assert!(deck.len() >= Deck::MIN_CARDS);
    }

    #[test]
    fn loads_camel_case_deck_files() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("deck.json");
        fs::write(
            &path,
            r#"[
                {"name": "One", "lightUpright": "a", "lightReversed": "b"},
                {"name": "Two", "lightUpright": "c", "lightReversed": "d", "keywords": ["k"]},
                {"name": "Three", "lightUpright": "e", "lightReversed": "f", "image": "x.png"}
            ]"#,
        )
        .expect("write deck");

        let deck = load_deck(&path).expect("load");
        assert_eq!(deck.len(), 3);
        assert!(deck.find("Two").is_some());
    }

    #[test]
    fn undersized_deck_is_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("deck.json");
        fs::write(
            &path,
            r#"[{"name": "One", "lightUpright": "a", "lightReversed": "b"}]"#,
        )
        .expect("write deck");

        match load_deck(&path) {
            Err(DeckLoadError::Invalid(DeckError::TooSmall { len: 1 })) => {}
            other => panic!("expected too-small error, got {other:?}"),
        }
    }

    #[test]
    fn unparseable_deck_reports_the_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("deck.json");
        fs::write(&path, "[{").expect("write deck");

        match load_deck(&path) {
            Err(DeckLoadError::Parse { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected parse error, got {other:?}"),
        }
    }
}
