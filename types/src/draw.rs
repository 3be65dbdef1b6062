//! The daily draw record and its parts.

use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::ids::DayKey;

/// The three fixed reading positions, in reading order.
///
/// Order is significant: pick `i` of a draw is always bound to
/// `Position::ALL[i]`, and summaries render in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Position {
    Theme,
    #[serde(rename = "Gentle Advice")]
    GentleAdvice,
    Outcome,
}

impl Position {
    pub const ALL: [Position; 3] = [Position::Theme, Position::GentleAdvice, Position::Outcome];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Position::Theme => "Theme",
            Position::GentleAdvice => "Gentle Advice",
            Position::Outcome => "Outcome",
        }
    }

    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Position::Theme => 0,
            Position::GentleAdvice => 1,
            Position::Outcome => 2,
        }
    }

    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// One selected card, bound to a position and an orientation.
///
/// The card is embedded rather than referenced so a persisted draw is
/// self-contained; it resolves back into the deck by its unique name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pick {
    pub card: Card,
    pub upright: bool,
    pub position: Position,
}

impl Pick {
    /// The orientation-appropriate message for this pick.
    #[must_use]
    pub fn message(&self) -> &str {
        if self.upright {
            &self.card.light_upright
        } else {
            &self.card.light_reversed
        }
    }

    #[must_use]
    pub fn orientation_label(&self) -> &'static str {
        if self.upright {
            "Upright"
        } else {
            "Reversed (gentle)"
        }
    }
}

/// The full reproducible three-pick reading for one day and identity.
///
/// For a fixed (day, name, identity token, deck ordering) this record is
/// bit-for-bit reproducible: same seed string, same picks, same
/// orientations. Only `created_at` varies across regenerations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyDraw {
    pub day: DayKey,
    /// The user-entered display name, trimmed but case-preserved.
    pub name: String,
    pub seed_string: String,
    /// Exactly three picks, ordered by position index.
    pub picks: [Pick; 3],
    /// Creation time in unix milliseconds.
    pub created_at: i64,
}

impl DailyDraw {
    /// The pick at a reveal index, if the index is in range.
    #[must_use]
    pub fn pick(&self, index: usize) -> Option<&Pick> {
        self.picks.get(index)
    }

    /// Card names in position order.
    #[must_use]
    pub fn card_names(&self) -> [&str; 3] {
        [
            self.picks[0].card.name.as_str(),
            self.picks[1].card.name.as_str(),
            self.picks[2].card.name.as_str(),
        ]
    }

    /// Fields that must survive a persistence round trip unchanged,
    /// i.e. everything except `created_at`.
    #[must_use]
    pub fn same_reading(&self, other: &DailyDraw) -> bool {
        self.day == other.day
            && self.name == other.name
            && self.seed_string == other.seed_string
            && self.picks == other.picks
    }
}
