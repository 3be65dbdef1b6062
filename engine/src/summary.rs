//! Summary assembly and the plain-text export contract.

use std::fmt::Write;

use lumen_types::{DailyDraw, Position, shorten_for_summary};

/// Fixed closing line of every summary.
const INTENTION_FOOTER: &str = "Tiny intention: pick one kind action that \
matches your Theme, and do it within the next 24 hours.";

/// One summary line: a position bound to its orientation-appropriate
/// message, already truncated to the display budget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryLine {
    pub position: Position,
    pub text: String,
}

/// The assembled reading summary, built exactly once per completed reveal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Trimmed display name, when the user entered one.
    pub greeting: Option<String>,
    /// Three lines in position order.
    pub lines: [SummaryLine; 3],
}

impl Summary {
    #[must_use]
    pub fn from_draw(draw: &DailyDraw) -> Self {
        let name = draw.name.trim();
        let greeting = (!name.is_empty()).then(|| name.to_string());
        let lines = draw.picks.each_ref().map(|pick| SummaryLine {
            position: pick.position,
            text: shorten_for_summary(pick.message()),
        });
        Self { greeting, lines }
    }

    /// Render the summary as plain text, one line per part.
    #[must_use]
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        match &self.greeting {
            Some(name) => {
                let _ = writeln!(out, "{name}, here’s your gentle storyline for today:");
            }
            None => out.push_str("Here’s your gentle storyline for today:\n"),
        }
        for line in &self.lines {
            let _ = writeln!(out, "{}: {}", summary_label(line.position), line.text);
        }
        out.push_str(INTENTION_FOOTER);
        out
    }
}

/// Sentence-case labels as the summary prints them; these differ from the
/// position labels only in the casing of "Gentle advice".
fn summary_label(position: Position) -> &'static str {
    match position {
        Position::Theme => "Theme",
        Position::GentleAdvice => "Gentle advice",
        Position::Outcome => "Outcome",
    }
}

/// The fixed plain-text export consumed by the clipboard collaborator:
/// a header line with the day, the three card names, a blank line, then
/// the summary text.
#[must_use]
pub fn export_text(draw: &DailyDraw, summary: &Summary) -> String {
    let cards = draw.card_names().join(" | ");
    format!(
        "Daily Light Tarot ({day})\nCards: {cards}\n\n{body}",
        day = draw.day,
        body = summary.to_plain_text(),
    )
}
