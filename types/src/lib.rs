//! Core domain types for Lumen.
//!
//! This crate contains pure domain types with no IO, no clocks, and minimal
//! dependencies. Everything here can be used from any layer of the
//! application.

mod card;
mod draw;
mod ids;
mod text;

pub use card::{Card, Deck, DeckError};
pub use draw::{DailyDraw, Pick, Position};
pub use ids::{DayKey, DayKeyError, IdentityToken, IdentityTokenError};
pub use text::{SUMMARY_MAX_CHARS, shorten_for_summary};
