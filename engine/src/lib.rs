//! Engine for Lumen - persistence, identity keying, and the reveal session.
//!
//! This crate wraps the pure pipeline in `lumen-core` with everything a
//! running installation needs: a data directory, a store-once identity
//! token, a per-day draw store with cache-or-create semantics, the reveal
//! state machine that gates summary assembly, and the plain-text export
//! the clipboard collaborator consumes.

mod config;
mod data_dir;
mod deck;
mod identity;
mod session;
mod store;
mod summary;
mod util;

pub use config::{ConfigError, LumenConfig, config_path, load_config, load_config_from};
pub use data_dir::{DataDir, DataDirSource};
pub use deck::{DeckLoadError, builtin_deck, load_deck};
pub use identity::{IdentityError, load_or_create_identity, today_key};
pub use session::{
    COMPLETION_DELAY, ReadingSession, RevealOutcome, SHUFFLE_DELAY, Stage,
};
pub use store::{DrawStore, StoreError};
pub use summary::{Summary, SummaryLine, export_text};

// Re-export the domain types callers need alongside the engine.
pub use lumen_core::daily_draw;
pub use lumen_types::{
    Card, DailyDraw, DayKey, Deck, DeckError, IdentityToken, Pick, Position,
};
