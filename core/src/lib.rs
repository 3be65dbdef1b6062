//! Deterministic draw pipeline for Lumen.
//!
//! Everything in this crate is a pure function of its inputs: the same
//! (day, name, identity token, deck ordering) always produces the same
//! reading. Reproducibility, not randomness quality, is the contract -
//! nothing here is cryptographic.
//!
//! The pipeline runs seed derivation, then a single [`Mulberry32`] instance
//! carries through both the shuffle and the orientation draws. Selection
//! therefore depends on deck size as well as the seed; reseeding between
//! steps would change every historical reading.

mod draw;
mod rng;
mod seed;
mod shuffle;

pub use draw::{UPRIGHT_THRESHOLD, daily_draw};
pub use rng::Mulberry32;
pub use seed::{SEED_NAMESPACE, fnv1a_32, seed_string};
pub use shuffle::shuffle;
