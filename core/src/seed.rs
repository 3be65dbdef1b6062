//! Seed string derivation and hashing.

use lumen_types::{DayKey, IdentityToken};

/// Namespace tag prefixed to every seed string.
pub const SEED_NAMESPACE: &str = "daily";

const SEPARATOR: char = '|';

/// Build the deterministic seed string for one reading.
///
/// The free-text name is trimmed and case-folded so `" Ada "` and `"ada"`
/// derive the same reading; day key and identity token are used verbatim.
#[must_use]
pub fn seed_string(day: &DayKey, name: &str, token: &IdentityToken) -> String {
    let folded = name.trim().to_lowercase();
    format!(
        "{SEED_NAMESPACE}{SEPARATOR}{day}{SEPARATOR}{folded}{SEPARATOR}{token}",
        day = day.as_str(),
        token = token.as_str(),
    )
}

/// 32-bit FNV-1a over the UTF-16 code units of `input`.
///
/// The unit choice is part of the seed contract: hashing UTF-16 units
/// rather than bytes or scalars keeps persisted readings replayable,
/// including for text outside the basic multilingual plane.
#[must_use]
pub fn fnv1a_32(input: &str) -> u32 {
    const OFFSET_BASIS: u32 = 2_166_136_261;
    const PRIME: u32 = 16_777_619;

    let mut hash = OFFSET_BASIS;
    for unit in input.encode_utf16() {
        hash ^= u32::from(unit);
        hash = hash.wrapping_mul(PRIME);
    }
    hash
}
