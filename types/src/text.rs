//! Small pure text helpers.

/// Display budget for one summary line, in characters.
pub const SUMMARY_MAX_CHARS: usize = 180;

/// Content kept when a summary line is truncated; one ellipsis follows.
const SUMMARY_KEEP_CHARS: usize = 177;

/// Trim `raw` and cap it at [`SUMMARY_MAX_CHARS`] characters, replacing the
/// tail with a single `…` when it exceeds the budget.
///
/// Counts `char`s, not bytes, so multi-byte text never splits mid-scalar.
#[must_use]
pub fn shorten_for_summary(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.chars().count() <= SUMMARY_MAX_CHARS {
        return trimmed.to_string();
    }
    let head: String = trimmed.chars().take(SUMMARY_KEEP_CHARS).collect();
    format!("{head}…")
}
