//! Seeded Fisher-Yates shuffle.

use crate::rng::Mulberry32;

/// Shuffle `items` in place, driven by `rng`.
///
/// Walks from the last index down to 1, swapping each element with one at
/// `floor(rng() * (i + 1))`. Unbiased given the generator, and fully
/// determined by the generator's state on entry. Callers who must keep the
/// original order pass a copy.
pub fn shuffle<T>(items: &mut [T], rng: &mut Mulberry32) {
    for i in (1..items.len()).rev() {
        let j = (rng.next_f64() * (i as f64 + 1.0)) as usize;
        items.swap(i, j);
    }
}
