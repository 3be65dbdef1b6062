//! Three-pick selection.

use lumen_types::{Card, DailyDraw, DayKey, Deck, IdentityToken, Pick, Position};

use crate::rng::Mulberry32;
use crate::seed::{fnv1a_32, seed_string};
use crate::shuffle::shuffle;

/// Orientation threshold: draws above it come up upright.
///
/// 0.3 gives the intentional 70/30 skew toward upright.
pub const UPRIGHT_THRESHOLD: f64 = 0.3;

/// Produce the reading for one (day, name, identity) over `deck`.
///
/// One generator instance flows from the shuffle into the orientation
/// draws, so the result depends on deck size as well as the seed. The
/// caller's deck is read, never mutated; `Deck` guarantees at least three
/// cards, so taking the first three cannot fail.
#[must_use]
pub fn daily_draw(
    deck: &Deck,
    day: &DayKey,
    name: &str,
    token: &IdentityToken,
    created_at: i64,
) -> DailyDraw {
    let seed = seed_string(day, name, token);
    let mut rng = Mulberry32::new(fnv1a_32(&seed));

    let mut pool: Vec<Card> = deck.cards().to_vec();
    shuffle(&mut pool, &mut rng);

    let mut drawn = pool.into_iter();
    let picks = Position::ALL.map(|position| {
        let card = drawn.next().expect("Deck holds at least three cards");
        let upright = rng.next_f64() > UPRIGHT_THRESHOLD;
        Pick {
            card,
            upright,
            position,
        }
    });

    DailyDraw {
        day: day.clone(),
        name: name.trim().to_string(),
        seed_string: seed,
        picks,
        created_at,
    }
}
