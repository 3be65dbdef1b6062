//! The reveal session state machine.
//!
//! Single-threaded and cooperative: nothing here sleeps or spawns. The two
//! delayed stage transitions are modeled as a pending record stamped with a
//! session epoch; the caller passes `Instant`s in and pumps [`ReadingSession::tick`].
//! A transition scheduled for a superseded draw still "fires" on its due
//! time, but the epoch check discards it instead of acting on a stale draw.

use std::time::{Duration, Instant};

use lumen_types::{Card, DailyDraw, Pick, Position};

use crate::summary::Summary;

/// Delay between entering `Shuffling` and presenting the face-down cards.
pub const SHUFFLE_DELAY: Duration = Duration::from_millis(2400);

/// Delay between the third reveal and the terminal `Reading` stage.
pub const COMPLETION_DELAY: Duration = Duration::from_millis(2000);

/// Global session stage.
///
/// `Landing → Shuffling → Drawn → AllRevealed → Reading`, with `Drawn`
/// reachable directly via [`ReadingSession::begin`] for "new reading"
/// requests that skip the shuffle intro.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Landing,
    Shuffling,
    Drawn,
    AllRevealed,
    Reading,
}

/// What a successful reveal hands to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealOutcome {
    pub index: usize,
    pub pick: Pick,
    /// Present exactly once per draw: set when this reveal completed the
    /// reading and triggered summary assembly.
    pub completed: Option<Summary>,
}

impl RevealOutcome {
    /// The orientation-appropriate message for the revealed pick.
    #[must_use]
    pub fn message(&self) -> &str {
        self.pick.message()
    }

    #[must_use]
    pub fn card(&self) -> &Card {
        &self.pick.card
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.pick.position
    }
}

#[derive(Debug, Clone, Copy)]
struct PendingTransition {
    epoch: u64,
    due: Instant,
    target: Stage,
}

/// Session context holding the current draw, reveal flags, and stage.
///
/// Reveal flags are monotonic within one draw's lifetime: a revealed card
/// never flips back, and re-revealing is a silent no-op.
#[derive(Debug)]
pub struct ReadingSession {
    draw: Option<DailyDraw>,
    revealed: [bool; 3],
    stage: Stage,
    epoch: u64,
    summary_done: bool,
    pending: Option<PendingTransition>,
}

impl Default for ReadingSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ReadingSession {
    #[must_use]
    pub fn new() -> Self {
        Self {
            draw: None,
            revealed: [false; 3],
            stage: Stage::Landing,
            epoch: 0,
            summary_done: false,
            pending: None,
        }
    }

    /// Adopt `draw` with the shuffle intro: enter `Shuffling` now and
    /// schedule the `Drawn` transition after [`SHUFFLE_DELAY`].
    pub fn start_shuffling(&mut self, draw: DailyDraw, now: Instant) {
        self.adopt(draw);
        self.stage = Stage::Shuffling;
        self.pending = Some(PendingTransition {
            epoch: self.epoch,
            due: now + SHUFFLE_DELAY,
            target: Stage::Drawn,
        });
    }

    /// Adopt `draw` and go straight to `Drawn` with all cards hidden.
    ///
    /// Any transition still pending for an earlier draw is left to expire;
    /// the epoch bump makes [`tick`](Self::tick) discard it as stale.
    pub fn begin(&mut self, draw: DailyDraw) {
        self.adopt(draw);
        self.stage = Stage::Drawn;
    }

    fn adopt(&mut self, draw: DailyDraw) {
        self.epoch += 1;
        self.draw = Some(draw);
        self.revealed = [false; 3];
        self.summary_done = false;
    }

    /// Reveal the card at `index`.
    ///
    /// Returns `None` - never an error - when the index is out of range or
    /// already revealed, or when the session is not presenting face-down
    /// cards (no draw adopted, shuffle intro still running, reading over).
    pub fn reveal(&mut self, index: usize, now: Instant) -> Option<RevealOutcome> {
        if self.stage != Stage::Drawn {
            return None;
        }
        let pick = self.draw.as_ref()?.pick(index)?.clone();
        if self.revealed[index] {
            return None;
        }
        self.revealed[index] = true;

        let completed = if self.revealed.iter().all(|&done| done) {
            self.complete(now)
        } else {
            None
        };

        Some(RevealOutcome {
            index,
            pick,
            completed,
        })
    }

    /// All three cards are up: assemble the summary once and arm the
    /// one-shot transition into `Reading`.
    fn complete(&mut self, now: Instant) -> Option<Summary> {
        if self.summary_done {
            return None;
        }
        self.summary_done = true;
        self.stage = Stage::AllRevealed;
        self.pending = Some(PendingTransition {
            epoch: self.epoch,
            due: now + COMPLETION_DELAY,
            target: Stage::Reading,
        });
        self.draw.as_ref().map(Summary::from_draw)
    }

    /// Apply a due stage transition, if any.
    ///
    /// Returns the stage entered, or `None` when nothing was due. A due
    /// transition whose epoch predates the current draw is dropped.
    pub fn tick(&mut self, now: Instant) -> Option<Stage> {
        let pending = self.pending?;
        if now < pending.due {
            return None;
        }
        self.pending = None;
        if pending.epoch != self.epoch {
            tracing::debug!(target_stage = ?pending.target, "Discarding stale stage transition");
            return None;
        }
        self.stage = pending.target;
        tracing::debug!(stage = ?self.stage, "Stage transition");
        Some(self.stage)
    }

    #[must_use]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    #[must_use]
    pub fn draw(&self) -> Option<&DailyDraw> {
        self.draw.as_ref()
    }

    #[must_use]
    pub fn revealed(&self) -> [bool; 3] {
        self.revealed
    }

    #[must_use]
    pub fn all_revealed(&self) -> bool {
        self.revealed.iter().all(|&done| done)
    }
}
