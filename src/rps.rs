//! Rock-paper-scissors start-order resolution.
//!
//! One simultaneous-reveal round decides which player drafts first. The
//! [`resolve`] function is the pure beats-relation; [`RpsRound`] is the
//! commit buffer that keeps an early choice hidden until both players have
//! committed, and wipes both choices on a tie.

use crate::player::PlayerId;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A rock-paper-scissors choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Choice {
    /// Rock beats scissors.
    Rock,
    /// Paper beats rock.
    Paper,
    /// Scissors beats paper.
    Scissors,
}

impl Choice {
    /// The choice this one defeats.
    fn beats(self) -> Choice {
        match self {
            Choice::Rock => Choice::Scissors,
            Choice::Paper => Choice::Rock,
            Choice::Scissors => Choice::Paper,
        }
    }
}

/// Outcome of a single RPS round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Both players chose the same thing; the round must be replayed.
    Tie,
    /// The named player won and drafts first.
    Winner(PlayerId),
}

/// Resolves one simultaneous round under the standard beats-relation.
pub fn resolve(choice_a: Choice, choice_b: Choice) -> Outcome {
    if choice_a == choice_b {
        Outcome::Tie
    } else if choice_a.beats() == choice_b {
        Outcome::Winner(PlayerId::A)
    } else {
        Outcome::Winner(PlayerId::B)
    }
}

/// Error from committing a choice out of protocol.
#[derive(Debug, Clone, Display, Error)]
#[display("{} has already committed a choice this round", player)]
pub struct AlreadyCommitted {
    /// Player that tried to commit twice.
    pub player: PlayerId,
}

/// Commit buffer for one simultaneous-reveal round.
///
/// Choices are write-only until both are present; there is deliberately no
/// accessor for a single committed choice, so nothing readable by the other
/// player leaks before their own commit. A tie clears both commits with no
/// history kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RpsRound {
    choice_a: Option<Choice>,
    choice_b: Option<Choice>,
}

impl RpsRound {
    /// Creates an empty round.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the given player has committed this round.
    pub fn has_committed(&self, player: PlayerId) -> bool {
        match player {
            PlayerId::A => self.choice_a.is_some(),
            PlayerId::B => self.choice_b.is_some(),
        }
    }

    /// Commits a choice for `player`.
    ///
    /// Returns `Ok(None)` while the opponent is still to choose and
    /// `Ok(Some(outcome))` once both commits are in. On [`Outcome::Tie`]
    /// both commits are discarded so the round can be replayed.
    ///
    /// # Errors
    ///
    /// Returns [`AlreadyCommitted`] if the player committed earlier in the
    /// same round; the buffered choice is left untouched.
    #[instrument(skip(self, choice))]
    pub fn commit(
        &mut self,
        player: PlayerId,
        choice: Choice,
    ) -> Result<Option<Outcome>, AlreadyCommitted> {
        if self.has_committed(player) {
            return Err(AlreadyCommitted { player });
        }
        match player {
            PlayerId::A => self.choice_a = Some(choice),
            PlayerId::B => self.choice_b = Some(choice),
        }

        let (Some(a), Some(b)) = (self.choice_a, self.choice_b) else {
            debug!(%player, "Choice locked, awaiting opponent");
            return Ok(None);
        };

        let outcome = resolve(a, b);
        debug!(?outcome, "Round resolved");
        if outcome == Outcome::Tie {
            self.choice_a = None;
            self.choice_b = None;
        }
        Ok(Some(outcome))
    }

    /// Discards any buffered choices.
    pub fn clear(&mut self) {
        self.choice_a = None;
        self.choice_b = None;
    }
}
