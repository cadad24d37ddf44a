//! The draft state machine: phases, turns, and every legal mutation.
//!
//! All game state lives in one [`DraftGame`] value. Transitions are
//! reducer-style fallible methods; a rejected action returns a
//! [`DraftError`] and leaves the state untouched. The only asynchronous
//! collaborator is the judge, which is handed a request exactly once per
//! completed game and whose result is discarded if the game was reset in
//! the meantime (tracked by a generation counter).

use crate::cards::{Card, character_pool};
use crate::deck::Deck;
use crate::judge::{JudgmentRequest, JudgmentResult};
use crate::player::PlayerId;
use crate::roster::{Position, Roster};
use crate::rps::{Choice, Outcome, RpsRound};
use crate::rules;
use derive_more::{Display, Error};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

/// Game phase with strict forward progression; only reset goes backward.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display,
)]
pub enum GamePhase {
    /// Fresh game, nothing entered yet.
    Init,
    /// Collecting both display names.
    NameEntry,
    /// Rock-paper-scissors for start order.
    OrderResolution,
    /// Alternating draw/place/skip turns.
    Drafting,
    /// Both rosters full; awaiting or holding the judgment.
    Complete,
}

/// Whose turn it is and the card pending a decision.
///
/// `current_card` is non-empty only during [`GamePhase::Drafting`], between
/// a draw and the matching place/skip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    current_player: PlayerId,
    current_card: Option<Card>,
}

impl TurnState {
    /// Player whose action is currently accepted.
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// Card awaiting a place-or-skip decision, if any.
    pub fn current_card(&self) -> Option<&Card> {
        self.current_card.as_ref()
    }
}

/// Per-player draft state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
struct PlayerState {
    name: Option<String>,
    roster: Roster,
    skip_used: bool,
}

/// How a successful place or skip moved the game forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnTransition {
    /// The turn passed to the other player. `card_drawn` is false only when
    /// the deck was exhausted.
    Passed {
        /// New current player.
        to: PlayerId,
        /// Whether a fresh card was dealt to them.
        card_drawn: bool,
    },
    /// A skip kept the turn with the same player and dealt a replacement.
    Kept,
    /// Both rosters are full; the draft is over.
    Complete,
}

/// An action the state machine refused. Nothing was mutated.
#[derive(Debug, Clone, Display, Error)]
pub enum DraftError {
    /// Action is not legal in the current phase.
    #[display("Action requires the {expected} phase (currently {actual})")]
    PhaseMismatch {
        /// Phase the action needs.
        expected: GamePhase,
        /// Phase the game is in.
        actual: GamePhase,
    },
    /// Acting player is not the current player.
    #[display("Not {player}'s turn")]
    NotYourTurn {
        /// Player that acted out of turn.
        player: PlayerId,
    },
    /// Place or skip attempted with no drawn card pending.
    #[display("No card to place")]
    NoPendingCard,
    /// The player's one skip was already spent.
    #[display("Skip already used by {player}")]
    SkipAlreadyUsed {
        /// Player that tried to skip twice.
        player: PlayerId,
    },
    /// Slot index outside the fixed eight positions.
    #[display("Invalid slot index {index}")]
    InvalidSlot {
        /// Offending index.
        index: usize,
    },
    /// Target slot is already filled.
    #[display("Slot already occupied: {position}")]
    SlotOccupied {
        /// Position of the filled slot.
        position: Position,
    },
    /// A display name failed validation.
    #[display("Invalid name for {player}: {source}")]
    InvalidName {
        /// Player whose name was rejected.
        player: PlayerId,
        /// The specific rule that failed.
        source: rules::NameError,
    },
    /// The player already committed an RPS choice this round.
    #[display("{player} already locked a choice this round")]
    ChoiceAlreadyLocked {
        /// Player that committed twice.
        player: PlayerId,
    },
    /// A judgment request was already handed out for this game.
    #[display("Judgment already requested for this game")]
    JudgmentAlreadyRequested,
}

/// The complete, in-memory state of one draft game.
#[derive(Debug, Clone)]
pub struct DraftGame {
    phase: GamePhase,
    turn: TurnState,
    player_a: PlayerState,
    player_b: PlayerState,
    deck: Deck,
    rps: RpsRound,
    pool: Vec<Card>,
    rng: StdRng,
    generation: u64,
    judgment_requested: bool,
    judgment: Option<JudgmentResult>,
}

impl DraftGame {
    /// Creates a fresh game over the stock character pool.
    pub fn new() -> Self {
        Self::with_pool_and_seed(character_pool(), rand::thread_rng().r#gen())
    }

    /// Creates a fresh game over the stock pool with a fixed RNG seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_pool_and_seed(character_pool(), seed)
    }

    /// Creates a fresh game over a custom pool with a fixed RNG seed.
    ///
    /// The pool must not contain duplicate cards; the deck invariant that no
    /// card appears twice per game follows from the pool.
    pub fn with_pool_and_seed(pool: Vec<Card>, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let deck = Deck::shuffled(pool.clone(), &mut rng);
        Self {
            phase: GamePhase::Init,
            turn: TurnState {
                current_player: PlayerId::A,
                current_card: None,
            },
            player_a: PlayerState::default(),
            player_b: PlayerState::default(),
            deck,
            rps: RpsRound::new(),
            pool,
            rng,
            generation: 0,
            judgment_requested: false,
            judgment: None,
        }
    }

    // ── Read access ──────────────────────────────────────────────

    /// Current phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Current turn state.
    pub fn turn(&self) -> &TurnState {
        &self.turn
    }

    /// Cards left in the deck.
    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    /// The given player's roster.
    pub fn roster(&self, player: PlayerId) -> &Roster {
        &self.player(player).roster
    }

    /// Whether the player's one-time skip is still available.
    pub fn skip_available(&self, player: PlayerId) -> bool {
        !self.player(player).skip_used
    }

    /// Display name, falling back to "Player 1"/"Player 2".
    pub fn player_name(&self, player: PlayerId) -> &str {
        self.player(player)
            .name
            .as_deref()
            .unwrap_or_else(|| player.fallback_name())
    }

    /// Whether the player has locked an RPS choice this round.
    pub fn has_chosen_order(&self, player: PlayerId) -> bool {
        self.rps.has_committed(player)
    }

    /// Generation counter, bumped on every reset. Judgments are tagged with
    /// it so a result from a previous game is discarded.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The recorded judgment, once one was accepted.
    pub fn judgment(&self) -> Option<&JudgmentResult> {
        self.judgment.as_ref()
    }

    /// Deck exhausted mid-draft with no card pending: no further action is
    /// legal and only a reset recovers the game.
    pub fn is_stalled(&self) -> bool {
        self.phase == GamePhase::Drafting
            && self.turn.current_card.is_none()
            && self.deck.is_empty()
    }

    fn player(&self, id: PlayerId) -> &PlayerState {
        match id {
            PlayerId::A => &self.player_a,
            PlayerId::B => &self.player_b,
        }
    }

    fn player_mut(&mut self, id: PlayerId) -> &mut PlayerState {
        match id {
            PlayerId::A => &mut self.player_a,
            PlayerId::B => &mut self.player_b,
        }
    }

    fn require_phase(&self, expected: GamePhase) -> Result<(), DraftError> {
        if self.phase != expected {
            return Err(DraftError::PhaseMismatch {
                expected,
                actual: self.phase,
            });
        }
        Ok(())
    }

    // ── Transitions ──────────────────────────────────────────────

    /// `Init → NameEntry`. Deals a fresh shuffle of the pool into the deck.
    #[instrument(skip(self))]
    pub fn start(&mut self) -> Result<(), DraftError> {
        self.require_phase(GamePhase::Init)?;
        self.deck = Deck::shuffled(self.pool.clone(), &mut self.rng);
        self.phase = GamePhase::NameEntry;
        info!(deck_size = self.deck.len(), "Game started");
        Ok(())
    }

    /// `NameEntry → OrderResolution` once both names pass validation.
    #[instrument(skip(self, name_a, name_b))]
    pub fn submit_names(&mut self, name_a: &str, name_b: &str) -> Result<(), DraftError> {
        self.require_phase(GamePhase::NameEntry)?;
        let trimmed_a = rules::validate_name(name_a).map_err(|source| {
            warn!(%source, "Rejected player A name");
            DraftError::InvalidName {
                player: PlayerId::A,
                source,
            }
        })?;
        let trimmed_b = rules::validate_name(name_b).map_err(|source| {
            warn!(%source, "Rejected player B name");
            DraftError::InvalidName {
                player: PlayerId::B,
                source,
            }
        })?;
        self.player_a.name = Some(trimmed_a.to_string());
        self.player_b.name = Some(trimmed_b.to_string());
        self.phase = GamePhase::OrderResolution;
        info!("Names accepted, awaiting RPS");
        Ok(())
    }

    /// Locks an RPS choice for `player` during `OrderResolution`.
    ///
    /// Returns `Ok(None)` while the opponent is still to choose. A tie
    /// clears both choices for a replay. A winner moves the game to
    /// `Drafting`, makes them the current player, and deals the first card.
    #[instrument(skip(self, choice))]
    pub fn choose_order(
        &mut self,
        player: PlayerId,
        choice: Choice,
    ) -> Result<Option<Outcome>, DraftError> {
        self.require_phase(GamePhase::OrderResolution)?;
        let outcome = self
            .rps
            .commit(player, choice)
            .map_err(|e| DraftError::ChoiceAlreadyLocked { player: e.player })?;

        if let Some(Outcome::Winner(winner)) = outcome {
            self.phase = GamePhase::Drafting;
            self.turn.current_player = winner;
            self.turn.current_card = self.deck.draw();
            info!(%winner, "RPS resolved, drafting begins");
        }
        Ok(outcome)
    }

    /// Places the pending card into `slot_index` of the acting player's
    /// roster, then passes the turn or completes the draft.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn place(
        &mut self,
        player: PlayerId,
        slot_index: usize,
    ) -> Result<TurnTransition, DraftError> {
        self.require_phase(GamePhase::Drafting)?;
        if player != self.turn.current_player {
            warn!(%player, current = %self.turn.current_player, "Placement out of turn");
            return Err(DraftError::NotYourTurn { player });
        }
        if !rules::has_pending_card(&self.turn.current_card) {
            return Err(DraftError::NoPendingCard);
        }
        if !rules::is_valid_slot_index(slot_index) {
            return Err(DraftError::InvalidSlot { index: slot_index });
        }
        let roster = &self.player(player).roster;
        if !rules::is_slot_empty(roster, slot_index) {
            let position = Position::from_index(slot_index).expect("index validated");
            return Err(DraftError::SlotOccupied { position });
        }

        let card = self.turn.current_card.take().expect("pending card checked");
        let placement = self.player_mut(player).roster.fill(slot_index, card);
        info!(%player, position = %placement.position, "Card placed");

        if self.player_a.roster.is_complete() && self.player_b.roster.is_complete() {
            self.phase = GamePhase::Complete;
            info!("Both rosters complete, draft over");
            return Ok(TurnTransition::Complete);
        }

        let next = player.opponent();
        self.turn.current_player = next;
        self.turn.current_card = self.deck.draw();
        Ok(TurnTransition::Passed {
            to: next,
            card_drawn: self.turn.current_card.is_some(),
        })
    }

    /// Spends the acting player's one-time skip: the pending card is removed
    /// from play entirely. With cards left in the deck the same player draws
    /// again; with the deck exhausted the turn passes without a draw.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn skip(&mut self, player: PlayerId) -> Result<TurnTransition, DraftError> {
        self.require_phase(GamePhase::Drafting)?;
        if player != self.turn.current_player {
            warn!(%player, current = %self.turn.current_player, "Skip out of turn");
            return Err(DraftError::NotYourTurn { player });
        }
        if !rules::has_pending_card(&self.turn.current_card) {
            return Err(DraftError::NoPendingCard);
        }
        if self.player(player).skip_used {
            warn!(%player, "Second skip rejected");
            return Err(DraftError::SkipAlreadyUsed { player });
        }

        self.player_mut(player).skip_used = true;
        let discarded = self.turn.current_card.take().expect("pending card checked");
        info!(%player, card = %discarded.name(), "Card skipped out of play");

        if let Some(card) = self.deck.draw() {
            self.turn.current_card = Some(card);
            return Ok(TurnTransition::Kept);
        }

        // Deck exhausted: the skip cannot be replaced, so the turn passes.
        let next = player.opponent();
        self.turn.current_player = next;
        Ok(TurnTransition::Passed {
            to: next,
            card_drawn: false,
        })
    }

    /// Builds the judge request for the completed game.
    ///
    /// Hands the request out at most once per game so no duplicate judgment
    /// can be in flight; a second call errors.
    #[instrument(skip(self))]
    pub fn begin_judgment(&mut self) -> Result<JudgmentRequest, DraftError> {
        self.require_phase(GamePhase::Complete)?;
        if self.judgment_requested {
            return Err(DraftError::JudgmentAlreadyRequested);
        }
        self.judgment_requested = true;
        Ok(JudgmentRequest::new(
            self.player_name(PlayerId::A).to_string(),
            self.player_name(PlayerId::B).to_string(),
            self.player_a.roster.summary(),
            self.player_b.roster.summary(),
            self.generation,
        ))
    }

    /// Records a judgment produced for `generation`.
    ///
    /// Returns `false` (dropping the result) when the game was reset since
    /// the request went out or the game is no longer complete.
    #[instrument(skip(self, result))]
    pub fn record_judgment(&mut self, generation: u64, result: JudgmentResult) -> bool {
        if generation != self.generation || self.phase != GamePhase::Complete {
            warn!(
                stale_generation = generation,
                current_generation = self.generation,
                "Discarding stale judgment"
            );
            return false;
        }
        info!(winner = %result.winner(), "Judgment recorded");
        self.judgment = Some(result);
        true
    }

    /// Full reset: every entity back to fresh defaults, a new shuffle, and a
    /// bumped generation so any in-flight judgment is discarded on arrival.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.deck = Deck::shuffled(self.pool.clone(), &mut self.rng);
        self.phase = GamePhase::Init;
        self.turn = TurnState {
            current_player: PlayerId::A,
            current_card: None,
        };
        self.player_a = PlayerState::default();
        self.player_b = PlayerState::default();
        self.rps.clear();
        self.generation += 1;
        self.judgment_requested = false;
        self.judgment = None;
        info!(generation = self.generation, "Game reset");
    }
}

impl Default for DraftGame {
    fn default() -> Self {
        Self::new()
    }
}
