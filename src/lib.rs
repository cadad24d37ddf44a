//! Crew Draft - two-player card drafting with an LLM battle judge
//!
//! Two players alternately draw character cards from a shuffled deck and
//! assign them to eight fixed crew positions, with one skip allowed per
//! player. A rock-paper-scissors round decides who drafts first. Once both
//! rosters are full, an external generative-language judge declares the
//! winner.
//!
//! # Architecture
//!
//! - **Game**: the draft state machine ([`DraftGame`]) owning all state
//! - **Deck**: shuffled pool, consumed from the front
//! - **Rps**: simultaneous-reveal start-order resolution
//! - **Rules**: pure validation predicates gating every mutation
//! - **Judge**: request building, retry with backoff, verdict validation
//! - **Llm**: provider transport (Gemini, OpenAI)
//!
//! # Example
//!
//! ```
//! use crew_draft::{Choice, DraftGame, PlayerId};
//!
//! let mut game = DraftGame::with_seed(42);
//! game.start()?;
//! game.submit_names("Shanks", "Buggy")?;
//! game.choose_order(PlayerId::A, Choice::Rock)?;
//! game.choose_order(PlayerId::B, Choice::Scissors)?;
//! assert_eq!(game.turn().current_player(), PlayerId::A);
//! # Ok::<(), crew_draft::DraftError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cards;
mod config;
mod deck;
mod game;
mod judge;
mod llm;
mod player;
mod roster;
mod rps;
mod rules;

// Crate-level exports - Cards and deck
pub use cards::{Card, character_pool};
pub use deck::Deck;

// Crate-level exports - Players and rosters
pub use player::PlayerId;
pub use roster::{Placement, Position, ROSTER_SIZE, Roster};

// Crate-level exports - RPS
pub use rps::{AlreadyCommitted, Choice, Outcome, RpsRound, resolve};

// Crate-level exports - Validation rules
pub use rules::{
    NAME_MAX_LEN, NAME_MIN_LEN, NameError, has_pending_card, is_slot_empty, is_valid_slot_index,
    validate_name,
};

// Crate-level exports - Draft state machine
pub use game::{DraftError, DraftGame, GamePhase, TurnState, TurnTransition};

// Crate-level exports - Judging
pub use judge::{
    JudgeClient, JudgeError, JudgeTransport, JudgmentRequest, JudgmentResult, RetryPolicy,
    SYSTEM_PROMPT, parse_verdict,
};

// Crate-level exports - LLM transport and config
pub use config::{ConfigError, JudgeConfig};
pub use llm::{LlmClient, LlmConfig, LlmError, LlmProvider};
