//! The external judge contract: request building, retry with exponential
//! backoff, and strict verdict validation.
//!
//! The judge is an opaque generative-language service. It is asked for a
//! two-field JSON object (`winner`, `reasoning`); anything else is a
//! validation failure and gets retried. The client never fabricates a
//! winner: after the attempt cap it surfaces [`JudgeError::Exhausted`] and
//! the caller decides the fallback UX.

use crate::llm::LlmError;
use crate::player::PlayerId;
use async_trait::async_trait;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Fallback justification when the judge names a winner but omits the
/// reasoning text.
const DEFAULT_REASONING: &str =
    "The AI determined the winner based on team composition and strategic analysis.";

/// System instruction: judge persona plus the mandatory output schema.
pub const SYSTEM_PROMPT: &str = "You are a highly experienced expert with encyclopedic knowledge \
of the 'One Piece' universe. Your role is to judge a battle between two pirate crews based on \
their composition. Your analysis MUST be objective, detailed, and focus on team synergy and role \
fulfillment. Your final output MUST be a JSON object only. The structure must be: \
{ \"winner\": \"PlayerA\" | \"PlayerB\", \"reasoning\": \"Your detailed, 2-3 sentence \
justification explaining the winner based on crew composition.\" }";

/// Everything the judge needs about one completed game.
///
/// Carries the generation tag of the game it was built from so the state
/// machine can discard the eventual result if a reset happened in between.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct JudgmentRequest {
    /// Player A display name.
    name_a: String,
    /// Player B display name.
    name_b: String,
    /// Flattened roster summary for player A (eight lines).
    roster_a: String,
    /// Flattened roster summary for player B (eight lines).
    roster_b: String,
    /// Generation of the game this request was built from.
    generation: u64,
}

impl JudgmentRequest {
    /// Assembles a request from the completed game's data.
    pub fn new(
        name_a: String,
        name_b: String,
        roster_a: String,
        roster_b: String,
        generation: u64,
    ) -> Self {
        Self {
            name_a,
            name_b,
            roster_a,
            roster_b,
            generation,
        }
    }

    /// Builds the user-level query embedding both crews.
    pub fn user_query(&self) -> String {
        format!(
            "Perform a deep, strategic analysis of the following two pirate crews and determine \
which one wins in an all-out, team-vs-team battle.\n\n\
Analysis Criteria:\n\n\
Character Strength: Overall combat power based on their rank (Yonko, Commander, etc.).\n\n\
Role Suitability: How well each character fits their assigned role (Captain, Tank, Healer, etc.).\n\n\
Team Synergy: The balance and effectiveness of the crew as a whole (e.g., does the Tank protect \
the Healer?).\n\n\
Crew Data:\n\n\
Crew A ({}):\n\n{}\n\n\
Crew B ({}):\n\n{}\n\n\
REQUIRED RESPONSE FORMAT: Return ONLY the JSON object defined in the System Instruction.",
            self.name_a, self.roster_a, self.name_b, self.roster_b
        )
    }
}

/// A declared winner with the judge's justification.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JudgmentResult {
    winner: PlayerId,
    reasoning: String,
}

impl JudgmentResult {
    /// Creates a result (mostly useful in tests and fakes).
    pub fn new(winner: PlayerId, reasoning: impl Into<String>) -> Self {
        Self {
            winner,
            reasoning: reasoning.into(),
        }
    }

    /// The winning player. Never a draw.
    pub fn winner(&self) -> PlayerId {
        self.winner
    }

    /// Free-text justification.
    pub fn reasoning(&self) -> &str {
        &self.reasoning
    }
}

/// Why a judgment attempt or the whole judgment failed.
#[derive(Debug, Clone, Display, Error)]
pub enum JudgeError {
    /// Response body was not the expected two-field JSON object.
    #[display("Judge response malformed: {message}")]
    MalformedResponse {
        /// Parser detail.
        message: String,
    },
    /// `winner` was outside the two canonical identifiers.
    #[display("Invalid winner value: {token}. Must be PlayerA or PlayerB")]
    InvalidWinner {
        /// The rejected token.
        token: String,
    },
    /// Every attempt failed; no winner is fabricated.
    #[display("AI judgment failed after {attempts} attempts: {last}")]
    Exhausted {
        /// Attempts made before giving up.
        attempts: u32,
        /// Message of the final failure.
        #[error(not(source))]
        last: String,
    },
}

/// Wire shape the judge must produce.
#[derive(Debug, Deserialize)]
struct RawVerdict {
    winner: String,
    #[serde(default)]
    reasoning: String,
}

/// Parses and validates one judge response body.
///
/// The winner coercion is a narrow allow-list: exactly `PlayerA`/`A` or
/// `PlayerB`/`B` after trimming. Empty reasoning is replaced with
/// [`DEFAULT_REASONING`]; a malformed body or any other winner token is an
/// error (and hence a retry at the client level).
pub fn parse_verdict(body: &str) -> Result<JudgmentResult, JudgeError> {
    let raw: RawVerdict =
        serde_json::from_str(body.trim()).map_err(|e| JudgeError::MalformedResponse {
            message: e.to_string(),
        })?;

    let winner = match raw.winner.trim() {
        "PlayerA" | "A" => PlayerId::A,
        "PlayerB" | "B" => PlayerId::B,
        other => {
            return Err(JudgeError::InvalidWinner {
                token: other.to_string(),
            });
        }
    };

    let reasoning = if raw.reasoning.trim().is_empty() {
        DEFAULT_REASONING.to_string()
    } else {
        raw.reasoning
    };

    Ok(JudgmentResult { winner, reasoning })
}

/// Retry cap and backoff schedule for judge calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first.
    pub max_attempts: u32,
    /// Delay before the first retry; doubles on each further retry.
    pub base_delay: Duration,
}

impl RetryPolicy {
    /// Delay inserted before retry number `retry` (zero-based), doubling
    /// each time: base, 2*base, 4*base, ...
    pub fn delay_before(&self, retry: u32) -> Duration {
        self.base_delay.saturating_mul(1u32 << retry.min(16))
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(1000),
        }
    }
}

/// Transport used to reach the judge.
///
/// The production implementation is [`crate::llm::LlmClient`]; tests plug in
/// scripted fakes here.
#[async_trait]
pub trait JudgeTransport: Send + Sync {
    /// Sends one request and returns the raw response body.
    async fn request_verdict(
        &self,
        system_prompt: &str,
        user_query: &str,
    ) -> Result<String, LlmError>;
}

/// Judge client: one call per completed game, retried with backoff.
#[derive(Debug, Clone)]
pub struct JudgeClient<T> {
    transport: T,
    policy: RetryPolicy,
}

impl<T: JudgeTransport> JudgeClient<T> {
    /// Creates a client over the given transport with the default policy.
    pub fn new(transport: T) -> Self {
        Self::with_policy(transport, RetryPolicy::default())
    }

    /// Creates a client with an explicit retry policy.
    pub fn with_policy(transport: T, policy: RetryPolicy) -> Self {
        Self { transport, policy }
    }

    /// The underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Asks the judge to pick a winner for the given completed game.
    ///
    /// Transport failures, unparseable bodies, and out-of-range winner
    /// values are all retried up to the policy cap with doubling delays.
    ///
    /// # Errors
    ///
    /// [`JudgeError::Exhausted`] once every attempt has failed.
    #[instrument(skip(self, request), fields(generation = request.generation()))]
    pub async fn decide(&self, request: &JudgmentRequest) -> Result<JudgmentResult, JudgeError> {
        let query = request.user_query();
        let mut last_failure = String::from("no attempts were made");

        for attempt in 0..self.policy.max_attempts {
            if attempt > 0 {
                let delay = self.policy.delay_before(attempt - 1);
                debug!(?delay, attempt, "Backing off before retry");
                tokio::time::sleep(delay).await;
            }

            match self.transport.request_verdict(SYSTEM_PROMPT, &query).await {
                Ok(body) => match parse_verdict(&body) {
                    Ok(result) => {
                        info!(attempt, winner = %result.winner(), "Judgment accepted");
                        return Ok(result);
                    }
                    Err(e) => {
                        warn!(attempt, error = %e, "Judge response rejected");
                        last_failure = e.to_string();
                    }
                },
                Err(e) => {
                    warn!(attempt, error = %e, "Judge transport failed");
                    last_failure = e.to_string();
                }
            }
        }

        Err(JudgeError::Exhausted {
            attempts: self.policy.max_attempts,
            last: last_failure,
        })
    }
}
