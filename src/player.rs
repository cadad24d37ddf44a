//! The two fixed player identities.

use serde::{Deserialize, Serialize};

/// One of the two players in a draft. There are never more or fewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    /// Player A (entered first on the name screen).
    A,
    /// Player B.
    B,
}

impl PlayerId {
    /// Returns the other player.
    pub fn opponent(self) -> Self {
        match self {
            PlayerId::A => PlayerId::B,
            PlayerId::B => PlayerId::A,
        }
    }

    /// Canonical wire token used in the judge contract.
    pub fn token(self) -> &'static str {
        match self {
            PlayerId::A => "PlayerA",
            PlayerId::B => "PlayerB",
        }
    }

    /// Default display name when the player never entered one.
    pub fn fallback_name(self) -> &'static str {
        match self {
            PlayerId::A => "Player 1",
            PlayerId::B => "Player 2",
        }
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}
