//! Rosters: the eight fixed crew positions and write-once slot placement.

use crate::cards::Card;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// Number of positions in a roster.
pub const ROSTER_SIZE: usize = 8;

/// A fixed crew position, in slot-index order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum Position {
    /// Slot 0.
    Captain,
    /// Slot 1.
    ViceCaptain,
    /// Slot 2.
    Tank,
    /// Slot 3.
    Swordsman,
    /// Slot 4.
    Healer,
    /// Slot 5.
    Sniper,
    /// Slot 6.
    SupportOne,
    /// Slot 7.
    SupportTwo,
}

impl Position {
    /// Maps a slot index to its position, or `None` when out of range.
    pub fn from_index(index: usize) -> Option<Self> {
        Position::iter().nth(index)
    }

    /// The slot index of this position.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Human-readable label, as shown to players and the judge.
    pub fn label(self) -> &'static str {
        match self {
            Position::Captain => "Captain",
            Position::ViceCaptain => "Vice Captain",
            Position::Tank => "Tank",
            Position::Swordsman => "Swordsman",
            Position::Healer => "Healer",
            Position::Sniper => "Sniper",
            Position::SupportOne => "Support 1",
            Position::SupportTwo => "Support 2",
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A card assigned to a position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// The placed card.
    pub card: Card,
    /// The position it fills.
    pub position: Position,
}

/// A player's eight-slot roster.
///
/// Slots are write-once: a filled slot is never cleared or overwritten for
/// the remainder of the game. Only the draft state machine mutates rosters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    slots: [Option<Placement>; ROSTER_SIZE],
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// The placement in the given slot, if any. Out-of-range indexes read
    /// as empty.
    pub fn slot(&self, index: usize) -> Option<&Placement> {
        self.slots.get(index).and_then(|s| s.as_ref())
    }

    /// Whether the slot at `index` is unfilled.
    pub fn is_slot_empty(&self, index: usize) -> bool {
        self.slot(index).is_none()
    }

    /// Number of filled slots.
    pub fn filled_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Whether all eight slots are filled.
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(|s| s.is_some())
    }

    /// Writes `card` into the slot at `index`.
    ///
    /// The state machine validates the index and emptiness before calling
    /// (see [`crate::rules`]); an invalid write here is a programmer error.
    pub(crate) fn fill(&mut self, index: usize, card: Card) -> &Placement {
        let position = Position::from_index(index)
            .unwrap_or_else(|| panic!("slot index {index} out of range"));
        let slot = &mut self.slots[index];
        assert!(slot.is_none(), "slot {index} already filled");
        *slot = Some(Placement { card, position });
        slot.as_ref().expect("slot just filled")
    }

    /// Flattens the filled slots into judge-facing summary lines, one
    /// `* <position>: <name> (Rank: <rank>)` line per filled slot.
    pub fn summary(&self) -> String {
        self.slots
            .iter()
            .flatten()
            .map(|p| {
                format!(
                    "* {}: {} (Rank: {})",
                    p.position.label(),
                    p.card.name(),
                    p.card.rank()
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
