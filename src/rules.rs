//! Pure validation predicates gating every draft mutation.
//!
//! Each predicate is side-effect free and independently testable; the state
//! machine consults them before touching any state, so a rejected action is
//! always a no-op.

use crate::roster::{ROSTER_SIZE, Roster};

/// Bounds on a trimmed player name.
pub const NAME_MIN_LEN: usize = 2;
/// Upper bound on a trimmed player name.
pub const NAME_MAX_LEN: usize = 20;

/// Whether `index` addresses one of the eight fixed slots.
pub fn is_valid_slot_index(index: usize) -> bool {
    index < ROSTER_SIZE
}

/// Whether the slot at `index` is unfilled in `roster`.
pub fn is_slot_empty(roster: &Roster, index: usize) -> bool {
    roster.is_slot_empty(index)
}

/// Whether a drawn card is pending a place-or-skip decision.
pub fn has_pending_card(current_card: &Option<crate::cards::Card>) -> bool {
    current_card.is_some()
}

/// Validates a display name, returning the trimmed form.
///
/// Rules: trimmed length within 2 to 20 and only letters, digits, spaces,
/// apostrophes, periods, and hyphens.
pub fn validate_name(name: &str) -> Result<&str, NameError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(NameError::Empty);
    }
    if trimmed.len() < NAME_MIN_LEN {
        return Err(NameError::TooShort);
    }
    if trimmed.len() > NAME_MAX_LEN {
        return Err(NameError::TooLong);
    }
    if !trimmed
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, ' ' | '\'' | '.' | '-'))
    {
        return Err(NameError::InvalidCharacters);
    }
    Ok(trimmed)
}

/// Why a player name was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum NameError {
    /// Name is empty after trimming.
    #[display("Name cannot be empty")]
    Empty,
    /// Fewer than two characters after trimming.
    #[display("Name must be at least 2 characters")]
    TooShort,
    /// More than twenty characters after trimming.
    #[display("Name must be 20 characters or less")]
    TooLong,
    /// Characters outside letters/digits/space/'/./-.
    #[display("Name contains invalid characters")]
    InvalidCharacters,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_index_bounds() {
        assert!(is_valid_slot_index(0));
        assert!(is_valid_slot_index(7));
        assert!(!is_valid_slot_index(8));
        assert!(!is_valid_slot_index(usize::MAX));
    }

    #[test]
    fn name_rules() {
        assert_eq!(validate_name("  Nami  "), Ok("Nami"));
        assert_eq!(validate_name("D. Teach-Jr's"), Ok("D. Teach-Jr's"));
        assert_eq!(validate_name(""), Err(NameError::Empty));
        assert_eq!(validate_name("   "), Err(NameError::Empty));
        assert_eq!(validate_name("X"), Err(NameError::TooShort));
        assert_eq!(
            validate_name("an extremely long pirate name"),
            Err(NameError::TooLong)
        );
        assert_eq!(validate_name("Luffy!"), Err(NameError::InvalidCharacters));
    }
}
