//! Tests for rock-paper-scissors resolution and the commit buffer.

use crew_draft::{Choice, Outcome, PlayerId, RpsRound, resolve};

#[test]
fn test_equal_choices_always_tie() {
    for choice in [Choice::Rock, Choice::Paper, Choice::Scissors] {
        assert_eq!(resolve(choice, choice), Outcome::Tie);
    }
}

#[test]
fn test_all_non_tie_combinations() {
    let a_wins = [
        (Choice::Rock, Choice::Scissors),
        (Choice::Scissors, Choice::Paper),
        (Choice::Paper, Choice::Rock),
    ];
    for (a, b) in a_wins {
        assert_eq!(resolve(a, b), Outcome::Winner(PlayerId::A), "{a:?} vs {b:?}");
        // Reversed arguments flip the winner.
        assert_eq!(resolve(b, a), Outcome::Winner(PlayerId::B), "{b:?} vs {a:?}");
    }
}

#[test]
fn test_round_waits_for_both_commits() {
    let mut round = RpsRound::new();
    let outcome = round.commit(PlayerId::A, Choice::Rock).unwrap();
    assert_eq!(outcome, None, "no result until both players commit");
    assert!(round.has_committed(PlayerId::A));
    assert!(!round.has_committed(PlayerId::B));

    let outcome = round.commit(PlayerId::B, Choice::Scissors).unwrap();
    assert_eq!(outcome, Some(Outcome::Winner(PlayerId::A)));
}

#[test]
fn test_double_commit_rejected() {
    let mut round = RpsRound::new();
    round.commit(PlayerId::A, Choice::Rock).unwrap();
    let err = round.commit(PlayerId::A, Choice::Paper).unwrap_err();
    assert_eq!(err.player, PlayerId::A);
    // The original commit is untouched.
    assert!(round.has_committed(PlayerId::A));
}

#[test]
fn test_tie_clears_both_commits_for_replay() {
    let mut round = RpsRound::new();
    round.commit(PlayerId::A, Choice::Paper).unwrap();
    let outcome = round.commit(PlayerId::B, Choice::Paper).unwrap();
    assert_eq!(outcome, Some(Outcome::Tie));
    assert!(!round.has_committed(PlayerId::A));
    assert!(!round.has_committed(PlayerId::B));

    // Fresh round proceeds normally after the tie.
    round.commit(PlayerId::A, Choice::Rock).unwrap();
    let outcome = round.commit(PlayerId::B, Choice::Paper).unwrap();
    assert_eq!(outcome, Some(Outcome::Winner(PlayerId::B)));
}
