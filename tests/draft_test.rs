//! Tests for the draft state machine: phases, turns, skips, and reset.

use crew_draft::{
    Card, Choice, DraftError, DraftGame, GamePhase, JudgmentResult, PlayerId, TurnTransition,
};

/// A pool of distinct disposable cards.
fn pool(n: usize) -> Vec<Card> {
    (0..n)
        .map(|i| Card::new(format!("Fighter {i}"), "B-Tier"))
        .collect()
}

/// A game advanced to the start of the drafting phase, with player A
/// winning the RPS (Rock beats Scissors).
fn drafting_game(pool_size: usize) -> DraftGame {
    let mut game = DraftGame::with_pool_and_seed(pool(pool_size), 42);
    game.start().unwrap();
    game.submit_names("Alice", "Bob").unwrap();
    game.choose_order(PlayerId::A, Choice::Rock).unwrap();
    game.choose_order(PlayerId::B, Choice::Scissors).unwrap();
    assert_eq!(game.phase(), GamePhase::Drafting);
    game
}

/// Fills both rosters with alternating valid placements.
fn complete_draft(game: &mut DraftGame) {
    while game.phase() == GamePhase::Drafting {
        let player = game.turn().current_player();
        let slot = (0..crew_draft::ROSTER_SIZE)
            .find(|i| game.roster(player).is_slot_empty(*i))
            .expect("an open slot must exist while drafting");
        game.place(player, slot).unwrap();
    }
}

#[test]
fn test_phase_progression_scenario_a() {
    let mut game = DraftGame::with_pool_and_seed(pool(20), 7);
    assert_eq!(game.phase(), GamePhase::Init);

    game.start().unwrap();
    assert_eq!(game.phase(), GamePhase::NameEntry);

    game.submit_names("Alice", "Bob").unwrap();
    assert_eq!(game.phase(), GamePhase::OrderResolution);

    // Rock beats Scissors: A starts and receives the first draw.
    assert_eq!(game.choose_order(PlayerId::A, Choice::Rock).unwrap(), None);
    game.choose_order(PlayerId::B, Choice::Scissors).unwrap();
    assert_eq!(game.phase(), GamePhase::Drafting);
    assert_eq!(game.turn().current_player(), PlayerId::A);
    assert!(game.turn().current_card().is_some(), "first draw dealt to A");
    assert_eq!(game.deck_len(), 19);
}

#[test]
fn test_invalid_names_are_rejected_without_advancing() {
    let mut game = DraftGame::with_pool_and_seed(pool(20), 7);
    game.start().unwrap();

    let err = game.submit_names("X", "Bob").unwrap_err();
    assert!(matches!(
        err,
        DraftError::InvalidName {
            player: PlayerId::A,
            ..
        }
    ));
    assert_eq!(game.phase(), GamePhase::NameEntry);

    let err = game.submit_names("Alice", "Bob!!!").unwrap_err();
    assert!(matches!(
        err,
        DraftError::InvalidName {
            player: PlayerId::B,
            ..
        }
    ));
    assert_eq!(game.phase(), GamePhase::NameEntry);

    game.submit_names("  Alice  ", "Bob").unwrap();
    assert_eq!(game.player_name(PlayerId::A), "Alice", "names are trimmed");
}

#[test]
fn test_rps_tie_replays_round() {
    let mut game = DraftGame::with_pool_and_seed(pool(20), 7);
    game.start().unwrap();
    game.submit_names("Alice", "Bob").unwrap();

    game.choose_order(PlayerId::A, Choice::Rock).unwrap();
    let outcome = game.choose_order(PlayerId::B, Choice::Rock).unwrap();
    assert_eq!(outcome, Some(crew_draft::Outcome::Tie));
    assert_eq!(game.phase(), GamePhase::OrderResolution);
    assert!(!game.has_chosen_order(PlayerId::A));
    assert!(!game.has_chosen_order(PlayerId::B));

    // Replay resolves normally.
    game.choose_order(PlayerId::A, Choice::Paper).unwrap();
    game.choose_order(PlayerId::B, Choice::Rock).unwrap();
    assert_eq!(game.turn().current_player(), PlayerId::A);
}

#[test]
fn test_skip_scenario_b() {
    let mut game = drafting_game(20);
    let held = game.turn().current_card().cloned().unwrap();
    let deck_before = game.deck_len();

    let transition = game.skip(PlayerId::A).unwrap();
    assert_eq!(transition, TurnTransition::Kept, "skip keeps the turn");
    assert!(!game.skip_available(PlayerId::A));
    assert_eq!(game.turn().current_player(), PlayerId::A);

    let replacement = game.turn().current_card().cloned().unwrap();
    assert_ne!(replacement, held, "skipped card is out of play");
    assert_eq!(game.deck_len(), deck_before - 1);
    assert_eq!(game.roster(PlayerId::A).filled_count(), 0);
}

#[test]
fn test_second_skip_rejected_without_mutation() {
    let mut game = drafting_game(20);
    game.skip(PlayerId::A).unwrap();

    let card = game.turn().current_card().cloned();
    let deck_before = game.deck_len();
    let err = game.skip(PlayerId::A).unwrap_err();
    assert!(matches!(
        err,
        DraftError::SkipAlreadyUsed {
            player: PlayerId::A
        }
    ));
    assert_eq!(game.turn().current_card().cloned(), card);
    assert_eq!(game.deck_len(), deck_before);
    assert!(!game.skip_available(PlayerId::A));
}

#[test]
fn test_skip_with_empty_deck_passes_turn() {
    // One card: A draws it at the RPS transition, the deck is then empty.
    let mut game = drafting_game(1);
    assert_eq!(game.deck_len(), 0);

    let transition = game.skip(PlayerId::A).unwrap();
    assert_eq!(
        transition,
        TurnTransition::Passed {
            to: PlayerId::B,
            card_drawn: false
        }
    );
    assert_eq!(game.turn().current_player(), PlayerId::B);
    assert!(game.turn().current_card().is_none());
    assert!(game.is_stalled());
}

#[test]
fn test_placement_validation() {
    let mut game = drafting_game(20);

    let err = game.place(PlayerId::B, 0).unwrap_err();
    assert!(matches!(
        err,
        DraftError::NotYourTurn {
            player: PlayerId::B
        }
    ));

    let err = game.place(PlayerId::A, 8).unwrap_err();
    assert!(matches!(err, DraftError::InvalidSlot { index: 8 }));

    game.place(PlayerId::A, 0).unwrap();
    game.place(PlayerId::B, 0).unwrap();

    // A's captain slot is filled; replaying the index is an idempotent no-op.
    let before = game.roster(PlayerId::A).clone();
    let err = game.place(PlayerId::A, 0).unwrap_err();
    assert!(matches!(err, DraftError::SlotOccupied { .. }));
    assert_eq!(*game.roster(PlayerId::A), before);
    assert!(
        game.turn().current_card().is_some(),
        "rejected placement keeps the pending card"
    );
}

#[test]
fn test_turn_alternates_on_placement() {
    let mut game = drafting_game(20);
    assert_eq!(game.turn().current_player(), PlayerId::A);

    let transition = game.place(PlayerId::A, 3).unwrap();
    assert_eq!(
        transition,
        TurnTransition::Passed {
            to: PlayerId::B,
            card_drawn: true
        }
    );
    assert_eq!(game.turn().current_player(), PlayerId::B);

    game.place(PlayerId::B, 5).unwrap();
    assert_eq!(game.turn().current_player(), PlayerId::A);
}

#[test]
fn test_completion_scenario_c() {
    let mut game = drafting_game(16);
    complete_draft(&mut game);

    assert_eq!(game.phase(), GamePhase::Complete);
    assert!(game.roster(PlayerId::A).is_complete());
    assert!(game.roster(PlayerId::B).is_complete());

    let request = game.begin_judgment().unwrap();
    let lines = |s: &str| s.lines().filter(|l| l.starts_with("* ")).count();
    assert_eq!(lines(request.roster_a()), 8);
    assert_eq!(lines(request.roster_b()), 8);
    assert_eq!(lines(&request.user_query()), 16);
    assert!(request.user_query().contains("Crew A (Alice):"));
    assert!(request.user_query().contains("Crew B (Bob):"));

    // No further actions are accepted, and the request is single-shot.
    assert!(matches!(
        game.place(PlayerId::A, 0),
        Err(DraftError::PhaseMismatch { .. })
    ));
    assert!(matches!(
        game.skip(PlayerId::B),
        Err(DraftError::PhaseMismatch { .. })
    ));
    assert!(matches!(
        game.begin_judgment(),
        Err(DraftError::JudgmentAlreadyRequested)
    ));
}

#[test]
fn test_deck_exhaustion_stalls_draft() {
    // Three cards: enough for three placements, then nothing to draw.
    let mut game = drafting_game(3);
    game.place(PlayerId::A, 0).unwrap();
    game.place(PlayerId::B, 0).unwrap();
    let transition = game.place(PlayerId::A, 1).unwrap();
    assert_eq!(
        transition,
        TurnTransition::Passed {
            to: PlayerId::B,
            card_drawn: false
        }
    );

    assert_eq!(game.phase(), GamePhase::Drafting);
    assert!(game.is_stalled());
    assert!(matches!(
        game.place(PlayerId::B, 1),
        Err(DraftError::NoPendingCard)
    ));
    assert!(matches!(
        game.skip(PlayerId::B),
        Err(DraftError::NoPendingCard)
    ));
}

#[test]
fn test_reset_scenario_d() {
    let mut game = drafting_game(20);
    game.skip(PlayerId::A).unwrap();
    game.place(PlayerId::A, 0).unwrap();
    game.place(PlayerId::B, 4).unwrap();
    let generation_before = game.generation();

    game.reset();

    assert_eq!(game.phase(), GamePhase::Init);
    assert_eq!(game.deck_len(), 20, "deck is reshuffled to full size");
    assert_eq!(game.roster(PlayerId::A).filled_count(), 0);
    assert_eq!(game.roster(PlayerId::B).filled_count(), 0);
    assert!(game.skip_available(PlayerId::A));
    assert!(game.skip_available(PlayerId::B));
    assert!(game.turn().current_card().is_none());
    assert_eq!(game.player_name(PlayerId::A), "Player 1");
    assert_eq!(game.generation(), generation_before + 1);
    assert!(game.judgment().is_none());
}

#[test]
fn test_stale_judgment_discarded_after_reset() {
    let mut game = drafting_game(16);
    complete_draft(&mut game);
    let request = game.begin_judgment().unwrap();
    let stale_generation = *request.generation();

    game.reset();

    let result = JudgmentResult::new(PlayerId::A, "Crew A is stronger.");
    assert!(!game.record_judgment(stale_generation, result.clone()));
    assert!(game.judgment().is_none());

    // A judgment for the current completed game is accepted.
    game.start().unwrap();
    game.submit_names("Alice", "Bob").unwrap();
    game.choose_order(PlayerId::A, Choice::Rock).unwrap();
    game.choose_order(PlayerId::B, Choice::Scissors).unwrap();
    complete_draft(&mut game);
    let request = game.begin_judgment().unwrap();
    assert!(game.record_judgment(*request.generation(), result.clone()));
    assert_eq!(game.judgment(), Some(&result));
}

#[test]
fn test_actions_out_of_phase_are_rejected() {
    let mut game = DraftGame::with_pool_and_seed(pool(20), 7);
    assert!(matches!(
        game.place(PlayerId::A, 0),
        Err(DraftError::PhaseMismatch { .. })
    ));
    assert!(matches!(
        game.submit_names("Alice", "Bob"),
        Err(DraftError::PhaseMismatch { .. })
    ));
    assert!(matches!(
        game.choose_order(PlayerId::A, Choice::Rock),
        Err(DraftError::PhaseMismatch { .. })
    ));
    assert!(matches!(
        game.begin_judgment(),
        Err(DraftError::PhaseMismatch { .. })
    ));
    // Double-start is also a phase error.
    game.start().unwrap();
    assert!(matches!(game.start(), Err(DraftError::PhaseMismatch { .. })));
}
