//! Crew Draft - interactive terminal game.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use crew_draft::{
    Choice, DraftGame, GamePhase, JudgeClient, JudgeConfig, LlmClient, PlayerId, Position,
    ROSTER_SIZE, TurnTransition,
};
use std::io::{BufRead, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            seed,
            no_judge,
        } => play(config, seed, no_judge).await,
    }
}

/// Runs one full interactive game.
async fn play(config_path: std::path::PathBuf, seed: Option<u64>, no_judge: bool) -> Result<()> {
    let mut game = match seed {
        Some(seed) => DraftGame::with_seed(seed),
        None => DraftGame::new(),
    };

    game.start()?;
    println!("Welcome to the Crew Draft! Each player fills 8 positions.");
    println!("Take turns drawing cards and placing them. You can skip once per game.\n");

    enter_names(&mut game)?;
    resolve_order(&mut game)?;
    run_draft(&mut game)?;

    if game.phase() != GamePhase::Complete {
        // Stalled draft: deck ran out before the rosters filled.
        println!("The deck ran out before both crews were complete. No judgment possible.");
        return Ok(());
    }

    println!("\nAll positions filled! Final crews:\n");
    for player in [PlayerId::A, PlayerId::B] {
        println!("{}:", game.player_name(player));
        println!("{}\n", game.roster(player).summary());
    }

    if no_judge {
        return Ok(());
    }

    let config = if config_path.exists() {
        JudgeConfig::from_file(&config_path)
            .with_context(|| format!("loading {}", config_path.display()))?
    } else {
        JudgeConfig::default()
    };

    println!("Initiating AI judgement...");
    let request = game.begin_judgment()?;
    let generation = *request.generation();
    let client = JudgeClient::with_policy(
        LlmClient::new(config.create_llm_config()?),
        config.retry_policy(),
    );

    match client.decide(&request).await {
        Ok(result) => {
            let accepted = game.record_judgment(generation, result.clone());
            info!(accepted, "Judgment returned");
            println!(
                "\nJudgment complete! The winner is {}!",
                game.player_name(result.winner())
            );
            println!("Reasoning: {}", result.reasoning());
        }
        Err(e) => {
            // Terminal judge failure is distinct from a win announcement.
            println!("\nAI judgment failed: {e}");
            println!("No winner was recorded. Start a new game to try again.");
        }
    }

    Ok(())
}

/// Prompts until both names pass validation.
fn enter_names(game: &mut DraftGame) -> Result<()> {
    loop {
        let name_a = prompt("Player 1, enter your name: ")?;
        let name_b = prompt("Player 2, enter your name: ")?;
        match game.submit_names(&name_a, &name_b) {
            Ok(()) => return Ok(()),
            Err(e) => println!("{e}"),
        }
    }
}

/// Runs RPS rounds until one player wins the start.
fn resolve_order(game: &mut DraftGame) -> Result<()> {
    println!("\nRock-paper-scissors decides who drafts first.");
    loop {
        for player in [PlayerId::A, PlayerId::B] {
            loop {
                let line = prompt(&format!(
                    "{}, choose rock/paper/scissors (hidden from your opponent): ",
                    game.player_name(player)
                ))?;
                let Some(choice) = parse_choice(&line) else {
                    println!("Unrecognized choice.");
                    continue;
                };
                match game.choose_order(player, choice) {
                    Ok(_) => break,
                    Err(e) => println!("{e}"),
                }
            }
        }
        match game.phase() {
            GamePhase::Drafting => {
                let starter = game.turn().current_player();
                println!(
                    "{} wins the draw! They will start first.\n",
                    game.player_name(starter)
                );
                return Ok(());
            }
            _ => println!("Tie! Both players must choose again."),
        }
    }
}

/// Alternating draw/place/skip loop until completion or stall.
fn run_draft(game: &mut DraftGame) -> Result<()> {
    while game.phase() == GamePhase::Drafting {
        if game.is_stalled() {
            return Ok(());
        }
        let player = game.turn().current_player();
        let Some(card) = game.turn().current_card().cloned() else {
            // Deck empty but the opponent can still be waiting on nothing;
            // the stall check above ends the loop next pass.
            return Ok(());
        };

        println!("{}'s turn. Drawn card: {}.", game.player_name(player), card);
        print_open_slots(game, player);

        let line = prompt("Choose a slot number, or 'skip': ")?;
        let result = if line.eq_ignore_ascii_case("skip") {
            game.skip(player)
        } else {
            match line.parse::<usize>() {
                Ok(index) => game.place(player, index),
                Err(_) => {
                    println!("Enter a slot number between 0 and 7, or 'skip'.");
                    continue;
                }
            }
        };

        match result {
            Ok(TurnTransition::Kept) => {
                println!("Card skipped. Drawing another card...\n");
            }
            Ok(TurnTransition::Passed { to, card_drawn }) => {
                if !card_drawn {
                    println!("Deck is empty. Passing turn to {}.\n", game.player_name(to));
                }
            }
            Ok(TurnTransition::Complete) => {
                println!("All positions filled! Game ended.");
            }
            Err(e) => println!("{e}"),
        }
    }
    Ok(())
}

fn print_open_slots(game: &DraftGame, player: PlayerId) {
    let roster = game.roster(player);
    for index in 0..ROSTER_SIZE {
        let position = Position::from_index(index).expect("fixed range");
        match roster.slot(index) {
            Some(placement) => println!("  {index}: {position} - {}", placement.card.name()),
            None => println!("  {index}: {position} - open"),
        }
    }
    if game.skip_available(player) {
        println!("  skip: discard this card and draw again (once per game)");
    }
}

fn parse_choice(line: &str) -> Option<Choice> {
    match line.trim().to_ascii_lowercase().as_str() {
        "rock" | "r" => Some(Choice::Rock),
        "paper" | "p" => Some(Choice::Paper),
        "scissors" | "s" => Some(Choice::Scissors),
        _ => None,
    }
}

fn prompt(message: &str) -> Result<String> {
    print!("{message}");
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
