//! Command-line interface for crew_draft.

use clap::{Parser, Subcommand};

/// Crew Draft - two-player card drafting with an LLM battle judge
#[derive(Parser, Debug)]
#[command(name = "crew_draft")]
#[command(about = "Draft a pirate crew and let an AI judge the battle", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive two-player draft in the terminal
    Play {
        /// Path to the judge configuration file
        #[arg(short, long, default_value = "judge_config.toml")]
        config: std::path::PathBuf,

        /// Fixed RNG seed for a reproducible deck order
        #[arg(long)]
        seed: Option<u64>,

        /// Skip the AI judgment when the draft completes
        #[arg(long)]
        no_judge: bool,
    },
}
