use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use connect_four_engine::ai::MinimaxAgent;
use connect_four_engine::config::{AppConfig, Difficulty};
use connect_four_engine::game::GameState;

/// Compute the engine's reply to a sequence of Connect Four moves.
#[derive(Parser)]
#[command(name = "connect-four", about = "Connect Four move-decision engine")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Difficulty override: easy, medium or hard
    #[arg(long)]
    difficulty: Option<String>,

    /// Search depth override, in plies
    #[arg(long)]
    depth: Option<usize>,

    /// Seed for reproducible tie-breaks
    #[arg(long)]
    seed: Option<u64>,

    /// Columns (0-6) played so far, alternating from Red
    moves: Vec<usize>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    if let Some(difficulty) = cli.difficulty.as_deref() {
        config.ai.difficulty = match difficulty {
            "easy" => Difficulty::Easy,
            "medium" => Difficulty::Medium,
            "hard" => Difficulty::Hard,
            other => bail!("unknown difficulty '{}' (expected 'easy', 'medium' or 'hard')", other),
        };
    }
    if let Some(seed) = cli.seed {
        config.ai.seed = Some(seed);
    }
    let depth = cli.depth.unwrap_or_else(|| config.ai.search_depth());

    let mut state = GameState::initial();
    for &col in &cli.moves {
        state = state
            .apply_move(col)
            .with_context(|| format!("replaying move in column {col}"))?;
    }
    if state.is_terminal() {
        bail!("the game is already over after the given moves");
    }

    let mut agent = match config.ai.seed {
        Some(seed) => MinimaxAgent::with_seed(state.current_player(), depth, seed),
        None => MinimaxAgent::new(state.current_player(), depth),
    };
    let column = agent.compute_move(state.board())?;

    println!("{}", state.board());
    println!("{} plays column {column}", state.current_player().name());
    Ok(())
}
