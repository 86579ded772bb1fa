//! learngo: a Go rules engine and SGF puzzle loader.
//!
//! ## Usage
//!
//! - `learngo` - Show a demo
//! - `learngo gtp` - Start GTP server for GUI integration
//! - `learngo demo` - Play a seeded random game and show the result
//! - `learngo sgf <file>` - Decode a puzzle and print it

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use learngo::constants::{DEFAULT_SIZE, DEMO_MOVES, DEMO_SEED, MAX_GTP_SIZE};
use learngo::game::Game;
use learngo::gtp::{GtpEngine, render_board};
use learngo::playout::random_game;
use learngo::sgf::decode;

/// learngo: a Go rules engine and SGF puzzle loader
#[derive(Parser)]
#[command(name = "learngo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, global = true, default_value = "warn")]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the GTP (Go Text Protocol) server for use with GUI applications
    Gtp {
        /// Initial board size
        #[arg(short, long, default_value_t = DEFAULT_SIZE, value_parser = board_size)]
        size: usize,
    },
    /// Play a random game and print the final position
    Demo {
        /// Board size
        #[arg(short, long, default_value_t = 9, value_parser = board_size)]
        size: usize,
        /// Maximum number of moves
        #[arg(short, long, default_value_t = DEMO_MOVES)]
        moves: usize,
        /// RNG seed
        #[arg(long, default_value_t = DEMO_SEED)]
        seed: u64,
    },
    /// Decode an SGF puzzle and print it
    Sgf {
        /// Path to the SGF file
        path: PathBuf,
        /// Print the puzzle as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Board sizes a GTP vertex can address.
fn board_size(arg: &str) -> Result<usize, String> {
    let size: usize = arg.parse().map_err(|_| format!("`{arg}` is not a number"))?;
    if (1..=MAX_GTP_SIZE).contains(&size) {
        Ok(size)
    } else {
        Err(format!("board size must be between 1 and {MAX_GTP_SIZE}"))
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    initialize_logging(cli.log_level);

    match cli.command {
        Some(Commands::Gtp { size }) => {
            let game = Game::new(size).context("cannot start GTP engine")?;
            let mut engine = GtpEngine::from_game(game);
            engine.run(std::io::stdin().lock(), std::io::stdout())?;
        }
        Some(Commands::Demo { size, moves, seed }) => run_demo(size, moves, seed)?,
        Some(Commands::Sgf { path, json }) => show_puzzle(&path, json)?,
        None => run_demo(9, DEMO_MOVES, DEMO_SEED)?,
    }
    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

fn run_demo(size: usize, moves: usize, seed: u64) -> anyhow::Result<()> {
    println!("learngo: random game on a {size}x{size} board\n");

    let mut game = Game::new(size)?;
    let mut rng = fastrand::Rng::with_seed(seed);
    let stats = random_game(&mut game, moves, &mut rng);
    info!(seed, ?stats, "playout finished");

    println!("{}\n", render_board(game.current_board()));
    println!(
        "Stones played: {}, passes: {}, captured: {}",
        stats.moves, stats.passes, stats.captures
    );
    println!("Next to move: {}", game.current_player());
    Ok(())
}

fn show_puzzle(path: &Path, json: bool) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    let puzzle = decode(&text).with_context(|| format!("cannot decode {}", path.display()))?;
    info!(title = %puzzle.title, size = puzzle.size(), "puzzle decoded");

    if json {
        println!("{}", serde_json::to_string_pretty(&puzzle)?);
        return Ok(());
    }

    println!("{}", puzzle.title);
    if let Some(description) = &puzzle.description {
        println!("{description}");
    }
    println!();
    print!("{}", puzzle.initial_board);
    println!();
    for (i, mv) in puzzle.solution_moves.iter().enumerate() {
        println!("{:>3}. {} ({}, {})", i + 1, mv.color, mv.row, mv.col);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_size_limits() {
        assert_eq!(board_size("19"), Ok(19));
        assert_eq!(board_size("25"), Ok(25));
        assert!(board_size("0").is_err());
        assert!(board_size("26").is_err());
        assert!(board_size("nine").is_err());
    }

    #[test]
    fn test_cli_rejects_oversized_boards() {
        assert!(Cli::try_parse_from(["learngo", "gtp", "--size", "30"]).is_err());
        assert!(Cli::try_parse_from(["learngo", "demo", "--size", "100000"]).is_err());
        let cli = Cli::try_parse_from(["learngo", "gtp", "--size", "13"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Gtp { size: 13 })));
    }
}
