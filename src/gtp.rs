//! Go Text Protocol (GTP) front end.
//!
//! GTP is a text-based protocol for communicating with Go programs. This
//! module exposes the rules engine through GTP version 2 so that graphical
//! boards such as Sabaki or GoGui can drive it, and adds a few commands for
//! puzzles and history navigation.
//!
//! ## Supported Commands
//!
//! - `name` / `version` / `protocol_version`
//! - `list_commands` / `known_command <cmd>`
//! - `quit`
//! - `boardsize <size>` - Start over on an empty board (1 to 25)
//! - `clear_board` - Start over on an empty board of the current size
//! - `play <color> <vertex>` - Play a move; `color` must be the player to move
//! - `undo` / `redo` - Navigate the move history
//! - `showboard` - Print the current position
//! - `loadsgf <file> [move_number]` - Load a puzzle, replaying its solution up to `move_number`
//! - `puzzle_solution` - List the solution of the loaded puzzle
//!
//! ## Example
//!
//! ```no_run
//! use learngo::gtp::GtpEngine;
//! let mut engine = GtpEngine::new();
//! engine.run(std::io::stdin().lock(), std::io::stdout()).unwrap();
//! ```

use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use crate::board::{Board, Color};
use crate::constants::{GTP_COLUMNS, MAX_GTP_SIZE};
use crate::game::Game;
use crate::position::{Vertex, parse_vertex, str_vertex};
use crate::sgf::{Puzzle, decode};

/// The list of known GTP commands.
const KNOWN_COMMANDS: &[&str] = &[
    "boardsize",
    "clear_board",
    "known_command",
    "list_commands",
    "loadsgf",
    "name",
    "play",
    "protocol_version",
    "puzzle_solution",
    "quit",
    "redo",
    "showboard",
    "undo",
    "version",
];

/// GTP engine state.
pub struct GtpEngine {
    /// Current game, including its history
    game: Game,
    /// Puzzle loaded by `loadsgf`, if any
    puzzle: Option<Puzzle>,
}

impl Default for GtpEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GtpEngine {
    /// Create a new GTP engine on an empty 19x19 board.
    pub fn new() -> Self {
        Self::from_game(Game::default())
    }

    /// Create a GTP engine around an existing game.
    pub fn from_game(game: Game) -> Self {
        Self { game, puzzle: None }
    }

    /// The game being driven.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Run the GTP command loop until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            // Parse optional command ID
            let (id, command_line) = Self::parse_id(line);

            // Parse command and arguments
            let parts: Vec<&str> = command_line.split_whitespace().collect();
            let Some((command, args)) = parts.split_first() else {
                continue;
            };
            let command = command.to_lowercase();

            debug!(%command, ?args, "gtp command");
            let (success, message) = self.execute(&command, args);
            if !success {
                debug!(%command, %message, "gtp command failed");
            }

            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();
            write!(output, "{prefix}{id_str} {message}\n\n")?;
            output.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Parse an optional numeric command ID from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        if end > 0 {
            if let Ok(id) = trimmed[..end].parse::<u32>() {
                return (Some(id), trimmed[end..].trim());
            }
        }
        (None, trimmed)
    }

    /// Execute a GTP command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "name" => (true, env!("CARGO_PKG_NAME").to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => (true, "2".to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                let Some(name) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let known = KNOWN_COMMANDS.contains(&name.to_lowercase().as_str());
                (true, known.to_string())
            }

            "quit" => (true, String::new()),

            "boardsize" => {
                let Some(arg) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                match arg.parse::<usize>() {
                    Ok(size) if size <= MAX_GTP_SIZE => self.reset(size),
                    Ok(_) => (false, "unacceptable size".to_string()),
                    Err(_) => (false, "invalid size".to_string()),
                }
            }

            "clear_board" => self.reset(self.size()),

            "play" => self.play(args),

            "undo" => {
                if self.game.undo() {
                    (true, String::new())
                } else {
                    (false, "cannot undo".to_string())
                }
            }

            "redo" => {
                if self.game.redo() {
                    (true, String::new())
                } else {
                    (false, "cannot redo".to_string())
                }
            }

            "showboard" => (true, format!("\n{}", render_board(self.game.current_board()))),

            "loadsgf" => {
                let Some(path) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let move_number = match args.get(1).map(|n| n.parse::<usize>()) {
                    None => None,
                    Some(Ok(n)) if n >= 1 => Some(n),
                    Some(_) => return (false, "invalid move number".to_string()),
                };
                let text = match std::fs::read_to_string(path) {
                    Ok(text) => text,
                    Err(err) => {
                        info!(%path, %err, "cannot read SGF file");
                        return (false, "cannot load file".to_string());
                    }
                };
                match self.load_puzzle(&text, move_number) {
                    Ok(()) => (true, String::new()),
                    Err(message) => (false, message),
                }
            }

            "puzzle_solution" => match &self.puzzle {
                Some(puzzle) => {
                    let lines: Vec<String> = puzzle
                        .solution_moves
                        .iter()
                        .map(|mv| {
                            let vertex = str_vertex(Vertex::Point((mv.row, mv.col)), puzzle.size());
                            format!("{} {vertex}", mv.color.letter())
                        })
                        .collect();
                    (true, lines.join("\n"))
                }
                None => (false, "no puzzle loaded".to_string()),
            },

            _ => (false, format!("unknown command: {command}")),
        }
    }

    fn size(&self) -> usize {
        self.game.current_board().size()
    }

    /// Start over on an empty board.
    fn reset(&mut self, size: usize) -> (bool, String) {
        match Game::new(size) {
            Ok(game) => {
                self.game = game;
                self.puzzle = None;
                (true, String::new())
            }
            Err(_) => (false, "unacceptable size".to_string()),
        }
    }

    fn play(&mut self, args: &[&str]) -> (bool, String) {
        let [color, vertex, ..] = args else {
            return (false, "missing arguments".to_string());
        };
        let Some(color) = parse_color(color) else {
            return (false, "invalid color".to_string());
        };
        let Some(vertex) = parse_vertex(vertex, self.size()) else {
            return (false, "invalid vertex".to_string());
        };

        let to_move = self.game.current_player();
        if color != to_move {
            return (false, format!("illegal move: {to_move} to play"));
        }

        match vertex {
            Vertex::Pass => {
                self.game.pass();
                (true, String::new())
            }
            Vertex::Point((row, col)) => match self.game.place_move(row, col) {
                Ok(captured) => {
                    debug!(%color, row, col, captured, "move played");
                    (true, String::new())
                }
                Err(err) => {
                    info!(%color, row, col, %err, "move rejected");
                    (false, err.to_string().to_lowercase())
                }
            },
        }
    }

    /// Load a puzzle from SGF text.
    ///
    /// With `move_number = Some(n)`, the position before move `n` of the
    /// solution is set up; with `None`, the whole solution is played.
    pub fn load_puzzle(&mut self, text: &str, move_number: Option<usize>) -> Result<(), String> {
        let puzzle = decode(text).map_err(|err| err.to_string())?;
        if puzzle.size() > MAX_GTP_SIZE {
            return Err("board size not supported".to_string());
        }

        let mut game = Game::from_puzzle(&puzzle);
        let count = move_number.map_or(usize::MAX, |n| n - 1);
        game.replay(&puzzle, count)
            .map_err(|err| format!("invalid solution: {err}"))?;

        info!(
            title = %puzzle.title,
            size = puzzle.size(),
            solution = puzzle.solution_moves.len(),
            "puzzle loaded"
        );
        self.game = game;
        self.puzzle = Some(puzzle);
        Ok(())
    }
}

fn parse_color(s: &str) -> Option<Color> {
    match s.to_lowercase().as_str() {
        "b" | "black" => Some(Color::Black),
        "w" | "white" => Some(Color::White),
        _ => None,
    }
}

/// Render a board with GTP coordinates, row 1 at the bottom.
pub fn render_board(board: &Board) -> String {
    let size = board.size();
    let letters: String = GTP_COLUMNS
        .iter()
        .take(size)
        .map(|&c| format!("{} ", c as char))
        .collect();
    let header = format!("   {}", letters.trim_end());

    let mut out = String::new();
    out.push_str(&header);
    out.push('\n');
    for (row, line) in board.to_string().lines().enumerate() {
        let number = size - row;
        out.push_str(&format!("{number:>2} {} {number}\n", line.trim_end()));
    }
    out.push_str(&header);
    out
}
