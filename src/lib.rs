//! learngo: a Go rules engine with SGF puzzle loading.
//!
//! This crate tracks Go positions as immutable board snapshots, enforces
//! the rules of play (occupancy, capture, suicide) and keeps a navigable
//! move history. Puzzles can be loaded from SGF game records.
//!
//! ## Modules
//!
//! - [`constants`] - Default sizes, protocol limits and display glyphs
//! - [`board`] - Board snapshots, colors and points
//! - [`group`] - Connected groups and their liberties
//! - [`position`] - Move resolution (captures, suicide) and GTP vertices
//! - [`history`] - Board history with undo/redo
//! - [`game`] - Game state: history plus player to move
//! - [`sgf`] - SGF puzzle decoding
//! - [`playout`] - Random self-play
//! - [`gtp`] - Go Text Protocol front end
//! - [`error`] - Error types
//!
//! ## Example
//!
//! ```
//! use learngo::board::{Color, Intersection};
//! use learngo::game::Game;
//!
//! // Create a new game
//! let mut game = Game::new(19).unwrap();
//!
//! // Play a couple of moves
//! game.place_move(3, 3).unwrap();
//! game.place_move(3, 4).unwrap();
//!
//! assert_eq!(game.current_board().get(3, 4), Ok(Intersection::White));
//! assert_eq!(game.current_player(), Color::Black);
//!
//! // Take the last move back
//! game.undo();
//! assert_eq!(game.current_player(), Color::White);
//! ```

pub mod board;
pub mod constants;
pub mod error;
pub mod game;
pub mod group;
pub mod gtp;
pub mod history;
pub mod playout;
pub mod position;
pub mod sgf;

#[cfg(test)]
mod arbitrary;
