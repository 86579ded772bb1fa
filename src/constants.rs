//! Constants for board dimensions, display glyphs and protocol limits.
//!
//! The board size is a run-time value carried by every [`Board`](crate::board::Board);
//! the constants here only provide defaults for the front ends.

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size used when nothing else is specified (including SGF files without `SZ`).
pub const DEFAULT_SIZE: usize = 19;

/// Largest board that GTP vertices can address (`A`..`Z` without `I`).
pub const MAX_GTP_SIZE: usize = 25;

/// Column letters used by GTP vertices. `I` is skipped to avoid confusion with `J`.
pub const GTP_COLUMNS: &[u8; MAX_GTP_SIZE] = b"ABCDEFGHJKLMNOPQRSTUVWXYZ";

// =============================================================================
// SGF
// =============================================================================

/// Title given to puzzles whose root node carries no `GN` property.
pub const DEFAULT_PUZZLE_TITLE: &str = "Untitled Puzzle";

/// Largest board SGF point letters can address (`a`..`z`).
pub const MAX_SGF_SIZE: usize = 26;

// =============================================================================
// Playout
// =============================================================================

/// Default number of random moves played by the demo.
pub const DEMO_MOVES: usize = 60;

/// Default seed for the demo playout.
pub const DEMO_SEED: u64 = 42;

// =============================================================================
// Display Glyphs
// =============================================================================

/// Black stone.
pub const STONE_BLACK: char = 'X';

/// White stone.
pub const STONE_WHITE: char = 'O';

/// Empty point.
pub const EMPTY: char = '.';
