//! Random self-play.
//!
//! A playout plays uniformly random legal moves for whichever side is to
//! move. It is used by the demo and to exercise the capture rules on
//! positions nobody would set up by hand.

use fastrand::Rng;

use crate::game::Game;
use crate::position::legal_moves;

/// Summary of a finished playout.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlayoutStats {
    /// Stones placed.
    pub moves: usize,
    pub passes: usize,
    /// Total stones captured by both sides.
    pub captures: usize,
}

/// Play up to `max_moves` random turns on `game`.
///
/// A side with no legal move passes; the playout stops after two consecutive passes.
pub fn random_game(game: &mut Game, max_moves: usize, rng: &mut Rng) -> PlayoutStats {
    let mut stats = PlayoutStats::default();
    let mut consecutive_passes = 0;

    for _ in 0..max_moves {
        if consecutive_passes >= 2 {
            break;
        }
        let candidates = legal_moves(game.current_board(), game.current_player());
        if candidates.is_empty() {
            game.pass();
            stats.passes += 1;
            consecutive_passes += 1;
            continue;
        }

        let (row, col) = candidates[rng.usize(..candidates.len())];
        // Every candidate was just checked, so this cannot fail.
        if let Ok(captured) = game.place_move(row, col) {
            stats.moves += 1;
            stats.captures += captured;
            consecutive_passes = 0;
        }
    }
    stats
}
