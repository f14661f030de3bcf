//! Queen pseudo-legal generation: the union of rook and bishop rays.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::generate_sliding_moves;
use crate::moves::move_descriptions::MoveDescription;

pub const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
];

#[inline]
pub fn generate_queen_moves(game: &GameState, from: Square, out: &mut Vec<MoveDescription>) {
    generate_sliding_moves(game, from, &QUEEN_DIRECTIONS, out);
}
