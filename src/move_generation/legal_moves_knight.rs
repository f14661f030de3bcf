//! Knight pseudo-legal generation from a fixed offset table.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::generate_offset_moves;
use crate::moves::move_descriptions::MoveDescription;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

#[inline]
pub fn generate_knight_moves(game: &GameState, from: Square, out: &mut Vec<MoveDescription>) {
    generate_offset_moves(game, from, &KNIGHT_OFFSETS, out);
}
