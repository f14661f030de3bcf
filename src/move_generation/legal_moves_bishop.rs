//! Bishop pseudo-legal generation: four diagonal ray-casts.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::generate_sliding_moves;
use crate::moves::move_descriptions::MoveDescription;

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

#[inline]
pub fn generate_bishop_moves(game: &GameState, from: Square, out: &mut Vec<MoveDescription>) {
    generate_sliding_moves(game, from, &BISHOP_DIRECTIONS, out);
}
