//! Rook pseudo-legal generation: four orthogonal ray-casts.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::generate_sliding_moves;
use crate::moves::move_descriptions::MoveDescription;

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

#[inline]
pub fn generate_rook_moves(game: &GameState, from: Square, out: &mut Vec<MoveDescription>) {
    generate_sliding_moves(game, from, &ROOK_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_board_rook_reaches_fourteen_squares() {
        let game = GameState::from_fen("4k3/8/8/8/3R4/8/8/4K3 w - - 0 1")
            .expect("valid FEN should parse");
        let mut moves = Vec::new();
        generate_rook_moves(&game, (3, 4), &mut moves);
        assert_eq!(moves.len(), 14);
    }

    #[test]
    fn friendly_blocker_is_excluded() {
        let game = GameState::new_game();
        let mut moves = Vec::new();
        // Corner rook is boxed in by its own pawn and knight.
        generate_rook_moves(&game, (0, 7), &mut moves);
        assert!(moves.is_empty());
    }
}
