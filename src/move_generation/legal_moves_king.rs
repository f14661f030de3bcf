//! King pseudo-legal generation: one-step offsets plus castling.
//!
//! Castling is generated only when `include_castling` is set; attack scans
//! pass `false` so the attacked-square probe never recurses into itself.

use crate::game_state::chess_rules::{
    back_rank_row, king_start_square, kingside_right, queenside_right,
};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::square_attacked_by;
use crate::move_generation::legal_move_shared::generate_offset_moves;
use crate::moves::move_descriptions::MoveDescription;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub fn generate_king_moves(
    game: &mut GameState,
    from: Square,
    include_castling: bool,
    out: &mut Vec<MoveDescription>,
) {
    generate_offset_moves(game, from, &KING_OFFSETS, out);

    if include_castling {
        generate_castle_moves(game, from, out);
    }
}

/// Kingside and queenside castling. Each requires the corresponding right,
/// every square between king and rook empty, and the king's current square
/// and transit square unattacked (so castling out of check is impossible).
/// The landing square is vetted by the regular legality filter.
fn generate_castle_moves(game: &mut GameState, from: Square, out: &mut Vec<MoveDescription>) {
    let color = game
        .piece_at(from)
        .expect("castle origin must hold the king")
        .color;
    if from != king_start_square(color) {
        return;
    }
    let opponent = color.opposite();
    let row = back_rank_row(color);

    if game.castling_rights & kingside_right(color) != 0
        && game.piece_at((5, row)).is_none()
        && game.piece_at((6, row)).is_none()
        && !square_attacked_by(game, (4, row), opponent)
        && !square_attacked_by(game, (5, row), opponent)
    {
        out.push(MoveDescription::new_castle(game, from, (6, row)));
    }

    if game.castling_rights & queenside_right(color) != 0
        && game.piece_at((3, row)).is_none()
        && game.piece_at((2, row)).is_none()
        && game.piece_at((1, row)).is_none()
        && !square_attacked_by(game, (4, row), opponent)
        && !square_attacked_by(game, (3, row), opponent)
    {
        out.push(MoveDescription::new_castle(game, from, (2, row)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_castle_sides_generated_on_open_back_rank() {
        let mut game = GameState::from_fen("4k3/8/8/8/8/8/8/R3K2R w KQ - 0 1")
            .expect("valid FEN should parse");
        let mut moves = Vec::new();
        generate_king_moves(&mut game, (4, 7), true, &mut moves);
        let castles: Vec<_> = moves.iter().filter(|mv| mv.is_castle).collect();
        assert_eq!(castles.len(), 2);
        assert!(castles.iter().any(|mv| mv.to == (6, 7)));
        assert!(castles.iter().any(|mv| mv.to == (2, 7)));
    }

    #[test]
    fn castling_through_an_attacked_square_is_rejected() {
        // Dark rook on f8 covers f1, the kingside transit square.
        let mut game = GameState::from_fen("4kr2/8/8/8/8/8/8/R3K2R w KQ - 0 1")
            .expect("valid FEN should parse");
        let mut moves = Vec::new();
        generate_king_moves(&mut game, (4, 7), true, &mut moves);
        assert!(!moves.iter().any(|mv| mv.is_castle && mv.to == (6, 7)));
        assert!(moves.iter().any(|mv| mv.is_castle && mv.to == (2, 7)));
    }

    #[test]
    fn castling_out_of_check_is_rejected() {
        let mut game = GameState::from_fen("4k3/8/8/8/8/8/4r3/R3K2R w KQ - 0 1")
            .expect("valid FEN should parse");
        let mut moves = Vec::new();
        generate_king_moves(&mut game, (4, 7), true, &mut moves);
        assert!(!moves.iter().any(|mv| mv.is_castle));
    }

    #[test]
    fn missing_right_suppresses_that_side() {
        let mut game = GameState::from_fen("4k3/8/8/8/8/8/8/R3K2R w Q - 0 1")
            .expect("valid FEN should parse");
        let mut moves = Vec::new();
        generate_king_moves(&mut game, (4, 7), true, &mut moves);
        let castles: Vec<_> = moves.iter().filter(|mv| mv.is_castle).collect();
        assert_eq!(castles.len(), 1);
        assert_eq!(castles[0].to, (2, 7));
    }
}
