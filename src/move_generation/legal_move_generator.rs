//! Full legal move generation pipeline.
//!
//! Orchestrates piece-wise pseudo-legal generation, provisionally applies
//! each candidate, filters moves that leave the mover's own king in check,
//! and derives the checkmate/stalemate flags for the position.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{make_move, unmake_move};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::move_descriptions::MoveDescription;

/// Geometric moves for the side to move, ignoring whether the mover's own
/// king ends up in check. `include_castling` is off for attack probes.
pub fn generate_pseudo_legal_moves(
    game: &mut GameState,
    include_castling: bool,
    out: &mut Vec<MoveDescription>,
) {
    for row in 0..8i8 {
        for col in 0..8i8 {
            let sq = (col, row);
            let Some(piece) = game.piece_at(sq) else {
                continue;
            };
            if piece.color != game.side_to_move {
                continue;
            }

            match piece.kind {
                PieceKind::Pawn => generate_pawn_moves(game, sq, out),
                PieceKind::Knight => generate_knight_moves(game, sq, out),
                PieceKind::Bishop => generate_bishop_moves(game, sq, out),
                PieceKind::Rook => generate_rook_moves(game, sq, out),
                PieceKind::Queen => generate_queen_moves(game, sq, out),
                PieceKind::King => generate_king_moves(game, sq, include_castling, out),
            }
        }
    }
}

/// The legal move set for the side to move.
///
/// Every candidate is applied and reverted once, which makes this the
/// dominant cost of generation. As a side effect the position's `checkmate`
/// and `stalemate` flags are set: an empty result means checkmate when the
/// mover started in check and stalemate otherwise.
pub fn generate_legal_moves(game: &mut GameState) -> Vec<MoveDescription> {
    let mover = game.side_to_move;
    let was_in_check = is_king_in_check(game, mover);

    let mut pseudo = Vec::<MoveDescription>::with_capacity(64);
    generate_pseudo_legal_moves(game, true, &mut pseudo);

    let mut legal = Vec::<MoveDescription>::with_capacity(pseudo.len());
    for mv in pseudo {
        make_move(game, &mv);
        if !is_king_in_check(game, mover) {
            legal.push(mv);
        }
        unmake_move(game);
    }

    game.checkmate = legal.is_empty() && was_in_check;
    game.stalemate = legal.is_empty() && !was_in_check;

    legal
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_position_has_twenty_legal_moves() {
        let mut game = GameState::new_game();
        let moves = generate_legal_moves(&mut game);
        assert_eq!(moves.len(), 20);
        assert!(!game.checkmate);
        assert!(!game.stalemate);
    }

    #[test]
    fn pinned_piece_may_not_expose_the_king() {
        // The e4 knight is pinned against e1 by the e8 rook.
        let mut game = GameState::from_fen("4r1k1/8/8/8/4N3/8/8/4K3 w - - 0 1")
            .expect("valid FEN should parse");
        let moves = generate_legal_moves(&mut game);
        assert!(!moves.iter().any(|mv| mv.piece_moved.kind == PieceKind::Knight));
    }

    #[test]
    fn ladder_mate_sets_checkmate() {
        let mut game = GameState::from_fen("6k1/1R6/8/8/8/8/R7/6K1 w - - 0 1")
            .expect("valid FEN should parse");
        let moves = generate_legal_moves(&mut game);
        let mv = *moves
            .iter()
            .find(|mv| mv.from == (0, 6) && mv.to == (0, 0))
            .expect("Ra8 should be legal");
        crate::move_generation::legal_move_apply::make_move(&mut game, &mv);

        let replies = generate_legal_moves(&mut game);
        assert!(replies.is_empty());
        assert!(game.checkmate);
        assert!(!game.stalemate);
    }

    #[test]
    fn cornered_king_with_no_moves_is_stalemate() {
        let mut game = GameState::from_fen("7k/5Q2/8/8/8/8/8/4K3 b - - 0 1")
            .expect("valid FEN should parse");
        let moves = generate_legal_moves(&mut game);
        assert!(moves.is_empty());
        assert!(game.stalemate);
        assert!(!game.checkmate);
    }

    #[test]
    fn generation_leaves_the_position_untouched() {
        let mut game = GameState::new_game();
        let fen_before = game.get_fen();
        let _ = generate_legal_moves(&mut game);
        assert_eq!(game.get_fen(), fen_before);
        assert!(game.undo_stack.is_empty());
    }
}
