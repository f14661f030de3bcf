//! Pawn pseudo-legal generation: single and double pushes, diagonal
//! captures, en passant, and promotion flagging.

use crate::game_state::chess_rules::{pawn_direction, pawn_start_row, promotion_row};
use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::MoveDescription;

pub fn generate_pawn_moves(game: &GameState, from: Square, out: &mut Vec<MoveDescription>) {
    let pawn = game
        .piece_at(from)
        .expect("pawn move origin must hold a piece");
    let color = pawn.color;
    let dir = pawn_direction(color);

    // Forward pushes. The double push requires both intervening squares
    // empty and the pawn still on its starting row.
    if let Some(one_ahead) = offset_square(from, 0, dir) {
        if game.piece_at(one_ahead).is_none() {
            push_advance(game, from, one_ahead, color, out);

            if from.1 == pawn_start_row(color) {
                if let Some(two_ahead) = offset_square(from, 0, 2 * dir) {
                    if game.piece_at(two_ahead).is_none() {
                        out.push(MoveDescription::new(game, from, two_ahead));
                    }
                }
            }
        }
    }

    // Diagonal captures, including en passant onto the vacated square.
    for d_col in [-1, 1] {
        let Some(dest) = offset_square(from, d_col, dir) else {
            continue;
        };
        match game.piece_at(dest) {
            Some(occupant) if occupant.color != color => {
                push_advance(game, from, dest, color, out);
            }
            None => {
                if game.en_passant_square == Some(dest) {
                    let beside = (dest.0, from.1);
                    if let Some(neighbor) = game.piece_at(beside) {
                        if neighbor.color != color && neighbor.kind == PieceKind::Pawn {
                            out.push(MoveDescription::new_en_passant(game, from, dest, neighbor));
                        }
                    }
                }
            }
            _ => {}
        }
    }
}

fn push_advance(
    game: &GameState,
    from: Square,
    to: Square,
    color: Color,
    out: &mut Vec<MoveDescription>,
) {
    if to.1 == promotion_row(color) {
        out.push(MoveDescription::new_promotion(game, from, to));
    } else {
        out.push(MoveDescription::new(game, from, to));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_row_pawn_has_single_and_double_push() {
        let game = GameState::new_game();
        let mut moves = Vec::new();
        generate_pawn_moves(&game, (4, 6), &mut moves);
        assert_eq!(moves.len(), 2);
        assert!(moves.iter().any(|mv| mv.to == (4, 5)));
        assert!(moves.iter().any(|mv| mv.to == (4, 4)));
    }

    #[test]
    fn blocked_pawn_cannot_push() {
        let game = GameState::from_fen("4k3/8/8/8/4p3/4P3/8/4K3 w - - 0 1")
            .expect("valid FEN should parse");
        let mut moves = Vec::new();
        generate_pawn_moves(&game, (4, 5), &mut moves);
        assert!(moves.is_empty());
    }

    #[test]
    fn promotion_push_is_flagged() {
        let game = GameState::from_fen("8/4P3/8/8/8/8/8/k3K3 w - - 0 1")
            .expect("valid FEN should parse");
        let mut moves = Vec::new();
        generate_pawn_moves(&game, (4, 1), &mut moves);
        assert_eq!(moves.len(), 1);
        assert!(moves[0].is_promotion);
    }

    #[test]
    fn en_passant_capture_targets_the_skipped_square() {
        let game = GameState::from_fen("4k3/8/8/3Pp3/8/8/8/4K3 w - e6 0 1")
            .expect("valid FEN should parse");
        let mut moves = Vec::new();
        generate_pawn_moves(&game, (3, 3), &mut moves);
        let ep = moves
            .iter()
            .find(|mv| mv.is_en_passant)
            .expect("en passant should be generated");
        assert_eq!(ep.to, (4, 2));
        assert_eq!(
            ep.piece_captured,
            Some(Piece::new(Color::Dark, PieceKind::Pawn))
        );
    }
}
