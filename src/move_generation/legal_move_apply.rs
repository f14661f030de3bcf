//! In-place move application and reversal.
//!
//! `make_move` / `unmake_move` are the one mutation path through the board.
//! Search walks the tree by applying and reverting on a single shared
//! `GameState`, so any asymmetry between the two functions corrupts every
//! branch explored afterwards; the round-trip tests below cover each move
//! kind for exactly that reason.
//!
//! Moves handed to `make_move` must come from `generate_legal_moves`;
//! applying an arbitrary move is undefined board corruption by contract.

use crate::game_state::chess_rules::{
    both_rights, kingside_right, kingside_rook_corner, queenside_right, queenside_rook_corner,
};
use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::MoveDescription;

pub fn make_move(game: &mut GameState, mv: &MoveDescription) {
    let mover = mv.piece_moved.color;

    game.undo_stack.push(UndoState {
        mv: *mv,
        prev_castling_rights: game.castling_rights,
        prev_en_passant_square: game.en_passant_square,
    });

    // Board surgery. A plain capture is overwritten implicitly; the
    // en-passant victim never occupied the destination square.
    game.set_piece_at(mv.from, None);
    game.set_piece_at(mv.to, Some(mv.piece_moved));

    if mv.is_en_passant {
        game.set_piece_at((mv.to.0, mv.from.1), None);
    }

    if mv.is_promotion {
        // Auto-queen; underpromotion is not modeled.
        game.set_piece_at(mv.to, Some(Piece::new(mover, PieceKind::Queen)));
    }

    if mv.is_castle {
        let (rook_from, rook_to) = castle_rook_path(mv);
        let rook = game.piece_at(rook_from);
        game.set_piece_at(rook_from, None);
        game.set_piece_at(rook_to, rook);
    }

    if mv.piece_moved.kind == PieceKind::King {
        game.king_squares[mover.index()] = mv.to;
    }

    // The en-passant window opens only on a pawn double push and lasts for
    // exactly the next ply.
    game.en_passant_square = if mv.piece_moved.kind == PieceKind::Pawn
        && (mv.from.1 - mv.to.1).abs() == 2
    {
        Some((mv.from.0, (mv.from.1 + mv.to.1) / 2))
    } else {
        None
    };

    revoke_castling_rights(game, mv);

    game.side_to_move = game.side_to_move.opposite();
}

/// Reverts the most recent move. No-op returning `false` when the history is
/// empty; callers must not revert past the initial position.
pub fn unmake_move(game: &mut GameState) -> bool {
    let Some(undo) = game.undo_stack.pop() else {
        return false;
    };
    let mv = undo.mv;
    let mover = mv.piece_moved.color;

    game.set_piece_at(mv.from, Some(mv.piece_moved));
    game.set_piece_at(mv.to, None);

    if mv.is_en_passant {
        // The victim pawn returns beside the origin, not to the destination.
        game.set_piece_at((mv.to.0, mv.from.1), mv.piece_captured);
    } else {
        game.set_piece_at(mv.to, mv.piece_captured);
    }

    if mv.is_castle {
        let (rook_from, rook_to) = castle_rook_path(&mv);
        let rook = game.piece_at(rook_to);
        game.set_piece_at(rook_to, None);
        game.set_piece_at(rook_from, rook);
    }

    if mv.piece_moved.kind == PieceKind::King {
        game.king_squares[mover.index()] = mv.from;
    }

    game.castling_rights = undo.prev_castling_rights;
    game.en_passant_square = undo.prev_en_passant_square;
    game.side_to_move = game.side_to_move.opposite();

    // Re-derived by the next legal-move query, never persisted through revert.
    game.checkmate = false;
    game.stalemate = false;

    true
}

/// Rook relocation for a castle move: corner to the square adjacent to the
/// king's destination, on the side castled toward.
fn castle_rook_path(mv: &MoveDescription) -> (Square, Square) {
    let row = mv.to.1;
    if mv.to.0 > mv.from.0 {
        ((7, row), (mv.to.0 - 1, row))
    } else {
        ((0, row), (mv.to.0 + 1, row))
    }
}

fn revoke_castling_rights(game: &mut GameState, mv: &MoveDescription) {
    let mover = mv.piece_moved.color;
    let opponent = mover.opposite();

    match mv.piece_moved.kind {
        PieceKind::King => game.castling_rights &= !both_rights(mover),
        PieceKind::Rook => {
            if mv.from == kingside_rook_corner(mover) {
                game.castling_rights &= !kingside_right(mover);
            } else if mv.from == queenside_rook_corner(mover) {
                game.castling_rights &= !queenside_right(mover);
            }
        }
        _ => {}
    }

    // Capturing a rook sitting on its original corner kills that corner's
    // right for the opponent.
    if mv.to == kingside_rook_corner(opponent) {
        game.castling_rights &= !kingside_right(opponent);
    } else if mv.to == queenside_rook_corner(opponent) {
        game.castling_rights &= !queenside_right(opponent);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_generator::generate_legal_moves;

    fn snapshot(game: &GameState) -> (String, [Square; 2], usize) {
        (game.get_fen(), game.king_squares, game.undo_stack.len())
    }

    fn assert_round_trip(fen: &str, pick: impl Fn(&MoveDescription) -> bool) {
        let mut game = GameState::from_fen(fen).expect("valid FEN should parse");
        let before = snapshot(&game);

        let moves = generate_legal_moves(&mut game);
        let mv = *moves
            .iter()
            .find(|mv| pick(mv))
            .expect("expected move should be legal");

        make_move(&mut game, &mv);
        assert!(unmake_move(&mut game));
        assert_eq!(snapshot(&game), before);
    }

    #[test]
    fn quiet_move_round_trips() {
        assert_round_trip(
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            |mv| mv.from == (6, 7),
        );
    }

    #[test]
    fn capture_round_trips() {
        assert_round_trip("4k3/8/8/3p4/4P3/8/8/4K3 w - - 0 1", |mv| {
            mv.piece_captured.is_some()
        });
    }

    #[test]
    fn en_passant_round_trips() {
        assert_round_trip("4k3/8/8/3Pp3/8/8/8/4K3 w - e6 0 1", |mv| mv.is_en_passant);
    }

    #[test]
    fn promotion_round_trips() {
        assert_round_trip("8/4P3/8/8/8/8/8/k3K3 w - - 0 1", |mv| mv.is_promotion);
    }

    #[test]
    fn kingside_castle_round_trips() {
        assert_round_trip("4k3/8/8/8/8/8/8/R3K2R w KQ - 0 1", |mv| {
            mv.is_castle && mv.to == (6, 7)
        });
    }

    #[test]
    fn queenside_castle_round_trips() {
        assert_round_trip("4k3/8/8/8/8/8/8/R3K2R w KQ - 0 1", |mv| {
            mv.is_castle && mv.to == (2, 7)
        });
    }

    #[test]
    fn promotion_places_a_queen() {
        let mut game = GameState::from_fen("8/4P3/8/8/8/8/8/k3K3 w - - 0 1")
            .expect("valid FEN should parse");
        let moves = generate_legal_moves(&mut game);
        let mv = *moves
            .iter()
            .find(|mv| mv.is_promotion)
            .expect("promotion should be legal");
        make_move(&mut game, &mv);
        assert_eq!(
            game.piece_at((4, 0)),
            Some(Piece::new(Color::Light, PieceKind::Queen))
        );
    }

    #[test]
    fn castle_relocates_the_rook() {
        let mut game = GameState::from_fen("4k3/8/8/8/8/8/8/R3K2R w KQ - 0 1")
            .expect("valid FEN should parse");
        let moves = generate_legal_moves(&mut game);
        let mv = *moves
            .iter()
            .find(|mv| mv.is_castle && mv.to == (6, 7))
            .expect("kingside castle should be legal");
        make_move(&mut game, &mv);
        assert_eq!(
            game.piece_at((5, 7)),
            Some(Piece::new(Color::Light, PieceKind::Rook))
        );
        assert_eq!(game.piece_at((7, 7)), None);
        assert_eq!(game.king_square(Color::Light), (6, 7));
    }

    #[test]
    fn double_push_opens_the_en_passant_window() {
        let mut game = GameState::new_game();
        let moves = generate_legal_moves(&mut game);
        let mv = *moves
            .iter()
            .find(|mv| mv.from == (4, 6) && mv.to == (4, 4))
            .expect("double push should be legal");
        make_move(&mut game, &mv);
        assert_eq!(game.en_passant_square, Some((4, 5)));

        // Any non-qualifying reply closes the window.
        let replies = generate_legal_moves(&mut game);
        let reply = *replies
            .iter()
            .find(|mv| mv.piece_moved.kind == PieceKind::Knight)
            .expect("knight reply should be legal");
        make_move(&mut game, &reply);
        assert_eq!(game.en_passant_square, None);
    }

    #[test]
    fn rook_moves_and_rook_captures_revoke_rights() {
        let mut game = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1")
            .expect("valid FEN should parse");
        let moves = generate_legal_moves(&mut game);

        // a1 rook captures a8 rook: light queenside and dark queenside both die.
        let mv = *moves
            .iter()
            .find(|mv| mv.from == (0, 7) && mv.to == (0, 0))
            .expect("rook capture should be legal");
        make_move(&mut game, &mv);
        assert_eq!(game.castling_rights & CASTLE_LIGHT_QUEENSIDE, 0);
        assert_eq!(game.castling_rights & CASTLE_DARK_QUEENSIDE, 0);
        assert_ne!(game.castling_rights & CASTLE_LIGHT_KINGSIDE, 0);
        assert_ne!(game.castling_rights & CASTLE_DARK_KINGSIDE, 0);

        // Revert restores the full rights set.
        assert!(unmake_move(&mut game));
        assert_eq!(game.castling_rights, CASTLE_ALL);
    }

    #[test]
    fn king_move_revokes_both_rights() {
        let mut game = GameState::from_fen("4k3/8/8/8/8/8/8/R3K2R w KQ - 0 1")
            .expect("valid FEN should parse");
        let moves = generate_legal_moves(&mut game);
        let mv = *moves
            .iter()
            .find(|mv| mv.piece_moved.kind == PieceKind::King && !mv.is_castle)
            .expect("king step should be legal");
        make_move(&mut game, &mv);
        assert_eq!(game.castling_rights, 0);
    }

    #[test]
    fn unmake_on_empty_history_is_a_no_op() {
        let mut game = GameState::new_game();
        let before = game.get_fen();
        assert!(!unmake_move(&mut game));
        assert_eq!(game.get_fen(), before);
    }
}
