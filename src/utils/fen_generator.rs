//! GameState-to-FEN serializer, the inverse of the parser.
//!
//! Clock fields are emitted as `0 1` since the engine core does not model
//! move clocks.

use crate::game_state::chess_types::*;
use crate::utils::algebraic::square_to_algebraic;

pub fn generate_fen(game_state: &GameState) -> String {
    let mut fen = String::new();

    for row in 0..8usize {
        let mut empty_run = 0u32;
        for col in 0..8usize {
            match game_state.board[row][col] {
                None => empty_run += 1,
                Some(piece) => {
                    if empty_run > 0 {
                        fen.push(char::from_digit(empty_run, 10).expect("run is at most 8"));
                        empty_run = 0;
                    }
                    fen.push(piece_to_fen_char(piece));
                }
            }
        }
        if empty_run > 0 {
            fen.push(char::from_digit(empty_run, 10).expect("run is at most 8"));
        }
        if row < 7 {
            fen.push('/');
        }
    }

    fen.push(' ');
    fen.push(match game_state.side_to_move {
        Color::Light => 'w',
        Color::Dark => 'b',
    });

    fen.push(' ');
    fen.push_str(&castling_rights_to_fen(game_state.castling_rights));

    fen.push(' ');
    match game_state.en_passant_square {
        Some(sq) => fen.push_str(&square_to_algebraic(sq)),
        None => fen.push('-'),
    }

    fen.push_str(" 0 1");
    fen
}

fn castling_rights_to_fen(rights: CastlingRights) -> String {
    if rights == 0 {
        return "-".to_owned();
    }

    let mut out = String::new();
    if rights & CASTLE_LIGHT_KINGSIDE != 0 {
        out.push('K');
    }
    if rights & CASTLE_LIGHT_QUEENSIDE != 0 {
        out.push('Q');
    }
    if rights & CASTLE_DARK_KINGSIDE != 0 {
        out.push('k');
    }
    if rights & CASTLE_DARK_QUEENSIDE != 0 {
        out.push('q');
    }
    out
}

fn piece_to_fen_char(piece: Piece) -> char {
    let lower = match piece.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };
    match piece.color {
        Color::Light => lower.to_ascii_uppercase(),
        Color::Dark => lower,
    }
}
