//! FEN-to-GameState parser.
//!
//! Builds a fully-populated state from a Forsyth-Edwards Notation string,
//! including the king-square caches. Clock fields are validated but not
//! stored; the engine core does not model move clocks.

use crate::game_state::chess_types::*;
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> Result<GameState, String> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or("Missing board layout in FEN")?;
    let side_part = parts.next().ok_or("Missing side-to-move in FEN")?;
    let castling_part = parts.next().ok_or("Missing castling rights in FEN")?;
    let en_passant_part = parts.next().ok_or("Missing en-passant square in FEN")?;
    let halfmove_part = parts.next().ok_or("Missing halfmove clock in FEN")?;
    let fullmove_part = parts.next().ok_or("Missing fullmove number in FEN")?;

    if parts.next().is_some() {
        return Err("FEN has extra trailing fields".to_owned());
    }

    let mut game_state = GameState::new_empty();

    parse_board(board_part, &mut game_state)?;
    game_state.side_to_move = parse_side_to_move(side_part)?;
    game_state.castling_rights = parse_castling_rights(castling_part)?;
    game_state.en_passant_square = parse_en_passant_square(en_passant_part)?;

    halfmove_part
        .parse::<u16>()
        .map_err(|_| format!("Invalid halfmove clock: {halfmove_part}"))?;
    fullmove_part
        .parse::<u16>()
        .map_err(|_| format!("Invalid fullmove number: {fullmove_part}"))?;

    cache_king_squares(&mut game_state)?;

    Ok(game_state)
}

fn parse_board(board_part: &str, game_state: &mut GameState) -> Result<(), String> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err("Board layout must contain 8 ranks".to_owned());
    }

    // FEN lists rank 8 first, which is row 0 of the stored grid.
    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(format!("Invalid empty-square count '{ch}'"));
                }
                col += empty_count as usize;
                continue;
            }

            let piece = piece_from_fen_char(ch)
                .ok_or_else(|| format!("Invalid piece character '{ch}' in board layout"))?;

            if col >= 8 {
                return Err("Board rank has too many files".to_owned());
            }
            game_state.board[row][col] = Some(piece);
            col += 1;
        }

        if col != 8 {
            return Err(format!("Board rank {} does not fill 8 files", 8 - row));
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> Result<Color, String> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        other => Err(format!("Invalid side-to-move field: {other}")),
    }
}

fn parse_castling_rights(castling_part: &str) -> Result<CastlingRights, String> {
    if castling_part == "-" {
        return Ok(0);
    }

    let mut rights: CastlingRights = 0;
    for ch in castling_part.chars() {
        let bit = match ch {
            'K' => CASTLE_LIGHT_KINGSIDE,
            'Q' => CASTLE_LIGHT_QUEENSIDE,
            'k' => CASTLE_DARK_KINGSIDE,
            'q' => CASTLE_DARK_QUEENSIDE,
            other => return Err(format!("Invalid castling-rights character '{other}'")),
        };
        if rights & bit != 0 {
            return Err(format!("Duplicate castling-rights character '{ch}'"));
        }
        rights |= bit;
    }
    Ok(rights)
}

fn parse_en_passant_square(en_passant_part: &str) -> Result<Option<Square>, String> {
    if en_passant_part == "-" {
        return Ok(None);
    }
    let sq = algebraic_to_square(en_passant_part)?;
    // Only the squares behind a double pawn push (ranks 3 and 6) can be an
    // en-passant target.
    if sq.1 != 2 && sq.1 != 5 {
        return Err(format!("Invalid en-passant target square: {en_passant_part}"));
    }
    Ok(Some(sq))
}

fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::Light
    } else {
        Color::Dark
    };
    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };
    Some(Piece::new(color, kind))
}

/// Locates each king and fills the cache; exactly one king per side is a
/// structural precondition for the whole engine.
fn cache_king_squares(game_state: &mut GameState) -> Result<(), String> {
    for color in [Color::Light, Color::Dark] {
        let mut found = None;
        for row in 0..8i8 {
            for col in 0..8i8 {
                let sq = (col, row);
                if game_state.piece_at(sq) == Some(Piece::new(color, PieceKind::King)) {
                    if found.is_some() {
                        return Err("Board has more than one king of a color".to_owned());
                    }
                    found = Some(sq);
                }
            }
        }
        let king_sq = found.ok_or("Board is missing a king")?;
        game_state.king_squares[color.index()] = king_sq;
    }
    Ok(())
}
