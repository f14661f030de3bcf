//! Fixed rules data: the standard starting position and the board landmarks
//! used by castling-rights bookkeeping.

use crate::game_state::chess_types::*;

pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Row holding each side's back rank in the stored grid (row 0 is the top).
#[inline]
pub const fn back_rank_row(color: Color) -> i8 {
    match color {
        Color::Light => 7,
        Color::Dark => 0,
    }
}

/// Row a side's pawns start on, from which the double push is allowed.
#[inline]
pub const fn pawn_start_row(color: Color) -> i8 {
    match color {
        Color::Light => 6,
        Color::Dark => 1,
    }
}

/// Row a side's pawns promote on.
#[inline]
pub const fn promotion_row(color: Color) -> i8 {
    match color {
        Color::Light => 0,
        Color::Dark => 7,
    }
}

/// Row delta for a single pawn push. Light marches toward row 0.
#[inline]
pub const fn pawn_direction(color: Color) -> i8 {
    match color {
        Color::Light => -1,
        Color::Dark => 1,
    }
}

#[inline]
pub const fn king_start_square(color: Color) -> Square {
    (4, back_rank_row(color))
}

#[inline]
pub const fn kingside_rook_corner(color: Color) -> Square {
    (7, back_rank_row(color))
}

#[inline]
pub const fn queenside_rook_corner(color: Color) -> Square {
    (0, back_rank_row(color))
}

#[inline]
pub const fn kingside_right(color: Color) -> CastlingRights {
    match color {
        Color::Light => CASTLE_LIGHT_KINGSIDE,
        Color::Dark => CASTLE_DARK_KINGSIDE,
    }
}

#[inline]
pub const fn queenside_right(color: Color) -> CastlingRights {
    match color {
        Color::Light => CASTLE_LIGHT_QUEENSIDE,
        Color::Dark => CASTLE_DARK_QUEENSIDE,
    }
}

/// Both rights for one side, revoked together when that side's king moves.
#[inline]
pub const fn both_rights(color: Color) -> CastlingRights {
    kingside_right(color) | queenside_right(color)
}
