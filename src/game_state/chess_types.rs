//! Core value types shared across the board model, move generation, and
//! search: colors, piece kinds, squares, and castling-rights bits.

pub use crate::game_state::game_state::GameState;
pub use crate::game_state::undo_state::UndoState;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }
}

/// Piece kind (color is carried separately on [`Piece`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }
}

/// A colored piece occupying a square. Empty squares are `Option::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }
}

/// Board square as a `(column, row)` pair, each in `0..=7`.
///
/// `(0, 0)` is the top-left of the stored grid, the corner where the dark
/// queenside rook starts. Rows grow toward the light side's back rank.
pub type Square = (i8, i8);

/// Offsets a square by `(d_col, d_row)`, returning `None` when the result
/// falls off the board. All generation arithmetic goes through this helper so
/// an out-of-bounds coordinate is never used as an array index.
#[inline]
pub fn offset_square(sq: Square, d_col: i8, d_row: i8) -> Option<Square> {
    let col = sq.0 + d_col;
    let row = sq.1 + d_row;
    if (0..8).contains(&col) && (0..8).contains(&row) {
        Some((col, row))
    } else {
        None
    }
}

/// Compact castling rights bitmask.
pub const CASTLE_LIGHT_KINGSIDE: CastlingRights = 1 << 0;
pub const CASTLE_LIGHT_QUEENSIDE: CastlingRights = 1 << 1;
pub const CASTLE_DARK_KINGSIDE: CastlingRights = 1 << 2;
pub const CASTLE_DARK_QUEENSIDE: CastlingRights = 1 << 3;
pub const CASTLE_ALL: CastlingRights =
    CASTLE_LIGHT_KINGSIDE | CASTLE_LIGHT_QUEENSIDE | CASTLE_DARK_KINGSIDE | CASTLE_DARK_QUEENSIDE;
pub type CastlingRights = u8;
