//! The move value type exchanged between generation, application, and search.
//!
//! A `MoveDescription` is immutable once constructed: origin and destination
//! squares, the piece moved, the piece captured (if any), and the three
//! special-move flags. Equality compares the packed origin/destination id
//! only, matching how a display layer looks a chosen move up against a
//! freshly generated legal-move list.

use crate::game_state::chess_types::*;

/// One ply, fully described.
#[derive(Debug, Clone, Copy)]
pub struct MoveDescription {
    pub from: Square,
    pub to: Square,
    pub piece_moved: Piece,
    pub piece_captured: Option<Piece>,
    pub is_promotion: bool,
    pub is_en_passant: bool,
    pub is_castle: bool,
}

impl MoveDescription {
    /// Quiet move or plain capture; captured piece read off the board.
    pub fn new(game: &GameState, from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            piece_moved: game
                .piece_at(from)
                .expect("move origin must hold a piece"),
            piece_captured: game.piece_at(to),
            is_promotion: false,
            is_en_passant: false,
            is_castle: false,
        }
    }

    pub fn new_promotion(game: &GameState, from: Square, to: Square) -> Self {
        Self {
            is_promotion: true,
            ..Self::new(game, from, to)
        }
    }

    /// En-passant capture. The captured pawn sits beside the origin, not on
    /// the destination square, so it is supplied explicitly.
    pub fn new_en_passant(game: &GameState, from: Square, to: Square, captured: Piece) -> Self {
        Self {
            piece_captured: Some(captured),
            is_en_passant: true,
            ..Self::new(game, from, to)
        }
    }

    pub fn new_castle(game: &GameState, from: Square, to: Square) -> Self {
        Self {
            is_castle: true,
            ..Self::new(game, from, to)
        }
    }

    /// Deterministic encoding of origin and destination: both squares packed
    /// into a `u16` (`from * 64 + to` over 0..64 square indices).
    #[inline]
    pub fn id(&self) -> u16 {
        let from = (self.from.1 as u16) * 8 + self.from.0 as u16;
        let to = (self.to.1 as u16) * 8 + self.to.0 as u16;
        from * 64 + to
    }
}

/// Two moves are equal iff their ids are equal. This deliberately ignores the
/// promotion/en-passant/castle flags (promotion is always to a queen), so a
/// structurally different move sharing origin and destination would collide.
/// See DESIGN.md for why this approximation is kept.
impl PartialEq for MoveDescription {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for MoveDescription {}
