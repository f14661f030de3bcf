//! Pluggable board evaluation interfaces and baseline implementations.
//!
//! Search stays modular by delegating static position scoring to the
//! `BoardScorer` trait. Scores are Light-positive `f32` values: material plus
//! a small per-square positional term, with fixed sentinels for positions
//! already flagged as checkmate or stalemate by the legal-move query.

use crate::game_state::chess_types::*;

pub type Score = f32;

/// Sentinel for a delivered mate; signed against the side to move that has
/// been mated.
pub const CHECKMATE_SCORE: Score = 1000.0;
pub const STALEMATE_SCORE: Score = 0.0;

/// Weight applied to the per-square table values.
pub const POSITION_WEIGHT: Score = 0.1;

#[inline]
pub const fn piece_value(kind: PieceKind) -> Score {
    match kind {
        PieceKind::Pawn => 1.0,
        PieceKind::Knight => 3.0,
        PieceKind::Bishop => 3.0,
        PieceKind::Rook => 5.0,
        PieceKind::Queen => 9.0,
        PieceKind::King => 0.0,
    }
}

pub trait BoardScorer: Send + Sync {
    /// Static score of the position, positive favoring Light. Terminal flags
    /// (checkmate/stalemate) must already reflect the position, i.e. the
    /// caller ran a legal-move query beforehand.
    fn score(&self, game_state: &GameState) -> Score;
}

/// Returns the terminal sentinel when the position is already decided, or
/// `None` for a live position.
#[inline]
fn terminal_score(game_state: &GameState) -> Option<Score> {
    if game_state.checkmate {
        // The side to move has no reply and is in check; the previous mover
        // delivered mate.
        return Some(match game_state.side_to_move {
            Color::Light => -CHECKMATE_SCORE,
            Color::Dark => CHECKMATE_SCORE,
        });
    }
    if game_state.stalemate {
        return Some(STALEMATE_SCORE);
    }
    None
}

/// Material-only evaluation, the zero-knowledge baseline.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl BoardScorer for MaterialScorer {
    fn score(&self, game_state: &GameState) -> Score {
        if let Some(score) = terminal_score(game_state) {
            return score;
        }

        let mut score = 0.0;
        for row in game_state.board.iter() {
            for piece in row.iter().flatten() {
                match piece.color {
                    Color::Light => score += piece_value(piece.kind),
                    Color::Dark => score -= piece_value(piece.kind),
                }
            }
        }
        score
    }
}

/// Material plus per-square positional tables; the default scorer.
///
/// Tables reward centralization for knights and bishops, advancement and
/// central control for pawns, and sheltered back-rank squares for the king;
/// rooks and queens are flat. The static heuristic knows nothing about
/// mobility, king safety beyond the table, or pawn structure beyond the
/// table.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableScorer;

// Tables are indexed [row][col] from the dark side's perspective (row 0 is
// the dark back rank); pawn and king lookups mirror the row for Light.

const KNIGHT_TABLE: [[Score; 8]; 8] = [
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0],
    [1.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 1.0],
    [1.0, 2.0, 3.0, 3.0, 3.0, 3.0, 2.0, 1.0],
    [1.0, 2.0, 3.0, 4.0, 4.0, 3.0, 2.0, 1.0],
    [1.0, 2.0, 3.0, 4.0, 4.0, 3.0, 2.0, 1.0],
    [1.0, 2.0, 3.0, 3.0, 3.0, 3.0, 2.0, 1.0],
    [1.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 1.0],
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0],
];

const BISHOP_TABLE: [[Score; 8]; 8] = [
    [4.0, 3.0, 2.0, 1.0, 1.0, 2.0, 3.0, 4.0],
    [3.0, 4.0, 3.0, 2.0, 2.0, 3.0, 4.0, 3.0],
    [2.0, 3.0, 4.0, 3.0, 3.0, 4.0, 3.0, 2.0],
    [1.0, 2.0, 3.0, 4.0, 4.0, 3.0, 2.0, 1.0],
    [1.0, 2.0, 3.0, 4.0, 4.0, 3.0, 2.0, 1.0],
    [2.0, 3.0, 4.0, 3.0, 3.0, 4.0, 3.0, 2.0],
    [3.0, 4.0, 3.0, 2.0, 2.0, 3.0, 4.0, 3.0],
    [4.0, 3.0, 2.0, 1.0, 1.0, 2.0, 3.0, 4.0],
];

const PAWN_TABLE: [[Score; 8]; 8] = [
    [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [1.0, 1.0, 1.0, 0.0, 0.0, 1.0, 1.0, 1.0],
    [1.0, 1.0, 2.0, 3.0, 3.0, 2.0, 1.0, 1.0],
    [1.0, 2.0, 3.0, 4.0, 4.0, 3.0, 2.0, 1.0],
    [2.0, 3.0, 3.0, 5.0, 5.0, 3.0, 3.0, 2.0],
    [5.0, 6.0, 6.0, 7.0, 7.0, 6.0, 6.0, 5.0],
    [8.0, 8.0, 8.0, 8.0, 8.0, 8.0, 8.0, 8.0],
    [8.0, 8.0, 8.0, 8.0, 8.0, 8.0, 8.0, 8.0],
];

const KING_TABLE: [[Score; 8]; 8] = [
    [2.0, 3.0, 3.0, 1.0, 1.0, 1.0, 3.0, 2.0],
    [1.0, 1.0, 1.0, 0.0, 0.0, 1.0, 1.0, 1.0],
    [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [1.0, 1.0, 1.0, 0.0, 0.0, 1.0, 1.0, 1.0],
    [2.0, 3.0, 3.0, 1.0, 1.0, 1.0, 3.0, 2.0],
];

fn table_bonus(piece: Piece, sq: Square) -> Score {
    let col = sq.0 as usize;
    // Pawn and king tables read from each side's own perspective.
    let mirrored_row = match piece.color {
        Color::Dark => sq.1 as usize,
        Color::Light => (7 - sq.1) as usize,
    };
    match piece.kind {
        PieceKind::Knight => KNIGHT_TABLE[sq.1 as usize][col],
        PieceKind::Bishop => BISHOP_TABLE[sq.1 as usize][col],
        PieceKind::Pawn => PAWN_TABLE[mirrored_row][col],
        PieceKind::King => KING_TABLE[mirrored_row][col],
        PieceKind::Rook | PieceKind::Queen => 0.0,
    }
}

impl BoardScorer for TableScorer {
    fn score(&self, game_state: &GameState) -> Score {
        if let Some(score) = terminal_score(game_state) {
            return score;
        }

        let mut score = 0.0;
        for row in 0..8i8 {
            for col in 0..8i8 {
                let sq = (col, row);
                let Some(piece) = game_state.piece_at(sq) else {
                    continue;
                };
                let contribution = piece_value(piece.kind) + POSITION_WEIGHT * table_bonus(piece, sq);
                match piece.color {
                    Color::Light => score += contribution,
                    Color::Dark => score -= contribution,
                }
            }
        }
        score
    }
}
