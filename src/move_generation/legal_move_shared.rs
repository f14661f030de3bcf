//! Helpers shared by the per-piece pseudo-legal generators.

use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::MoveDescription;

/// Ray-casts from `from` in each `(d_col, d_row)` direction, stopping at the
/// first occupied square (included when enemy, excluded when friendly) or at
/// the board edge. Used by bishops, rooks, and queens.
pub fn generate_sliding_moves(
    game: &GameState,
    from: Square,
    directions: &[(i8, i8)],
    out: &mut Vec<MoveDescription>,
) {
    let mover = game
        .piece_at(from)
        .expect("sliding move origin must hold a piece");

    for &(d_col, d_row) in directions {
        let mut current = from;
        while let Some(dest) = offset_square(current, d_col, d_row) {
            match game.piece_at(dest) {
                None => {
                    out.push(MoveDescription::new(game, from, dest));
                    current = dest;
                }
                Some(blocker) => {
                    if blocker.color != mover.color {
                        out.push(MoveDescription::new(game, from, dest));
                    }
                    break;
                }
            }
        }
    }
}

/// Fixed-offset destinations (knight and king patterns), filtered to board
/// bounds and to squares not holding a friendly piece.
pub fn generate_offset_moves(
    game: &GameState,
    from: Square,
    offsets: &[(i8, i8)],
    out: &mut Vec<MoveDescription>,
) {
    let mover = game
        .piece_at(from)
        .expect("offset move origin must hold a piece");

    for &(d_col, d_row) in offsets {
        let Some(dest) = offset_square(from, d_col, d_row) else {
            continue;
        };
        match game.piece_at(dest) {
            Some(occupant) if occupant.color == mover.color => {}
            _ => out.push(MoveDescription::new(game, from, dest)),
        }
    }
}
