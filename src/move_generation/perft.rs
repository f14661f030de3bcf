//! Move-count ground truth (perft) over the legal generator.
//!
//! Walks the legal move tree to a fixed depth on the single shared state,
//! counting leaf nodes and per-move-kind totals along the way. Used by tests
//! and the criterion benchmark to pin generation correctness.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{make_move, unmake_move};
use crate::move_generation::legal_move_generator::generate_legal_moves;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
}

pub fn perft(game: &mut GameState, depth: u8) -> PerftCounts {
    let mut total = PerftCounts::default();
    if depth == 0 {
        total.nodes = 1;
        return total;
    }
    perft_recurse(game, depth, &mut total);
    total
}

fn perft_recurse(game: &mut GameState, depth: u8, total: &mut PerftCounts) {
    let moves = generate_legal_moves(game);

    for mv in moves {
        if depth == 1 {
            total.nodes += 1;
            if mv.piece_captured.is_some() {
                total.captures += 1;
            }
            if mv.is_en_passant {
                total.en_passant += 1;
            }
            if mv.is_castle {
                total.castles += 1;
            }
            if mv.is_promotion {
                total.promotions += 1;
            }
            continue;
        }

        make_move(game, &mv);
        perft_recurse(game, depth - 1, total);
        unmake_move(game);
    }
}

/// Leaf count only, for callers that do not need the per-kind breakdown.
#[inline]
pub fn perft_nodes(game: &mut GameState, depth: u8) -> u64 {
    perft(game, depth).nodes
}
