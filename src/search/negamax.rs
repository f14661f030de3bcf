//! Fixed-depth negamax search with alpha-beta and null-move pruning.
//!
//! Every node returns a score from its own mover's perspective and the parent
//! negates it. The search walks one shared `GameState` by applying and
//! reverting moves in place; the node counter and the chosen root move are
//! threaded through an explicit context instead of any global state.

use rand::rng;
use rand::seq::SliceRandom;

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{make_move, unmake_move};
use crate::move_generation::legal_move_checks::{is_king_in_check, square_attacked_by};
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::moves::move_descriptions::MoveDescription;
use crate::search::board_scoring::{piece_value, BoardScorer, Score, CHECKMATE_SCORE};

/// Depth reduction for the null-move verification search.
pub const NULL_MOVE_REDUCTION: u8 = 2;

/// Total-piece threshold below which null-move pruning is switched off.
/// A coarse static proxy for zugzwang danger, isolated here so it can be
/// replaced independently.
pub const ZUGZWANG_PIECE_LIMIT: usize = 6;

#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    pub depth: u8,
    /// Alpha-beta cutoffs. Disabling yields full minimax over the same tree;
    /// the reported score must not change, only the node count.
    pub alpha_beta_pruning: bool,
    /// Null-move heuristic; requires alpha-beta to be active.
    pub null_move_pruning: bool,
    /// Shuffle the root move list before ordering, so candidates the
    /// ordering heuristic cannot distinguish are picked fairly.
    pub shuffle_root_moves: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 3,
            alpha_beta_pruning: true,
            null_move_pruning: true,
            shuffle_root_moves: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SearchOutcome {
    /// `None` signals no legal move exists; consult the position's
    /// checkmate/stalemate flags to tell the two terminal outcomes apart.
    pub best_move: Option<MoveDescription>,
    /// Score from the perspective of the side to move at the root.
    pub score: Score,
    pub nodes: u64,
}

struct SearchContext<'a> {
    scorer: &'a dyn BoardScorer,
    config: SearchConfig,
    /// `config.depth` clamped to at least one ply, so a live root always
    /// searches (and records) at least one real move.
    root_depth: u8,
    nodes: u64,
    best_root_move: Option<MoveDescription>,
}

#[inline]
const fn turn_multiplier(color: Color) -> Score {
    match color {
        Color::Light => 1.0,
        Color::Dark => -1.0,
    }
}

/// Chooses a move for the side to move, searching to `config.depth` plies.
/// A requested depth of zero is treated as one ply; `best_move` is `None`
/// only when the position has no legal move at all.
pub fn find_best_move(
    game: &mut GameState,
    scorer: &dyn BoardScorer,
    config: &SearchConfig,
) -> SearchOutcome {
    let turn = turn_multiplier(game.side_to_move);
    let mut moves = generate_legal_moves(game);

    if moves.is_empty() {
        return SearchOutcome {
            best_move: None,
            score: turn * scorer.score(game),
            nodes: 1,
        };
    }

    if config.shuffle_root_moves {
        moves.shuffle(&mut rng());
    }

    let root_depth = config.depth.max(1);
    let mut ctx = SearchContext {
        scorer,
        config: *config,
        root_depth,
        nodes: 0,
        best_root_move: None,
    };

    let score = negamax(
        game,
        &mut ctx,
        moves,
        root_depth,
        -CHECKMATE_SCORE,
        CHECKMATE_SCORE,
        turn,
        config.null_move_pruning,
    );

    SearchOutcome {
        best_move: ctx.best_root_move,
        score,
        nodes: ctx.nodes,
    }
}

#[allow(clippy::too_many_arguments)]
fn negamax(
    game: &mut GameState,
    ctx: &mut SearchContext<'_>,
    mut moves: Vec<MoveDescription>,
    depth: u8,
    mut alpha: Score,
    beta: Score,
    turn: Score,
    allow_null: bool,
) -> Score {
    ctx.nodes += 1;

    // Leaves: the depth horizon, or a position with no reply at all. The
    // caller's legal-move query already set the terminal flags the scorer
    // reads.
    if depth == 0 || moves.is_empty() {
        return turn * ctx.scorer.score(game);
    }

    // Never probe a null move at the root: a cutoff there would return
    // before any real move was recorded as `best_root_move`.
    if ctx.config.alpha_beta_pruning
        && ctx.config.null_move_pruning
        && allow_null
        && depth != ctx.root_depth
        && null_move_allowed(game, depth)
    {
        let null_score = search_null_move(game, ctx, depth, beta, turn);
        if null_score >= beta {
            return beta;
        }
    }

    order_moves(game, &mut moves);

    let mut max_score = Score::NEG_INFINITY;
    for mv in moves {
        make_move(game, &mv);
        let replies = generate_legal_moves(game);
        let score = -negamax(
            game,
            ctx,
            replies,
            depth - 1,
            -beta,
            -alpha,
            -turn,
            allow_null,
        );
        unmake_move(game);

        if score > max_score {
            max_score = score;
            if depth == ctx.root_depth {
                ctx.best_root_move = Some(mv);
            }
        }

        if ctx.config.alpha_beta_pruning {
            if max_score > alpha {
                alpha = max_score;
            }
            if alpha >= beta {
                break;
            }
        }
    }

    max_score
}

/// The zugzwang gate: enough remaining depth for the reduced verification,
/// not currently in check, and enough pieces that passing a turn is unlikely
/// to be the best move.
fn null_move_allowed(game: &mut GameState, depth: u8) -> bool {
    depth >= NULL_MOVE_REDUCTION + 1
        && !is_king_in_check(game, game.side_to_move)
        && game.piece_count() > ZUGZWANG_PIECE_LIMIT
}

/// Lets the opponent move twice: if even that cannot pull the score below
/// beta, a real move will not either. Verified with a zero-width window at
/// reduced depth, with nested null moves disabled.
fn search_null_move(
    game: &mut GameState,
    ctx: &mut SearchContext<'_>,
    depth: u8,
    beta: Score,
    turn: Score,
) -> Score {
    let saved_en_passant = game.en_passant_square.take();
    game.side_to_move = game.side_to_move.opposite();

    let replies = generate_legal_moves(game);
    let score = -negamax(
        game,
        ctx,
        replies,
        depth - 1 - NULL_MOVE_REDUCTION,
        -beta,
        -beta + 1.0,
        -turn,
        false,
    );

    game.side_to_move = game.side_to_move.opposite();
    game.en_passant_square = saved_en_passant;

    score
}

/// Capture-priority ordering: the captured piece's value, plus the moving
/// piece's value when its origin square is currently attacked (resolving a
/// hanging piece). The sort is stable, so equally scored moves keep their
/// incoming order.
fn order_moves(game: &mut GameState, moves: &mut Vec<MoveDescription>) {
    let opponent = game.side_to_move.opposite();

    let mut keyed: Vec<(Score, MoveDescription)> = moves
        .drain(..)
        .map(|mv| {
            let mut key = mv
                .piece_captured
                .map(|piece| piece_value(piece.kind))
                .unwrap_or(0.0);
            if square_attacked_by(game, mv.from, opponent) {
                key += piece_value(mv.piece_moved.kind);
            }
            (key, mv)
        })
        .collect();

    keyed.sort_by(|a, b| b.0.total_cmp(&a.0));
    moves.extend(keyed.into_iter().map(|(_, mv)| mv));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::board_scoring::{MaterialScorer, TableScorer};

    fn deterministic(depth: u8) -> SearchConfig {
        SearchConfig {
            depth,
            alpha_beta_pruning: true,
            null_move_pruning: false,
            shuffle_root_moves: false,
        }
    }

    #[test]
    fn finds_mate_in_one() {
        let mut game = GameState::from_fen("6k1/1R6/R7/8/8/8/8/6K1 w - - 0 1")
            .expect("valid FEN should parse");
        let outcome = find_best_move(&mut game, &TableScorer, &deterministic(2));
        let best = outcome.best_move.expect("a legal move exists");
        assert_eq!(best.to, (0, 0));
        assert_eq!(outcome.score, CHECKMATE_SCORE);
    }

    #[test]
    fn captures_a_hanging_queen() {
        let mut game = GameState::from_fen("k7/8/8/3q4/4P3/8/8/K7 w - - 0 1")
            .expect("valid FEN should parse");
        let outcome = find_best_move(&mut game, &MaterialScorer, &deterministic(2));
        let best = outcome.best_move.expect("a legal move exists");
        assert_eq!(best.from, (4, 4));
        assert_eq!(best.to, (3, 3));
    }

    #[test]
    fn terminal_position_returns_no_move() {
        let mut game = GameState::from_fen("7k/5Q2/8/8/8/8/8/4K3 b - - 0 1")
            .expect("valid FEN should parse");
        let outcome = find_best_move(&mut game, &TableScorer, &deterministic(3));
        assert!(outcome.best_move.is_none());
        assert!(game.stalemate);
        assert_eq!(outcome.score, 0.0);
    }

    #[test]
    fn alpha_beta_matches_full_minimax_score() {
        let fen = "r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 0 1";

        let mut pruned_game = GameState::from_fen(fen).expect("valid FEN should parse");
        let pruned = find_best_move(&mut pruned_game, &TableScorer, &deterministic(2));

        let mut full_game = GameState::from_fen(fen).expect("valid FEN should parse");
        let full_config = SearchConfig {
            depth: 2,
            alpha_beta_pruning: false,
            null_move_pruning: false,
            shuffle_root_moves: false,
        };
        let full = find_best_move(&mut full_game, &TableScorer, &full_config);

        assert_eq!(pruned.score, full.score);
        assert!(pruned.nodes <= full.nodes);
    }

    #[test]
    fn null_move_never_raises_the_score() {
        let fen = "r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 0 1";

        let mut plain_game = GameState::from_fen(fen).expect("valid FEN should parse");
        let plain = find_best_move(&mut plain_game, &TableScorer, &deterministic(3));

        let mut null_game = GameState::from_fen(fen).expect("valid FEN should parse");
        let null_config = SearchConfig {
            depth: 3,
            alpha_beta_pruning: true,
            null_move_pruning: true,
            shuffle_root_moves: false,
        };
        let with_null = find_best_move(&mut null_game, &TableScorer, &null_config);

        assert!(with_null.score <= plain.score);
    }

    #[test]
    fn deep_null_move_search_still_reports_a_root_move() {
        // Passing loses immediately here, so an unguarded root null-move
        // probe would fail high and return before any real move was tried.
        let mut game = GameState::from_fen("6k1/1R6/R7/8/8/8/5PPP/6K1 w - - 0 1")
            .expect("valid FEN should parse");
        let config = SearchConfig {
            depth: 5,
            alpha_beta_pruning: true,
            null_move_pruning: true,
            shuffle_root_moves: false,
        };
        let outcome = find_best_move(&mut game, &TableScorer, &config);
        assert!(outcome.best_move.is_some());
        assert_eq!(outcome.score, CHECKMATE_SCORE);
    }

    #[test]
    fn zero_depth_request_searches_one_ply() {
        let mut game = GameState::new_game();
        let config = SearchConfig {
            depth: 0,
            alpha_beta_pruning: true,
            null_move_pruning: true,
            shuffle_root_moves: false,
        };
        let outcome = find_best_move(&mut game, &TableScorer, &config);
        assert!(outcome.best_move.is_some());
    }

    #[test]
    fn search_restores_the_position() {
        let mut game = GameState::new_game();
        let fen_before = game.get_fen();
        let _ = find_best_move(&mut game, &TableScorer, &deterministic(3));
        assert_eq!(game.get_fen(), fen_before);
        assert!(game.undo_stack.is_empty());
    }
}
