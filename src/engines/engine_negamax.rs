//! Fixed-depth negamax engine.
//!
//! Wraps the core negamax alpha-beta search with a configurable default
//! depth and the table-based scorer. The submitted position is cloned once
//! at the search boundary; the search then applies and reverts moves on that
//! single clone, never on the caller's state.

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::game_state::GameState;
use crate::search::board_scoring::TableScorer;
use crate::search::negamax::{find_best_move, SearchConfig};

pub struct NegamaxEngine {
    default_depth: u8,
    scorer: TableScorer,
}

impl NegamaxEngine {
    pub fn new(default_depth: u8) -> Self {
        Self {
            default_depth,
            scorer: TableScorer,
        }
    }
}

impl Default for NegamaxEngine {
    fn default() -> Self {
        Self::new(3)
    }
}

impl Engine for NegamaxEngine {
    fn name(&self) -> &str {
        "QuinceChess Negamax"
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        params: &GoParams,
    ) -> Result<EngineOutput, String> {
        let depth = params.depth.unwrap_or(self.default_depth);
        if depth == 0 {
            return Err("search depth must be at least 1".to_owned());
        }

        let config = SearchConfig {
            depth,
            ..SearchConfig::default()
        };

        let mut scratch = game_state.clone();
        let outcome = find_best_move(&mut scratch, &self.scorer, &config);

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string negamax_engine depth {} score {:.2} nodes {}",
            depth, outcome.score, outcome.nodes
        ));
        out.best_move = outcome.best_move;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_generator::generate_legal_moves;

    #[test]
    fn chosen_move_is_legal() {
        let game = GameState::new_game();
        let mut engine = NegamaxEngine::new(2);
        let out = engine
            .choose_move(&game, &GoParams::default())
            .expect("choose_move should succeed");
        let mv = out.best_move.expect("start position has legal moves");

        let mut check = game.clone();
        let legal = generate_legal_moves(&mut check);
        assert!(legal.contains(&mv));
    }

    #[test]
    fn depth_zero_request_is_rejected() {
        let game = GameState::new_game();
        let mut engine = NegamaxEngine::default();
        let params = GoParams { depth: Some(0) };
        assert!(engine.choose_move(&game, &params).is_err());
    }

    #[test]
    fn takes_the_mate_in_one() {
        let game = GameState::from_fen("6k1/1R6/R7/8/8/8/8/6K1 w - - 0 1")
            .expect("valid FEN should parse");
        let mut engine = NegamaxEngine::new(2);
        let out = engine
            .choose_move(&game, &GoParams::default())
            .expect("choose_move should succeed");
        let mv = out.best_move.expect("a legal move exists");
        assert_eq!(mv.to, (0, 0));
    }
}
