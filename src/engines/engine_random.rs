//! Random-move engine.
//!
//! Selects uniformly from legal moves and is primarily used for diagnostics,
//! match-harness baselines, and low-strength gameplay.

use rand::prelude::IndexedRandom;
use rand::rng;

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::generate_legal_moves;

pub struct RandomEngine;

impl RandomEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "QuinceChess Random"
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        _params: &GoParams,
    ) -> Result<EngineOutput, String> {
        let mut scratch = game_state.clone();
        let legal_moves = generate_legal_moves(&mut scratch);

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string random_engine legal_moves {}",
            legal_moves.len()
        ));

        out.best_move = legal_moves.choose(&mut rng()).copied();
        Ok(out)
    }
}
