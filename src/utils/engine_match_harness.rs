//! Minimal head-to-head engine match harness for local testing.
//!
//! Runs two `Engine` implementations against each other on one shared
//! position, collecting a move log and a terminal outcome. The harness owns
//! the sequencing rule of the core: ask for legal moves, hand the position to
//! the engine whose turn it is, apply the reply, repeat.

use crate::engines::engine_trait::{Engine, GoParams};
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::make_move;
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::utils::algebraic::square_to_algebraic;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    WinCheckmate { winner: Color },
    DrawStalemate,
    DrawMaxPlies,
}

#[derive(Debug, Clone, Copy)]
pub struct MatchConfig {
    pub max_plies: u16,
    pub go_params: GoParams,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 300,
            go_params: GoParams::default(),
        }
    }
}

#[derive(Debug)]
pub struct MatchReport {
    pub outcome: MatchOutcome,
    pub plies_played: u16,
    pub move_log: Vec<String>,
    pub final_fen: String,
}

/// Plays `light` against `dark` from the standard starting position.
pub fn play_match<'a>(
    light: &'a mut dyn Engine,
    dark: &'a mut dyn Engine,
    config: &MatchConfig,
) -> Result<MatchReport, String> {
    let mut game = GameState::new_game();
    let mut move_log = Vec::new();
    light.new_game();
    dark.new_game();

    let mut plies_played = 0u16;
    let outcome = loop {
        let legal = generate_legal_moves(&mut game);
        if legal.is_empty() {
            break if game.checkmate {
                MatchOutcome::WinCheckmate {
                    winner: game.side_to_move.opposite(),
                }
            } else {
                MatchOutcome::DrawStalemate
            };
        }
        if plies_played >= config.max_plies {
            break MatchOutcome::DrawMaxPlies;
        }

        let engine = match game.side_to_move {
            Color::Light => &mut *light,
            Color::Dark => &mut *dark,
        };
        let output = engine.choose_move(&game, &config.go_params)?;
        let chosen = output
            .best_move
            .ok_or("engine returned no move for a live position")?;

        // The engine's reply must match a freshly generated legal move;
        // id-based equality is exactly the lookup a driver performs.
        let mv = legal
            .iter()
            .find(|candidate| **candidate == chosen)
            .copied()
            .ok_or("engine returned an illegal move")?;

        move_log.push(format!(
            "{}{}",
            square_to_algebraic(mv.from),
            square_to_algebraic(mv.to)
        ));
        make_move(&mut game, &mv);
        plies_played += 1;
    };

    Ok(MatchReport {
        outcome,
        plies_played,
        move_log,
        final_fen: game.get_fen(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::engine_random::RandomEngine;

    #[test]
    fn random_match_terminates_within_the_ply_cap() {
        let mut light = RandomEngine::new();
        let mut dark = RandomEngine::new();
        let config = MatchConfig {
            max_plies: 40,
            go_params: GoParams::default(),
        };
        let report = play_match(&mut light, &mut dark, &config)
            .expect("match should run to completion");
        assert!(report.plies_played <= 40);
        assert_eq!(report.move_log.len() as u16, report.plies_played);
    }
}
