//! Head-to-head demo: the negamax engine against the random baseline.

use chrono::Local;

use quince_chess::engines::engine_negamax::NegamaxEngine;
use quince_chess::engines::engine_random::RandomEngine;
use quince_chess::engines::engine_trait::{Engine, GoParams};
use quince_chess::game_state::game_state::GameState;
use quince_chess::utils::engine_match_harness::{play_match, MatchConfig, MatchOutcome};
use quince_chess::utils::render_game_state::render_game_state;

fn main() {
    let mut light = NegamaxEngine::new(3);
    let mut dark = RandomEngine::new();

    println!(
        "quince_chess match {} | {} vs {}",
        Local::now().format("%Y-%m-%d %H:%M:%S"),
        light.name(),
        dark.name()
    );

    let config = MatchConfig {
        max_plies: 200,
        go_params: GoParams { depth: Some(3) },
    };

    match play_match(&mut light, &mut dark, &config) {
        Ok(report) => {
            println!("moves: {}", report.move_log.join(" "));
            match report.outcome {
                MatchOutcome::WinCheckmate { winner } => {
                    println!("checkmate, {winner:?} wins after {} plies", report.plies_played)
                }
                MatchOutcome::DrawStalemate => {
                    println!("stalemate after {} plies", report.plies_played)
                }
                MatchOutcome::DrawMaxPlies => {
                    println!("ply cap reached at {} plies", report.plies_played)
                }
            }

            match GameState::from_fen(&report.final_fen) {
                Ok(final_state) => println!("{}", render_game_state(&final_state)),
                Err(err) => eprintln!("could not render final position: {err}"),
            }
        }
        Err(err) => eprintln!("match aborted: {err}"),
    }
}
