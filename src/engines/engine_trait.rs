//! Engine abstraction layer used by the match harness and driver code.
//!
//! Defines common input parameters and output payloads so different engine
//! strategies can be selected at runtime behind a single trait interface.

use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::MoveDescription;

#[derive(Debug, Clone, Copy, Default)]
pub struct GoParams {
    /// Requested search depth in plies; engines fall back to their own
    /// default when absent.
    pub depth: Option<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    /// `None` means no legal move exists; the caller reads the position's
    /// checkmate/stalemate flags to tell which terminal outcome applies.
    pub best_move: Option<MoveDescription>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn choose_move(
        &mut self,
        game_state: &GameState,
        params: &GoParams,
    ) -> Result<EngineOutput, String>;
}
