use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::MoveDescription;

/// Single undo record for `make_move` / `unmake_move`.
///
/// Castling rights and the en-passant square are shadowed outright because
/// neither is derivable from the move alone (two different prior rights
/// states can lose the same right).
#[derive(Debug, Clone, Copy)]
pub struct UndoState {
    pub mv: MoveDescription,

    pub prev_castling_rights: CastlingRights,
    pub prev_en_passant_square: Option<Square>,
}
