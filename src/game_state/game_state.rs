//! Core incremental board state representation.
//!
//! `GameState` is the central model for the engine. It stores the 8x8 piece
//! grid, turn/state flags, the king-square caches, and the history stack used
//! by make/unmake style workflows and higher-level engine systems. Exactly one
//! live instance exists during a game; search mutates it in place and reverts
//! rather than copying boards per node.

use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

/// Incremental game state optimized for fast move making/unmaking.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Row-major mailbox grid; `board[row][col]`, `(0, 0)` top-left.
    pub board: [[Option<Piece>; 8]; 8],

    // --- Side and state flags ---
    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_square: Option<Square>,

    /// Cached king location per side, indexed by `Color::index()`.
    /// Kept synchronized with the board by `make_move` / `unmake_move`.
    pub king_squares: [Square; 2],

    /// Set by the most recent `generate_legal_moves` call; never maintained
    /// incrementally and reset by `unmake_move`.
    pub checkmate: bool,
    pub stalemate: bool,

    // --- Make/unmake stack ---
    pub undo_stack: Vec<UndoState>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: [[None; 8]; 8],

            side_to_move: Color::Light,
            castling_rights: 0,
            en_passant_square: None,

            king_squares: [(0, 0); 2],

            checkmate: false,
            stalemate: false,

            undo_stack: Vec::new(),
        }
    }
}

impl GameState {
    /// Empty board with no rights. Used as the parse target for FEN setup.
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn new_game() -> Self {
        parse_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, String> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board[sq.1 as usize][sq.0 as usize]
    }

    #[inline]
    pub fn set_piece_at(&mut self, sq: Square, piece: Option<Piece>) {
        self.board[sq.1 as usize][sq.0 as usize] = piece;
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.index()]
    }

    /// Total pieces on the board, both sides. Feeds the null-move
    /// zugzwang gate in search.
    pub fn piece_count(&self) -> usize {
        self.board
            .iter()
            .flatten()
            .filter(|sq| sq.is_some())
            .count()
    }
}
