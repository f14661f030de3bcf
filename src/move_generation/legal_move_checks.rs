//! Attack and check queries.
//!
//! A square counts as attacked when any pseudo-legal move of the attacker
//! lands on it. The probe temporarily flips the side to move and generates
//! without castling, so it never recurses into check-filtering.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_generator::generate_pseudo_legal_moves;
use crate::moves::move_descriptions::MoveDescription;

pub fn square_attacked_by(game: &mut GameState, target: Square, attacker: Color) -> bool {
    let saved_side = game.side_to_move;
    game.side_to_move = attacker;

    let mut pseudo = Vec::<MoveDescription>::with_capacity(64);
    generate_pseudo_legal_moves(game, false, &mut pseudo);

    game.side_to_move = saved_side;
    pseudo.iter().any(|mv| mv.to == target)
}

#[inline]
pub fn is_king_in_check(game: &mut GameState, color: Color) -> bool {
    let king_sq = game.king_square(color);
    square_attacked_by(game, king_sq, color.opposite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_position_kings_are_safe() {
        let mut game = GameState::new_game();
        assert!(!is_king_in_check(&mut game, Color::Light));
        assert!(!is_king_in_check(&mut game, Color::Dark));
    }

    #[test]
    fn rook_on_open_file_gives_check() {
        let mut game = GameState::from_fen("4k3/8/8/8/8/8/8/4RK2 b - - 0 1")
            .expect("valid FEN should parse");
        assert!(is_king_in_check(&mut game, Color::Dark));
        assert!(!is_king_in_check(&mut game, Color::Light));
    }

    #[test]
    fn knight_check_ignores_interposed_pieces() {
        let mut game = GameState::from_fen("4k3/4r3/5N2/8/8/8/8/4K3 b - - 0 1")
            .expect("valid FEN should parse");
        assert!(is_king_in_check(&mut game, Color::Dark));
    }

    #[test]
    fn attack_probe_restores_side_to_move() {
        let mut game = GameState::new_game();
        square_attacked_by(&mut game, (4, 4), Color::Dark);
        assert_eq!(game.side_to_move, Color::Light);
    }
}
