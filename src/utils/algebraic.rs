//! Conversion between squares and algebraic coordinate text (`a1`..`h8`).
//!
//! The stored grid has `(0, 0)` at the top-left (the dark back rank), so
//! rank digits count down as rows count up.

use crate::game_state::chess_types::Square;

pub fn square_to_algebraic(sq: Square) -> String {
    let file = char::from(b'a' + sq.0 as u8);
    let rank = char::from(b'8' - sq.1 as u8);
    format!("{file}{rank}")
}

pub fn algebraic_to_square(text: &str) -> Result<Square, String> {
    let mut chars = text.chars();
    let file = chars
        .next()
        .ok_or_else(|| format!("Empty algebraic square: '{text}'"))?;
    let rank = chars
        .next()
        .ok_or_else(|| format!("Algebraic square too short: '{text}'"))?;
    if chars.next().is_some() {
        return Err(format!("Algebraic square too long: '{text}'"));
    }

    if !('a'..='h').contains(&file) {
        return Err(format!("Invalid file character '{file}'"));
    }
    if !('1'..='8').contains(&rank) {
        return Err(format!("Invalid rank character '{rank}'"));
    }

    let col = (file as u8 - b'a') as i8;
    let row = (b'8' - rank as u8) as i8;
    Ok((col, row))
}
