use std::fmt::Write;

use crate::{board::Board, common::GameResult, config::BOARD_SIZE, game::GameState};

/// Text rendering of `board`: one row per line, pieces as owner plus glyph
/// (`AP`, `B1`, `A2`), empty cells as `..`.
pub fn render_board(board: &Board) -> String {
    let mut out = String::from("    ");
    for c in 0..BOARD_SIZE {
        let _ = write!(out, " {:>2}", c);
    }
    out.push('\n');
    for r in 0..BOARD_SIZE {
        let _ = write!(out, "{:>3} ", r);
        for c in 0..BOARD_SIZE {
            match board.cell_at(r, c).ok().flatten() {
                Some(p) => {
                    let _ = write!(out, " {}{}", p.owner(), p.kind().glyph());
                }
                None => out.push_str(" .."),
            }
        }
        out.push('\n');
    }
    out
}

/// Print the board and whose turn it is.
pub fn print_state(state: &GameState) {
    println!("{}", render_board(&state.board));
    match state.result {
        GameResult::InProgress => println!("Player {} to move", state.current_player),
        GameResult::Winner(p) => println!("Player {} wins!", p),
    }
}
