use std::io::{self, BufRead, Write};

use rand::rngs::SmallRng;

use crate::{
    agent::Agent,
    catalog::Direction,
    common::Rejection,
    game::{GameState, MoveOutcome},
    piece::{Player, Position},
    rules::MoveRequest,
    ui::{print_state, render_board},
};

/// Agent that asks a human on stdin.
///
/// Accepted input: `row col DIR` (e.g. `0 2 F`) or `row col row col`
/// (origin then destination).
#[derive(Debug, Default)]
pub struct CliAgent;

impl CliAgent {
    pub fn new() -> Self {
        Self
    }
}

/// Parse one line of user input into a move request for `seat`.
pub fn parse_move(input: &str, seat: Player) -> Option<MoveRequest> {
    let parts: Vec<&str> = input.split_whitespace().collect();
    match parts.as_slice() {
        [r, c, dir] => {
            let from = Position::new(r.parse().ok()?, c.parse().ok()?);
            let dir: Direction = dir.parse().ok()?;
            Some(MoveRequest::step(seat, from, dir))
        }
        [r, c, tr, tc] => {
            let from = Position::new(r.parse().ok()?, c.parse().ok()?);
            let to = Position::new(tr.parse().ok()?, tc.parse().ok()?);
            Some(MoveRequest::to_cell(seat, from, to))
        }
        _ => None,
    }
}

impl Agent for CliAgent {
    fn choose_move(
        &mut self,
        _rng: &mut SmallRng,
        state: &GameState,
        seat: Player,
    ) -> Option<MoveRequest> {
        print_state(state);
        let stdin = io::stdin();
        loop {
            print!("Your move (row col DIR | row col row col): ");
            let _ = io::stdout().flush();
            let mut line = String::new();
            match stdin.lock().read_line(&mut line) {
                Ok(0) | Err(_) => return None,
                Ok(_) => {}
            }
            match parse_move(&line, seat) {
                Some(request) => return Some(request),
                None => println!("Could not parse '{}'. Directions: L R F B FL FR BL BR", line.trim()),
            }
        }
    }

    fn handle_rejection(&mut self, _request: &MoveRequest, reason: Rejection) {
        println!("Invalid move: {}", reason);
    }

    fn handle_outcome(&mut self, outcome: &MoveOutcome) {
        if !outcome.captured.is_empty() {
            println!("Captured: {}", outcome.captured.join(", "));
        }
        println!("{}", render_board(&outcome.board_after));
    }
}
