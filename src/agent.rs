use rand::rngs::SmallRng;
use rand::Rng;

use crate::{
    common::Rejection,
    game::{GameState, MoveOutcome},
    piece::Player,
    rules::{self, MoveRequest},
};

/// Interface implemented by anything that picks moves for one seat.
pub trait Agent {
    /// Choose the next move for `seat`. `None` means no move can be offered.
    fn choose_move(
        &mut self,
        rng: &mut SmallRng,
        state: &GameState,
        seat: Player,
    ) -> Option<MoveRequest>;

    /// Inform the agent that its last request was refused.
    fn handle_rejection(&mut self, _request: &MoveRequest, _reason: Rejection) {}

    /// Inform the agent of any accepted move, its own or the opponent's.
    fn handle_outcome(&mut self, _outcome: &MoveOutcome) {}
}

/// Plays a uniformly random legal move.
#[derive(Debug, Default)]
pub struct RandomAgent;

impl RandomAgent {
    pub fn new() -> Self {
        Self
    }
}

impl Agent for RandomAgent {
    fn choose_move(
        &mut self,
        rng: &mut SmallRng,
        state: &GameState,
        seat: Player,
    ) -> Option<MoveRequest> {
        let moves = rules::legal_moves(&state.board, seat, state.config.path_policy);
        if moves.is_empty() {
            return None;
        }
        let pick = rng.random_range(0..moves.len());
        Some(moves[pick].request())
    }
}
