//! Wire messages exchanged between the referee and player nodes.

use crate::{
    game::{GameState, MoveOutcome},
    piece::Player,
    rules::MoveRequest,
};

/// Version carried by every message; peers with a different version are refused.
pub const PROTOCOL_VERSION: u16 = 1;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Message {
    /// First message from a player node.
    Hello { version: u16 },
    /// Referee's reply to `Hello`: the seat assigned to this connection and the
    /// current game state.
    Welcome {
        version: u16,
        seat: Player,
        state: GameState,
    },
    /// A move request. `seq` counts the sender's submissions from zero.
    Move {
        version: u16,
        seq: u64,
        request: MoveRequest,
    },
    /// Result of the move `seq` submitted by `mover`. Rejections go to the
    /// mover only; accepted moves are sent to both seats.
    Outcome {
        version: u16,
        seq: u64,
        mover: Player,
        outcome: MoveOutcome,
    },
    /// The referee is closing the session without a winner.
    Shutdown { version: u16, reason: String },
}

impl Message {
    pub fn version(&self) -> u16 {
        match self {
            Message::Hello { version }
            | Message::Welcome { version, .. }
            | Message::Move { version, .. }
            | Message::Outcome { version, .. }
            | Message::Shutdown { version, .. } => *version,
        }
    }
}
