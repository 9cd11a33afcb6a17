//! Game sessions: turn order, move submission and snapshots.
//!
//! A [`Session`] owns the board and the player to move. Every submission
//! produces a [`MoveOutcome`]; rejected requests leave the session untouched.

use alloc::string::String;
use alloc::vec::Vec;

use crate::{
    board::Board,
    common::{BoardError, GameResult, Rejection},
    config::{EngineConfig, DEFAULT_FORMATION},
    piece::{PieceKind, Player},
    rules::{self, MoveRequest, PlannedMove},
};

/// Serializable snapshot of a session.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub board: Board,
    pub current_player: Player,
    pub result: GameResult,
    pub config: EngineConfig,
}

impl GameState {
    /// Fold an accepted outcome into this snapshot. Rejections change nothing.
    pub fn advance(&mut self, outcome: &MoveOutcome) {
        if outcome.accepted {
            self.board = outcome.board_after.clone();
            self.current_player = outcome.current_player;
            self.result = outcome.result;
        }
    }
}

/// What happened to a submitted move.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveOutcome {
    pub accepted: bool,
    pub reason: Option<Rejection>,
    pub captured: Vec<String>,
    pub board_after: Board,
    /// Player to move after this outcome.
    pub current_player: Player,
    pub result: GameResult,
}

/// One game: the board, whose turn it is, and whether someone has won.
#[derive(Clone, Debug)]
pub struct Session {
    board: Board,
    current_player: Player,
    result: GameResult,
    config: EngineConfig,
}

impl Session {
    /// New game with the given formations; Player A moves first.
    pub fn new(a: &[PieceKind], b: &[PieceKind]) -> Result<Self, BoardError> {
        Self::with_config(a, b, EngineConfig::default())
    }

    pub fn with_config(
        a: &[PieceKind],
        b: &[PieceKind],
        config: EngineConfig,
    ) -> Result<Self, BoardError> {
        let board = Board::with_formations(a, b)?;
        Ok(Self::from_board(board, Player::A, config))
    }

    /// New game with [`DEFAULT_FORMATION`] on both sides.
    pub fn standard(config: EngineConfig) -> Result<Self, BoardError> {
        Self::with_config(&DEFAULT_FORMATION, &DEFAULT_FORMATION, config)
    }

    /// Resume play from an arbitrary board.
    pub fn from_board(board: Board, current_player: Player, config: EngineConfig) -> Self {
        let result = rules::check_terminal(&board);
        Self {
            board,
            current_player,
            result,
            config,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn result(&self) -> GameResult {
        self.result
    }

    pub fn config(&self) -> EngineConfig {
        self.config
    }

    /// Moves available to the player whose turn it is.
    pub fn legal_moves(&self) -> Vec<PlannedMove> {
        if self.result.is_over() {
            return Vec::new();
        }
        rules::legal_moves(&self.board, self.current_player, self.config.path_policy)
    }

    /// Check the move without applying it.
    pub fn check_move(&self, request: &MoveRequest) -> Result<PlannedMove, Rejection> {
        if self.result.is_over() {
            return Err(Rejection::GameOver);
        }
        if request.player != self.current_player {
            return Err(Rejection::NotYourTurn);
        }
        rules::validate(&self.board, request, self.config.path_policy)
    }

    /// Validate and, if legal, apply `request`. The turn passes to the other
    /// player on every accepted move that does not end the game.
    pub fn submit_move(&mut self, request: &MoveRequest) -> MoveOutcome {
        let plan = match self.check_move(request) {
            Ok(plan) => plan,
            Err(reason) => {
                log::debug!("rejected move by {}: {}", request.player, reason);
                return self.outcome(false, Some(reason), Vec::new());
            }
        };
        let applied = rules::apply(&mut self.board, &plan);
        log::debug!(
            "{} {} {} -> {} captured {:?}",
            plan.player,
            plan.kind,
            plan.from,
            plan.to,
            applied.captured
        );
        self.result = applied.result;
        if let GameResult::Winner(p) = self.result {
            log::info!("player {} wins", p);
        } else {
            self.current_player = self.current_player.opponent();
        }
        self.outcome(true, None, applied.captured)
    }

    fn outcome(&self, accepted: bool, reason: Option<Rejection>, captured: Vec<String>) -> MoveOutcome {
        MoveOutcome {
            accepted,
            reason,
            captured,
            board_after: self.board.clone(),
            current_player: self.current_player,
            result: self.result,
        }
    }

    /// Generate a serializable snapshot of the current state.
    pub fn state(&self) -> GameState {
        GameState {
            board: self.board.clone(),
            current_player: self.current_player,
            result: self.result,
            config: self.config,
        }
    }

    /// Restore a session from a snapshot. The result is recomputed from the board.
    pub fn from_state(state: GameState) -> Self {
        Self::from_board(state.board, state.current_player, state.config)
    }
}
