use rand::rngs::SmallRng;

use crate::{
    agent::Agent,
    game::GameState,
    piece::Player,
    protocol::{Message, PROTOCOL_VERSION},
    transport::Transport,
};

/// Client side of a game: one seat, driven by an [`Agent`].
pub struct PlayerNode {
    agent: Box<dyn Agent + Send>,
    transport: Box<dyn Transport>,
}

impl PlayerNode {
    pub fn new(agent: Box<dyn Agent + Send>, transport: Box<dyn Transport>) -> Self {
        Self { agent, transport }
    }

    /// Announce ourselves and learn our seat and the starting state.
    async fn handshake(&mut self) -> anyhow::Result<(Player, GameState)> {
        self.transport
            .send(Message::Hello {
                version: PROTOCOL_VERSION,
            })
            .await?;
        match self.transport.recv().await? {
            Message::Welcome {
                version,
                seat,
                state,
            } if version == PROTOCOL_VERSION => Ok((seat, state)),
            Message::Welcome { version, .. } => Err(anyhow::anyhow!(
                "Protocol version mismatch in Welcome: expected {}, got {}",
                PROTOCOL_VERSION,
                version
            )),
            Message::Shutdown { reason, .. } => {
                Err(anyhow::anyhow!("Referee refused connection: {}", reason))
            }
            other => Err(anyhow::anyhow!("Expected Welcome, got {:?}", other)),
        }
    }

    /// Play until a winner is decided or the referee shuts the session down.
    /// Returns the last known state.
    pub async fn run(&mut self, rng: &mut SmallRng) -> anyhow::Result<GameState> {
        let (seat, mut state) = self.handshake().await?;
        log::info!("seated as player {}", seat);

        let mut my_seq: u64 = 0;
        while !state.result.is_over() {
            if state.current_player == seat {
                let request = self
                    .agent
                    .choose_move(rng, &state, seat)
                    .ok_or_else(|| anyhow::anyhow!("No legal move available for player {}", seat))?;
                self.transport
                    .send(Message::Move {
                        version: PROTOCOL_VERSION,
                        seq: my_seq,
                        request: request.clone(),
                    })
                    .await?;
                match self.transport.recv().await? {
                    Message::Outcome {
                        version,
                        seq,
                        mover,
                        outcome,
                    } if version == PROTOCOL_VERSION && seq == my_seq && mover == seat => {
                        match outcome.reason {
                            Some(reason) if !outcome.accepted => {
                                log::debug!("move {} rejected: {}", seq, reason);
                                self.agent.handle_rejection(&request, reason);
                            }
                            _ => self.agent.handle_outcome(&outcome),
                        }
                        state.advance(&outcome);
                    }
                    Message::Shutdown { reason, .. } => {
                        log::info!("session closed: {}", reason);
                        return Ok(state);
                    }
                    other => {
                        return Err(anyhow::anyhow!(
                            "Expected Outcome for seq {}, got {:?}",
                            my_seq,
                            other
                        ))
                    }
                }
                my_seq += 1;
            } else {
                match self.transport.recv().await? {
                    Message::Outcome {
                        version,
                        mover,
                        outcome,
                        ..
                    } if version == PROTOCOL_VERSION && mover != seat => {
                        self.agent.handle_outcome(&outcome);
                        state.advance(&outcome);
                    }
                    Message::Shutdown { reason, .. } => {
                        log::info!("session closed: {}", reason);
                        return Ok(state);
                    }
                    other => {
                        return Err(anyhow::anyhow!(
                            "Expected opponent Outcome, got {:?}",
                            other
                        ))
                    }
                }
            }
        }
        Ok(state)
    }
}
