use crate::{
    common::GameResult,
    game::GameState,
    piece::Player,
    protocol::{Message, PROTOCOL_VERSION},
    session_handle::SessionHandle,
    transport::Transport,
};

/// Server side of a game: owns one connection per seat and feeds their
/// moves into the session.
///
/// Only the connection whose seat is to move is read. The `player` field of
/// each request is overwritten with that seat, so a connection can never act
/// for the other side.
pub struct Referee<T: Transport> {
    session: SessionHandle,
    seats: [T; 2],
    max_plies: Option<u32>,
}

impl<T: Transport> Referee<T> {
    /// `seat_a` plays as Player A, `seat_b` as Player B.
    pub fn new(session: SessionHandle, seat_a: T, seat_b: T) -> Self {
        Self {
            session,
            seats: [seat_a, seat_b],
            max_plies: None,
        }
    }

    /// End the game with `Shutdown` after `max` accepted moves.
    pub fn with_ply_limit(mut self, max: u32) -> Self {
        self.max_plies = Some(max);
        self
    }

    fn seat(&mut self, player: Player) -> &mut T {
        &mut self.seats[player.index()]
    }

    async fn greet(&mut self, seat: Player, state: &GameState) -> anyhow::Result<()> {
        let transport = self.seat(seat);
        match transport.recv().await? {
            Message::Hello { version } if version == PROTOCOL_VERSION => {}
            Message::Hello { version } => {
                let _ = transport
                    .send(Message::Shutdown {
                        version: PROTOCOL_VERSION,
                        reason: format!("unsupported protocol version {}", version),
                    })
                    .await;
                return Err(anyhow::anyhow!(
                    "Protocol version mismatch from seat {}: expected {}, got {}",
                    seat,
                    PROTOCOL_VERSION,
                    version
                ));
            }
            other => {
                return Err(anyhow::anyhow!(
                    "Expected Hello from seat {}, got {:?}",
                    seat,
                    other
                ))
            }
        }
        transport
            .send(Message::Welcome {
                version: PROTOCOL_VERSION,
                seat,
                state: state.clone(),
            })
            .await
    }

    async fn shutdown(&mut self, reason: &str) -> anyhow::Result<()> {
        for seat in Player::ALL {
            self.seat(seat)
                .send(Message::Shutdown {
                    version: PROTOCOL_VERSION,
                    reason: reason.to_string(),
                })
                .await?;
        }
        Ok(())
    }

    /// Run the game to completion. Returns `InProgress` if the ply limit
    /// stopped it first.
    pub async fn run(&mut self) -> anyhow::Result<GameResult> {
        let state = self.session.snapshot().await?;
        for seat in Player::ALL {
            self.greet(seat, &state).await?;
        }
        log::info!("both seats connected, game starting");

        let mut expected_seq = [0u64; 2];
        let mut plies = 0u32;
        loop {
            let state = self.session.snapshot().await?;
            if state.result.is_over() {
                return Ok(state.result);
            }
            if self.max_plies.is_some_and(|max| plies >= max) {
                log::info!("ply limit {} reached, closing session", plies);
                self.shutdown("ply limit reached").await?;
                return Ok(GameResult::InProgress);
            }

            let mover = state.current_player;
            let (seq, mut request) = match self.seat(mover).recv().await? {
                Message::Move {
                    version,
                    seq,
                    request,
                } if version == PROTOCOL_VERSION => (seq, request),
                Message::Move { version, .. } => {
                    return Err(anyhow::anyhow!(
                        "Protocol version mismatch in Move from seat {}: expected {}, got {}",
                        mover,
                        PROTOCOL_VERSION,
                        version
                    ))
                }
                other => {
                    return Err(anyhow::anyhow!(
                        "Expected Move from seat {}, got {:?}",
                        mover,
                        other
                    ))
                }
            };
            let expected = &mut expected_seq[mover.index()];
            if seq != *expected {
                return Err(anyhow::anyhow!(
                    "Out-of-order Move from seat {}: expected seq {}, got {}",
                    mover,
                    expected,
                    seq
                ));
            }
            *expected += 1;

            request.player = mover;
            let outcome = self.session.submit(request).await?;
            let accepted = outcome.accepted;
            let reply = Message::Outcome {
                version: PROTOCOL_VERSION,
                seq,
                mover,
                outcome,
            };
            if accepted {
                plies += 1;
                for seat in Player::ALL {
                    self.seat(seat).send(reply.clone()).await?;
                }
            } else {
                log::info!("seat {} move {} rejected", mover, seq);
                self.seat(mover).send(reply).await?;
            }
        }
    }
}
