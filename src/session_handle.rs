//! Per-session actor that serializes access to one [`Session`].
//!
//! Every submission travels through a single queue and is validated and
//! applied by the task that owns the session, so two connections can never
//! mutate the same board concurrently. Separate sessions get separate actors.

use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

use crate::game::{GameState, MoveOutcome, Session};
use crate::rules::MoveRequest;

const QUEUE_DEPTH: usize = 32;

enum Command {
    Submit {
        request: MoveRequest,
        reply: oneshot::Sender<MoveOutcome>,
    },
    Snapshot {
        reply: oneshot::Sender<GameState>,
    },
}

/// Cloneable handle to a running session actor.
#[derive(Clone)]
pub struct SessionHandle {
    tx: mpsc::Sender<Command>,
}

impl SessionHandle {
    /// Move `session` onto its own task. The task ends, returning the
    /// session, once every handle has been dropped.
    pub fn spawn(session: Session) -> (Self, JoinHandle<Session>) {
        let (tx, rx) = mpsc::channel(QUEUE_DEPTH);
        let task = tokio::spawn(run(session, rx));
        (Self { tx }, task)
    }

    /// Submit a move; outcomes are produced in the order submissions arrive.
    pub async fn submit(&self, request: MoveRequest) -> anyhow::Result<MoveOutcome> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(Command::Submit { request, reply })
            .await
            .map_err(|_| anyhow::anyhow!("Session closed"))?;
        rx.await.map_err(|_| anyhow::anyhow!("Session closed"))
    }

    /// Current snapshot of the session.
    pub async fn snapshot(&self) -> anyhow::Result<GameState> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(Command::Snapshot { reply })
            .await
            .map_err(|_| anyhow::anyhow!("Session closed"))?;
        rx.await.map_err(|_| anyhow::anyhow!("Session closed"))
    }
}

async fn run(mut session: Session, mut rx: mpsc::Receiver<Command>) -> Session {
    while let Some(cmd) = rx.recv().await {
        match cmd {
            Command::Submit { request, reply } => {
                let outcome = session.submit_move(&request);
                // caller may have given up waiting
                let _ = reply.send(outcome);
            }
            Command::Snapshot { reply } => {
                let _ = reply.send(session.state());
            }
        }
    }
    session
}
