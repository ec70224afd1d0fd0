//! The session worker and its orchestration.

mod executor;
mod immediate;
mod optimistic;
mod state;
pub(crate) mod worker;

use std::sync::Arc;
use std::time::Duration;

use scene::{Animator, AssetStore};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::api::{Capabilities, GameService, Result, SessionError, SessionHandle};
use crate::events::EventBus;
use protocol::{GameId, PlayerId};

/// Session configuration shared by the orchestrator and the worker.
#[derive(Clone, Debug)]
pub struct SessionConfig {
    pub player_id: PlayerId,
    pub game_id: Option<GameId>,
    /// Capacity of the handle → worker and rpc → worker channels.
    pub command_buffer: usize,
    /// Period of the reconnect poll timer.
    pub reconnect_poll: Duration,
    /// Suppress logging of failed action responses.
    pub quiet_errors: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            player_id: PlayerId(0),
            game_id: None,
            command_buffer: 32,
            reconnect_poll: Duration::from_secs(1),
            quiet_errors: false,
        }
    }
}

/// An active client session: one worker task owning all mutable client state,
/// reached through a cloneable [`SessionHandle`].
pub struct Session {
    handle: SessionHandle,
    worker: JoinHandle<()>,
}

impl Session {
    /// Spawns the session worker and opens the initial server connection.
    pub fn spawn(
        config: SessionConfig,
        service: Arc<dyn GameService>,
        animator: Arc<dyn Animator>,
        assets: Arc<dyn AssetStore>,
        capabilities: Arc<dyn Capabilities>,
    ) -> Self {
        let events = EventBus::new();
        let (command_tx, command_rx) = mpsc::channel(config.command_buffer);
        let handle = SessionHandle::new(command_tx, events.clone());

        let worker = worker::SessionWorker::new(
            config,
            service,
            animator,
            assets,
            capabilities,
            events,
            command_rx,
        );
        let worker = tokio::spawn(worker.run());

        Self { handle, worker }
    }

    /// A cloneable handle to this session.
    pub fn handle(&self) -> SessionHandle {
        self.handle.clone()
    }

    /// Shuts the session down by dropping this owner's handle and waiting for
    /// the worker to drain. Handles cloned elsewhere keep the worker alive
    /// until they are dropped too.
    pub async fn shutdown(self) -> Result<()> {
        drop(self.handle);
        self.worker.await.map_err(SessionError::WorkerJoin)
    }
}
