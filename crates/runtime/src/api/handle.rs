//! Cloneable façade for interacting with the session worker.
//!
//! [`SessionHandle`] hides channel plumbing and offers async helpers for
//! submitting actions, querying snapshots, and subscribing to events.

use protocol::Action;
use tokio::sync::{broadcast, mpsc, oneshot};

use crate::api::errors::{Result, SessionError};
use crate::api::snapshot::Snapshot;
use crate::events::{EventBus, SessionEvent, Topic};
use crate::session::worker::SessionCommand;

/// Client-facing handle to an active session.
#[derive(Clone)]
pub struct SessionHandle {
    command_tx: mpsc::Sender<SessionCommand>,
    events: EventBus,
}

impl SessionHandle {
    pub(crate) fn new(command_tx: mpsc::Sender<SessionCommand>, events: EventBus) -> Self {
        Self { command_tx, events }
    }

    /// Submits a user action. Acceptance is not acknowledged here: capability
    /// denials and in-flight drops are silent toward the user and surface
    /// only as [`Topic::Action`] events.
    pub async fn submit(&self, action: Action) -> Result<()> {
        self.command_tx
            .send(SessionCommand::Submit { action })
            .await
            .map_err(|_| SessionError::CommandChannelClosed)
    }

    /// Queries a point-in-time snapshot of the session's visual state.
    pub async fn snapshot(&self) -> Result<Snapshot> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(SessionCommand::Snapshot { reply: reply_tx })
            .await
            .map_err(|_| SessionError::CommandChannelClosed)?;

        reply_rx.await.map_err(SessionError::ReplyChannelClosed)
    }

    /// Subscribe to events from a specific topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe(topic)
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }
}
