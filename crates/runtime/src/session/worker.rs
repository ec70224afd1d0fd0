//! The session worker: one task owning the action queue, the connection
//! state machine, and all mutable client state.
//!
//! Receives submissions from [`crate::SessionHandle`], serializes exactly one
//! request to the server at a time, and replays authoritative command lists
//! in order. Server-pushed stream messages and request responses arrive
//! through the same inbox, so effect ordering is message-granular by
//! construction.

use std::collections::VecDeque;
use std::sync::Arc;

use protocol::{Action, ActionTag, CommandList, GameRequest, StandardAction};
use scene::{Animator, AssetStore};
use tokio::sync::{mpsc, oneshot};
use tokio::time::MissedTickBehavior;
use tracing::{debug, error, warn};

use crate::api::{
    Capabilities, GameService, Result, ServiceError, Snapshot,
};
use crate::events::{ActionEvent, ConnectionEvent, EventBus, SessionEvent};
use crate::session::executor::{self, Collaborators};
use crate::session::state::ClientState;
use crate::session::{immediate, optimistic, SessionConfig};

/// Commands sent from handles to the worker.
pub(crate) enum SessionCommand {
    Submit { action: Action },
    Snapshot { reply: oneshot::Sender<Snapshot> },
}

/// Messages arriving from spawned I/O tasks.
enum Inbound {
    /// The in-flight request completed.
    Response(std::result::Result<CommandList, ServiceError>),
    /// A connect attempt finished.
    Connected(std::result::Result<crate::api::CommandStream, ServiceError>),
    /// The connect stream delivered a message.
    Stream(CommandList),
    /// The connect stream ended or faulted.
    StreamClosed { error: Option<String> },
}

pub(crate) struct SessionWorker {
    config: SessionConfig,
    service: Arc<dyn GameService>,
    animator: Arc<dyn Animator>,
    assets: Arc<dyn AssetStore>,
    capabilities: Arc<dyn Capabilities>,
    events: EventBus,
    command_rx: mpsc::Receiver<SessionCommand>,
    inbound_tx: mpsc::Sender<Inbound>,
    inbound_rx: mpsc::Receiver<Inbound>,
    state: ClientState,
    queue: VecDeque<Action>,
    /// Tag of the action whose request/response cycle is in flight, if any.
    in_flight: Option<ActionTag>,
    /// A connect attempt is outstanding; suppresses duplicate attempts from
    /// the poll timer.
    connect_pending: bool,
}

impl SessionWorker {
    pub fn new(
        config: SessionConfig,
        service: Arc<dyn GameService>,
        animator: Arc<dyn Animator>,
        assets: Arc<dyn AssetStore>,
        capabilities: Arc<dyn Capabilities>,
        events: EventBus,
        command_rx: mpsc::Receiver<SessionCommand>,
    ) -> Self {
        let (inbound_tx, inbound_rx) = mpsc::channel(config.command_buffer);
        Self {
            config,
            service,
            animator,
            assets,
            capabilities,
            events,
            command_rx,
            inbound_tx,
            inbound_rx,
            state: ClientState::new(),
            queue: VecDeque::new(),
            in_flight: None,
            connect_pending: false,
        }
    }

    /// Main worker loop. Exits when every handle has been dropped.
    pub async fn run(mut self) {
        self.start_connect();

        let mut poll = tokio::time::interval(self.config.reconnect_poll);
        poll.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                command = self.command_rx.recv() => match command {
                    Some(command) => self.handle_command(command).await,
                    None => break,
                },
                Some(inbound) = self.inbound_rx.recv() => self.handle_inbound(inbound).await,
                _ = poll.tick() => self.poll_reconnect(),
            }
            self.pump().await;
        }
    }

    async fn handle_command(&mut self, command: SessionCommand) {
        match command {
            SessionCommand::Submit { action } => self.submit(action).await,
            SessionCommand::Snapshot { reply } => {
                if reply.send(self.snapshot()).is_err() {
                    debug!("snapshot reply channel closed (caller dropped)");
                }
            }
        }
    }

    /// Accepts or rejects a submitted action.
    async fn submit(&mut self, action: Action) {
        let tag = action.tag();

        if !self.capabilities.can_execute(tag, &self.state.capability_context()) {
            debug!(
                target: "runtime::session",
                %tag,
                "capability check failed, action dropped"
            );
            self.publish_action(ActionEvent::Rejected { tag });
            return;
        }

        // Immediate responses (panel toggles) apply synchronously; they must
        // never wait on animation or the network.
        if let Action::Standard(StandardAction { update: Some(update), .. }) = &action {
            let commands = immediate::immediate(update);
            if !commands.is_empty()
                && let Err(error) = self.execute_commands(&commands).await
            {
                error!(
                    target: "runtime::session",
                    error = %error,
                    "immediate update failed"
                );
            }
        }

        if self.in_flight.is_some() && tag == ActionTag::Standard {
            debug!(
                target: "runtime::session",
                "standard action submitted while request in flight, dropped"
            );
            self.publish_action(ActionEvent::Dropped { tag });
            return;
        }

        self.queue.push_back(action);
        self.publish_action(ActionEvent::Queued { tag });
    }

    /// Starts processing the next queued action if nothing is in flight.
    async fn pump(&mut self) {
        if self.in_flight.is_some() {
            return;
        }
        let Some(action) = self.queue.pop_front() else { return };
        let tag = action.tag();

        if let Err(error) = self.process(action).await {
            // Precondition failures halt only this action; the queue and the
            // in-flight flag stay consistent.
            error!(
                target: "runtime::session",
                %tag,
                error = %error,
                "action processing failed"
            );
            self.publish_action(ActionEvent::Failed { tag, error: error.to_string() });
        }
    }

    async fn process(&mut self, action: Action) -> Result<()> {
        let tag = action.tag();

        // Predict before anything is transmitted: precondition failures
        // (e.g. a room-targeted play with no room id) halt the action here.
        let update = optimistic::predict(&mut self.state, &action)?;

        let local = matches!(&action, Action::Standard(standard) if standard.is_local());
        if !local {
            let request = GameRequest {
                action,
                player_id: self.config.player_id,
                game_id: self.config.game_id,
                open_panels: self.state.open_panels.clone(),
            };

            self.in_flight = Some(tag);
            let service = Arc::clone(&self.service);
            let inbound_tx = self.inbound_tx.clone();
            tokio::spawn(async move {
                let result = service.perform_action(request).await;
                let _ = inbound_tx.send(Inbound::Response(result)).await;
            });
        }

        // The optimistic update plays out while the request is in flight;
        // the response cannot interleave because this worker only reads its
        // inbox between steps.
        if let Some(update) = update {
            self.execute_commands(&update.commands).await?;
        }

        if local {
            // Pure local UI action: no network round trip.
            self.publish_action(ActionEvent::Resolved { tag });
        }
        Ok(())
    }

    async fn handle_inbound(&mut self, inbound: Inbound) {
        match inbound {
            Inbound::Response(Ok(list)) => {
                let tag = self.in_flight.take();
                match self.execute_commands(&list.commands).await {
                    Ok(()) => {
                        if let Some(tag) = tag {
                            self.publish_action(ActionEvent::Resolved { tag });
                        }
                    }
                    Err(error) => {
                        error!(
                            target: "runtime::session",
                            error = %error,
                            "response command execution failed"
                        );
                        if let Some(tag) = tag {
                            self.publish_action(ActionEvent::Failed {
                                tag,
                                error: error.to_string(),
                            });
                        }
                    }
                }
            }
            Inbound::Response(Err(error)) => {
                self.in_flight = None;
                if !self.config.quiet_errors {
                    warn!(
                        target: "runtime::session",
                        error = %error,
                        "action request failed, scheduling reconnect"
                    );
                }
                // The optimistic update stands; only the connection recovers.
                self.fault(error.to_string());
            }
            Inbound::Connected(Ok(stream)) => {
                self.connect_pending = false;
                self.state.flags.needs_reconnect = false;
                self.events
                    .publish(SessionEvent::Connection(ConnectionEvent::Streaming));
                self.spawn_stream_forwarder(stream);
            }
            Inbound::Connected(Err(error)) => {
                self.connect_pending = false;
                warn!(
                    target: "runtime::session",
                    error = %error,
                    "connect attempt failed"
                );
                self.fault(error.to_string());
            }
            Inbound::Stream(list) => {
                let was_faulted = self.state.flags.loading;
                self.state.flags.needs_reconnect = false;
                self.state.flags.loading = false;
                if was_faulted {
                    self.events
                        .publish(SessionEvent::Connection(ConnectionEvent::Recovered));
                }

                if let Err(error) = self.execute_commands(&list.commands).await {
                    error!(
                        target: "runtime::session",
                        error = %error,
                        "stream command execution failed"
                    );
                }

                // Refresh any panels the user has open, through the normal
                // action pipeline. Queued directly: internal refreshes are
                // exempt from the standard-action drop rule.
                if !self.state.open_panels.is_empty() {
                    self.queue.push_back(refresh_panels_action());
                }
            }
            Inbound::StreamClosed { error } => {
                warn!(
                    target: "runtime::session",
                    error = error.as_deref().unwrap_or("stream ended"),
                    "connect stream closed"
                );
                self.fault(error.unwrap_or_else(|| "stream ended".to_string()));
            }
        }
    }

    /// Enters the faulted state: the loading indicator turns on and the poll
    /// timer takes over reconnection.
    fn fault(&mut self, error: String) {
        self.state.flags.needs_reconnect = true;
        self.state.flags.loading = true;
        self.events
            .publish(SessionEvent::Connection(ConnectionEvent::Faulted { error }));
    }

    /// The sole retry mechanism: a fixed-period poll that re-invokes connect
    /// while the reconnect flag is set. Unbounded, no backoff.
    fn poll_reconnect(&mut self) {
        if self.state.flags.needs_reconnect && !self.connect_pending {
            self.start_connect();
        }
    }

    fn start_connect(&mut self) {
        if self.connect_pending {
            return;
        }
        self.connect_pending = true;

        let service = Arc::clone(&self.service);
        let inbound_tx = self.inbound_tx.clone();
        let player_id = self.config.player_id;
        tokio::spawn(async move {
            let result = service.connect(player_id).await;
            let _ = inbound_tx.send(Inbound::Connected(result)).await;
        });
    }

    /// Pipes stream messages into the worker inbox until the stream ends.
    fn spawn_stream_forwarder(&self, mut stream: crate::api::CommandStream) {
        let inbound_tx = self.inbound_tx.clone();
        tokio::spawn(async move {
            while let Some(message) = stream.recv().await {
                let inbound = match message {
                    Ok(list) => Inbound::Stream(list),
                    Err(error) => {
                        let _ = inbound_tx
                            .send(Inbound::StreamClosed { error: Some(error.to_string()) })
                            .await;
                        return;
                    }
                };
                if inbound_tx.send(inbound).await.is_err() {
                    return;
                }
            }
            let _ = inbound_tx.send(Inbound::StreamClosed { error: None }).await;
        });
    }

    async fn execute_commands(&mut self, commands: &[protocol::Command]) -> Result<()> {
        let collaborators = Collaborators {
            animator: self.animator.as_ref(),
            assets: self.assets.as_ref(),
            events: &self.events,
        };
        executor::execute_all(&mut self.state, &collaborators, commands).await
    }

    fn publish_action(&self, event: ActionEvent) {
        self.events.publish(SessionEvent::Action(event));
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            user: self.state.user.clone(),
            opponent: self.state.opponent.clone(),
            raid_active: self.state.raid_active,
            positions: self
                .state
                .scene
                .objects()
                .map(|displayable| (displayable.id, displayable.position.clone()))
                .collect(),
            main_controls: self.state.main_controls.clone(),
            panels: self.state.panels.clone(),
            open_panels: self.state.open_panels.clone(),
            queue_length: self.queue.len(),
            request_in_flight: self.in_flight.is_some(),
            needs_reconnect: self.state.flags.needs_reconnect,
            loading: self.state.flags.loading,
        }
    }
}

/// The internal standard action enqueued after stream messages to refresh
/// open panel contents.
fn refresh_panels_action() -> Action {
    Action::Standard(StandardAction {
        payload: Some(serde_json::json!({ "refresh_panels": true })),
        update: None,
    })
}
