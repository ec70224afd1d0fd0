//! Event types for each topic.

use protocol::{ActionTag, PanelAddress};

use crate::events::bus::Topic;

/// Events describing the action pipeline.
#[derive(Clone, Debug)]
pub enum ActionEvent {
    /// The capability check failed; the action was logged and discarded.
    Rejected { tag: ActionTag },
    /// A standard action arrived while a request was in flight and was
    /// discarded to avoid compounding optimistic-update races.
    Dropped { tag: ActionTag },
    /// The action joined the queue.
    Queued { tag: ActionTag },
    /// The action's full request/response/command cycle finished.
    Resolved { tag: ActionTag },
    /// The action halted on a precondition or command-execution failure.
    Failed { tag: ActionTag, error: String },
}

/// Events describing the connect stream.
#[derive(Clone, Debug)]
pub enum ConnectionEvent {
    /// The stream is open and messages are flowing.
    Streaming,
    /// The stream or a request failed; reconnection is pending.
    Faulted { error: String },
    /// A stream message was delivered after a fault.
    Recovered,
}

/// Events describing interface state.
#[derive(Clone, Debug)]
pub enum InterfaceEvent {
    PanelsChanged { open: Vec<PanelAddress> },
}

/// Event wrapper carrying the typed event for its topic.
#[derive(Clone, Debug)]
pub enum SessionEvent {
    Action(ActionEvent),
    Connection(ConnectionEvent),
    Interface(InterfaceEvent),
}

impl SessionEvent {
    pub fn topic(&self) -> Topic {
        match self {
            SessionEvent::Action(_) => Topic::Action,
            SessionEvent::Connection(_) => Topic::Connection,
            SessionEvent::Interface(_) => Topic::Interface,
        }
    }
}
