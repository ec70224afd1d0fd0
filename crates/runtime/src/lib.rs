//! Session orchestration for the client synchronization core.
//!
//! This crate wires the protocol vocabulary, the live element hierarchy, and
//! the scene into a single session worker behind a cloneable
//! [`SessionHandle`]. Consumers submit actions, subscribe to events, and
//! query snapshots; the worker serializes requests to the server, applies
//! optimistic updates, and replays authoritative command lists in order.
//!
//! Modules are organized by responsibility:
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides the topic-based event bus
//! - [`session`] keeps the worker task internal to the crate

pub mod api;
pub mod events;
pub mod session;

pub use api::{
    Capabilities, CapabilityContext, CommandStream, GameService, Result, ServiceError,
    SessionError, SessionHandle, Snapshot, TurnCapabilities,
};
pub use events::{ActionEvent, ConnectionEvent, EventBus, InterfaceEvent, SessionEvent, Topic};
pub use session::{Session, SessionConfig};
