//! Public session API surface.
//!
//! This module gathers the types exposed to consumers of the runtime crate so
//! other layers can stay focused on the worker internals.

pub mod capability;
pub mod errors;
pub mod handle;
pub mod service;
pub mod snapshot;

pub use capability::{Capabilities, CapabilityContext, TurnCapabilities};
pub use errors::{Result, SessionError};
pub use handle::SessionHandle;
pub use service::{CommandStream, GameService, ServiceError};
pub use snapshot::Snapshot;
