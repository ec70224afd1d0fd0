//! Topic-based session events.

mod bus;
mod types;

pub use bus::{EventBus, Topic};
pub use types::{ActionEvent, ConnectionEvent, InterfaceEvent, SessionEvent};
