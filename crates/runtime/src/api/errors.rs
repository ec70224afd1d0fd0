//! Unified error types surfaced by the session API.
//!
//! Wraps failures from worker coordination, the scene, and the game service
//! so clients can bubble them up with consistent context.

use protocol::CardId;
use thiserror::Error;
use tokio::sync::oneshot;

pub use crate::api::service::ServiceError;
pub use scene::SceneError;

pub type Result<T> = std::result::Result<T, SessionError>;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session worker command channel closed")]
    CommandChannelClosed,

    #[error("session worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("session worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    /// A room-targeted card play arrived without a room id target.
    #[error("no room id target provided for {card_id}")]
    NoRoomTarget { card_id: CardId },

    #[error(transparent)]
    Scene(#[from] SceneError),

    #[error(transparent)]
    Service(#[from] ServiceError),
}
