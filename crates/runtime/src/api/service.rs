//! The outbound RPC seam.

use async_trait::async_trait;
use protocol::{CommandList, GameRequest, PlayerId};
use thiserror::Error;
use tokio::sync::mpsc;

/// Server-pushed messages on the long-lived connect stream. Each item is
/// either a command list to execute or a stream-level fault; the channel
/// closing means the stream ended.
pub type CommandStream = mpsc::Receiver<Result<CommandList, ServiceError>>;

/// Failures crossing the RPC boundary. These never propagate past the
/// connection state machine; they set the reconnect flag instead.
#[derive(Clone, Debug, Error)]
pub enum ServiceError {
    #[error("transport failure: {0}")]
    Transport(String),

    /// The server answered with a non-OK status.
    #[error("server returned status {code}: {message}")]
    Status { code: u32, message: String },
}

/// The remote game server, reduced to the two calls the core needs: a
/// streaming connect and a request/response action call. Transport and
/// compression details live behind this trait; the at-most-one-open-request
/// invariant is enforced on this side of it.
#[async_trait]
pub trait GameService: Send + Sync {
    /// Opens the long-lived command stream for `player_id`.
    async fn connect(&self, player_id: PlayerId) -> Result<CommandStream, ServiceError>;

    /// Performs one action and returns the authoritative command list.
    async fn perform_action(&self, request: GameRequest) -> Result<CommandList, ServiceError>;
}
