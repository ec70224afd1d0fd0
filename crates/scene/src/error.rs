//! Scene error taxonomy.

use protocol::{GameObjectId, Position, ProjectileAddress, SpriteAddress};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SceneError>;

#[derive(Debug, Error)]
pub enum SceneError {
    /// Lookup on an id the registry has never seen. Callers are expected to
    /// create objects before referencing them, so this is a precondition
    /// failure rather than a recoverable state.
    #[error("unknown game object {0:?}")]
    UnknownObject(GameObjectId),

    /// Position variants the client does not place objects into yet. These
    /// fail loudly to signal incomplete coverage instead of silently
    /// dropping the move.
    #[error("object position {0:?} is not supported yet")]
    UnsupportedPosition(Position),

    /// A room-slot position reached placement without a concrete room id.
    #[error("no room id target provided")]
    UnspecifiedRoom,

    /// The object has no card view attached (e.g. a deck or hand container
    /// was used where a card was required).
    #[error("{0:?} is not a card")]
    NotACard(GameObjectId),

    #[error("sprite asset not found: {}", (.0).0)]
    MissingSprite(SpriteAddress),

    #[error("projectile asset not found: {}", (.0).0)]
    MissingProjectile(ProjectileAddress),
}
