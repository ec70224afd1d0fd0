//! The rendering/animation collaborator seam.

use std::time::Duration;

use async_trait::async_trait;
use protocol::{GameObjectId, ObjectPosition, PlayerName, RoomId};

use crate::assets::ProjectileHandle;

/// Drives visual effects for scene mutations. Every method resolves only once
/// the effect has fully settled; callers rely on this to guarantee that
/// subsequent commands observe a stable layout.
#[async_trait]
pub trait Animator: Send + Sync {
    /// An object arrived at `destination`. With `animate` set the
    /// implementation may tween it there; without, it snaps.
    async fn object_moved(&self, id: GameObjectId, destination: &ObjectPosition, animate: bool);

    /// Fires a resolved projectile asset from `source` to `target`.
    async fn projectile_fired(
        &self,
        source: GameObjectId,
        target: GameObjectId,
        projectile: ProjectileHandle,
    );

    /// Plays the camera/highlight effect for a player visiting a room.
    async fn room_visited(&self, initiator: PlayerName, room_id: RoomId);

    /// Pauses the command script for pacing between effects.
    async fn delay(&self, duration: Duration);
}

/// Animator that completes every effect immediately. Used in offline mode and
/// in tests, where layout correctness matters but pacing does not.
#[derive(Clone, Copy, Debug, Default)]
pub struct InstantAnimator;

#[async_trait]
impl Animator for InstantAnimator {
    async fn object_moved(&self, _id: GameObjectId, _destination: &ObjectPosition, _animate: bool) {}

    async fn projectile_fired(
        &self,
        _source: GameObjectId,
        _target: GameObjectId,
        _projectile: ProjectileHandle,
    ) {
    }

    async fn room_visited(&self, _initiator: PlayerName, _room_id: RoomId) {}

    async fn delay(&self, _duration: Duration) {}
}
