//! A time-paced animator for headless runs.

use std::time::Duration;

use async_trait::async_trait;
use protocol::{GameObjectId, ObjectPosition, PlayerName, RoomId};
use scene::{Animator, ProjectileHandle};
use tracing::debug;

/// Animator that models effect durations with timed waits, so command
/// pacing in a headless client resembles the rendered game. Every wait
/// resolves fully before returning, preserving the settled-layout contract.
#[derive(Clone, Copy, Debug)]
pub struct PacedAnimator {
    pub move_duration: Duration,
    pub projectile_duration: Duration,
    pub visit_duration: Duration,
}

impl Default for PacedAnimator {
    fn default() -> Self {
        Self {
            move_duration: Duration::from_millis(300),
            projectile_duration: Duration::from_millis(500),
            visit_duration: Duration::from_millis(400),
        }
    }
}

#[async_trait]
impl Animator for PacedAnimator {
    async fn object_moved(&self, id: GameObjectId, destination: &ObjectPosition, animate: bool) {
        if animate {
            tokio::time::sleep(self.move_duration).await;
        }
        debug!(target: "client::animator", ?id, position = ?destination.position, "object settled");
    }

    async fn projectile_fired(
        &self,
        source: GameObjectId,
        target: GameObjectId,
        _projectile: ProjectileHandle,
    ) {
        tokio::time::sleep(self.projectile_duration).await;
        debug!(target: "client::animator", ?source, ?target, "projectile landed");
    }

    async fn room_visited(&self, initiator: PlayerName, room_id: RoomId) {
        tokio::time::sleep(self.visit_duration).await;
        debug!(target: "client::animator", ?initiator, ?room_id, "room visited");
    }

    async fn delay(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
