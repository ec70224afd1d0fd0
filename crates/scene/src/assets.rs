//! The asset resolution collaborator seam.

use std::collections::HashMap;
use std::hash::{DefaultHasher, Hash, Hasher};

use protocol::{ProjectileAddress, SpriteAddress};

use crate::error::{Result, SceneError};

/// Handle to a loaded sprite asset. Opaque to the core; the rendering layer
/// maps it back to engine resources.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SpriteHandle(pub u64);

/// Handle to a loaded projectile effect asset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ProjectileHandle(pub u64);

/// Resolves opaque address strings to renderable assets. Pure lookup; the
/// core depends on nothing beyond successful resolution.
pub trait AssetStore: Send + Sync {
    fn sprite(&self, address: &SpriteAddress) -> Result<SpriteHandle>;

    fn projectile(&self, address: &ProjectileAddress) -> Result<ProjectileHandle>;
}

/// Fixed lookup table. Addresses not registered ahead of time fail to
/// resolve.
#[derive(Clone, Debug, Default)]
pub struct StaticAssets {
    sprites: HashMap<SpriteAddress, SpriteHandle>,
    projectiles: HashMap<ProjectileAddress, ProjectileHandle>,
}

impl StaticAssets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sprite(mut self, address: SpriteAddress, handle: SpriteHandle) -> Self {
        self.sprites.insert(address, handle);
        self
    }

    pub fn with_projectile(mut self, address: ProjectileAddress, handle: ProjectileHandle) -> Self {
        self.projectiles.insert(address, handle);
        self
    }
}

impl AssetStore for StaticAssets {
    fn sprite(&self, address: &SpriteAddress) -> Result<SpriteHandle> {
        self.sprites
            .get(address)
            .copied()
            .ok_or_else(|| SceneError::MissingSprite(address.clone()))
    }

    fn projectile(&self, address: &ProjectileAddress) -> Result<ProjectileHandle> {
        self.projectiles
            .get(address)
            .copied()
            .ok_or_else(|| SceneError::MissingProjectile(address.clone()))
    }
}

/// Derives handles from the address itself, so every address resolves. The
/// rendering layer performs the real (lazy) load keyed by the same hash; this
/// matches engines whose addressable lookups cannot fail until draw time.
#[derive(Clone, Copy, Debug, Default)]
pub struct PassthroughAssets;

impl PassthroughAssets {
    fn digest(value: &str) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }
}

impl AssetStore for PassthroughAssets {
    fn sprite(&self, address: &SpriteAddress) -> Result<SpriteHandle> {
        Ok(SpriteHandle(Self::digest(&address.0)))
    }

    fn projectile(&self, address: &ProjectileAddress) -> Result<ProjectileHandle> {
        Ok(ProjectileHandle(Self::digest(&address.0)))
    }
}
