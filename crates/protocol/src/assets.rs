//! Opaque asset addresses resolved by the client's asset collaborator.

use serde::{Deserialize, Serialize};

/// Address of a sprite asset. The client treats this as an opaque lookup key;
/// resolution happens in the asset store.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpriteAddress(pub String);

impl SpriteAddress {
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }
}

/// Address of a projectile effect asset.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectileAddress(pub String);

impl ProjectileAddress {
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }
}
