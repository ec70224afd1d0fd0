//! Position tracking for renderable game objects.
//!
//! The scene owns the [GameObjectId] → [Displayable] registry and the ordered
//! containers objects live in (hands, decks, arena rooms, item slots, the
//! staging area, the raid lineup). Moving an object between containers is the
//! only way it changes position, and every move removes it from its previous
//! parent before inserting into the new one.
//!
//! Rendering and animation are external collaborators behind the [Animator]
//! and [AssetStore] traits; the scene awaits animation completion so callers
//! observe a settled layout.

mod animator;
mod assets;
mod display;
mod error;
mod layout;
mod registry;
mod scene;

pub use animator::{Animator, InstantAnimator};
pub use assets::{AssetStore, PassthroughAssets, ProjectileHandle, SpriteHandle, StaticAssets};
pub use display::ObjectDisplay;
pub use error::{Result, SceneError};
pub use registry::Displayable;
pub use scene::Scene;

pub use protocol::{GameObjectId, ObjectPosition, Position};
