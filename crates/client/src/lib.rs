//! Composition root for the Spelldawn client core.
//!
//! Assembles a [`runtime::Session`] from configuration: picks the game
//! service (a remote transport injected by the embedding layer, or the
//! built-in [`OfflineService`]), the animator, the asset store, and the
//! capability rules. The rendering engine embeds this crate and supplies its
//! own collaborators; the `spelldawn` binary wires the offline service to a
//! paced animator for headless runs.

pub mod animator;
pub mod builder;
pub mod config;
pub mod logging;
pub mod offline;

pub use animator::PacedAnimator;
pub use builder::ClientBuilder;
pub use config::ClientConfig;
pub use offline::OfflineService;
