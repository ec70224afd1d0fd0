//! Session builder with dependency injection.

use std::sync::Arc;

use anyhow::{Result, bail};
use runtime::{Capabilities, GameService, Session, TurnCapabilities};
use scene::{Animator, AssetStore, InstantAnimator, PassthroughAssets};

use crate::config::ClientConfig;
use crate::offline::OfflineService;

/// Builds a [`Session`] from configuration plus injected collaborators.
///
/// The service is required unless offline mode is configured, in which case
/// the built-in [`OfflineService`] fills in. Animator, assets, and
/// capabilities default to the instant/permissive/turn-rule implementations.
#[derive(Default)]
pub struct ClientBuilder {
    config: Option<ClientConfig>,
    service: Option<Arc<dyn GameService>>,
    animator: Option<Arc<dyn Animator>>,
    assets: Option<Arc<dyn AssetStore>>,
    capabilities: Option<Arc<dyn Capabilities>>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the transport to the remote game server.
    pub fn service(mut self, service: impl GameService + 'static) -> Self {
        self.service = Some(Arc::new(service));
        self
    }

    /// Set the rendering/animation collaborator.
    pub fn animator(mut self, animator: impl Animator + 'static) -> Self {
        self.animator = Some(Arc::new(animator));
        self
    }

    /// Set the asset resolution collaborator.
    pub fn assets(mut self, assets: impl AssetStore + 'static) -> Self {
        self.assets = Some(Arc::new(assets));
        self
    }

    /// Set the action capability rules.
    pub fn capabilities(mut self, capabilities: impl Capabilities + 'static) -> Self {
        self.capabilities = Some(Arc::new(capabilities));
        self
    }

    /// Spawns the session worker and opens the initial connection.
    pub fn build(self) -> Result<Session> {
        let config = self.config.unwrap_or_else(ClientConfig::from_env);

        let service = match self.service {
            Some(service) => service,
            None if config.offline => Arc::new(OfflineService::new()),
            None => bail!(
                "a game service is required: inject one with .service() or set \
                 SPELLDAWN_OFFLINE for the built-in offline service"
            ),
        };

        let animator = self.animator.unwrap_or_else(|| Arc::new(InstantAnimator));
        let assets = self.assets.unwrap_or_else(|| Arc::new(PassthroughAssets));
        let capabilities = self
            .capabilities
            .unwrap_or_else(|| Arc::new(TurnCapabilities));

        Ok(Session::spawn(
            config.session_config(),
            service,
            animator,
            assets,
            capabilities,
        ))
    }
}
