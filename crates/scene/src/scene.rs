//! The scene facade: registry + layout + the position resolver.

use protocol::{CardId, CardView, GameObjectId, ObjectPosition, Position};
use tracing::debug;

use crate::animator::Animator;
use crate::error::{Result, SceneError};
use crate::layout::GameLayout;
use crate::registry::{Displayable, Registry};

/// Owns every renderable object and the containers they occupy.
///
/// Invariant: each registered object appears in at most one container, and
/// its registry position always names that container (or `Offscreen` for
/// none). All mutation goes through [Scene::move_object] and the
/// create/destroy operations, which maintain this in every exit path.
#[derive(Debug, Default)]
pub struct Scene {
    registry: Registry,
    layout: GameLayout,
}

impl Scene {
    /// A scene with the named deck/hand objects registered offscreen.
    pub fn new() -> Self {
        Self { registry: Registry::with_fixed_objects(), layout: GameLayout::default() }
    }

    /// Registers or refreshes a card from its server view. New cards are
    /// placed into the view's position without animation; existing cards
    /// keep their current placement (moves arrive as explicit commands).
    pub async fn upsert_card(&mut self, animator: &dyn Animator, card: CardView) -> Result<()> {
        let id = GameObjectId::Card(card.id);
        let position = card.position.clone();
        let created = !self.registry.contains(id);
        self.registry.upsert(id, Some(card), position.clone());
        if created {
            self.attach(animator, id, position, false).await?;
        }
        Ok(())
    }

    /// Creates a card at an explicit position, optionally animated. Used by
    /// `CreateCard` commands, which may override the view's own position.
    pub async fn create_card_at(
        &mut self,
        animator: &dyn Animator,
        card: CardView,
        position: ObjectPosition,
        animate: bool,
    ) -> Result<()> {
        let id = GameObjectId::Card(card.id);
        if self.registry.contains(id) {
            self.registry.upsert(id, Some(card), position.clone());
            return self.move_object(animator, id, position, animate).await;
        }
        self.registry.upsert(id, Some(card), position.clone());
        self.attach(animator, id, position, animate).await
    }

    /// Moves an object to a new position: detaches it from its current
    /// container, dispatches to the target container's insert, and awaits the
    /// insertion animation so callers observe a settled layout.
    pub async fn move_object(
        &mut self,
        animator: &dyn Animator,
        id: GameObjectId,
        position: ObjectPosition,
        animate: bool,
    ) -> Result<()> {
        // Validate the destination before detaching, so failed moves leave
        // the object exactly where it was.
        self.layout.container_mut(&position.position)?;

        let current = self.registry.get(id)?.position.position.clone();
        self.detach(id, &current);
        self.attach(animator, id, position, animate).await
    }

    /// Destroys a card, removing it from its container and the registry.
    pub fn destroy_card(&mut self, card_id: CardId) -> Result<()> {
        let id = GameObjectId::Card(card_id);
        let displayable = self.registry.remove(id)?;
        self.detach(id, &displayable.position.position);
        debug!(target: "scene", %card_id, "card destroyed");
        Ok(())
    }

    pub fn object(&self, id: GameObjectId) -> Result<&Displayable> {
        self.registry.get(id)
    }

    pub fn contains(&self, id: GameObjectId) -> bool {
        self.registry.contains(id)
    }

    pub fn card_view(&self, card_id: CardId) -> Result<&CardView> {
        self.registry.get(GameObjectId::Card(card_id))?.card_view()
    }

    pub fn position_of(&self, id: GameObjectId) -> Result<&ObjectPosition> {
        Ok(&self.registry.get(id)?.position)
    }

    /// Children of the container for `position`, in display order. Offscreen
    /// has no container and always reports empty.
    pub fn ids_at(&self, position: &Position) -> Result<Vec<GameObjectId>> {
        Ok(self
            .layout
            .container(position)?
            .map(|display| display.ids())
            .unwrap_or_default())
    }

    pub fn objects(&self) -> impl Iterator<Item = &Displayable> {
        self.registry.iter()
    }

    fn detach(&mut self, id: GameObjectId, position: &Position) {
        // Recorded positions always name supported containers, so this
        // lookup cannot fail for an object the registry tracks.
        if let Ok(Some(container)) = self.layout.container_mut(position) {
            container.remove(id);
        }
    }

    async fn attach(
        &mut self,
        animator: &dyn Animator,
        id: GameObjectId,
        position: ObjectPosition,
        animate: bool,
    ) -> Result<()> {
        match self.layout.container_mut(&position.position)? {
            Some(container) => {
                container.insert(id, &position);
                animator.object_moved(id, &position, animate).await;
            }
            None => {
                // Offscreen: snap to origin, no container membership.
                animator.object_moved(id, &position, false).await;
            }
        }
        self.registry.get_mut(id)?.position = position;
        Ok(())
    }
}
