//! The live-object registry.

use std::collections::HashMap;

use protocol::{CardView, GameObjectId, ObjectPosition, PlayerName, Position};

use crate::error::{Result, SceneError};

/// A renderable entity participating in position tracking. Cards carry their
/// server-described view; the named deck/hand objects do not.
#[derive(Clone, Debug)]
pub struct Displayable {
    pub id: GameObjectId,
    pub position: ObjectPosition,
    pub card: Option<CardView>,
}

impl Displayable {
    pub fn card_view(&self) -> Result<&CardView> {
        self.card.as_ref().ok_or(SceneError::NotACard(self.id))
    }
}

/// Maps [GameObjectId] to its live [Displayable]. Lookups on a missing id are
/// precondition failures surfaced as [SceneError::UnknownObject].
#[derive(Clone, Debug, Default)]
pub(crate) struct Registry {
    objects: HashMap<GameObjectId, Displayable>,
}

impl Registry {
    /// Creates a registry pre-populated with the named non-card objects
    /// (each player's deck and hand markers), parked offscreen.
    pub fn with_fixed_objects() -> Self {
        let mut registry = Self::default();
        for owner in [PlayerName::User, PlayerName::Opponent] {
            for id in [GameObjectId::Deck(owner), GameObjectId::Hand(owner)] {
                registry.objects.insert(
                    id,
                    Displayable {
                        id,
                        position: ObjectPosition::new(Position::Offscreen),
                        card: None,
                    },
                );
            }
        }
        registry
    }

    pub fn get(&self, id: GameObjectId) -> Result<&Displayable> {
        self.objects.get(&id).ok_or(SceneError::UnknownObject(id))
    }

    pub fn get_mut(&mut self, id: GameObjectId) -> Result<&mut Displayable> {
        self.objects.get_mut(&id).ok_or(SceneError::UnknownObject(id))
    }

    pub fn contains(&self, id: GameObjectId) -> bool {
        self.objects.contains_key(&id)
    }

    /// Registers or refreshes an object. Existing objects keep their current
    /// position; new objects start at the provided one.
    pub fn upsert(&mut self, id: GameObjectId, card: Option<CardView>, position: ObjectPosition) {
        match self.objects.entry(id) {
            std::collections::hash_map::Entry::Occupied(mut entry) => {
                entry.get_mut().card = card;
            }
            std::collections::hash_map::Entry::Vacant(entry) => {
                entry.insert(Displayable { id, position, card });
            }
        }
    }

    pub fn remove(&mut self, id: GameObjectId) -> Result<Displayable> {
        self.objects.remove(&id).ok_or(SceneError::UnknownObject(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Displayable> {
        self.objects.values()
    }
}
