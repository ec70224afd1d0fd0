//! The fixed set of on-screen containers.

use std::collections::BTreeMap;

use protocol::{ItemSlot, PlayerName, Position, RoomId, RoomLocation};

use crate::display::ObjectDisplay;
use crate::error::{Result, SceneError};

#[derive(Clone, Debug, Default)]
struct PlayerPair<T> {
    user: T,
    opponent: T,
}

impl<T> PlayerPair<T> {
    fn get(&self, owner: PlayerName) -> &T {
        match owner {
            PlayerName::User => &self.user,
            PlayerName::Opponent => &self.opponent,
        }
    }

    fn get_mut(&mut self, owner: PlayerName) -> &mut T {
        match owner {
            PlayerName::User => &mut self.user,
            PlayerName::Opponent => &mut self.opponent,
        }
    }
}

#[derive(Clone, Debug, Default)]
struct RoomDisplay {
    front: ObjectDisplay,
    back: ObjectDisplay,
}

#[derive(Clone, Debug, Default)]
struct ItemSlots {
    left: ObjectDisplay,
    right: ObjectDisplay,
}

/// Every container an object can occupy. Exactly one container corresponds to
/// each supported [Position] variant; `Offscreen` corresponds to none.
#[derive(Clone, Debug, Default)]
pub(crate) struct GameLayout {
    hands: PlayerPair<ObjectDisplay>,
    decks: PlayerPair<ObjectDisplay>,
    rooms: BTreeMap<RoomId, RoomDisplay>,
    items: ItemSlots,
    staging: ObjectDisplay,
    raid: ObjectDisplay,
}

impl GameLayout {
    /// Resolves a position to its container. `Ok(None)` is the terminal
    /// offscreen placement; unsupported variants and unspecified rooms are
    /// hard errors.
    pub fn container_mut(&mut self, position: &Position) -> Result<Option<&mut ObjectDisplay>> {
        Ok(match position {
            Position::Offscreen => None,
            Position::Hand { owner } => Some(self.hands.get_mut(*owner)),
            Position::Deck { owner } => Some(self.decks.get_mut(*owner)),
            Position::Room { room_id: Some(room_id), location } => {
                let room = self.rooms.entry(*room_id).or_default();
                Some(match location {
                    RoomLocation::Front => &mut room.front,
                    RoomLocation::Back => &mut room.back,
                })
            }
            Position::Room { room_id: None, .. } => return Err(SceneError::UnspecifiedRoom),
            Position::Item { slot } => Some(match slot {
                ItemSlot::Left => &mut self.items.left,
                ItemSlot::Right => &mut self.items.right,
            }),
            Position::Staging => Some(&mut self.staging),
            Position::Raid => Some(&mut self.raid),
            Position::Discard { .. } | Position::Scored { .. } | Position::Browser => {
                return Err(SceneError::UnsupportedPosition(position.clone()));
            }
        })
    }

    /// Read-only container lookup for snapshots and assertions.
    pub fn container(&self, position: &Position) -> Result<Option<&ObjectDisplay>> {
        Ok(match position {
            Position::Offscreen => None,
            Position::Hand { owner } => Some(self.hands.get(*owner)),
            Position::Deck { owner } => Some(self.decks.get(*owner)),
            Position::Room { room_id: Some(room_id), location } => {
                self.rooms.get(room_id).map(|room| match location {
                    RoomLocation::Front => &room.front,
                    RoomLocation::Back => &room.back,
                })
            }
            Position::Room { room_id: None, .. } => return Err(SceneError::UnspecifiedRoom),
            Position::Item { slot } => Some(match slot {
                ItemSlot::Left => &self.items.left,
                ItemSlot::Right => &self.items.right,
            }),
            Position::Staging => Some(&self.staging),
            Position::Raid => Some(&self.raid),
            Position::Discard { .. } | Position::Scored { .. } | Position::Browser => {
                return Err(SceneError::UnsupportedPosition(position.clone()));
            }
        })
    }
}
