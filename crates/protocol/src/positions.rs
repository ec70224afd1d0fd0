//! Abstract descriptions of where a renderable object belongs on screen.

use serde::{Deserialize, Serialize};

use crate::ids::{PlayerName, RoomId};

/// Which row of a room a card occupies: defenders render in front, occupants
/// behind them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomLocation {
    Front,
    Back,
}

/// Which side of the arena an item card is displayed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemSlot {
    Left,
    Right,
}

/// Where a renderable belongs. Every in-play object has exactly one current
/// position at any time; transitions between positions are the only way an
/// object moves.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Position {
    /// Not visible: snapped to origin, owned by no container.
    Offscreen,
    /// A room slot. `room_id: None` is the unspecified-room placeholder used
    /// in card release positions, to be substituted with the play target.
    Room {
        room_id: Option<RoomId>,
        location: RoomLocation,
    },
    Item { slot: ItemSlot },
    /// The staging area where cards pause while their effects resolve.
    Staging,
    Hand { owner: PlayerName },
    Deck { owner: PlayerName },
    Discard { owner: PlayerName },
    Scored { owner: PlayerName },
    /// The raid participant lineup.
    Raid,
    /// The fullscreen card browser.
    Browser,
}

impl Position {
    /// True for room positions whose room id has not been filled in yet.
    pub fn is_unspecified_room(&self) -> bool {
        matches!(self, Position::Room { room_id: None, .. })
    }
}

/// A [Position] plus sorting keys controlling ordering among siblings within
/// the same container. Containers sort ascending by `(sorting_key,
/// sorting_subkey)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectPosition {
    pub position: Position,
    pub sorting_key: u32,
    pub sorting_subkey: u32,
}

impl ObjectPosition {
    pub fn new(position: Position) -> Self {
        Self { position, sorting_key: 0, sorting_subkey: 0 }
    }

    pub fn with_sorting_key(position: Position, sorting_key: u32) -> Self {
        Self { position, sorting_key, sorting_subkey: 0 }
    }
}

impl From<Position> for ObjectPosition {
    fn from(position: Position) -> Self {
        Self::new(position)
    }
}
