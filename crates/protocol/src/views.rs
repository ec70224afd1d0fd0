//! View structs carried by full-sync commands.

use serde::{Deserialize, Serialize};

use crate::assets::SpriteAddress;
use crate::ids::{CardId, PlayerName};
use crate::positions::ObjectPosition;

/// One player's public counters as the server wants them displayed. Fields
/// are optional so incremental updates can leave values untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub mana: Option<u32>,
    pub action_points: Option<u32>,
    pub score: Option<u32>,
    pub can_act: Option<bool>,
}

/// The server's description of one card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardView {
    pub id: CardId,
    /// Title shown when revealed; hidden cards have no title.
    pub title: Option<String>,
    pub revealed: bool,
    pub image: Option<SpriteAddress>,
    /// Where this card should travel when played from hand. Room-slot release
    /// positions use the unspecified-room placeholder, filled in with the play
    /// target at play time.
    pub release_position: Option<ObjectPosition>,
    pub position: ObjectPosition,
}

impl CardView {
    pub fn hidden(id: CardId, position: ObjectPosition) -> Self {
        Self {
            id,
            title: None,
            revealed: false,
            image: None,
            release_position: None,
            position,
        }
    }
}

/// Full description of the game's visual state.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GameView {
    pub user: Option<PlayerView>,
    pub opponent: Option<PlayerView>,
    pub cards: Vec<CardView>,
    pub raid_active: bool,
}
