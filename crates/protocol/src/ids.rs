//! Identifier types for players, games, rooms, and renderable objects.

use std::fmt;

use serde::{Deserialize, Serialize};

/// High bit reserved for client-local placeholder cards created by optimistic
/// updates before the server has named the real card.
const PLACEHOLDER_BIT: u32 = 1 << 31;

/// Identifies a card within a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    /// Allocates a client-local placeholder id. Placeholder cards never appear
    /// in server commands; they exist only between an optimistic update and
    /// the authoritative response that retires them.
    pub fn placeholder(index: u32) -> Self {
        Self(PLACEHOLDER_BIT | index)
    }

    pub fn is_placeholder(self) -> bool {
        self.0 & PLACEHOLDER_BIT != 0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_placeholder() {
            write!(f, "placeholder#{}", self.0 & !PLACEHOLDER_BIT)
        } else {
            write!(f, "card#{}", self.0)
        }
    }
}

/// Server-assigned identifier for a connected player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u64);

/// Server-assigned identifier for an ongoing game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameId(pub u64);

/// A player from the perspective of this client: either the viewing user or
/// their opponent. All owner fields in positions and views use this
/// client-relative naming.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerName {
    User,
    Opponent,
}

impl PlayerName {
    pub fn opponent(self) -> Self {
        match self {
            PlayerName::User => PlayerName::Opponent,
            PlayerName::Opponent => PlayerName::User,
        }
    }
}

/// Identifies one of the arena rooms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RoomId {
    Vault,
    Sanctum,
    Crypts,
    RoomA,
    RoomB,
    RoomC,
    RoomD,
    RoomE,
}

/// Identifies a renderable target: a card, or one of the named non-card
/// containers that can also be animated (a player's deck or hand).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameObjectId {
    Card(CardId),
    Deck(PlayerName),
    Hand(PlayerName),
}

impl From<CardId> for GameObjectId {
    fn from(id: CardId) -> Self {
        Self::Card(id)
    }
}
