//! User intents sent toward the server.

use serde::{Deserialize, Serialize};

use crate::commands::CommandList;
use crate::ids::{CardId, RoomId};

/// A server-defined interface action. The payload is opaque to the client and
/// round-trips to the server unchanged; `None` marks a pure local UI action
/// which never touches the network. The `update` command list is the action's
/// optimistic prediction, applied locally before the server responds.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StandardAction {
    pub payload: Option<serde_json::Value>,
    pub update: Option<CommandList>,
}

impl StandardAction {
    /// True when this action has no payload to transmit.
    pub fn is_local(&self) -> bool {
        self.payload.is_none()
    }
}

/// Target for playing a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardTarget {
    Room(RoomId),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayCardAction {
    pub card_id: CardId,
    pub target: Option<CardTarget>,
}

/// A single intent issued by the user. Exactly one variant is populated per
/// instance; actions are consumed exactly once by the session worker.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, strum::EnumDiscriminants)]
#[strum_discriminants(name(ActionTag))]
#[strum_discriminants(derive(Hash, strum::Display))]
pub enum Action {
    Standard(StandardAction),
    DrawCard,
    PlayCard(PlayCardAction),
    GainMana,
    InitiateRaid { room_id: RoomId },
    LevelUpRoom { room_id: RoomId },
}

impl Action {
    pub fn tag(&self) -> ActionTag {
        ActionTag::from(self)
    }

    pub fn play_card(card_id: CardId, target: Option<CardTarget>) -> Self {
        Self::PlayCard(PlayCardAction { card_id, target })
    }
}

impl From<StandardAction> for Action {
    fn from(action: StandardAction) -> Self {
        Self::Standard(action)
    }
}

impl From<PlayCardAction> for Action {
    fn from(action: PlayCardAction) -> Self {
        Self::PlayCard(action)
    }
}
