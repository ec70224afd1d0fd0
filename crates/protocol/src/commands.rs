//! Server-issued instructions executed by the client.
//!
//! A [CommandList] is the animation/state script for one update: order is
//! significant and preserved end-to-end, each command fully settled before
//! the next begins.

use serde::{Deserialize, Serialize};

use crate::actions::Action;
use crate::assets::ProjectileAddress;
use crate::ids::{CardId, GameId, GameObjectId, PlayerId, PlayerName, RoomId};
use crate::node::Node;
use crate::positions::ObjectPosition;
use crate::views::{CardView, GameView};

/// Opaque address naming an interface panel. The server mints these; the
/// client only compares and echoes them.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PanelAddress(pub String);

impl PanelAddress {
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreateCardCommand {
    pub card: CardView,
    pub position: ObjectPosition,
    pub animate: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoveGameObjectCommand {
    pub id: GameObjectId,
    pub position: ObjectPosition,
    pub animate: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestroyCardCommand {
    pub card_id: CardId,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FireProjectileCommand {
    pub source: GameObjectId,
    pub target: GameObjectId,
    pub projectile: ProjectileAddress,
}

/// Replaces the main controls bar. `None` clears it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderInterfaceCommand {
    pub main_controls: Option<Node>,
}

/// Updates the contents of a single open panel. `None` clears the panel's
/// rendered tree while leaving it open.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UpdateInterfaceElementCommand {
    pub address: PanelAddress,
    pub node: Option<Node>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TogglePanelCommand {
    Open(PanelAddress),
    Close(PanelAddress),
    CloseAll,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitRoomCommand {
    pub initiator: PlayerName,
    pub room_id: RoomId,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelayCommand {
    pub milliseconds: u64,
}

/// One server-issued effect.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Full resync of the game's visual state.
    RenderGame(GameView),
    CreateCard(CreateCardCommand),
    MoveGameObject(MoveGameObjectCommand),
    DestroyCard(DestroyCardCommand),
    FireProjectile(FireProjectileCommand),
    RenderInterface(RenderInterfaceCommand),
    UpdateInterfaceElement(UpdateInterfaceElementCommand),
    TogglePanel(TogglePanelCommand),
    VisitRoom(VisitRoomCommand),
    EndRaid,
    Delay(DelayCommand),
}

/// An ordered sequence of commands.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CommandList {
    pub commands: Vec<Command>,
}

impl CommandList {
    pub fn new(commands: Vec<Command>) -> Self {
        Self { commands }
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl From<Vec<Command>> for CommandList {
    fn from(commands: Vec<Command>) -> Self {
        Self { commands }
    }
}

/// A request/response call to the server: the action to perform, the player
/// performing it, and the panels the client currently has open (so the server
/// can refresh their contents in the same response).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameRequest {
    pub action: Action,
    pub player_id: PlayerId,
    pub game_id: Option<GameId>,
    pub open_panels: Vec<PanelAddress>,
}
