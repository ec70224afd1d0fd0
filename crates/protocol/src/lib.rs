//! Wire-level vocabulary shared by the client core and the server protocol.
//!
//! This crate is pure data: typed actions (client → server), typed commands
//! (server → client), object positions, declarative interface nodes, and the
//! view structs carried by full-sync commands. No behavior lives here beyond
//! small constructors and accessors; the interesting logic is in `runtime`,
//! `scene`, and `elements`.

pub mod actions;
pub mod assets;
pub mod commands;
pub mod ids;
pub mod node;
pub mod positions;
pub mod views;

pub use actions::{Action, ActionTag, CardTarget, PlayCardAction, StandardAction};
pub use assets::{ProjectileAddress, SpriteAddress};
pub use commands::{
    Command, CommandList, CreateCardCommand, DelayCommand, DestroyCardCommand,
    FireProjectileCommand, GameRequest, MoveGameObjectCommand, PanelAddress,
    RenderInterfaceCommand, TogglePanelCommand, UpdateInterfaceElementCommand, VisitRoomCommand,
};
pub use ids::{CardId, GameId, GameObjectId, PlayerId, PlayerName, RoomId};
pub use node::{Dimension, DimensionUnit, EventHandlers, FlexAlign, FlexJustify, Node, NodeKind, Style};
pub use positions::{ItemSlot, ObjectPosition, Position, RoomLocation};
pub use views::{CardView, GameView, PlayerView};
