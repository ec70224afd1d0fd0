//! In-process game service for offline mode.
//!
//! Serves a minimal single-player game without a server: the connect stream
//! delivers an initial full sync, and each action gets a plausible
//! authoritative response. Useful for frontend development and headless
//! smoke runs; real rules live on the real server.

use std::sync::Mutex;

use async_trait::async_trait;
use protocol::{
    Action, CardId, CardView, Command, CommandList, CreateCardCommand, GameObjectId, GameRequest,
    GameView, ItemSlot, MoveGameObjectCommand, ObjectPosition, PlayerId, PlayerName, PlayerView,
    Position, RoomLocation, SpriteAddress, VisitRoomCommand,
};
use runtime::{CommandStream, GameService, ServiceError};
use tokio::sync::mpsc;
use tracing::info;

const OPENING_HAND_SIZE: u32 = 5;
const STARTING_ACTIONS: u32 = 3;
const STARTING_MANA: u32 = 5;

struct OfflineGame {
    next_card: u32,
    action_points: u32,
    mana: u32,
    raid_active: bool,
}

impl OfflineGame {
    fn new() -> Self {
        Self {
            next_card: 1,
            action_points: STARTING_ACTIONS,
            mana: STARTING_MANA,
            raid_active: false,
        }
    }

    fn deal(&mut self, position: Position) -> CardView {
        let id = CardId::new(self.next_card);
        self.next_card += 1;
        CardView {
            id,
            title: Some(format!("Incantation {}", id.0)),
            revealed: true,
            image: Some(SpriteAddress::new(format!("cards/incantation_{}", id.0 % 8))),
            // Alternate between room schemes and items so play targeting is
            // exercised offline too.
            release_position: Some(ObjectPosition::new(if id.0 % 2 == 0 {
                Position::Room { room_id: None, location: RoomLocation::Back }
            } else {
                Position::Item { slot: ItemSlot::Left }
            })),
            position: ObjectPosition::with_sorting_key(position, id.0),
        }
    }

    fn counters(&self) -> PlayerView {
        PlayerView {
            mana: Some(self.mana),
            action_points: Some(self.action_points),
            score: Some(0),
            can_act: Some(true),
        }
    }

    fn spend(&mut self) {
        self.action_points = self.action_points.saturating_sub(1);
        if self.action_points == 0 {
            // A real server would pass the turn; offline just refills.
            self.action_points = STARTING_ACTIONS;
        }
    }

    fn counters_update(&self) -> Command {
        Command::RenderGame(GameView {
            user: Some(self.counters()),
            opponent: None,
            cards: Vec::new(),
            raid_active: self.raid_active,
        })
    }
}

/// [`GameService`] implementation backed by in-process state.
pub struct OfflineService {
    game: Mutex<OfflineGame>,
    /// Keeps the connect stream open for the lifetime of the service.
    stream: Mutex<Option<mpsc::Sender<Result<CommandList, ServiceError>>>>,
}

impl OfflineService {
    pub fn new() -> Self {
        Self { game: Mutex::new(OfflineGame::new()), stream: Mutex::new(None) }
    }

    fn initial_sync(&self) -> CommandList {
        let mut game = self.game.lock().expect("offline game lock");
        let cards = (0..OPENING_HAND_SIZE)
            .map(|_| game.deal(Position::Hand { owner: PlayerName::User }))
            .collect();
        CommandList::new(vec![Command::RenderGame(GameView {
            user: Some(game.counters()),
            opponent: Some(PlayerView {
                mana: Some(STARTING_MANA),
                action_points: Some(STARTING_ACTIONS),
                score: Some(0),
                can_act: Some(false),
            }),
            cards,
            raid_active: false,
        })])
    }
}

impl Default for OfflineService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GameService for OfflineService {
    async fn connect(&self, player_id: PlayerId) -> Result<CommandStream, ServiceError> {
        info!(target: "client::offline", ?player_id, "offline session connected");
        let (tx, rx) = mpsc::channel(8);
        tx.send(Ok(self.initial_sync()))
            .await
            .map_err(|_| ServiceError::Transport("offline stream closed".into()))?;
        *self.stream.lock().expect("offline stream lock") = Some(tx);
        Ok(rx)
    }

    async fn perform_action(&self, request: GameRequest) -> Result<CommandList, ServiceError> {
        let mut game = self.game.lock().expect("offline game lock");
        Ok(match request.action {
            Action::Standard(_) => CommandList::default(),
            Action::DrawCard => {
                game.spend();
                let card = game.deal(Position::Deck { owner: PlayerName::User });
                let id = GameObjectId::Card(card.id);
                let hand = ObjectPosition::with_sorting_key(
                    Position::Hand { owner: PlayerName::User },
                    card.id.0,
                );
                CommandList::new(vec![
                    Command::CreateCard(CreateCardCommand {
                        position: card.position.clone(),
                        card,
                        animate: false,
                    }),
                    Command::MoveGameObject(MoveGameObjectCommand {
                        id,
                        position: hand,
                        animate: true,
                    }),
                    game.counters_update(),
                ])
            }
            Action::PlayCard(_) => {
                game.spend();
                // The optimistic update already moved the card; confirm the
                // new counters.
                CommandList::new(vec![game.counters_update()])
            }
            Action::GainMana => {
                game.spend();
                game.mana += 1;
                CommandList::new(vec![game.counters_update()])
            }
            Action::InitiateRaid { room_id } => {
                game.spend();
                game.raid_active = true;
                CommandList::new(vec![
                    Command::VisitRoom(VisitRoomCommand {
                        initiator: PlayerName::User,
                        room_id,
                    }),
                    game.counters_update(),
                ])
            }
            Action::LevelUpRoom { room_id } => {
                game.spend();
                CommandList::new(vec![
                    Command::VisitRoom(VisitRoomCommand {
                        initiator: PlayerName::User,
                        room_id,
                    }),
                    game.counters_update(),
                ])
            }
        })
    }
}
