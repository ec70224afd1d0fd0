//! Optimistic update synthesis.
//!
//! Before a request leaves for the server, the client predicts its visual
//! effect so interaction feels immediate: action points tick down, a played
//! card travels to its release position, a drawn card rises face-down from
//! the deck. Predictions are expressed as ordinary command lists executed
//! through the same entry point as authoritative commands.
//!
//! Predictions are never revalidated: a failed request does not roll them
//! back. The divergence window closes at the next full sync.

use protocol::{
    Action, CardTarget, CardView, Command, CommandList, CreateCardCommand, GameObjectId,
    MoveGameObjectCommand, ObjectPosition, PlayCardAction, PlayerName, Position, VisitRoomCommand,
};

use crate::api::errors::{Result, SessionError};
use crate::session::immediate;
use crate::session::state::ClientState;

/// Sorting key placing optimistic objects after everything the server has
/// assigned keys to.
const RELEASE_SORTING_KEY: u32 = 100;

/// Computes the optimistic command list for `action`, applying counter-level
/// predictions (action points, mana) directly to `state`. Returns `None`
/// when the action has no visual prediction.
pub(crate) fn predict(state: &mut ClientState, action: &Action) -> Result<Option<CommandList>> {
    Ok(match action {
        Action::Standard(standard) => standard
            .update
            .as_ref()
            .map(|update| CommandList::new(immediate::deferred(update))),
        Action::DrawCard => {
            state.spend_action_point();
            Some(draw_prediction(state))
        }
        Action::PlayCard(play) => {
            let position = release_position(state, play)?;
            state.spend_action_point();
            Some(CommandList::new(vec![Command::MoveGameObject(MoveGameObjectCommand {
                id: GameObjectId::Card(play.card_id),
                position,
                animate: true,
            })]))
        }
        Action::GainMana => {
            state.spend_action_point();
            if let Some(mana) = state.user.mana {
                state.user.mana = Some(mana + 1);
            }
            None
        }
        Action::InitiateRaid { room_id } | Action::LevelUpRoom { room_id } => {
            state.spend_action_point();
            Some(CommandList::new(vec![Command::VisitRoom(VisitRoomCommand {
                initiator: PlayerName::User,
                room_id: *room_id,
            })]))
        }
    })
}

/// A face-down placeholder card rising from the user's deck into their hand.
/// The server's next authoritative card retires it.
fn draw_prediction(state: &mut ClientState) -> CommandList {
    let card_id = state.allocate_placeholder();
    state.optimistic_card = Some(card_id);
    let id = GameObjectId::Card(card_id);

    CommandList::new(vec![
        Command::CreateCard(CreateCardCommand {
            card: CardView::hidden(
                card_id,
                ObjectPosition::with_sorting_key(
                    Position::Deck { owner: PlayerName::User },
                    RELEASE_SORTING_KEY,
                ),
            ),
            position: ObjectPosition::with_sorting_key(
                Position::Deck { owner: PlayerName::User },
                RELEASE_SORTING_KEY,
            ),
            animate: false,
        }),
        Command::MoveGameObject(MoveGameObjectCommand {
            id,
            position: ObjectPosition::with_sorting_key(
                Position::Hand { owner: PlayerName::User },
                RELEASE_SORTING_KEY,
            ),
            animate: true,
        }),
    ])
}

/// Resolves the destination of a played card from its configured release
/// position. Room-slot release positions carry an unspecified room id; the
/// play target fills it in, and a missing target is a precondition failure.
fn release_position(state: &ClientState, play: &PlayCardAction) -> Result<ObjectPosition> {
    let view = state.scene.card_view(play.card_id)?;
    let mut release = view.release_position.clone().unwrap_or_else(|| {
        ObjectPosition::with_sorting_key(Position::Staging, RELEASE_SORTING_KEY)
    });

    if release.position.is_unspecified_room() {
        let Some(CardTarget::Room(target)) = play.target else {
            return Err(SessionError::NoRoomTarget { card_id: play.card_id });
        };
        if let Position::Room { room_id, .. } = &mut release.position {
            *room_id = Some(target);
        }
    }

    Ok(release)
}
